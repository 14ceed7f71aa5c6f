use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, ThermalConductivity};

/// Borehole dimensions and pipe layout.
///
/// Boreholes in a field are treated as thermally independent; the load is
/// split evenly across `count` of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoreholeGeometry {
    pub diameter: Length,
    /// Starting depth for the iterative sizer, evaluation depth for VDI 4640.
    pub depth: Length,
    pub configuration: PipeConfiguration,
    pub count: u32,
}

impl BoreholeGeometry {
    #[must_use]
    pub fn radius(&self) -> Length {
        self.diameter / 2.0
    }
}

/// Pipe arrangement inside the borehole.
///
/// Deserializes from a `kind` tag and rejects unknown tags.
///
/// ```
/// use twine_geothermal::models::geothermal::bhe::PipeConfiguration;
///
/// let layout: PipeConfiguration = toml::from_str(r#"kind = "double-u""#).unwrap();
/// assert_eq!(layout, PipeConfiguration::DoubleU);
/// assert!(toml::from_str::<PipeConfiguration>(r#"kind = "triple-u""#).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PipeConfiguration {
    /// One U-tube, two legs.
    SingleU,
    /// Two U-tubes, four legs.
    DoubleU,
    /// Concentric pipes; the outer pipe is described by the design's
    /// [`PipeProperties`](crate::support::borehole::PipeProperties).
    Coaxial { inner_pipe: InnerPipe },
}

impl PipeConfiguration {
    /// The tag this configuration is serialized under.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SingleU => "single-u",
            Self::DoubleU => "double-u",
            Self::Coaxial { .. } => "coaxial",
        }
    }
}

/// Inner pipe of a coaxial probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InnerPipe {
    pub outer_diameter: Length,
    pub wall_thickness: Length,
    pub conductivity: ThermalConductivity,
}

impl InnerPipe {
    #[must_use]
    pub fn inner_diameter(&self) -> Length {
        self.outer_diameter - 2.0 * self.wall_thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::millimeter, thermal_conductivity::watt_per_meter_kelvin};

    #[test]
    fn kinds_match_serialized_tags() {
        let coaxial = PipeConfiguration::Coaxial {
            inner_pipe: InnerPipe {
                outer_diameter: Length::new::<millimeter>(40.0),
                wall_thickness: Length::new::<millimeter>(3.7),
                conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.42),
            },
        };

        for layout in [PipeConfiguration::SingleU, PipeConfiguration::DoubleU, coaxial] {
            let text = toml::to_string(&layout).unwrap();
            assert!(text.contains(&format!("kind = \"{}\"", layout.kind())), "{text}");

            let back: PipeConfiguration = toml::from_str(&text).unwrap();
            assert_eq!(back, layout);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = toml::from_str::<PipeConfiguration>(r#"kind = "single""#).unwrap_err();
        assert!(err.to_string().contains("single"), "{err}");
    }

    #[test]
    fn inner_pipe_bore() {
        let pipe = InnerPipe {
            outer_diameter: Length::new::<millimeter>(40.0),
            wall_thickness: Length::new::<millimeter>(3.7),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.42),
        };
        assert_relative_eq!(
            pipe.inner_diameter().get::<millimeter>(),
            32.6,
            epsilon = 1e-9
        );
    }
}
