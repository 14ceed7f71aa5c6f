use std::fmt;

use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Power, TemperatureInterval, ThermodynamicTemperature};

use crate::{
    models::geothermal::bhe::core::BoreholeResistances,
    support::units::LinearThermalResistance,
};

use super::Timescales;

/// Operating mode that sets the design depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesignCase {
    /// The ground must be protected against excessive cooling.
    Heating,
    /// The ground must be protected against overheating.
    Cooling,
}

impl fmt::Display for DesignCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Heating => "heating",
            Self::Cooling => "cooling",
        })
    }
}

/// Sizing detail for one operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeBreakdown {
    /// Heat exchanged with the ground by the whole field.
    pub loads: Timescales<Power>,

    /// Gap between undisturbed ground and the fluid limit of this mode.
    pub reaction_delta_t: TemperatureInterval,

    /// Depth per borehole this mode alone would need.
    pub required_depth: Length,

    /// Temperature drop of each load component at the design depth.
    pub temperature_drops: Timescales<TemperatureInterval>,

    /// Heat pump exit temperature at the design depth.
    pub exit_temperature: ThermodynamicTemperature,
}

/// Outcome of [`size_vdi4640`](super::size_vdi4640).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vdi4640Results {
    pub design_case: DesignCase,

    /// Depth per borehole, the larger of the two mode depths.
    pub required_depth: Length,

    /// `R_b` the depths were computed with.
    pub borehole_resistance: LinearThermalResistance,

    pub resistances: BoreholeResistances,
    pub g_values: Timescales<f64>,
    pub ground_resistances: Timescales<LinearThermalResistance>,
    pub heating: ModeBreakdown,
    pub cooling: ModeBreakdown,
    pub fluid_delta_t: TemperatureInterval,
}

impl Vdi4640Results {
    /// Lowest heat pump exit temperature, reached in heating.
    #[must_use]
    pub fn fluid_temperature_min(&self) -> ThermodynamicTemperature {
        self.heating.exit_temperature
    }

    /// Highest heat pump exit temperature, reached in cooling.
    #[must_use]
    pub fn fluid_temperature_max(&self) -> ThermodynamicTemperature {
        self.cooling.exit_temperature
    }

    /// Breakdown for one mode, typically `results.mode(results.design_case)`.
    #[must_use]
    pub fn mode(&self, case: DesignCase) -> &ModeBreakdown {
        match case {
            DesignCase::Heating => &self.heating,
            DesignCase::Cooling => &self.cooling,
        }
    }
}
