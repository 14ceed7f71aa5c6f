use serde::{Deserialize, Serialize};
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{Length, ThermalConductivity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    volume_rate::cubic_meter_per_second,
    volumetric_heat_capacity::joule_per_cubic_meter_kelvin,
};

use crate::{
    models::geothermal::bhe::core::{BoreholeResistances, GeometryError, SizingError},
    support::{
        borehole::{FluidProperties, GroundProperties, PipeProperties},
        constraint::StrictlyPositive,
    },
};

use super::{BoreholeGeometry, LoadProfile, PipeConfiguration};

/// Complete description of a borehole heat exchanger to size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoreholeDesign {
    pub ground: GroundProperties,
    pub borehole: BoreholeGeometry,
    /// U-tube legs, or the outer pipe of a coaxial probe.
    pub pipe: PipeProperties,
    pub grout_conductivity: ThermalConductivity,
    pub fluid: FluidProperties,
    pub loads: LoadProfile,
}

impl BoreholeDesign {
    /// Checks every input the sizers rely on.
    ///
    /// Both sizers call this before doing any work.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, geometry first. A layout whose
    /// borehole or leg-to-leg resistance comes out non-positive is reported
    /// as [`GeometryError::NonPositiveResistance`] once the thermal
    /// properties are known to be valid.
    pub fn validate(&self) -> Result<(), SizingError> {
        self.validate_geometry()?;
        self.validate_thermal()?;
        self.validate_resistances()?;
        self.loads.validate()
    }

    fn validate_geometry(&self) -> Result<(), GeometryError> {
        let borehole = &self.borehole;
        let pipe = &self.pipe;

        positive("borehole diameter", borehole.diameter)?;
        positive("borehole depth", borehole.depth)?;
        if borehole.count == 0 {
            return Err(GeometryError::NoBoreholes);
        }

        positive("pipe outer diameter", pipe.outer_diameter)?;
        positive("pipe wall thickness", pipe.wall_thickness)?;
        bore_remains("pipe", pipe.outer_diameter, pipe.wall_thickness)?;

        match borehole.configuration {
            PipeConfiguration::SingleU | PipeConfiguration::DoubleU => {
                let min = pipe.outer_diameter;
                let max = borehole.diameter - pipe.outer_diameter;
                let spacing = pipe.shank_spacing;
                if !(spacing >= min && spacing < max) {
                    return Err(GeometryError::ShankSpacing { spacing, min, max });
                }
            }
            PipeConfiguration::Coaxial { inner_pipe } => {
                fits(pipe.outer_diameter, borehole.diameter)?;
                positive("inner pipe outer diameter", inner_pipe.outer_diameter)?;
                positive("inner pipe wall thickness", inner_pipe.wall_thickness)?;
                bore_remains(
                    "inner pipe",
                    inner_pipe.outer_diameter,
                    inner_pipe.wall_thickness,
                )?;
                fits(inner_pipe.outer_diameter, pipe.inner_diameter())?;
            }
        }

        Ok(())
    }

    fn validate_thermal(&self) -> Result<(), SizingError> {
        let ground = &self.ground;
        let fluid = &self.fluid;

        let mut checks = vec![
            (
                "ground thermal conductivity",
                ground.conductivity.get::<watt_per_meter_kelvin>(),
            ),
            (
                "ground volumetric heat capacity",
                ground
                    .volumetric_heat_capacity
                    .get::<joule_per_cubic_meter_kelvin>(),
            ),
            (
                "pipe thermal conductivity",
                self.pipe.conductivity.get::<watt_per_meter_kelvin>(),
            ),
            (
                "grout thermal conductivity",
                self.grout_conductivity.get::<watt_per_meter_kelvin>(),
            ),
            (
                "fluid thermal conductivity",
                fluid.conductivity.get::<watt_per_meter_kelvin>(),
            ),
            (
                "fluid specific heat capacity",
                fluid
                    .specific_heat_capacity
                    .get::<joule_per_kilogram_kelvin>(),
            ),
            (
                "fluid density",
                fluid.density.get::<kilogram_per_cubic_meter>(),
            ),
            ("fluid viscosity", fluid.viscosity.get::<pascal_second>()),
            (
                "fluid flow rate",
                fluid.flow_rate.get::<cubic_meter_per_second>(),
            ),
        ];
        if let PipeConfiguration::Coaxial { inner_pipe } = self.borehole.configuration {
            checks.push((
                "inner pipe thermal conductivity",
                inner_pipe.conductivity.get::<watt_per_meter_kelvin>(),
            ));
        }

        for (name, value) in checks {
            StrictlyPositive::new(value).map_err(|source| SizingError::InvalidThermalInput {
                name,
                value,
                source,
            })?;
        }
        Ok(())
    }

    fn validate_resistances(&self) -> Result<(), GeometryError> {
        let resistances = BoreholeResistances::for_design(self);
        for (term, value) in [
            ("borehole", resistances.borehole),
            ("internal", resistances.internal),
        ] {
            if !(value.value > 0.0) {
                return Err(GeometryError::NonPositiveResistance { term, value });
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: Length) -> Result<(), GeometryError> {
    if value.get::<meter>() > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::NonPositive { name, value })
    }
}

fn bore_remains(
    name: &'static str,
    outer_diameter: Length,
    wall_thickness: Length,
) -> Result<(), GeometryError> {
    if outer_diameter > 2.0 * wall_thickness {
        Ok(())
    } else {
        Err(GeometryError::WallTooThick {
            name,
            outer_diameter,
            wall_thickness,
        })
    }
}

fn fits(pipe_diameter: Length, bore_diameter: Length) -> Result<(), GeometryError> {
    if pipe_diameter < bore_diameter {
        Ok(())
    } else {
        Err(GeometryError::PipeDoesNotFit {
            pipe_diameter,
            bore_diameter,
        })
    }
}
