use serde::{Deserialize, Serialize};
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::{
    models::geothermal::bhe::core::{FluidTemperatureLimits, SizingError},
    support::{constraint::NonNegative, units::LinearThermalResistance},
};

/// Settings for [`size_vdi4640`](super::size_vdi4640).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vdi4640Config {
    /// Heat pump exit temperatures the design must respect.
    pub limits: FluidTemperatureLimits,

    /// Design spread between supply and return.
    ///
    /// Half of it is taken off the back-computed exit temperature in both modes.
    pub fluid_delta_t: TemperatureInterval,

    /// Borehole resistance `R_b` to size with.
    ///
    /// When `None`, the effective resistance of the design's pipe
    /// configuration is used.
    pub borehole_resistance: Option<LinearThermalResistance>,
}

impl Default for Vdi4640Config {
    fn default() -> Self {
        Self {
            limits: FluidTemperatureLimits::celsius(-2.0, 35.0),
            fluid_delta_t: TemperatureInterval::new::<delta_kelvin>(3.0),
            borehole_resistance: None,
        }
    }
}

impl Vdi4640Config {
    pub(in crate::models::geothermal::bhe::core) fn validate(&self) -> Result<(), SizingError> {
        self.limits.validate()?;

        let spread = self.fluid_delta_t.get::<delta_kelvin>();
        NonNegative::new(spread).map_err(|source| SizingError::InvalidConfig {
            name: "fluid temperature spread",
            value: spread,
            source,
        })?;

        if let Some(resistance) = self.borehole_resistance {
            NonNegative::new(resistance.value).map_err(|source| SizingError::InvalidConfig {
                name: "borehole resistance",
                value: resistance.value,
                source,
            })?;
        }
        Ok(())
    }
}
