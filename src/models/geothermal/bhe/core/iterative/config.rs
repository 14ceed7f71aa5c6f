use serde::{Deserialize, Serialize};

use crate::{
    models::geothermal::bhe::core::{DepthBounds, FluidTemperatureLimits, SizingError},
    support::constraint::{ConstraintError, StrictlyPositive},
};

/// Settings for [`size_iteratively`](super::size_iteratively).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IterativeConfig {
    /// Fluid temperatures the design must stay within.
    pub limits: FluidTemperatureLimits,

    /// Horizon of the long-term response, in years of 365.25 days.
    pub simulation_years: f64,

    /// Maximum number of depth evaluations.
    pub max_iterations: usize,

    pub depth_bounds: DepthBounds,
}

impl Default for IterativeConfig {
    fn default() -> Self {
        Self {
            limits: FluidTemperatureLimits::celsius(-2.0, 15.0),
            simulation_years: 25.0,
            max_iterations: 20,
            depth_bounds: DepthBounds::default(),
        }
    }
}

impl IterativeConfig {
    pub(in crate::models::geothermal::bhe::core) fn validate(&self) -> Result<(), SizingError> {
        self.limits.validate()?;

        StrictlyPositive::new(self.simulation_years).map_err(|source| {
            SizingError::InvalidConfig {
                name: "simulation years",
                value: self.simulation_years,
                source,
            }
        })?;

        if self.max_iterations == 0 {
            return Err(SizingError::InvalidConfig {
                name: "max iterations",
                value: 0.0,
                source: ConstraintError::Zero,
            });
        }

        self.depth_bounds.validate()
    }
}
