use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::models::geothermal::bhe::core::SizingError;

/// Allowed circulating-fluid temperature window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidTemperatureLimits {
    pub min: ThermodynamicTemperature,
    pub max: ThermodynamicTemperature,
}

impl FluidTemperatureLimits {
    #[must_use]
    pub fn new(min: ThermodynamicTemperature, max: ThermodynamicTemperature) -> Self {
        Self { min, max }
    }

    /// Creates limits from values in degrees Celsius.
    #[must_use]
    pub fn celsius(min: f64, max: f64) -> Self {
        Self::new(
            ThermodynamicTemperature::new::<degree_celsius>(min),
            ThermodynamicTemperature::new::<degree_celsius>(max),
        )
    }

    pub(in crate::models::geothermal::bhe::core) fn validate(&self) -> Result<(), SizingError> {
        if self.min < self.max {
            Ok(())
        } else {
            Err(SizingError::InvalidLimits {
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Interval the iterative depth search is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthBounds {
    pub min: Length,
    pub max: Length,
}

impl Default for DepthBounds {
    fn default() -> Self {
        Self {
            min: Length::new::<meter>(20.0),
            max: Length::new::<meter>(300.0),
        }
    }
}

impl DepthBounds {
    #[must_use]
    pub fn clamp(&self, depth: Length) -> Length {
        if depth < self.min {
            self.min
        } else if depth > self.max {
            self.max
        } else {
            depth
        }
    }

    /// Whether `depth` sits on either bound.
    #[must_use]
    pub fn is_limit(&self, depth: Length) -> bool {
        depth <= self.min || depth >= self.max
    }

    pub(in crate::models::geothermal::bhe::core) fn validate(&self) -> Result<(), SizingError> {
        if self.min.get::<meter>() > 0.0 && self.min <= self.max {
            Ok(())
        } else {
            Err(SizingError::InvalidDepthBounds {
                min: self.min,
                max: self.max,
            })
        }
    }
}
