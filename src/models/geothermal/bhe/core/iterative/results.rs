use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, TemperatureInterval, ThermodynamicTemperature};

use crate::{
    models::geothermal::bhe::core::{BoreholeResistances, DepthBounds},
    support::units::LinearHeatRate,
};

/// How the depth search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizingStatus {
    /// Both fluid limits hold at the reported depth.
    Converged,
    /// The evaluation budget ran out; the last evaluated depth is reported.
    MaxIterationsReached,
}

/// Outcome of [`size_iteratively`](super::size_iteratively).
///
/// All temperatures refer to the reported depth. Depths are per borehole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterativeResults {
    pub status: SizingStatus,

    /// Number of depths evaluated.
    pub iterations: usize,

    pub required_depth: Length,
    pub fluid_temperature_min: ThermodynamicTemperature,
    pub fluid_temperature_max: ThermodynamicTemperature,

    /// Undisturbed ground temperature averaged over the depth.
    pub mean_ground_temperature: ThermodynamicTemperature,

    /// Ground temperature change from the net annual load at the horizon.
    pub long_term_shift: TemperatureInterval,

    pub resistances: BoreholeResistances,
    pub g_long_term: f64,
    pub g_peak: f64,

    /// Net annual extraction per metre of one borehole.
    pub heat_extraction_rate: LinearHeatRate,

    /// Borehole wall temperature at mid-month over the first year, January first.
    pub monthly_temperatures: [ThermodynamicTemperature; 12],

    /// Bounds the search was clamped to.
    pub depth_bounds: DepthBounds,
}

impl IterativeResults {
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == SizingStatus::Converged
    }

    /// Whether the reported depth sits on a depth bound.
    ///
    /// A converged result on the lower bound is oversized; a non-converged
    /// one on the upper bound needs more boreholes.
    #[must_use]
    pub fn at_depth_limit(&self) -> bool {
        self.depth_bounds.is_limit(self.required_depth)
    }
}
