//! Borehole heat exchanger sizing.
//!
//! Two sizers share one input description, [`BoreholeDesign`]:
//!
//! - [`size_iteratively`] searches for the depth at which the circulating
//!   fluid stays inside a temperature window over the simulation horizon.
//! - [`size_vdi4640`] computes the depth in closed form from a base, a
//!   periodic, and a peak load, each seen by the ground at its own timescale.
//!
//! Both validate the whole design before evaluating anything and are pure
//! functions of their inputs.

mod error;
mod input;
mod iterative;
mod resistances;
mod vdi4640;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{GeometryError, SizingError};
pub use input::{
    BoreholeDesign, BoreholeGeometry, DepthBounds, FluidTemperatureLimits, HeatPump, InnerPipe,
    LoadProfile, ModeLoad, MonthlyFactors, PipeConfiguration,
};
pub use iterative::{
    DEPTH_SENSITIVITY, IterativeConfig, IterativeResults, SizingStatus, size_iteratively,
};
pub use resistances::BoreholeResistances;
pub use vdi4640::{
    DesignCase, ModeBreakdown, Timescales, Vdi4640Config, Vdi4640Results, size_vdi4640,
};
