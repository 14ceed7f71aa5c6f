//! Sizing inputs shared by both sizers.

mod design;
mod geometry;
mod limits;
mod loads;

pub use design::BoreholeDesign;
pub use geometry::{BoreholeGeometry, InnerPipe, PipeConfiguration};
pub use limits::{DepthBounds, FluidTemperatureLimits};
pub use loads::{HeatPump, LoadProfile, ModeLoad, MonthlyFactors};
