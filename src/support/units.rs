//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities crossing a public
//! boundary. This module adds what borehole sizing needs beyond [`uom`]:
//!
//! - Per-length quantities: [`LinearThermalResistance`] (K·m/W) and
//!   [`LinearHeatRate`] (W/m), plus the ground [`TemperatureGradient`] (K/m).
//! - The [`TemperatureDifference`] trait for stepping between absolute
//!   temperatures and temperature intervals.
//! - The single calendar convention used everywhere: a year is 365.25 days.
//!
//! ```
//! use twine_geothermal::support::units::{linear_thermal_resistance, years};
//! use uom::si::time::day;
//!
//! let r_b = linear_thermal_resistance(0.1);
//! assert_eq!(r_b.value, 0.1);
//! assert!((years(1.0).get::<day>() - 365.25).abs() < 1e-9);
//! ```

mod quantities;
mod temperature;
mod time;

pub use quantities::{
    LinearHeatRate, LinearThermalResistance, TemperatureGradient, kelvin_per_meter,
    linear_heat_rate, linear_thermal_resistance,
};
pub use temperature::TemperatureDifference;
pub use time::{SECONDS_PER_YEAR, years};
