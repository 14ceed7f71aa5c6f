use uom::si::{f64::Time, time::second};

/// Seconds in one year of 365.25 days.
///
/// This is the only calendar convention used in the crate.
pub const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;

/// Creates a [`Time`] spanning the given number of 365.25-day years.
#[must_use]
pub fn years(value: f64) -> Time {
    Time::new::<second>(value * SECONDS_PER_YEAR)
}
