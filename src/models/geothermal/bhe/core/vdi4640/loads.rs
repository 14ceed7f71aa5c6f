use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Power, Time},
    time::hour,
};

use crate::models::geothermal::bhe::core::ModeLoad;

/// Hours the base load is spread over.
const HOURS_PER_YEAR: f64 = 8760.0;

/// Hours the periodic load is spread over, one flat month.
const HOURS_PER_MONTH: f64 = 730.0;

/// One value per characteristic load duration.
///
/// The base load acts for ten years, the periodic load for one month, and the
/// peak load for six hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timescales<T> {
    pub base: T,
    pub periodic: T,
    pub peak: T,
}

impl<T> Timescales<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Timescales<U> {
        Timescales {
            base: f(self.base),
            periodic: f(self.periodic),
            peak: f(self.peak),
        }
    }

    pub fn zip<U>(self, other: Timescales<U>) -> Timescales<(T, U)> {
        Timescales {
            base: (self.base, other.base),
            periodic: (self.periodic, other.periodic),
            peak: (self.peak, other.peak),
        }
    }

    pub fn into_array(self) -> [T; 3] {
        [self.base, self.periodic, self.peak]
    }
}

/// Splits a mode's load into the heat exchanged with the ground at each timescale.
///
/// `factor` is the heat pump's extraction or injection factor.
pub(super) fn ground_loads(load: &ModeLoad, factor: f64) -> Timescales<Power> {
    let ground_energy = load.annual_energy * factor;
    Timescales {
        base: ground_energy / Time::new::<hour>(HOURS_PER_YEAR),
        periodic: ground_energy * load.monthly_factors.max() / Time::new::<hour>(HOURS_PER_MONTH),
        peak: load.peak_power * factor,
    }
}
