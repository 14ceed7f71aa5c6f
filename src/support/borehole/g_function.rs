//! Ground thermal step response.
//!
//! The g-function relates a constant heat rate per unit borehole length to
//! the temperature change it induces at the borehole wall:
//! `ΔT = (Q/H)·g / (2πλ)`.
//!
//! Three closed-form regimes are selected by the Fourier number
//! `Fo = α·t/H²`:
//!
//! | Regime                          | Range            |
//! |---------------------------------|------------------|
//! | Infinite cylindrical source     | `Fo < 0.01`      |
//! | Linear blend of the two sources | `0.01 ≤ Fo ≤ 10` |
//! | Infinite line source            | `Fo > 10`        |
//!
//! The blend weight `w = clamp((log10(Fo) + 2) / 3, 0, 1)` reproduces the
//! cylindrical source at `Fo = 0.01` and the line source at `Fo = 10`, so the
//! response is continuous across both boundaries.
//!
//! The blend is not monotone in time inside the transition band. The line
//! source is zero until the characteristic time `t_s = H²/(9α)`, which for
//! typical depths lies well inside the band, so the weighted sum can fall
//! as `w` grows. Each pure regime is monotone on its own.
//!
//! ```
//! use twine_geothermal::support::borehole::g_function::finite_line_source;
//! use uom::si::{
//!     diffusion_coefficient::square_meter_per_second,
//!     f64::{DiffusionCoefficient, Length, Time},
//!     length::meter,
//!     time::hour,
//! };
//!
//! let g = finite_line_source(
//!     Time::new::<hour>(6.0),
//!     Length::new::<meter>(100.0),
//!     Length::new::<meter>(0.076),
//!     DiffusionCoefficient::new::<square_meter_per_second>(1.0e-6),
//! );
//! assert!((g - 0.659_49).abs() < 1e-5);
//! ```

mod table;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{DiffusionCoefficient, Length, Power, TemperatureInterval, ThermalConductivity, Time},
    length::meter,
    power::watt,
    temperature_interval::kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    time::second,
};

use crate::support::units::{LinearThermalResistance, linear_thermal_resistance};

pub use table::{GFunctionTable, TABLE_NODES, TABLE_START};

/// Euler–Mascheroni constant, to the precision used by the short-time expansion.
pub const EULER_GAMMA: f64 = 0.577_215_664_9;

/// Fourier number below which the cylindrical source applies alone.
pub const CYLINDRICAL_SOURCE_LIMIT: f64 = 0.01;

/// Fourier number above which the line source applies alone.
pub const LINE_SOURCE_LIMIT: f64 = 10.0;

/// Approximation regime selected by the Fourier number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Regime {
    CylindricalSource,
    Transition,
    LineSource,
}

impl Regime {
    #[must_use]
    pub fn from_fourier(fourier: f64) -> Self {
        if fourier < CYLINDRICAL_SOURCE_LIMIT {
            Self::CylindricalSource
        } else if fourier > LINE_SOURCE_LIMIT {
            Self::LineSource
        } else {
            Self::Transition
        }
    }
}

/// Dimensionless time `Fo = α·t/H²`.
///
/// Returns zero for a non-positive depth.
#[must_use]
pub fn fourier_number(time: Time, depth: Length, diffusivity: DiffusionCoefficient) -> f64 {
    let h = depth.get::<meter>();
    if h <= 0.0 {
        return 0.0;
    }
    diffusivity.get::<square_meter_per_second>() * time.get::<second>() / h.powi(2)
}

/// Characteristic time `t_s = H²/(9α)` of a borehole.
#[must_use]
pub fn characteristic_time(depth: Length, diffusivity: DiffusionCoefficient) -> Time {
    Time::new::<second>(
        depth.get::<meter>().powi(2) / (9.0 * diffusivity.get::<square_meter_per_second>()),
    )
}

/// Weight of the line source in the transition blend.
#[must_use]
pub fn transition_weight(fourier: f64) -> f64 {
    ((fourier.log10() + 2.0) / 3.0).clamp(0.0, 1.0)
}

/// Infinite cylindrical source response, floored at zero.
///
/// Uses `-(ln u + γ)/2` for `u = r²/(4αt) < 0.01` and `-ln(4u)/2` otherwise.
/// Returns zero when `t ≤ 0` or `r ≤ 0`.
#[must_use]
pub fn infinite_cylindrical_source(
    time: Time,
    radius: Length,
    diffusivity: DiffusionCoefficient,
) -> f64 {
    let t = time.get::<second>();
    let r = radius.get::<meter>();
    if t <= 0.0 || r <= 0.0 {
        return 0.0;
    }

    let u = r.powi(2) / (4.0 * diffusivity.get::<square_meter_per_second>() * t);
    let g = if u < 0.01 {
        -0.5 * (u.ln() + EULER_GAMMA)
    } else {
        -0.5 * (4.0 * u).ln()
    };

    g.max(0.0)
}

/// Infinite line source response.
///
/// Zero before the characteristic time, `ln(t/t_s)/2` after it.
#[must_use]
pub fn infinite_line_source(time: Time, depth: Length, diffusivity: DiffusionCoefficient) -> f64 {
    let t = time.get::<second>();
    if t <= 0.0 {
        return 0.0;
    }

    let t_s = characteristic_time(depth, diffusivity).get::<second>();
    if t < t_s {
        return 0.0;
    }
    0.5 * (t / t_s).ln()
}

/// Blended finite line source response at the borehole radius.
///
/// Returns zero when `t ≤ 0` or `H ≤ 0`.
#[must_use]
pub fn finite_line_source(
    time: Time,
    depth: Length,
    radius: Length,
    diffusivity: DiffusionCoefficient,
) -> f64 {
    if time.get::<second>() <= 0.0 || depth.get::<meter>() <= 0.0 {
        return 0.0;
    }

    let fourier = fourier_number(time, depth, diffusivity);
    match Regime::from_fourier(fourier) {
        Regime::CylindricalSource => infinite_cylindrical_source(time, radius, diffusivity),
        Regime::LineSource => infinite_line_source(time, depth, diffusivity),
        Regime::Transition => {
            let w = transition_weight(fourier);
            (1.0 - w) * infinite_cylindrical_source(time, radius, diffusivity)
                + w * infinite_line_source(time, depth, diffusivity)
        }
    }
}

/// Borehole wall temperature change `ΔT = (Q/H)·g / (2πλ)`.
///
/// Positive heat rates raise the temperature. Returns zero when `H ≤ 0` or
/// `λ ≤ 0`.
#[must_use]
pub fn temperature_penalty(
    heat_rate: Power,
    conductivity: ThermalConductivity,
    depth: Length,
    g: f64,
) -> TemperatureInterval {
    let h = depth.get::<meter>();
    let lambda = conductivity.get::<watt_per_meter_kelvin>();
    if h <= 0.0 || lambda <= 0.0 {
        return TemperatureInterval::new::<kelvin>(0.0);
    }

    TemperatureInterval::new::<kelvin>(heat_rate.get::<watt>() / h * g / (2.0 * PI * lambda))
}

/// Ground resistance `g / (2πλ)` associated with a response value.
///
/// Returns zero when `λ ≤ 0`.
#[must_use]
pub fn ground_resistance(g: f64, conductivity: ThermalConductivity) -> LinearThermalResistance {
    let lambda = conductivity.get::<watt_per_meter_kelvin>();
    if lambda <= 0.0 {
        return linear_thermal_resistance(0.0);
    }
    linear_thermal_resistance(g / (2.0 * PI * lambda))
}
