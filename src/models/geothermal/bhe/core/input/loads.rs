use serde::{Deserialize, Serialize};
use uom::si::{
    energy::joule,
    f64::{Energy, Power},
    power::watt,
};

use crate::{
    models::geothermal::bhe::core::SizingError,
    support::constraint::{ConstraintError, GreaterThanOne, NonNegative},
};

/// Building loads and the heat pump that serves them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadProfile {
    pub heating: ModeLoad,
    #[serde(default = "ModeLoad::none")]
    pub cooling: ModeLoad,
    pub heat_pump: HeatPump,
}

impl LoadProfile {
    /// A heating-only building.
    #[must_use]
    pub fn heating_only(heating: ModeLoad, heat_pump: HeatPump) -> Self {
        Self {
            heating,
            cooling: ModeLoad::none(),
            heat_pump,
        }
    }

    pub(in crate::models::geothermal::bhe::core) fn validate(&self) -> Result<(), SizingError> {
        let HeatPump { cop, eer } = self.heat_pump;
        GreaterThanOne::new(cop).map_err(invalid_load("heat pump COP", cop))?;
        GreaterThanOne::new(eer).map_err(invalid_load("heat pump EER", eer))?;

        self.heating.validate([
            "annual heating energy",
            "peak heating power",
            "heating monthly factor",
        ])?;
        self.cooling.validate([
            "annual cooling energy",
            "peak cooling power",
            "cooling monthly factor",
        ])
    }
}

/// Annual demand, peak, and monthly distribution for one operating mode.
///
/// Energies and powers are those delivered to the building. The share drawn
/// from or rejected to the ground follows from the [`HeatPump`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeLoad {
    pub annual_energy: Energy,
    pub peak_power: Power,
    pub monthly_factors: MonthlyFactors,
}

impl ModeLoad {
    /// A heating load distributed with the central-European heating profile.
    #[must_use]
    pub fn heating(annual_energy: Energy, peak_power: Power) -> Self {
        Self {
            annual_energy,
            peak_power,
            monthly_factors: MonthlyFactors::CENTRAL_EUROPEAN_HEATING,
        }
    }

    /// A cooling load distributed with the summer cooling profile.
    #[must_use]
    pub fn cooling(annual_energy: Energy, peak_power: Power) -> Self {
        Self {
            annual_energy,
            peak_power,
            monthly_factors: MonthlyFactors::SUMMER_COOLING,
        }
    }

    /// No load in this mode.
    #[must_use]
    pub fn none() -> Self {
        Self {
            annual_energy: Energy::new::<joule>(0.0),
            peak_power: Power::new::<watt>(0.0),
            monthly_factors: MonthlyFactors::ZERO,
        }
    }

    fn validate(
        &self,
        [energy_name, peak_name, factor_name]: [&'static str; 3],
    ) -> Result<(), SizingError> {
        let energy = self.annual_energy.get::<joule>();
        NonNegative::new(energy).map_err(invalid_load(energy_name, energy))?;

        let peak = self.peak_power.get::<watt>();
        NonNegative::new(peak).map_err(invalid_load(peak_name, peak))?;

        for factor in self.monthly_factors.0 {
            NonNegative::new(factor).map_err(invalid_load(factor_name, factor))?;
        }
        Ok(())
    }
}

fn invalid_load(name: &'static str, value: f64) -> impl FnOnce(ConstraintError) -> SizingError {
    move |source| SizingError::InvalidLoad {
        name,
        value,
        source,
    }
}

/// Relative monthly weights, January first.
///
/// The weights need not sum to one. They locate the critical month and
/// shape the reported monthly temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyFactors(pub [f64; 12]);

impl MonthlyFactors {
    /// Typical central-European heating distribution.
    pub const CENTRAL_EUROPEAN_HEATING: Self = Self([
        0.155, 0.148, 0.125, 0.099, 0.064, 0.0, 0.0, 0.0, 0.061, 0.087, 0.117, 0.144,
    ]);

    /// Cooling concentrated in the summer months.
    pub const SUMMER_COOLING: Self = Self([
        0.0, 0.0, 0.0, 0.05, 0.15, 0.25, 0.30, 0.25, 0.0, 0.0, 0.0, 0.0,
    ]);

    pub const ZERO: Self = Self([0.0; 12]);

    /// Weight of the critical month.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }

    /// Zero-based index of the critical month, the first one on ties.
    #[must_use]
    pub fn critical_month(&self) -> usize {
        let max = self.max();
        self.0.iter().position(|&f| f == max).unwrap_or(0)
    }
}

/// Heat pump performance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatPump {
    /// Coefficient of performance in heating, must exceed one.
    pub cop: f64,
    /// Energy efficiency ratio in cooling, must exceed one.
    pub eer: f64,
}

impl HeatPump {
    /// Fraction of delivered heat drawn from the ground, `(COP − 1)/COP`.
    #[must_use]
    pub fn extraction_factor(&self) -> f64 {
        (self.cop - 1.0) / self.cop
    }

    /// Heat rejected to the ground per unit of delivered cooling, `(EER + 1)/EER`.
    #[must_use]
    pub fn injection_factor(&self) -> f64 {
        (self.eer + 1.0) / self.eer
    }
}
