use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N3, P1, P3, Z0},
};

/// Thermal resistance per unit borehole length, K·m/W in SI.
///
/// The stored `value` is in K·m/W.
pub type LinearThermalResistance = Quantity<ISQ<N1, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Heat rate per unit borehole length, W/m in SI.
///
/// The stored `value` is in W/m.
pub type LinearHeatRate = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Temperature change per unit depth, K/m in SI.
///
/// The stored `value` is in K/m.
pub type TemperatureGradient = Quantity<ISQ<N1, Z0, Z0, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`LinearThermalResistance`] from a value in K·m/W.
#[must_use]
pub fn linear_thermal_resistance(kelvin_meter_per_watt: f64) -> LinearThermalResistance {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value: kelvin_meter_per_watt,
    }
}

/// Creates a [`LinearHeatRate`] from a value in W/m.
#[must_use]
pub fn linear_heat_rate(watt_per_meter: f64) -> LinearHeatRate {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value: watt_per_meter,
    }
}

/// Creates a [`TemperatureGradient`] from a value in K/m.
#[must_use]
pub fn kelvin_per_meter(value: f64) -> TemperatureGradient {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
