use serde::{Deserialize, Serialize};
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{
        DiffusionCoefficient, DynamicViscosity, Length, MassDensity, SpecificHeatCapacity,
        TemperatureInterval, ThermalConductivity, ThermodynamicTemperature, VolumeRate,
        VolumetricHeatCapacity,
    },
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    volumetric_heat_capacity::joule_per_cubic_meter_kelvin,
};

use crate::support::units::{TemperatureDifference, TemperatureGradient, kelvin_per_meter};

/// Homogeneous, isotropic ground with constant properties.
///
/// The thermal diffusivity is always derived from conductivity and volumetric
/// heat capacity so the three can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundProperties {
    pub conductivity: ThermalConductivity,
    pub volumetric_heat_capacity: VolumetricHeatCapacity,
    pub undisturbed_temperature: ThermodynamicTemperature,
    #[serde(default = "default_geothermal_gradient")]
    pub geothermal_gradient: TemperatureGradient,
}

fn default_geothermal_gradient() -> TemperatureGradient {
    kelvin_per_meter(GroundProperties::DEFAULT_GEOTHERMAL_GRADIENT)
}

impl GroundProperties {
    /// Geothermal gradient applied by [`GroundProperties::new`], in K/m.
    pub const DEFAULT_GEOTHERMAL_GRADIENT: f64 = 0.03;

    /// Creates ground properties with the default 0.03 K/m geothermal gradient.
    #[must_use]
    pub fn new(
        conductivity: ThermalConductivity,
        volumetric_heat_capacity: VolumetricHeatCapacity,
        undisturbed_temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            conductivity,
            volumetric_heat_capacity,
            undisturbed_temperature,
            geothermal_gradient: default_geothermal_gradient(),
        }
    }

    #[must_use]
    pub fn with_geothermal_gradient(mut self, gradient: TemperatureGradient) -> Self {
        self.geothermal_gradient = gradient;
        self
    }

    /// Thermal diffusivity `α = λ / C`.
    #[must_use]
    pub fn diffusivity(&self) -> DiffusionCoefficient {
        DiffusionCoefficient::new::<square_meter_per_second>(
            self.conductivity.get::<watt_per_meter_kelvin>()
                / self
                    .volumetric_heat_capacity
                    .get::<joule_per_cubic_meter_kelvin>(),
        )
    }

    /// Mean undisturbed temperature over a borehole of the given depth.
    ///
    /// This is the surface value raised by the gradient over half the depth.
    #[must_use]
    pub fn mean_temperature(&self, depth: Length) -> ThermodynamicTemperature {
        let rise = self.geothermal_gradient.value * depth.get::<meter>() / 2.0;
        self.undisturbed_temperature
            .offset(TemperatureInterval::new::<delta_kelvin>(rise))
    }
}

/// Heat exchanger pipe, one leg of a U-tube or the outer pipe of a coaxial probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeProperties {
    pub outer_diameter: Length,
    pub wall_thickness: Length,
    pub conductivity: ThermalConductivity,
    /// Center-to-center distance between adjacent legs.
    ///
    /// Unused for coaxial layouts.
    pub shank_spacing: Length,
}

impl PipeProperties {
    #[must_use]
    pub fn inner_diameter(&self) -> Length {
        self.outer_diameter - 2.0 * self.wall_thickness
    }
}

/// Circulating heat carrier fluid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    pub conductivity: ThermalConductivity,
    pub specific_heat_capacity: SpecificHeatCapacity,
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    /// Volumetric flow rate through one pipe leg.
    pub flow_rate: VolumeRate,
}
