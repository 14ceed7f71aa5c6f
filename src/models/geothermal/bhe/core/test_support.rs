use uom::si::{
    dynamic_viscosity::pascal_second,
    energy::megawatt_hour,
    f64::{
        DynamicViscosity, Energy, Length, MassDensity, Power, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature, VolumeRate, VolumetricHeatCapacity,
    },
    length::{meter, millimeter},
    mass_density::kilogram_per_cubic_meter,
    power::kilowatt,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_second,
    volumetric_heat_capacity::joule_per_cubic_meter_kelvin,
};

use crate::support::borehole::{FluidProperties, GroundProperties, PipeProperties};

use super::{BoreholeDesign, BoreholeGeometry, HeatPump, LoadProfile, ModeLoad, PipeConfiguration};

/// Single 100 m single-U borehole heating a house, 12 MWh at 6 kW peak.
///
/// Sizes to about 228 m with the default iterative settings.
pub(crate) fn worked_example() -> BoreholeDesign {
    BoreholeDesign {
        ground: GroundProperties::new(
            ThermalConductivity::new::<watt_per_meter_kelvin>(3.4),
            VolumetricHeatCapacity::new::<joule_per_cubic_meter_kelvin>(2.4e6),
            ThermodynamicTemperature::new::<degree_celsius>(10.0),
        ),
        borehole: BoreholeGeometry {
            diameter: Length::new::<millimeter>(152.0),
            depth: Length::new::<meter>(100.0),
            configuration: PipeConfiguration::SingleU,
            count: 1,
        },
        pipe: PipeProperties {
            outer_diameter: Length::new::<millimeter>(40.0),
            wall_thickness: Length::new::<millimeter>(3.7),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.42),
            shank_spacing: Length::new::<millimeter>(52.0),
        },
        grout_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(1.3),
        fluid: FluidProperties {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.48),
            specific_heat_capacity: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(3800.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(1030.0),
            viscosity: DynamicViscosity::new::<pascal_second>(0.004),
            flow_rate: VolumeRate::new::<cubic_meter_per_second>(0.0005),
        },
        loads: LoadProfile::heating_only(
            ModeLoad::heating(
                Energy::new::<megawatt_hour>(12.0),
                Power::new::<kilowatt>(6.0),
            ),
            HeatPump { cop: 4.0, eer: 4.0 },
        ),
    }
}
