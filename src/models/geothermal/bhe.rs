//! Vertical borehole heat exchanger sizing models.
//!
//! This module provides two [`twine_core::Model`] implementations sharing one
//! input, [`BoreholeDesign`]:
//!
//! - [`IterativeSizer`] searches for the depth that keeps the circulating fluid
//!   inside a temperature window.
//! - [`Vdi4640Sizer`] computes the depth in closed form from a base, a
//!   periodic, and a peak load.
//!
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_geothermal::{
//!     models::geothermal::bhe::{
//!         BoreholeDesign, BoreholeGeometry, HeatPump, IterativeSizer, LoadProfile, ModeLoad,
//!         PipeConfiguration,
//!     },
//!     support::borehole::{FluidProperties, GroundProperties, PipeProperties},
//! };
//! use uom::si::{
//!     dynamic_viscosity::pascal_second,
//!     energy::megawatt_hour,
//!     f64::{
//!         DynamicViscosity, Energy, Length, MassDensity, Power, SpecificHeatCapacity,
//!         ThermalConductivity, ThermodynamicTemperature, VolumeRate, VolumetricHeatCapacity,
//!     },
//!     length::{meter, millimeter},
//!     mass_density::kilogram_per_cubic_meter,
//!     power::kilowatt,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//!     volume_rate::cubic_meter_per_second,
//!     volumetric_heat_capacity::joule_per_cubic_meter_kelvin,
//! };
//!
//! let conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>;
//! let design = BoreholeDesign {
//!     ground: GroundProperties::new(
//!         conductivity(3.4),
//!         VolumetricHeatCapacity::new::<joule_per_cubic_meter_kelvin>(2.4e6),
//!         ThermodynamicTemperature::new::<degree_celsius>(10.0),
//!     ),
//!     borehole: BoreholeGeometry {
//!         diameter: Length::new::<millimeter>(152.0),
//!         depth: Length::new::<meter>(100.0),
//!         configuration: PipeConfiguration::SingleU,
//!         count: 1,
//!     },
//!     pipe: PipeProperties {
//!         outer_diameter: Length::new::<millimeter>(40.0),
//!         wall_thickness: Length::new::<millimeter>(3.7),
//!         conductivity: conductivity(0.42),
//!         shank_spacing: Length::new::<millimeter>(52.0),
//!     },
//!     grout_conductivity: conductivity(1.3),
//!     fluid: FluidProperties {
//!         conductivity: conductivity(0.48),
//!         specific_heat_capacity: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(3800.0),
//!         density: MassDensity::new::<kilogram_per_cubic_meter>(1030.0),
//!         viscosity: DynamicViscosity::new::<pascal_second>(0.004),
//!         flow_rate: VolumeRate::new::<cubic_meter_per_second>(0.0005),
//!     },
//!     loads: LoadProfile::heating_only(
//!         ModeLoad::heating(Energy::new::<megawatt_hour>(12.0), Power::new::<kilowatt>(6.0)),
//!         HeatPump { cop: 4.0, eer: 4.0 },
//!     ),
//! };
//!
//! let results = IterativeSizer::default().call(&design).unwrap();
//! assert!(results.is_converged());
//! assert!((results.required_depth.get::<meter>() - 227.75).abs() < 0.01);
//! ```

mod core;

use twine_core::Model;

pub use self::core::{
    BoreholeDesign, BoreholeGeometry, BoreholeResistances, DEPTH_SENSITIVITY, DepthBounds,
    DesignCase, FluidTemperatureLimits, GeometryError, HeatPump, InnerPipe, IterativeConfig,
    IterativeResults, LoadProfile, ModeBreakdown, ModeLoad, MonthlyFactors, PipeConfiguration,
    SizingError, SizingStatus, Timescales, Vdi4640Config, Vdi4640Results, size_iteratively,
    size_vdi4640,
};

/// Iterative depth search as a [`Model`].
///
/// Delegates to [`size_iteratively`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IterativeSizer {
    pub config: IterativeConfig,
}

impl IterativeSizer {
    #[must_use]
    pub fn new(config: IterativeConfig) -> Self {
        Self { config }
    }
}

impl Model for IterativeSizer {
    type Input = BoreholeDesign;
    type Output = IterativeResults;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        size_iteratively(input, &self.config)
    }
}

/// VDI 4640 three-timescale sizing as a [`Model`].
///
/// Delegates to [`size_vdi4640`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vdi4640Sizer {
    pub config: Vdi4640Config,
}

impl Vdi4640Sizer {
    #[must_use]
    pub fn new(config: Vdi4640Config) -> Self {
        Self { config }
    }
}

impl Model for Vdi4640Sizer {
    type Input = BoreholeDesign;
    type Output = Vdi4640Results;
    type Error = SizingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        size_vdi4640(input, &self.config)
    }
}
