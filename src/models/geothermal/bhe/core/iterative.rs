//! Iterative depth search against a fluid temperature window.

mod config;
mod results;

use tracing::{debug, instrument, warn};
use uom::{
    ConstZero,
    si::{
        f64::{Length, Power, TemperatureInterval, ThermodynamicTemperature, Time},
        length::meter,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius,
        time::second,
    },
};

use crate::support::{
    borehole::g_function::{GFunctionTable, finite_line_source, temperature_penalty},
    units::{LinearThermalResistance, SECONDS_PER_YEAR, TemperatureDifference, years},
};

use super::{BoreholeDesign, BoreholeResistances, FluidTemperatureLimits, LoadProfile};

pub use config::IterativeConfig;
pub use results::{IterativeResults, SizingStatus};

/// Fluid temperature gained per metre of added depth, in K/m.
///
/// Turns a temperature deficit into a depth correction.
pub const DEPTH_SENSITIVITY: f64 = 0.02;

/// Duration of a peak load pulse.
const PEAK_DURATION: f64 = 6.0 * 3600.0;

/// Month length used for the monthly profile, in seconds.
const SECONDS_PER_MONTH: f64 = SECONDS_PER_YEAR / 12.0;

/// Sizes the borehole field by iterating on depth.
///
/// Starting from the design's depth, clamped to the configured bounds, each
/// step evaluates the extreme fluid temperatures and, while either limit is
/// violated, deepens or shortens the boreholes by the worst deficit divided
/// by [`DEPTH_SENSITIVITY`]. The search stops once both limits hold or after
/// `max_iterations` evaluations, in which case the last evaluated depth is
/// reported with [`SizingStatus::MaxIterationsReached`].
///
/// # Errors
///
/// Returns a [`SizingError`](super::SizingError) if the design or the
/// configuration is invalid. No evaluation happens in that case.
#[instrument(
    skip_all,
    fields(
        configuration = design.borehole.configuration.kind(),
        boreholes = design.borehole.count,
    )
)]
pub fn size_iteratively(
    design: &BoreholeDesign,
    config: &IterativeConfig,
) -> Result<IterativeResults, super::SizingError> {
    design.validate()?;
    config.validate()?;

    let resistances = BoreholeResistances::for_design(design);
    let loads = GroundLoads::per_borehole(&design.loads, design.borehole.count);
    debug!(
        effective_resistance = resistances.effective.value,
        net_w = loads.net.get::<watt>(),
        peak_extraction_w = loads.peak_extraction.get::<watt>(),
        peak_injection_w = loads.peak_injection.get::<watt>(),
        "ground loads per borehole"
    );

    let bounds = config.depth_bounds;
    let max_iterations = config.max_iterations.max(1);
    let mut depth = bounds.clamp(design.borehole.depth);
    let mut iterations = 0;

    let (status, evaluation) = loop {
        iterations += 1;
        let evaluation = Evaluation::at(
            depth,
            design,
            &loads,
            resistances.effective,
            config.simulation_years,
        );
        let deficit = evaluation.deficit(&config.limits);

        debug!(
            iteration = iterations,
            depth_m = depth.get::<meter>(),
            fluid_min_c = evaluation.fluid_min.get::<degree_celsius>(),
            fluid_max_c = evaluation.fluid_max.get::<degree_celsius>(),
            "evaluated depth"
        );

        let Some(deficit) = deficit else {
            break (SizingStatus::Converged, evaluation);
        };

        if iterations >= max_iterations {
            warn!(
                depth_m = depth.get::<meter>(),
                deficit_k = deficit.worst().get::<delta_kelvin>(),
                violated = deficit.violated(),
                "iteration limit reached before fluid limits were met"
            );
            break (SizingStatus::MaxIterationsReached, evaluation);
        }

        let correction = deficit.worst().get::<delta_kelvin>() / DEPTH_SENSITIVITY;
        depth = bounds.clamp(depth + Length::new::<meter>(correction));
    };

    debug!(
        critical_heating_month = design.loads.heating.monthly_factors.critical_month() + 1,
        critical_cooling_month = design.loads.cooling.monthly_factors.critical_month() + 1,
        "monthly profile"
    );
    let monthly_temperatures = evaluation.monthly_temperatures(design, &loads);

    Ok(IterativeResults {
        status,
        iterations,
        required_depth: evaluation.depth,
        fluid_temperature_min: evaluation.fluid_min,
        fluid_temperature_max: evaluation.fluid_max,
        mean_ground_temperature: evaluation.mean_ground_temperature,
        long_term_shift: evaluation.long_term_shift,
        resistances,
        g_long_term: evaluation.g_long_term,
        g_peak: evaluation.g_peak,
        heat_extraction_rate: loads.net / evaluation.depth,
        monthly_temperatures,
        depth_bounds: bounds,
    })
}

/// Heat exchanged with the ground by one borehole.
#[derive(Debug, Clone, Copy)]
struct GroundLoads {
    extraction: Power,
    injection: Power,
    /// Average extraction minus average injection.
    net: Power,
    peak_extraction: Power,
    peak_injection: Power,
}

impl GroundLoads {
    fn per_borehole(loads: &LoadProfile, count: u32) -> Self {
        let year = years(1.0);
        let count = f64::from(count);
        let extraction_factor = loads.heat_pump.extraction_factor();
        let injection_factor = loads.heat_pump.injection_factor();

        let extraction: Power = loads.heating.annual_energy / year * extraction_factor / count;
        let injection: Power = loads.cooling.annual_energy / year * injection_factor / count;

        Self {
            extraction,
            injection,
            net: extraction - injection,
            peak_extraction: loads.heating.peak_power * extraction_factor / count,
            peak_injection: loads.cooling.peak_power * injection_factor / count,
        }
    }
}

/// Fluid temperatures at one candidate depth.
struct Evaluation {
    depth: Length,
    table: GFunctionTable,
    g_long_term: f64,
    g_peak: f64,
    mean_ground_temperature: ThermodynamicTemperature,
    long_term_shift: TemperatureInterval,
    fluid_min: ThermodynamicTemperature,
    fluid_max: ThermodynamicTemperature,
}

impl Evaluation {
    fn at(
        depth: Length,
        design: &BoreholeDesign,
        loads: &GroundLoads,
        effective_resistance: LinearThermalResistance,
        simulation_years: f64,
    ) -> Self {
        let ground = &design.ground;
        let conductivity = ground.conductivity;
        let radius = design.borehole.radius();
        let diffusivity = ground.diffusivity();

        let table = GFunctionTable::build(depth, radius, diffusivity, simulation_years);
        let g_long_term = table.interpolate(years(simulation_years));
        let g_peak = finite_line_source(
            Time::new::<second>(PEAK_DURATION),
            depth,
            radius,
            diffusivity,
        );

        // Net extraction cools the ground.
        let long_term_shift = -temperature_penalty(loads.net, conductivity, depth, g_long_term);
        let mean_ground_temperature = ground.mean_temperature(depth);
        let settled = mean_ground_temperature.offset(long_term_shift);

        let peak_swing = |peak: Power| {
            temperature_penalty(peak, conductivity, depth, g_peak)
                + resistive_drop(peak, depth, effective_resistance)
        };

        let fluid_min = settled.offset(-peak_swing(loads.peak_extraction));
        let fluid_max = if loads.peak_injection > Power::ZERO {
            settled.offset(peak_swing(loads.peak_injection))
        } else {
            settled
        };

        Self {
            depth,
            table,
            g_long_term,
            g_peak,
            mean_ground_temperature,
            long_term_shift,
            fluid_min,
            fluid_max,
        }
    }

    /// How far the fluid lies outside the limits, or `None` if inside.
    fn deficit(&self, limits: &FluidTemperatureLimits) -> Option<Deficit> {
        if self.fluid_min >= limits.min && self.fluid_max <= limits.max {
            return None;
        }
        Some(Deficit {
            heating: limits.min.minus(self.fluid_min),
            cooling: self.fluid_max.minus(limits.max),
        })
    }

    /// Wall temperature at mid-month over the first year.
    fn monthly_temperatures(
        &self,
        design: &BoreholeDesign,
        loads: &GroundLoads,
    ) -> [ThermodynamicTemperature; 12] {
        let heating = design.loads.heating.monthly_factors.0;
        let cooling = design.loads.cooling.monthly_factors.0;
        let conductivity = design.ground.conductivity;

        std::array::from_fn(|month| {
            let time = Time::new::<second>((month as f64 + 0.5) * SECONDS_PER_MONTH);
            let g = self.table.interpolate(time);
            let load = loads.extraction * heating[month] - loads.injection * cooling[month];
            self.mean_ground_temperature
                .offset(-temperature_penalty(load, conductivity, self.depth, g))
        })
    }
}

/// Temperature by which each fluid limit is missed; non-positive when met.
#[derive(Debug, Clone, Copy)]
struct Deficit {
    heating: TemperatureInterval,
    cooling: TemperatureInterval,
}

impl Deficit {
    /// The deficit that drives the next depth step.
    ///
    /// When both limits are missed the larger miss wins, whichever mode it
    /// belongs to. Heating is not given priority, so a field missing its
    /// cooling limit by more is stepped on the cooling deficit.
    fn worst(&self) -> TemperatureInterval {
        if self.heating >= self.cooling {
            self.heating
        } else {
            self.cooling
        }
    }

    fn violated(&self) -> &'static str {
        let zero = TemperatureInterval::ZERO;
        match (self.heating > zero, self.cooling > zero) {
            (true, true) => "both",
            (true, false) => "min",
            _ => "max",
        }
    }
}

/// Fluid to wall drop `q'·R` for a heat rate spread over the depth.
fn resistive_drop(
    heat_rate: Power,
    depth: Length,
    resistance: LinearThermalResistance,
) -> TemperatureInterval {
    let per_meter = heat_rate.get::<watt>() / depth.get::<meter>();
    TemperatureInterval::new::<delta_kelvin>(per_meter * resistance.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{energy::megawatt_hour, f64::Energy, power::kilowatt};

    use crate::models::geothermal::bhe::core::{
        ModeLoad, SizingError, test_support::worked_example,
    };

    fn celsius(t: ThermodynamicTemperature) -> f64 {
        t.get::<degree_celsius>()
    }

    fn cooling_dominated() -> (BoreholeDesign, IterativeConfig) {
        let mut design = worked_example();
        design.loads.heating = ModeLoad::heating(
            Energy::new::<megawatt_hour>(2.0),
            Power::new::<kilowatt>(2.0),
        );
        design.loads.cooling = ModeLoad::cooling(
            Energy::new::<megawatt_hour>(6.0),
            Power::new::<kilowatt>(5.0),
        );
        let config = IterativeConfig {
            limits: FluidTemperatureLimits::celsius(-2.0, 30.0),
            ..IterativeConfig::default()
        };
        (design, config)
    }

    #[test]
    fn worked_example_converges() {
        let results = size_iteratively(&worked_example(), &IterativeConfig::default()).unwrap();

        assert_eq!(results.status, SizingStatus::Converged);
        assert!(results.is_converged());
        assert_eq!(results.iterations, 2);
        assert_relative_eq!(
            results.required_depth.get::<meter>(),
            227.751_472_1,
            max_relative = 1e-6
        );
        assert_relative_eq!(celsius(results.fluid_temperature_min), 6.040_707, epsilon = 1e-4);
        assert_relative_eq!(celsius(results.fluid_temperature_max), 12.198_755, epsilon = 1e-4);
        assert!(!results.at_depth_limit());

        // No cooling: the upper fluid bound is the settled ground temperature.
        assert_relative_eq!(
            celsius(results.fluid_temperature_max),
            celsius(results.mean_ground_temperature.offset(results.long_term_shift)),
            epsilon = 1e-9
        );
    }

    #[test]
    fn first_evaluation_at_design_depth() {
        let config = IterativeConfig {
            max_iterations: 1,
            ..IterativeConfig::default()
        };
        let results = size_iteratively(&worked_example(), &config).unwrap();

        assert_eq!(results.status, SizingStatus::MaxIterationsReached);
        assert_eq!(results.iterations, 1);
        assert_relative_eq!(results.required_depth.get::<meter>(), 100.0);
        assert_relative_eq!(celsius(results.fluid_temperature_min), -4.555, epsilon = 1e-3);
        assert_relative_eq!(results.g_long_term, 4.224, epsilon = 1e-3);
        assert_relative_eq!(results.g_peak, 0.834, epsilon = 1e-3);
    }

    #[test]
    fn oversized_load_hits_the_depth_cap() {
        let mut design = worked_example();
        design.loads.heating = ModeLoad::heating(
            Energy::new::<megawatt_hour>(200.0),
            Power::new::<kilowatt>(60.0),
        );

        let results = size_iteratively(&design, &IterativeConfig::default()).unwrap();
        assert_eq!(results.status, SizingStatus::MaxIterationsReached);
        assert_eq!(results.iterations, 20);
        assert_relative_eq!(results.required_depth.get::<meter>(), 300.0);
        assert!(results.at_depth_limit());
        assert_relative_eq!(celsius(results.fluid_temperature_min), -49.038, epsilon = 1e-2);
        assert!(results.fluid_temperature_min < IterativeConfig::default().limits.min);
    }

    #[test]
    fn cooling_dominated_design() {
        let (design, config) = cooling_dominated();
        let results = size_iteratively(&design, &config).unwrap();

        assert!(results.is_converged());
        assert_eq!(results.iterations, 2);
        assert_relative_eq!(results.required_depth.get::<meter>(), 216.6276, epsilon = 1e-3);
        assert_relative_eq!(celsius(results.fluid_temperature_min), 11.9308, epsilon = 1e-3);
        assert_relative_eq!(celsius(results.fluid_temperature_max), 23.0809, epsilon = 1e-3);

        // Net injection warms the ground.
        assert!(results.long_term_shift > TemperatureInterval::ZERO);
        assert!(results.heat_extraction_rate.value < 0.0);
    }

    #[test]
    fn load_is_shared_between_boreholes() {
        let (mut design, config) = cooling_dominated();
        design.borehole.count = 2;
        let results = size_iteratively(&design, &config).unwrap();

        assert!(results.is_converged());
        assert_eq!(results.iterations, 1);
        assert_relative_eq!(results.required_depth.get::<meter>(), 100.0);
        assert_relative_eq!(celsius(results.fluid_temperature_min), 9.839, epsilon = 1e-3);
        assert_relative_eq!(celsius(results.fluid_temperature_max), 21.916, epsilon = 1e-3);
    }

    #[test]
    fn start_is_clamped_into_bounds() {
        let mut design = worked_example();
        design.borehole.depth = Length::new::<meter>(500.0);

        let results = size_iteratively(&design, &IterativeConfig::default()).unwrap();
        assert!(results.is_converged());
        assert_eq!(results.iterations, 1);
        assert_relative_eq!(results.required_depth.get::<meter>(), 300.0);
        assert!(results.at_depth_limit());
        assert_relative_eq!(celsius(results.fluid_temperature_min), 8.8177, epsilon = 1e-3);
    }

    #[test]
    fn monthly_profile_follows_heating_factors() {
        let results = size_iteratively(&worked_example(), &IterativeConfig::default()).unwrap();
        let mean = celsius(results.mean_ground_temperature);
        let monthly = results.monthly_temperatures.map(celsius);

        // June to August carry no heating.
        for month in 5..8 {
            assert_relative_eq!(monthly[month], mean, epsilon = 1e-12);
        }
        for month in (0..5).chain(8..12) {
            assert!(monthly[month] < mean, "month {month} should be cooled");
        }
    }

    #[test]
    fn monthly_profile_warms_in_cooling_season() {
        let (design, config) = cooling_dominated();
        let results = size_iteratively(&design, &config).unwrap();
        let mean = results.mean_ground_temperature;

        assert!(results.monthly_temperatures[0] < mean);
        assert!(results.monthly_temperatures[6] > mean);
    }

    #[test]
    fn larger_deficit_drives_the_step() {
        let kelvin = TemperatureInterval::new::<delta_kelvin>;

        let deficit = Deficit {
            heating: kelvin(1.0),
            cooling: kelvin(3.0),
        };
        assert_relative_eq!(deficit.worst().get::<delta_kelvin>(), 3.0);
        assert_eq!(deficit.violated(), "both");

        let deficit = Deficit {
            heating: kelvin(2.5),
            cooling: kelvin(-4.0),
        };
        assert_relative_eq!(deficit.worst().get::<delta_kelvin>(), 2.5);
        assert_eq!(deficit.violated(), "min");
    }

    #[test]
    fn repeated_calls_agree() {
        let design = worked_example();
        let config = IterativeConfig::default();

        let first = size_iteratively(&design, &config).unwrap();
        let again = size_iteratively(&design, &config).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn concurrent_calls_agree() {
        let design = worked_example();
        let config = IterativeConfig::default();
        let expected = size_iteratively(&design, &config).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| size_iteratively(&design, &config)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), Ok(expected));
            }
        });
    }

    #[test]
    fn invalid_inputs_are_rejected_before_evaluation() {
        let config = IterativeConfig {
            limits: FluidTemperatureLimits::celsius(15.0, -2.0),
            ..IterativeConfig::default()
        };
        assert!(matches!(
            size_iteratively(&worked_example(), &config),
            Err(SizingError::InvalidLimits { .. })
        ));

        let mut design = worked_example();
        design.loads.heat_pump.cop = 0.5;
        assert!(matches!(
            size_iteratively(&design, &IterativeConfig::default()),
            Err(SizingError::InvalidLoad { .. })
        ));
    }
}
