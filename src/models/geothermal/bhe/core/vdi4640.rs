//! Closed-form sizing from three characteristic loads.

mod config;
mod loads;
mod results;

use tracing::{debug, instrument};
use uom::si::{
    f64::{Length, Power, TemperatureInterval, ThermodynamicTemperature, Time},
    length::meter,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    time::{day, hour},
};

use crate::support::{
    borehole::g_function::{finite_line_source, ground_resistance},
    units::{LinearThermalResistance, TemperatureDifference, years},
};

use super::{BoreholeDesign, BoreholeResistances, ModeLoad, SizingError};

pub use config::Vdi4640Config;
pub use loads::Timescales;
pub use results::{DesignCase, ModeBreakdown, Vdi4640Results};

/// Sizes the borehole field with the three-timescale method.
///
/// Each mode's ground load is split into a ten-year base load, a one-month
/// periodic load, and a six-hour peak, each acting through the ground
/// resistance of its own duration. The mode needing the deeper field sets the
/// design depth, and both exit temperatures are evaluated at that depth.
///
/// The response values are evaluated at the design's borehole depth and are
/// kept non-decreasing in duration.
///
/// # Errors
///
/// Returns [`SizingError::DegenerateConfiguration`] when a fluid limit lies on
/// the wrong side of the undisturbed ground temperature,
/// [`SizingError::NoLoad`] when neither mode loads the ground, and the
/// validation errors of [`BoreholeDesign::validate`] otherwise.
#[instrument(
    skip_all,
    fields(
        configuration = design.borehole.configuration.kind(),
        boreholes = design.borehole.count,
    )
)]
pub fn size_vdi4640(
    design: &BoreholeDesign,
    config: &Vdi4640Config,
) -> Result<Vdi4640Results, SizingError> {
    design.validate()?;
    config.validate()?;

    let ground = &design.ground;
    let undisturbed = ground.undisturbed_temperature;
    let resistances = BoreholeResistances::for_design(design);
    let borehole_resistance = config.borehole_resistance.unwrap_or(resistances.effective);

    let depth = design.borehole.depth;
    let radius = design.borehole.radius();
    let diffusivity = ground.diffusivity();
    let g_values = non_decreasing(
        Timescales {
            base: years(10.0),
            periodic: Time::new::<day>(30.0),
            peak: Time::new::<hour>(6.0),
        }
        .map(|time| finite_line_source(time, depth, radius, diffusivity)),
    );
    let ground_resistances = g_values.map(|g| ground_resistance(g, ground.conductivity));

    let field = Field {
        ground_resistances,
        borehole_resistance,
        count: f64::from(design.borehole.count),
    };

    let heat_pump = design.loads.heat_pump;
    let heating = ModeSizing::new(
        DesignCase::Heating,
        &design.loads.heating,
        heat_pump.extraction_factor(),
        undisturbed.minus(config.limits.min),
        &field,
    );
    let cooling = ModeSizing::new(
        DesignCase::Cooling,
        &design.loads.cooling,
        heat_pump.injection_factor(),
        config.limits.max.minus(undisturbed),
        &field,
    );

    for (mode, limit) in [(&heating, config.limits.min), (&cooling, config.limits.max)] {
        if mode.reaction_delta_t <= TemperatureInterval::new::<delta_kelvin>(0.0) {
            return Err(SizingError::DegenerateConfiguration {
                case: mode.case,
                delta_t: mode.reaction_delta_t,
                limit,
                ground: undisturbed,
            });
        }
    }

    debug!(
        heating_depth_m = heating.required_depth.get::<meter>(),
        cooling_depth_m = cooling.required_depth.get::<meter>(),
        "candidate depths"
    );

    let (design_case, required_depth) = if heating.required_depth > cooling.required_depth {
        (DesignCase::Heating, heating.required_depth)
    } else {
        (DesignCase::Cooling, cooling.required_depth)
    };
    if required_depth.get::<meter>() <= 0.0 {
        return Err(SizingError::NoLoad);
    }
    debug!(
        %design_case,
        depth_m = required_depth.get::<meter>(),
        "design case selected"
    );

    Ok(Vdi4640Results {
        design_case,
        required_depth,
        borehole_resistance,
        resistances,
        g_values,
        ground_resistances,
        heating: heating.at_depth(required_depth, undisturbed, config, &field),
        cooling: cooling.at_depth(required_depth, undisturbed, config, &field),
        fluid_delta_t: config.fluid_delta_t,
    })
}

/// Resistances and borehole count shared by both modes.
struct Field {
    ground_resistances: Timescales<LinearThermalResistance>,
    borehole_resistance: LinearThermalResistance,
    count: f64,
}

impl Field {
    /// `Σ |Q|·(R + R_b)` over the three timescales, in K·m.
    fn weighted_load(&self, loads: Timescales<f64>) -> Timescales<f64> {
        loads
            .zip(self.ground_resistances)
            .map(|(q, r)| q.abs() * (r.value + self.borehole_resistance.value))
    }
}

/// One mode sized on its own.
struct ModeSizing {
    case: DesignCase,
    loads: Timescales<Power>,
    reaction_delta_t: TemperatureInterval,
    required_depth: Length,
}

impl ModeSizing {
    fn new(
        case: DesignCase,
        load: &ModeLoad,
        factor: f64,
        reaction_delta_t: TemperatureInterval,
        field: &Field,
    ) -> Self {
        let loads = loads::ground_loads(load, factor);
        let weighted: f64 = field
            .weighted_load(loads.map(|q| q.get::<watt>()))
            .into_array()
            .iter()
            .sum();
        let delta_t = reaction_delta_t.get::<delta_kelvin>();

        // Only meaningful for a positive reaction temperature difference.
        let required_depth = if delta_t > 0.0 {
            Length::new::<meter>(weighted / (delta_t * field.count))
        } else {
            Length::new::<meter>(0.0)
        };

        Self {
            case,
            loads,
            reaction_delta_t,
            required_depth,
        }
    }

    /// Back-computes the exit temperature at the shared design depth.
    fn at_depth(
        self,
        depth: Length,
        undisturbed: ThermodynamicTemperature,
        config: &Vdi4640Config,
        field: &Field,
    ) -> ModeBreakdown {
        let field_length = depth.get::<meter>() * field.count;
        let temperature_drops = field
            .weighted_load(self.loads.map(|q| q.get::<watt>()))
            .map(|drop| TemperatureInterval::new::<delta_kelvin>(drop / field_length));

        let total: f64 = temperature_drops
            .into_array()
            .iter()
            .map(|drop| drop.get::<delta_kelvin>())
            .sum();
        let sign = match self.case {
            DesignCase::Heating => -1.0,
            DesignCase::Cooling => 1.0,
        };
        let shift =
            TemperatureInterval::new::<delta_kelvin>(sign * total) - config.fluid_delta_t * 0.5;

        ModeBreakdown {
            loads: self.loads,
            reaction_delta_t: self.reaction_delta_t,
            required_depth: self.required_depth,
            temperature_drops,
            exit_temperature: undisturbed.offset(shift),
        }
    }
}

/// Lifts each longer-duration response to at least the shorter ones.
fn non_decreasing(g: Timescales<f64>) -> Timescales<f64> {
    let periodic = g.periodic.max(g.peak);
    Timescales {
        base: g.base.max(periodic),
        periodic,
        peak: g.peak,
    }
}
