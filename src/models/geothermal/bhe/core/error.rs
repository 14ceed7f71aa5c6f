use thiserror::Error;
use uom::si::{
    f64::{Length, TemperatureInterval, ThermodynamicTemperature},
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{constraint::ConstraintError, units::LinearThermalResistance};

use super::DesignCase;

/// Errors returned by the borehole sizers.
///
/// Everything except [`SizingError::DegenerateConfiguration`] and
/// [`SizingError::NoLoad`] is detected before any iteration starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// The borehole or pipe geometry is not physically realisable.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    /// A material or fluid property is out of range.
    #[error("invalid {name} ({value} in SI units)")]
    InvalidThermalInput {
        name: &'static str,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// A load or heat pump performance value is out of range.
    #[error("invalid {name} ({value} in SI units)")]
    InvalidLoad {
        name: &'static str,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// A sizer configuration value is out of range.
    #[error("invalid {name} ({value} in SI units)")]
    InvalidConfig {
        name: &'static str,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The fluid temperature window is empty.
    #[error(
        "fluid temperature limits are empty: min {:.2} °C is not below max {:.2} °C",
        celsius(.min),
        celsius(.max)
    )]
    InvalidLimits {
        min: ThermodynamicTemperature,
        max: ThermodynamicTemperature,
    },

    /// The depth search interval is empty.
    #[error(
        "depth bounds are empty: min {:.1} m exceeds max {:.1} m",
        meters(.min),
        meters(.max)
    )]
    InvalidDepthBounds { min: Length, max: Length },

    /// A fluid limit lies on the wrong side of the undisturbed ground temperature.
    ///
    /// No finite positive depth can satisfy the limit.
    #[error(
        "{case} fluid limit {:.2} °C leaves a reaction temperature difference of {:.2} K \
         against undisturbed ground at {:.2} °C",
        celsius(.limit),
        kelvin(.delta_t),
        celsius(.ground)
    )]
    DegenerateConfiguration {
        case: DesignCase,
        delta_t: TemperatureInterval,
        limit: ThermodynamicTemperature,
        ground: ThermodynamicTemperature,
    },

    /// Neither heating nor cooling places any load on the ground.
    #[error("no heating or cooling load to size for")]
    NoLoad,
}

/// Geometry violations, each carrying the offending value and its bound.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("{name} must be positive, got {:.4} m", meters(.value))]
    NonPositive { name: &'static str, value: Length },

    #[error(
        "{name} wall of {:.4} m leaves no bore in a {:.4} m pipe",
        meters(.wall_thickness),
        meters(.outer_diameter)
    )]
    WallTooThick {
        name: &'static str,
        outer_diameter: Length,
        wall_thickness: Length,
    },

    #[error(
        "shank spacing {:.4} m must lie in [{:.4} m, {:.4} m)",
        meters(.spacing),
        meters(.min),
        meters(.max)
    )]
    ShankSpacing {
        spacing: Length,
        min: Length,
        max: Length,
    },

    #[error(
        "pipe of {:.4} m outer diameter does not fit a {:.4} m bore",
        meters(.pipe_diameter),
        meters(.bore_diameter)
    )]
    PipeDoesNotFit {
        pipe_diameter: Length,
        bore_diameter: Length,
    },

    /// The multipole model gives a non-positive resistance for this layout.
    ///
    /// Happens with legs packed close together, or grout conducting worse
    /// than the pipe wall.
    #[error(
        "{term} resistance {:.4} K·m/W must be positive; widen the shank spacing \
         or use a more conductive grout",
        resistance(.value)
    )]
    NonPositiveResistance {
        term: &'static str,
        value: LinearThermalResistance,
    },

    #[error("at least one borehole is required")]
    NoBoreholes,
}

fn celsius(temperature: &ThermodynamicTemperature) -> f64 {
    temperature.get::<degree_celsius>()
}

fn kelvin(interval: &TemperatureInterval) -> f64 {
    interval.get::<delta_kelvin>()
}

fn resistance(value: &LinearThermalResistance) -> f64 {
    value.value
}

fn meters(length: &Length) -> f64 {
    length.get::<meter>()
}
