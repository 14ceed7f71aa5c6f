use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use crate::support::{
    borehole::resistance::{
        self, BoreholeResistance, CoaxialLayout, FlowRegime, PipeWall, UTubeLayout,
        convection_resistance, effective_resistance, pipe_resistance, reynolds_number,
    },
    units::{LinearThermalResistance, linear_thermal_resistance},
};

use super::{BoreholeDesign, PipeConfiguration};

/// Every resistance between the circulating fluid and the borehole wall.
///
/// None of these depend on depth, so each sizer evaluates them once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoreholeResistances {
    /// Borehole wall to pipe wall, `R_b`.
    pub borehole: LinearThermalResistance,
    /// Leg to leg, `R_a`.
    pub internal: LinearThermalResistance,
    /// Conduction through the pipe wall.
    pub pipe: LinearThermalResistance,
    /// Convective film inside the pipe.
    pub convection: LinearThermalResistance,
    /// `R_b + R_pipe + R_conv`.
    pub effective: LinearThermalResistance,
    pub reynolds_number: f64,
    pub flow_regime: FlowRegime,
}

impl BoreholeResistances {
    /// Evaluates the resistances of a design's pipe configuration.
    ///
    /// For a coaxial probe the outer pipe wall is already part of `R_b`, so
    /// the separate pipe term is zero, and the film is evaluated on the
    /// annulus hydraulic diameter.
    #[must_use]
    pub fn for_design(design: &BoreholeDesign) -> Self {
        let pipe = &design.pipe;

        let (split, pipe_term, flow_diameter) = match design.borehole.configuration {
            PipeConfiguration::SingleU => u_tube(design, resistance::single_u),
            PipeConfiguration::DoubleU => u_tube(design, resistance::double_u),
            PipeConfiguration::Coaxial { inner_pipe } => {
                let layout = CoaxialLayout {
                    borehole_radius: design.borehole.radius(),
                    outer_pipe: PipeWall {
                        inner_radius: pipe.inner_diameter() / 2.0,
                        outer_radius: pipe.outer_diameter / 2.0,
                        conductivity: pipe.conductivity,
                    },
                    inner_pipe: PipeWall {
                        inner_radius: inner_pipe.inner_diameter() / 2.0,
                        outer_radius: inner_pipe.outer_diameter / 2.0,
                        conductivity: inner_pipe.conductivity,
                    },
                    grout_conductivity: design.grout_conductivity,
                    annulus_conductivity: design.fluid.conductivity,
                };
                let hydraulic_diameter = pipe.inner_diameter() - inner_pipe.outer_diameter;
                (
                    resistance::coaxial(&layout),
                    linear_thermal_resistance(0.0),
                    hydraulic_diameter,
                )
            }
        };

        let convection = convection_resistance(flow_diameter, &design.fluid);
        let reynolds_number = reynolds_number(flow_diameter, &design.fluid);

        Self {
            borehole: split.borehole,
            internal: split.internal,
            pipe: pipe_term,
            convection,
            effective: effective_resistance(split.borehole, pipe_term, convection),
            reynolds_number,
            flow_regime: FlowRegime::from_reynolds(reynolds_number),
        }
    }
}

/// Multipole split plus wall and flow diameter for a U-tube layout.
fn u_tube(
    design: &BoreholeDesign,
    split: fn(&UTubeLayout) -> BoreholeResistance,
) -> (BoreholeResistance, LinearThermalResistance, Length) {
    let pipe = &design.pipe;
    let layout = UTubeLayout {
        borehole_radius: design.borehole.radius(),
        pipe_outer_radius: pipe.outer_diameter / 2.0,
        shank_spacing: pipe.shank_spacing,
        pipe_conductivity: pipe.conductivity,
        grout_conductivity: design.grout_conductivity,
    };
    let wall = pipe_resistance(pipe.inner_diameter(), pipe.outer_diameter, pipe.conductivity);

    (split(&layout), wall, pipe.inner_diameter())
}
