//! Steady-state thermal resistances between borehole wall and fluid.
//!
//! All resistances are per unit borehole length (K·m/W). The multipole
//! expressions follow Hellström (1991) to first order for a symmetric
//! U-tube. The double-U variant is an empirical reduction of the single-U
//! result, not a four-pipe multipole solution.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{Length, ThermalConductivity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    volume_rate::cubic_meter_per_second,
};

use crate::support::{
    borehole::FluidProperties,
    units::{LinearThermalResistance, linear_thermal_resistance},
};

/// Reynolds number at and below which flow is treated as laminar.
pub const CRITICAL_REYNOLDS: f64 = 2300.0;

/// Nusselt number for fully developed laminar flow at constant wall temperature.
pub const LAMINAR_NUSSELT: f64 = 3.66;

/// Flow regime inside a pipe leg, selecting the Nusselt correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowRegime {
    /// Constant Nusselt number, [`LAMINAR_NUSSELT`].
    Laminar,
    /// Dittus–Boelter, `Nu = 0.023·Re^0.8·Pr^0.4`.
    Turbulent,
}

impl FlowRegime {
    #[must_use]
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds > CRITICAL_REYNOLDS {
            Self::Turbulent
        } else {
            Self::Laminar
        }
    }
}

/// Borehole resistance and internal leg-to-leg resistance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoreholeResistance {
    /// Borehole wall to pipe wall, `R_b`.
    pub borehole: LinearThermalResistance,
    /// Between the downward and upward legs, `R_a`.
    pub internal: LinearThermalResistance,
}

/// Symmetric U-tube placement inside a grouted borehole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UTubeLayout {
    pub borehole_radius: Length,
    pub pipe_outer_radius: Length,
    /// Center-to-center distance between the two legs.
    pub shank_spacing: Length,
    pub pipe_conductivity: ThermalConductivity,
    pub grout_conductivity: ThermalConductivity,
}

/// A cylindrical pipe wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeWall {
    pub inner_radius: Length,
    pub outer_radius: Length,
    pub conductivity: ThermalConductivity,
}

/// Concentric pipes centered in a grouted borehole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoaxialLayout {
    pub borehole_radius: Length,
    pub outer_pipe: PipeWall,
    pub inner_pipe: PipeWall,
    pub grout_conductivity: ThermalConductivity,
    /// Conductivity of the medium filling the annulus between the pipes.
    pub annulus_conductivity: ThermalConductivity,
}

/// Conductive resistance of a pipe wall, `ln(d_o/d_i) / (2πλ)`.
///
/// Returns zero when `λ ≤ 0`, `d_i ≤ 0`, or `d_o ≤ d_i`.
#[must_use]
pub fn pipe_resistance(
    inner_diameter: Length,
    outer_diameter: Length,
    conductivity: ThermalConductivity,
) -> LinearThermalResistance {
    let d_i = inner_diameter.get::<meter>();
    let d_o = outer_diameter.get::<meter>();
    let lambda = conductivity.get::<watt_per_meter_kelvin>();

    if lambda <= 0.0 || d_i <= 0.0 || d_o <= d_i {
        return linear_thermal_resistance(0.0);
    }

    linear_thermal_resistance((d_o / d_i).ln() / (2.0 * PI * lambda))
}

/// Reynolds number of the flow through one pipe leg.
///
/// Returns zero when the diameter, flow rate, or viscosity is not positive.
#[must_use]
pub fn reynolds_number(inner_diameter: Length, fluid: &FluidProperties) -> f64 {
    let d = inner_diameter.get::<meter>();
    let flow = fluid.flow_rate.get::<cubic_meter_per_second>();
    let mu = fluid.viscosity.get::<pascal_second>();

    if d <= 0.0 || flow <= 0.0 || mu <= 0.0 {
        return 0.0;
    }

    let velocity = flow / (PI * (d / 2.0).powi(2));
    fluid.density.get::<kilogram_per_cubic_meter>() * velocity * d / mu
}

/// Convective film resistance on the inside of one pipe leg.
///
/// Returns zero when the diameter or flow rate is not positive, which callers
/// treat as a negligible term.
#[must_use]
pub fn convection_resistance(
    inner_diameter: Length,
    fluid: &FluidProperties,
) -> LinearThermalResistance {
    let d = inner_diameter.get::<meter>();
    let lambda = fluid.conductivity.get::<watt_per_meter_kelvin>();

    if d <= 0.0 || fluid.flow_rate.get::<cubic_meter_per_second>() <= 0.0 || lambda <= 0.0 {
        return linear_thermal_resistance(0.0);
    }

    let reynolds = reynolds_number(inner_diameter, fluid);
    let nusselt = match FlowRegime::from_reynolds(reynolds) {
        FlowRegime::Laminar => LAMINAR_NUSSELT,
        FlowRegime::Turbulent => {
            let prandtl = fluid.viscosity.get::<pascal_second>()
                * fluid.specific_heat_capacity.get::<joule_per_kilogram_kelvin>()
                / lambda;
            0.023 * reynolds.powf(0.8) * prandtl.powf(0.4)
        }
    };

    let film_coefficient = nusselt * lambda / d;
    linear_thermal_resistance(1.0 / (film_coefficient * PI * d))
}

/// First-order multipole resistances of a single U-tube.
///
/// The first-order correction applies only when the shape parameter
/// `σ = (r_b/r_p)·√(s/(2·r_b))` exceeds one; otherwise the zeroth-order
/// logarithmic term is used alone.
///
/// Positivity of the result is not guaranteed for every geometry. Very small
/// boreholes relative to the pipes can drive the image term negative.
#[must_use]
pub fn single_u(layout: &UTubeLayout) -> BoreholeResistance {
    let r_b = layout.borehole_radius.get::<meter>();
    let r_p = layout.pipe_outer_radius.get::<meter>();
    let s = layout.shank_spacing.get::<meter>();
    let lambda_p = layout.pipe_conductivity.get::<watt_per_meter_kelvin>();
    let lambda_g = layout.grout_conductivity.get::<watt_per_meter_kelvin>();

    let beta = (lambda_g - lambda_p) / (lambda_g + lambda_p);
    let two_pi_lambda = 2.0 * PI * lambda_g;

    // Legs sit at ±s/2 on a diameter.
    let (x1, x2) = (s / 2.0, -s / 2.0);
    let image = ((r_b.powi(2) - x1 * x2) / (r_b * s)).ln();
    let r_12 = ((s / (2.0 * r_p)).ln() + beta * image) / two_pi_lambda;

    let sigma = (r_b / r_p) * (s / (2.0 * r_b)).sqrt();
    let borehole = if sigma > 1.0 {
        ((r_b / r_p).ln() + beta * (r_b / s).ln()) / two_pi_lambda
    } else {
        (r_b / r_p).ln() / two_pi_lambda
    };

    BoreholeResistance {
        borehole: linear_thermal_resistance(borehole),
        internal: linear_thermal_resistance(2.0 * r_12),
    }
}

/// Double U-tube resistances as a corrected single U-tube.
///
/// The four legs are lumped into one pair with twice the pipe radius and the
/// diagonal spacing `2s/√2`, then `R_b` is scaled by 0.7 and `R_a` by 0.5.
/// These factors are empirical and are a known fidelity limitation.
#[must_use]
pub fn double_u(layout: &UTubeLayout) -> BoreholeResistance {
    let lumped = UTubeLayout {
        pipe_outer_radius: 2.0 * layout.pipe_outer_radius,
        shank_spacing: 2.0 * layout.shank_spacing / 2.0_f64.sqrt(),
        ..*layout
    };
    let single = single_u(&lumped);

    BoreholeResistance {
        borehole: 0.7 * single.borehole,
        internal: 0.5 * single.internal,
    }
}

/// Coaxial probe resistances.
///
/// `R_b` is the outer pipe wall plus the grout ring out to the borehole wall.
/// `R_a` is the inner pipe wall plus the annulus between the pipes.
#[must_use]
pub fn coaxial(layout: &CoaxialLayout) -> BoreholeResistance {
    let outer_wall = wall_resistance(&layout.outer_pipe);
    let inner_wall = wall_resistance(&layout.inner_pipe);

    let grout = ring_resistance(
        layout.outer_pipe.outer_radius,
        layout.borehole_radius,
        layout.grout_conductivity,
    );
    let annulus = ring_resistance(
        layout.inner_pipe.outer_radius,
        layout.outer_pipe.inner_radius,
        layout.annulus_conductivity,
    );

    BoreholeResistance {
        borehole: outer_wall + grout,
        internal: inner_wall + annulus,
    }
}

/// Total fluid-to-borehole-wall resistance, `R_b + R_pipe + R_conv`.
#[must_use]
pub fn effective_resistance(
    borehole: LinearThermalResistance,
    pipe: LinearThermalResistance,
    convection: LinearThermalResistance,
) -> LinearThermalResistance {
    borehole + pipe + convection
}

fn wall_resistance(wall: &PipeWall) -> LinearThermalResistance {
    pipe_resistance(
        2.0 * wall.inner_radius,
        2.0 * wall.outer_radius,
        wall.conductivity,
    )
}

/// Conduction through a cylindrical ring, same domain rules as a pipe wall.
fn ring_resistance(
    inner_radius: Length,
    outer_radius: Length,
    conductivity: ThermalConductivity,
) -> LinearThermalResistance {
    pipe_resistance(2.0 * inner_radius, 2.0 * outer_radius, conductivity)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{DynamicViscosity, MassDensity, SpecificHeatCapacity, VolumeRate},
        length::millimeter,
    };

    fn conductivity(value: f64) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(value)
    }

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    fn brine(flow_rate: f64) -> FluidProperties {
        FluidProperties {
            conductivity: conductivity(0.48),
            specific_heat_capacity: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(3800.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(1030.0),
            viscosity: DynamicViscosity::new::<pascal_second>(0.004),
            flow_rate: VolumeRate::new::<cubic_meter_per_second>(flow_rate),
        }
    }

    fn u_tube(borehole_diameter: f64, pipe_diameter: f64, spacing: f64) -> UTubeLayout {
        UTubeLayout {
            borehole_radius: mm(borehole_diameter / 2.0),
            pipe_outer_radius: mm(pipe_diameter / 2.0),
            shank_spacing: mm(spacing),
            pipe_conductivity: conductivity(0.42),
            grout_conductivity: conductivity(1.3),
        }
    }

    #[test]
    fn pipe_wall() {
        let r = pipe_resistance(mm(32.6), mm(40.0), conductivity(0.42));
        assert_relative_eq!(r.value, 0.077_518_75, max_relative = 1e-6);
    }

    #[test]
    fn pipe_wall_out_of_domain_is_zero() {
        assert_eq!(pipe_resistance(mm(40.0), mm(40.0), conductivity(0.42)).value, 0.0);
        assert_eq!(pipe_resistance(mm(41.0), mm(40.0), conductivity(0.42)).value, 0.0);
        assert_eq!(pipe_resistance(mm(0.0), mm(40.0), conductivity(0.42)).value, 0.0);
        assert_eq!(pipe_resistance(mm(32.6), mm(40.0), conductivity(0.0)).value, 0.0);
    }

    #[test]
    fn turbulent_convection() {
        let fluid = brine(0.0005);
        let reynolds = reynolds_number(mm(32.6), &fluid);

        assert_relative_eq!(reynolds, 5028.5, max_relative = 1e-4);
        assert_eq!(FlowRegime::from_reynolds(reynolds), FlowRegime::Turbulent);

        let r = convection_resistance(mm(32.6), &fluid);
        assert_relative_eq!(r.value, 0.007_915_7, max_relative = 1e-4);
    }

    #[test]
    fn laminar_convection_is_independent_of_diameter() {
        let fluid = brine(0.000_05);
        assert_eq!(
            FlowRegime::from_reynolds(reynolds_number(mm(32.6), &fluid)),
            FlowRegime::Laminar
        );

        // R = 1 / (π·Nu·λ) once h = Nu·λ/d.
        let expected = 1.0 / (PI * LAMINAR_NUSSELT * 0.48);
        assert_relative_eq!(
            convection_resistance(mm(32.6), &fluid).value,
            expected,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convection_resistance(mm(26.0), &fluid).value,
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn regime_threshold_is_inclusive_laminar() {
        assert_eq!(FlowRegime::from_reynolds(2300.0), FlowRegime::Laminar);
        assert_eq!(FlowRegime::from_reynolds(2300.1), FlowRegime::Turbulent);
    }

    #[test]
    fn convection_without_flow_is_zero() {
        assert_eq!(convection_resistance(mm(32.6), &brine(0.0)).value, 0.0);
        assert_eq!(convection_resistance(mm(0.0), &brine(0.0005)).value, 0.0);
        assert_eq!(reynolds_number(mm(32.6), &brine(0.0)), 0.0);
    }

    #[test]
    fn single_u_reference_values() {
        let narrow = single_u(&u_tube(115.0, 40.0, 52.0));
        assert_relative_eq!(narrow.borehole.value, 0.135_586_835, max_relative = 1e-8);
        assert_relative_eq!(narrow.internal.value, 0.100_141_102, max_relative = 1e-8);

        let standard = single_u(&u_tube(152.0, 40.0, 52.0));
        assert_relative_eq!(standard.borehole.value, 0.187_210_109, max_relative = 1e-8);
        assert_relative_eq!(standard.internal.value, 0.125_646_238, max_relative = 1e-8);
    }

    #[test]
    fn single_u_zeroth_order_branch() {
        // σ = (76/20)·√(10/152) < 1
        let layout = u_tube(152.0, 40.0, 10.0);
        let r = single_u(&layout);

        assert_relative_eq!(
            r.borehole.value,
            (76.0_f64 / 20.0).ln() / (2.0 * PI * 1.3),
            max_relative = 1e-12
        );
    }

    #[test]
    fn double_u_reduces_single_u() {
        let layout = u_tube(152.0, 40.0, 52.0);
        let double = double_u(&layout);

        assert_relative_eq!(double.borehole.value, 0.056_449_351, max_relative = 1e-7);
        assert_relative_eq!(double.internal.value, 0.004_926_048, max_relative = 1e-6);

        let lumped = single_u(&UTubeLayout {
            pipe_outer_radius: mm(40.0),
            shank_spacing: mm(104.0 / 2.0_f64.sqrt()),
            ..layout
        });
        assert_relative_eq!(
            double.borehole.value,
            0.7 * lumped.borehole.value,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            double.internal.value,
            0.5 * lumped.internal.value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn u_tubes_positive_over_practical_geometries() {
        for borehole in [130.0, 152.0, 200.0] {
            for pipe in [25.0, 32.0, 40.0] {
                for fraction in [0.0, 0.25, 0.5, 0.75, 0.95] {
                    let min_spacing = 1.5 * pipe;
                    let spacing = min_spacing + fraction * ((borehole - pipe) - min_spacing);

                    for lambda_p in [0.35, 0.42] {
                        for lambda_g in [0.8, 1.3, 2.0] {
                            let layout = UTubeLayout {
                                pipe_conductivity: conductivity(lambda_p),
                                grout_conductivity: conductivity(lambda_g),
                                ..u_tube(borehole, pipe, spacing)
                            };

                            for r in [single_u(&layout), double_u(&layout)] {
                                assert!(r.borehole.value > 0.0, "{layout:?}");
                                assert!(r.internal.value > 0.0, "{layout:?}");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn coaxial_sums_walls_and_rings() {
        let outer_pipe = PipeWall {
            inner_radius: mm(28.0),
            outer_radius: mm(31.5),
            conductivity: conductivity(0.42),
        };
        let inner_pipe = PipeWall {
            inner_radius: mm(16.0),
            outer_radius: mm(20.0),
            conductivity: conductivity(0.42),
        };
        let r = coaxial(&CoaxialLayout {
            borehole_radius: mm(76.0),
            outer_pipe,
            inner_pipe,
            grout_conductivity: conductivity(1.3),
            annulus_conductivity: conductivity(0.48),
        });

        let two_pi = 2.0 * PI;
        let expected_borehole =
            (31.5_f64 / 28.0).ln() / (two_pi * 0.42) + (76.0_f64 / 31.5).ln() / (two_pi * 1.3);
        let expected_internal =
            (20.0_f64 / 16.0).ln() / (two_pi * 0.42) + (28.0_f64 / 20.0).ln() / (two_pi * 0.48);

        assert_relative_eq!(r.borehole.value, expected_borehole, max_relative = 1e-12);
        assert_relative_eq!(r.internal.value, expected_internal, max_relative = 1e-12);
        assert!(r.borehole.value > 0.0 && r.internal.value > 0.0);
    }

    #[test]
    fn effective_is_a_plain_sum() {
        let total = effective_resistance(
            linear_thermal_resistance(0.187_210_109),
            linear_thermal_resistance(0.077_518_75),
            linear_thermal_resistance(0.007_915_7),
        );
        assert_relative_eq!(total.value, 0.272_644_559, max_relative = 1e-9);
    }
}
