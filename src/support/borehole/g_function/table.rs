use uom::si::{
    f64::{DiffusionCoefficient, Length, Time},
    time::second,
};

use crate::support::units::SECONDS_PER_YEAR;

use super::{characteristic_time, finite_line_source};

/// Number of tabulated nodes.
pub const TABLE_NODES: usize = 50;

/// First tabulated time, in seconds (one hour).
pub const TABLE_START: f64 = 3600.0;

/// Tabulated finite line source response for one borehole.
///
/// Nodes are log-spaced in time from one hour to the simulation horizon and
/// keyed by `ln(t/t_s)`. Lookups interpolate linearly in that coordinate and
/// extend the end segments linearly outside the tabulated range.
///
/// A table is tied to the depth and diffusivity it was built for. Build a new
/// one whenever either changes.
#[derive(Debug, Clone, PartialEq)]
pub struct GFunctionTable {
    characteristic_time: f64,
    times: [f64; TABLE_NODES],
    log_ratios: [f64; TABLE_NODES],
    values: [f64; TABLE_NODES],
}

impl GFunctionTable {
    /// Tabulates the response over `years` years of 365.25 days.
    #[must_use]
    pub fn build(
        depth: Length,
        radius: Length,
        diffusivity: DiffusionCoefficient,
        years: f64,
    ) -> Self {
        let t_s = characteristic_time(depth, diffusivity).get::<second>();

        let start = TABLE_START.log10();
        let end = (years * SECONDS_PER_YEAR).log10();
        let step = (end - start) / (TABLE_NODES - 1) as f64;

        let times: [f64; TABLE_NODES] =
            std::array::from_fn(|i| 10.0_f64.powf(start + step * i as f64));
        let log_ratios = times.map(|t| (t / t_s).ln());
        let values = times.map(|t| {
            finite_line_source(Time::new::<second>(t), depth, radius, diffusivity)
        });

        Self {
            characteristic_time: t_s,
            times,
            log_ratios,
            values,
        }
    }

    /// Characteristic time `t_s` the nodes are keyed against.
    #[must_use]
    pub fn characteristic_time(&self) -> Time {
        Time::new::<second>(self.characteristic_time)
    }

    /// Tabulated `(time, g)` pairs in increasing time.
    pub fn nodes(&self) -> impl Iterator<Item = (Time, f64)> + '_ {
        self.times
            .iter()
            .zip(&self.values)
            .map(|(&t, &g)| (Time::new::<second>(t), g))
    }

    /// Linearly interpolated response at `time`.
    ///
    /// Returns zero for `t ≤ 0` or when the table was built for a degenerate
    /// depth or diffusivity.
    #[must_use]
    pub fn interpolate(&self, time: Time) -> f64 {
        let t = time.get::<second>();
        let t_s = self.characteristic_time;
        if t <= 0.0 || !(t_s > 0.0 && t_s.is_finite()) {
            return 0.0;
        }

        let x = (t / t_s).ln();
        let i = self
            .log_ratios
            .partition_point(|&node| node <= x)
            .clamp(1, TABLE_NODES - 1)
            - 1;

        let (x0, x1) = (self.log_ratios[i], self.log_ratios[i + 1]);
        let (g0, g1) = (self.values[i], self.values[i + 1]);
        if x1 == x0 {
            return g0;
        }
        g0 + (g1 - g0) * (x - x0) / (x1 - x0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        diffusion_coefficient::square_meter_per_second, length::meter, time::hour,
    };

    use crate::support::units::years;

    fn table() -> GFunctionTable {
        GFunctionTable::build(
            Length::new::<meter>(100.0),
            Length::new::<meter>(0.076),
            DiffusionCoefficient::new::<square_meter_per_second>(1.0e-6),
            25.0,
        )
    }

    #[test]
    fn spans_one_hour_to_horizon() {
        let table = table();
        let nodes: Vec<_> = table.nodes().collect();

        assert_eq!(nodes.len(), TABLE_NODES);
        assert_relative_eq!(nodes[0].0.get::<hour>(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(
            nodes[TABLE_NODES - 1].0.get::<second>(),
            years(25.0).get::<second>(),
            max_relative = 1e-12
        );
        assert!(nodes.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn exact_at_nodes() {
        let table = table();
        for (time, g) in table.nodes() {
            let closed_form = finite_line_source(
                time,
                Length::new::<meter>(100.0),
                Length::new::<meter>(0.076),
                DiffusionCoefficient::new::<square_meter_per_second>(1.0e-6),
            );
            assert_relative_eq!(table.interpolate(time), closed_form, epsilon = 1e-12);
            assert_relative_eq!(g, closed_form, epsilon = 1e-12);
        }
    }

    #[test]
    fn linear_between_nodes() {
        let table = table();
        let nodes: Vec<_> = table.nodes().collect();

        for pair in nodes.windows(2) {
            let (t0, g0) = pair[0];
            let (t1, g1) = pair[1];
            // Geometric mean sits halfway in ln(t/t_s).
            let mid = Time::new::<second>((t0.get::<second>() * t1.get::<second>()).sqrt());
            assert_relative_eq!(table.interpolate(mid), 0.5 * (g0 + g1), epsilon = 1e-9);
        }
    }

    #[test]
    fn extrapolates_end_segments() {
        let table = table();
        let nodes: Vec<_> = table.nodes().collect();

        let (t_a, g_a) = nodes[TABLE_NODES - 2];
        let (t_b, g_b) = nodes[TABLE_NODES - 1];
        let slope = (g_b - g_a) / (t_b.get::<second>() / t_a.get::<second>()).ln();

        // One e-fold past the last node.
        let beyond = Time::new::<second>(t_b.get::<second>() * std::f64::consts::E);
        assert_relative_eq!(table.interpolate(beyond), g_b + slope, epsilon = 1e-9);

        // The earliest nodes are floored at zero.
        let (t_first, g_first) = nodes[0];
        assert_eq!(g_first, 0.0);
        let earlier = Time::new::<second>(t_first.get::<second>() / 2.0);
        let (_, g_second) = nodes[1];
        assert!(table.interpolate(earlier) <= g_second);
    }

    #[test]
    fn degenerate_tables_return_zero() {
        let flat = GFunctionTable::build(
            Length::new::<meter>(0.0),
            Length::new::<meter>(0.076),
            DiffusionCoefficient::new::<square_meter_per_second>(1.0e-6),
            25.0,
        );
        assert_eq!(flat.interpolate(years(10.0)), 0.0);
        assert_eq!(table().interpolate(Time::new::<second>(0.0)), 0.0);
    }
}
