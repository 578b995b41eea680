//! Data-space to screen-space mapping for the viewer panels
//!
//! Everything here is plain geometry so it can be built and checked without a
//! running Bevy app. Non-finite samples are dropped from the drawn polylines.

use bevy::math::Vec2;

use crate::simulation::constants::SPEED_OF_LIGHT;
use crate::simulation::scenario::Run;

/// Fraction of each data span added as padding on both sides
const PADDING: f64 = 0.05;

/// A rectangular panel on screen showing `x_range` × `y_range` of data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPanel {
    pub center: Vec2, // screen center
    pub size: Vec2, // screen size
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

fn span(min: f64, max: f64) -> (f64, f64) {
    // Degenerate ranges (a single value) get a unit-ish window around the value
    if max > min {
        let pad = (max - min) * PADDING;
        (min - pad, max + pad)
    } else {
        let half = if min != 0.0 { min.abs() * 0.5 } else { 1.0 };
        (min - half, min + half)
    }
}

impl PlotPanel {
    /// Fit a panel around the finite points of `data`
    ///
    /// With `equal_aspect` one data unit has the same screen length on both
    /// axes, so gyration circles stay circular.
    pub fn fit(center: Vec2, size: Vec2, data: &[(f64, f64)], equal_aspect: bool) -> Self {
        let (mut x0, mut x1, mut y0, mut y1) = (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
        for &(x, y) in data.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            x0 = x0.min(x);
            x1 = x1.max(x);
            y0 = y0.min(y);
            y1 = y1.max(y);
        }
        if !x0.is_finite() {
            // nothing finite to show
            (x0, x1, y0, y1) = (0.0, 0.0, 0.0, 0.0);
        }

        let mut x_range = span(x0, x1);
        let mut y_range = span(y0, y1);

        if equal_aspect {
            let sx = (x_range.1 - x_range.0) / size.x as f64;
            let sy = (y_range.1 - y_range.0) / size.y as f64;
            let s = sx.max(sy);
            let (cx, cy) = (0.5 * (x_range.0 + x_range.1), 0.5 * (y_range.0 + y_range.1));
            let (hx, hy) = (0.5 * s * size.x as f64, 0.5 * s * size.y as f64);
            x_range = (cx - hx, cx + hx);
            y_range = (cy - hy, cy + hy);
        }

        Self { center, size, x_range, y_range }
    }

    /// Screen position of data point (x, y)
    pub fn map(&self, x: f64, y: f64) -> Vec2 {
        let u = (x - self.x_range.0) / (self.x_range.1 - self.x_range.0) - 0.5;
        let v = (y - self.y_range.0) / (self.y_range.1 - self.y_range.0) - 0.5;
        self.center + Vec2::new(u as f32 * self.size.x, v as f32 * self.size.y)
    }

    /// Closed outline of the panel, ready for a line strip
    pub fn frame(&self) -> [Vec2; 5] {
        let h = 0.5 * self.size;
        let c = self.center;
        [
            c + Vec2::new(-h.x, -h.y),
            c + Vec2::new(h.x, -h.y),
            c + Vec2::new(h.x, h.y),
            c + Vec2::new(-h.x, h.y),
            c + Vec2::new(-h.x, -h.y),
        ]
    }

    /// Horizontal line across the panel at data height `y`
    pub fn hline(&self, y: f64) -> [Vec2; 2] {
        let h = 0.5 * self.size.x;
        let at = self.map(self.x_range.0, y).y;
        [Vec2::new(self.center.x - h, at), Vec2::new(self.center.x + h, at)]
    }
}

/// Precomputed screen geometry for one species' column
#[derive(Debug, Clone)]
pub struct SpeciesPlot {
    pub name: String,
    pub trajectory_panel: PlotPanel,
    pub speed_panel: PlotPanel,
    pub path: Vec<Vec2>, // trajectory samples on screen, per step
    pub speed: Vec<Vec2>, // speed-vs-time samples on screen, per step
    pub initial_speed_line: [Vec2; 2],
    pub light_speed_line: Option<[Vec2; 2]>,
}

impl SpeciesPlot {
    /// Lay out the column for `run`, centered horizontally at `center_x`
    pub fn build(run: &Run, dt: f64, center_x: f32, width: f32) -> Self {
        let traj = &run.trajectory;

        let xy: Vec<(f64, f64)> = traj.positions().iter().map(|p| (p.x, p.y)).collect();
        let trajectory_panel = PlotPanel::fit(Vec2::new(center_x, 130.0), Vec2::new(width, 420.0), &xy, true);

        // Speed panel always shows the expected initial speed; c only when the
        // run gets within a factor of two of it
        let v0 = run.species.initial_speed();
        let mut ts: Vec<(f64, f64)> = traj.times(dt).into_iter().zip(traj.speeds()).collect();
        let v_max = ts.iter().map(|&(_, v)| v).filter(|v| v.is_finite()).fold(v0, f64::max);
        let show_c = v_max > 0.5 * SPEED_OF_LIGHT;
        ts.push((0.0, v0));
        if show_c {
            ts.push((0.0, SPEED_OF_LIGHT));
        }
        let speed_panel = PlotPanel::fit(Vec2::new(center_x, -280.0), Vec2::new(width, 240.0), &ts, false);
        ts.truncate(traj.len());

        Self {
            name: run.species.name.clone(),
            path: xy.iter().map(|&(x, y)| trajectory_panel.map(x, y)).collect(),
            speed: ts.iter().map(|&(t, v)| speed_panel.map(t, v)).collect(),
            initial_speed_line: speed_panel.hline(v0),
            light_speed_line: show_c.then(|| speed_panel.hline(SPEED_OF_LIGHT)),
            trajectory_panel,
            speed_panel,
        }
    }
}

/// Drop non-finite points, which cannot be drawn
pub fn drawable(points: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    points.iter().copied().filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::scenario::Scenario;

    #[test]
    fn corners_map_to_panel_edges() {
        let p = PlotPanel {
            center: Vec2::new(10.0, 20.0),
            size: Vec2::new(100.0, 50.0),
            x_range: (0.0, 4.0),
            y_range: (-1.0, 1.0),
        };
        assert_eq!(p.map(0.0, -1.0), Vec2::new(-40.0, -5.0));
        assert_eq!(p.map(4.0, 1.0), Vec2::new(60.0, 45.0));
        assert_eq!(p.map(2.0, 0.0), p.center);
    }

    #[test]
    fn fit_pads_around_data() {
        let p = PlotPanel::fit(Vec2::ZERO, Vec2::new(100.0, 100.0), &[(0.0, 0.0), (10.0, 20.0)], false);
        assert!(p.x_range.0 < 0.0 && p.x_range.1 > 10.0);
        assert!(p.y_range.0 < 0.0 && p.y_range.1 > 20.0);
    }

    #[test]
    fn equal_aspect_uses_one_scale() {
        let p = PlotPanel::fit(Vec2::ZERO, Vec2::new(200.0, 100.0), &[(0.0, 0.0), (10.0, 10.0)], true);
        let sx = (p.x_range.1 - p.x_range.0) / 200.0;
        let sy = (p.y_range.1 - p.y_range.0) / 100.0;
        assert!((sx - sy).abs() < 1e-12);
    }

    #[test]
    fn fit_ignores_non_finite_and_single_points() {
        let p = PlotPanel::fit(Vec2::ZERO, Vec2::ONE, &[(5.0, 5.0), (f64::NAN, f64::INFINITY)], false);
        assert!(p.x_range.0 < 5.0 && p.x_range.1 > 5.0);
        assert!(p.y_range.0.is_finite() && p.y_range.1.is_finite());
    }

    #[test]
    fn species_plot_has_one_point_per_step() {
        let mut sc = Scenario::reference();
        sc.parameters.steps = 200;
        let runs = sc.run();

        let electron = SpeciesPlot::build(&runs[0], sc.parameters.dt, -400.0, 700.0);
        assert_eq!(electron.path.len(), 200);
        assert_eq!(electron.speed.len(), 200);
        // 100 keV electron is within a factor two of c
        assert!(electron.light_speed_line.is_some());

        let proton = SpeciesPlot::build(&runs[1], sc.parameters.dt, 400.0, 700.0);
        assert!(proton.light_speed_line.is_none());
    }
}
