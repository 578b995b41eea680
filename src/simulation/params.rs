//! Numerical and physical parameters for a run
//!
//! `Parameters` holds:
//! - step count and fixed step size,
//! - planetary radius and equatorial field magnitude,
//! - initial L-shell (start distance in planet radii)

use super::constants::{L_SHELL, MAGNETIC_FIELD, PLANET_RADIUS};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub steps: usize, // number of samples N (including the initial one)
    pub dt: f64, // step size (s)
    pub radius: f64, // planetary radius R (m)
    pub field: f64, // field magnitude B (T)
    pub l_shell: f64, // initial distance L, in units of R
}

impl Parameters {
    /// Reference run: 5000 steps of 1e-7 s at L = 4
    pub fn reference() -> Self {
        Self {
            steps: 5000,
            dt: 1e-7,
            radius: PLANET_RADIUS,
            field: MAGNETIC_FIELD,
            l_shell: L_SHELL,
        }
    }

    /// Initial radial distance L·R
    pub fn start_distance(&self) -> f64 {
        self.l_shell * self.radius
    }

    /// Simulated time span covered by the run
    pub fn duration(&self) -> f64 {
        self.steps.saturating_sub(1) as f64 * self.dt
    }
}
