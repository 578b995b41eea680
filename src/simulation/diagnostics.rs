//! Derived quantities for a finished run
//!
//! Gyro-frequency estimates are used to pick a step size that resolves the
//! gyration; the speed checks back the plots (expected initial speed and the
//! speed of light as reference lines).

use std::f64::consts::PI;

use super::constants::SPEED_OF_LIGHT;
use super::params::Parameters;
use super::species::Species;
use super::states::Trajectory;

/// Angular gyro-frequency |q|·B / (L³·m) at the initial L-shell (rad/s)
pub fn gyro_frequency(species: &Species, params: &Parameters) -> f64 {
    species.charge.abs() * params.field / params.l_shell.powi(3) / species.mass
}

/// Gyration period 2π/ω at the initial L-shell (s)
pub fn gyro_period(species: &Species, params: &Parameters) -> f64 {
    2.0 * PI / gyro_frequency(species, params)
}

/// How many steps of `params.dt` fit in one gyration
pub fn steps_per_gyration(species: &Species, params: &Parameters) -> f64 {
    gyro_period(species, params) / params.dt
}

/// Largest | |v_k| / |v_0| - 1 | over the run
pub fn max_relative_speed_drift(traj: &Trajectory) -> f64 {
    let speeds = traj.speeds();
    let v0 = speeds[0];
    speeds
        .iter()
        .map(|v| (v / v0 - 1.0).abs())
        .fold(0.0, f64::max)
}

/// First step whose speed exceeds the speed of light, if any
pub fn first_superluminal_step(traj: &Trajectory) -> Option<usize> {
    traj.velocities().iter().position(|v| v.norm() > SPEED_OF_LIGHT)
}

/// Per-species numbers reported after a run
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub name: String,
    pub initial_speed: f64,
    pub final_speed: f64,
    pub max_speed_drift: f64,
    pub gyro_period: f64,
    pub steps_per_gyration: f64,
    pub superluminal_at: Option<usize>,
    pub finite: bool, // false once inf/NaN appeared anywhere
}

impl Summary {
    pub fn new(species: &Species, params: &Parameters, traj: &Trajectory) -> Self {
        let finite = traj
            .positions()
            .iter()
            .chain(traj.velocities())
            .all(|p| p.x.is_finite() && p.y.is_finite());

        Self {
            name: species.name.clone(),
            initial_speed: traj.initial().v.norm(),
            final_speed: traj.last().v.norm(),
            max_speed_drift: max_relative_speed_drift(traj),
            gyro_period: gyro_period(species, params),
            steps_per_gyration: steps_per_gyration(species, params),
            superluminal_at: first_superluminal_step(traj),
            finite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::{NVec2, ParticleState};

    fn from_speeds(speeds: &[f64]) -> Trajectory {
        let mut traj = Trajectory::with_initial(
            ParticleState { x: NVec2::zeros(), v: NVec2::new(speeds[0], 0.0) },
            speeds.len(),
        );
        for &s in &speeds[1..] {
            traj.push(ParticleState { x: NVec2::zeros(), v: NVec2::new(0.0, s) });
        }
        traj
    }

    #[test]
    fn electron_gyrates_faster_than_proton() {
        let p = Parameters::reference();
        let we = gyro_frequency(&Species::electron(), &p);
        let wp = gyro_frequency(&Species::proton(), &p);
        // ratio of the masses
        assert!((we / wp - 1.673e-27 / 9.109e-31).abs() < 1e-6 * (we / wp));
    }

    #[test]
    fn reference_step_resolves_electron_gyration() {
        // ~7.4e-5 s electron period, so ~700 steps of 1e-7 s
        let n = steps_per_gyration(&Species::electron(), &Parameters::reference());
        assert!(n > 500.0 && n < 1000.0, "steps per gyration = {n}");
    }

    #[test]
    fn drift_is_largest_deviation() {
        let traj = from_speeds(&[10.0, 10.5, 9.0, 10.1]);
        assert!((max_relative_speed_drift(&traj) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn superluminal_step_detected() {
        let traj = from_speeds(&[1.0e8, 2.0e8, 3.1e8, 3.2e8]);
        assert_eq!(first_superluminal_step(&traj), Some(2));
        assert_eq!(first_superluminal_step(&from_speeds(&[1.0, 2.0])), None);
    }
}
