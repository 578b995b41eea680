//! Fixed-step gyration integrator
//!
//! Explicit velocity rotation in a field that falls off as 1/r³, followed by a
//! trapezoidal (average velocity) position update. Every step depends only on
//! the previous one, and non-finite values are passed through untouched.

use log::debug;

use super::params::Parameters;
use super::species::Species;
use super::states::{NVec2, ParticleState, Trajectory};

/// Per-step rotation coefficient C = q·B·R³·dt / m
///
/// Negative for the electron and positive for the proton; the sign sets the
/// direction of gyration.
pub fn gyration_coefficient(species: &Species, params: &Parameters) -> f64 {
    species.charge * params.field * params.radius.powi(3) * params.dt / species.mass
}

/// Prescribed initial condition: at L·R on the x-axis, moving radially outward
pub fn initial_state(species: &Species, params: &Parameters) -> ParticleState {
    ParticleState {
        x: NVec2::new(params.start_distance(), 0.0),
        v: NVec2::new(species.initial_speed(), 0.0),
    }
}

/// Advance one sample by one step of size `dt`
pub fn step(prev: &ParticleState, coefficient: f64, dt: f64) -> ParticleState {
    // Local field strength divisor, taken at the previous position
    let r3 = prev.x.norm().powi(3);

    // Rotate the velocity: v_k = v_k-1 + C/r³ (vy, -vx)
    let v = NVec2::new(
        prev.v.x + coefficient * prev.v.y / r3,
        prev.v.y - coefficient * prev.v.x / r3,
    );

    // Trapezoidal drift: x_k = x_k-1 + dt (v_k-1 + v_k) / 2
    let x = prev.x + dt * (prev.v + v) * 0.5;

    ParticleState { x, v }
}

/// Integrate from an explicit initial state, producing `steps` samples
///
/// `steps` of 0 or 1 both yield only the initial sample.
pub fn integrate_from(initial: ParticleState, coefficient: f64, dt: f64, steps: usize) -> Trajectory {
    let mut traj = Trajectory::with_initial(initial, steps);
    let mut prev = initial;

    for _ in 1..steps {
        let next = step(&prev, coefficient, dt);
        traj.push(next);
        prev = next;
    }

    traj
}

/// Integrate one species over the run described by `params`
pub fn integrate(species: &Species, params: &Parameters) -> Trajectory {
    let c = gyration_coefficient(species, params);
    debug!(
        "integrate: {} with C = {:.4e}, {} steps of {:.1e} s",
        species.name, c, params.steps, params.dt
    );
    integrate_from(initial_state(species, params), c, params.dt, params.steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_sign_follows_charge() {
        let p = Parameters::reference();
        assert!(gyration_coefficient(&Species::electron(), &p) < 0.0);
        assert!(gyration_coefficient(&Species::proton(), &p) > 0.0);
    }

    #[test]
    fn reference_electron_coefficient() {
        // 1e-7 * 1.602e-19 / 9.109e-31 * 3.11e-5 * 6378^3 ~ -1.419e11
        let c = gyration_coefficient(&Species::electron(), &Parameters::reference());
        assert!((c / -1.419e11 - 1.0).abs() < 1e-3, "C = {c:e}");
    }

    #[test]
    fn step_rotates_then_drifts() {
        let prev = ParticleState { x: NVec2::new(2.0, 0.0), v: NVec2::new(1.0, 0.0) };
        // r³ = 8, so C = 8 gives a unit rotation factor
        let next = step(&prev, 8.0, 0.5);

        assert_eq!(next.v, NVec2::new(1.0, -1.0));
        assert_eq!(next.x, NVec2::new(2.5, -0.25));
    }

    #[test]
    fn zero_coefficient_is_free_flight() {
        let init = ParticleState { x: NVec2::new(1.0, 1.0), v: NVec2::new(2.0, -1.0) };
        let traj = integrate_from(init, 0.0, 0.1, 11);

        assert_eq!(traj.len(), 11);
        assert_eq!(traj.last().v, init.v);
        assert!((traj.last().x - NVec2::new(3.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn zero_steps_keeps_initial_sample() {
        let init = ParticleState { x: NVec2::new(1.0, 0.0), v: NVec2::new(0.0, 1.0) };
        let traj = integrate_from(init, 1.0, 0.1, 0);
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.initial(), init);
    }
}
