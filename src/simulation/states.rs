//! Core state types for the particle integrator.
//!
//! - `ParticleState` – one (position, velocity) sample
//! - `Trajectory`    – the ordered position/velocity series of one species
//!
//! Positions are in metres, velocities in m/s, both 2D (`NVec2`).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

/// Position and velocity series indexed by step `0..len()`.
///
/// Both series always have the same length. Index 0 is the initial condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    positions: Vec<NVec2>,
    velocities: Vec<NVec2>,
}

impl Trajectory {
    /// Start a trajectory from its initial condition, reserving room for `steps` samples
    pub fn with_initial(initial: ParticleState, steps: usize) -> Self {
        let mut positions = Vec::with_capacity(steps.max(1));
        let mut velocities = Vec::with_capacity(steps.max(1));
        positions.push(initial.x);
        velocities.push(initial.v);
        Self { positions, velocities }
    }

    pub(crate) fn push(&mut self, state: ParticleState) {
        self.positions.push(state.x);
        self.velocities.push(state.v);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[NVec2] {
        &self.positions
    }

    pub fn velocities(&self) -> &[NVec2] {
        &self.velocities
    }

    /// Sample at step `k`, if it exists
    pub fn state(&self, k: usize) -> Option<ParticleState> {
        Some(ParticleState {
            x: *self.positions.get(k)?,
            v: *self.velocities.get(k)?,
        })
    }

    pub fn initial(&self) -> ParticleState {
        ParticleState { x: self.positions[0], v: self.velocities[0] }
    }

    pub fn last(&self) -> ParticleState {
        let k = self.len() - 1;
        ParticleState { x: self.positions[k], v: self.velocities[k] }
    }

    /// Speed |v| at every step
    pub fn speeds(&self) -> Vec<f64> {
        self.velocities.iter().map(|v| v.norm()).collect()
    }

    /// Elapsed time at every step for a fixed step size `dt`
    pub fn times(&self, dt: f64) -> Vec<f64> {
        (0..self.len()).map(|k| k as f64 * dt).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, v: f64) -> ParticleState {
        ParticleState { x: NVec2::new(x, 0.0), v: NVec2::new(0.0, v) }
    }

    #[test]
    fn initial_sample_is_kept_at_index_zero() {
        let mut traj = Trajectory::with_initial(sample(1.0, 2.0), 3);
        traj.push(sample(3.0, 4.0));

        assert_eq!(traj.len(), 2);
        assert_eq!(traj.initial(), sample(1.0, 2.0));
        assert_eq!(traj.last(), sample(3.0, 4.0));
        assert_eq!(traj.state(2), None);
    }

    #[test]
    fn speeds_and_times_follow_samples() {
        let mut traj = Trajectory::with_initial(
            ParticleState { x: NVec2::zeros(), v: NVec2::new(3.0, 4.0) },
            2,
        );
        traj.push(sample(0.0, -2.0));

        assert_eq!(traj.speeds(), vec![5.0, 2.0]);
        assert_eq!(traj.times(0.5), vec![0.0, 0.5]);
    }
}
