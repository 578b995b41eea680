pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{NVec2, ParticleState, Trajectory};
pub use simulation::species::Species;
pub use simulation::params::Parameters;
pub use simulation::integrator::{gyration_coefficient, initial_state, integrate, integrate_from, step};
pub use simulation::diagnostics::{gyro_frequency, gyro_period, Summary};
pub use simulation::scenario::{Run, Scenario};

pub use configuration::config::{ParametersConfig, PresetConfig, ScenarioConfig, SpeciesConfig, ViewerConfig};

pub use visualization::gyro_vis2d::run_2d;

pub use benchmark::benchmark::bench_integrator_curve;

pub use error::{Error, Result};
