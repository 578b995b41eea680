pub mod constants;
pub mod states;
pub mod species;
pub mod params;
pub mod integrator;
pub mod diagnostics;
pub mod scenario;
