//! Build validated gyration scenarios from configuration and run them
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`:
//! - numerical and field parameters (`Parameters`)
//! - the species to integrate (`Species`)
//! - viewer playback settings
//!
//! Running a scenario integrates every species independently and returns one
//! `Run` per species, in config order. The scenario is inserted into Bevy as a
//! `Resource` when the viewer is used.

use bevy::prelude::Resource;
use log::{info, warn};
use rayon::prelude::*;

use crate::configuration::config::{PresetConfig, ScenarioConfig, SpeciesConfig, ViewerConfig};
use crate::error::{Error, Result};
use crate::simulation::constants::ev_to_joules;
use crate::simulation::diagnostics::Summary;
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::species::Species;
use crate::simulation::states::Trajectory;

/// Result of integrating one species
#[derive(Debug, Clone)]
pub struct Run {
    pub species: Species,
    pub trajectory: Trajectory,
    pub summary: Summary,
}

/// Bevy resource holding a fully-validated scenario
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub species: Vec<Species>,
    pub viewer: ViewerConfig,
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidParam(msg.into())
}

fn positive(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid(format!("{what} must be finite and > 0, got {value}")))
    }
}

fn finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(format!("{what} must be finite, got {value}")))
    }
}

/// Map one `SpeciesConfig` to a runtime `Species`, falling back to preset values
fn build_species(idx: usize, sc: &SpeciesConfig) -> Result<Species> {
    let base = match sc.preset {
        Some(PresetConfig::Electron) => Some(Species::electron()),
        Some(PresetConfig::Proton) => Some(Species::proton()),
        None => None,
    };

    let name = sc
        .name
        .clone()
        .or_else(|| base.as_ref().map(|b| b.name.clone()))
        .unwrap_or_else(|| format!("species {idx}"));

    let missing = |field: &str| invalid(format!("{name}: `{field}` is required without a preset"));

    let charge = match (sc.charge, &base) {
        (Some(q), _) => q,
        (None, Some(b)) => b.charge,
        (None, None) => return Err(missing("charge")),
    };
    let mass = match (sc.mass, &base) {
        (Some(m), _) => m,
        (None, Some(b)) => b.mass,
        (None, None) => return Err(missing("mass")),
    };
    let energy = match (sc.energy_ev, &base) {
        (Some(ev), _) => ev_to_joules(ev),
        (None, Some(b)) => b.energy,
        (None, None) => return Err(missing("energy_ev")),
    };

    finite(charge, &format!("{name} charge"))?;
    positive(mass, &format!("{name} mass"))?;
    if !(energy.is_finite() && energy >= 0.0) {
        return Err(invalid(format!("{name} energy must be finite and >= 0, got {energy}")));
    }

    Ok(Species { name, charge, mass, energy })
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if p_cfg.steps == 0 {
            return Err(invalid("steps must be >= 1"));
        }
        let parameters = Parameters {
            steps: p_cfg.steps,
            dt: positive(p_cfg.dt, "dt")?,
            radius: positive(p_cfg.radius, "radius")?,
            field: finite(p_cfg.field, "field")?,
            l_shell: positive(p_cfg.l_shell, "l_shell")?,
        };

        // Species: map `SpeciesConfig` -> runtime `Species`
        if cfg.species.is_empty() {
            return Err(invalid("at least one species is required"));
        }
        let species = cfg
            .species
            .iter()
            .enumerate()
            .map(|(i, sc)| build_species(i, sc))
            .collect::<Result<Vec<_>>>()?;

        let viewer = ViewerConfig {
            steps_per_frame: cfg.viewer.steps_per_frame.max(1),
        };

        Ok(Self { parameters, species, viewer })
    }

    /// Electron and proton at L = 4 with the reference parameters
    pub fn reference() -> Self {
        Self {
            parameters: Parameters::reference(),
            species: vec![Species::electron(), Species::proton()],
            viewer: ViewerConfig::default(),
        }
    }

    /// Integrate every species. Species share nothing, so they run in parallel
    pub fn run(&self) -> Vec<Run> {
        let params = &self.parameters;
        info!(
            "running {} species: {} steps of {:.1e} s ({:.3e} s simulated)",
            self.species.len(),
            params.steps,
            params.dt,
            params.duration(),
        );
        let runs: Vec<Run> = self
            .species
            .par_iter()
            .map(|s| {
                let trajectory = integrate(s, params);
                let summary = Summary::new(s, params, &trajectory);
                Run { species: s.clone(), trajectory, summary }
            })
            .collect();

        for r in &runs {
            log_summary(&r.summary);
        }
        runs
    }
}

fn log_summary(s: &Summary) {
    info!(
        "{}: v0 = {:.4e} m/s, v_end = {:.4e} m/s, max speed drift = {:.3}%, gyro period = {:.3e} s ({:.0} steps)",
        s.name,
        s.initial_speed,
        s.final_speed,
        100.0 * s.max_speed_drift,
        s.gyro_period,
        s.steps_per_gyration,
    );
    if let Some(k) = s.superluminal_at {
        warn!("{}: speed exceeds c from step {k} (non-relativistic model)", s.name);
    }
    if !s.finite {
        warn!("{}: trajectory contains non-finite values", s.name);
    }
}
