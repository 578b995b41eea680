//! Configuration types for loading gyration scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step count, step size and field geometry
//! - [`SpeciesConfig`]    – one entry per particle species to integrate
//! - [`ViewerConfig`]     – optional playback settings for the viewer
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The reference electron/proton run:
//!
//! ```yaml
//! parameters:
//!   steps: 5000             # samples per species, including t = 0
//!   dt: 1.0e-7              # fixed step size (s)
//!   radius: 6378.0          # planetary radius R
//!   field: 3.11e-5          # field magnitude B (T)
//!   l_shell: 4.0            # start at L·R on the x-axis
//!
//! species:
//!   - preset: electron      # 100 keV electron
//!   - preset: proton        # 100 eV proton
//!   - name: "slow electron" # or spell a species out
//!     charge: -1.602e-19
//!     mass: 9.109e-31
//!     energy_ev: 1.0e3
//!
//! viewer:
//!   steps_per_frame: 10
//! ```
//!
//! Scenario building validates these values and maps them into the runtime
//! `Parameters` and `Species`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Built-in species
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum PresetConfig {
    #[serde(rename = "electron")] // 100 keV electron
    Electron,

    #[serde(rename = "proton")] // 100 eV proton
    Proton,
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub steps: usize, // samples per species
    pub dt: f64, // step size (s)
    pub radius: f64, // planetary radius (m)
    pub field: f64, // field magnitude (T)
    pub l_shell: f64, // start distance in planet radii
}

/// One species. Either a `preset`, or an explicit charge/mass/energy; explicit
/// fields override the preset's values
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SpeciesConfig {
    pub preset: Option<PresetConfig>,
    pub name: Option<String>,
    pub charge: Option<f64>, // signed charge (C)
    pub mass: Option<f64>, // mass (kg)
    pub energy_ev: Option<f64>, // initial kinetic energy (eV)
}

/// Playback settings for the viewer
#[derive(Deserialize, Debug, Clone)]
pub struct ViewerConfig {
    #[serde(default = "default_steps_per_frame")]
    pub steps_per_frame: usize, // trajectory samples revealed per frame
}

fn default_steps_per_frame() -> usize {
    10
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self { steps_per_frame: default_steps_per_frame() }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // numerical and physical parameters
    pub species: Vec<SpeciesConfig>, // particles to integrate, each independently
    #[serde(default)]
    pub viewer: ViewerConfig, // viewer playback
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML string
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Read a scenario from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_presets_and_explicit_species() -> Result<()> {
        let cfg = ScenarioConfig::from_yaml_str(
            r#"
parameters: { steps: 10, dt: 1.0e-7, radius: 6378.0, field: 3.11e-5, l_shell: 4.0 }
species:
  - preset: electron
  - name: alpha
    charge: 3.204e-19
    mass: 6.64e-27
    energy_ev: 1.0e3
"#,
        )?;

        assert_eq!(cfg.parameters.steps, 10);
        assert_eq!(cfg.species.len(), 2);
        assert_eq!(cfg.species[0].preset, Some(PresetConfig::Electron));
        assert_eq!(cfg.species[1].name.as_deref(), Some("alpha"));
        assert_eq!(cfg.viewer.steps_per_frame, 10);
        Ok(())
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let res = ScenarioConfig::from_yaml_str(
            r#"
parameters: { steps: 10, dt: 1.0e-7, radius: 6378.0, field: 3.11e-5, l_shell: 4.0 }
species:
  - preset: muon
"#,
        );
        assert!(res.is_err());
    }
}
