//! Charged particle species
//!
//! A `Species` is everything the integrator needs to know about a particle:
//! signed charge, mass and the kinetic energy it starts with.

use super::constants::{
    ev_to_joules, ELECTRON_ENERGY_EV, ELECTRON_MASS, ELEMENTARY_CHARGE, PROTON_ENERGY_EV, PROTON_MASS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub name: String, // display name
    pub charge: f64, // signed charge (C)
    pub mass: f64, // mass (kg)
    pub energy: f64, // initial kinetic energy (J)
}

impl Species {
    /// 100 keV electron
    pub fn electron() -> Self {
        Self {
            name: "electron".to_string(),
            charge: -ELEMENTARY_CHARGE,
            mass: ELECTRON_MASS,
            energy: ev_to_joules(ELECTRON_ENERGY_EV),
        }
    }

    /// 100 eV proton
    pub fn proton() -> Self {
        Self {
            name: "proton".to_string(),
            charge: ELEMENTARY_CHARGE,
            mass: PROTON_MASS,
            energy: ev_to_joules(PROTON_ENERGY_EV),
        }
    }

    /// Non-relativistic speed for the initial kinetic energy: sqrt(2E/m)
    pub fn initial_speed(&self) -> f64 {
        (2.0 * self.energy / self.mass).sqrt()
    }
}
