//! Physical constants for the reference runs
//!
//! Values match the rounded figures the reference runs were computed with,
//! so outputs stay comparable. They are not CODATA values.

pub const ELEMENTARY_CHARGE: f64 = 1.602e-19; // C

pub const ELECTRON_MASS: f64 = 9.109e-31; // kg
pub const PROTON_MASS: f64 = 1.673e-27; // kg

pub const ELECTRON_ENERGY_EV: f64 = 100e3; // 100 keV
pub const PROTON_ENERGY_EV: f64 = 100.0; // 100 eV

pub const PLANET_RADIUS: f64 = 6378.0; // m
pub const MAGNETIC_FIELD: f64 = 3.11e-5; // T
pub const L_SHELL: f64 = 4.0; // initial distance in planet radii

pub const SPEED_OF_LIGHT: f64 = 299_792_458.0; // m/s

/// Convert electron-volts to joules
pub fn ev_to_joules(ev: f64) -> f64 {
    ev * ELEMENTARY_CHARGE
}
