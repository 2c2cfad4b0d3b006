//! Numerical and physical parameters for the simulation

use serde::Deserialize;

/// Newtonian gravitational constant, m^3 kg^-1 s^-2
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;

/// Astronomical unit in meters
pub const AU: f64 = 149.6e6 * 1000.0;

/// One simulated day in seconds
pub const SECONDS_PER_DAY: f64 = 3600.0 * 24.0;

/// How bodies are advanced within a single tick
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// Two passes: all net forces from the start-of-tick snapshot, then all integrations
    #[default]
    Simultaneous,
    /// One pass: each body integrates right after its own net force,
    /// later bodies see the earlier ones already moved
    Sequential,
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravitational_constant: f64, // G
    pub timestep_seconds: f64, // simulated seconds per tick
    pub update_order: UpdateOrder,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            timestep_seconds: SECONDS_PER_DAY,
            update_order: UpdateOrder::default(),
        }
    }
}
