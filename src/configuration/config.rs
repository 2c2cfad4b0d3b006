//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`SimulationConfig`] – physical constant, timestep, update order, trajectory retention
//! - [`DisplayConfig`]    – window size, scale and frame pacing of the viewer
//! - [`BodyConfig`]       – initial state and look of each body
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! Every section falls back to the inner solar system defaults, so a file
//! only needs to list what it changes.
//!
//! # YAML format
//!
//! ```yaml
//! simulation:
//!   gravitational_constant: 6.67408e-11
//!   timestep_seconds: 86400.0        # one day per tick
//!   update_order: simultaneous       # or "sequential"
//!   trajectory: { mode: recent, capacity: 2000 }
//!
//! display:
//!   width: 800
//!   height: 800
//!   pixels_per_au: 250.0
//!   frame_rate: 60.0
//!
//! bodies:
//!   - name: sun
//!     x: [0.0, 0.0]
//!     m: 1.98892e30
//!     radius: 30.0
//!     color: [255, 255, 0]
//!     anchor: true
//!   - name: earth
//!     x: [-1.496e11, 0.0]
//!     v: [0.0, 29783.0]
//!     m: 5.9722e24
//!     radius: 16.0
//!     color: [100, 149, 237]
//! ```

use std::fmt;
use std::io::Read;

use serde::Deserialize;

use crate::simulation::error::PhysicsError;
use crate::simulation::params::{UpdateOrder, AU, GRAVITATIONAL_CONSTANT, SECONDS_PER_DAY};
use crate::simulation::trajectory::RetentionPolicy;

/// Everything that can go wrong turning YAML into a runnable scenario
#[derive(Debug)]
pub enum ConfigError {
    Yaml(serde_yaml::Error),
    /// A position or velocity did not have exactly two components
    VectorLength { body: String, field: &'static str, len: usize },
    /// A body failed validation (mass, radius)
    Body { body: String, source: PhysicsError },
    /// Timestep, scale or frame rate not strictly positive
    NonPositive { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Yaml(e) => write!(f, "invalid scenario yaml: {e}"),
            ConfigError::VectorLength { body, field, len } => {
                write!(f, "body `{body}`: `{field}` needs 2 components, got {len}")
            }
            ConfigError::Body { body, source } => write!(f, "body `{body}`: {source}"),
            ConfigError::NonPositive { field, value } => {
                write!(f, "`{field}` must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Yaml(e) => Some(e),
            ConfigError::Body { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e)
    }
}

/// Physics settings for a run
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravitational_constant: f64, // G in m^3 kg^-1 s^-2
    pub timestep_seconds: f64, // simulated seconds advanced per tick
    pub update_order: UpdateOrder, // two-pass or single-pass tick
    pub trajectory: RetentionPolicy, // how much path history each body keeps
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            timestep_seconds: SECONDS_PER_DAY,
            update_order: UpdateOrder::default(),
            trajectory: RetentionPolicy::default(),
        }
    }
}

/// Viewer settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: f32, // window width in pixels
    pub height: f32, // window height in pixels
    pub pixels_per_au: f64, // display scale
    pub frame_rate: f64, // ticks per wall-clock second
    pub show_trajectories: bool,
    pub show_distances: bool, // distance-to-anchor labels
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            pixels_per_au: 250.0,
            frame_rate: 60.0,
            show_trajectories: true,
            show_distances: true,
        }
    }
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub x: Vec<f64>, // position in meters
    #[serde(default = "default_velocity")]
    pub v: Vec<f64>, // velocity in meters/second
    pub m: f64, // mass in kilograms
    pub radius: f64, // display radius in pixels
    #[serde(default = "default_color")]
    pub color: [u8; 3], // rgb
    #[serde(default)]
    pub anchor: bool, // distance labels are measured to this body
}

fn default_name() -> String {
    "body".to_string()
}

fn default_velocity() -> Vec<f64> {
    vec![0.0, 0.0]
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default = "inner_planet_bodies")]
    pub bodies: Vec<BodyConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::inner_planets()
    }
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Sun, Earth, Mars, Mercury and Venus on the x axis with circular-ish velocities
    pub fn inner_planets() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            display: DisplayConfig::default(),
            bodies: inner_planet_bodies(),
        }
    }
}

fn inner_planet_bodies() -> Vec<BodyConfig> {
    let body = |name: &str, x_au: f64, vy: f64, m: f64, radius: f64, color: [u8; 3]| BodyConfig {
        name: name.to_string(),
        x: vec![x_au * AU, 0.0],
        v: vec![0.0, vy],
        m,
        radius,
        color,
        anchor: false,
    };

    let mut sun = body("sun", 0.0, 0.0, 1.98892e30, 30.0, [255, 255, 0]);
    sun.anchor = true;

    vec![
        sun,
        body("earth", -1.0, 29.783e3, 5.9722e24, 16.0, [100, 149, 237]),
        body("mars", -1.524, 24.077e3, 6.39e23, 12.0, [188, 39, 50]),
        body("mercury", 0.387, -47.4e3, 3.330e24, 8.0, [80, 78, 81]),
        body("venus", 0.723, -35.02e3, 4.8685e24, 14.0, [255, 255, 255]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_sections_fall_back_to_defaults() {
        let cfg = ScenarioConfig::from_yaml_str("display:\n  width: 1024\n").unwrap();
        assert_eq!(cfg.display.width, 1024.0);
        assert_eq!(cfg.display.height, 800.0);
        assert_eq!(cfg.simulation.timestep_seconds, 86400.0);
        assert_eq!(cfg.simulation.update_order, UpdateOrder::Simultaneous);
        assert_eq!(cfg.bodies.len(), 5);
        assert!(cfg.bodies[0].anchor);
    }

    #[test]
    fn parses_retention_and_update_order() {
        let yaml = "
simulation:
  update_order: sequential
  trajectory: { mode: recent, capacity: 300 }
bodies:
  - x: [1.0, 2.0]
    m: 3.0
    radius: 4.0
";
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.simulation.update_order, UpdateOrder::Sequential);
        assert_eq!(cfg.simulation.trajectory, RetentionPolicy::Recent { capacity: 300 });
        assert_eq!(cfg.bodies.len(), 1);
        assert_eq!(cfg.bodies[0].v, vec![0.0, 0.0]);
        assert_eq!(cfg.bodies[0].name, "body");
        assert!(!cfg.bodies[0].anchor);
    }

    #[test]
    fn missing_mass_is_a_yaml_error() {
        let err = ScenarioConfig::from_yaml_str("bodies:\n  - x: [0.0, 0.0]\n    radius: 1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
