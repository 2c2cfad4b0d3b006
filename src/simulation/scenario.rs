//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the viewer or a headless run:
//! - the `Simulation` with every body at t = 0
//! - per-body display style (name, color)
//! - the `Viewport` and remaining display settings

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ConfigError, DisplayConfig, ScenarioConfig};
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};
use crate::visualization::projection::Viewport;

/// Render-only attributes of a body, index-aligned with `Simulation::bodies`
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStyle {
    pub name: String,
    pub color: [u8; 3],
}

/// Bevy resource holding a ready-to-run scenario
///
/// The physics lives in `simulation`; everything else is read-only input
/// for rendering.
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub simulation: Simulation,
    pub styles: Vec<BodyStyle>,
    pub viewport: Viewport,
    pub display: DisplayConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let s_cfg = cfg.simulation;
        positive("timestep_seconds", s_cfg.timestep_seconds)?;
        positive("pixels_per_au", cfg.display.pixels_per_au)?;
        positive("frame_rate", cfg.display.frame_rate)?;
        positive("width", cfg.display.width as f64)?;
        positive("height", cfg.display.height as f64)?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| {
                build_body(bc).map(|b| b.with_retention(s_cfg.trajectory))
            })
            .collect::<Result<Vec<Body>, ConfigError>>()?;

        let styles = cfg
            .bodies
            .iter()
            .map(|bc| BodyStyle {
                name: bc.name.clone(),
                color: bc.color,
            })
            .collect();

        let parameters = Parameters {
            gravitational_constant: s_cfg.gravitational_constant,
            timestep_seconds: s_cfg.timestep_seconds,
            update_order: s_cfg.update_order,
        };

        let viewport = Viewport {
            width: cfg.display.width,
            height: cfg.display.height,
            pixels_per_au: cfg.display.pixels_per_au,
        };

        Ok(Self {
            simulation: Simulation::new(bodies, parameters),
            styles,
            viewport,
            display: cfg.display,
        })
    }

    /// The built-in sun plus four inner planets
    pub fn inner_planets() -> Result<Self, ConfigError> {
        Self::build_scenario(ScenarioConfig::inner_planets())
    }
}

fn build_body(bc: &BodyConfig) -> Result<Body, ConfigError> {
    let x = vec2(&bc.name, "x", &bc.x)?;
    let v = vec2(&bc.name, "v", &bc.v)?;

    let body = Body::new(x, v, bc.m, bc.radius).map_err(|source| ConfigError::Body {
        body: bc.name.clone(),
        source,
    })?;

    Ok(if bc.anchor { body.as_anchor() } else { body })
}

fn vec2(body: &str, field: &'static str, values: &[f64]) -> Result<NVec2, ConfigError> {
    match values {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(ConfigError::VectorLength {
            body: body.to_string(),
            field,
            len: values.len(),
        }),
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
