//! Core state types for the planetary simulation
//!
//! A `Body` is one gravitating point mass in the 2D inertial frame, with
//! SI units throughout (meters, meters/second, kilograms). The anchor flag
//! only tags the body other bodies report their distance to.

use nalgebra::Vector2;

use super::error::PhysicsError;
use super::trajectory::{RetentionPolicy, Trajectory};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // display radius, not used by the force law
    pub anchor: bool, // distance label source, e.g. the sun
    pub distance_to_anchor: f64, // refreshed while forces are computed
    pub trajectory: Trajectory, // past positions, oldest first
}

impl Body {
    /// Build a non-anchor body with an empty, unbounded trajectory.
    /// Rejects non-positive or non-finite mass and radius.
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64) -> Result<Self, PhysicsError> {
        if !m.is_finite() || m <= 0.0 {
            return Err(PhysicsError::InvalidMass(m));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidRadius(radius));
        }

        Ok(Self {
            x,
            v,
            m,
            radius,
            anchor: false,
            distance_to_anchor: 0.0,
            trajectory: Trajectory::default(),
        })
    }

    /// Mark this body as the anchor
    pub fn as_anchor(mut self) -> Self {
        self.anchor = true;
        self
    }

    /// Replace the trajectory retention policy, dropping any recorded points
    pub fn with_retention(mut self, policy: RetentionPolicy) -> Self {
        self.trajectory = Trajectory::new(policy);
        self
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}
