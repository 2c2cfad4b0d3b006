//! Failure modes of the physics core
//!
//! The only runtime failure is two bodies sharing a position while forces
//! are evaluated. The remaining variants guard body construction.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Two bodies sit at identical coordinates, the inverse-square law is undefined
    CoincidentBodies { x: f64, y: f64 },
    /// Mass must be finite and strictly positive
    InvalidMass(f64),
    /// Radius must be finite and strictly positive
    InvalidRadius(f64),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::CoincidentBodies { x, y } => write!(
                f,
                "two bodies share position ({x:.6e}, {y:.6e}), gravitational force is undefined"
            ),
            PhysicsError::InvalidMass(m) => write!(f, "body mass must be positive, got {m}"),
            PhysicsError::InvalidRadius(r) => write!(f, "body radius must be positive, got {r}"),
        }
    }
}

impl std::error::Error for PhysicsError {}
