//! Newtonian gravity between point masses
//!
//! Forces are evaluated pairwise with the plain inverse-square law, no
//! softening. Coincident bodies, or bodies so close the force is no longer
//! finite, are a setup error and surface as [`PhysicsError::CoincidentBodies`].

use super::error::PhysicsError;
use super::states::{Body, NVec2};

impl Body {
    /// Force exerted on `self` by `other`, pointing from `self` toward `other`
    ///
    /// If `other` is the anchor, `self.distance_to_anchor` is refreshed with
    /// the separation. `other` must not be `self`.
    pub fn compute_attraction(&mut self, other: &Body, g: f64) -> Result<NVec2, PhysicsError> {
        // r points from self to other
        let r = other.x - self.x;
        let d = r.norm();

        if other.anchor {
            self.distance_to_anchor = d;
        }

        // separations small enough for d^2 to underflow count as coincident
        let d2 = d * d;
        if d2 == 0.0 {
            return Err(PhysicsError::CoincidentBodies { x: self.x.x, y: self.x.y });
        }

        // |F| = G m1 m2 / d^2
        let force = g * self.m * other.m / d2;
        if !force.is_finite() {
            return Err(PhysicsError::CoincidentBodies { x: self.x.x, y: self.x.y });
        }

        // direction from the angle of r
        let theta = r.y.atan2(r.x);
        Ok(NVec2::new(theta.cos() * force, theta.sin() * force))
    }
}

/// Net force on `bodies[i]` from every other body, summed in collection order
pub fn net_force(bodies: &mut [Body], i: usize, g: f64) -> Result<NVec2, PhysicsError> {
    let mut total = NVec2::zeros();
    for j in 0..bodies.len() {
        if j == i {
            continue;
        }
        let (body, other) = pair_mut(bodies, i, j);
        total += body.compute_attraction(other, g)?;
    }
    Ok(total)
}

/// Borrow `bodies[i]` mutably and `bodies[j]` shared, `i != j`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &Body) {
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &lo[j])
    }
}
