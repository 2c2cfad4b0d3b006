//! Fixed-step time integration
//!
//! Semi-implicit (symplectic) Euler: the velocity kick comes first and the
//! drift uses the kicked velocity.

use super::states::{Body, NVec2};

impl Body {
    /// Advance this body by one step of `dt` seconds under `net_force`
    pub fn integrate(&mut self, net_force: NVec2, dt: f64) {
        // Kick: v_n+1 = v_n + (F / m) dt
        self.v += (net_force / self.m) * dt;

        // Drift: x_n+1 = x_n + v_n+1 dt
        self.x += self.v * dt;

        self.trajectory.record(self.x);
    }
}
