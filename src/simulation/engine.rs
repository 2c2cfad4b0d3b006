//! Tick orchestration over the whole body collection
//!
//! `Simulation` owns every body for the run. Bodies are never added or
//! removed after construction; `tick` is the only mutator.

use log::{debug, error, trace};

use super::error::PhysicsError;
use super::forces::net_force;
use super::params::{Parameters, UpdateOrder};
use super::states::{Body, NVec2};

#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    parameters: Parameters,
    ticks: u64, // completed ticks
}

impl Simulation {
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> Self {
        let anchors = bodies.iter().filter(|b| b.anchor).count();
        debug!(
            "simulation: {} bodies, {} anchor(s), dt = {} s, order = {:?}",
            bodies.len(),
            anchors,
            parameters.timestep_seconds,
            parameters.update_order
        );

        Self {
            bodies,
            parameters,
            ticks: 0,
        }
    }

    /// Advance every body by exactly one timestep
    ///
    /// O(N^2) all-pairs force evaluation. On error the tick counter is not
    /// advanced; see [`UpdateOrder`] for how far the bodies got.
    pub fn tick(&mut self) -> Result<(), PhysicsError> {
        let g = self.parameters.gravitational_constant;
        let dt = self.parameters.timestep_seconds;
        let n = self.bodies.len();

        let result = match self.parameters.update_order {
            // Positions are untouched until every net force is known
            UpdateOrder::Simultaneous => (0..n)
                .map(|i| net_force(&mut self.bodies, i, g))
                .collect::<Result<Vec<NVec2>, _>>()
                .map(|forces| {
                    for (b, f) in self.bodies.iter_mut().zip(forces) {
                        b.integrate(f, dt);
                    }
                }),
            UpdateOrder::Sequential => (0..n).try_for_each(|i| {
                let total = net_force(&mut self.bodies, i, g)?;
                self.bodies[i].integrate(total, dt);
                Ok::<(), PhysicsError>(())
            }),
        };

        match result {
            Ok(()) => {
                self.ticks += 1;
                trace!("tick {} done, t = {} s", self.ticks, self.elapsed_seconds());
                Ok(())
            }
            Err(e) => {
                error!("tick {} failed: {e}", self.ticks + 1);
                Err(e)
            }
        }
    }

    /// Run `n` ticks, stopping at the first error
    pub fn run(&mut self, n: u64) -> Result<(), PhysicsError> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// First body flagged as anchor, if any
    pub fn anchor(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.anchor)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time since the start of the run
    pub fn elapsed_seconds(&self) -> f64 {
        self.ticks as f64 * self.parameters.timestep_seconds
    }

    /// Sum of m * v over all bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}
