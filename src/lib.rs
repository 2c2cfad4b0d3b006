pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, NVec2};
pub use simulation::engine::Simulation;
pub use simulation::error::PhysicsError;
pub use simulation::forces::net_force;
pub use simulation::params::{Parameters, UpdateOrder, AU, GRAVITATIONAL_CONSTANT, SECONDS_PER_DAY};
pub use simulation::scenario::{BodyStyle, Scenario};
pub use simulation::trajectory::{RetentionPolicy, Trajectory};

pub use configuration::config::{BodyConfig, ConfigError, DisplayConfig, ScenarioConfig, SimulationConfig};

pub use visualization::projection::{distance_label, Viewport};
pub use visualization::viewer::{run_2d, FrameLimiter};
