use std::num::NonZeroU8;

use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;
use log::{error, info};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::projection::{distance_label, Viewport};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct DistanceLabel(pub usize);

const LABEL_FONT_SIZE: f32 = 16.0;
const BODY_Z: f32 = 1.0;
const LABEL_Z: f32 = 2.0;

/// Caps physics to at most one tick per rendered frame and `rate` ticks per second
///
/// Slow frames are not caught up: a frame that took several periods still
/// runs a single tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FrameLimiter {
    period: f64, // seconds between ticks
    accumulated: f64, // wall-clock seconds since the last tick
}

impl FrameLimiter {
    pub fn new(rate: f64) -> Self {
        Self {
            period: rate.recip(),
            accumulated: 0.0,
        }
    }

    /// Feed one frame's wall-clock duration, true when this frame should tick
    pub fn ready(&mut self, frame_seconds: f64) -> bool {
        self.accumulated += frame_seconds;
        if self.accumulated < self.period {
            return false;
        }
        // carry at most one period so a long frame cannot trigger a burst
        self.accumulated = (self.accumulated - self.period).min(self.period);
        true
    }
}

/// Open a window and tick the scenario until it is closed
///
/// One tick per rendered frame, at most `display.frame_rate` per second.
/// Simulated time advances one timestep per tick regardless of how long a
/// frame takes. A physics error closes the app with an error exit.
pub fn run_2d(scenario: Scenario) -> AppExit {
    info!(
        "run_2d: starting viewer with {} bodies at {} Hz",
        scenario.simulation.bodies().len(),
        scenario.display.frame_rate
    );

    let window = Window {
        title: "Planet Simulation".into(),
        resolution: WindowResolution::new(scenario.viewport.width, scenario.viewport.height),
        ..Default::default()
    };

    App::new()
        // logging goes through env_logger, installed by main
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..Default::default()
                })
                .disable::<LogPlugin>(),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(FrameLimiter::new(scenario.display.frame_rate))
        .insert_resource(scenario)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                physics_step_system,
                sync_transforms_system,
                draw_trajectories_system,
                update_labels_system,
            )
                .chain(),
        )
        .run()
}

/// Viewport screen coordinates are y-down from the top-left corner,
/// bevy world coordinates are y-up from the window center
fn to_world(viewport: &Viewport, pos: &NVec2) -> Vec2 {
    let (sx, sy) = viewport.to_screen(pos);
    Vec2::new(
        sx as f32 - viewport.width / 2.0,
        viewport.height / 2.0 - sy as f32,
    )
}

fn to_color([r, g, b]: [u8; 3]) -> Color {
    Color::srgb_u8(r, g, b)
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    let bodies = scenario.simulation.bodies();
    for (i, (body, style)) in bodies.iter().zip(&scenario.styles).enumerate() {
        let p = to_world(&scenario.viewport, &body.x);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(to_color(style.color))),
                transform: Transform::from_xyz(p.x, p.y, BODY_Z),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        if scenario.display.show_distances && !body.anchor {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        "",
                        TextStyle {
                            font_size: LABEL_FONT_SIZE,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(p.x, p.y, LABEL_Z),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

fn physics_step_system(
    mut scenario: ResMut<Scenario>,
    mut limiter: ResMut<FrameLimiter>,
    time: Res<Time>,
    mut exit: EventWriter<AppExit>,
    mut halted: Local<bool>,
) {
    if *halted || !limiter.ready(time.delta_seconds_f64()) {
        return;
    }

    if let Err(e) = scenario.simulation.tick() {
        error!("stopping viewer after {} ticks: {e}", scenario.simulation.ticks());
        *halted = true;
        exit.send(AppExit::Error(NonZeroU8::MIN));
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.simulation.bodies().get(*i) {
            let p = to_world(&scenario.viewport, &b.x);
            transform.translation.x = p.x;
            transform.translation.y = p.y;
        }
    }
}

fn draw_trajectories_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    if !scenario.display.show_trajectories {
        return;
    }

    let viewport = &scenario.viewport;
    for (body, style) in scenario.simulation.bodies().iter().zip(&scenario.styles) {
        if !viewport.should_draw_trajectory(body.trajectory.len()) {
            continue;
        }
        gizmos.linestrip_2d(
            body.trajectory.iter().map(|p| to_world(viewport, p)),
            to_color(style.color),
        );
    }
}

fn update_labels_system(
    scenario: Res<Scenario>,
    mut query: Query<(&DistanceLabel, &mut Text, &mut Transform)>,
) {
    for (DistanceLabel(i), mut text, mut transform) in &mut query {
        let Some(b) = scenario.simulation.bodies().get(*i) else {
            continue;
        };
        let p = to_world(&scenario.viewport, &b.x);
        transform.translation.x = p.x;
        transform.translation.y = p.y;

        if let Some(label) = distance_label(b) {
            text.sections[0].value = label;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_waits_for_a_full_period() {
        let mut limiter = FrameLimiter::new(60.0);
        assert!(!limiter.ready(0.005));
        assert!(!limiter.ready(0.005));
        assert!(limiter.ready(0.01));
        assert!(!limiter.ready(0.001));
    }

    #[test]
    fn limiter_does_not_catch_up_after_a_slow_frame() {
        let mut limiter = FrameLimiter::new(60.0);
        // a one-second stall yields one tick now and at most one carried period
        assert!(limiter.ready(1.0));
        assert!(limiter.ready(0.0));
        assert!(!limiter.ready(0.0));
    }

    #[test]
    fn limiter_keeps_pace_with_frames_at_the_target_rate() {
        let mut limiter = FrameLimiter::new(60.0);
        let ticks = (0..600).filter(|_| limiter.ready(1.0 / 60.0)).count();
        assert!(ticks >= 599, "only {ticks} ticks in 600 frames");
    }
}
