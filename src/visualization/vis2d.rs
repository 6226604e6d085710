use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;

use crate::configuration::config::DisplayConfig;
use crate::simulation::scenario::Simulation;
use crate::simulation::states::{NVec2, Rgb};

#[derive(Component)]
struct BodyIndex(pub usize);

/// Distance readout next to a non-primary body
#[derive(Component)]
struct DistanceLabel(pub usize);

#[derive(Component)]
struct DayCounter;

/// Renderer-side settings, the physics never sees these
#[derive(Resource, Debug, Clone)]
pub struct Viewport {
    pub scale: f64, // pixels per meter
    pub show_trails: bool,
    pub show_labels: bool,
}

/// Running/stopped flag of the display loop
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    pub running: bool,
}

const FONT_SIZE: f32 = 16.0;
const LABEL_OFFSET: f32 = 20.0;

/// Simulation coordinates to screen coordinates. The 2D camera is centered
/// on the origin, so the window-center offset is already applied by Bevy.
/// Simulation y grows downward on screen, Bevy's world y grows upward.
pub fn to_screen(x: &NVec2, scale: f64) -> Vec2 {
    Vec2::new((x.x * scale) as f32, (-x.y * scale) as f32)
}

fn body_color(c: Rgb) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

pub fn run_2d(sim: Simulation, display: DisplayConfig) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", sim.system.bodies.len());

    App::new()
        .insert_resource(sim)
        .insert_resource(Viewport {
            scale: display.scale,
            show_trails: display.show_trails,
            show_labels: display.show_labels,
        })
        .insert_resource(RunState { running: true })
        .insert_resource(Time::<Fixed>::from_hz(display.fps))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "planet simulation".into(),
                resolution: WindowResolution::new(display.width, display.height),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(
            Update,
            (
                keyboard_system,
                sync_transforms_system,
                sync_labels_system,
                day_counter_system,
                draw_trails_system,
            ),
        )
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    sim: Res<Simulation>,
    viewport: Res<Viewport>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn(Camera2dBundle::default());

    for (i, body) in sim.system.bodies.iter().enumerate() {
        let pos = to_screen(&body.x, viewport.scale);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(body_color(body.color))),
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        if viewport.show_labels && !body.primary {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        "",
                        TextStyle {
                            font_size: FONT_SIZE,
                            color: Color::WHITE,
                            ..default()
                        },
                    ),
                    transform: Transform::from_xyz(pos.x, pos.y + LABEL_OFFSET, 2.0),
                    ..default()
                },
                DistanceLabel(i),
            ));
        }
    }

    commands.spawn((
        TextBundle::from_section(
            "day 0",
            TextStyle {
                font_size: FONT_SIZE,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(50.0),
            left: Val::Px(50.0),
            ..default()
        }),
        DayCounter,
    ));
}

fn physics_step_system(mut sim: ResMut<Simulation>, mut run: ResMut<RunState>) {
    if !run.running {
        return;
    }

    if let Err(e) = sim.step() {
        error!("step {} failed, stopping: {e}", sim.steps() + 1);
        run.running = false;
    }
}

fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut run: ResMut<RunState>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::KeyP) {
        run.running = !run.running;
        info!("simulation {}", if run.running { "running" } else { "stopped" });
    }
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

fn sync_transforms_system(
    sim: Res<Simulation>,
    viewport: Res<Viewport>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = sim.system.bodies.get(*i) {
            let pos = to_screen(&b.x, viewport.scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn sync_labels_system(
    sim: Res<Simulation>,
    viewport: Res<Viewport>,
    mut query: Query<(&DistanceLabel, &mut Text, &mut Transform), Without<BodyIndex>>,
) {
    for (DistanceLabel(i), mut text, mut transform) in &mut query {
        if let Some(b) = sim.system.bodies.get(*i) {
            let pos = to_screen(&b.x, viewport.scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y + LABEL_OFFSET;
            text.sections[0].value = format!("{:.1}km", b.distance_to_primary / 1000.0);
        }
    }
}

fn day_counter_system(sim: Res<Simulation>, mut query: Query<&mut Text, With<DayCounter>>) {
    let days = sim.elapsed() / 86_400.0;
    for mut text in &mut query {
        text.sections[0].value = format!("day {}", days.floor());
    }
}

fn draw_trails_system(sim: Res<Simulation>, viewport: Res<Viewport>, mut gizmos: Gizmos) {
    if !viewport.show_trails {
        return;
    }

    for b in &sim.system.bodies {
        // A stroke needs a few points before it looks like a path
        if b.trail.len() > 2 {
            gizmos.linestrip_2d(
                b.trail.iter().map(|p| to_screen(p, viewport.scale)),
                body_color(b.color),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::params::AU;

    #[test]
    fn one_au_maps_to_scaled_pixels() {
        let scale = 200.0 / AU;
        let p = to_screen(&NVec2::new(-AU, 0.5 * AU), scale);
        assert!((p.x + 200.0).abs() < 1e-3);
        // below the center, as in window coordinates
        assert!((p.y + 100.0).abs() < 1e-3);
    }
}
