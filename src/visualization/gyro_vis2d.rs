use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::scenario::{Run, Scenario};
use crate::visualization::plot::{drawable, SpeciesPlot};

const WINDOW_WIDTH: f32 = 1600.0;
const WINDOW_HEIGHT: f32 = 900.0;
const MARKER_RADIUS: f32 = 6.0;

/// Column index of the species a marker belongs to
#[derive(Component)]
struct MarkerIndex(pub usize);

#[derive(Resource)]
struct Plots(Vec<SpeciesPlot>);

/// Samples revealed so far; playback stops at the last one
#[derive(Resource, Default)]
struct Playback {
    shown: usize,
    paused: bool,
}

const COLORS: [Color; 4] = [
    Color::srgb(0.3, 0.7, 1.0),
    Color::srgb(1.0, 0.45, 0.3),
    Color::srgb(0.5, 1.0, 0.5),
    Color::srgb(0.9, 0.6, 1.0),
];

fn species_color(i: usize) -> Color {
    COLORS[i % COLORS.len()]
}

/// Open a window with one column per species: trajectory on top, speed vs time below.
/// Space pauses, R restarts the playback.
pub fn run_2d(scenario: Scenario, runs: Vec<Run>) {
    log::info!("run_2d: starting Bevy 2D viewer with {} species", runs.len());

    let column = WINDOW_WIDTH / runs.len().max(1) as f32;
    let plots: Vec<SpeciesPlot> = runs
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let center_x = -0.5 * WINDOW_WIDTH + column * (i as f32 + 0.5);
            SpeciesPlot::build(r, scenario.parameters.dt, center_x, 0.85 * column)
        })
        .collect();

    App::new()
        .insert_resource(scenario)
        .insert_resource(Plots(plots))
        .insert_resource(Playback::default())
        .add_plugins(
            DefaultPlugins
                .build()
                // logging is already set up by the binary
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "gyrosim".into(),
                        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
        )
        .add_systems(Startup, setup_plots_system)
        .add_systems(Update, (playback_system, draw_plots_system, sync_markers_system).chain())
        .run();
}

fn setup_plots_system(mut commands: Commands, plots: Res<Plots>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, plot) in plots.0.iter().enumerate() {
        let style = TextStyle {
            font_size: 22.0,
            color: Color::WHITE,
            ..Default::default()
        };
        let title_at = plot.trajectory_panel.center + Vec2::new(0.0, 0.5 * plot.trajectory_panel.size.y + 20.0);
        commands.spawn(Text2dBundle {
            text: Text::from_section(format!("{}: x / y (m)", plot.name), style.clone()),
            transform: Transform::from_xyz(title_at.x, title_at.y, 1.0),
            ..Default::default()
        });
        let speed_at = plot.speed_panel.center + Vec2::new(0.0, 0.5 * plot.speed_panel.size.y + 20.0);
        commands.spawn(Text2dBundle {
            text: Text::from_section("speed (m/s) vs time", style),
            transform: Transform::from_xyz(speed_at.x, speed_at.y, 1.0),
            ..Default::default()
        });

        // Marker at the first sample
        let start = plot.path.first().copied().unwrap_or(plot.trajectory_panel.center);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(MARKER_RADIUS))),
                material: materials.add(ColorMaterial::from(species_color(i))),
                transform: Transform::from_xyz(start.x, start.y, 2.0),
                ..Default::default()
            },
            MarkerIndex(i),
        ));
    }
}

fn playback_system(keys: Res<ButtonInput<KeyCode>>, scenario: Res<Scenario>, mut playback: ResMut<Playback>) {
    if keys.just_pressed(KeyCode::Space) {
        playback.paused = !playback.paused;
    }
    if keys.just_pressed(KeyCode::KeyR) {
        playback.shown = 0;
    }
    if !playback.paused {
        let last = scenario.parameters.steps.saturating_sub(1);
        playback.shown = (playback.shown + scenario.viewer.steps_per_frame).min(last);
    }
}

fn draw_plots_system(mut gizmos: Gizmos, plots: Res<Plots>, playback: Res<Playback>) {
    let grey = Color::srgb(0.4, 0.4, 0.4);
    let upto = playback.shown + 1;

    for (i, plot) in plots.0.iter().enumerate() {
        let color = species_color(i);

        gizmos.linestrip_2d(plot.trajectory_panel.frame(), grey);
        gizmos.linestrip_2d(plot.speed_panel.frame(), grey);

        // Reference lines: expected initial speed, speed of light
        let [a, b] = plot.initial_speed_line;
        gizmos.line_2d(a, b, Color::srgb(1.0, 0.9, 0.2));
        if let Some([a, b]) = plot.light_speed_line {
            gizmos.line_2d(a, b, Color::srgb(1.0, 0.2, 0.2));
        }

        let n = upto.min(plot.path.len());
        gizmos.linestrip_2d(drawable(&plot.path[..n]), color);
        gizmos.linestrip_2d(drawable(&plot.speed[..n]), color);
    }
}

fn sync_markers_system(plots: Res<Plots>, playback: Res<Playback>, mut query: Query<(&MarkerIndex, &mut Transform)>) {
    for (MarkerIndex(i), mut transform) in &mut query {
        if let Some(p) = plots.0.get(*i).and_then(|plot| plot.path.get(playback.shown)) {
            if p.is_finite() {
                transform.translation.x = p.x;
                transform.translation.y = p.y;
            }
        }
    }
}
