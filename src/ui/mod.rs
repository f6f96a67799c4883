//! UI module that visualizes the session using Bevy
//!
//! This module is purely for visualization and input - all game logic is in
//! the `simulation` module. The UI feeds key presses into the game loop and
//! draws the frames it presents.

mod components;
mod input;
mod sync;
mod world;

use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;

pub use components::{EntityMappings, GameLoopResource, LatestFrame, MusicTrack};

use crate::simulation::{GameConfig, GameLoop, Session};
use input::handle_input;
use sync::{sync_cars, tick_simulation, update_hud};
use world::{setup_hud, setup_music, setup_world};

/// Centre of a screen-space rectangle (origin top-left, y down) in Bevy
/// world space (origin at the road centre, y up)
pub(crate) fn to_world(x: i32, y: i32, width: i32, height: i32, config: &GameConfig, z: f32) -> Vec3 {
    Vec3::new(
        x as f32 + width as f32 / 2.0 - config.road_width as f32 / 2.0,
        config.road_height as f32 / 2.0 - (y as f32 + height as f32 / 2.0),
        z,
    )
}

/// Plugin to register all UI systems
pub struct LaneRushUIPlugin;

impl Plugin for LaneRushUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameLoopResource>()
            .init_resource::<LatestFrame>()
            .init_resource::<EntityMappings>()
            .insert_resource(ClearColor(Color::srgb(0.5, 0.5, 0.5)))
            .add_systems(Startup, (setup_world, setup_hud, setup_music))
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(Update, (handle_input, sync_cars, update_hud));
    }
}

/// Open the game window and run until it is closed
pub fn run_with_ui(session: Session, music: PathBuf) {
    let config = session.config.clone();

    println!("Starting Lane Rush...");
    println!();
    println!("Controls:");
    println!("  A/D         - Player 1 left/right");
    println!("  Left/Right  - Player 2 left/right");
    println!("  R           - Restart after a crash");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,lane_rush=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Lane Rush".into(),
                        resolution: (config.road_width as u32, config.road_height as u32).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(Time::<Fixed>::from_duration(config.tick_interval))
        .insert_resource(GameLoopResource(GameLoop::new(session)))
        .insert_resource(MusicTrack(music))
        .add_plugins(LaneRushUIPlugin)
        .run();
}
