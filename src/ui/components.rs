//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::simulation::{CarId, GameLoop, RenderSink, RenderView, Session};

/// Resource wrapper for the game loop
#[derive(Resource)]
pub struct GameLoopResource(pub GameLoop);

impl Default for GameLoopResource {
    fn default() -> Self {
        Self(GameLoop::new(Session::default()))
    }
}

/// Latest frame produced by the simulation; change detection drives redraws
#[derive(Resource, Default)]
pub struct LatestFrame(pub Option<RenderView>);

impl RenderSink for LatestFrame {
    fn present(&mut self, view: &RenderView) {
        self.0 = Some(view.clone());
    }
}

/// Path of the looping background track
#[derive(Resource)]
pub struct MusicTrack(pub PathBuf);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for the road surface
#[derive(Component)]
pub struct Road;

/// Links a Bevy entity to a simulation car
#[derive(Component)]
pub struct CarLink(pub CarId);

/// Marker for the in-game score line
#[derive(Component)]
pub struct ScoreText;

/// Marker for the game-over panel text
#[derive(Component)]
pub struct GameOverText;

/// Resource to track Bevy entities mapped to simulation cars
#[derive(Resource, Default)]
pub struct EntityMappings {
    pub cars: HashMap<CarId, Entity>,
}
