//! World setup systems for camera, road, HUD and music

use bevy::audio::AudioSource;
use bevy::prelude::*;

use super::components::{GameLoopResource, GameOverText, MainCamera, MusicTrack, Road, ScoreText};
use super::to_world;
use crate::audio::load_track;
use crate::simulation::LANE_COUNT;

const LANE_MARK_WIDTH: i32 = 4;
const LANE_MARK_LENGTH: i32 = 20;
const LANE_MARK_SPACING: usize = 40;

/// System to setup the camera, road surface and lane markings
pub fn setup_world(mut commands: Commands, game: Res<GameLoopResource>) {
    let config = &game.0.session.config;
    let (road_width, road_height) = (config.road_width, config.road_height);

    commands.spawn((MainCamera, Camera2d));

    commands.spawn((
        Road,
        Sprite::from_color(
            Color::srgb(0.25, 0.25, 0.25),
            Vec2::new(road_width as f32, road_height as f32),
        ),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    let lane_width = config.lane_width();
    for lane in 1..LANE_COUNT as i32 {
        let x = lane * lane_width - LANE_MARK_WIDTH / 2;
        for y in (0..road_height).step_by(LANE_MARK_SPACING) {
            commands.spawn((
                Sprite::from_color(
                    Color::WHITE,
                    Vec2::new(LANE_MARK_WIDTH as f32, LANE_MARK_LENGTH as f32),
                ),
                Transform::from_translation(to_world(
                    x,
                    y,
                    LANE_MARK_WIDTH,
                    LANE_MARK_LENGTH,
                    config,
                    0.5,
                )),
            ));
        }
    }
}

/// System to spawn the score line and the hidden game-over panel
pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        ScoreText,
        Text::new("Score: 0\nHigh Score: 0"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));

    commands.spawn((
        GameOverText,
        Text::new("Game Over"),
        TextFont {
            font_size: 36.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(40.0),
            left: Val::Percent(30.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

/// System to start the looping background track, if it can be loaded
pub fn setup_music(
    mut commands: Commands,
    track: Option<Res<MusicTrack>>,
    mut sources: ResMut<Assets<AudioSource>>,
) {
    let Some(track) = track else {
        return;
    };
    if let Some(bytes) = load_track(&track.0) {
        let handle = sources.add(AudioSource {
            bytes: bytes.into(),
        });
        commands.spawn((AudioPlayer::new(handle), PlaybackSettings::LOOP));
    }
}
