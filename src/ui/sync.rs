//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;
use std::collections::HashSet;

use super::components::{
    CarLink, EntityMappings, GameLoopResource, GameOverText, LatestFrame, ScoreText,
};
use super::to_world;
use crate::simulation::{CarId, CarView, Rgb};

const CAR_Z: f32 = 1.0;
const LABEL_OFFSET: f32 = 15.0;

/// Tint used for the wrecked car on the game-over screen
const HEADLIGHT_YELLOW: Color = Color::srgb(1.0, 1.0, 0.4);

fn car_color(color: Rgb) -> Color {
    Color::srgb_u8(color.0, color.1, color.2)
}

/// System to run one simulation step
pub fn tick_simulation(mut game: ResMut<GameLoopResource>, mut frame: ResMut<LatestFrame>) {
    game.0.step(&mut *frame);
}

/// System to sync car sprites from the latest frame
///
/// On the game-over screen only the failed player's car stays visible.
pub fn sync_cars(
    mut commands: Commands,
    frame: Res<LatestFrame>,
    game: Res<GameLoopResource>,
    mut mappings: ResMut<EntityMappings>,
    mut car_query: Query<(Entity, &CarLink, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    if !frame.is_changed() {
        return;
    }
    let Some(view) = frame.0.as_ref() else {
        return;
    };
    let config = &game.0.session.config;

    let visible = |car: &CarView| !view.is_game_over() || view.failed_car == Some(car.id);
    let color = |car: &CarView| {
        if view.failed_car == Some(car.id) {
            HEADLIGHT_YELLOW
        } else {
            car_color(car.color)
        }
    };

    let mut existing: HashSet<CarId> = HashSet::new();

    for (entity, link, mut transform, mut sprite, mut visibility) in car_query.iter_mut() {
        if let Some(car) = view.cars.iter().find(|car| car.id == link.0) {
            existing.insert(link.0);
            transform.translation = to_world(car.x, car.y, car.width, car.height, config, CAR_Z);
            sprite.color = color(car);
            *visibility = if visible(car) {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
        } else {
            // Car no longer exists in simulation, despawn
            commands.entity(entity).despawn();
            mappings.cars.remove(&link.0);
        }
    }

    for car in view.cars.iter().filter(|car| !existing.contains(&car.id)) {
        let size = Vec2::new(car.width as f32, car.height as f32);
        let mut entity = commands.spawn((
            CarLink(car.id),
            Sprite::from_color(color(car), size),
            Transform::from_translation(to_world(
                car.x, car.y, car.width, car.height, config, CAR_Z,
            )),
            if visible(car) {
                Visibility::Visible
            } else {
                Visibility::Hidden
            },
        ));

        if let Some(label) = car.label {
            entity.with_children(|parent| {
                parent.spawn((
                    Text2d::new(label),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, -(size.y / 2.0 + LABEL_OFFSET), 0.1),
                ));
            });
        }

        mappings.cars.insert(car.id, entity.id());
    }
}

/// System to update the score line and the game-over panel
pub fn update_hud(
    frame: Res<LatestFrame>,
    mut score_query: Query<(&mut Text, &mut Visibility), (With<ScoreText>, Without<GameOverText>)>,
    mut game_over_query: Query<
        (&mut Text, &mut Visibility),
        (With<GameOverText>, Without<ScoreText>),
    >,
) {
    if !frame.is_changed() {
        return;
    }
    let Some(view) = frame.0.as_ref() else {
        return;
    };

    for (mut text, mut visibility) in score_query.iter_mut() {
        **text = format!("Score: {}\nHigh Score: {}", view.score, view.high_score);
        *visibility = if view.is_game_over() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }

    for (mut text, mut visibility) in game_over_query.iter_mut() {
        **text = format!(
            "Game Over\nScore: {}\nHigh Score: {}\nPress R to Restart",
            view.score, view.high_score
        );
        *visibility = if view.is_game_over() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
