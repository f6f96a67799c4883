//! Input handling systems

use bevy::prelude::*;

use super::components::GameLoopResource;
use crate::simulation::{Command, PlayerId};

const KEY_BINDINGS: [(KeyCode, Command); 5] = [
    (KeyCode::KeyA, Command::move_left(PlayerId::One)),
    (KeyCode::KeyD, Command::move_right(PlayerId::One)),
    (KeyCode::ArrowLeft, Command::move_left(PlayerId::Two)),
    (KeyCode::ArrowRight, Command::move_right(PlayerId::Two)),
    (KeyCode::KeyR, Command::Restart),
];

/// Queue game commands for the next tick and handle quitting
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game: ResMut<GameLoopResource>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    for (key, command) in KEY_BINDINGS {
        if keyboard.just_pressed(key) {
            game.0.push(command);
        }
    }
}
