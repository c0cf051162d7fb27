//! Intent domain: keyboard sampling into intent snapshots.

use bevy::prelude::*;

use crate::actor::{PendingIntent, PlayerControlled};

use super::{IntentSnapshot, IntentSource};

pub(crate) fn read_keyboard_intent(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut actors: Query<&mut PendingIntent, With<PlayerControlled>>,
) {
    let mut snapshot = IntentSnapshot {
        source: IntentSource::Keyboard,
        ..default()
    };

    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        snapshot.move_left = true;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        snapshot.move_right = true;
    }
    if keyboard.pressed(KeyCode::KeyW)
        || keyboard.pressed(KeyCode::ArrowUp)
        || keyboard.pressed(KeyCode::Space)
    {
        snapshot.jump_up = true;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        snapshot.jump_down = true;
    }

    if keyboard.pressed(KeyCode::KeyJ) {
        snapshot.attack = true;
    }
    if keyboard.pressed(KeyCode::KeyK) {
        snapshot.defend = true;
    }

    // Dash is only meaningful alongside a movement direction.
    if (keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight))
        && snapshot.is_moving()
    {
        snapshot.dash = true;
    }

    for mut pending in &mut actors {
        pending.0 = snapshot;
    }
}
