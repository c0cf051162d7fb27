//! Debug domain: F1-toggled dev overlay with the player actor's live state.

use bevy::prelude::*;

use crate::actor::{Actor, PlayerControlled};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Marker for the info overlay text entity.
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_overlay, update_overlay).chain());
    }
}

fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    state.show_info = !state.show_info;
    info!("Debug overlay {}", if state.show_info { "ON" } else { "OFF" });

    if state.show_info {
        commands.spawn((
            DebugInfoOverlay,
            Text::new("..."),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(Color::srgb(0.8, 0.9, 0.8)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                bottom: Val::Px(20.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(500),
        ));
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn update_overlay(
    state: Res<DebugState>,
    actors: Query<&Actor, With<PlayerControlled>>,
    mut overlay: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !state.show_info {
        return;
    }
    let Some(actor) = actors.iter().next() else {
        return;
    };
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };

    let rect = actor.rect();
    **text = format!(
        "Pos: ({:.0}, {:.0})\nGrounded: {}\nFacing right: {}\nJump: {:?}\nDash: {:?} ({:.0} px)\nAttack: {:?}, last strike {:?}\nStatus: {:?}\nIntent: {}",
        rect.min.x,
        rect.min.y,
        actor.grounded(),
        actor.facing_right(),
        actor.jump_state(),
        actor.dash_state(),
        actor.dash_travelled(),
        actor.attack_state(),
        actor.last_strike(),
        actor.status_effects(),
        actor.intent().source,
    );
}
