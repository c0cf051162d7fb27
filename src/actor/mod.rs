//! Actor domain: ability coordination plugin wiring and public exports.

mod components;
mod events;
mod systems;


pub use components::{Actor, PendingIntent, Performing, PlayerControlled};
pub use events::StrikeResolved;

use bevy::prelude::*;

use crate::actor::systems::{log_strikes, step_actors, sync_transforms};
use crate::intent::input::read_keyboard_intent;

pub struct ActorPlugin;

impl Plugin for ActorPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<StrikeResolved>().add_systems(
            Update,
            (read_keyboard_intent, step_actors, sync_transforms, log_strikes).chain(),
        );
    }
}
