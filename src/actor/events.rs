//! Actor domain: strike resolution messages for downstream combat logic.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::ability::StrikeOutcome;

/// An attack's one-shot hit check fired this tick. Damage and health
/// bookkeeping are the consumer's responsibility.
#[derive(Debug)]
pub struct StrikeResolved {
    pub attacker: Entity,
    pub outcome: StrikeOutcome,
}

impl Message for StrikeResolved {}
