//! Actor domain: per-tick simulation step and render sync.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::arena::StaticColliders;
use crate::config::{DeltaDecision, GameConfig};
use crate::geometry::Collider;

use super::components::{Actor, PendingIntent};
use super::events::StrikeResolved;

/// Advance every actor by one tick. Each actor sees the arena's static
/// colliders first, then every other actor, in that order; the list is
/// rebuilt from scratch and never retained.
pub(crate) fn step_actors(
    time: Res<Time>,
    config: Res<GameConfig>,
    statics: Res<StaticColliders>,
    mut actors: Query<(Entity, &mut Actor, &PendingIntent)>,
    mut strikes: MessageWriter<StrikeResolved>,
) {
    let delta = match config.clock.admit(time.delta_secs()) {
        DeltaDecision::Run(delta) => delta,
        DeltaDecision::Clamped { raw, clamped } => {
            warn!("Frame delta {raw:.4}s over budget, proceeding with {clamped:.4}s");
            clamped
        }
        DeltaDecision::Skipped { raw } => {
            warn!("Frame delta {raw:.4}s over budget, tick skipped");
            return;
        }
    };

    let snapshots: Vec<(Entity, Collider)> = actors
        .iter()
        .map(|(entity, actor, _)| (entity, actor.collider()))
        .collect();

    for (entity, mut actor, pending) in &mut actors {
        let mut collisions = statics.0.clone();
        collisions.extend(
            snapshots
                .iter()
                .filter(|(other, _)| *other != entity)
                .map(|(_, collider)| collider.clone()),
        );

        actor.receive_intent(pending.0);
        actor.update(delta, &collisions);

        if let Some(outcome) = actor.strike_resolution() {
            strikes.write(StrikeResolved {
                attacker: entity,
                outcome,
            });
        }
    }
}

/// Mirror simulation rectangles into render transforms. Simulation space is
/// y-down with the origin at the window's top-left; render space is y-up and
/// centered.
pub(crate) fn sync_transforms(
    config: Res<GameConfig>,
    mut actors: Query<(&Actor, &mut Transform, &mut Sprite)>,
) {
    for (actor, mut transform, mut sprite) in &mut actors {
        let center = actor.rect().center();
        transform.translation.x = center.x - config.window.width / 2.0;
        transform.translation.y = config.window.height / 2.0 - center.y;
        sprite.flip_x = actor.flip_x();
    }
}

pub(crate) fn log_strikes(mut strikes: MessageReader<StrikeResolved>) {
    for strike in strikes.read() {
        debug!("Strike by {:?} resolved: {:?}", strike.attacker, strike.outcome);
    }
}
