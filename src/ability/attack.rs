//! Ability domain: melee strike timeline with a one-shot hit check.

use bevy::prelude::*;

use crate::config::{AttackTuning, ConfigError};
use crate::geometry::{
    Attribute, Collider, HitboxRatios, hitbox_within, mirrored_hitbox_within, overlaps,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttackState {
    #[default]
    Disabled,
    Windup,
    Strike,
    Recovery,
}

/// Classification of the one hit check an attack performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeOutcome {
    Missed,
    Hit,
}

#[derive(Debug, Clone)]
pub struct AttackSequence {
    strike_time: f32,
    total_time: f32,
    hitbox: HitboxRatios,
    state: AttackState,
    elapsed: f32,
    has_struck: bool,
    last_outcome: Option<StrikeOutcome>,
}

impl AttackSequence {
    pub fn new(tuning: &AttackTuning) -> Result<Self, ConfigError> {
        if tuning.total_time <= 0.0 {
            return Err(ConfigError::new("attack.total_time", "must be positive"));
        }
        if tuning.strike_time < 0.0 {
            return Err(ConfigError::new("attack.strike_time", "must not be negative"));
        }
        if tuning.strike_time > tuning.total_time {
            return Err(ConfigError::new(
                "attack.strike_time",
                "must not exceed total_time",
            ));
        }
        Ok(Self {
            strike_time: tuning.strike_time,
            total_time: tuning.total_time,
            hitbox: tuning.hitbox,
            state: AttackState::Disabled,
            elapsed: 0.0,
            has_struck: false,
            last_outcome: None,
        })
    }

    pub fn state(&self) -> AttackState {
        self.state
    }

    pub fn is_attacking(&self) -> bool {
        self.state != AttackState::Disabled
    }

    /// Classification of the most recent strike; persists after the sequence
    /// ends so the render collaborator can read it.
    pub fn last_outcome(&self) -> Option<StrikeOutcome> {
        self.last_outcome
    }

    pub fn start(&mut self) {
        self.state = AttackState::Windup;
        self.elapsed = 0.0;
        self.has_struck = false;
        self.last_outcome = None;
    }

    /// World-space strike box for the current facing. Leftward facing uses
    /// the mirrored placement so the box leads from the opposite edge.
    pub fn strike_box(&self, actor_rect: Rect, facing_right: bool) -> Rect {
        if facing_right {
            hitbox_within(actor_rect, self.hitbox)
        } else {
            mirrored_hitbox_within(actor_rect, self.hitbox)
        }
    }

    /// Advance the timeline. The hit check fires exactly once per `start`
    /// cycle, the tick `elapsed` crosses `strike_time`; the classification is
    /// returned only on that tick.
    pub fn update(
        &mut self,
        delta: f32,
        collisions: &[Collider],
        actor_rect: Rect,
        facing_right: bool,
    ) -> Option<StrikeOutcome> {
        if !self.is_attacking() {
            return None;
        }

        self.elapsed += delta;

        if !self.has_struck && self.elapsed >= self.strike_time {
            self.has_struck = true;
            self.state = AttackState::Strike;

            let strike_box = self.strike_box(actor_rect, facing_right);
            let struck = collisions
                .iter()
                .filter(|candidate| overlaps(strike_box, candidate.rect))
                .find(|candidate| candidate.has(Attribute::Health));
            let outcome = if struck.is_some() {
                StrikeOutcome::Hit
            } else {
                StrikeOutcome::Missed
            };

            self.last_outcome = Some(outcome);
            Some(outcome)
        } else if self.elapsed < self.strike_time {
            self.state = AttackState::Windup;
            None
        } else if self.elapsed < self.total_time {
            self.state = AttackState::Recovery;
            None
        } else {
            self.state = AttackState::Disabled;
            None
        }
    }

    /// Forces the sequence off immediately, discarding any pending strike.
    pub fn cancel(&mut self) {
        self.state = AttackState::Disabled;
    }
}
