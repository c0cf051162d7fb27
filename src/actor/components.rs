//! Actor domain: one Motion + Jump + Dash + Attack set coordinated over a
//! single authoritative bounding rectangle.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::ability::{
    AttackSequence, AttackState, DashSequence, DashState, Facing, JumpSequence, JumpState, Motion,
    StatusEffect, StrikeOutcome,
};
use crate::config::{ActorTuning, ConfigError, PerformingPolicy};
use crate::geometry::{
    Attribute, Collider, WindowBounds, first_collision, first_collision_below, offset_rect,
    place_on_top,
};
use crate::intent::{IntentSnapshot, falling_edge, rising_edge};

/// Marker: this actor's intent comes from the local keyboard.
#[derive(Component, Debug)]
pub struct PlayerControlled;

/// Intent staged by the translation layer for the next simulation step.
#[derive(Component, Debug, Default)]
pub struct PendingIntent(pub IntentSnapshot);

/// Mutual-exclusion group for ability starts; at most one member owns the
/// actor at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performing {
    Attack,
    Dash,
    Defend,
}

#[derive(Component, Debug)]
pub struct Actor {
    motion: Motion,
    jump: JumpSequence,
    dash: DashSequence,
    attack: AttackSequence,
    rect: Rect,
    flip_x: bool,
    attributes: Vec<Attribute>,
    status_effects: HashSet<StatusEffect>,
    performing: Option<Performing>,
    policy: PerformingPolicy,
    defend_multiplier: f32,
    window: WindowBounds,
    intent: IntentSnapshot,
    strike_resolution: Option<StrikeOutcome>,
}

impl Actor {
    pub fn new(tuning: &ActorTuning, window: WindowBounds, origin: Rect) -> Result<Self, ConfigError> {
        Ok(Self {
            motion: Motion::new(&tuning.motion)?,
            jump: JumpSequence::new(&tuning.jump)?,
            dash: DashSequence::new(&tuning.dash)?,
            attack: AttackSequence::new(&tuning.attack)?,
            rect: origin,
            flip_x: false,
            attributes: vec![Attribute::Health, Attribute::Motion],
            status_effects: HashSet::new(),
            performing: None,
            policy: tuning.performing,
            defend_multiplier: tuning.motion.defend_multiplier,
            window,
            intent: IntentSnapshot::default(),
            strike_resolution: None,
        })
    }

    pub fn face(&mut self, facing: Facing) {
        self.motion.set_facing(facing);
        self.flip_x = facing == Facing::Left;
    }

    // Render-facing state.

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn flip_x(&self) -> bool {
        self.flip_x
    }

    pub fn facing_right(&self) -> bool {
        self.motion.facing_right()
    }

    pub fn grounded(&self) -> bool {
        self.motion.on_ground
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump.state()
    }

    pub fn dash_state(&self) -> DashState {
        self.dash.state()
    }

    pub fn dash_travelled(&self) -> f32 {
        self.dash.travelled()
    }

    pub fn attack_state(&self) -> AttackState {
        self.attack.state()
    }

    /// Classification of the most recent strike, for debug visualization.
    pub fn last_strike(&self) -> Option<StrikeOutcome> {
        self.attack.last_outcome()
    }

    /// Strike classification if the hit check fired during the last update,
    /// for the external damage collaborator.
    pub fn strike_resolution(&self) -> Option<StrikeOutcome> {
        self.strike_resolution
    }

    pub fn status_effects(&self) -> &HashSet<StatusEffect> {
        &self.status_effects
    }

    pub fn has_status_effect(&self, effect: StatusEffect) -> bool {
        self.status_effects.contains(&effect)
    }

    pub fn performing(&self) -> Option<Performing> {
        self.performing
    }

    pub fn intent(&self) -> &IntentSnapshot {
        &self.intent
    }

    /// This actor as a collision candidate for other actors' queries.
    pub fn collider(&self) -> Collider {
        Collider::with_attributes(self.rect, self.attributes.clone())
    }

    /// Stage `next` against the previously applied snapshot, starting and
    /// stopping abilities on the detected edges.
    pub fn receive_intent(&mut self, next: IntentSnapshot) {
        let previous = self.intent;

        // Jump starts only from the ground and never restarts mid-flight.
        if self.motion.on_ground
            && !self.jump.is_active()
            && rising_edge(previous.jump_up, next.jump_up)
        {
            self.jump.start(self.rect);
            self.motion.on_ground = false;
        }

        match self.policy {
            PerformingPolicy::Exclusive => {
                if self.performing.is_none() {
                    if rising_edge(previous.attack, next.attack) && !self.attack.is_attacking() {
                        self.performing = Some(Performing::Attack);
                        self.attack.start();
                    } else if next.defend {
                        self.performing = Some(Performing::Defend);
                        self.motion.set_speed_multiplier(self.defend_multiplier);
                    }
                }
            }
            PerformingPolicy::AttackConcurrent => {
                if rising_edge(previous.attack, next.attack) && !self.attack.is_attacking() {
                    self.attack.start();
                }
                if next.defend && self.performing.is_none() {
                    self.performing = Some(Performing::Defend);
                    self.motion.set_speed_multiplier(self.defend_multiplier);
                }
            }
        }

        if falling_edge(previous.defend, next.defend) {
            self.motion.set_speed_multiplier(1.0);
            if self.performing == Some(Performing::Defend) {
                self.performing = None;
            }
        }

        if rising_edge(previous.dash, next.dash)
            && !self.dash.is_dashing()
            && self.performing.is_none()
        {
            let direction = if next.move_right {
                Facing::Right
            } else if next.move_left {
                Facing::Left
            } else {
                self.motion.facing()
            };

            self.performing = Some(Performing::Dash);
            for effect in self.dash.status_effects() {
                self.status_effects.insert(*effect);
            }
            self.dash.start(direction);
            self.motion.set_move_lock(direction);
            debug!("Dash started towards {direction:?} ({})", next.source);
        }

        self.intent = next;
    }

    /// One simulation tick over a snapshot collision list. The priority chain
    /// is fixed: movement, then exactly one of dash/jump/gravity, then
    /// attack. Every position change is speculative-checked before commit.
    pub fn update(&mut self, delta: f32, collisions: &[Collider]) {
        self.strike_resolution = None;

        self.apply_movement(delta, collisions);

        if self.jump.is_active() {
            if self.dash.is_dashing() {
                // Dash owns the override slot. A rising jump re-times into
                // its falling arc; a falling one disables, so gravity owns
                // descent once the dash ends.
                self.jump.cancel();
                self.apply_dash(delta, collisions);
            } else if let Some(rect) = self.jump.update(self.rect, delta, collisions, &self.window)
            {
                self.rect = rect;
            }
        } else if self.dash.is_dashing() {
            self.apply_dash(delta, collisions);
        } else {
            self.apply_gravity(delta, collisions);
        }

        if self.attack.is_attacking() {
            let facing_right = self.motion.facing_right();
            self.strike_resolution = self.attack.update(delta, collisions, self.rect, facing_right);
            if !self.attack.is_attacking() && self.performing == Some(Performing::Attack) {
                self.performing = None;
            }
        }
    }

    fn apply_movement(&mut self, delta: f32, collisions: &[Collider]) {
        if !self.intent.is_moving() {
            return;
        }

        let movement = self.motion.get_move(delta, &self.intent);
        self.flip_x = !self.motion.facing_right();

        let speculative = self.window.clamp(offset_rect(self.rect, movement));
        if first_collision(speculative, collisions).is_none() {
            self.rect = speculative;
        }
    }

    fn apply_dash(&mut self, delta: f32, collisions: &[Collider]) {
        if let Some(rect) = self.dash.update(self.rect, delta, collisions, &self.window) {
            self.rect = rect;
        }

        if !self.dash.is_dashing() {
            for effect in self.dash.status_effects() {
                self.status_effects.remove(effect);
            }
            self.motion.clear_move_lock();
            if self.performing == Some(Performing::Dash) {
                self.performing = None;
            }
        }
    }

    fn apply_gravity(&mut self, delta: f32, collisions: &[Collider]) {
        let descended = offset_rect(self.rect, self.motion.descend(delta));
        if let Some(support) = first_collision_below(descended, collisions) {
            self.rect = place_on_top(descended, support.rect);
            self.motion.on_ground = true;
        } else {
            self.rect = descended;
            self.motion.on_ground = false;
        }
    }
}
