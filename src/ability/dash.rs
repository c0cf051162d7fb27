//! Ability domain: fixed-speed dash burst with a distance cap.

use bevy::prelude::*;

use crate::config::{ConfigError, DashTuning};
use crate::geometry::{Collider, WindowBounds, first_collision, offset_rect};

use super::motion::Facing;
use super::StatusEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashState {
    #[default]
    Disabled,
    Enabled,
}

#[derive(Debug, Clone)]
pub struct DashSequence {
    speed: f32,
    distance: f32,
    travelled: f32,
    state: DashState,
    direction: Option<Facing>,
}

impl DashSequence {
    pub fn new(tuning: &DashTuning) -> Result<Self, ConfigError> {
        if tuning.speed <= 0.0 {
            return Err(ConfigError::new("dash.speed", "must be positive"));
        }
        if tuning.distance <= 0.0 {
            return Err(ConfigError::new("dash.distance", "must be positive"));
        }
        Ok(Self {
            speed: tuning.speed,
            distance: tuning.distance,
            travelled: 0.0,
            state: DashState::Disabled,
            direction: None,
        })
    }

    pub fn state(&self) -> DashState {
        self.state
    }

    pub fn is_dashing(&self) -> bool {
        self.state == DashState::Enabled
    }

    pub fn travelled(&self) -> f32 {
        self.travelled
    }

    pub fn direction(&self) -> Option<Facing> {
        self.direction
    }

    /// Tags granted while the burst runs. The actor owns adding and removing
    /// them from its own status set.
    pub fn status_effects(&self) -> &'static [StatusEffect] {
        &[StatusEffect::Invulnerable]
    }

    /// Re-entrant: starting while already enabled leaves the burst unchanged.
    pub fn start(&mut self, direction: Facing) {
        if self.is_dashing() {
            return;
        }
        self.state = DashState::Enabled;
        self.direction = Some(direction);
    }

    /// Advance the burst. Returns the rectangle to commit; `None` means the
    /// speculative step collided and the burst terminated at the current
    /// position with no displacement this tick.
    pub fn update(
        &mut self,
        rect: Rect,
        delta: f32,
        collisions: &[Collider],
        window: &WindowBounds,
    ) -> Option<Rect> {
        if !self.is_dashing() {
            return None;
        }
        let Some(direction) = self.direction else {
            self.cancel();
            return None;
        };

        let displacement = Vec2::new(direction.sign() * self.speed * delta, 0.0);
        let speculative = window.clamp(offset_rect(rect, displacement));

        if first_collision(speculative, collisions).is_some() {
            self.cancel();
            return None;
        }

        self.travelled += displacement.length();
        if self.travelled > self.distance {
            self.cancel();
        }
        Some(speculative)
    }

    /// Ends the burst and zeroes the odometer.
    pub fn cancel(&mut self) {
        self.travelled = 0.0;
        self.state = DashState::Disabled;
        self.direction = None;
    }
}
