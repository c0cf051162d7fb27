//! Ability domain: horizontal motion, gravity, and facing state.

use bevy::prelude::*;

use crate::config::{ConfigError, MotionTuning};
use crate::intent::IntentSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Motion {
    base_speed: f32,
    gravity: f32,
    max_descent: f32,
    speed_multiplier: f32,
    move_lock: Option<Facing>,
    last_facing: Facing,
    pub on_ground: bool,
}

impl Motion {
    pub fn new(tuning: &MotionTuning) -> Result<Self, ConfigError> {
        if tuning.base_speed <= 0.0 {
            return Err(ConfigError::new("motion.base_speed", "must be positive"));
        }
        if tuning.gravity <= 0.0 {
            return Err(ConfigError::new("motion.gravity", "must be positive"));
        }
        if tuning.max_descent <= 0.0 {
            return Err(ConfigError::new("motion.max_descent", "must be positive"));
        }
        Ok(Self {
            base_speed: tuning.base_speed,
            gravity: tuning.gravity,
            max_descent: tuning.max_descent,
            speed_multiplier: 1.0,
            move_lock: None,
            last_facing: Facing::Right,
            on_ground: false,
        })
    }

    pub fn facing(&self) -> Facing {
        self.last_facing
    }

    pub fn facing_right(&self) -> bool {
        self.last_facing == Facing::Right
    }

    pub fn is_move_locked(&self) -> bool {
        self.move_lock.is_some()
    }

    pub fn speed(&self) -> f32 {
        self.base_speed * self.speed_multiplier
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.last_facing = facing;
    }

    /// Force facing and suppress free horizontal intent until released.
    pub fn set_move_lock(&mut self, facing: Facing) {
        self.move_lock = Some(facing);
        self.last_facing = facing;
    }

    pub fn clear_move_lock(&mut self) {
        self.move_lock = None;
    }

    /// Last write wins; multipliers never stack.
    pub fn set_speed_multiplier(&mut self, factor: f32) {
        self.speed_multiplier = factor;
    }

    /// Per-tick horizontal displacement for `intent`. Opposed directions or
    /// an active move-lock yield zero; facing only changes when a direction
    /// is actually chosen.
    pub fn get_move(&mut self, delta: f32, intent: &IntentSnapshot) -> Vec2 {
        if (intent.move_left && intent.move_right) || self.is_move_locked() {
            return Vec2::ZERO;
        }

        let direction = if intent.move_left {
            self.last_facing = Facing::Left;
            Vec2::new(-1.0, 0.0)
        } else if intent.move_right {
            self.last_facing = Facing::Right;
            Vec2::new(1.0, 0.0)
        } else {
            return Vec2::ZERO;
        };

        direction * self.speed() * delta
    }

    /// Per-tick gravity displacement, capped so a delta spike cannot tunnel
    /// through a thin platform.
    pub fn descend(&self, delta: f32) -> Vec2 {
        Vec2::new(0.0, (self.gravity * delta).min(self.max_descent))
    }
}
