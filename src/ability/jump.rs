//! Ability domain: parabolic jump arc with early-cancel re-timing.

use bevy::prelude::*;

use crate::config::{ConfigError, JumpTuning};
use crate::geometry::{Collider, WindowBounds, first_collision, rect_from_xywh};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    #[default]
    Disabled,
    Rising,
    Falling,
}

fn parabolic_position(time: f32, duration: f32) -> f32 {
    -time * time + duration * time
}

/// Vertical displacement follows `height(t) = -t^2 + duration * t`,
/// normalized against the analytic peak and scaled by `length`. The peak
/// sits at `duration / 2` by construction.
#[derive(Debug, Clone)]
pub struct JumpSequence {
    duration: f32,
    length: f32,
    peak_time: f32,
    relative_peak: f32,
    state: JumpState,
    elapsed: f32,
    start_height: f32,
}

impl JumpSequence {
    pub fn new(tuning: &JumpTuning) -> Result<Self, ConfigError> {
        if tuning.duration <= 0.0 {
            return Err(ConfigError::new("jump.duration", "must be positive"));
        }
        if tuning.length <= 0.0 {
            return Err(ConfigError::new("jump.length", "must be positive"));
        }
        let peak_time = tuning.duration / 2.0;
        Ok(Self {
            duration: tuning.duration,
            length: tuning.length,
            peak_time,
            relative_peak: parabolic_position(peak_time, tuning.duration),
            state: JumpState::Disabled,
            elapsed: 0.0,
            start_height: 0.0,
        })
    }

    pub fn state(&self) -> JumpState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != JumpState::Disabled
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn start(&mut self, origin: Rect) {
        self.state = JumpState::Rising;
        self.start_height = origin.min.y;
        self.elapsed = 0.0;
    }

    /// Advance the arc. Returns the rectangle to commit, or `None` when the
    /// speculative position collided and the jump was cancelled instead,
    /// leaving the caller's rectangle untouched for this tick.
    pub fn update(
        &mut self,
        rect: Rect,
        delta: f32,
        collisions: &[Collider],
        window: &WindowBounds,
    ) -> Option<Rect> {
        if !self.is_active() {
            return None;
        }

        self.elapsed += delta;

        let progress = parabolic_position(self.elapsed, self.duration) / self.relative_peak;
        let target_height = self.start_height - self.length * progress;
        let speculative =
            window.clamp(rect_from_xywh(rect.min.x, target_height, rect.width(), rect.height()));

        if self.elapsed < self.peak_time {
            self.state = JumpState::Rising;
        } else if self.elapsed > self.peak_time {
            self.state = JumpState::Falling;
        }

        let committed = if first_collision(speculative, collisions).is_some() {
            self.cancel();
            None
        } else {
            Some(speculative)
        };

        if self.elapsed >= self.duration {
            self.state = JumpState::Disabled;
        }

        committed
    }

    /// A rising jump mirrors its elapsed time around the peak and falls back
    /// along the same parabola; a falling jump snaps straight to disabled.
    pub fn cancel(&mut self) {
        match self.state {
            JumpState::Rising => {
                self.state = JumpState::Falling;
                self.elapsed = self.peak_time + (self.peak_time - self.elapsed);
            }
            JumpState::Falling => {
                self.state = JumpState::Disabled;
                self.elapsed = self.duration;
            }
            JumpState::Disabled => {}
        }
    }
}
