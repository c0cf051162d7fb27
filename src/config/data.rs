//! Configuration data definitions mirrored by assets/config/game.ron.

use bevy::prelude::*;
use serde::Deserialize;

use crate::geometry::{HitboxRatios, WindowBounds};

/// A configuration field failed validation. Carries enough context to point
/// straight at the offending tunable.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.field, self.message)
    }
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub clock: ClockConfig,
    pub actor: ActorTuning,
    pub arena: ArenaConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clock: ClockConfig::default(),
            actor: ActorTuning::default(),
            arena: ArenaConfig::default(),
        }
    }
}

impl GameConfig {
    /// Validate every section, collecting all failures rather than stopping
    /// at the first.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        self.window.validate(&mut errors);
        self.clock.validate(&mut errors);
        self.actor.validate(&mut errors);
        self.arena.validate(&mut errors);
        errors
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Vertical allowance above the top edge jump/dash arcs may briefly use.
    pub top_overshoot: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            top_overshoot: 300.0,
        }
    }
}

impl WindowConfig {
    pub fn bounds(&self) -> WindowBounds {
        WindowBounds {
            width: self.width,
            height: self.height,
            top_overshoot: self.top_overshoot,
        }
    }

    fn validate(&self, errors: &mut Vec<ConfigError>) {
        if self.width <= 0.0 {
            errors.push(ConfigError::new("window.width", "must be positive"));
        }
        if self.height <= 0.0 {
            errors.push(ConfigError::new("window.height", "must be positive"));
        }
        if self.top_overshoot < 0.0 {
            errors.push(ConfigError::new("window.top_overshoot", "must not be negative"));
        }
    }
}

/// What to do with a tick whose raw delta exceeds the clock budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum OverrunPolicy {
    /// Drop the tick entirely.
    #[default]
    Skip,
    /// Substitute the clamped maximum and proceed.
    Clamp,
}

/// Outcome of admitting a raw frame delta against the clock budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeltaDecision {
    Run(f32),
    Clamped { raw: f32, clamped: f32 },
    Skipped { raw: f32 },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub fps: f32,
    /// Multiplier over a single frame's duration before a delta counts as an
    /// overrun.
    pub tolerance: f32,
    pub on_overrun: OverrunPolicy,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            fps: 60.0,
            tolerance: 1.1,
            on_overrun: OverrunPolicy::Skip,
        }
    }
}

impl ClockConfig {
    pub fn single_frame(&self) -> f32 {
        1.0 / self.fps
    }

    pub fn max_delta(&self) -> f32 {
        self.single_frame() * self.tolerance
    }

    /// Apply the overrun policy to one raw frame delta.
    pub fn admit(&self, raw: f32) -> DeltaDecision {
        let max = self.max_delta();
        if raw <= max {
            DeltaDecision::Run(raw)
        } else {
            match self.on_overrun {
                OverrunPolicy::Skip => DeltaDecision::Skipped { raw },
                OverrunPolicy::Clamp => DeltaDecision::Clamped { raw, clamped: max },
            }
        }
    }

    fn validate(&self, errors: &mut Vec<ConfigError>) {
        if self.fps <= 0.0 {
            errors.push(ConfigError::new("clock.fps", "must be positive"));
        }
        if self.tolerance < 1.0 {
            errors.push(ConfigError::new("clock.tolerance", "must be at least 1.0"));
        }
    }
}

/// Whether attack shares the performing mutual-exclusion group with dash and
/// defend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum PerformingPolicy {
    #[default]
    Exclusive,
    AttackConcurrent,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    /// Horizontal speed in pixels per second.
    pub base_speed: f32,
    /// Gravity in pixels per second of descent, integrated per tick.
    pub gravity: f32,
    /// Per-tick descent cap so a delta spike cannot tunnel through a thin
    /// platform.
    pub max_descent: f32,
    /// Speed multiplier applied while defending.
    pub defend_multiplier: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            base_speed: 450.0,
            gravity: 800.0,
            max_descent: 40.0,
            defend_multiplier: 0.25,
        }
    }
}

impl MotionTuning {
    fn validate(&self, errors: &mut Vec<ConfigError>) {
        if self.base_speed <= 0.0 {
            errors.push(ConfigError::new("motion.base_speed", "must be positive"));
        }
        if self.gravity <= 0.0 {
            errors.push(ConfigError::new("motion.gravity", "must be positive"));
        }
        if self.max_descent <= 0.0 {
            errors.push(ConfigError::new("motion.max_descent", "must be positive"));
        }
        if self.defend_multiplier <= 0.0 || self.defend_multiplier > 1.0 {
            errors.push(ConfigError::new(
                "motion.defend_multiplier",
                "must be in (0, 1]",
            ));
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JumpTuning {
    /// Round-trip time of the arc in seconds; the peak sits at the midpoint.
    pub duration: f32,
    /// Peak height in pixels.
    pub length: f32,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            duration: 0.7,
            length: 200.0,
        }
    }
}

impl JumpTuning {
    fn validate(&self, errors: &mut Vec<ConfigError>) {
        if self.duration <= 0.0 {
            errors.push(ConfigError::new("jump.duration", "must be positive"));
        }
        if self.length <= 0.0 {
            errors.push(ConfigError::new("jump.length", "must be positive"));
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashTuning {
    pub speed: f32,
    /// Travel cap in pixels; the burst ends strictly past it.
    pub distance: f32,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            speed: 1000.0,
            distance: 150.0,
        }
    }
}

impl DashTuning {
    fn validate(&self, errors: &mut Vec<ConfigError>) {
        if self.speed <= 0.0 {
            errors.push(ConfigError::new("dash.speed", "must be positive"));
        }
        if self.distance <= 0.0 {
            errors.push(ConfigError::new("dash.distance", "must be positive"));
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AttackTuning {
    /// Offset into the sequence at which the one-shot hit check fires.
    pub strike_time: f32,
    pub total_time: f32,
    /// Strike box placement relative to the actor's rectangle, mirrored when
    /// facing left.
    pub hitbox: HitboxRatios,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            strike_time: 0.1,
            total_time: 0.1,
            hitbox: HitboxRatios {
                x: 1.0,
                y: 0.25,
                width: 0.3,
                height: 0.65,
            },
        }
    }
}

impl AttackTuning {
    fn validate(&self, errors: &mut Vec<ConfigError>) {
        if self.total_time <= 0.0 {
            errors.push(ConfigError::new("attack.total_time", "must be positive"));
        }
        if self.strike_time < 0.0 {
            errors.push(ConfigError::new("attack.strike_time", "must not be negative"));
        }
        if self.strike_time > self.total_time {
            errors.push(ConfigError::new(
                "attack.strike_time",
                "must not exceed total_time",
            ));
        }
        if !(0.0..=1.0).contains(&self.hitbox.x) || !(0.0..=1.0).contains(&self.hitbox.y) {
            errors.push(ConfigError::new("attack.hitbox", "x and y must be in [0, 1]"));
        }
        if self.hitbox.width <= 0.0
            || self.hitbox.width > 1.0
            || self.hitbox.height <= 0.0
            || self.hitbox.height > 1.0
        {
            errors.push(ConfigError::new(
                "attack.hitbox",
                "width and height must be in (0, 1]",
            ));
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActorTuning {
    /// Hitbox rectangle size in pixels.
    pub width: f32,
    pub height: f32,
    pub motion: MotionTuning,
    pub jump: JumpTuning,
    pub dash: DashTuning,
    pub attack: AttackTuning,
    pub performing: PerformingPolicy,
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            width: 24.0,
            height: 48.0,
            motion: MotionTuning::default(),
            jump: JumpTuning::default(),
            dash: DashTuning::default(),
            attack: AttackTuning::default(),
            performing: PerformingPolicy::Exclusive,
        }
    }
}

impl ActorTuning {
    fn validate(&self, errors: &mut Vec<ConfigError>) {
        if self.width <= 0.0 || self.height <= 0.0 {
            errors.push(ConfigError::new("actor.width/height", "must be positive"));
        }
        self.motion.validate(errors);
        self.jump.validate(errors);
        self.dash.validate(errors);
        self.attack.validate(errors);
    }
}

/// Solid arena geometry in window-relative coordinates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlatformDef {
    pub rel_x: f32,
    pub rel_y: f32,
    pub rel_width: f32,
    pub rel_height: f32,
}

impl Default for PlatformDef {
    fn default() -> Self {
        Self {
            rel_x: 0.0,
            rel_y: 0.74,
            rel_width: 1.0,
            rel_height: 0.26,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActorSpawnDef {
    pub rel_x: f32,
    pub rel_y: f32,
    pub face_left: bool,
    /// Keyboard-driven when true; a scripted idle dummy otherwise.
    pub keyboard: bool,
}

impl Default for ActorSpawnDef {
    fn default() -> Self {
        Self {
            rel_x: 0.5,
            rel_y: 0.25,
            face_left: false,
            keyboard: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub platforms: Vec<PlatformDef>,
    pub spawns: Vec<ActorSpawnDef>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            platforms: vec![
                PlatformDef {
                    rel_x: 0.0,
                    rel_y: 0.74,
                    rel_width: 1.0,
                    rel_height: 0.26,
                },
                PlatformDef {
                    rel_x: 0.1,
                    rel_y: 0.5,
                    rel_width: 0.2,
                    rel_height: 0.04,
                },
                PlatformDef {
                    rel_x: 0.4,
                    rel_y: 0.325,
                    rel_width: 0.2,
                    rel_height: 0.04,
                },
                PlatformDef {
                    rel_x: 0.7,
                    rel_y: 0.5,
                    rel_width: 0.2,
                    rel_height: 0.04,
                },
            ],
            spawns: vec![
                ActorSpawnDef {
                    rel_x: 0.5,
                    rel_y: 0.25,
                    face_left: false,
                    keyboard: true,
                },
                ActorSpawnDef {
                    rel_x: 0.75,
                    rel_y: 0.25,
                    face_left: true,
                    keyboard: false,
                },
            ],
        }
    }
}

impl ArenaConfig {
    fn validate(&self, errors: &mut Vec<ConfigError>) {
        for platform in &self.platforms {
            if platform.rel_width <= 0.0 || platform.rel_height <= 0.0 {
                errors.push(ConfigError::new(
                    "arena.platforms",
                    "rel_width and rel_height must be positive",
                ));
            }
            if !(0.0..=1.0).contains(&platform.rel_x) || !(0.0..=1.0).contains(&platform.rel_y) {
                errors.push(ConfigError::new(
                    "arena.platforms",
                    "rel_x and rel_y must be in [0, 1]",
                ));
            }
        }
        for spawn in &self.spawns {
            if !(0.0..=1.0).contains(&spawn.rel_x) || !(0.0..=1.0).contains(&spawn.rel_y) {
                errors.push(ConfigError::new(
                    "arena.spawns",
                    "rel_x and rel_y must be in [0, 1]",
                ));
            }
        }
    }
}
