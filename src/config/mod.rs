//! Configuration domain: explicit tunables for the window, clock, actor
//! abilities, and arena layout, loaded from RON with fail-fast validation.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{
    ActorSpawnDef, ActorTuning, ArenaConfig, AttackTuning, ClockConfig, ConfigError, DashTuning,
    DeltaDecision, GameConfig, JumpTuning, MotionTuning, OverrunPolicy, PerformingPolicy,
    PlatformDef, WindowConfig,
};
pub use loader::load;
