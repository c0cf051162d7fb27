//! Configuration domain: unit tests for validation and the delta budget.

use super::data::{DeltaDecision, GameConfig, OverrunPolicy};
use super::loader::ron_options;

#[test]
fn test_default_config_validates_cleanly() {
    assert!(GameConfig::default().validate().is_empty());
}

#[test]
fn test_rejects_nonpositive_jump_duration() {
    let mut config = GameConfig::default();
    config.actor.jump.duration = 0.0;
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.field == "jump.duration"));
}

#[test]
fn test_rejects_out_of_range_hitbox_ratios() {
    let mut config = GameConfig::default();
    config.actor.attack.hitbox.x = 1.5;
    assert!(config.validate().iter().any(|e| e.field == "attack.hitbox"));

    let mut config = GameConfig::default();
    config.actor.attack.hitbox.width = 0.0;
    assert!(config.validate().iter().any(|e| e.field == "attack.hitbox"));
}

#[test]
fn test_rejects_strike_after_total() {
    let mut config = GameConfig::default();
    config.actor.attack.strike_time = 0.3;
    config.actor.attack.total_time = 0.2;
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.field == "attack.strike_time"));
}

#[test]
fn test_error_display_names_the_field() {
    let mut config = GameConfig::default();
    config.actor.dash.distance = -1.0;
    let errors = config.validate();
    let rendered = errors[0].to_string();
    assert!(rendered.contains("dash.distance"), "got: {rendered}");
}

#[test]
fn test_partial_ron_merges_over_defaults() {
    let config: GameConfig = ron_options()
        .from_str("(clock: (fps: 120.0))")
        .expect("partial config should parse");
    assert_eq!(config.clock.fps, 120.0);
    // Untouched sections keep their defaults.
    assert_eq!(config.window.width, 1280.0);
    assert_eq!(config.actor.dash.distance, 150.0);
}

#[test]
fn test_admit_runs_deltas_within_budget() {
    let config = GameConfig::default();
    assert_eq!(
        config.clock.admit(1.0 / 60.0),
        DeltaDecision::Run(1.0 / 60.0)
    );
}

#[test]
fn test_admit_skip_policy_drops_overruns() {
    let config = GameConfig::default();
    match config.clock.admit(0.25) {
        DeltaDecision::Skipped { raw } => assert_eq!(raw, 0.25),
        other => panic!("expected Skipped, got {other:?}"),
    }
}

#[test]
fn test_admit_clamp_policy_substitutes_maximum() {
    let mut config = GameConfig::default();
    config.clock.on_overrun = OverrunPolicy::Clamp;
    match config.clock.admit(0.25) {
        DeltaDecision::Clamped { raw, clamped } => {
            assert_eq!(raw, 0.25);
            assert!((clamped - config.clock.max_delta()).abs() < 1e-6);
        }
        other => panic!("expected Clamped, got {other:?}"),
    }
}
