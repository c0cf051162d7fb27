//! Loader for the RON game configuration.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use ron::Options;

use super::data::GameConfig;

/// RON options with extensions enabled for more flexible parsing.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the game configuration. A missing file falls back to defaults; a
/// file that exists but fails to parse or validate aborts startup, so
/// tunables are never silently replaced or clamped.
pub fn load(path: &Path) -> GameConfig {
    let config = if path.exists() {
        let contents = fs::read_to_string(path)
            .unwrap_or_else(|error| panic!("failed to read {}: {}", path.display(), error));
        let config: GameConfig = ron_options()
            .from_str(&contents)
            .unwrap_or_else(|error| panic!("failed to parse {}: {}", path.display(), error));
        info!("Loaded configuration from {}", path.display());
        config
    } else {
        warn!("No configuration at {}, using defaults", path.display());
        GameConfig::default()
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            error!("{error}");
        }
        panic!(
            "configuration rejected with {} error(s), first: {}",
            errors.len(),
            errors[0]
        );
    }

    config
}
