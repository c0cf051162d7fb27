mod ability;
mod actor;
mod arena;
mod config;
#[cfg(feature = "dev-tools")]
mod debug;
mod geometry;
mod intent;

use std::path::Path;

use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    let config = config::load(Path::new("assets/config/game.ron"));

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Slime Duel".to_string(),
            resolution: WindowResolution::new(
                config.window.width as u32,
                config.window.height as u32,
            ),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(config)
    .add_plugins((arena::ArenaPlugin, actor::ActorPlugin));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
