//! Arena domain: platforms, actor spawns, and the static collision list.

use bevy::prelude::*;

use crate::ability::Facing;
use crate::actor::{Actor, PendingIntent, PlayerControlled};
use crate::config::GameConfig;
use crate::geometry::{Collider, rect_from_xywh};
use crate::intent::{IntentSnapshot, IntentSource};

/// Marker for solid arena geometry. Platforms carry no attributes; they
/// block movement but cannot be struck.
#[derive(Component, Debug)]
pub struct Platform;

/// Collision candidates that never move, built once at arena spawn. List
/// order is the collision tie-break order.
#[derive(Resource, Debug, Default)]
pub struct StaticColliders(pub Vec<Collider>);

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StaticColliders>()
            .add_systems(Startup, (setup_camera, spawn_arena));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_arena(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut statics: ResMut<StaticColliders>,
) {
    let window = &config.window;
    let to_render = |x: f32, y: f32| {
        Vec3::new(x - window.width / 2.0, window.height / 2.0 - y, 0.0)
    };

    for def in &config.arena.platforms {
        let rect = rect_from_xywh(
            def.rel_x * window.width,
            def.rel_y * window.height,
            def.rel_width * window.width,
            def.rel_height * window.height,
        );
        statics.0.push(Collider::new(rect));
        commands.spawn((
            Platform,
            Sprite {
                color: Color::srgb(0.35, 0.35, 0.42),
                custom_size: Some(rect.size()),
                ..default()
            },
            Transform::from_translation(to_render(rect.center().x, rect.center().y)),
        ));
    }
    info!("Arena ready with {} platforms", statics.0.len());

    for spawn in &config.arena.spawns {
        let size = Vec2::new(config.actor.width, config.actor.height);
        let origin = Rect::from_center_size(
            Vec2::new(spawn.rel_x * window.width, spawn.rel_y * window.height),
            size,
        );

        let mut actor = Actor::new(&config.actor, window.bounds(), origin)
            .unwrap_or_else(|error| panic!("actor construction failed: {error}"));
        if spawn.face_left {
            actor.face(Facing::Left);
        }

        let color = if spawn.keyboard {
            Color::srgb(0.45, 0.8, 0.45)
        } else {
            Color::srgb(0.8, 0.55, 0.45)
        };
        let translation = to_render(origin.center().x, origin.center().y) + Vec3::Z;

        let mut entity = commands.spawn((
            actor,
            PendingIntent(IntentSnapshot {
                source: IntentSource::Scripted,
                ..Default::default()
            }),
            Sprite {
                color,
                custom_size: Some(size),
                flip_x: spawn.face_left,
                ..default()
            },
            Transform::from_translation(translation),
        ));
        if spawn.keyboard {
            entity.insert(PlayerControlled);
        }
    }
}
