//! Geometry domain: unit tests for rectangle math and collision lookup.

use bevy::prelude::*;

use super::{
    Attribute, Collider, HitboxRatios, WindowBounds, first_collision, first_collision_below,
    hitbox_within, mirrored_hitbox_within, offset_rect, overlaps, place_on_top, rect_from_xywh,
};

fn bounds() -> WindowBounds {
    WindowBounds {
        width: 1280.0,
        height: 720.0,
        top_overshoot: 300.0,
    }
}

#[test]
fn test_clamp_allows_overshoot_above_top_only() {
    let bounds = bounds();

    // Within the allowance above the top edge: untouched.
    let airborne = rect_from_xywh(100.0, -250.0, 24.0, 48.0);
    assert_eq!(bounds.clamp(airborne), airborne);

    // Past the allowance: pinned to the extended ceiling.
    let too_high = rect_from_xywh(100.0, -500.0, 24.0, 48.0);
    assert_eq!(bounds.clamp(too_high).min.y, -300.0);

    // Bottom and sides get no such allowance.
    let below = rect_from_xywh(100.0, 800.0, 24.0, 48.0);
    assert_eq!(bounds.clamp(below).min.y, 720.0 - 48.0);
    let left = rect_from_xywh(-60.0, 100.0, 24.0, 48.0);
    assert_eq!(bounds.clamp(left).min.x, 0.0);
    let right = rect_from_xywh(1400.0, 100.0, 24.0, 48.0);
    assert_eq!(bounds.clamp(right).min.x, 1280.0 - 24.0);
}

#[test]
fn test_offset_preserves_size() {
    let rect = rect_from_xywh(10.0, 20.0, 30.0, 40.0);
    let moved = offset_rect(rect, Vec2::new(5.0, -7.0));
    assert_eq!(moved.min, Vec2::new(15.0, 13.0));
    assert_eq!(moved.width(), 30.0);
    assert_eq!(moved.height(), 40.0);
}

#[test]
fn test_place_on_top_snaps_bottom_to_support_top() {
    let moving = rect_from_xywh(100.0, 580.0, 24.0, 48.0);
    let support = rect_from_xywh(0.0, 600.0, 1280.0, 120.0);
    let placed = place_on_top(moving, support);
    assert_eq!(placed.max.y, 600.0);
    assert_eq!(placed.min.x, 100.0);
    assert_eq!(placed.height(), 48.0);
}

#[test]
fn test_touching_edges_do_not_overlap() {
    let a = rect_from_xywh(0.0, 0.0, 10.0, 10.0);
    let b = rect_from_xywh(10.0, 0.0, 10.0, 10.0);
    assert!(!overlaps(a, b));
    assert!(overlaps(a, rect_from_xywh(9.0, 0.0, 10.0, 10.0)));
}

#[test]
fn test_hitbox_within_scales_by_anchor() {
    let anchor = rect_from_xywh(100.0, 100.0, 40.0, 80.0);
    let ratios = HitboxRatios {
        x: 1.0,
        y: 0.25,
        width: 0.3,
        height: 0.65,
    };
    let hitbox = hitbox_within(anchor, ratios);
    assert_eq!(hitbox.min, Vec2::new(140.0, 120.0));
    assert!((hitbox.width() - 12.0).abs() < 1e-6);
    assert!((hitbox.height() - 52.0).abs() < 1e-6);
}

#[test]
fn test_mirrored_hitbox_reflects_excess_past_far_edge() {
    let anchor = rect_from_xywh(100.0, 100.0, 40.0, 80.0);
    let ratios = HitboxRatios {
        x: 1.0,
        y: 0.25,
        width: 0.3,
        height: 0.65,
    };
    // Rightward box spans [140, 152]; mirrored it leads off the left edge.
    let mirrored = mirrored_hitbox_within(anchor, ratios);
    assert!((mirrored.min.x - 88.0).abs() < 1e-4);
    assert!((mirrored.max.x - 100.0).abs() < 1e-4);
    assert_eq!(mirrored.min.y, 120.0);
    assert!((mirrored.width() - 12.0).abs() < 1e-6);
}

#[test]
fn test_first_collision_preserves_input_order() {
    let probe = rect_from_xywh(0.0, 0.0, 50.0, 50.0);
    let candidates = vec![
        Collider::new(rect_from_xywh(40.0, 40.0, 20.0, 20.0)),
        Collider::with_attributes(rect_from_xywh(30.0, 30.0, 20.0, 20.0), vec![Attribute::Health]),
    ];
    let winner = first_collision(probe, &candidates).unwrap();
    assert!(!winner.has(Attribute::Health));
}

#[test]
fn test_first_collision_none_without_overlap() {
    let probe = rect_from_xywh(0.0, 0.0, 10.0, 10.0);
    let candidates = vec![Collider::new(rect_from_xywh(100.0, 100.0, 20.0, 20.0))];
    assert!(first_collision(probe, &candidates).is_none());
}

#[test]
fn test_first_collision_below_requires_support_in_lower_half() {
    let falling = rect_from_xywh(100.0, 560.0, 24.0, 48.0);

    // Ground whose top edge sits under the midline: support.
    let ground = vec![Collider::new(rect_from_xywh(0.0, 600.0, 1280.0, 120.0))];
    assert!(first_collision_below(falling, &ground).is_some());

    // A wall clipped at head height is not support.
    let wall = vec![Collider::new(rect_from_xywh(90.0, 400.0, 40.0, 180.0))];
    assert!(first_collision_below(falling, &wall).is_none());
}
