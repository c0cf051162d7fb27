//! Geometry domain: axis-aligned rectangle math and the collision query
//! surface the simulation consumes each tick.

use bevy::prelude::*;
use serde::Deserialize;

#[cfg(test)]
mod tests;

/// What a collision candidate *is*. `Health` marks something a strike can
/// land on; `Motion` marks something subject to physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Health,
    Motion,
}

/// One entry of the per-tick collision query surface. The simulation never
/// retains these across ticks.
#[derive(Debug, Clone)]
pub struct Collider {
    pub rect: Rect,
    pub attributes: Vec<Attribute>,
}

impl Collider {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(rect: Rect, attributes: Vec<Attribute>) -> Self {
        Self { rect, attributes }
    }

    pub fn has(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

/// Playfield bounds. `top_overshoot` is the vertical allowance above the top
/// edge that jump and dash arcs may briefly occupy.
#[derive(Debug, Clone, Copy)]
pub struct WindowBounds {
    pub width: f32,
    pub height: f32,
    pub top_overshoot: f32,
}

impl WindowBounds {
    /// Move `rect` so it lies entirely inside the playfield, extended upward
    /// by `top_overshoot`. Only positions change, never sizes.
    pub fn clamp(&self, rect: Rect) -> Rect {
        let width = rect.width();
        let height = rect.height();
        let x = rect.min.x.clamp(0.0, (self.width - width).max(0.0));
        let y = rect
            .min
            .y
            .clamp(-self.top_overshoot, (self.height - height).max(-self.top_overshoot));
        rect_from_xywh(x, y, width, height)
    }
}

pub fn rect_from_xywh(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(x, y, x + width, y + height)
}

pub fn offset_rect(rect: Rect, delta: Vec2) -> Rect {
    Rect {
        min: rect.min + delta,
        max: rect.max + delta,
    }
}

/// Snap `moving` so its bottom edge rests on `support`'s top edge.
pub fn place_on_top(moving: Rect, support: Rect) -> Rect {
    rect_from_xywh(
        moving.min.x,
        support.min.y - moving.height(),
        moving.width(),
        moving.height(),
    )
}

/// Strict overlap: rectangles that merely share an edge do not collide.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}

/// Relative placement of a sub-rectangle within an anchor rectangle; ratios
/// of the anchor's width/height.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HitboxRatios {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for HitboxRatios {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

pub fn hitbox_within(anchor: Rect, ratios: HitboxRatios) -> Rect {
    rect_from_xywh(
        anchor.min.x + anchor.width() * ratios.x,
        anchor.min.y + anchor.height() * ratios.y,
        anchor.width() * ratios.width,
        anchor.height() * ratios.height,
    )
}

/// Leftward-facing variant of [`hitbox_within`]: the sub-rectangle is
/// reflected across the anchor so any excess past the far edge sticks out on
/// the opposite side, keeping the box anchored to the leading edge.
pub fn mirrored_hitbox_within(anchor: Rect, ratios: HitboxRatios) -> Rect {
    let width = anchor.width() * ratios.width;
    let x = anchor.min.x + anchor.width() - anchor.width() * (ratios.x + ratios.width);
    rect_from_xywh(
        x,
        anchor.min.y + anchor.height() * ratios.y,
        width,
        anchor.height() * ratios.height,
    )
}

/// First candidate intersecting `rect`. Input order is the tie-break on
/// simultaneous overlap.
pub fn first_collision<'a>(rect: Rect, candidates: &'a [Collider]) -> Option<&'a Collider> {
    candidates
        .iter()
        .find(|candidate| overlaps(rect, candidate.rect))
}

/// First candidate intersecting `rect` from below: its top edge must lie in
/// the lower half of `rect` to count as support.
pub fn first_collision_below<'a>(rect: Rect, candidates: &'a [Collider]) -> Option<&'a Collider> {
    let midline = rect.min.y + rect.height() * 0.5;
    candidates
        .iter()
        .find(|candidate| overlaps(rect, candidate.rect) && candidate.rect.min.y >= midline)
}
