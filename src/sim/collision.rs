//! Body-part hit detection
//!
//! The player figure is a head circle, a torso line and two splayed legs. Hits
//! are tested against simple proxies of those shapes in a fixed priority:
//! head, body, legs. The proxies overlap; the first match wins.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::BodyAnchors;
use crate::consts::*;

/// Part of the player that was struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyPart {
    Head,
    Body,
    Legs,
}

impl BodyPart {
    /// Fixed damage for this part
    pub fn damage(self) -> u32 {
        match self {
            BodyPart::Head => DAMAGE_HEAD,
            BodyPart::Body => DAMAGE_BODY,
            BodyPart::Legs => DAMAGE_LEGS,
        }
    }
}

/// Circle overlap test (strict)
#[inline]
fn within(pos: Vec2, center: Vec2, reach: f32) -> bool {
    pos.distance_squared(center) < reach * reach
}

/// Torso proxy: box from the top of the head down to the hip line,
/// half-width of one head radius, inflated by `radius` on every side
fn in_body_box(pos: Vec2, radius: f32, target: &BodyAnchors) -> bool {
    let half_width = target.head_radius + radius;
    let top = target.head_top_y() - radius;
    let bottom = target.legs_top_y + radius;
    (pos.x - target.x).abs() <= half_width && pos.y >= top && pos.y <= bottom
}

/// Leg proxy: a circle around each leg midpoint, only below the hip line
fn in_legs(pos: Vec2, radius: f32, target: &BodyAnchors) -> bool {
    if pos.y <= target.legs_top_y {
        return false;
    }
    let reach = target.leg_length / 2.0 + radius;
    target
        .leg_points()
        .iter()
        .any(|&leg| within(pos, leg, reach))
}

/// Which body part (if any) a projectile at `pos` with `radius` overlaps
pub fn body_part_hit(pos: Vec2, radius: f32, target: &BodyAnchors) -> Option<BodyPart> {
    if within(pos, target.head_center(), target.head_radius + radius) {
        Some(BodyPart::Head)
    } else if in_body_box(pos, radius, target) {
        Some(BodyPart::Body)
    } else if in_legs(pos, radius, target) {
        Some(BodyPart::Legs)
    } else {
        None
    }
}
