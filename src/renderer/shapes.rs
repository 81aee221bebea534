//! Shape primitives in playfield coordinates

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear RGBA, 0-1
pub type Color = [f32; 4];

/// Convert a packed 0xRRGGBB value to an opaque color
pub const fn rgb(hex: u32) -> Color {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// A single thing to paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Closed filled polygon
    Polygon {
        points: Vec<Vec2>,
        color: Color,
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
}

/// Rotate `local` by `angle` and move it to `origin`
#[inline]
pub fn place(origin: Vec2, angle: f32, local: Vec2) -> Vec2 {
    origin + Vec2::from_angle(angle).rotate(local)
}
