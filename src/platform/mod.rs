//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Pointer coordinates (CSS pixels -> playfield)

use glam::Vec2;

/// Maps device (client) coordinates onto the playfield.
///
/// The canvas may be displayed at a different size than its backing store,
/// so pointer positions are offset by the element's rect and scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub rect_left: f32,
    pub rect_top: f32,
    pub rect_width: f32,
    pub rect_height: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl ViewportTransform {
    /// Canvas shown at its native size at the origin
    pub fn identity(width: f32, height: f32) -> Self {
        Self {
            rect_left: 0.0,
            rect_top: 0.0,
            rect_width: width,
            rect_height: height,
            canvas_width: width,
            canvas_height: height,
        }
    }

    /// Convert client coordinates to playfield coordinates
    pub fn to_playfield(&self, client_x: f32, client_y: f32) -> Vec2 {
        let scale = |canvas: f32, rect: f32| {
            if rect > 0.0 && rect.is_finite() {
                canvas / rect
            } else {
                1.0
            }
        };
        Vec2::new(
            (client_x - self.rect_left) * scale(self.canvas_width, self.rect_width),
            (client_y - self.rect_top) * scale(self.canvas_height, self.rect_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let t = ViewportTransform::identity(800.0, 600.0);
        assert_eq!(t.to_playfield(12.0, 34.0), Vec2::new(12.0, 34.0));
    }

    #[test]
    fn test_offset_and_scale() {
        let t = ViewportTransform {
            rect_left: 100.0,
            rect_top: 50.0,
            rect_width: 400.0,
            rect_height: 300.0,
            canvas_width: 800.0,
            canvas_height: 600.0,
        };
        assert_eq!(t.to_playfield(300.0, 200.0), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_degenerate_rect() {
        let t = ViewportTransform {
            rect_left: 10.0,
            rect_top: 10.0,
            rect_width: 0.0,
            rect_height: f32::NAN,
            canvas_width: 800.0,
            canvas_height: 600.0,
        };
        assert_eq!(t.to_playfield(20.0, 30.0), Vec2::new(10.0, 20.0));
    }
}
