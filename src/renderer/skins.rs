//! Per-kind projectile appearance
//!
//! Skins are looked up by `ProjectileKind`; the projectile record itself
//! carries no drawing code.

use glam::Vec2;

use super::shapes::{Shape, place, rgb};
use crate::sim::projectile::{Projectile, ProjectileKind};

/// Draws one kind of projectile
pub trait ProjectileSkin {
    fn shapes(&self, projectile: &Projectile) -> Vec<Shape>;
}

/// Shaft with a triangular head, pointing along the velocity
pub struct ArrowSkin;

/// Dark ball with a short fuse
pub struct BombSkin;

/// Green rind, red flesh, a few seeds
pub struct WatermelonSkin;

const ARROW_LENGTH: f32 = 15.0;
const ARROW_HEAD_LENGTH: f32 = 7.0;
const ARROW_HEAD_WIDTH: f32 = 5.0;

impl ProjectileSkin for ArrowSkin {
    fn shapes(&self, projectile: &Projectile) -> Vec<Shape> {
        let angle = projectile.vel.y.atan2(projectile.vel.x);
        let at = |local: Vec2| place(projectile.pos, angle, local);
        let half = ARROW_LENGTH / 2.0;
        let shaft = rgb(0x555555);

        vec![
            Shape::Line {
                from: at(Vec2::new(-half, 0.0)),
                to: at(Vec2::new(half, 0.0)),
                width: 1.0,
                color: shaft,
            },
            Shape::Polygon {
                points: vec![
                    at(Vec2::new(half, 0.0)),
                    at(Vec2::new(half - ARROW_HEAD_LENGTH, -ARROW_HEAD_WIDTH / 2.0)),
                    at(Vec2::new(half - ARROW_HEAD_LENGTH, ARROW_HEAD_WIDTH / 2.0)),
                ],
                color: rgb(0x7f8c8d),
            },
        ]
    }
}

impl ProjectileSkin for BombSkin {
    fn shapes(&self, projectile: &Projectile) -> Vec<Shape> {
        let r = projectile.radius;
        let c = projectile.pos;
        vec![
            Shape::Circle {
                center: c,
                radius: r,
                color: rgb(0x34495e),
            },
            Shape::Line {
                from: c + Vec2::new(r * 0.7, -r * 0.7),
                to: c + Vec2::new(r * 1.2, -r * 1.2),
                width: 2.0,
                color: rgb(0xf1c40f),
            },
        ]
    }
}

impl ProjectileSkin for WatermelonSkin {
    fn shapes(&self, projectile: &Projectile) -> Vec<Shape> {
        let r = projectile.radius;
        let c = projectile.pos;
        let seed = |offset: Vec2| Shape::Rect {
            min: c + offset,
            size: Vec2::splat(2.0),
            color: rgb(0x000000),
        };
        vec![
            Shape::Circle {
                center: c,
                radius: r,
                color: rgb(0x2ecc71),
            },
            Shape::Circle {
                center: c,
                radius: r * 0.7,
                color: rgb(0xe74c3c),
            },
            seed(Vec2::new(-r * 0.3, -r * 0.3)),
            seed(Vec2::new(r * 0.3, -r * 0.3)),
            seed(Vec2::new(0.0, r * 0.3)),
        ]
    }
}

/// Skin registered for a projectile kind
pub fn skin_for(kind: ProjectileKind) -> &'static dyn ProjectileSkin {
    match kind {
        ProjectileKind::Arrow => &ArrowSkin,
        ProjectileKind::Bomb => &BombSkin,
        ProjectileKind::Watermelon => &WatermelonSkin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projectile(kind: ProjectileKind) -> Projectile {
        Projectile::new(kind, Vec2::new(100.0, 100.0), Vec2::new(3.0, 0.0), 50.0, 1.0)
    }

    #[test]
    fn test_every_kind_has_a_skin() {
        for kind in ProjectileKind::ALL {
            assert!(!skin_for(kind).shapes(&projectile(kind)).is_empty());
        }
    }

    #[test]
    fn test_arrow_points_along_velocity() {
        let p = projectile(ProjectileKind::Arrow);
        let shapes = ArrowSkin.shapes(&p);
        let Shape::Polygon { points, .. } = &shapes[1] else {
            panic!("arrow head should be a polygon");
        };
        // Tip is ahead of the center in the direction of travel
        assert!((points[0] - Vec2::new(107.5, 100.0)).length() < 1e-4);
    }

    #[test]
    fn test_bomb_uses_projectile_radius() {
        let p = projectile(ProjectileKind::Bomb);
        let shapes = BombSkin.shapes(&p);
        assert!(matches!(shapes[0], Shape::Circle { radius, .. } if radius == 8.0));
    }

    #[test]
    fn test_watermelon_layers() {
        let p = projectile(ProjectileKind::Watermelon);
        let shapes = WatermelonSkin.shapes(&p);
        assert_eq!(shapes.len(), 5);
        assert!(matches!(shapes[1], Shape::Circle { radius, .. } if (radius - 4.9).abs() < 1e-5));
    }
}
