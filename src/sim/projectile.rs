//! Projectile record and per-tick ballistics
//!
//! A projectile only carries physics data and a kind tag. How each kind looks
//! is the renderer's business (see `renderer::skins`).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{BodyPart, body_part_hit};
use super::player::BodyAnchors;
use super::terrain::Terrain;
use crate::consts::*;

/// Visual kind of projectile. Damage does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    Arrow,
    Bomb,
    Watermelon,
}

impl ProjectileKind {
    pub const ALL: [ProjectileKind; 3] = [
        ProjectileKind::Arrow,
        ProjectileKind::Bomb,
        ProjectileKind::Watermelon,
    ];

    /// Collision radius at scale 1.0
    pub fn base_radius(self) -> f32 {
        match self {
            ProjectileKind::Arrow => 5.0,
            ProjectileKind::Bomb => 8.0,
            ProjectileKind::Watermelon => 7.0,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Power the shot was fired with (drives knockback)
    pub fired_power: f32,
    pub active: bool,
}

impl Projectile {
    pub fn new(kind: ProjectileKind, pos: Vec2, vel: Vec2, fired_power: f32, scale: f32) -> Self {
        Self {
            kind,
            pos,
            vel,
            radius: kind.base_radius() * scale,
            fired_power,
            active: true,
        }
    }

    /// Explicit Euler step: position first, then velocity
    pub fn integrate(&mut self, wind: f32) {
        self.pos += self.vel;
        self.vel.y += GRAVITY;
        self.vel.x += wind;
    }
}

/// Result of advancing a projectile by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightOutcome {
    /// Still flying
    InFlight,
    /// Landed on the terrain (miss)
    TerrainImpact { point: Vec2 },
    /// Struck the opponent
    Hit { part: BodyPart, point: Vec2 },
    /// Left the playfield without hitting anything (miss)
    OutOfBounds,
}

/// Advance a projectile one tick and resolve collisions.
///
/// Checks run in a fixed order: terrain, then the opponent's body, then the
/// playfield bounds. Any non-`InFlight` outcome deactivates the projectile.
pub fn step_projectile(
    projectile: &mut Projectile,
    wind: f32,
    terrain: &Terrain,
    opponent: &BodyAnchors,
    playfield: Vec2,
) -> FlightOutcome {
    if !projectile.active {
        return FlightOutcome::InFlight;
    }

    projectile.integrate(wind);

    // Terrain
    let ground = terrain.height_at(projectile.pos.x);
    if projectile.pos.y + projectile.radius >= ground {
        projectile.pos.y = ground - projectile.radius;
        projectile.active = false;
        return FlightOutcome::TerrainImpact {
            point: projectile.pos,
        };
    }

    // Opponent body parts
    if let Some(part) = body_part_hit(projectile.pos, projectile.radius, opponent) {
        projectile.active = false;
        return FlightOutcome::Hit {
            part,
            point: projectile.pos,
        };
    }

    // Bounds: sides and bottom only, shots may arc above the top edge
    let margin = OUT_OF_BOUNDS_MARGIN.max(projectile.radius * 2.0);
    let p = projectile.pos;
    if p.x < -margin || p.x > playfield.x + margin || p.y > playfield.y + margin {
        projectile.active = false;
        return FlightOutcome::OutOfBounds;
    }

    FlightOutcome::InFlight
}
