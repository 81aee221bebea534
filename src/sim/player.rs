//! Combatant state: position, health, aim and knockback animation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::terrain::Terrain;
use crate::consts::*;
use crate::lerp;

/// Which side a player is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Index into `Match::players`
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            PlayerId::One
        } else {
            PlayerId::Two
        }
    }

    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Player one faces right, player two faces left
    pub fn facing(self) -> f32 {
        match self {
            PlayerId::One => 1.0,
            PlayerId::Two => -1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerId::One => "Player 1 (Red)",
            PlayerId::Two => "Player 2 (Blue)",
        }
    }
}

/// Current aim, angle is absolute (screen space, y down), not relative to facing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aim {
    /// Radians
    pub angle: f32,
    /// 0-100
    pub power: f32,
}

impl Aim {
    /// Forward along the facing direction with zero power
    pub fn neutral(facing: f32) -> Self {
        Self {
            angle: if facing >= 0.0 { 0.0 } else { std::f32::consts::PI },
            power: 0.0,
        }
    }
}

/// Knockback animation state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Knockback {
    #[default]
    Idle,
    Active {
        start_x: f32,
        target_x: f32,
        remaining: u32,
    },
}

/// Vertical anchor points of a standing player, derived from the terrain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyAnchors {
    pub x: f32,
    /// Terrain surface under the player
    pub base_y: f32,
    /// Center of the head circle
    pub head_y: f32,
    /// Middle of the torso
    pub body_y: f32,
    /// Middle of the legs
    pub legs_y: f32,
    /// Hip line where legs meet the torso
    pub legs_top_y: f32,
    pub head_radius: f32,
    pub leg_length: f32,
}

impl BodyAnchors {
    /// Compute anchors for a player standing at `x`
    pub fn at(terrain: &Terrain, x: f32, scale: f32) -> Self {
        let head_radius = HEAD_RADIUS * scale;
        let body_height = BODY_HEIGHT * scale;
        let leg_length = LEG_LENGTH * scale;
        let clearance = FOOT_CLEARANCE * scale;
        let base_y = terrain.height_at(x);

        Self {
            x,
            base_y,
            head_y: base_y - (leg_length + body_height + head_radius + clearance),
            body_y: base_y - (leg_length + body_height / 2.0 + clearance),
            legs_y: base_y - (leg_length / 2.0 + clearance),
            legs_top_y: base_y - (leg_length + clearance),
            head_radius,
            leg_length,
        }
    }

    pub fn head_center(&self) -> Vec2 {
        Vec2::new(self.x, self.head_y)
    }

    /// Top of the head
    pub fn head_top_y(&self) -> f32 {
        self.head_y - self.head_radius
    }

    /// Midpoints of the left and right legs
    pub fn leg_points(&self) -> [Vec2; 2] {
        let dx = self.head_radius / 2.0;
        [
            Vec2::new(self.x - dx, self.legs_y),
            Vec2::new(self.x + dx, self.legs_y),
        ]
    }
}

/// A combatant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub x: f32,
    pub health: u32,
    pub aim: Aim,
    pub knockback: Knockback,
}

impl Player {
    pub fn new(id: PlayerId, x: f32) -> Self {
        Self {
            id,
            x,
            health: MAX_HEALTH,
            aim: Aim::neutral(id.facing()),
            knockback: Knockback::Idle,
        }
    }

    pub fn facing(&self) -> f32 {
        self.id.facing()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_knocking_back(&self) -> bool {
        matches!(self.knockback, Knockback::Active { .. })
    }

    pub fn anchors(&self, terrain: &Terrain, scale: f32) -> BodyAnchors {
        BodyAnchors::at(terrain, self.x, scale)
    }

    /// Weapon origin: slightly forward of center, half a head below the head center.
    /// Used as the aim anchor and as the projectile spawn point.
    pub fn cannon_origin(&self, terrain: &Terrain, scale: f32) -> Vec2 {
        let a = self.anchors(terrain, scale);
        Vec2::new(
            self.x + self.facing() * a.head_radius * 0.5,
            a.head_y + a.head_radius / 2.0,
        )
    }

    pub fn reset_aim(&mut self) {
        self.aim = Aim::neutral(self.facing());
    }

    /// Subtract health, never going below zero
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount).min(MAX_HEALTH);
    }

    /// Start a knockback animation pushing the player away from the shooter
    pub fn apply_knockback(&mut self, fired_power: f32, playfield_width: f32, scale: f32) {
        let direction = -self.facing();
        let distance = fired_power.max(0.0) * KNOCKBACK_MULTIPLIER * scale;

        let half_width = HEAD_RADIUS * scale;
        let max_x = (playfield_width - half_width).max(half_width);
        let target_x = (self.x + direction * distance).clamp(half_width, max_x);

        self.knockback = Knockback::Active {
            start_x: self.x,
            target_x,
            remaining: KNOCKBACK_FRAMES,
        };
    }

    /// Advance the knockback animation by one frame.
    ///
    /// After exactly `KNOCKBACK_FRAMES` calls `x` equals the target.
    pub fn update_knockback(&mut self) {
        let Knockback::Active {
            start_x,
            target_x,
            remaining,
        } = self.knockback
        else {
            return;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.x = target_x;
            self.knockback = Knockback::Idle;
        } else {
            let progress = 1.0 - remaining as f32 / KNOCKBACK_FRAMES as f32;
            self.x = lerp(start_x, target_x, progress);
            self.knockback = Knockback::Active {
                start_x,
                target_x,
                remaining,
            };
        }
    }
}
