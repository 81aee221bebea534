//! Artillery Duel - A two-player slingshot artillery game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, ballistics, turns, aiming)
//! - `renderer`: Backend-agnostic draw primitives for projectile skins
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Match setup (player separation, hilliness)
//! - `hud`/`snapshot`: Read-only views handed to the drawing layer

pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use hud::{HealthBand, HudState};
pub use settings::MatchSettings;
pub use snapshot::FrameSnapshot;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied every tick (px/tick²)
    pub const GRAVITY: f32 = 0.2;
    /// Launch speed per power point
    pub const POWER_MULTIPLIER: f32 = 0.3;
    /// Wind is rolled uniformly in [-WIND_MAX_FORCE, WIND_MAX_FORCE] each turn
    pub const WIND_MAX_FORCE: f32 = 0.05;

    pub const MAX_HEALTH: u32 = 100;
    pub const MAX_POWER: f32 = 100.0;

    /// Player body proportions (at scale 1.0)
    pub const HEAD_RADIUS: f32 = 8.0;
    pub const BODY_HEIGHT: f32 = 25.0;
    pub const LEG_LENGTH: f32 = 15.0;
    /// Gap between the feet and the terrain surface
    pub const FOOT_CLEARANCE: f32 = 5.0;

    /// Damage per body part (independent of projectile kind)
    pub const DAMAGE_HEAD: u32 = 40;
    pub const DAMAGE_BODY: u32 = 25;
    pub const DAMAGE_LEGS: u32 = 15;

    /// Knockback distance per point of fired power
    pub const KNOCKBACK_MULTIPLIER: f32 = 0.8;
    /// Knockback animation length in ticks
    pub const KNOCKBACK_FRAMES: u32 = 20;

    /// Horizontal distance between terrain samples
    pub const TERRAIN_SEGMENT_WIDTH: f32 = 20.0;
    /// Terrain starts this far above the bottom edge
    pub const TERRAIN_BASE_OFFSET: f32 = 30.0;
    /// Terrain never rises above this fraction of the playfield height
    pub const TERRAIN_MIN_Y_FRACTION: f32 = 0.4;
    /// Terrain never sinks closer than this to the bottom edge
    pub const TERRAIN_BOTTOM_MARGIN: f32 = 10.0;

    /// Pointer distance that maps to full power
    pub const MAX_DRAG_DISTANCE: f32 = 150.0;
    /// Shorter drags are treated as taps and do not fire
    pub const MIN_FIRE_DRAG_DISTANCE: f32 = 10.0;

    /// Projectiles further than this outside the playfield are discarded
    pub const OUT_OF_BOUNDS_MARGIN: f32 = 100.0;

    /// Player separation (px) at which the scale factor is exactly 1
    pub const REFERENCE_SEPARATION: f32 = 560.0;
    pub const MIN_SCALE: f32 = 0.5;
    pub const MAX_SCALE: f32 = 1.5;

    /// Trajectory preview limits
    pub const TRAJECTORY_MAX_STEPS: usize = 500;
    pub const TRAJECTORY_PREVIEW_FRACTION: f32 = 1.0 / 3.0;
}

/// Linear interpolation between `start` and `end`
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start * (1.0 - t) + end * t
}

/// Convert an absolute aim angle and power into a launch velocity
#[inline]
pub fn launch_velocity(angle: f32, power: f32) -> glam::Vec2 {
    glam::Vec2::new(angle.cos(), angle.sin()) * power * consts::POWER_MULTIPLIER
}
