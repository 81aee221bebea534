//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod aim;
pub mod collision;
pub mod player;
pub mod projectile;
pub mod state;
pub mod terrain;
pub mod tick;
pub mod trajectory;

pub use aim::{AimController, Release, aim_from_drag};
pub use collision::{BodyPart, body_part_hit};
pub use player::{Aim, BodyAnchors, Knockback, Player, PlayerId};
pub use projectile::{FlightOutcome, Projectile, ProjectileKind, step_projectile};
pub use state::{FireRejection, GamePhase, Match, MatchEvent};
pub use terrain::{Terrain, TerrainParams};
pub use tick::{PointerAction, TickInput, tick};
pub use trajectory::preview;
