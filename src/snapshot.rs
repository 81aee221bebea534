//! Read-only frame snapshot for the drawing layer
//!
//! Serialized to JSON at the wasm boundary. Everything here is derived from
//! the match at capture time, so it can never go stale.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::hud::HudState;
use crate::renderer::{Shape, skin_for};
use crate::sim::player::{Aim, BodyAnchors, PlayerId};
use crate::sim::projectile::ProjectileKind;
use crate::sim::state::{GamePhase, Match};
use crate::sim::trajectory;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub facing: f32,
    pub health: u32,
    pub anchors: BodyAnchors,
    pub cannon_origin: Vec2,
    pub aim: Aim,
    pub knocking_back: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Skin for this kind, ready to paint
    pub shapes: Vec<Shape>,
}

/// Pointer drag in progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AimingView {
    pub anchor: Vec2,
    pub pointer: Vec2,
    pub angle: f32,
    pub power: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub width: f32,
    pub height: f32,
    pub terrain: Vec<Vec2>,
    pub players: Vec<PlayerView>,
    pub projectile: Option<ProjectileView>,
    pub aiming: Option<AimingView>,
    pub trajectory: Vec<Vec2>,
    pub current: PlayerId,
    pub wind: f32,
    pub phase: GamePhase,
    pub scale: f32,
    pub hud: HudState,
}

impl FrameSnapshot {
    pub fn capture(state: &Match) -> Self {
        let scale = state.scale();
        let players = state
            .players
            .iter()
            .map(|p| PlayerView {
                id: p.id,
                facing: p.facing(),
                health: p.health,
                anchors: p.anchors(&state.terrain, scale),
                cannon_origin: p.cannon_origin(&state.terrain, scale),
                aim: p.aim,
                knocking_back: p.is_knocking_back(),
            })
            .collect();

        let projectile = state.projectile.as_ref().map(|p| ProjectileView {
            kind: p.kind,
            pos: p.pos,
            vel: p.vel,
            radius: p.radius,
            shapes: skin_for(p.kind).shapes(p),
        });

        let current_aim = state.current_player().aim;
        let aiming = match (state.aim.owner(), state.aim.anchor(), state.aim.pointer()) {
            (Some(owner), Some(anchor), Some(pointer)) if owner == state.current => {
                Some(AimingView {
                    anchor,
                    pointer,
                    angle: current_aim.angle,
                    power: current_aim.power,
                })
            }
            _ => None,
        };

        Self {
            width: state.width,
            height: state.height,
            terrain: state.terrain.samples().to_vec(),
            players,
            projectile,
            aiming,
            trajectory: trajectory::preview(state),
            current: state.current,
            wind: state.wind,
            phase: state.phase,
            scale,
            hud: state.hud.clone(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::error!("Snapshot serialization failed: {}", e);
            String::from("{}")
        })
    }
}
