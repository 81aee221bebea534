//! Per-frame simulation tick
//!
//! One tick per animation frame. Host commands and pointer events gathered
//! since the previous frame are applied first, then the fixed order runs:
//! knockback, ballistics, derived UI state. Drawing happens afterwards,
//! outside the simulation.

use glam::Vec2;

use super::state::Match;
use crate::hud::HudState;
use crate::settings::MatchSettings;

/// A pointer event in playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Down { pos: Vec2, over_control: bool },
    Move { pos: Vec2 },
    Up { pos: Vec2 },
}

/// Input gathered for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer events in arrival order
    pub pointer: Vec<PointerAction>,
    /// Restart button
    pub restart: bool,
    /// Settings inputs changed
    pub settings: Option<MatchSettings>,
    /// Playfield resized (width, height)
    pub resize: Option<(f32, f32)>,
}

impl TickInput {
    /// Clear one-shot inputs after processing
    pub fn clear(&mut self) {
        self.pointer.clear();
        self.restart = false;
        self.settings = None;
        self.resize = None;
    }
}

/// Advance the match by one frame
pub fn tick(state: &mut Match, input: &TickInput) {
    // Lifecycle commands rebuild the match before anything else runs
    if let Some((width, height)) = input.resize {
        state.resize(width, height);
    }
    if let Some(settings) = input.settings {
        state.apply_settings(settings);
    }
    if input.restart {
        log::info!("Restarting match");
        state.restart();
    }

    for action in &input.pointer {
        match *action {
            PointerAction::Down { pos, over_control } => state.pointer_down(pos, over_control),
            PointerAction::Move { pos } => state.pointer_move(pos),
            PointerAction::Up { pos } => state.pointer_up(pos),
        }
    }

    state.time_ticks += 1;

    // 1. Knockback animations, then the gated turn hand-over
    for player in &mut state.players {
        player.update_knockback();
    }
    state.try_advance_turn();

    // 2. Ballistics
    state.step_ballistics();

    // 3. Derived UI state
    state.hud = HudState::compute(state);
}
