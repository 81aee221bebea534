//! Aiming guide: the first part of the current player's flight path

use glam::Vec2;

use super::projectile::{Projectile, ProjectileKind};
use super::state::Match;
use crate::consts::*;
use crate::launch_velocity;

/// Predicted path of the current player's shot with their current aim.
///
/// Only the first third of the distance to the opponent is shown. Empty when
/// the current player cannot fire.
pub fn preview(state: &Match) -> Vec<Vec2> {
    if state.can_fire().is_err() {
        return Vec::new();
    }

    let shooter = state.current_player();
    let origin = shooter.cannon_origin(&state.terrain, state.scale());
    let max_travel =
        (state.players[1].x - state.players[0].x).abs() * TRAJECTORY_PREVIEW_FRACTION;

    // Radius does not matter for the guide, it stops at the surface
    let mut probe = Projectile::new(
        ProjectileKind::Arrow,
        origin,
        launch_velocity(shooter.aim.angle, shooter.aim.power),
        shooter.aim.power,
        0.0,
    );

    let mut points = Vec::with_capacity(64);
    points.push(origin);
    for _ in 0..TRAJECTORY_MAX_STEPS {
        probe.integrate(state.wind);
        let p = probe.pos;
        // The stopping point is part of the guide
        points.push(p);
        if (p.x - origin.x).abs() > max_travel
            || p.y >= state.terrain.height_at(p.x)
            || p.x < -OUT_OF_BOUNDS_MARGIN
            || p.x > state.width + OUT_OF_BOUNDS_MARGIN
        {
            break;
        }
    }
    points
}
