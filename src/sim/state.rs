//! Match state and turn bookkeeping
//!
//! `Match` owns everything that changes during a duel: terrain, both players,
//! the (single) projectile, wind, turn and phase. It is rebuilt wholesale on
//! restart, settings change and resize.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aim::{AimController, Release};
use super::collision::BodyPart;
use super::player::{Player, PlayerId};
use super::projectile::{FlightOutcome, Projectile, ProjectileKind, step_projectile};
use super::terrain::{Terrain, TerrainParams};
use crate::consts::*;
use crate::hud::HudState;
use crate::launch_velocity;
use crate::settings::MatchSettings;

/// Current phase of the duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Current player may aim and fire
    Aiming,
    /// A projectile is in flight
    ProjectileActive,
    /// Shot resolved, waiting for knockback animations before the next turn
    ResolvingKnockback,
    /// A player reached zero health
    MatchOver,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    Fired {
        by: PlayerId,
        kind: ProjectileKind,
        power: f32,
    },
    TerrainImpact {
        point: Vec2,
    },
    Hit {
        target: PlayerId,
        part: BodyPart,
        damage: u32,
    },
    OutOfBounds,
    TurnAdvanced {
        to: PlayerId,
        wind: f32,
    },
    MatchOver {
        winner: PlayerId,
    },
}

/// Why a fire attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireRejection {
    ProjectileInFlight,
    MatchOver,
    KnockbackInProgress,
}

/// A complete duel
#[derive(Debug, Clone)]
pub struct Match {
    /// Playfield size
    pub width: f32,
    pub height: f32,
    pub settings: MatchSettings,
    pub terrain: Terrain,
    pub players: [Player; 2],
    /// Whose turn it is
    pub current: PlayerId,
    /// At most one projectile exists at a time
    pub projectile: Option<Projectile>,
    /// Horizontal acceleration per tick, rolled each turn
    pub wind: f32,
    pub phase: GamePhase,
    pub winner: Option<PlayerId>,
    pub aim: AimController,
    /// Derived UI state, refreshed every tick
    pub hud: HudState,
    /// Simulation tick counter
    pub time_ticks: u64,
    events: Vec<MatchEvent>,
    rng: Pcg32,
}

impl Match {
    /// Start a match with freshly generated terrain
    pub fn new(width: f32, height: f32, settings: MatchSettings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let settings = settings.sanitized();
        let terrain = Terrain::generate(
            &TerrainParams::for_playfield(width, height, settings.hilliness),
            &mut rng,
        );
        Self::build(width, height, settings, terrain, rng)
    }

    /// Start a match on the given terrain (used for scripted scenarios)
    pub fn with_terrain(
        width: f32,
        height: f32,
        settings: MatchSettings,
        terrain: Terrain,
        seed: u64,
    ) -> Self {
        Self::build(
            width,
            height,
            settings.sanitized(),
            terrain,
            Pcg32::seed_from_u64(seed),
        )
    }

    fn build(
        width: f32,
        height: f32,
        settings: MatchSettings,
        terrain: Terrain,
        rng: Pcg32,
    ) -> Self {
        let center = width / 2.0;
        let half_gap = settings.separation(width) / 2.0;
        let mut state = Self {
            width,
            height,
            settings,
            terrain,
            players: [
                Player::new(PlayerId::One, center - half_gap),
                Player::new(PlayerId::Two, center + half_gap),
            ],
            current: PlayerId::One,
            projectile: None,
            wind: 0.0,
            phase: GamePhase::Aiming,
            winner: None,
            aim: AimController::default(),
            hud: HudState::default(),
            time_ticks: 0,
            events: Vec::new(),
            rng,
        };
        state.roll_wind();
        state.hud = HudState::compute(&state);
        log::info!(
            "Match ready: {}x{}, separation {}%, hilliness {}, wind {:.3}",
            width,
            height,
            settings.player_distance_percent,
            settings.hilliness,
            state.wind
        );
        state
    }

    /// Throw away all in-flight state and start over with the current settings.
    /// The RNG stream continues so a restart gets new terrain.
    pub fn restart(&mut self) {
        let mut rng = self.rng.clone();
        let terrain = Terrain::generate(
            &TerrainParams::for_playfield(self.width, self.height, self.settings.hilliness),
            &mut rng,
        );
        *self = Self::build(self.width, self.height, self.settings, terrain, rng);
    }

    /// Apply new setup values (clamped) and restart
    pub fn apply_settings(&mut self, settings: MatchSettings) {
        self.settings = settings.sanitized();
        log::info!(
            "Settings applied: separation {}%, hilliness {}",
            self.settings.player_distance_percent,
            self.settings.hilliness
        );
        self.restart();
    }

    /// Playfield changed size; positions and terrain depend on it so restart
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
            log::warn!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.width = width;
        self.height = height;
        self.restart();
    }

    /// Size multiplier so proportions follow the player separation
    pub fn scale(&self) -> f32 {
        (self.settings.separation(self.width) / REFERENCE_SEPARATION).clamp(MIN_SCALE, MAX_SCALE)
    }

    pub fn playfield(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::MatchOver
    }

    pub fn any_knocking_back(&self) -> bool {
        self.players.iter().any(Player::is_knocking_back)
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    fn roll_wind(&mut self) {
        self.wind = self.rng.random_range(-WIND_MAX_FORCE..=WIND_MAX_FORCE);
    }

    /// Whether the current player may fire right now
    pub fn can_fire(&self) -> Result<(), FireRejection> {
        if self.is_over() {
            Err(FireRejection::MatchOver)
        } else if self.projectile.is_some() {
            Err(FireRejection::ProjectileInFlight)
        } else if self.any_knocking_back() {
            Err(FireRejection::KnockbackInProgress)
        } else {
            Ok(())
        }
    }

    /// Launch a projectile from the current player's weapon using their aim
    pub fn fire(&mut self) -> Result<(), FireRejection> {
        if let Err(reason) = self.can_fire() {
            log::warn!("Fire rejected: {:?}", reason);
            return Err(reason);
        }

        let scale = self.scale();
        let shooter = self.current_player();
        let origin = shooter.cannon_origin(&self.terrain, scale);
        let aim = shooter.aim;
        let kind = ProjectileKind::random(&mut self.rng);

        self.projectile = Some(Projectile::new(
            kind,
            origin,
            launch_velocity(aim.angle, aim.power),
            aim.power,
            scale,
        ));
        self.phase = GamePhase::ProjectileActive;
        log::debug!(
            "{} fires {:?}: angle {:.2} rad, power {}",
            self.current.label(),
            kind,
            aim.angle,
            aim.power
        );
        self.events.push(MatchEvent::Fired {
            by: self.current,
            kind,
            power: aim.power,
        });
        Ok(())
    }

    /// Pointer went down (playfield coordinates)
    pub fn pointer_down(&mut self, pos: Vec2, over_control: bool) {
        let anchor = self
            .current_player()
            .cannon_origin(&self.terrain, self.scale());
        self.aim.press(self.current, pos, anchor, over_control);
    }

    /// Drop a drag that was started from a player whose turn has since ended
    fn drop_stale_drag(&mut self) -> bool {
        match self.aim.owner() {
            Some(owner) if owner != self.current => {
                log::debug!("Dropping drag started by {}", owner.label());
                self.aim.cancel();
                true
            }
            _ => false,
        }
    }

    /// Pointer moved; updates the current player's aim while dragging
    pub fn pointer_move(&mut self, pos: Vec2) {
        if self.drop_stale_drag() {
            return;
        }
        if let Some(aim) = self.aim.drag_to(pos) {
            self.player_mut(self.current).aim = aim;
        }
    }

    /// Pointer released: fire if the drag was long enough and firing is allowed,
    /// otherwise put the aim back to neutral
    pub fn pointer_up(&mut self, pos: Vec2) {
        if self.drop_stale_drag() {
            return;
        }
        let current = self.current;
        match self.aim.release(pos) {
            Release::Ignored => {}
            Release::Fire(aim) if self.can_fire().is_ok() => {
                self.player_mut(current).aim = aim;
                // can_fire was just checked
                let _ = self.fire();
            }
            Release::Fire(_) | Release::Cancel => self.player_mut(current).reset_aim(),
        }
    }

    /// Advance the projectile one tick and resolve its outcome
    pub(crate) fn step_ballistics(&mut self) {
        let scale = self.scale();
        let Some(projectile) = self.projectile.as_mut() else {
            return;
        };
        let target_id = self.current.opponent();
        let target = self.players[target_id.index()].anchors(&self.terrain, scale);
        let playfield = Vec2::new(self.width, self.height);

        match step_projectile(projectile, self.wind, &self.terrain, &target, playfield) {
            FlightOutcome::InFlight => {}
            FlightOutcome::TerrainImpact { point } => {
                log::debug!("Terrain impact at ({:.1}, {:.1})", point.x, point.y);
                self.events.push(MatchEvent::TerrainImpact { point });
                self.end_turn();
            }
            FlightOutcome::OutOfBounds => {
                log::debug!("Projectile left the playfield");
                self.events.push(MatchEvent::OutOfBounds);
                self.end_turn();
            }
            FlightOutcome::Hit { part, .. } => {
                let power = projectile.fired_power;
                let damage = part.damage();
                let width = self.width;
                let victim = self.player_mut(target_id);
                victim.take_damage(damage);
                victim.apply_knockback(power, width, scale);
                log::info!(
                    "{} hit in the {:?} for {} ({} left)",
                    target_id.label(),
                    part,
                    damage,
                    victim.health
                );
                self.events.push(MatchEvent::Hit {
                    target: target_id,
                    part,
                    damage,
                });
                self.check_game_over();
                self.end_turn();
            }
        }
    }

    /// Declare a winner once either player is out of health
    pub fn check_game_over(&mut self) {
        let winner = if !self.players[0].is_alive() {
            Some(PlayerId::Two)
        } else if !self.players[1].is_alive() {
            Some(PlayerId::One)
        } else {
            None
        };

        if let Some(winner) = winner {
            self.phase = GamePhase::MatchOver;
            self.winner = Some(winner);
            log::info!("{} wins!", winner.label());
            self.events.push(MatchEvent::MatchOver { winner });
        }
    }

    /// The shot is resolved; the turn passes once no one is being knocked back
    pub fn end_turn(&mut self) {
        self.projectile = None;
        if self.is_over() {
            return;
        }
        if self.any_knocking_back() {
            self.phase = GamePhase::ResolvingKnockback;
        } else {
            self.advance_turn();
        }
    }

    /// Polled every tick while resolving knockback
    pub(crate) fn try_advance_turn(&mut self) {
        if self.phase == GamePhase::ResolvingKnockback && !self.any_knocking_back() {
            self.advance_turn();
        }
    }

    fn advance_turn(&mut self) {
        self.current = PlayerId::from_index(self.current.index() + 1);
        self.roll_wind();
        self.phase = GamePhase::Aiming;
        log::info!("{}'s turn, wind {:.3}", self.current.label(), self.wind);
        self.events.push(MatchEvent::TurnAdvanced {
            to: self.current,
            wind: self.wind,
        });
    }
}
