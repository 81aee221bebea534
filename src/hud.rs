//! Derived HUD state
//!
//! Recomputed from the match every tick; never stored anywhere else.

use serde::{Deserialize, Serialize};

use crate::sim::player::PlayerId;
use crate::sim::state::Match;

/// Health bar color band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HealthBand {
    #[default]
    Healthy,
    Wounded,
    Critical,
}

impl HealthBand {
    pub fn for_health(health: u32) -> Self {
        if health > 50 {
            HealthBand::Healthy
        } else if health > 20 {
            HealthBand::Wounded
        } else {
            HealthBand::Critical
        }
    }
}

/// Everything the UI chrome needs besides raw positions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudState {
    /// A shot may be fired right now
    pub fire_enabled: bool,
    /// Setup inputs are usable (everything but the game-over screen)
    pub settings_enabled: bool,
    pub turn_label: String,
    pub wind_label: String,
    pub health_bands: [HealthBand; 2],
    pub winner_message: Option<String>,
}

impl HudState {
    pub fn compute(state: &Match) -> Self {
        Self {
            fire_enabled: state.can_fire().is_ok(),
            settings_enabled: !state.is_over(),
            turn_label: format!("{}'s Turn", state.current.label()),
            wind_label: wind_label(state.wind),
            health_bands: [
                HealthBand::for_health(state.player(PlayerId::One).health),
                HealthBand::for_health(state.player(PlayerId::Two).health),
            ],
            winner_message: state.winner.map(|w| format!("{} Wins!", w.label())),
        }
    }
}

/// "Wind: 0.03 →" style label, arrow shows direction
pub fn wind_label(wind: f32) -> String {
    let arrow = if wind > 0.0 {
        " →"
    } else if wind < 0.0 {
        " ←"
    } else {
        ""
    };
    format!("Wind: {:.2}{}", wind, arrow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MatchSettings;
    use crate::sim::terrain::Terrain;

    #[test]
    fn test_health_bands() {
        assert_eq!(HealthBand::for_health(100), HealthBand::Healthy);
        assert_eq!(HealthBand::for_health(51), HealthBand::Healthy);
        assert_eq!(HealthBand::for_health(50), HealthBand::Wounded);
        assert_eq!(HealthBand::for_health(21), HealthBand::Wounded);
        assert_eq!(HealthBand::for_health(20), HealthBand::Critical);
        assert_eq!(HealthBand::for_health(0), HealthBand::Critical);
    }

    #[test]
    fn test_wind_label() {
        assert_eq!(wind_label(0.031), "Wind: 0.03 →");
        assert_eq!(wind_label(-0.02), "Wind: -0.02 ←");
        assert_eq!(wind_label(0.0), "Wind: 0.00");
    }

    #[test]
    fn test_compute() {
        let mut m = Match::with_terrain(
            800.0,
            600.0,
            MatchSettings::default(),
            Terrain::flat(800.0, 500.0),
            9,
        );
        let hud = HudState::compute(&m);
        assert!(hud.fire_enabled);
        assert!(hud.settings_enabled);
        assert_eq!(hud.turn_label, "Player 1 (Red)'s Turn");
        assert_eq!(hud.winner_message, None);

        m.players[0].take_damage(100);
        m.check_game_over();
        let hud = HudState::compute(&m);
        assert!(!hud.fire_enabled);
        assert!(!hud.settings_enabled);
        assert_eq!(hud.health_bands[0], HealthBand::Critical);
        assert_eq!(hud.winner_message.as_deref(), Some("Player 2 (Blue) Wins!"));
    }
}
