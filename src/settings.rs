//! Match setup settings
//!
//! Changed from the settings inputs; any change regenerates terrain and
//! repositions both players. Invalid values are clamped or fall back to the
//! defaults, never rejected.

use serde::{Deserialize, Serialize};

/// Player separation bounds (percent of playfield width)
pub const DISTANCE_MIN_PERCENT: f32 = 40.0;
pub const DISTANCE_MAX_PERCENT: f32 = 80.0;
pub const DISTANCE_DEFAULT_PERCENT: f32 = 70.0;

/// Hilliness bounds (max height change per terrain step)
pub const HILLINESS_MIN: f32 = 0.0;
pub const HILLINESS_MAX: f32 = 40.0;
pub const HILLINESS_DEFAULT: f32 = 15.0;

/// Match setup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Distance between the players as a percentage of playfield width
    pub player_distance_percent: f32,
    /// Maximum terrain height change per segment
    pub hilliness: f32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            player_distance_percent: DISTANCE_DEFAULT_PERCENT,
            hilliness: HILLINESS_DEFAULT,
        }
    }
}

impl MatchSettings {
    /// Parse raw input values (as typed into the settings inputs).
    ///
    /// Non-numeric or non-finite values fall back to the default for that
    /// field; numeric values are clamped into range.
    pub fn from_raw(distance: &str, hilliness: &str) -> Self {
        let defaults = Self::default();
        let parse = |raw: &str, fallback: f32, name: &str| match raw.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                log::warn!("Invalid {} setting {:?}, using {}", name, raw, fallback);
                fallback
            }
        };

        Self {
            player_distance_percent: parse(
                distance,
                defaults.player_distance_percent,
                "distance",
            ),
            hilliness: parse(hilliness, defaults.hilliness, "hilliness"),
        }
        .sanitized()
    }

    /// Clamp both fields into their documented ranges
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let distance = if self.player_distance_percent.is_finite() {
            self.player_distance_percent
                .clamp(DISTANCE_MIN_PERCENT, DISTANCE_MAX_PERCENT)
        } else {
            defaults.player_distance_percent
        };
        let hilliness = if self.hilliness.is_finite() {
            self.hilliness.clamp(HILLINESS_MIN, HILLINESS_MAX)
        } else {
            defaults.hilliness
        };
        Self {
            player_distance_percent: distance,
            hilliness,
        }
    }

    /// Player separation in playfield pixels
    pub fn separation(&self, playfield_width: f32) -> f32 {
        playfield_width * (self.player_distance_percent / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = MatchSettings::default();
        assert_eq!(s.player_distance_percent, 70.0);
        assert_eq!(s.hilliness, 15.0);
    }

    #[test]
    fn test_from_raw_fallback() {
        let s = MatchSettings::from_raw("abc", "");
        assert_eq!(s, MatchSettings::default());

        let s = MatchSettings::from_raw("NaN", "inf");
        assert_eq!(s, MatchSettings::default());
    }

    #[test]
    fn test_from_raw_clamps() {
        let s = MatchSettings::from_raw("5", "-3");
        assert_eq!(s.player_distance_percent, DISTANCE_MIN_PERCENT);
        assert_eq!(s.hilliness, HILLINESS_MIN);

        let s = MatchSettings::from_raw(" 95 ", "100");
        assert_eq!(s.player_distance_percent, DISTANCE_MAX_PERCENT);
        assert_eq!(s.hilliness, HILLINESS_MAX);

        let s = MatchSettings::from_raw("55", "22.5");
        assert_eq!(s.player_distance_percent, 55.0);
        assert_eq!(s.hilliness, 22.5);
    }

    #[test]
    fn test_separation() {
        let s = MatchSettings::default();
        assert!((s.separation(800.0) - 560.0).abs() < 1e-3);
    }
}
