//! Game balance parameters
//!
//! Every constant the simulation reads lives in one immutable `Tuning` value
//! handed to `GameState` at construction. Missing JSON fields fall back to
//! the defaults in `crate::consts`.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Failure to load or validate a tuning file
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read tuning file: {e}"),
            Self::Parse(e) => write!(f, "failed to parse tuning JSON: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    /// Gap between the shooter's edge and the spawn point
    pub muzzle_offset: f32,
    pub damage_per_hit: i32,

    // === Players ===
    pub player_radius: f32,
    pub player_hp: i32,
    /// Spawn distance from center (local on -x, opponent on +x)
    pub spawn_offset: f32,
    pub recoil_impulse: f32,

    // === Heat ===
    pub heat_per_shot: f32,
    /// Seconds to drain a full bar after overheating
    pub heat_decay_rate: f32,
    /// Heat drained per second once idle
    pub idle_cooldown_rate: f32,
    /// Seconds without firing before the idle drain kicks in
    pub idle_cooldown_delay: f32,

    // === Arena / match ===
    pub arena_base_radius: f32,
    pub arena_min_radius: f32,
    pub arena_shrink_rate: f32,
    pub match_duration: f32,

    // === Opponent ===
    /// Probability of a shot attempt per frame
    pub opponent_fire_chance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            muzzle_offset: MUZZLE_OFFSET,
            damage_per_hit: DAMAGE_PER_HIT,

            player_radius: PLAYER_RADIUS,
            player_hp: PLAYER_HP,
            spawn_offset: SPAWN_OFFSET,
            recoil_impulse: RECOIL_IMPULSE,

            heat_per_shot: HEAT_PER_SHOT,
            heat_decay_rate: OVERHEAT_COOLDOWN,
            idle_cooldown_rate: IDLE_COOLDOWN_RATE,
            idle_cooldown_delay: IDLE_COOLDOWN_DELAY,

            arena_base_radius: ARENA_BASE_RADIUS,
            arena_min_radius: ARENA_MIN_RADIUS,
            arena_shrink_rate: ARENA_SHRINK_RATE,
            match_duration: MATCH_DURATION,

            opponent_fire_chance: OPPONENT_FIRE_CHANCE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, v: f32) -> Result<(), TuningError> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }
        fn non_negative(field: &'static str, v: f32) -> Result<(), TuningError> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a non-negative finite number",
                })
            }
        }

        positive("projectile_speed", self.projectile_speed)?;
        positive("projectile_radius", self.projectile_radius)?;
        non_negative("muzzle_offset", self.muzzle_offset)?;
        positive("player_radius", self.player_radius)?;
        non_negative("recoil_impulse", self.recoil_impulse)?;
        positive("heat_per_shot", self.heat_per_shot)?;
        positive("heat_decay_rate", self.heat_decay_rate)?;
        non_negative("idle_cooldown_rate", self.idle_cooldown_rate)?;
        non_negative("idle_cooldown_delay", self.idle_cooldown_delay)?;
        positive("arena_base_radius", self.arena_base_radius)?;
        positive("arena_min_radius", self.arena_min_radius)?;
        non_negative("arena_shrink_rate", self.arena_shrink_rate)?;
        positive("match_duration", self.match_duration)?;

        if self.damage_per_hit <= 0 {
            return Err(TuningError::Invalid {
                field: "damage_per_hit",
                reason: "must be at least 1",
            });
        }
        if self.player_hp <= 0 {
            return Err(TuningError::Invalid {
                field: "player_hp",
                reason: "must be at least 1",
            });
        }
        if self.arena_min_radius > self.arena_base_radius {
            return Err(TuningError::Invalid {
                field: "arena_min_radius",
                reason: "must not exceed arena_base_radius",
            });
        }
        if self.spawn_offset <= self.player_radius
            || self.spawn_offset + self.player_radius > self.arena_base_radius
        {
            return Err(TuningError::Invalid {
                field: "spawn_offset",
                reason: "players must spawn apart and inside the arena",
            });
        }
        if !(0.0..=1.0).contains(&self.opponent_fire_chance) {
            return Err(TuningError::Invalid {
                field: "opponent_fire_chance",
                reason: "must be within [0, 1]",
            });
        }
        Ok(())
    }

    /// Shots from cold to overheated
    pub fn shots_to_overheat(&self) -> u32 {
        (1.0 / self.heat_per_shot).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.shots_to_overheat(), 20);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "projectile_speed": 600.0 }"#).unwrap();
        assert_eq!(tuning.projectile_speed, 600.0);
        assert_eq!(tuning.player_radius, PLAYER_RADIUS);
        assert_eq!(tuning.match_duration, MATCH_DURATION);
    }

    #[test]
    fn test_rejects_min_above_base() {
        let err = Tuning::from_json(r#"{ "arena_min_radius": 300.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "arena_min_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_spawn_outside_arena() {
        let tuning = Tuning {
            spawn_offset: 240.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_fire_chance() {
        let tuning = Tuning {
            opponent_fire_chance: 1.5,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_parse_error_reported() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Tuning::load("/nonexistent/xorg-tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }

    #[test]
    fn test_roundtrip_json() {
        let tuning = Tuning {
            recoil_impulse: 250.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
