//! Data-driven game balance
//!
//! Every gameplay constant lives here so a session can be rebuilt from a
//! single value on reset. Partial JSON overrides are accepted: missing fields
//! fall back to the shipped defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{TICK_RATE, VIEW_HEIGHT, VIEW_WIDTH};

/// Errors produced while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World / viewport ===
    pub world_width: f32,
    pub world_height: f32,
    pub view_width: f32,
    pub view_height: f32,

    // === Player ===
    pub player_size: f32,
    pub player_speed: f32,
    pub max_health: u32,
    /// Hitbox inset on every side (makes hits feel fair)
    pub player_hitbox_inset: f32,
    pub sprint_multiplier: f32,
    /// Ticks of boosted speed per activation
    pub sprint_duration: u32,
    /// Ticks before sprint can be activated again
    pub sprint_cooldown: u32,
    /// Frame counter decrement per moving tick
    pub player_anim_rate: f32,
    pub player_anim_max: f32,

    // === Enemy ===
    pub enemy_size: f32,
    pub enemy_speed: f32,
    pub enemy_hitbox_inset: f32,
    pub enemy_anim_rate: f32,
    /// Inclusive lower bound of the per-enemy shoot delay (ticks)
    pub shoot_delay_min: u32,
    /// Exclusive upper bound of the per-enemy shoot delay (ticks)
    pub shoot_delay_max: u32,

    // === Projectiles ===
    pub projectile_size: f32,
    pub projectile_speed: f32,
    pub spit_damage: u32,

    // === Pickups ===
    pub pickup_size: f32,
    pub coin_value: u32,
    pub potion_heal: u32,
    /// Every Nth kill drops a potion instead of a coin
    pub potion_every: u32,
    pub pickup_bob_rate: f32,
    pub pickup_bob_amplitude: f32,

    // === Scoring ===
    pub kill_score: u64,

    // === Spawn & difficulty ===
    pub initial_spawn_delay: u32,
    pub min_spawn_delay: u32,
    /// Multiplier applied to the spawn delay on each difficulty step (< 1)
    pub spawn_delay_ratio: f32,
    /// Ticks between difficulty steps
    pub difficulty_interval: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: 1800.0,
            world_height: 1800.0,
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,

            player_size: 64.0,
            player_speed: 5.0,
            max_health: 100,
            player_hitbox_inset: 14.0,
            sprint_multiplier: 1.8,
            sprint_duration: 90,
            sprint_cooldown: 180,
            player_anim_rate: 0.2,
            player_anim_max: 4.0,

            enemy_size: 56.0,
            enemy_speed: 2.0,
            enemy_hitbox_inset: 8.0,
            enemy_anim_rate: 0.15,
            shoot_delay_min: 90,
            shoot_delay_max: 240,

            projectile_size: 16.0,
            projectile_speed: 10.0,
            spit_damage: 10,

            pickup_size: 24.0,
            coin_value: 5,
            potion_heal: 25,
            potion_every: 20,
            pickup_bob_rate: 0.1,
            pickup_bob_amplitude: 4.0,

            kill_score: 10,

            initial_spawn_delay: 120,
            min_spawn_delay: 30,
            spawn_delay_ratio: 0.85,
            difficulty_interval: 30 * TICK_RATE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("view_width", self.view_width)?;
        positive("view_height", self.view_height)?;
        if self.world_width < self.view_width || self.world_height < self.view_height {
            return Err(TuningError::Invalid {
                field: "world_width",
                reason: "world must be at least as large as the viewport",
            });
        }

        positive("player_size", self.player_size)?;
        positive("player_speed", self.player_speed)?;
        positive("sprint_multiplier", self.sprint_multiplier)?;
        positive("player_anim_rate", self.player_anim_rate)?;
        positive("player_anim_max", self.player_anim_max)?;
        if self.max_health == 0 {
            return Err(TuningError::Invalid {
                field: "max_health",
                reason: "must be at least 1",
            });
        }
        if self.player_hitbox_inset < 0.0 || self.player_hitbox_inset * 2.0 >= self.player_size {
            return Err(TuningError::Invalid {
                field: "player_hitbox_inset",
                reason: "must be non-negative and leave a non-empty hitbox",
            });
        }

        positive("enemy_size", self.enemy_size)?;
        positive("enemy_speed", self.enemy_speed)?;
        positive("enemy_anim_rate", self.enemy_anim_rate)?;
        if self.enemy_hitbox_inset < 0.0 || self.enemy_hitbox_inset * 2.0 >= self.enemy_size {
            return Err(TuningError::Invalid {
                field: "enemy_hitbox_inset",
                reason: "must be non-negative and leave a non-empty hitbox",
            });
        }
        if self.shoot_delay_min == 0 || self.shoot_delay_min >= self.shoot_delay_max {
            return Err(TuningError::Invalid {
                field: "shoot_delay_min",
                reason: "shoot delay range must be non-empty and start above zero",
            });
        }

        positive("projectile_size", self.projectile_size)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("pickup_size", self.pickup_size)?;
        if self.potion_every == 0 {
            return Err(TuningError::Invalid {
                field: "potion_every",
                reason: "must be at least 1",
            });
        }

        if self.min_spawn_delay == 0 {
            return Err(TuningError::Invalid {
                field: "min_spawn_delay",
                reason: "must be at least 1",
            });
        }
        if self.initial_spawn_delay < self.min_spawn_delay {
            return Err(TuningError::Invalid {
                field: "initial_spawn_delay",
                reason: "must not be below min_spawn_delay",
            });
        }
        if !(self.spawn_delay_ratio > 0.0 && self.spawn_delay_ratio < 1.0) {
            return Err(TuningError::Invalid {
                field: "spawn_delay_ratio",
                reason: "must be strictly between 0 and 1",
            });
        }
        if self.difficulty_interval == 0 {
            return Err(TuningError::Invalid {
                field: "difficulty_interval",
                reason: "must be at least 1",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "player_speed": 7.5, "potion_every": 5 }"#).unwrap();
        assert_eq!(tuning.player_speed, 7.5);
        assert_eq!(tuning.potion_every, 5);
        assert_eq!(tuning.max_health, Tuning::default().max_health);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let err = Tuning::from_json(r#"{ "enemy_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "enemy_speed",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "player_speed": -3.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_bad_spawn_schedule() {
        let mut tuning = Tuning::default();
        tuning.spawn_delay_ratio = 1.0;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.min_spawn_delay = 0;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::default();
        tuning.initial_spawn_delay = tuning.min_spawn_delay - 1;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_world_smaller_than_view() {
        let mut tuning = Tuning::default();
        tuning.world_width = tuning.view_width - 1.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }
}
