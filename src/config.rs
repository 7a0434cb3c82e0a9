//! Host-tunable simulation parameters
//!
//! The host owns a `Config` and hands a reference to the core every tick;
//! the core never mutates it. Field names serialize as the camelCase keys
//! the tuning panel and config import/export speak, and unknown or missing
//! keys fall back to defaults so older exports keep loading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Renderer hint for the player body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerShape {
    #[default]
    Square,
    Circle,
    Triangle,
}

/// Rejected tuning values
///
/// Validation runs before every tick so a bad value fails fast instead of
/// silently bending the game rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("spawnCurve needs at least 2 control points, got {0}")]
    SpawnCurveTooShort(usize),
    #[error("spawnCurve[{0}] is {1}, expected a finite value in [0, 1]")]
    SpawnCurvePoint(usize, f32),
    #[error("{0} must be finite and non-negative, got {1}")]
    Negative(&'static str, f32),
    #[error("{0} must lie in [0, 1], got {1}")]
    UnitRange(&'static str, f32),
    #[error("playerSize must be positive and finite, got {0}")]
    PlayerSize(f32),
}

/// Tunable parameters supplied by the host each tick
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Base jump impulse magnitude
    pub recoil_force: f32,
    /// Fuel restored per tick
    pub fuel_regen: f32,
    /// Fuel cost of one jump
    pub fuel_consumption: f32,
    /// Base spawn probability per tick
    pub enemy_spawn_rate: f32,
    /// Wall restitution coefficient
    pub bounce_elasticity: f32,
    /// Scales spawn pressure and the enemy speed ramp
    pub difficulty_scale: f32,
    /// Fraction of the play height forming the bottom dead-zone band
    pub dead_zone_threshold: f32,
    /// Impulse multiplier for dead-zone super jumps
    pub super_jump_multiplier: f32,
    /// Spawn-intensity control points, sampled over a 120 s cycle
    pub spawn_curve: Vec<f32>,
    /// Dead-zone super jumps on/off
    pub dead_jump_enabled: bool,
    /// Shockwave chaining on/off
    pub burning_enabled: bool,
    /// Max radius of a freshly triggered shockwave
    pub burning_radius: f32,
    /// Shockwave lifetime in ticks
    pub burning_duration: f32,
    /// Player body edge length; physics geometry, not just looks
    pub player_size: f32,
    /// Renderer hint (hex color)
    pub player_color: String,
    /// Renderer hint
    pub player_shape: PlayerShape,
    /// Master audio toggle
    pub audio_enabled: bool,
    /// Background music volume, 0.0 to 1.0
    pub bgm_volume: f32,
    /// Sound effect volume, 0.0 to 1.0
    pub sfx_volume: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: 0.25,
            recoil_force: 8.0,
            fuel_regen: 0.4,
            fuel_consumption: 25.0,
            enemy_spawn_rate: 0.02,
            bounce_elasticity: 0.7,
            difficulty_scale: 1.0,
            dead_zone_threshold: 0.15,
            super_jump_multiplier: 1.8,
            spawn_curve: vec![0.2, 0.6, 0.4, 1.0, 0.3, 0.8],
            dead_jump_enabled: true,
            burning_enabled: true,
            burning_radius: 90.0,
            burning_duration: 30.0,
            player_size: 30.0,
            player_color: "#00e5ff".into(),
            player_shape: PlayerShape::Square,
            audio_enabled: true,
            bgm_volume: 0.5,
            sfx_volume: 0.8,
        }
    }
}

impl Config {
    /// Check every field the simulation reads
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_curve.len() < 2 {
            return Err(ConfigError::SpawnCurveTooShort(self.spawn_curve.len()));
        }
        for (i, &point) in self.spawn_curve.iter().enumerate() {
            if !(0.0..=1.0).contains(&point) {
                return Err(ConfigError::SpawnCurvePoint(i, point));
            }
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("recoilForce", self.recoil_force),
            ("fuelRegen", self.fuel_regen),
            ("fuelConsumption", self.fuel_consumption),
            ("enemySpawnRate", self.enemy_spawn_rate),
            ("difficultyScale", self.difficulty_scale),
            ("superJumpMultiplier", self.super_jump_multiplier),
            ("burningRadius", self.burning_radius),
            ("burningDuration", self.burning_duration),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative(name, value));
            }
        }
        for (name, value) in [
            ("bounceElasticity", self.bounce_elasticity),
            ("deadZoneThreshold", self.dead_zone_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::UnitRange(name, value));
            }
        }
        if !self.player_size.is_finite() || self.player_size <= 0.0 {
            return Err(ConfigError::PlayerSize(self.player_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn short_spawn_curve_is_rejected() {
        let config = Config {
            spawn_curve: vec![0.5],
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SpawnCurveTooShort(1)));
    }

    #[test]
    fn out_of_range_curve_point_is_rejected() {
        let config = Config {
            spawn_curve: vec![0.2, 1.5],
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnCurvePoint(1, _))
        ));
    }

    #[test]
    fn nan_curve_point_is_rejected() {
        let config = Config {
            spawn_curve: vec![0.2, f32::NAN, 0.4],
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnCurvePoint(1, _))
        ));
    }

    #[test]
    fn negative_gravity_is_rejected() {
        let config = Config {
            gravity: -0.1,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Negative("gravity", -0.1)));
    }

    #[test]
    fn elasticity_above_one_is_rejected() {
        let config = Config {
            bounce_elasticity: 1.2,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnitRange("bounceElasticity", _))
        ));
    }

    #[test]
    fn zero_player_size_is_rejected() {
        let config = Config {
            player_size: 0.0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::PlayerSize(_))));
    }

    #[test]
    fn partial_json_fills_defaults_with_camel_case_keys() {
        let config: Config =
            serde_json::from_str(r#"{"recoilForce": 12.0, "deadJumpEnabled": false}"#)
                .expect("partial config should parse");
        assert_eq!(config.recoil_force, 12.0);
        assert!(!config.dead_jump_enabled);
        assert_eq!(config.gravity, Config::default().gravity);
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("\"spawnCurve\""));
        assert!(json.contains("\"playerShape\":\"square\""));
        let back: Config = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.super_jump_multiplier, config.super_jump_multiplier);
    }
}
