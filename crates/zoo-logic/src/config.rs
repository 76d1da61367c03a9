//! Run configuration: names, starting money, run length, action allowance.
//!
//! ```
//! use zoo_logic::config::{validate_config, GameConfig};
//!
//! let config = GameConfig::from_json(r#"{ "zoo_name": "Lakeside Zoo" }"#).unwrap();
//! assert_eq!(config.zoo_name, "Lakeside Zoo");
//! assert_eq!(config.final_day, 10);
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::game;
use crate::schedule::LAST_SCHEDULED_DAY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub zoo_name: String,
    pub keeper_name: String,
    pub starting_balance: f64,
    /// Last day played; the run is reviewed when it closes.
    pub final_day: u32,
    pub base_action_points: u32,
    /// Ceiling on daily action points however large the zoo grows.
    pub max_action_points: u32,
    /// Seed for generated ages and capacities (None = entropy).
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            zoo_name: "City Zoo".to_string(),
            keeper_name: "Keeper".to_string(),
            starting_balance: game::DEFAULT_STARTING_BALANCE,
            final_day: game::FINAL_DAY,
            base_action_points: game::BASE_ACTION_POINTS,
            max_action_points: game::MAX_ACTION_POINTS,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameConfig {
    /// Parse a config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyZooName,
    EmptyKeeperName,
    /// Starting balance must be positive.
    NonPositiveBalance(f64),
    ZeroFinalDay,
    /// No missions are scheduled past this day.
    FinalDayBeyondSchedule(u32),
    /// Base allowance above the daily ceiling.
    BaseAboveCeiling { base: u32, ceiling: u32 },
    ZeroActionPoints,
}

/// Validate a run configuration, returning all errors found.
pub fn validate_config(config: &GameConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.zoo_name.trim().is_empty() {
        errors.push(ConfigError::EmptyZooName);
    }
    if config.keeper_name.trim().is_empty() {
        errors.push(ConfigError::EmptyKeeperName);
    }
    if config.starting_balance.is_nan() || config.starting_balance <= 0.0 {
        errors.push(ConfigError::NonPositiveBalance(config.starting_balance));
    }
    if config.final_day == 0 {
        errors.push(ConfigError::ZeroFinalDay);
    }
    if config.final_day > LAST_SCHEDULED_DAY {
        errors.push(ConfigError::FinalDayBeyondSchedule(config.final_day));
    }
    if config.base_action_points == 0 {
        errors.push(ConfigError::ZeroActionPoints);
    }
    if config.base_action_points > config.max_action_points {
        errors.push(ConfigError::BaseAboveCeiling {
            base: config.base_action_points,
            ceiling: config.max_action_points,
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let errors = validate_config(&GameConfig::default());
        assert!(errors.is_empty(), "default config should be valid: {errors:?}");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "starting_balance": 2500.0, "seed": 7 }"#).unwrap();
        assert!((config.starting_balance - 2500.0).abs() < 0.01);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.base_action_points, 3);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("malformed config"));
    }

    #[test]
    fn every_problem_is_reported() {
        let config = GameConfig {
            zoo_name: "  ".to_string(),
            keeper_name: String::new(),
            starting_balance: 0.0,
            final_day: 0,
            base_action_points: 0,
            max_action_points: 20,
            seed: None,
        };
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::EmptyZooName));
        assert!(errors.contains(&ConfigError::EmptyKeeperName));
        assert!(errors.contains(&ConfigError::NonPositiveBalance(0.0)));
        assert!(errors.contains(&ConfigError::ZeroFinalDay));
        assert!(errors.contains(&ConfigError::ZeroActionPoints));
    }

    #[test]
    fn run_length_limited_by_schedule() {
        let config = GameConfig {
            final_day: 12,
            ..GameConfig::default()
        };
        assert_eq!(
            validate_config(&config),
            vec![ConfigError::FinalDayBeyondSchedule(12)]
        );
    }

    #[test]
    fn base_above_ceiling() {
        let config = GameConfig {
            base_action_points: 25,
            ..GameConfig::default()
        };
        assert!(validate_config(&config)
            .contains(&ConfigError::BaseAboveCeiling { base: 25, ceiling: 20 }));
    }

    #[test]
    fn nan_balance_rejected() {
        let config = GameConfig {
            starting_balance: f64::NAN,
            ..GameConfig::default()
        };
        assert_eq!(validate_config(&config).len(), 1);
    }
}
