//! # configs
//!
//! Layered settings for Overboard adapters.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults (the standard reputation table)
//! 2. `config/overboard.{toml,yaml,json}` if present
//! 3. `OVERBOARD__*` environment variables, e.g.
//!    `OVERBOARD__REPUTATION__ANSWER_ACCEPTED=20`
//!
//! Binaries load `.env` themselves before calling [`Settings::load`], so the
//! file feeds step 3.

use config::{Config, Environment, File};
use ob_core::{Board, ReputationRules};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "config/overboard";
pub const ENV_PREFIX: &str = "OVERBOARD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardSettings,
    pub reputation: ReputationRules,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub title: String,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            title: "Overboard".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Loads the default config file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE, env_source())
    }

    /// Same layering as [`Settings::load`] with an explicit file stem and
    /// environment source.
    pub fn load_from(file: &str, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// An empty board titled and scored per these settings.
    pub fn board(&self) -> Board {
        Board::with_rules(self.board.title.clone(), self.reputation)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_source().source(Some(map))
    }

    #[test]
    fn defaults_apply_without_sources() {
        let settings = Settings::load_from("config/does-not-exist", env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.reputation, ReputationRules::default());
        assert_eq!(settings.board.title, "Overboard");
    }

    #[test]
    fn environment_overrides_single_rules() {
        let settings = Settings::load_from(
            "config/does-not-exist",
            env(&[
                ("OVERBOARD__REPUTATION__ANSWER_ACCEPTED", "20"),
                ("OVERBOARD__BOARD__TITLE", "Mocking"),
                ("OVERBOARD__LOG__JSON", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.reputation.answer_accepted, 20);
        assert_eq!(settings.reputation.answer_up_vote, 10);
        assert_eq!(settings.board.title, "Mocking");
        assert!(settings.log.json);
    }

    #[test]
    fn board_uses_configured_rules() {
        let mut settings = Settings::default();
        settings.reputation.question_up_vote = 7;
        let board = settings.board();
        assert_eq!(board.title(), "Overboard");
        assert_eq!(board.rules().question_up_vote, 7);
    }
}
