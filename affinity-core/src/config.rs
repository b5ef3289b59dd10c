//! Configuration for the affinity tracker.
//!
//! Maps directly to `affinity.toml`. Every section is optional; a missing
//! file section falls back to the built-in roster and defaults.

use serde::{Deserialize, Serialize};

use crate::error::{AffinityError, Result};
use crate::record::{DEFAULT_MAX_POINTS, MAX_MAX_POINTS, MIN_MAX_POINTS, normalize};
use crate::store::DEFAULT_ROSTER;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinityConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Characters registered at session start.
    #[serde(default)]
    pub roster: RosterConfig,
    /// Script command defaults.
    #[serde(default)]
    pub script: ScriptConfig,
}

impl AffinityConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `AffinityError::Config` if the TOML is invalid or a value is
    /// out of range, and `AffinityError::DuplicateCharacter` if the roster
    /// repeats a name.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| AffinityError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check value ranges and roster uniqueness.
    ///
    /// # Errors
    /// See [`AffinityConfig::from_toml`].
    pub fn validate(&self) -> Result<()> {
        self.roster.validate()
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// The fixed cast registered when a session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Character names, in display order.
    #[serde(default = "default_characters")]
    pub characters: Vec<String>,
    /// Points ceiling for every roster character.
    #[serde(default = "default_max_points")]
    pub default_max_points: u32,
}

impl RosterConfig {
    fn validate(&self) -> Result<()> {
        if !(MIN_MAX_POINTS..=MAX_MAX_POINTS).contains(&self.default_max_points) {
            let got = self.default_max_points;
            return Err(AffinityError::Config(format!(
                "roster.default_max_points must be within \
                 {MIN_MAX_POINTS}..={MAX_MAX_POINTS}, got {got}"
            )));
        }
        let mut seen: Vec<String> = Vec::with_capacity(self.characters.len());
        for name in &self.characters {
            if name.is_empty() {
                return Err(AffinityError::Config(
                    "roster.characters contains an empty name".to_string(),
                ));
            }
            let key = normalize(name);
            if seen.contains(&key) {
                return Err(AffinityError::DuplicateCharacter(name.clone()));
            }
            seen.push(key);
        }
        Ok(())
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            characters: default_characters(),
            default_max_points: DEFAULT_MAX_POINTS,
        }
    }
}

/// Defaults for script commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Points added by `@addlove` when the command omits them.
    #[serde(default = "default_add_points")]
    pub default_add_points: i32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            default_add_points: default_add_points(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_characters() -> Vec<String> { DEFAULT_ROSTER.iter().map(ToString::to_string).collect() }
fn default_max_points() -> u32 { DEFAULT_MAX_POINTS }
fn default_add_points() -> i32 { 5 }
