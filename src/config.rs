//! Application settings.
//!
//! Settings come from `edulearn.toml` in the working directory (or an
//! explicit path); command-line flags override individual fields.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::TierCounts;
use crate::i18n::Language;

pub const DEFAULT_CONFIG_FILE: &str = "edulearn.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        })
    }
}

impl FromStr for Role {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            _ => Err(ConfigError::UnknownRole(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown role: {0} (expected student or teacher)")]
    UnknownRole(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub role: Role,
    /// Milliseconds answer feedback stays up before advancing.
    pub feedback_delay_ms: u64,
    pub tiers: TierCounts,
    /// JSON question bank; the built-in bank when unset.
    pub questions: Option<PathBuf>,
    /// Only use questions of this subject.
    pub category: Option<String>,
    pub attempts_log: PathBuf,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::DEFAULT,
            role: Role::Student,
            feedback_delay_ms: 2000,
            tiers: TierCounts::default(),
            questions: None,
            category: None,
            attempts_log: PathBuf::from("edulearn-attempts.jsonl"),
            log_file: PathBuf::from("edulearn.log"),
        }
    }
}

impl Settings {
    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists, or
    /// fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !local.exists() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&contents, &path)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        let Overrides {
            language,
            role,
            questions,
            category,
            attempts_log,
            log_file,
        } = overrides;

        if let Some(language) = language {
            self.language = language;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if questions.is_some() {
            self.questions = questions;
        }
        if category.is_some() {
            self.category = category;
        }
        if let Some(path) = attempts_log {
            self.attempts_log = path;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<Language>,
    pub role: Option<Role>,
    pub questions: Option<PathBuf>,
    pub category: Option<String>,
    pub attempts_log: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}
