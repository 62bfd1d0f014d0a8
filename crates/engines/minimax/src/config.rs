//! Engine configuration, loaded from TOML.
//!
//! ```toml
//! depth = 2
//! terminal_scoring = "material"   # or "outcome"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Plies searched when nothing else is configured.
pub const DEFAULT_DEPTH: u8 = 2;

/// Deepest search accepted from config or `setoption`.
pub const MAX_DEPTH: u8 = 6;

/// What a leaf is worth when the game has ended there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalScoring {
    /// Checkmate, stalemate and draws are scored by material like any other leaf.
    #[default]
    Material,
    /// Checkmate scores `±(MATE + remaining depth)` against the mated side,
    /// draws score 0.
    Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    pub terminal_scoring: TerminalScoring,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            terminal_scoring: TerminalScoring::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("search depth {0} is outside 1..={1}")]
    DepthOutOfRange(u8, u8),
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_depth(self, depth: u8) -> Result<Self, ConfigError> {
        let config = Self { depth, ..self };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::DepthOutOfRange(self.depth, MAX_DEPTH));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
