// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, InputConfig, RandomConfig, RankConfig, RankMode};
use crate::error::{RankpathError, Result};
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `rankpath.toml` from the working directory, falling back to
    /// defaults when it is absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        io::load_local()
    }

    /// Loads an explicit configuration file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    /// Returns `Toml` for malformed input.
    pub fn parse_toml(content: &str) -> Result<Self> {
        io::parse_toml(content)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidDamping` or `Config` describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        let rank = &self.rank;
        if !(0.0..=1.0).contains(&rank.damping) {
            return Err(RankpathError::InvalidDamping(rank.damping));
        }
        if rank.top_k == 0 {
            return Err(RankpathError::Config("rank.top_k must be at least 1".into()));
        }
        if let Some(t) = rank.tolerance {
            if !t.is_finite() || t < 0.0 {
                return Err(RankpathError::Config(format!(
                    "rank.tolerance must be a non-negative number, got {t}"
                )));
            }
        }

        let random = &self.random;
        if random.min_nodes > random.max_nodes {
            return Err(RankpathError::Config(format!(
                "random.min_nodes ({}) exceeds random.max_nodes ({})",
                random.min_nodes, random.max_nodes
            )));
        }
        if random.width == 0
            || random.height == 0
            || !(random.max_distance.is_finite() && random.max_distance > 0.0)
        {
            return Err(RankpathError::Config(
                "random canvas and max_distance must be positive".into(),
            ));
        }
        if random.falloff < 0 {
            return Err(RankpathError::Config("random.falloff must not be negative".into()));
        }
        Ok(())
    }

    /// Names to drop before graph construction.
    ///
    /// # Errors
    /// Returns `Io` if the configured exclusion file cannot be read.
    pub fn exclusions(&self) -> Result<Vec<String>> {
        let base = self.source.as_deref().and_then(Path::parent);
        io::load_exclusions(&self.input, base)
    }

    /// Saves the configuration as TOML.
    ///
    /// # Errors
    /// Returns error if serialization or the file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(self, path)
    }
}
