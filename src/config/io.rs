// src/config/io.rs
use super::types::{Config, InputConfig};
use crate::error::{RankpathError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "rankpath.toml";

/// Parses a TOML document. Missing sections and fields take defaults.
///
/// # Errors
/// Returns `Toml` for malformed documents.
pub fn parse_toml(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Reads and parses `path`.
///
/// # Errors
/// Returns `Io` if the file cannot be read, `Toml` if it does not parse.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| RankpathError::io(e, path))?;
    let mut config = parse_toml(&content)?;
    config.source = Some(path.to_path_buf());
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Loads `rankpath.toml` from the working directory, or defaults if absent.
///
/// # Errors
/// Same as `load_from` when the file exists.
pub fn load_local() -> Result<Config> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from(path)
    } else {
        Ok(Config::default())
    }
}

/// Writes `config` as TOML to `path`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let content =
        toml::to_string_pretty(config).map_err(|e| RankpathError::Config(e.to_string()))?;
    fs::write(path, content).map_err(|e| RankpathError::io(e, path))
}

/// Collects the exclusion set: inline names plus the lines of `exclude_file`.
///
/// A relative `exclude_file` is resolved against `base` when given. Blank
/// lines and `#` comments are skipped.
///
/// # Errors
/// Returns `Io` if the exclusion file cannot be read.
pub fn load_exclusions(input: &InputConfig, base: Option<&Path>) -> Result<Vec<String>> {
    let mut names = input.exclude.clone();
    if let Some(file) = &input.exclude_file {
        let path = resolve(file, base);
        let content = fs::read_to_string(&path).map_err(|e| RankpathError::io(e, &path))?;
        names.extend(parse_name_list(&content));
    }
    Ok(names)
}

/// Splits a name list file into entries.
///
/// Names are kept verbatim, like entity lines.
#[must_use]
pub fn parse_name_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn resolve(file: &Path, base: Option<&Path>) -> PathBuf {
    match base {
        Some(dir) if file.is_relative() => dir.join(file),
        _ => file.to_path_buf(),
    }
}
