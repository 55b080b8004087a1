// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the ranker advances the Markov chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Square the whole matrix each round (2^k chain steps after k rounds).
    #[default]
    Squaring,
    /// Multiply a probability vector by the matrix, one chain step per round.
    Vector,
}

/// Ranking options from `[rank]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Teleportation probability. Default: 0.15
    pub damping: f64,
    /// Number of rounds. Default: 8
    pub iterations: usize,
    /// Entries reported per ranking. Default: 100
    pub top_k: usize,
    /// Stop after the first round whose distance is at or below this.
    pub tolerance: Option<f64>,
    pub mode: RankMode,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: crate::markov::DEFAULT_DAMPING,
            iterations: 8,
            top_k: 100,
            tolerance: None,
            mode: RankMode::Squaring,
        }
    }
}

/// Random graph options from `[random]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub min_nodes: usize,
    pub max_nodes: usize,
    /// Canvas width in pixels. Default: 800
    pub width: u32,
    /// Canvas height in pixels. Default: 600
    pub height: u32,
    /// Margin kept free along every canvas edge. Default: 20
    pub inset: u32,
    /// Distance at which the link probability reaches zero. Default: 300
    pub max_distance: f64,
    /// Exponent of the distance falloff. Default: 6
    pub falloff: i32,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            min_nodes: 10,
            max_nodes: 25,
            width: 800,
            height: 600,
            inset: 20,
            max_distance: 300.0,
            falloff: 6,
        }
    }
}

/// Graph input options from `[input]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// File of names to drop before construction, one per line.
    pub exclude_file: Option<PathBuf>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rank: RankConfig,
    pub random: RandomConfig,
    pub input: InputConfig,
    /// File this configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}
