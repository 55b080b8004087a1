// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankpathError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("extract_min called on an empty priority queue")]
    EmptyQueue,

    #[error("shortest path requires two different endpoints (both were '{name}')")]
    SameEndpoints { name: String },

    #[error("invalid matrix multiplication: {left:?} x {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("arc cost must be finite and non-negative, got {cost}")]
    InvalidCost { cost: f64 },

    #[error("damping must lie in [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RankpathError>;

// Allow `?` on std::io::Error by converting to RankpathError::Io with unknown path.
impl From<std::io::Error> for RankpathError {
    fn from(source: std::io::Error) -> Self {
        RankpathError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl RankpathError {
    /// Wraps an I/O error with the path that produced it.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        RankpathError::Io {
            source,
            path: path.into(),
        }
    }
}
