// src/rank.rs
//! Power-iteration ranking over a transition matrix.
//!
//! Squaring mode squares the matrix each round, so `k` rounds advance the
//! chain by `2^k` steps. Its convergence diagnostic is the distance between
//! the first two columns of the current iterate: once every column has
//! settled on the stationary distribution they coincide. Vector mode applies
//! the matrix to a probability vector one step at a time instead and measures
//! the distance between successive vectors.
//!
//! Rounds run a fixed count unless a tolerance is configured, in which case
//! the first round at or below it ends the run.

use crate::config::{RankConfig, RankMode};
use crate::error::Result;
use crate::markov::{euclidean_distance, TransitionMatrix};
use crate::pqueue::HeapQueue;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    /// 1 = highest score.
    pub rank: usize,
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Round {
    pub step: usize,
    pub distance: f64,
    pub top: Vec<RankedNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankOutcome {
    /// Diagnostic of the starting iterate (squaring mode only).
    pub initial_distance: Option<f64>,
    pub rounds: Vec<Round>,
    /// True when a tolerance was configured and reached.
    pub converged: bool,
    /// Final score per matrix index.
    pub scores: Vec<f64>,
    pub ranking: Vec<RankedNode>,
}

impl RankOutcome {
    /// All recorded distances in order, starting with the initial one.
    #[must_use]
    pub fn distances(&self) -> Vec<f64> {
        self.initial_distance
            .into_iter()
            .chain(self.rounds.iter().map(|r| r.distance))
            .collect()
    }
}

/// Ranks the nodes of `transition` according to `config`.
///
/// # Errors
/// Propagates matrix errors, which cannot occur for a well-formed square
/// transition matrix.
pub fn rank(transition: &TransitionMatrix, config: &RankConfig) -> Result<RankOutcome> {
    match config.mode {
        RankMode::Squaring => rank_by_squaring(transition, config),
        RankMode::Vector => rank_by_vector(transition, config),
    }
}

fn rank_by_squaring(transition: &TransitionMatrix, config: &RankConfig) -> Result<RankOutcome> {
    let mut current = transition.matrix.clone();
    let initial = current.leading_column_distance();
    info!(step = 0, distance = initial, "initial iterate");

    let mut rounds = Vec::with_capacity(config.iterations);
    let mut converged = false;
    for step in 1..=config.iterations {
        debug!(step, n = current.rows(), "squaring transition iterate");
        current = current.multiply(&current)?;
        let distance = current.leading_column_distance();
        info!(step, distance, "squared iterate");

        let top = top_k(&current.column(0), transition.names(), config.top_k);
        rounds.push(Round {
            step,
            distance,
            top,
        });
        if reached(config.tolerance, distance) {
            converged = true;
            break;
        }
    }

    let scores = current.column(0);
    let ranking = top_k(&scores, transition.names(), config.top_k);
    Ok(RankOutcome {
        initial_distance: Some(initial),
        rounds,
        converged,
        scores,
        ranking,
    })
}

#[allow(clippy::cast_precision_loss)]
fn rank_by_vector(transition: &TransitionMatrix, config: &RankConfig) -> Result<RankOutcome> {
    let n = transition.len();
    let mut current = if n == 0 {
        Vec::new()
    } else {
        vec![1.0 / n as f64; n]
    };

    let mut rounds = Vec::with_capacity(config.iterations);
    let mut converged = false;
    for step in 1..=config.iterations {
        let next = transition.matrix.multiply_vector(&current)?;
        let distance = euclidean_distance(&next, &current);
        current = next;
        debug!(step, distance, "vector step");

        let top = top_k(&current, transition.names(), config.top_k);
        rounds.push(Round {
            step,
            distance,
            top,
        });
        if reached(config.tolerance, distance) {
            converged = true;
            break;
        }
    }

    let ranking = top_k(&current, transition.names(), config.top_k);
    Ok(RankOutcome {
        initial_distance: None,
        rounds,
        converged,
        scores: current,
        ranking,
    })
}

fn reached(tolerance: Option<f64>, distance: f64) -> bool {
    tolerance.is_some_and(|t| distance <= t)
}

/// Returns the `k` highest scores, best first, paired with their names.
///
/// Every score is queued by value and drained in ascending order; the
/// reversed drain gives the descending ranking.
#[must_use]
pub fn top_k(scores: &[f64], names: &[String], k: usize) -> Vec<RankedNode> {
    let queue: HeapQueue<usize> = scores.iter().copied().enumerate().collect();
    queue
        .into_sorted_vec()
        .into_iter()
        .rev()
        .take(k)
        .enumerate()
        .map(|(i, entry)| RankedNode {
            rank: i + 1,
            name: names.get(entry.key).cloned().unwrap_or_default(),
            score: entry.priority,
        })
        .collect()
}
