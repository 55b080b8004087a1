// src/markov/transition.rs
//! Column-stochastic transition matrix built from a graph.
//!
//! Column `j` holds node `j`'s outgoing transition probabilities: each arc
//! leaving `j` adds `1 / out_degree(j)` to its destination's row. Damping then
//! blends in the uniform matrix:
//!
//! ```text
//! T = (1 - d) * M + d * U,   U[i][j] = 1 / n
//! ```
//!
//! A node with no outgoing arcs would leave its column at `d` after damping,
//! so such dead-end columns are set to uniform `1 / n` instead.

use crate::error::{RankpathError, Result};
use crate::graph::{Graph, NodeId};
use crate::markov::matrix::Matrix;
use std::collections::HashMap;
use tracing::debug;

pub const DEFAULT_DAMPING: f64 = 0.15;

#[derive(Debug, Clone)]
pub struct TransitionMatrix {
    pub matrix: Matrix,
    /// Matrix index -> node name.
    order: Vec<String>,
    /// Node -> matrix index.
    positions: HashMap<NodeId, usize>,
}

impl TransitionMatrix {
    /// Builds the damped transition matrix of `graph`.
    ///
    /// # Errors
    /// Returns `InvalidDamping` unless `0 <= damping <= 1`.
    #[allow(clippy::cast_precision_loss)]
    pub fn build(graph: &Graph, damping: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&damping) {
            return Err(RankpathError::InvalidDamping(damping));
        }

        let mut order = Vec::with_capacity(graph.node_count());
        let mut positions = HashMap::with_capacity(graph.node_count());
        for (i, (name, id)) in graph.indexed().enumerate() {
            order.push(name.to_string());
            positions.insert(id, i);
        }

        let n = order.len();
        let mut matrix = Matrix::zeros(n, n);
        let mut dead_ends = Vec::new();

        for (name, id) in graph.indexed() {
            let Some(&col) = positions.get(&id) else {
                continue;
            };
            let degree = graph.node(id).map_or(0, |node| node.out_degree());
            if degree == 0 {
                debug!(node = name, "dead-end node");
                dead_ends.push(col);
                continue;
            }
            let share = 1.0 / degree as f64;
            for (_, arc) in graph.out_arcs(id) {
                if let Some(&row) = positions.get(&arc.to) {
                    matrix.set(row, col, matrix.get(row, col) + share);
                }
            }
        }

        if n > 0 {
            let uniform = 1.0 / n as f64;
            let teleport = uniform * damping;
            matrix.map_in_place(|v| v * (1.0 - damping) + teleport);
            for col in dead_ends {
                for row in 0..n {
                    matrix.set(row, col, uniform);
                }
            }
        }

        Ok(Self {
            matrix,
            order,
            positions,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Node name for matrix index `index`.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.order.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Matrix index for `node`.
    #[must_use]
    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.positions.get(&node).copied()
    }

    /// Largest deviation of any column sum from 1.
    #[must_use]
    pub fn stochastic_error(&self) -> f64 {
        (0..self.matrix.cols())
            .map(|c| (self.matrix.column_sum(c) - 1.0).abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Graph {
        let mut g = Graph::new();
        let hub = g.add_node("hub");
        for leaf in ["x", "y", "z"] {
            let id = g.add_node(leaf);
            g.add_arc(hub, id, 1.0).unwrap();
        }
        g
    }

    #[test]
    fn test_columns_sum_to_one_with_dead_ends() {
        let t = TransitionMatrix::build(&star(), DEFAULT_DAMPING).unwrap();
        assert_eq!(t.len(), 4);
        assert!(t.stochastic_error() < 1e-9);
    }

    #[test]
    fn test_undamped_shares() {
        let g = star();
        let t = TransitionMatrix::build(&g, 0.0).unwrap();
        let hub = t.position(g.node_id("hub").unwrap()).unwrap();
        let x = t.position(g.node_id("x").unwrap()).unwrap();
        assert!((t.matrix.get(x, hub) - 1.0 / 3.0).abs() < 1e-12);
        assert!(t.matrix.get(hub, hub).abs() < 1e-12);
        // dead end column is uniform
        assert!((t.matrix.get(hub, x) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_arcs_add_up() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_arc(a, b, 1.0).unwrap();
        g.add_arc(a, b, 1.0).unwrap();
        g.add_arc(a, c, 1.0).unwrap();
        let t = TransitionMatrix::build(&g, 0.0).unwrap();
        assert!((t.matrix.get(1, 0) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_damping() {
        assert!(matches!(
            TransitionMatrix::build(&star(), 1.5),
            Err(RankpathError::InvalidDamping(_))
        ));
    }

    #[test]
    fn test_index_order_follows_names() {
        let t = TransitionMatrix::build(&star(), DEFAULT_DAMPING).unwrap();
        assert_eq!(t.names(), &["hub", "x", "y", "z"]);
        assert_eq!(t.name(2), Some("y"));
    }
}
