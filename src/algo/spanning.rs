// src/algo/spanning.rs
//! Kruskal's minimum spanning forest.

use crate::algo::forest::ForestMembership;
use crate::canvas::{Canvas, Color};
use crate::error::Result;
use crate::graph::{ArcId, Graph};
use crate::pqueue::HeapQueue;
use tracing::debug;

/// Accepted arcs of a minimum spanning forest.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    pub arcs: Vec<ArcId>,
    pub cost: f64,
    /// Arcs skipped because they would have closed a cycle.
    pub rejected: usize,
    pub membership: ForestMembership,
}

impl SpanningForest {
    /// Number of trees in the forest (connected components of the input).
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.membership.group_count()
    }
}

/// Builds a minimum spanning forest of `graph`, treating arcs as undirected
/// connections.
///
/// # Errors
/// Only fails if the internal queue is drained out of step with its length,
/// which would be a bug.
pub fn minimum_spanning_forest(graph: &Graph, canvas: &mut dyn Canvas) -> Result<SpanningForest> {
    let mut membership = ForestMembership::new(graph.node_count());
    let mut queue: HeapQueue<ArcId> = graph.arcs().map(|(id, arc)| (id, arc.cost)).collect();

    let mut accepted = Vec::with_capacity(graph.node_count().saturating_sub(1));
    let mut cost = 0.0;
    let mut rejected = 0;

    while !queue.is_empty() {
        let lightest = queue.extract_min()?;
        let Some(arc) = graph.arc(lightest.key) else {
            continue;
        };
        if membership.merge(arc.from, arc.to).is_none() {
            debug!(cost = arc.cost, "skipping edge that would introduce a cycle");
            rejected += 1;
            continue;
        }
        debug!(cost = arc.cost, "adding edge to merge two forests");
        canvas.update_arc(graph, lightest.key, Color::Blue, true);
        accepted.push(lightest.key);
        cost += arc.cost;
    }

    Ok(SpanningForest {
        arcs: accepted,
        cost,
        rejected,
        membership,
    })
}
