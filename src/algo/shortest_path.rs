// src/algo/shortest_path.rs
//! Dijkstra's algorithm over partial paths.
//!
//! The queue holds whole arc sequences from the start node keyed by their
//! total cost. A node is settled the first time a path ending at it is
//! extracted; later paths to a settled node are stale and skipped.

use crate::canvas::{Canvas, Color};
use crate::error::{RankpathError, Result};
use crate::graph::{ArcId, Graph, NodeId};
use crate::pqueue::HeapQueue;
use std::collections::HashMap;
use tracing::debug;

/// Result of a shortest-path search. An empty arc list means no path exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortestPath {
    pub arcs: Vec<ArcId>,
    pub cost: f64,
    /// Number of partial paths that settled a node.
    pub explored: usize,
}

impl ShortestPath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Finds the cheapest path from `start` to `finish`.
///
/// # Errors
/// Returns `SameEndpoints` if `start == finish` and `UnknownNode` if either
/// handle is not part of `graph`. Unreachable targets are not errors: they
/// produce an empty path.
pub fn find_shortest_path(
    graph: &Graph,
    start: NodeId,
    finish: NodeId,
    canvas: &mut dyn Canvas,
) -> Result<ShortestPath> {
    if start == finish {
        return Err(RankpathError::SameEndpoints {
            name: graph.name(start).to_string(),
        });
    }
    for id in [start, finish] {
        if graph.node(id).is_none() {
            return Err(RankpathError::UnknownNode(format!("#{}", id.0)));
        }
    }

    let mut settled: HashMap<NodeId, f64> = HashMap::new();
    settled.insert(start, 0.0);

    let mut queue: HeapQueue<Vec<ArcId>> = HeapQueue::new();
    for (arc_id, arc) in graph.out_arcs(start) {
        queue.insert(vec![arc_id], arc.cost);
    }

    let mut explored = 0;
    while !queue.is_empty() {
        let best = queue.extract_min()?;
        let Some(terminal) = best.key.last().and_then(|&a| graph.arc(a)).map(|a| a.to) else {
            continue;
        };
        if settled.contains_key(&terminal) {
            continue;
        }
        settled.insert(terminal, best.priority);
        explored += 1;

        if terminal == finish {
            debug!(cost = best.priority, explored, "reached goal");
            return Ok(ShortestPath {
                arcs: best.key,
                cost: best.priority,
                explored,
            });
        }

        debug!(
            node = graph.name(terminal),
            cost = best.priority,
            "exploring partial path"
        );
        canvas.highlight_path(graph, &best.key, Color::Blue);
        canvas.highlight_path(graph, &best.key, Color::LightGray);

        for (arc_id, arc) in graph.out_arcs(terminal) {
            if settled.contains_key(&arc.to) {
                continue;
            }
            let mut extended = best.key.clone();
            extended.push(arc_id);
            queue.insert(extended, best.priority + arc.cost);
        }
    }

    Ok(ShortestPath {
        explored,
        ..ShortestPath::default()
    })
}

/// Looks both endpoints up by name and runs `find_shortest_path`.
///
/// # Errors
/// Returns `UnknownNode` for missing names, plus everything
/// `find_shortest_path` reports.
pub fn find_shortest_path_by_name(
    graph: &Graph,
    start: &str,
    finish: &str,
    canvas: &mut dyn Canvas,
) -> Result<ShortestPath> {
    let start = graph.require(start)?;
    let finish = graph.require(finish)?;
    find_shortest_path(graph, start, finish, canvas)
}
