// src/graph/store.rs
//! Arena-backed graph store.
//!
//! Nodes and arcs are allocated once into two owning vectors and addressed by
//! `NodeId` / `ArcId` handles. Nothing is removed individually; dropping the
//! `Graph` releases every node and arc exactly once.

use crate::error::{RankpathError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ArcId(pub usize);

/// Location of a node on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub position: Option<Point>,
    arcs: Vec<ArcId>,
}

impl Node {
    /// Outgoing arcs, in insertion order.
    #[must_use]
    pub fn arcs(&self) -> &[ArcId] {
        &self.arcs
    }

    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.arcs.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: f64,
}

/// Nodes, arcs, and a name index.
///
/// Every arc listed by a node is also in the global arc list, and both of its
/// endpoints are nodes of this graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
    index: BTreeMap<String, NodeId>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node named `name`, creating it if this is the first use.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        self.insert_node(name, None)
    }

    /// Like `add_node`, but records a canvas position for new nodes.
    pub fn add_node_at(&mut self, name: &str, position: Point) -> NodeId {
        self.insert_node(name, Some(position))
    }

    fn insert_node(&mut self, name: &str, position: Option<Point>) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_string(),
            position,
            arcs: Vec::new(),
        });
        self.index.insert(name.to_string(), id);
        id
    }

    /// Adds a directed arc.
    ///
    /// # Errors
    /// Returns `UnknownNode` if either endpoint is not in this graph, or
    /// `InvalidCost` for negative or non-finite costs.
    pub fn add_arc(&mut self, from: NodeId, to: NodeId, cost: f64) -> Result<ArcId> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(RankpathError::InvalidCost { cost });
        }
        for id in [from, to] {
            if id.0 >= self.nodes.len() {
                return Err(RankpathError::UnknownNode(format!("#{}", id.0)));
            }
        }
        let arc_id = ArcId(self.arcs.len());
        self.arcs.push(Arc { from, to, cost });
        if let Some(node) = self.nodes.get_mut(from.0) {
            node.arcs.push(arc_id);
        }
        Ok(arc_id)
    }

    /// Adds a pair of arcs with swapped endpoints and equal cost.
    ///
    /// # Errors
    /// Same conditions as `add_arc`.
    pub fn connect(&mut self, a: NodeId, b: NodeId, cost: f64) -> Result<(ArcId, ArcId)> {
        let forward = self.add_arc(a, b, cost)?;
        let backward = self.add_arc(b, a, cost)?;
        Ok((forward, backward))
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn arc(&self, id: ArcId) -> Option<&Arc> {
        self.arcs.get(id.0)
    }

    #[must_use]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Looks up a node by name.
    ///
    /// # Errors
    /// Returns `UnknownNode` if no node carries that name.
    pub fn require(&self, name: &str) -> Result<NodeId> {
        self.node_id(name)
            .ok_or_else(|| RankpathError::UnknownNode(name.to_string()))
    }

    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).map_or("", |n| n.name.as_str())
    }

    /// Outgoing arcs of `id` together with their handles.
    pub fn out_arcs(&self, id: NodeId) -> impl Iterator<Item = (ArcId, &Arc)> + '_ {
        self.node(id)
            .map(Node::arcs)
            .unwrap_or_default()
            .iter()
            .filter_map(|&a| self.arc(a).map(|arc| (a, arc)))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, &Arc)> + '_ {
        self.arcs.iter().enumerate().map(|(i, a)| (ArcId(i), a))
    }

    /// Node names and handles in index (lexicographic) order.
    pub fn indexed(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.index.iter().map(|(name, &id)| (name.as_str(), id))
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of the costs of `path`. Unknown handles contribute nothing.
    #[must_use]
    pub fn path_cost(&self, path: &[ArcId]) -> f64 {
        path.iter().filter_map(|&a| self.arc(a)).map(|a| a.cost).sum()
    }

    /// First node whose position lies within `radius` of `(x, y)`.
    #[must_use]
    pub fn node_at(&self, x: f64, y: f64, radius: f64) -> Option<NodeId> {
        let probe = Point { x, y };
        self.nodes()
            .find(|(_, n)| n.position.is_some_and(|p| p.distance_to(&probe) <= radius))
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let again = g.add_node("a");
        assert_eq!(a, again);
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn test_arc_membership_invariant() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let (fwd, back) = g.connect(a, b, 2.5).unwrap();

        assert_eq!(g.arc_count(), 2);
        for (id, node) in g.nodes() {
            for &arc_id in node.arcs() {
                let arc = g.arc(arc_id).unwrap();
                assert_eq!(arc.from, id);
                assert!(g.node(arc.to).is_some());
            }
        }
        assert_eq!(g.arc(fwd).map(|x| x.to), Some(b));
        assert_eq!(g.arc(back).map(|x| x.to), Some(a));
        assert!((g.path_cost(&[fwd, back]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_arcs() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        assert!(matches!(
            g.add_arc(a, a, -1.0),
            Err(RankpathError::InvalidCost { .. })
        ));
        assert!(matches!(
            g.add_arc(a, NodeId(9), 1.0),
            Err(RankpathError::UnknownNode(_))
        ));
        assert_eq!(g.arc_count(), 0);
    }

    #[test]
    fn test_index_order_is_lexicographic() {
        let mut g = Graph::new();
        for name in ["kant", "hume", "locke"] {
            g.add_node(name);
        }
        let names: Vec<&str> = g.indexed().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["hume", "kant", "locke"]);
    }

    #[test]
    fn test_node_at() {
        let mut g = Graph::new();
        let a = g.add_node_at("a", Point { x: 10.0, y: 10.0 });
        g.add_node("no-position");
        assert_eq!(g.node_at(12.0, 11.0, 5.0), Some(a));
        assert_eq!(g.node_at(100.0, 100.0, 5.0), None);
    }
}
