// src/algo/forest.rs
//! Forest membership: a partition of nodes into disjoint groups.
//!
//! Each group keeps its member list so that a merge can relabel the absorbed
//! members directly. The smaller group is always absorbed into the larger.

use crate::graph::NodeId;

#[derive(Debug, Clone)]
pub struct ForestMembership {
    /// `group[i]` = group id of node i.
    group: Vec<usize>,
    /// Member lists indexed by group id. Absorbed groups are left empty.
    members: Vec<Vec<NodeId>>,
    groups: usize,
}

impl ForestMembership {
    /// One singleton group per node.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            group: (0..node_count).collect(),
            members: (0..node_count).map(|i| vec![NodeId(i)]).collect(),
            groups: node_count,
        }
    }

    #[must_use]
    pub fn group_of(&self, node: NodeId) -> Option<usize> {
        self.group.get(node.0).copied()
    }

    #[must_use]
    pub fn same_group(&self, a: NodeId, b: NodeId) -> bool {
        match (self.group_of(a), self.group_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Number of disjoint groups remaining.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups
    }

    #[must_use]
    pub fn members(&self, group: usize) -> &[NodeId] {
        self.members.get(group).map(Vec::as_slice).unwrap_or_default()
    }

    /// Merges the groups of `a` and `b`.
    ///
    /// Returns the surviving group id, or `None` if both already share a group
    /// or either node is unknown.
    pub fn merge(&mut self, a: NodeId, b: NodeId) -> Option<usize> {
        let (ga, gb) = (self.group_of(a)?, self.group_of(b)?);
        if ga == gb {
            return None;
        }
        let (keep, absorb) = if self.members(ga).len() >= self.members(gb).len() {
            (ga, gb)
        } else {
            (gb, ga)
        };

        let moved = self.members.get_mut(absorb).map(std::mem::take).unwrap_or_default();
        for node in &moved {
            if let Some(slot) = self.group.get_mut(node.0) {
                *slot = keep;
            }
        }
        if let Some(list) = self.members.get_mut(keep) {
            list.extend(moved);
        }
        self.groups -= 1;
        Some(keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let f = ForestMembership::new(3);
        assert_eq!(f.group_count(), 3);
        assert!(!f.same_group(NodeId(0), NodeId(1)));
        assert!(f.same_group(NodeId(2), NodeId(2)));
    }

    #[test]
    fn test_merge_relabels_smaller_group() {
        let mut f = ForestMembership::new(4);
        let g01 = f.merge(NodeId(0), NodeId(1)).unwrap();
        let survivor = f.merge(NodeId(2), NodeId(0)).unwrap();
        assert_eq!(survivor, g01, "larger group survives");
        assert!(f.same_group(NodeId(1), NodeId(2)));
        assert_eq!(f.members(survivor).len(), 3);
        assert_eq!(f.group_count(), 2);
        assert_eq!(f.merge(NodeId(1), NodeId(2)), None);
    }

    #[test]
    fn test_unknown_nodes() {
        let mut f = ForestMembership::new(2);
        assert_eq!(f.merge(NodeId(0), NodeId(5)), None);
        assert!(!f.same_group(NodeId(0), NodeId(5)));
    }
}
