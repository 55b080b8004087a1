// src/graph/build.rs
//! Graph construction from entity lists.
//!
//! Two modes are supported:
//! - co-occurrence: entities on the same line are pairwise connected in both
//!   directions with unit cost.
//! - references: alternating "subject" / "comma-delimited references" line
//!   pairs, connected as directed unit-cost arcs.
//!
//! Input anomalies never fail construction. Unknown names are dropped.

use crate::graph::store::Graph;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

/// The set of names allowed to become nodes.
pub type EntitySet = HashSet<String>;

/// Reads a newline-delimited entity list.
#[must_use]
pub fn parse_entities(content: &str) -> EntitySet {
    content.lines().map(str::to_string).collect()
}

/// Removes every excluded name from `entities`.
#[allow(clippy::implicit_hasher)]
pub fn apply_exclusions<'a, I>(entities: &mut EntitySet, excluded: I) -> usize
where
    I: IntoIterator<Item = &'a String>,
{
    let before = entities.len();
    for name in excluded {
        entities.remove(name);
    }
    before - entities.len()
}

/// Splits a line on single spaces.
///
/// A segment is only cut when the space is not the first character of what
/// remains, so runs of spaces and leading spaces stay glued to the token
/// that follows them.
#[must_use]
pub fn split_words(line: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut rest = line;
    while let Some(loc) = rest.find(' ').filter(|&loc| loc > 0) {
        words.push(&rest[..loc]);
        rest = &rest[loc + 1..];
    }
    words.push(rest);
    words
}

/// Splits a comma-delimited reference list.
///
/// Every token after the first drops its first character (the space that
/// follows the comma) unless it is a single character long.
#[must_use]
pub fn split_references(line: &str) -> Vec<&str> {
    let mut parts = line.split(',');
    let mut out = Vec::new();
    if let Some(first) = parts.next() {
        out.push(first);
    }
    for item in parts {
        let mut chars = item.char_indices();
        match (chars.next(), chars.next()) {
            (Some(_), Some((second, _))) => out.push(&item[second..]),
            _ => out.push(item),
        }
    }
    out
}

/// Builds a co-occurrence graph.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_cooccurrence(content: &str, entities: &EntitySet) -> Graph {
    let mut graph = Graph::new();

    for line in content.lines() {
        let present: BTreeSet<&str> = split_words(line)
            .into_iter()
            .filter(|w| entities.contains(*w))
            .collect();
        if present.is_empty() {
            continue;
        }
        let ids: Vec<_> = present.iter().map(|name| graph.add_node(name)).collect();
        debug!(line = line, entities = ids.len(), "co-occurrence group");

        for (i, &one) in ids.iter().enumerate() {
            for &two in ids.iter().skip(i + 1) {
                // Both ids come from this graph and unit cost is valid.
                if let Err(e) = graph.connect(one, two, 1.0) {
                    warn!("skipping co-occurrence pair: {e}");
                }
            }
        }
    }

    graph
}

/// Builds a directed reference graph.
///
/// Every entity becomes a node up front, so entities nobody mentions still
/// take part in ranking.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_references(content: &str, entities: &EntitySet) -> Graph {
    let mut graph = Graph::new();
    let mut sorted: Vec<&String> = entities.iter().collect();
    sorted.sort();
    for name in sorted {
        graph.add_node(name);
    }

    let mut lines = content.lines();
    while let Some(subject) = lines.next() {
        let Some(references) = lines.next() else {
            break;
        };
        let Some(from) = graph.node_id(subject) else {
            debug!(subject, "skipping record for unknown subject");
            continue;
        };
        for target in split_references(references) {
            if !entities.contains(target) {
                continue;
            }
            let Some(to) = graph.node_id(target) else {
                continue;
            };
            if let Err(e) = graph.add_arc(from, to, 1.0) {
                warn!("skipping reference arc: {e}");
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> EntitySet {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_split_words_glues_empty_segments() {
        assert_eq!(split_words("a b c"), vec!["a", "b", "c"]);
        assert_eq!(split_words("a  b"), vec!["a", " b"]);
        assert_eq!(split_words(" a b"), vec![" a b"]);
        assert_eq!(split_words(""), vec![""]);
    }

    #[test]
    fn test_split_references() {
        assert_eq!(split_references("A, B, C"), vec!["A", "B", "C"]);
        assert_eq!(split_references("A,B"), vec!["A", "B"]);
        assert_eq!(split_references("A,,x"), vec!["A", "", "x"]);
    }

    #[test]
    fn test_apply_exclusions() {
        let mut entities = set(&["a", "b", "c"]);
        let removed = apply_exclusions(&mut entities, &vec!["b".to_string(), "z".to_string()]);
        assert_eq!(removed, 1);
        assert!(!entities.contains("b"));
    }

    #[test]
    fn test_cooccurrence_skips_self_pairs_and_unknowns() {
        let g = build_cooccurrence("a b a x\nb c\n", &set(&["a", "b", "c"]));
        assert_eq!(g.node_count(), 3);
        // a-b on line 1, b-c on line 2, each as two arcs
        assert_eq!(g.arc_count(), 4);
        assert!(g.arcs().all(|(_, arc)| arc.from != arc.to));
    }
}
