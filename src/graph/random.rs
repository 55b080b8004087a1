// src/graph/random.rs
//! Synthetic graphs for demonstrating the path and forest solvers.
//!
//! Nodes are scattered over a canvas; each new node links to every earlier
//! node with a probability that falls off with distance, and the arc cost is
//! the Euclidean distance between the two.

use crate::config::RandomConfig;
use crate::graph::store::{Graph, Point};
use rand::Rng;
use tracing::debug;

/// Builds a random graph whose node count is drawn from the configured range.
pub fn generate<R: Rng>(rng: &mut R, config: &RandomConfig) -> Graph {
    let lo = config.min_nodes.min(config.max_nodes);
    let hi = config.min_nodes.max(config.max_nodes);
    let count = rng.gen_range(lo..=hi);
    generate_with_count(rng, config, count)
}

/// Builds a random graph with exactly `count` nodes named `"0"`, `"1"`, ...
pub fn generate_with_count<R: Rng>(rng: &mut R, config: &RandomConfig, count: usize) -> Graph {
    let mut graph = Graph::new();
    let mut placed: Vec<(crate::graph::NodeId, Point)> = Vec::with_capacity(count);

    for i in 0..count {
        let position = random_point(rng, config);
        let id = graph.add_node_at(&i.to_string(), position);

        for &(other, other_pos) in &placed {
            let distance = position.distance_to(&other_pos);
            if !rng.gen_bool(link_probability(distance, config)) {
                continue;
            }
            if let Err(e) = graph.connect(id, other, distance) {
                debug!("skipping random arc: {e}");
            }
        }
        placed.push((id, position));
    }

    debug!(
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        "generated random graph"
    );
    graph
}

fn random_point<R: Rng>(rng: &mut R, config: &RandomConfig) -> Point {
    let inset = f64::from(config.inset);
    let x_max = (f64::from(config.width) - inset).max(inset);
    let y_max = (f64::from(config.height) - inset).max(inset);
    Point {
        x: rng.gen_range(inset..=x_max),
        y: rng.gen_range(inset..=y_max),
    }
}

/// `max(0, 1 - distance / max_distance) ^ falloff`, clamped to `[0, 1]`.
#[must_use]
pub fn link_probability(distance: f64, config: &RandomConfig) -> f64 {
    if !config.max_distance.is_finite() || config.max_distance <= 0.0 {
        return 0.0;
    }
    let closeness = (1.0 - distance / config.max_distance).clamp(0.0, 1.0);
    closeness.powi(config.falloff).clamp(0.0, 1.0)
}
