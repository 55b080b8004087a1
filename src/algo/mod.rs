// src/algo/mod.rs
pub mod forest;
pub mod shortest_path;
pub mod spanning;

pub use forest::ForestMembership;
pub use shortest_path::{find_shortest_path, find_shortest_path_by_name, ShortestPath};
pub use spanning::{minimum_spanning_forest, SpanningForest};
