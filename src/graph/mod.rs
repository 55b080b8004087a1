// src/graph/mod.rs
pub mod build;
pub mod random;
pub mod store;

pub use store::{Arc, ArcId, Graph, Node, NodeId, Point};
