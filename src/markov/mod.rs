// src/markov/mod.rs
pub mod matrix;
pub mod transition;

pub use matrix::{euclidean_distance, Matrix};
pub use transition::{TransitionMatrix, DEFAULT_DAMPING};
