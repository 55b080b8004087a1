pub mod algo;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod markov;
pub mod pqueue;
pub mod rank;
pub mod reporting;
