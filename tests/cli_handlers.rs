// tests/cli_handlers.rs
//! End-to-end runs of the command handlers over temporary input files.

use rankpath_core::cli::args::{BuildMode, ForestArgs, GraphSource, PathArgs, RankArgs};
use rankpath_core::cli::{build_graph, handle_forest, handle_path, handle_rank};
use rankpath_core::config::Config;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_inputs(dir: &Path) -> GraphSource {
    fs::write(dir.join("names.txt"), "A\nB\nC\nLondon").unwrap();
    fs::write(dir.join("links.txt"), "A\nB, London\nB\nC\nC\nA\n").unwrap();
    fs::write(dir.join("skip.txt"), "London\n").unwrap();
    GraphSource {
        entities: Some(dir.join("names.txt")),
        input: Some(dir.join("links.txt")),
        mode: BuildMode::References,
        exclude: Some(dir.join("skip.txt")),
        ..GraphSource::default()
    }
}

fn rank_args(source: GraphSource) -> RankArgs {
    RankArgs {
        source,
        damping: None,
        iterations: Some(4),
        top: Some(2),
        tolerance: None,
        rank_mode: None,
        every_round: true,
        json: false,
    }
}

#[test]
fn test_build_graph_from_files_applies_exclusions() {
    let d = TempDir::new().unwrap();
    let source = write_inputs(d.path());
    let g = build_graph(&source, &Config::default()).unwrap();
    assert_eq!(g.node_count(), 3);
    assert!(g.node_id("London").is_none());
    assert_eq!(g.arc_count(), 3);
}

#[test]
fn test_build_graph_requires_inputs() {
    let source = GraphSource::default();
    assert!(build_graph(&source, &Config::default()).is_err());
}

#[test]
fn test_random_graph_source_is_seeded() {
    let source = GraphSource {
        random: true,
        seed: Some(3),
        nodes: Some(12),
        ..GraphSource::default()
    };
    let a = build_graph(&source, &Config::default()).unwrap();
    let b = build_graph(&source, &Config::default()).unwrap();
    assert_eq!(a.node_count(), 12);
    assert_eq!(a.arc_count(), b.arc_count());
}

#[test]
fn test_rank_handler_runs() {
    let d = TempDir::new().unwrap();
    let args = rank_args(write_inputs(d.path()));
    handle_rank(&args, &Config::default()).unwrap();

    let json = RankArgs { json: true, ..args };
    handle_rank(&json, &Config::default()).unwrap();
}

#[test]
fn test_rank_handler_rejects_bad_override() {
    let d = TempDir::new().unwrap();
    let args = RankArgs {
        damping: Some(2.0),
        ..rank_args(write_inputs(d.path()))
    };
    assert!(handle_rank(&args, &Config::default()).is_err());
}

#[test]
fn test_path_handler() {
    let d = TempDir::new().unwrap();
    let source = write_inputs(d.path());
    let ok = PathArgs {
        source: source.clone(),
        from: "A".into(),
        to: "C".into(),
    };
    handle_path(&ok, &Config::default(), false).unwrap();

    let same = PathArgs {
        source: source.clone(),
        from: "A".into(),
        to: "A".into(),
    };
    assert!(handle_path(&same, &Config::default(), false).is_err());

    let unknown = PathArgs {
        source,
        from: "A".into(),
        to: "London".into(),
    };
    assert!(handle_path(&unknown, &Config::default(), false).is_err());
}

#[test]
fn test_forest_handler() {
    let source = GraphSource {
        random: true,
        seed: Some(9),
        ..GraphSource::default()
    };
    handle_forest(&ForestArgs { source }, &Config::default(), true).unwrap();
}
