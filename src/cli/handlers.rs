// src/cli/handlers.rs
//! Command handlers behind the `rankpath` subcommands.

use crate::algo::{find_shortest_path, minimum_spanning_forest};
use crate::canvas::{Canvas, Color, ConsoleCanvas};
use crate::cli::args::{BuildMode, ForestArgs, GraphSource, PathArgs, RankArgs};
use crate::config::{io, Config};
use crate::graph::{build, random, Graph};
use crate::markov::TransitionMatrix;
use crate::rank;
use crate::reporting;
use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Loads the explicit config file, or `rankpath.toml` if present, and
/// validates it.
///
/// # Errors
/// Returns error if the file cannot be read, parsed, or fails validation.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading rankpath.toml")?,
    };
    config.validate()?;
    Ok(config)
}

/// Builds the graph described by `source`.
///
/// # Errors
/// Returns error if required files are missing or unreadable.
pub fn build_graph(source: &GraphSource, config: &Config) -> Result<Graph> {
    if source.random {
        let mut rng = match source.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let graph = match source.nodes {
            Some(n) => random::generate_with_count(&mut rng, &config.random, n),
            None => random::generate(&mut rng, &config.random),
        };
        return Ok(graph);
    }

    let (Some(entities_path), Some(input_path)) = (&source.entities, &source.input) else {
        bail!("either --random or both --entities and --input are required");
    };

    let mut entities = build::parse_entities(&read(entities_path)?);
    let mut excluded = config.exclusions()?;
    if let Some(extra) = &source.exclude {
        excluded.extend(io::parse_name_list(&read(extra)?));
    }
    let removed = build::apply_exclusions(&mut entities, &excluded);
    info!(entities = entities.len(), removed, "entity set ready");

    let content = read(input_path)?;
    let graph = match source.mode {
        BuildMode::References => build::build_references(&content, &entities),
        BuildMode::Cooccurrence => build::build_cooccurrence(&content, &entities),
    };
    info!(
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        "graph built"
    );
    Ok(graph)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Handles `rankpath rank`.
///
/// # Errors
/// Returns error if the graph cannot be built or the options are invalid.
pub fn handle_rank(args: &RankArgs, config: &Config) -> Result<()> {
    let mut rank_config = config.rank.clone();
    if let Some(d) = args.damping {
        rank_config.damping = d;
    }
    if let Some(n) = args.iterations {
        rank_config.iterations = n;
    }
    if let Some(k) = args.top {
        rank_config.top_k = k;
    }
    if args.tolerance.is_some() {
        rank_config.tolerance = args.tolerance;
    }
    if let Some(mode) = args.rank_mode {
        rank_config.mode = mode;
    }
    let merged = Config {
        rank: rank_config,
        ..config.clone()
    };
    merged.validate()?;

    let graph = build_graph(&args.source, config)?;
    let start = Instant::now();
    let transition = TransitionMatrix::build(&graph, merged.rank.damping)?;
    info!(n = transition.len(), "built the Markov matrix");

    let outcome = rank::rank(&transition, &merged.rank)?;
    if args.json {
        println!("{}", reporting::rank_outcome_json(&outcome)?);
    } else {
        reporting::print_rank_outcome(&outcome, args.every_round, start.elapsed());
    }
    Ok(())
}

/// Handles `rankpath path`.
///
/// # Errors
/// Returns error for unknown or identical endpoints.
pub fn handle_path(args: &PathArgs, config: &Config, verbose: bool) -> Result<()> {
    let graph = build_graph(&args.source, config)?;
    let start = graph.require(&args.from)?;
    let finish = graph.require(&args.to)?;

    let mut canvas = ConsoleCanvas::new(verbose);
    canvas.draw_graph(&graph, Color::LightGray);
    canvas.update_node(&graph, start, Color::Red, true);
    canvas.update_node(&graph, finish, Color::Red, true);

    let path = find_shortest_path(&graph, start, finish, &mut canvas)?;
    if !path.is_empty() {
        canvas.highlight_path(&graph, &path.arcs, Color::Red);
    }
    reporting::print_path(&graph, &path);
    canvas.clear();
    Ok(())
}

/// Handles `rankpath forest`.
///
/// # Errors
/// Returns error if the graph cannot be built.
pub fn handle_forest(args: &ForestArgs, config: &Config, verbose: bool) -> Result<()> {
    let graph = build_graph(&args.source, config)?;
    let mut canvas = ConsoleCanvas::new(verbose);
    canvas.draw_graph(&graph, Color::LightGray);

    let forest = minimum_spanning_forest(&graph, &mut canvas)?;
    reporting::print_forest(&graph, &forest);
    canvas.clear();
    Ok(())
}
