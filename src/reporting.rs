//! Console output for rankings, paths and spanning forests.
//!
//! Ranking rows are formatted as `rank - name     score`, best first.

use crate::algo::{ShortestPath, SpanningForest};
use crate::canvas::describe_path;
use crate::graph::Graph;
use crate::rank::{RankOutcome, RankedNode};
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;
use std::time::Duration;

/// Plain-text ranking table, one row per entry.
#[must_use]
pub fn format_ranking(ranking: &[RankedNode]) -> String {
    let width = ranking.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for r in ranking {
        let _ = writeln!(out, "{:>4} - {:<width$}     {:.6}", r.rank, r.name, r.score);
    }
    out
}

/// Prints a ranking outcome. With `every_round`, the ranking of each round is
/// shown under its distance line; otherwise only the final ranking is.
pub fn print_rank_outcome(outcome: &RankOutcome, every_round: bool, elapsed: Duration) {
    if let Some(d) = outcome.initial_distance {
        println!("{} 0: {d:.6e}", "Distance".cyan());
    }
    for round in &outcome.rounds {
        println!("{} {}: {:.6e}", "Distance".cyan(), round.step, round.distance);
        if every_round {
            print!("{}", format_ranking(&round.top).dimmed());
        }
    }

    println!();
    print!("{}", format_ranking(&outcome.ranking));
    println!();

    let status = if outcome.converged {
        "converged".green().bold()
    } else {
        "finished".green()
    };
    println!(
        "{} Ranked {} nodes in {} rounds ({elapsed:?}).",
        "OK".green().bold(),
        outcome.scores.len(),
        outcome.rounds.len()
    );
    println!("   {} {status}", "=".blue());
}

/// Serializes a ranking outcome as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn rank_outcome_json(outcome: &RankOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

pub fn print_path(graph: &Graph, path: &ShortestPath) {
    if path.is_empty() {
        println!(
            "{} Could not find a path connecting the two endpoints ({} nodes explored).",
            "~".yellow().bold(),
            path.explored
        );
        return;
    }
    println!(
        "{} Shortest path (cost: {}): {}",
        "OK".green().bold(),
        path.cost,
        describe_path(graph, &path.arcs).red().bold()
    );
    println!("   {} {} nodes explored", "=".blue(), path.explored);
}

pub fn print_forest(graph: &Graph, forest: &SpanningForest) {
    for &arc_id in &forest.arcs {
        if let Some(arc) = graph.arc(arc_id) {
            println!(
                "  {} {} -- {} (cost: {})",
                "-->".blue(),
                graph.name(arc.from),
                graph.name(arc.to),
                arc.cost
            );
        }
    }
    let label = if forest.tree_count() == 1 { "tree" } else { "trees" };
    println!(
        "{} Spanning forest: {} arcs, {} {label}, total cost {:.3}.",
        "OK".green().bold(),
        forest.arcs.len(),
        forest.tree_count(),
        forest.cost
    );
    println!(
        "   {} skipped {} arcs that would introduce a cycle",
        "=".blue(),
        forest.rejected
    );
}
