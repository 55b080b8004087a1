// src/canvas.rs
//! Progress display for the solvers.
//!
//! The solvers only ever push color updates into a `Canvas`; nothing a canvas
//! returns feeds back into an algorithm.

use crate::graph::{ArcId, Graph, NodeId};
use colored::{ColoredString, Colorize};
use std::io::Write;

/// Default hit radius used by `find_node_at`.
pub const NODE_RADIUS: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Faint background color for explored or idle elements.
    LightGray,
    Blue,
    Red,
}

impl Color {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::LightGray => text.dimmed(),
            Self::Blue => text.blue(),
            Self::Red => text.red().bold(),
        }
    }
}

pub trait Canvas {
    /// Draws every node and arc of `graph` in `color`.
    fn draw_graph(&mut self, graph: &Graph, color: Color);

    /// Recolors a node. `immediate` forces a repaint right away.
    fn update_node(&mut self, graph: &Graph, node: NodeId, color: Color, immediate: bool);

    /// Recolors an arc. `immediate` forces a repaint right away.
    fn update_arc(&mut self, graph: &Graph, arc: ArcId, color: Color, immediate: bool);

    /// Highlights the arcs of `path` and their incident nodes.
    fn highlight_path(&mut self, graph: &Graph, path: &[ArcId], color: Color);

    /// Returns the node drawn at `(x, y)`, if any.
    fn find_node_at(&self, graph: &Graph, x: f64, y: f64) -> Option<NodeId> {
        graph.node_at(x, y, NODE_RADIUS)
    }

    fn clear(&mut self);
}

/// Canvas that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn draw_graph(&mut self, _graph: &Graph, _color: Color) {}
    fn update_node(&mut self, _graph: &Graph, _node: NodeId, _color: Color, _immediate: bool) {}
    fn update_arc(&mut self, _graph: &Graph, _arc: ArcId, _color: Color, _immediate: bool) {}
    fn highlight_path(&mut self, _graph: &Graph, _path: &[ArcId], _color: Color) {}
    fn clear(&mut self) {}
}

/// Renders canvas updates as colored terminal lines.
///
/// Light-gray updates only fade what was already shown, so they are printed
/// only in verbose mode.
#[derive(Debug, Default, Clone)]
pub struct ConsoleCanvas {
    verbose: bool,
    lines: usize,
}

impl ConsoleCanvas {
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self { verbose, lines: 0 }
    }

    /// Number of lines printed since the last `clear`.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    fn visible(&self, color: Color) -> bool {
        self.verbose || color != Color::LightGray
    }

    fn emit(&mut self, text: &str, color: Color, immediate: bool) {
        if !self.visible(color) {
            return;
        }
        println!("  {} {}", "|".blue(), color.paint(text));
        self.lines += 1;
        if immediate {
            let _ = std::io::stdout().flush();
        }
    }
}

/// Formats an arc path as `a -> b -> c`.
#[must_use]
pub fn describe_path(graph: &Graph, path: &[ArcId]) -> String {
    let mut names: Vec<&str> = Vec::with_capacity(path.len() + 1);
    if let Some(first) = path.first().and_then(|&a| graph.arc(a)) {
        names.push(graph.name(first.from));
    }
    names.extend(
        path.iter()
            .filter_map(|&a| graph.arc(a))
            .map(|arc| graph.name(arc.to)),
    );
    names.join(" -> ")
}

impl Canvas for ConsoleCanvas {
    fn draw_graph(&mut self, graph: &Graph, color: Color) {
        let text = format!(
            "graph: {} nodes, {} arcs",
            graph.node_count(),
            graph.arc_count()
        );
        self.emit(&text, color, true);
    }

    fn update_node(&mut self, graph: &Graph, node: NodeId, color: Color, immediate: bool) {
        let text = format!("node {}", graph.name(node));
        self.emit(&text, color, immediate);
    }

    fn update_arc(&mut self, graph: &Graph, arc: ArcId, color: Color, immediate: bool) {
        let Some(a) = graph.arc(arc) else {
            return;
        };
        let text = format!(
            "arc {} -> {} (cost: {})",
            graph.name(a.from),
            graph.name(a.to),
            a.cost
        );
        self.emit(&text, color, immediate);
    }

    fn highlight_path(&mut self, graph: &Graph, path: &[ArcId], color: Color) {
        let text = format!(
            "path {} (cost: {})",
            describe_path(graph, path),
            graph.path_cost(path)
        );
        self.emit(&text, color, true);
    }

    fn clear(&mut self) {
        self.lines = 0;
    }
}
