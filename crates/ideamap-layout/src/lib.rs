#![forbid(unsafe_code)]

//! Headless 2D layout algorithms for mind-map graphs.
//!
//! Each algorithm is a pure function from a node/edge set to coordinates in
//! an abstract unit space; the renderer maps that space onto its viewport.
//! Layout never fails: the planar path falls back to spring when the input is
//! not a single rooted tree, and an unrecognized style name already resolved
//! to spring upstream.

mod planar;
mod ring;
mod spring;

use ideamap_core::{LayoutStyle, MindmapGraph, NodeId};

pub use ring::ShellPartition;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Positions indexed by [`NodeId`] arena order; one finite point per node.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    positions: Vec<Point>,
}

impl LayoutResult {
    pub(crate) fn new(positions: Vec<Point>) -> Self {
        Self { positions }
    }

    pub fn get(&self, id: NodeId) -> Point {
        self.positions[id.index()]
    }

    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Seed for the spring embedder's scatter phase. The original relied on
    /// unseeded library randomness; the seed is explicit here so identical
    /// inputs reproduce identical positions.
    pub random_seed: u64,
    pub spring_iterations: usize,
    pub shell_partition: ShellPartition,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            random_seed: 0,
            spring_iterations: 50,
            shell_partition: ShellPartition::default(),
        }
    }
}

/// Computes positions for every node under the selected algorithm.
pub fn layout(graph: &MindmapGraph, style: LayoutStyle, options: &LayoutOptions) -> LayoutResult {
    tracing::debug!(
        layout = style.name(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "computing mind-map layout"
    );
    match style {
        LayoutStyle::Spring => spring::layout(graph, options),
        LayoutStyle::Circular => ring::circular(graph),
        LayoutStyle::Shell => ring::shell(graph, options.shell_partition),
        LayoutStyle::Planar => match planar::layout(graph) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "planar embedding unavailable, using spring");
                spring::layout(graph, options)
            }
        },
    }
}
