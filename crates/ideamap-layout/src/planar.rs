//! Planar layout: a radial straight-line embedding.
//!
//! Every tree admits a planar embedding, and a radial placement that gives
//! each subtree its own angular wedge never crosses edges. The structure is
//! checked anyway: if the input is not a single tree rooted at the central
//! node (for example disconnected), the caller falls back to spring instead
//! of surfacing a failure.

use ideamap_core::{MindmapGraph, NodeId};

use crate::{LayoutResult, Point};

#[derive(Debug, thiserror::Error)]
pub(crate) enum StructureError {
    #[error("graph is not a single tree rooted at the central node ({nodes} nodes, {edges} edges)")]
    NotATree { nodes: usize, edges: usize },
}

pub(crate) fn layout(graph: &MindmapGraph) -> Result<LayoutResult, StructureError> {
    if !graph.is_tree() {
        return Err(StructureError::NotATree {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        });
    }

    let n = graph.node_count();
    let mut positions = vec![Point { x: 0.0, y: 0.0 }; n];
    if n == 1 {
        return Ok(LayoutResult::new(positions));
    }

    let leaves = leaf_counts(graph);
    place_subtree(
        graph,
        &leaves,
        graph.root(),
        0,
        0.0,
        std::f64::consts::TAU,
        &mut positions,
    );
    Ok(LayoutResult::new(positions))
}

/// Number of leaves under each node (a leaf counts itself). Used to size
/// angular wedges so crowded subtrees get proportionally more room.
fn leaf_counts(graph: &MindmapGraph) -> Vec<usize> {
    let mut counts = vec![0usize; graph.node_count()];
    // Arena order puts parents before children, so a reverse sweep sees every
    // child before its parent.
    for node in graph.nodes().iter().rev() {
        if node.children.is_empty() {
            counts[node.id.index()] = 1;
        } else {
            counts[node.id.index()] = node
                .children
                .iter()
                .map(|child| counts[child.index()])
                .sum();
        }
    }
    counts
}

fn place_subtree(
    graph: &MindmapGraph,
    leaves: &[usize],
    id: NodeId,
    depth: usize,
    wedge_start: f64,
    wedge_end: f64,
    positions: &mut [Point],
) {
    if depth > 0 {
        let angle = (wedge_start + wedge_end) / 2.0;
        let radius = depth as f64 * 0.5;
        positions[id.index()] = Point {
            x: radius * angle.sin(),
            y: -radius * angle.cos(),
        };
    }

    let total = leaves[id.index()].max(1) as f64;
    let mut start = wedge_start;
    for child in &graph.node(id).children {
        let share = leaves[child.index()] as f64 / total;
        let end = start + (wedge_end - wedge_start) * share;
        place_subtree(graph, leaves, *child, depth + 1, start, end, positions);
        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideamap_core::MapRequest;
    use rustc_hash::FxHashSet;

    fn graph() -> MindmapGraph {
        let request = MapRequest::new("Project X")
            .with_subtopic("Design", ["UI", "API"])
            .with_subtopic("Testing", ["Unit", "Integration"]);
        MindmapGraph::build(&request).unwrap()
    }

    #[test]
    fn seven_node_tree_gets_seven_distinct_finite_positions() {
        let result = layout(&graph()).unwrap();
        assert_eq!(result.len(), 7);
        let mut seen = FxHashSet::default();
        for p in result.positions() {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!(seen.insert((p.x.to_bits(), p.y.to_bits())));
        }
    }

    #[test]
    fn root_sits_at_the_origin() {
        let g = graph();
        let result = layout(&g).unwrap();
        let p = result.get(g.root());
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn details_sit_inside_their_subtopic_wedge() {
        // Each child's angle must stay within its parent subtree's wedge,
        // which is what makes the embedding planar. Spot-check: details of
        // the first subtopic are all in the first half-plane wedge assigned
        // to it (two subtopics with equal leaf counts split TAU evenly).
        let g = graph();
        let result = layout(&g).unwrap();
        let angle = |id: ideamap_core::NodeId| {
            let p = result.get(id);
            // Invert the twelve-o'clock convention used by the placement.
            let a = p.x.atan2(-p.y);
            if a < 0.0 { a + std::f64::consts::TAU } else { a }
        };
        let first_subtopic = &g.node(g.root()).children[0];
        for detail in &g.node(*first_subtopic).children {
            assert!(angle(*detail) <= std::f64::consts::PI + 1e-9);
        }
    }
}
