//! Circular and shell layouts: nodes evenly spaced on one or more rings.

use ideamap_core::{MindmapGraph, NodeId, NodeKind};

use crate::{LayoutResult, Point};

/// How the shell layout groups nodes onto concentric rings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShellPartition {
    /// Every node on one ring. This is what the original shipped: it never
    /// passed an explicit grouping, so shell degenerated to a circle.
    /// Preserved as the default so existing renders do not silently change.
    #[default]
    Single,
    /// Central at the origin, subtopics on an inner ring, details on an
    /// outer ring.
    ByKind,
}

/// Twelve-o'clock-is-zero polar convention with y increasing downwards.
fn polar_xy(radius: f64, angle: f64) -> Point {
    Point {
        x: radius * angle.sin(),
        y: -radius * angle.cos(),
    }
}

fn place_ring(positions: &mut [Point], ids: &[NodeId], radius: f64) {
    if ids.len() == 1 {
        // A one-node ring keeps its radius, pinned at twelve o'clock.
        positions[ids[0].index()] = Point { x: 0.0, y: -radius };
        return;
    }
    let step = std::f64::consts::TAU / ids.len() as f64;
    for (i, id) in ids.iter().enumerate() {
        positions[id.index()] = polar_xy(radius, step * i as f64);
    }
}

/// All nodes evenly spaced on a unit circle, in arena (insertion) order.
/// Deterministic for identical input order.
pub(crate) fn circular(graph: &MindmapGraph) -> LayoutResult {
    let n = graph.node_count();
    let mut positions = vec![Point { x: 0.0, y: 0.0 }; n];
    if n == 1 {
        return LayoutResult::new(positions);
    }
    let ids: Vec<NodeId> = graph.nodes().iter().map(|node| node.id).collect();
    place_ring(&mut positions, &ids, 1.0);
    LayoutResult::new(positions)
}

/// Concentric rings per [`ShellPartition`]. With the default single shell,
/// this matches [`circular`] exactly.
pub(crate) fn shell(graph: &MindmapGraph, partition: ShellPartition) -> LayoutResult {
    match partition {
        ShellPartition::Single => circular(graph),
        ShellPartition::ByKind => {
            let n = graph.node_count();
            let mut positions = vec![Point { x: 0.0, y: 0.0 }; n];

            let ring = |kind: NodeKind| -> Vec<NodeId> {
                graph.nodes_of_kind(kind).map(|node| node.id).collect()
            };
            // Central stays at the origin (initialized above).
            let subtopics = ring(NodeKind::Subtopic);
            if !subtopics.is_empty() {
                place_ring(&mut positions, &subtopics, 0.5);
            }
            let details = ring(NodeKind::Detail);
            if !details.is_empty() {
                place_ring(&mut positions, &details, 1.0);
            }
            LayoutResult::new(positions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideamap_core::MapRequest;

    fn graph() -> MindmapGraph {
        let request = MapRequest::new("Project X")
            .with_subtopic("Design", ["UI", "API"])
            .with_subtopic("Testing", ["Unit", "Integration"]);
        MindmapGraph::build(&request).unwrap()
    }

    #[test]
    fn circular_is_deterministic_and_on_the_unit_circle() {
        let g = graph();
        let a = circular(&g);
        let b = circular(&g);
        assert_eq!(a.positions(), b.positions());
        for p in a.positions() {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn circular_positions_are_distinct() {
        let result = circular(&graph());
        for (i, a) in result.positions().iter().enumerate() {
            for b in result.positions().iter().skip(i + 1) {
                assert!((a.x - b.x).abs() > 1e-9 || (a.y - b.y).abs() > 1e-9);
            }
        }
    }

    #[test]
    fn default_shell_matches_circular() {
        let g = graph();
        assert_eq!(
            shell(&g, ShellPartition::Single).positions(),
            circular(&g).positions()
        );
    }

    #[test]
    fn by_kind_shell_separates_rings() {
        let g = graph();
        let result = shell(&g, ShellPartition::ByKind);
        let radius = |id: ideamap_core::NodeId| {
            let p = result.get(id);
            (p.x * p.x + p.y * p.y).sqrt()
        };
        assert!(radius(g.root()) < 1e-9);
        for node in g.nodes_of_kind(NodeKind::Subtopic) {
            assert!((radius(node.id) - 0.5).abs() < 1e-9);
        }
        for node in g.nodes_of_kind(NodeKind::Detail) {
            assert!((radius(node.id) - 1.0).abs() < 1e-9);
        }
    }
}
