use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::request::MapRequest;

/// Opaque node identity (arena index).
///
/// Labels are display attributes only. Two nodes carrying the same label stay
/// distinct; the original label-as-key model silently merged them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of the tree, the overall topic.
    Central,
    /// First-level child of the central node.
    Subtopic,
    /// Leaf child of a subtopic node.
    Detail,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    /// Child ids in insertion order.
    pub children: Vec<NodeId>,
}

/// Parent-child edge. The graph only ever contains central→subtopic and
/// subtopic→detail edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub parent: NodeId,
    pub child: NodeId,
}

/// A mind-map tree, built once per render request and immutable afterwards.
#[derive(Debug, Clone)]
pub struct MindmapGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    root: NodeId,
}

impl MindmapGraph {
    /// Builds the tree for a request: one central node, one subtopic node per
    /// mapping entry, one detail node per detail string.
    ///
    /// Empty or whitespace-only labels are rejected instead of producing
    /// degenerate nodes.
    pub fn build(request: &MapRequest) -> Result<Self> {
        Self::from_topics(&request.central_topic, &request.subtopics)
    }

    pub fn from_topics(
        central_topic: &str,
        subtopics: &IndexMap<String, Vec<String>>,
    ) -> Result<Self> {
        if central_topic.trim().is_empty() {
            return Err(Error::EmptyCentralTopic);
        }

        let mut builder = GraphBuilder::default();
        let root = builder.push(central_topic, NodeKind::Central);

        for (subtopic_index, (subtopic, details)) in subtopics.iter().enumerate() {
            if subtopic.trim().is_empty() {
                return Err(Error::EmptySubtopicLabel {
                    index: subtopic_index,
                });
            }
            let subtopic_id = builder.push(subtopic, NodeKind::Subtopic);
            builder.attach(root, subtopic_id);

            for (detail_index, detail) in details.iter().enumerate() {
                if detail.trim().is_empty() {
                    return Err(Error::EmptyDetailLabel {
                        subtopic: subtopic.clone(),
                        index: detail_index,
                    });
                }
                let detail_id = builder.push(detail, NodeKind::Detail);
                builder.attach(subtopic_id, detail_id);
            }
        }

        Ok(Self {
            nodes: builder.nodes,
            edges: builder.edges,
            root,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    /// Tree invariant check: `nodes == edges + 1` and every node reachable
    /// from the root. Always holds for built graphs; exposed for callers that
    /// want to assert it.
    pub fn is_tree(&self) -> bool {
        if self.nodes.is_empty() || self.nodes.len() != self.edges.len() + 1 {
            return false;
        }
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                continue;
            }
            stack.extend(self.node(id).children.iter().copied());
        }
        seen.into_iter().all(|v| v)
    }
}

#[derive(Default)]
struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    fn push(&mut self, label: &str, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            label: label.to_string(),
            kind,
            children: Vec::new(),
        });
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.index()].children.push(child);
        self.edges.push(Edge { parent, child });
    }
}
