use super::{Boundary, Edge, GraphNode};

/// Result of laying out one container: the container's boundary plus its
/// immediate children and connector edges, all in container-local
/// coordinates.
#[derive(Debug, Clone, Default)]
pub struct GraphLayout {
    pub boundary: Boundary,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<Edge>,
}

impl GraphLayout {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }
}
