use serde_json::Value;

use super::Boundary;

/// Position of a node's top-left corner relative to its container origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

/// A JSON payload paired with the path-like id a transformer assigned to it.
#[derive(Debug, Clone)]
pub struct IndexedNode {
    pub id: String,
    pub json: Value,
}

impl IndexedNode {
    pub fn new(id: impl Into<String>, json: Value) -> Self {
        Self { id: id.into(), json }
    }
}

/// A measured node being positioned inside a container. `data` keeps the
/// payload so layouters can read labels and per-kind fields without another
/// pass over the document.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub id: String,
    pub data: Value,
    pub boundary: Boundary,
    pub offset: Offset,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, data: Value, boundary: Boundary) -> Self {
        Self {
            id: id.into(),
            data,
            boundary,
            offset: Offset::default(),
        }
    }

    pub fn top(&self) -> f32 {
        self.offset.y
    }

    pub fn bottom(&self) -> f32 {
        self.offset.y + self.boundary.height
    }

    pub fn left(&self) -> f32 {
        self.offset.x
    }

    pub fn right(&self) -> f32 {
        self.offset.x + self.boundary.width
    }

    /// Absolute x of the flow axis.
    pub fn axis_x_abs(&self) -> f32 {
        self.offset.x + self.boundary.axis_x
    }

    /// Absolute y of the flow axis.
    pub fn axis_y_abs(&self) -> f32 {
        self.offset.y + self.boundary.axis_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absolute_accessors_follow_the_offset() {
        let mut node = GraphNode::new("a", json!({}), Boundary::new(10.0, 4.0));
        node.offset = Offset { x: 3.0, y: 7.0 };
        assert_eq!(node.left(), 3.0);
        assert_eq!(node.right(), 13.0);
        assert_eq!(node.top(), 7.0);
        assert_eq!(node.bottom(), 11.0);
        assert_eq!(node.axis_x_abs(), 8.0);
        assert_eq!(node.axis_y_abs(), 9.0);
    }
}
