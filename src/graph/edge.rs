/// Axis-aligned direction of an edge segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl EdgeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeDirection::Up => "up",
            EdgeDirection::Down => "down",
            EdgeDirection::Left => "left",
            EdgeDirection::Right => "right",
        }
    }

    /// Unit vector of the direction.
    pub fn delta(&self) -> (f32, f32) {
        match self {
            EdgeDirection::Up => (0.0, -1.0),
            EdgeDirection::Down => (0.0, 1.0),
            EdgeDirection::Left => (-1.0, 0.0),
            EdgeDirection::Right => (1.0, 0.0),
        }
    }
}

/// Offset applied to an edge label relative to the segment midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelOptions {
    pub dx: f32,
    pub dy: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeOptions {
    pub dashed: bool,
    pub directed: bool,
    pub label: Option<String>,
    pub color: Option<String>,
    pub label_options: Option<LabelOptions>,
}

/// A straight connector segment. Start point plus direction and length; the
/// renderer derives the end point and arrowhead from these.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub direction: EdgeDirection,
    pub length: f32,
    pub options: EdgeOptions,
}

impl Edge {
    pub fn plain(
        id: impl Into<String>,
        x: f32,
        y: f32,
        direction: EdgeDirection,
        length: f32,
    ) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            direction,
            length,
            options: EdgeOptions::default(),
        }
    }

    /// Edge that ends in an arrowhead.
    pub fn directed(
        id: impl Into<String>,
        x: f32,
        y: f32,
        direction: EdgeDirection,
        length: f32,
    ) -> Self {
        let mut edge = Self::plain(id, x, y, direction, length);
        edge.options.directed = true;
        edge
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.options.label = Some(label.into());
        self
    }

    pub fn dashed(mut self) -> Self {
        self.options.dashed = true;
        self
    }

    pub fn end_point(&self) -> (f32, f32) {
        let (dx, dy) = self.direction.delta();
        (self.x + dx * self.length, self.y + dy * self.length)
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_point_follows_direction() {
        let down = Edge::plain("e", 10.0, 5.0, EdgeDirection::Down, 20.0);
        assert_eq!(down.end_point(), (10.0, 25.0));

        let left = Edge::plain("e", 10.0, 5.0, EdgeDirection::Left, 4.0);
        assert_eq!(left.end_point(), (6.0, 5.0));
    }

    #[test]
    fn builders_set_options() {
        let edge = Edge::directed("e", 0.0, 0.0, EdgeDirection::Down, 1.0)
            .with_label("True")
            .dashed();
        assert!(edge.options.directed);
        assert!(edge.options.dashed);
        assert_eq!(edge.options.label.as_deref(), Some("True"));
        assert!(edge.options.color.is_none());
    }

    #[test]
    fn translate_moves_the_start_point() {
        let mut edge = Edge::plain("e", 1.0, 2.0, EdgeDirection::Right, 3.0);
        edge.translate(10.0, 20.0);
        assert_eq!((edge.x, edge.y), (11.0, 22.0));
        assert_eq!(edge.end_point(), (14.0, 22.0));
    }
}
