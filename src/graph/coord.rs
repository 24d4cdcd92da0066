use super::{Boundary, GraphNode, Offset};

/// Horizontal placement of a member relative to the anchor's origin.
///
/// `Left(n)` is a raw offset. `AxisX(n)` aligns the member's axis to the
/// anchor's axis shifted by `n`. The margin variants hang the member off the
/// anchor's left or right side with a gap of `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizontalDistance {
    Left(f32),
    AxisX(f32),
    LeftMargin(f32),
    RightMargin(f32),
}

impl HorizontalDistance {
    fn resolve(self, anchor: &Boundary, current: &Boundary) -> f32 {
        match self {
            HorizontalDistance::Left(n) => n,
            HorizontalDistance::AxisX(n) => anchor.axis_x - current.axis_x + n,
            HorizontalDistance::LeftMargin(n) => -(current.width + n),
            HorizontalDistance::RightMargin(n) => anchor.width + n,
        }
    }
}

/// Vertical placement of a member relative to the anchor's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalDistance {
    Top(f32),
    TopMargin(f32),
    BottomMargin(f32),
}

impl VerticalDistance {
    fn resolve(self, anchor: &Boundary, current: &Boundary) -> f32 {
        match self {
            VerticalDistance::Top(n) => n,
            VerticalDistance::TopMargin(n) => -(current.height + n),
            VerticalDistance::BottomMargin(n) => anchor.height + n,
        }
    }
}

/// A coordinate member: either a measured node or a nested coordinate group.
#[derive(Debug, Clone)]
pub enum CoordElement {
    Node(GraphNode),
    Coord(GraphCoord),
}

impl CoordElement {
    pub fn boundary(&self) -> Boundary {
        match self {
            CoordElement::Node(node) => node.boundary,
            CoordElement::Coord(coord) => coord.boundary,
        }
    }
}

impl From<GraphNode> for CoordElement {
    fn from(node: GraphNode) -> Self {
        CoordElement::Node(node)
    }
}

impl From<GraphCoord> for CoordElement {
    fn from(coord: GraphCoord) -> Self {
        CoordElement::Coord(coord)
    }
}

#[derive(Debug, Clone)]
struct Member {
    element: CoordElement,
    dx: f32,
    dy: f32,
}

/// A group of members positioned relative to one anchor member.
///
/// Relative distances may resolve to negative deltas (a member sticking out
/// left of or above the anchor); `shared_distance` is the normalization shift
/// that makes every member's position non-negative. The aggregate boundary
/// keeps the anchor's horizontal axis (shifted by the normalization) and
/// centers the vertical axis.
#[derive(Debug, Clone)]
pub struct GraphCoord {
    members: Vec<Member>,
    pub shared_distance: Offset,
    pub boundary: Boundary,
}

impl GraphCoord {
    pub fn new(
        anchor: impl Into<CoordElement>,
        relatives: Vec<(CoordElement, HorizontalDistance, VerticalDistance)>,
    ) -> Self {
        let anchor = anchor.into();
        let anchor_boundary = anchor.boundary();
        let mut members = Vec::with_capacity(relatives.len() + 1);
        members.push(Member {
            element: anchor,
            dx: 0.0,
            dy: 0.0,
        });
        for (element, dx, dy) in relatives {
            let boundary = element.boundary();
            members.push(Member {
                dx: dx.resolve(&anchor_boundary, &boundary),
                dy: dy.resolve(&anchor_boundary, &boundary),
                element,
            });
        }
        let mut coord = Self {
            members,
            shared_distance: Offset::default(),
            boundary: Boundary::default(),
        };
        coord.normalize();
        coord
    }

    fn normalize(&mut self) {
        let mut min_x = 0.0f32;
        let mut min_y = 0.0f32;
        for member in &self.members {
            min_x = min_x.min(member.dx);
            min_y = min_y.min(member.dy);
        }
        self.shared_distance = Offset {
            x: -min_x,
            y: -min_y,
        };

        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for member in &self.members {
            let boundary = member.element.boundary();
            width = width.max(member.dx + self.shared_distance.x + boundary.width);
            height = height.max(member.dy + self.shared_distance.y + boundary.height);
        }
        let anchor_boundary = self.members[0].element.boundary();
        self.boundary = Boundary {
            width,
            height,
            axis_x: anchor_boundary.axis_x + self.shared_distance.x,
            axis_y: height / 2.0,
        };
    }

    /// Place the group's top-left corner at `(x, y)`, assigning absolute
    /// offsets to every node, nested groups included.
    pub fn move_coord_to(&mut self, x: f32, y: f32) {
        for member in &mut self.members {
            let px = x + member.dx + self.shared_distance.x;
            let py = y + member.dy + self.shared_distance.y;
            match &mut member.element {
                CoordElement::Node(node) => node.offset = Offset { x: px, y: py },
                CoordElement::Coord(coord) => coord.move_coord_to(px, py),
            }
        }
    }

    /// Flatten into nodes, anchor first, in insertion order.
    pub fn into_nodes(self) -> Vec<GraphNode> {
        let mut nodes = Vec::new();
        self.collect(&mut nodes);
        nodes
    }

    fn collect(self, out: &mut Vec<GraphNode>) {
        for member in self.members {
            match member.element {
                CoordElement::Node(node) => out.push(node),
                CoordElement::Coord(coord) => coord.collect(out),
            }
        }
    }
}
