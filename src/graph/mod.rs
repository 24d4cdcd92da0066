//! Geometry primitives shared by measurement, layout and rendering.

pub mod boundary;
pub mod coord;
pub mod edge;
pub mod layout;
pub mod node;

pub use boundary::Boundary;
pub use coord::{CoordElement, GraphCoord, HorizontalDistance, VerticalDistance};
pub use edge::{Edge, EdgeDirection, EdgeOptions, LabelOptions};
pub use layout::GraphLayout;
pub use node::{GraphNode, IndexedNode, Offset};
