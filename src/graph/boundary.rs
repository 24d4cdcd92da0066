/// Measured extent of a node or subtree. The axis point is where incoming
/// and outgoing flow attaches; children of a container are aligned by axis,
/// not by their top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Boundary {
    pub width: f32,
    pub height: f32,
    pub axis_x: f32,
    pub axis_y: f32,
}

impl Boundary {
    /// Boundary with the axis at the center, the common case for plain boxes.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            axis_x: width / 2.0,
            axis_y: height / 2.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 && self.height <= 0.0
    }

    /// Extent to the right of the axis.
    pub fn right_of_axis(&self) -> f32 {
        self.width - self.axis_x
    }

    /// Extent below the axis.
    pub fn below_axis(&self) -> f32 {
        self.height - self.axis_y
    }
}
