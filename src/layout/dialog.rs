use super::*;

/// Root canvas: trigger lanes stacked top to bottom, left-aligned. Lanes are
/// independent flows, so no edges run between them.
pub(super) fn compute_dialog_layout(lanes: Vec<GraphNode>, config: &LayoutConfig) -> GraphLayout {
    let bounds: Vec<Boundary> = lanes.iter().map(|lane| lane.boundary).collect();
    let boundary = calculators::calculate_dialog_boundary(&bounds, config);

    let mut nodes = Vec::with_capacity(lanes.len());
    let mut y = 0.0;
    for mut lane in lanes {
        let height = lane.boundary.height;
        lane.offset = Offset { x: 0.0, y };
        nodes.push(lane);
        y += height + config.trigger_interval_y;
    }

    GraphLayout {
        boundary,
        nodes,
        edges: Vec::new(),
    }
}
