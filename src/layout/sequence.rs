use super::*;

/// Stack nodes top to bottom on a shared axis with connector edges between
/// them. `with_head_edge` / `with_trailing_edge` add the half-interval
/// stubs that join the group to its surroundings.
pub(super) fn compute_sequence_layout(
    nodes: Vec<GraphNode>,
    with_head_edge: bool,
    with_trailing_edge: bool,
    config: &LayoutConfig,
) -> GraphLayout {
    if nodes.is_empty() {
        return GraphLayout::default();
    }
    let bounds: Vec<Boundary> = nodes.iter().map(|n| n.boundary).collect();
    let boundary =
        calculators::calculate_sequence_boundary(&bounds, with_head_edge, with_trailing_edge, config);
    let stub = config.edge_stub();

    let mut nodes = nodes;
    let mut y = if with_head_edge { stub } else { 0.0 };
    for node in &mut nodes {
        node.offset = Offset {
            x: boundary.axis_x - node.boundary.axis_x,
            y,
        };
        y += node.boundary.height + config.element_interval_y;
    }

    let mut edges = Vec::new();
    if with_head_edge {
        edges.push(Edge::directed(
            format!("edge/{}/head", nodes[0].id),
            boundary.axis_x,
            0.0,
            EdgeDirection::Down,
            stub,
        ));
    }
    for pair in nodes.windows(2) {
        edges.push(Edge::directed(
            format!("edge/{}/next", pair[0].id),
            boundary.axis_x,
            pair[0].bottom(),
            EdgeDirection::Down,
            pair[1].top() - pair[0].bottom(),
        ));
    }
    if with_trailing_edge {
        let last = &nodes[nodes.len() - 1];
        edges.push(Edge::directed(
            format!("edge/{}/trailing", last.id),
            boundary.axis_x,
            last.bottom(),
            EdgeDirection::Down,
            stub,
        ));
    }

    GraphLayout {
        boundary,
        nodes,
        edges,
    }
}
