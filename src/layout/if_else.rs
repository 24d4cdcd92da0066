use super::*;

const TRUE_LABEL: &str = "True";
const FALSE_LABEL: &str = "False";

/// If/else container: header card, diamond, then the two branch slots side
/// by side. The true branch hangs off the spine; the false lane runs right
/// from the diamond and drops next to it. Empty branches collapse into
/// bypass lanes that fall straight through to the closing bus.
pub(super) fn compute_if_else_layout(
    condition: Option<GraphNode>,
    choice: Option<GraphNode>,
    if_group: GraphNode,
    else_group: GraphNode,
    config: &LayoutConfig,
) -> GraphLayout {
    let (Some(condition), Some(choice)) = (condition, choice) else {
        return GraphLayout::default();
    };
    let boundary = calculators::calculate_if_else_boundary(
        Some(&condition.boundary),
        Some(&choice.boundary),
        &if_group.boundary,
        &else_group.boundary,
        config,
    );
    let gap = config.branch_interval_y;
    let choice_height = choice.boundary.height;
    let if_present = !if_group.boundary.is_empty();
    let else_present = !else_group.boundary.is_empty();
    let container_id = condition.id.clone();
    let choice_id = choice.id.clone();
    let if_id = if_group.id.clone();
    let else_id = else_group.id.clone();

    let row = GraphCoord::new(
        if_group,
        vec![(
            else_group.into(),
            HorizontalDistance::RightMargin(config.branch_interval_x),
            VerticalDistance::Top(0.0),
        )],
    );
    let mut stack = GraphCoord::new(
        condition,
        vec![
            (
                choice.into(),
                HorizontalDistance::AxisX(0.0),
                VerticalDistance::BottomMargin(gap),
            ),
            (
                row.into(),
                HorizontalDistance::AxisX(0.0),
                VerticalDistance::BottomMargin(gap + choice_height + gap),
            ),
        ],
    );
    stack.move_coord_to(0.0, 0.0);
    let mut placed = stack.into_nodes();

    let spine_x = boundary.axis_x;
    let bus_y = boundary.height;
    let cond_bottom = placed[0].bottom();
    let choice_top = placed[1].top();
    let choice_bottom = placed[1].bottom();
    let choice_right = placed[1].right();
    let choice_mid_y = placed[1].axis_y_abs();
    let if_top = placed[2].top();
    let if_bottom = placed[2].bottom();
    let else_top = placed[3].top();
    let else_bottom = placed[3].bottom();
    // for an empty else slot this is the bypass lane's x
    let false_x = placed[3].axis_x_abs();

    let true_label = LabelOptions { dx: -18.0, dy: 0.0 };
    let false_label = LabelOptions { dx: 0.0, dy: -8.0 };

    let mut edges = vec![Edge::plain(
        format!("edge/{choice_id}/in"),
        spine_x,
        cond_bottom,
        EdgeDirection::Down,
        choice_top - cond_bottom,
    )];

    if if_present {
        let mut entry = Edge::directed(
            format!("edge/{if_id}/in"),
            spine_x,
            choice_bottom,
            EdgeDirection::Down,
            if_top - choice_bottom,
        )
        .with_label(TRUE_LABEL);
        entry.options.label_options = Some(true_label);
        edges.push(entry);
        edges.push(Edge::plain(
            format!("edge/{if_id}/out"),
            spine_x,
            if_bottom,
            EdgeDirection::Down,
            bus_y - if_bottom,
        ));
    } else {
        let mut bypass = Edge::plain(
            format!("edge/{if_id}/bypass"),
            spine_x,
            choice_bottom,
            EdgeDirection::Down,
            bus_y - choice_bottom,
        )
        .with_label(TRUE_LABEL);
        bypass.options.label_options = Some(true_label);
        edges.push(bypass);
    }

    let mut run = Edge::plain(
        format!("edge/{else_id}/run"),
        choice_right,
        choice_mid_y,
        EdgeDirection::Right,
        false_x - choice_right,
    )
    .with_label(FALSE_LABEL);
    run.options.label_options = Some(false_label);
    edges.push(run);

    if else_present {
        edges.push(Edge::directed(
            format!("edge/{else_id}/in"),
            false_x,
            choice_mid_y,
            EdgeDirection::Down,
            else_top - choice_mid_y,
        ));
        edges.push(Edge::plain(
            format!("edge/{else_id}/out"),
            false_x,
            else_bottom,
            EdgeDirection::Down,
            bus_y - else_bottom,
        ));
    } else {
        edges.push(Edge::plain(
            format!("edge/{else_id}/bypass"),
            false_x,
            choice_mid_y,
            EdgeDirection::Down,
            bus_y - choice_mid_y,
        ));
    }

    edges.push(Edge::plain(
        format!("edge/{container_id}/bus"),
        false_x,
        bus_y,
        EdgeDirection::Left,
        false_x - spine_x,
    ));

    placed.retain(|node| !node.boundary.is_empty());

    GraphLayout {
        boundary,
        nodes: placed,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(id: &str, width: f32, height: f32) -> GraphNode {
        GraphNode::new(id, json!({}), Boundary::new(width, height))
    }

    fn empty_group(id: &str) -> GraphNode {
        GraphNode::new(id, json!({}), Boundary::default())
    }

    fn condition() -> GraphNode {
        node("c", 200.0, 48.0)
    }

    fn choice() -> GraphNode {
        node("c.choice", 30.0, 12.0)
    }

    fn branch(id: &str) -> GraphNode {
        // the size a one-step group measures to
        node(id, 200.0, 68.0)
    }

    fn directed_count(layout: &GraphLayout) -> usize {
        layout.edges.iter().filter(|e| e.options.directed).count()
    }

    #[test]
    fn missing_header_parts_yield_an_empty_layout() {
        let layout = compute_if_else_layout(
            None,
            None,
            branch("a"),
            branch("b"),
            &LayoutConfig::default(),
        );
        assert!(layout.boundary.is_empty());
        assert!(layout.nodes.is_empty());
    }

    #[test]
    fn both_branches_present_makes_the_full_topology() {
        let config = LayoutConfig::default();
        let layout = compute_if_else_layout(
            Some(condition()),
            Some(choice()),
            branch("c.actions"),
            branch("c.elseActions"),
            &config,
        );
        assert_eq!(layout.nodes.len(), 4);
        assert_eq!(layout.edges.len(), 7);
        assert_eq!(directed_count(&layout), 2);

        // true branch hangs off the spine, false branch one slot right
        let if_node = layout.node("c.actions").unwrap();
        let else_node = layout.node("c.elseActions").unwrap();
        assert_eq!(if_node.axis_x_abs(), layout.boundary.axis_x);
        assert_eq!(else_node.left(), if_node.right() + config.branch_interval_x);

        // the closing bus returns to the spine along the bottom edge
        let bus = layout.edge("edge/c/bus").unwrap();
        assert_eq!(bus.y, layout.boundary.height);
        assert_eq!(bus.end_point().0, layout.boundary.axis_x);

        let labels: Vec<&str> = layout
            .edges
            .iter()
            .filter_map(|e| e.options.label.as_deref())
            .collect();
        assert_eq!(labels, ["True", "False"]);
    }

    #[test]
    fn empty_else_collapses_into_a_bypass_lane() {
        let config = LayoutConfig::default();
        let layout = compute_if_else_layout(
            Some(condition()),
            Some(choice()),
            branch("c.actions"),
            empty_group("c.elseActions"),
            &config,
        );
        assert_eq!(layout.nodes.len(), 3);
        assert_eq!(layout.edges.len(), 6);
        assert_eq!(directed_count(&layout), 1);
        let bypass = layout.edge("edge/c.elseActions/bypass").unwrap();
        assert!(!bypass.options.directed);
        assert_eq!(bypass.end_point().1, layout.boundary.height);
        // the bypass lane sits one interval right of the true branch
        let if_node = layout.node("c.actions").unwrap();
        assert_eq!(bypass.x, if_node.right() + config.branch_interval_x);
    }

    #[test]
    fn empty_if_keeps_the_true_bypass_on_the_spine() {
        let config = LayoutConfig::default();
        let layout = compute_if_else_layout(
            Some(condition()),
            Some(choice()),
            empty_group("c.actions"),
            branch("c.elseActions"),
            &config,
        );
        assert_eq!(layout.nodes.len(), 3);
        assert_eq!(layout.edges.len(), 6);
        assert_eq!(directed_count(&layout), 1);
        let bypass = layout.edge("edge/c.actions/bypass").unwrap();
        assert_eq!(bypass.x, layout.boundary.axis_x);
        assert!(layout.edge("edge/c.elseActions/in").unwrap().options.directed);
    }

    #[test]
    fn two_empty_branches_leave_only_bypass_plumbing() {
        let config = LayoutConfig::default();
        let layout = compute_if_else_layout(
            Some(condition()),
            Some(choice()),
            empty_group("c.actions"),
            empty_group("c.elseActions"),
            &config,
        );
        assert_eq!(layout.nodes.len(), 2);
        assert_eq!(layout.edges.len(), 5);
        assert_eq!(directed_count(&layout), 0);
    }

    #[test]
    fn everything_stays_inside_the_boundary()  {
        let config = LayoutConfig::default();
        let layout = compute_if_else_layout(
            Some(condition()),
            Some(choice()),
            branch("c.actions"),
            branch("c.elseActions"),
            &config,
        );
        for node in &layout.nodes {
            assert!(node.left() >= 0.0);
            assert!(node.top() >= 0.0);
            assert!(node.right() <= layout.boundary.width);
            assert!(node.bottom() <= layout.boundary.height);
        }
        for edge in &layout.edges {
            let (ex, ey) = edge.end_point();
            assert!(ex >= 0.0 && ex <= layout.boundary.width);
            assert!(ey >= 0.0 && ey <= layout.boundary.height);
        }
    }
}
