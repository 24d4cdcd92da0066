use super::*;

/// Switch container: header card, diamond, then one lane per branch with the
/// default branch on the spine. A distribution rail runs right from the
/// diamond; every branch enters through a labeled drop and the lanes
/// reconverge on a closing bus. Rails and buses with nothing to span are
/// skipped so a default-only switch degenerates to straight vertical flow.
pub(super) fn compute_switch_case_layout(
    condition: Option<GraphNode>,
    choice: Option<GraphNode>,
    branches: Vec<GraphNode>,
    config: &LayoutConfig,
) -> GraphLayout {
    let (Some(condition), Some(choice)) = (condition, choice) else {
        return GraphLayout::default();
    };
    if branches.is_empty() {
        return GraphLayout::default();
    }
    let branch_boundaries: Vec<Boundary> = branches.iter().map(|b| b.boundary).collect();
    let boundary = calculators::calculate_switch_case_boundary(
        Some(&condition.boundary),
        Some(&choice.boundary),
        &branch_boundaries,
        config,
    );
    let gap = config.branch_interval_y;
    let choice_height = choice.boundary.height;
    let container_id = condition.id.clone();

    let mut members: Vec<(CoordElement, HorizontalDistance, VerticalDistance)> = Vec::new();
    let mut branch_iter = branches.into_iter();
    let first = match branch_iter.next() {
        Some(first) => first,
        None => return GraphLayout::default(),
    };
    let mut cursor = first.boundary.width + config.branch_interval_x;
    for branch in branch_iter {
        let width = branch.boundary.width;
        members.push((
            branch.into(),
            HorizontalDistance::Left(cursor),
            VerticalDistance::Top(0.0),
        ));
        cursor += width + config.branch_interval_x;
    }
    let row = GraphCoord::new(first, members);

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
    let label_offset = LabelOptions { dx: -18.0, dy: 0.0 };

    let mut edges = vec![Edge::plain(
        format!("edge/{}/in", placed[1].id),
        spine_x,
        cond_bottom,
        EdgeDirection::Down,
        choice_top - cond_bottom,
    )];

    let lanes: Vec<f32> = placed[2..].iter().map(GraphNode::axis_x_abs).collect();
    let last_lane = lanes.last().copied().unwrap_or(spine_x);

    // distribution rail feeding every lane right of the spine
    if last_lane - choice_right > 0.0 {
        edges.push(Edge::plain(
            format!("edge/{container_id}/run"),
            choice_right,
            choice_mid_y,
            EdgeDirection::Right,
            last_lane - choice_right,
        ));
    }

    for (index, branch) in placed[2..].iter().enumerate() {
        let lane = lanes[index];
        let entry_y = if index == 0 { choice_bottom } else { choice_mid_y };
        let label = branch
            .data
            .get("label")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if branch.boundary.is_empty() {
            let mut bypass = Edge::plain(
                format!("edge/{}/bypass", branch.id),
                lane,
                entry_y,
                EdgeDirection::Down,
                bus_y - entry_y,
            )
            .with_label(label);
            bypass.options.label_options = Some(label_offset);
            edges.push(bypass);
        } else {
            let mut entry = Edge::directed(
                format!("edge/{}/in", branch.id),
                lane,
                entry_y,
                EdgeDirection::Down,
                branch.top() - entry_y,
            )
            .with_label(label);
            entry.options.label_options = Some(label_offset);
            edges.push(entry);
            edges.push(Edge::plain(
                format!("edge/{}/out", branch.id),
                lane,
                branch.bottom(),
                EdgeDirection::Down,
                bus_y - branch.bottom(),
            ));
        }
    }

    if last_lane - spine_x > 0.0 {
        edges.push(Edge::plain(
            format!("edge/{container_id}/bus"),
            last_lane,
            bus_y,
            EdgeDirection::Left,
            last_lane - spine_x,
        ));
    }

    placed.retain(|node| !node.boundary.is_empty());

    GraphLayout {
        boundary,
        nodes: placed,
        edges,
    }
}
