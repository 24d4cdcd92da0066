use super::*;

/// Question element. Text and number questions render as the bare prompt
/// card. Choice and confirm questions branch per case like a switch, then
/// reconverge through a closing bus and a final drop so flow continues
/// below the container.
pub(super) fn compute_question_layout(
    question: GraphNode,
    choice: Option<GraphNode>,
    branches: Vec<GraphNode>,
    question_type: QuestionType,
    config: &LayoutConfig,
) -> GraphLayout {
    match question_type {
        QuestionType::Text | QuestionType::Number => GraphLayout {
            boundary: question.boundary,
            nodes: vec![question],
            edges: Vec::new(),
        },
        QuestionType::Confirm | QuestionType::Choice => {
            let Some(choice) = choice else {
                return GraphLayout {
                    boundary: question.boundary,
                    nodes: vec![question],
                    edges: Vec::new(),
                };
            };
            branching_question(question, choice, branches, question_type, config)
        }
    }
}

fn branching_question(
    question: GraphNode,
    choice: GraphNode,
    branches: Vec<GraphNode>,
    question_type: QuestionType,
    config: &LayoutConfig,
) -> GraphLayout {
    let branch_boundaries: Vec<Boundary> = branches.iter().map(|b| b.boundary).collect();
    let boundary = calculators::calculate_question_boundary(
        &question.boundary,
        Some(&choice.boundary),
        &branch_boundaries,
        question_type,
        config,
    );
    let gap = config.branch_interval_y;
    let choice_height = choice.boundary.height;
    let question_id = question.id.clone();
    let choice_id = choice.id.clone();
    let label_offset = LabelOptions { dx: -18.0, dy: 0.0 };

    let mut members: Vec<(CoordElement, HorizontalDistance, VerticalDistance)> = vec![(
        choice.into(),
        HorizontalDistance::AxisX(0.0),
        VerticalDistance::BottomMargin(gap),
    )];
    let mut branch_iter = branches.into_iter();
    if let Some(first) = branch_iter.next() {
        let mut row_members: Vec<(CoordElement, HorizontalDistance, VerticalDistance)> =
            Vec::new();
        let mut cursor = first.boundary.width + config.branch_interval_x;
        for branch in branch_iter {
            let width = branch.boundary.width;
            row_members.push((
                branch.into(),
                HorizontalDistance::Left(cursor),
                VerticalDistance::Top(0.0),
            ));
            cursor += width + config.branch_interval_x;
        }
        members.push((
            GraphCoord::new(first, row_members).into(),
            HorizontalDistance::AxisX(0.0),
            VerticalDistance::BottomMargin(gap + choice_height + gap),
        ));
    }

    let mut stack = GraphCoord::new(question, members);
    stack.move_coord_to(0.0, 0.0);
    let mut placed = stack.into_nodes();

    let spine_x = boundary.axis_x;
    // the closing bus sits one interval above the container bottom
    let bus_y = boundary.height - gap;
    let question_bottom = placed[0].bottom();
    let choice_top = placed[1].top();
    let choice_bottom = placed[1].bottom();
    let choice_right = placed[1].right();
    let choice_mid_y = placed[1].axis_y_abs();

    let mut edges = vec![Edge::plain(
        format!("edge/{choice_id}/in"),
        spine_x,
        question_bottom,
        EdgeDirection::Down,
        choice_top - question_bottom,
    )];

    if placed.len() > 2 {
        let lanes: Vec<f32> = placed[2..].iter().map(GraphNode::axis_x_abs).collect();
        let last_lane = lanes.last().copied().unwrap_or(spine_x);

        if last_lane - choice_right > 0.0 {
            edges.push(Edge::plain(
                format!("edge/{question_id}/run"),
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
                format!("edge/{question_id}/bus"),
                last_lane,
                bus_y,
                EdgeDirection::Left,
                last_lane - spine_x,
            ));
        }
        edges.push(Edge::plain(
            format!("edge/{question_id}/out"),
            spine_x,
            bus_y,
            EdgeDirection::Down,
            boundary.height - bus_y,
        ));
    } else {
        // no cases at all, flow falls straight through the diamond
        edges.push(Edge::plain(
            format!("edge/{question_id}/out"),
            spine_x,
            choice_bottom,
            EdgeDirection::Down,
            boundary.height - choice_bottom,
        ));
    }

    placed.retain(|node| !node.boundary.is_empty());

    GraphLayout {
        boundary,
        nodes: placed,
        edges,
    }
}
