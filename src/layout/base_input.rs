use super::*;

/// Input element: bot-asks card over user-answers card on a shared axis.
/// Re-prompting inputs hang the invalid-prompt brick to the right of the
/// user-answers row; with the loop policy on, dashed plumbing carries the
/// invalid answer through the brick and back into the bot-asks card.
pub(super) fn compute_base_input_layout(
    bot_asks: GraphNode,
    user_answers: GraphNode,
    invalid_prompt: Option<GraphNode>,
    config: &LayoutConfig,
) -> GraphLayout {
    let boundary = calculators::calculate_base_input_boundary(
        &bot_asks.boundary,
        &user_answers.boundary,
        invalid_prompt.as_ref().map(|b| &b.boundary),
        config,
    );
    let base = calculators::calculate_base_input_boundary(
        &bot_asks.boundary,
        &user_answers.boundary,
        None,
        config,
    );
    let user_id = user_answers.id.clone();

    let mut stack = GraphCoord::new(
        bot_asks,
        vec![(
            user_answers.into(),
            HorizontalDistance::AxisX(0.0),
            VerticalDistance::BottomMargin(config.element_interval_y),
        )],
    );
    stack.move_coord_to(0.0, 0.0);
    let mut placed = stack.into_nodes();

    let bot_right = placed[0].right();
    let bot_mid_y = placed[0].axis_y_abs();
    let bot_bottom = placed[0].bottom();
    let user_top = placed[1].top();
    let user_right = placed[1].right();
    let user_mid_y = placed[1].axis_y_abs();

    let mut edges = vec![Edge::directed(
        format!("edge/{user_id}/in"),
        boundary.axis_x,
        bot_bottom,
        EdgeDirection::Down,
        user_top - bot_bottom,
    )];

    if let Some(mut brick) = invalid_prompt {
        let brick_left = base.width + config.element_interval_x / 2.0;
        brick.offset = Offset {
            x: brick_left,
            y: user_mid_y - brick.boundary.height / 2.0,
        };
        let brick_id = brick.id.clone();
        let brick_top = brick.top();
        let brick_cx = brick_left + brick.boundary.width / 2.0;

        if config.invalid_prompt_loop {
            edges.push(
                Edge::plain(
                    format!("edge/{brick_id}/in"),
                    user_right,
                    user_mid_y,
                    EdgeDirection::Right,
                    brick_left - user_right,
                )
                .dashed(),
            );
            edges.push(
                Edge::plain(
                    format!("edge/{brick_id}/run"),
                    brick_cx,
                    brick_top,
                    EdgeDirection::Up,
                    brick_top - bot_mid_y,
                )
                .dashed(),
            );
            edges.push(
                Edge::directed(
                    format!("edge/{brick_id}/out"),
                    brick_cx,
                    bot_mid_y,
                    EdgeDirection::Left,
                    brick_cx - bot_right,
                )
                .dashed(),
            );
        } else {
            edges.push(
                Edge::directed(
                    format!("edge/{brick_id}/in"),
                    user_right,
                    user_mid_y,
                    EdgeDirection::Right,
                    brick_left - user_right,
                )
                .dashed(),
            );
        }
        placed.push(brick);
    }

    GraphLayout {
        boundary,
        nodes: placed,
        edges,
    }
}
