use super::*;

/// Loop container: header, loop-begin dot, body group and loop-end dot
/// stacked on a spine that sits `loop_edge_margin` right of the left edge.
/// The dashed loop-back rail runs down the reserved margin strip from the
/// end dot back into the begin dot.
pub(super) fn compute_foreach_layout(
    detail: Option<GraphNode>,
    loop_begin: GraphNode,
    loop_end: GraphNode,
    steps: Option<GraphNode>,
    config: &LayoutConfig,
) -> GraphLayout {
    let (Some(detail), Some(steps)) = (detail, steps) else {
        return GraphLayout::default();
    };
    let boundary = calculators::calculate_foreach_boundary(
        Some(&detail.boundary),
        Some(&steps.boundary),
        &loop_begin.boundary,
        &loop_end.boundary,
        config,
    );
    let stub = config.edge_stub();
    let steps_present = !steps.boundary.is_empty();
    let container_id = detail.id.clone();
    let begin_id = loop_begin.id.clone();
    let end_id = loop_end.id.clone();
    let steps_id = steps.id.clone();
    let begin_height = loop_begin.boundary.height;
    let steps_height = steps.boundary.height;

    let mut stack = GraphCoord::new(
        detail,
        vec![
            (
                loop_begin.into(),
                HorizontalDistance::AxisX(0.0),
                VerticalDistance::BottomMargin(stub),
            ),
            (
                steps.into(),
                HorizontalDistance::AxisX(0.0),
                VerticalDistance::BottomMargin(stub + begin_height + stub),
            ),
            (
                loop_end.into(),
                HorizontalDistance::AxisX(0.0),
                VerticalDistance::BottomMargin(stub + begin_height + stub + steps_height + stub),
            ),
        ],
    );
    stack.move_coord_to(config.loop_edge_margin, 0.0);
    let mut placed = stack.into_nodes();

    let spine_x = boundary.axis_x;
    let rail_x = config.loop_edge_margin / 2.0;
    let detail_bottom = placed[0].bottom();
    let begin = &placed[1];
    let (begin_left, begin_bottom, begin_mid_y) =
        (begin.left(), begin.bottom(), begin.axis_y_abs());
    let steps_bottom = placed[2].bottom();
    let end = &placed[3];
    let (end_left, end_top, end_mid_y) = (end.left(), end.top(), end.axis_y_abs());

    let mut edges = vec![Edge::directed(
        format!("edge/{begin_id}/in"),
        spine_x,
        detail_bottom,
        EdgeDirection::Down,
        stub,
    )];
    if steps_present {
        edges.push(Edge::directed(
            format!("edge/{steps_id}/in"),
            spine_x,
            begin_bottom,
            EdgeDirection::Down,
            stub,
        ));
        edges.push(Edge::directed(
            format!("edge/{end_id}/in"),
            spine_x,
            steps_bottom,
            EdgeDirection::Down,
            stub,
        ));
    } else {
        // nothing between the dots, one stretch covers both stubs
        edges.push(Edge::directed(
            format!("edge/{end_id}/in"),
            spine_x,
            begin_bottom,
            EdgeDirection::Down,
            end_top - begin_bottom,
        ));
    }

    edges.push(
        Edge::plain(
            format!("edge/{container_id}/out"),
            end_left,
            end_mid_y,
            EdgeDirection::Left,
            end_left - rail_x,
        )
        .dashed(),
    );
    edges.push(
        Edge::plain(
            format!("edge/{container_id}/run"),
            rail_x,
            end_mid_y,
            EdgeDirection::Up,
            end_mid_y - begin_mid_y,
        )
        .dashed(),
    );
    edges.push(
        Edge::directed(
            format!("edge/{container_id}/in"),
            rail_x,
            begin_mid_y,
            EdgeDirection::Right,
            begin_left - rail_x,
        )
        .dashed(),
    );

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

    fn detail() -> GraphNode {
        GraphNode::new("f", json!({}), Boundary::new(200.0, 48.0))
    }

    fn dot(id: &str) -> GraphNode {
        GraphNode::new(id, json!({}), Boundary::new(16.0, 16.0))
    }

    fn steps() -> GraphNode {
        GraphNode::new("f.actions", json!({}), Boundary::new(200.0, 68.0))
    }

    fn empty_steps() -> GraphNode {
        GraphNode::new("f.actions", json!({}), Boundary::default())
    }

    #[test]
    fn loop_parts_stack_on_a_shifted_spine() {
        let config = LayoutConfig::default();
        let layout = compute_foreach_layout(
            Some(detail()),
            dot("f.loopBegin"),
            dot("f.loopEnd"),
            Some(steps()),
            &config,
        );
        assert_eq!(layout.nodes.len(), 4);
        assert_eq!(layout.boundary.axis_x, 120.0);
        assert_eq!(layout.boundary.height, 178.0);
        for id in ["f", "f.loopBegin", "f.actions", "f.loopEnd"] {
            assert_eq!(layout.node(id).unwrap().axis_x_abs(), 120.0);
        }
        // parts are a stub apart down the spine
        assert_eq!(layout.node("f.loopBegin").unwrap().top(), 58.0);
        assert_eq!(layout.node("f.actions").unwrap().top(), 84.0);
        assert_eq!(layout.node("f.loopEnd").unwrap().top(), 162.0);
    }

    #[test]
    fn loop_back_rail_runs_up_the_margin_strip() {
        let config = LayoutConfig::default();
        let layout = compute_foreach_layout(
            Some(detail()),
            dot("f.loopBegin"),
            dot("f.loopEnd"),
            Some(steps()),
            &config,
        );
        assert_eq!(layout.edges.len(), 6);
        let dashed: Vec<&Edge> = layout.edges.iter().filter(|e| e.options.dashed).collect();
        assert_eq!(dashed.len(), 3);

        let out = layout.edge("edge/f/out").unwrap();
        assert_eq!(out.end_point(), (10.0, 170.0));
        let run = layout.edge("edge/f/run").unwrap();
        assert_eq!(run.direction, EdgeDirection::Up);
        assert_eq!(run.end_point(), (10.0, 66.0));
        let back_in = layout.edge("edge/f/in").unwrap();
        assert!(back_in.options.directed);
        assert_eq!(back_in.end_point(), (112.0, 66.0));
    }

    #[test]
    fn empty_body_bridges_the_dots_with_one_stretch()  {
        let config = LayoutConfig::default();
        let layout = compute_foreach_layout(
            Some(detail()),
            dot("f.loopBegin"),
            dot("f.loopEnd"),
            Some(empty_steps()),
            &config,
        );
        assert_eq!(layout.nodes.len(), 3);
        assert_eq!(layout.edges.len(), 5);
        assert!(layout.edge("edge/f.actions/in").is_none());
        let stretch = layout.edge("edge/f.loopEnd/in").unwrap();
        assert_eq!(stretch.length, 2.0 * config.edge_stub());
    }

    #[test]
    fn missing_parts_yield_an_empty_layout() {
        let layout = compute_foreach_layout(
            None,
            dot("f.loopBegin"),
            dot("f.loopEnd"),
            None,
            &LayoutConfig::default(),
        );
        assert!(layout.boundary.is_empty());
        assert!(layout.edges.is_empty());
    }
}
