use super::*;

/// Trigger lane: summary card, action group and the optional terminator dot
/// in one tight vertical run. The lane has no head or trailing stubs; the
/// dialog stacking below it provides the outer spacing.
pub(super) fn compute_trigger_layout(
    summary: GraphNode,
    content: GraphNode,
    terminator: Option<GraphNode>,
    config: &LayoutConfig,
) -> GraphLayout {
    let mut parts = vec![summary, content];
    if let Some(terminator) = terminator {
        parts.push(terminator);
    }
    let mut layout = compute_sequence_layout(parts, false, false, config);
    layout.nodes.retain(|node| !node.boundary.is_empty());
    layout
}
