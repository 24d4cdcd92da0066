//! Shape layouters. Each submodule positions the measured parts of one
//! container family and synthesizes its connector edges; `layout_dialog`
//! drives the recursion over a whole document and flattens everything into
//! absolute canvas coordinates.

pub mod calculators;

mod base_input;
mod dialog;
mod foreach;
mod if_else;
mod question;
mod sequence;
mod switch_case;
mod trigger;

use std::collections::HashMap;

use serde_json::Value;

use crate::config::LayoutConfig;
use crate::graph::{
    Boundary, CoordElement, Edge, EdgeDirection, GraphCoord, GraphLayout, GraphNode,
    HorizontalDistance, IndexedNode, LabelOptions, Offset, VerticalDistance,
};
use crate::measure::Measurer;
use crate::schema::{self, QuestionType, ShapeClass, kinds};
use crate::transform;

use base_input::compute_base_input_layout;
use dialog::compute_dialog_layout;
use foreach::compute_foreach_layout;
use if_else::compute_if_else_layout;
use question::compute_question_layout;
use sequence::compute_sequence_layout;
use switch_case::compute_switch_case_layout;
use trigger::compute_trigger_layout;

/// One visible node of the flattened layout, in absolute canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub id: String,
    pub kind: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub disabled: bool,
}

/// Flattened layout of a whole document: canvas extent plus every visible
/// node and connector in absolute coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowLayout {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<Edge>,
}

impl FlowLayout {
    pub fn node(&self, id: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }
}

/// Lay out a parsed dialog document. Measurement goes through the
/// measurer's cache, so repeated layouts of structurally equal subtrees
/// reuse earlier boundaries.
pub fn layout_dialog(json: &Value, measurer: &mut Measurer<'_>) -> FlowLayout {
    let root = IndexedNode::new("", json.clone());
    let element = layout_element(&root, measurer);
    FlowLayout {
        width: element.boundary.width,
        height: element.boundary.height,
        nodes: element.nodes,
        edges: element.edges,
    }
}

/// Layout of one element relative to its own top-left corner.
#[derive(Debug, Default)]
struct ElementLayout {
    boundary: Boundary,
    nodes: Vec<PlacedNode>,
    edges: Vec<Edge>,
}

fn leaf_layout(indexed: &IndexedNode, measurer: &mut Measurer<'_>) -> ElementLayout {
    let boundary = measurer.measure_json_boundary(&indexed.json);
    ElementLayout {
        boundary,
        nodes: vec![PlacedNode {
            id: indexed.id.clone(),
            kind: schema::kind_of(&indexed.json).to_string(),
            label: schema::label_of(&indexed.json),
            x: 0.0,
            y: 0.0,
            width: boundary.width,
            height: boundary.height,
            disabled: schema::is_disabled(&indexed.json),
        }],
        edges: Vec::new(),
    }
}

/// Recurse into a part, remember its inner layout and hand back the node
/// the container layouter positions.
fn part_node(
    part: &IndexedNode,
    measurer: &mut Measurer<'_>,
    children: &mut HashMap<String, ElementLayout>,
) -> GraphNode {
    let sub = layout_element(part, measurer);
    let node = GraphNode::new(part.id.clone(), part.json.clone(), sub.boundary);
    children.insert(part.id.clone(), sub);
    node
}

/// Lift the inner layouts of positioned parts into container coordinates.
fn merge(layout: GraphLayout, mut children: HashMap<String, ElementLayout>) -> ElementLayout {
    let mut nodes = Vec::new();
    let mut edges = layout.edges;
    for placed in &layout.nodes {
        let Some(sub) = children.remove(&placed.id) else {
            continue;
        };
        for mut node in sub.nodes {
            node.x += placed.offset.x;
            node.y += placed.offset.y;
            nodes.push(node);
        }
        for mut edge in sub.edges {
            edge.translate(placed.offset.x, placed.offset.y);
            edges.push(edge);
        }
    }
    ElementLayout {
        boundary: layout.boundary,
        nodes,
        edges,
    }
}

fn layout_element(indexed: &IndexedNode, measurer: &mut Measurer<'_>) -> ElementLayout {
    if !indexed.json.is_object() {
        return ElementLayout::default();
    }
    let config = measurer.config;
    match schema::shape_of(schema::kind_of(&indexed.json)) {
        ShapeClass::Element => leaf_layout(indexed, measurer),
        ShapeClass::StepGroup => {
            let Some(steps) = transform::transform_step_group(&indexed.json, &indexed.id) else {
                return ElementLayout::default();
            };
            let mut children = HashMap::new();
            let nodes: Vec<GraphNode> = steps
                .iter()
                .map(|step| part_node(step, measurer, &mut children))
                .collect();
            merge(compute_sequence_layout(nodes, true, true, config), children)
        }
        ShapeClass::IfElse => {
            let Some(parts) = transform::transform_if_condition(&indexed.json, &indexed.id)
            else {
                return ElementLayout::default();
            };
            let mut children = HashMap::new();
            let condition = part_node(&parts.condition, measurer, &mut children);
            let choice = part_node(&parts.choice, measurer, &mut children);
            let if_group = part_node(&parts.if_group, measurer, &mut children);
            let else_group = part_node(&parts.else_group, measurer, &mut children);
            merge(
                compute_if_else_layout(Some(condition), Some(choice), if_group, else_group, config),
                children,
            )
        }
        ShapeClass::SwitchCase => {
            let Some(parts) = transform::transform_switch_condition(&indexed.json, &indexed.id)
            else {
                return ElementLayout::default();
            };
            let mut children = HashMap::new();
            let condition = part_node(&parts.condition, measurer, &mut children);
            let choice = part_node(&parts.choice, measurer, &mut children);
            let branches: Vec<GraphNode> = parts
                .branches
                .iter()
                .map(|branch| part_node(branch, measurer, &mut children))
                .collect();
            merge(
                compute_switch_case_layout(Some(condition), Some(choice), branches, config),
                children,
            )
        }
        ShapeClass::Loop => {
            let Some(parts) = transform::transform_foreach(&indexed.json, &indexed.id) else {
                return ElementLayout::default();
            };
            let mut children = HashMap::new();
            let detail = part_node(&parts.detail, measurer, &mut children);
            let loop_begin = part_node(&parts.loop_begin, measurer, &mut children);
            let loop_end = part_node(&parts.loop_end, measurer, &mut children);
            let steps = part_node(&parts.steps, measurer, &mut children);
            merge(
                compute_foreach_layout(Some(detail), loop_begin, loop_end, Some(steps), config),
                children,
            )
        }
        ShapeClass::BaseInput => {
            let Some(parts) = transform::transform_base_input(&indexed.json, &indexed.id) else {
                return ElementLayout::default();
            };
            let mut children = HashMap::new();
            let bot_asks = part_node(&parts.bot_asks, measurer, &mut children);
            let user_answers = part_node(&parts.user_answers, measurer, &mut children);
            let invalid_prompt = parts
                .invalid_prompt
                .as_ref()
                .map(|part| part_node(part, measurer, &mut children));
            merge(
                compute_base_input_layout(bot_asks, user_answers, invalid_prompt, config),
                children,
            )
        }
        ShapeClass::Question => {
            let Some(parts) = transform::transform_question(&indexed.json, &indexed.id) else {
                return ElementLayout::default();
            };
            let mut children = HashMap::new();
            let question = part_node(&parts.question, measurer, &mut children);
            let choice = parts
                .choice
                .as_ref()
                .map(|part| part_node(part, measurer, &mut children));
            let branches: Vec<GraphNode> = parts
                .branches
                .iter()
                .map(|branch| part_node(branch, measurer, &mut children))
                .collect();
            merge(
                compute_question_layout(
                    question,
                    choice,
                    branches,
                    schema::question_type(&indexed.json),
                    config,
                ),
                children,
            )
        }
        ShapeClass::Trigger => {
            let Some(parts) = transform::transform_trigger(&indexed.json, &indexed.id) else {
                return ElementLayout::default();
            };
            let mut children = HashMap::new();
            let summary = part_node(&parts.summary, measurer, &mut children);
            let content = part_node(&parts.content, measurer, &mut children);
            let terminator = config
                .shows_terminator(parts.trailing_kind.as_deref())
                .then(|| {
                    let dot = IndexedNode::new(
                        transform::child_path(&indexed.id, "terminator"),
                        transform::indicator_json(&indexed.json, kinds::TERMINATOR),
                    );
                    part_node(&dot, measurer, &mut children)
                });
            merge(
                compute_trigger_layout(summary, content, terminator, config),
                children,
            )
        }
        ShapeClass::Dialog => {
            let Some(parts) = transform::transform_root_dialog(&indexed.json, &indexed.id)
            else {
                return ElementLayout::default();
            };
            let mut children = HashMap::new();
            let lanes: Vec<GraphNode> = parts
                .triggers
                .iter()
                .map(|trigger| part_node(trigger, measurer, &mut children))
                .collect();
            merge(compute_dialog_layout(lanes, config), children)
        }
    }
}
