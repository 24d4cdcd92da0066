use serde_json::Value;

use super::{array_field, as_header, child_path, indicator_json, item_path, step_group_json};
use crate::graph::IndexedNode;
use crate::schema::{self, kinds};

/// Parts of a switch container. `branches[0]` is always the default branch;
/// the case branches follow in document order, labeled by their match value.
#[derive(Debug)]
pub struct SwitchConditionParts {
    pub condition: IndexedNode,
    pub choice: IndexedNode,
    pub branches: Vec<IndexedNode>,
}

fn case_label(case: &Value) -> String {
    match case.get("value") {
        Some(Value::String(s)) => s.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => "case".to_string(),
    }
}

pub fn transform_switch_condition(input: &Value, self_path: &str) -> Option<SwitchConditionParts> {
    if !input.is_object() || schema::kind_of(input) != kinds::SWITCH_CONDITION {
        return None;
    }
    let mut branches = Vec::new();
    branches.push(IndexedNode::new(
        child_path(self_path, "default"),
        step_group_json(input, array_field(input, "default"), Some("default")),
    ));
    for (index, case) in array_field(input, "cases").iter().enumerate() {
        if !case.is_object() {
            continue;
        }
        branches.push(IndexedNode::new(
            child_path(&item_path(self_path, "cases", index), "actions"),
            step_group_json(input, array_field(case, "actions"), Some(&case_label(case))),
        ));
    }
    Some(SwitchConditionParts {
        condition: IndexedNode::new(
            self_path,
            as_header(input, kinds::CONDITION_NODE, schema::label_of(input)),
        ),
        choice: IndexedNode::new(
            child_path(self_path, "choice"),
            indicator_json(input, kinds::CHOICE_DIAMOND),
        ),
        branches,
    })
}
