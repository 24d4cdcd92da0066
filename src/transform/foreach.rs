use serde_json::Value;

use super::{array_field, as_header, child_path, indicator_json, step_group_json};
use crate::graph::IndexedNode;
use crate::schema::{self, ShapeClass, kinds};

/// Parts of a foreach container: header, the loop begin/end dots and the
/// body group the loop-back edge wraps around.
#[derive(Debug)]
pub struct ForeachParts {
    pub detail: IndexedNode,
    pub loop_begin: IndexedNode,
    pub loop_end: IndexedNode,
    pub steps: IndexedNode,
}

fn foreach_label(input: &Value) -> String {
    match input.get("itemsProperty").and_then(Value::as_str) {
        Some(items) if !items.trim().is_empty() => format!("each {}", items.trim()),
        _ => "each item".to_string(),
    }
}

pub fn transform_foreach(input: &Value, self_path: &str) -> Option<ForeachParts> {
    if !input.is_object() || schema::shape_of(schema::kind_of(input)) != ShapeClass::Loop {
        return None;
    }
    Some(ForeachParts {
        detail: IndexedNode::new(
            self_path,
            as_header(input, kinds::CONDITION_NODE, foreach_label(input)),
        ),
        loop_begin: IndexedNode::new(
            child_path(self_path, "loopBegin"),
            indicator_json(input, kinds::LOOP_INDICATOR),
        ),
        loop_end: IndexedNode::new(
            child_path(self_path, "loopEnd"),
            indicator_json(input, kinds::LOOP_END),
        ),
        steps: IndexedNode::new(
            child_path(self_path, "actions"),
            step_group_json(input, array_field(input, "actions"), None),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_foreign_inputs_yield_none() {
        assert!(transform_foreach(&json!(null), "p").is_none());
        assert!(transform_foreach(&json!({"$kind": "SendMessage"}), "p").is_none());
    }

    #[test]
    fn loop_parts_use_role_suffixed_ids() {
        let input = json!({
            "$kind": "Foreach",
            "itemsProperty": "user.cart",
            "actions": [{"$kind": "SendMessage", "activity": "item"}],
        });
        let parts = transform_foreach(&input, "actions[2]").unwrap();
        assert_eq!(parts.detail.id, "actions[2]");
        assert_eq!(parts.loop_begin.id, "actions[2].loopBegin");
        assert_eq!(parts.loop_end.id, "actions[2].loopEnd");
        assert_eq!(parts.steps.id, "actions[2].actions");
        assert_eq!(parts.detail.json["label"], json!("each user.cart"));
    }

    #[test]
    fn foreach_page_shares_the_loop_decomposition() {
        let input = json!({"$kind": "ForeachPage", "itemsProperty": "items", "actions": []});
        let parts = transform_foreach(&input, "a").unwrap();
        assert_eq!(parts.loop_begin.json["$kind"], json!("LoopIndicator"));
        assert_eq!(parts.loop_end.json["$kind"], json!("LoopEnd"));
    }

    #[test]
    fn missing_items_property_falls_back_to_a_generic_label() {
        let input = json!({"$kind": "Foreach"});
        let parts = transform_foreach(&input, "a").unwrap();
        assert_eq!(parts.detail.json["label"], json!("each item"));
    }
}
