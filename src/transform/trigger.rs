use serde_json::Value;

use super::{array_field, as_header, child_path, step_group_json};
use crate::graph::IndexedNode;
use crate::schema::{self, kinds};

/// Parts of a trigger lane: the summary card and the action group.
/// `trailing_kind` is the kind of the last real action, used to decide
/// whether the lane ends in a terminator dot.
#[derive(Debug)]
pub struct TriggerParts {
    pub summary: IndexedNode,
    pub content: IndexedNode,
    pub trailing_kind: Option<String>,
}

fn trigger_label(input: &Value) -> String {
    for key in ["intent", "event"] {
        if let Some(value) = input.get(key).and_then(Value::as_str)
            && !value.trim().is_empty()
        {
            return value.trim().to_string();
        }
    }
    schema::label_of(input)
}

pub fn transform_trigger(input: &Value, self_path: &str) -> Option<TriggerParts> {
    if !input.is_object() || schema::kind_of(input) != kinds::TRIGGER {
        return None;
    }
    let actions = array_field(input, "actions");
    let trailing_kind = actions
        .iter()
        .rev()
        .find(|a| a.is_object())
        .map(|a| schema::kind_of(a).to_string());
    Some(TriggerParts {
        summary: IndexedNode::new(
            self_path,
            as_header(input, kinds::TRIGGER_SUMMARY, trigger_label(input)),
        ),
        content: IndexedNode::new(
            child_path(self_path, "actions"),
            step_group_json(input, actions, None),
        ),
        trailing_kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_foreign_inputs_yield_none() {
        assert!(transform_trigger(&json!(null), "p").is_none());
        assert!(transform_trigger(&json!({"$kind": "SendMessage"}), "p").is_none());
    }

    #[test]
    fn summary_shows_the_intent() {
        let input = json!({
            "$kind": "Trigger",
            "intent": "Greeting",
            "actions": [{"$kind": "SendMessage", "activity": "hi"}],
        });
        let parts = transform_trigger(&input, "triggers[0]").unwrap();
        assert_eq!(parts.summary.id, "triggers[0]");
        assert_eq!(parts.summary.json["$kind"], json!("TriggerSummary"));
        assert_eq!(parts.summary.json["label"], json!("Greeting"));
        assert_eq!(parts.content.id, "triggers[0].actions");
        assert_eq!(parts.trailing_kind.as_deref(), Some("SendMessage"));
    }

    #[test]
    fn trailing_kind_skips_malformed_entries() {
        let input = json!({
            "$kind": "Trigger",
            "actions": [{"$kind": "EndDialog"}, null],
        });
        let parts = transform_trigger(&input, "t").unwrap();
        assert_eq!(parts.trailing_kind.as_deref(), Some("EndDialog"));
    }

    #[test]
    fn empty_lane_has_no_trailing_kind() {
        let input = json!({"$kind": "Trigger"});
        let parts = transform_trigger(&input, "t").unwrap();
        assert!(parts.trailing_kind.is_none());
        assert_eq!(parts.content.json["children"], json!([]));
    }
}
