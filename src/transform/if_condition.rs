use serde_json::Value;

use super::{array_field, as_header, child_path, indicator_json, step_group_json};
use crate::graph::IndexedNode;
use crate::schema::{self, kinds};

/// Parts of an if/else container: header, branch diamond and the two
/// branch groups. Either group may wrap an empty action list; the layouter
/// decides what an empty branch looks like.
#[derive(Debug)]
pub struct IfConditionParts {
    pub condition: IndexedNode,
    pub choice: IndexedNode,
    pub if_group: IndexedNode,
    pub else_group: IndexedNode,
}

pub fn transform_if_condition(input: &Value, self_path: &str) -> Option<IfConditionParts> {
    if !input.is_object() || schema::kind_of(input) != kinds::IF_CONDITION {
        return None;
    }
    let actions = array_field(input, "actions");
    let else_actions = array_field(input, "elseActions");
    Some(IfConditionParts {
        condition: IndexedNode::new(
            self_path,
            as_header(input, kinds::CONDITION_NODE, schema::label_of(input)),
        ),
        choice: IndexedNode::new(
            child_path(self_path, "choice"),
            indicator_json(input, kinds::CHOICE_DIAMOND),
        ),
        if_group: IndexedNode::new(
            child_path(self_path, "actions"),
            step_group_json(input, actions, None),
        ),
        else_group: IndexedNode::new(
            child_path(self_path, "elseActions"),
            step_group_json(input, else_actions, None),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_foreign_inputs_yield_none() {
        assert!(transform_if_condition(&json!(null), "p").is_none());
        assert!(transform_if_condition(&json!({"$kind": "SendMessage"}), "p").is_none());
    }

    #[test]
    fn parts_carry_role_suffixed_ids() {
        let input = json!({
            "$kind": "IfCondition",
            "condition": "turn.activity.text == 'yes'",
            "actions": [{"$kind": "SendMessage", "activity": "ok"}],
        });
        let parts = transform_if_condition(&input, "triggers[0].actions[1]").unwrap();
        assert_eq!(parts.condition.id, "triggers[0].actions[1]");
        assert_eq!(parts.choice.id, "triggers[0].actions[1].choice");
        assert_eq!(parts.if_group.id, "triggers[0].actions[1].actions");
        assert_eq!(parts.else_group.id, "triggers[0].actions[1].elseActions");
    }

    #[test]
    fn header_shows_the_condition_expression() {
        let input = json!({"$kind": "IfCondition", "condition": "user.vip"});
        let parts = transform_if_condition(&input, "a").unwrap();
        assert_eq!(parts.condition.json["$kind"], json!("ConditionNode"));
        assert_eq!(parts.condition.json["label"], json!("user.vip"));
    }

    #[test]
    fn missing_branch_arrays_default_to_empty_groups() {
        let input = json!({"$kind": "IfCondition", "condition": "x"});
        let parts = transform_if_condition(&input, "a").unwrap();
        assert_eq!(parts.if_group.json["children"], json!([]));
        assert_eq!(parts.else_group.json["children"], json!([]));
    }

    #[test]
    fn disabled_container_disables_every_part() {
        let input = json!({
            "$kind": "IfCondition",
            "condition": "x",
            "disabled": true,
            "actions": [{"$kind": "SendMessage"}],
        });
        let parts = transform_if_condition(&input, "a").unwrap();
        assert_eq!(parts.condition.json["disabled"], json!(true));
        assert_eq!(parts.choice.json["disabled"], json!(true));
        assert_eq!(parts.if_group.json["disabled"], json!(true));
        assert_eq!(parts.else_group.json["disabled"], json!(true));
    }

    #[test]
    fn input_document_is_not_mutated() {
        let input = json!({"$kind": "IfCondition", "condition": "x", "actions": []});
        let before = input.clone();
        let _ = transform_if_condition(&input, "a").unwrap();
        assert_eq!(input, before);
    }
}
