use serde_json::{Value, json};

use super::{array_field, child_path, indicator_json, item_path, step_group_json};
use crate::graph::IndexedNode;
use crate::schema::{self, QuestionType, kinds};

/// Parts of a question element. Text and number questions are a lone prompt
/// card; choice and confirm questions add a diamond and one branch per case.
#[derive(Debug)]
pub struct QuestionParts {
    pub question: IndexedNode,
    pub choice: Option<IndexedNode>,
    pub branches: Vec<IndexedNode>,
}

fn case_label(case: &Value) -> String {
    match case.get("value") {
        Some(Value::String(s)) => s.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => "case".to_string(),
    }
}

pub fn transform_question(input: &Value, self_path: &str) -> Option<QuestionParts> {
    if !input.is_object() || schema::kind_of(input) != kinds::QUESTION {
        return None;
    }
    let mut question = input.clone();
    question["$kind"] = json!(kinds::BOT_ASKS);

    let branching = matches!(
        schema::question_type(input),
        QuestionType::Choice | QuestionType::Confirm
    );
    let choice = branching.then(|| {
        IndexedNode::new(
            child_path(self_path, "choice"),
            indicator_json(input, kinds::CHOICE_DIAMOND),
        )
    });
    let mut branches = Vec::new();
    if branching {
        for (index, case) in array_field(input, "cases").iter().enumerate() {
            if !case.is_object() {
                continue;
            }
            branches.push(IndexedNode::new(
                child_path(&item_path(self_path, "cases", index), "actions"),
                step_group_json(input, array_field(case, "actions"), Some(&case_label(case))),
            ));
        }
    }
    Some(QuestionParts {
        question: IndexedNode::new(self_path, question),
        choice,
        branches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_foreign_inputs_yield_none() {
        assert!(transform_question(&json!(null), "p").is_none());
        assert!(transform_question(&json!({"$kind": "TextInput"}), "p").is_none());
    }

    #[test]
    fn text_questions_are_a_lone_prompt() {
        let input = json!({"$kind": "Question", "type": "text", "prompt": "Name?"});
        let parts = transform_question(&input, "a").unwrap();
        assert_eq!(parts.question.id, "a");
        assert_eq!(parts.question.json["$kind"], json!("BotAsks"));
        assert!(parts.choice.is_none());
        assert!(parts.branches.is_empty());
    }

    #[test]
    fn choice_questions_branch_per_case() {
        let input = json!({
            "$kind": "Question",
            "type": "choice",
            "prompt": "Size?",
            "cases": [
                {"value": "small", "actions": [{"$kind": "SendMessage", "activity": "s"}]},
                {"value": "large", "actions": []},
            ],
        });
        let parts = transform_question(&input, "actions[0]").unwrap();
        assert_eq!(parts.choice.as_ref().unwrap().id, "actions[0].choice");
        assert_eq!(parts.branches.len(), 2);
        assert_eq!(parts.branches[0].id, "actions[0].cases[0].actions");
        assert_eq!(parts.branches[0].json["label"], json!("small"));
        assert_eq!(parts.branches[1].json["label"], json!("large"));
    }

    #[test]
    fn confirm_questions_also_branch() {
        let input = json!({
            "$kind": "Question",
            "type": "confirm",
            "prompt": "Proceed?",
            "cases": [
                {"value": true, "actions": []},
                {"value": false, "actions": []},
            ],
        });
        let parts = transform_question(&input, "a").unwrap();
        assert!(parts.choice.is_some());
        assert_eq!(parts.branches.len(), 2);
        assert_eq!(parts.branches[0].json["label"], json!("true"));
    }

    #[test]
    fn cases_on_text_questions_are_ignored() {
        let input = json!({
            "$kind": "Question",
            "type": "text",
            "cases": [{"value": "x", "actions": []}],
        });
        let parts = transform_question(&input, "a").unwrap();
        assert!(parts.branches.is_empty());
    }
}
