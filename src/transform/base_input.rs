use serde_json::{Value, json};

use super::{child_path, indicator_json};
use crate::graph::IndexedNode;
use crate::schema::{self, ShapeClass, kinds};

/// Input kinds that re-prompt on invalid answers and therefore show the
/// invalid-prompt brick next to the user-answers row.
const INPUTS_WITH_INVALID_PROMPT: [&str; 5] = [
    kinds::TEXT_INPUT,
    kinds::NUMBER_INPUT,
    kinds::CONFIRM_INPUT,
    kinds::CHOICE_INPUT,
    kinds::DATETIME_INPUT,
];

/// Parts of an input element: the bot-asks card, the user-answers card and
/// the optional invalid-prompt brick.
#[derive(Debug)]
pub struct BaseInputParts {
    pub bot_asks: IndexedNode,
    pub user_answers: IndexedNode,
    pub invalid_prompt: Option<IndexedNode>,
}

fn role_clone(input: &Value, kind: &str) -> Value {
    let mut clone = input.clone();
    clone["$kind"] = json!(kind);
    clone
}

pub fn transform_base_input(input: &Value, self_path: &str) -> Option<BaseInputParts> {
    if !input.is_object() || schema::shape_of(schema::kind_of(input)) != ShapeClass::BaseInput {
        return None;
    }
    let kind = schema::kind_of(input);
    let invalid_prompt = INPUTS_WITH_INVALID_PROMPT.contains(&kind).then(|| {
        IndexedNode::new(
            child_path(self_path, "invalidPrompt"),
            indicator_json(input, kinds::INVALID_PROMPT_INDICATOR),
        )
    });
    Some(BaseInputParts {
        bot_asks: IndexedNode::new(
            child_path(self_path, "botAsks"),
            role_clone(input, kinds::BOT_ASKS),
        ),
        user_answers: IndexedNode::new(
            child_path(self_path, "userAnswers"),
            role_clone(input, kinds::USER_ANSWERS),
        ),
        invalid_prompt,
    })
}
