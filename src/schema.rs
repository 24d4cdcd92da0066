use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::DialogError;

/// `$kind` discriminators understood by the layout pipeline. Raw kinds come
/// from dialog documents; virtual kinds are synthesized by transformers and
/// never appear in input files.
pub mod kinds {
    // Raw kinds.
    pub const DIALOG: &str = "Dialog";
    pub const TRIGGER: &str = "Trigger";
    pub const IF_CONDITION: &str = "IfCondition";
    pub const SWITCH_CONDITION: &str = "SwitchCondition";
    pub const FOREACH: &str = "Foreach";
    pub const FOREACH_PAGE: &str = "ForeachPage";
    pub const TEXT_INPUT: &str = "TextInput";
    pub const NUMBER_INPUT: &str = "NumberInput";
    pub const CONFIRM_INPUT: &str = "ConfirmInput";
    pub const CHOICE_INPUT: &str = "ChoiceInput";
    pub const ATTACHMENT_INPUT: &str = "AttachmentInput";
    pub const DATETIME_INPUT: &str = "DateTimeInput";
    pub const QUESTION: &str = "Question";
    pub const SEND_MESSAGE: &str = "SendMessage";
    pub const SET_PROPERTY: &str = "SetProperty";
    pub const DELETE_PROPERTY: &str = "DeleteProperty";
    pub const BEGIN_DIALOG: &str = "BeginDialog";
    pub const END_DIALOG: &str = "EndDialog";
    pub const REPEAT_DIALOG: &str = "RepeatDialog";
    pub const CANCEL_ALL_DIALOGS: &str = "CancelAllDialogs";
    pub const EMIT_EVENT: &str = "EmitEvent";
    pub const HTTP_REQUEST: &str = "HttpRequest";
    pub const LOG_MESSAGE: &str = "LogMessage";

    // Virtual kinds.
    pub const STEP_GROUP: &str = "StepGroup";
    pub const CONDITION_NODE: &str = "ConditionNode";
    pub const CHOICE_DIAMOND: &str = "ChoiceDiamond";
    pub const LOOP_INDICATOR: &str = "LoopIndicator";
    pub const LOOP_END: &str = "LoopEnd";
    pub const BOT_ASKS: &str = "BotAsks";
    pub const USER_ANSWERS: &str = "UserAnswers";
    pub const INVALID_PROMPT_INDICATOR: &str = "InvalidPromptIndicator";
    pub const TRIGGER_SUMMARY: &str = "TriggerSummary";
    pub const TERMINATOR: &str = "Terminator";
}

/// Layout family a kind belongs to. Unknown kinds fall back to `Element`
/// so foreign `$kind` values still render as plain boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeClass {
    /// Fixed-size leaf box (actions and virtual indicator nodes).
    Element,
    /// Vertical run of steps with connector edges.
    StepGroup,
    /// Condition header, diamond, true/false branch pair.
    IfElse,
    /// Condition header, diamond, default + case branches.
    SwitchCase,
    /// Loop header, begin/end indicators, body, dashed loop-back.
    Loop,
    /// Bot-asks / user-answers pair with optional invalid-prompt marker.
    BaseInput,
    /// Prompt whose topology depends on the question type.
    Question,
    /// Root document: one lane per trigger.
    Dialog,
    /// Trigger lane: summary, step group, optional terminator.
    Trigger,
}

static SHAPES: Lazy<BTreeMap<&'static str, ShapeClass>> = Lazy::new(|| {
    use kinds::*;
    let mut map = BTreeMap::new();
    map.insert(DIALOG, ShapeClass::Dialog);
    map.insert(TRIGGER, ShapeClass::Trigger);
    map.insert(IF_CONDITION, ShapeClass::IfElse);
    map.insert(SWITCH_CONDITION, ShapeClass::SwitchCase);
    map.insert(FOREACH, ShapeClass::Loop);
    map.insert(FOREACH_PAGE, ShapeClass::Loop);
    map.insert(TEXT_INPUT, ShapeClass::BaseInput);
    map.insert(NUMBER_INPUT, ShapeClass::BaseInput);
    map.insert(CONFIRM_INPUT, ShapeClass::BaseInput);
    map.insert(CHOICE_INPUT, ShapeClass::BaseInput);
    map.insert(ATTACHMENT_INPUT, ShapeClass::BaseInput);
    map.insert(DATETIME_INPUT, ShapeClass::BaseInput);
    map.insert(QUESTION, ShapeClass::Question);
    map.insert(STEP_GROUP, ShapeClass::StepGroup);
    map
});

pub fn shape_of(kind: &str) -> ShapeClass {
    SHAPES.get(kind).copied().unwrap_or(ShapeClass::Element)
}

/// Prompt style of a `Question` node, controlling its layout strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionType {
    #[default]
    Text,
    Number,
    Confirm,
    Choice,
}

pub fn question_type(json: &Value) -> QuestionType {
    match json.get("type").and_then(Value::as_str) {
        Some("number") => QuestionType::Number,
        Some("confirm") => QuestionType::Confirm,
        Some("choice") => QuestionType::Choice,
        _ => QuestionType::Text,
    }
}

pub fn kind_of(json: &Value) -> &str {
    json.get("$kind").and_then(Value::as_str).unwrap_or("")
}

pub fn is_disabled(json: &Value) -> bool {
    json.get("disabled").and_then(Value::as_bool).unwrap_or(false)
}

fn str_field<'a>(json: &'a Value, key: &str) -> Option<&'a str> {
    json.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Display label for a node. Explicit `label` wins (virtual nodes carry one),
/// then the author-assigned `$designer.name`, then the most descriptive
/// property of the kind, then the kind itself.
pub fn label_of(json: &Value) -> String {
    if let Some(label) = str_field(json, "label") {
        return label.to_string();
    }
    if let Some(name) = json
        .get("$designer")
        .and_then(|d| str_field(d, "name"))
    {
        return name.to_string();
    }
    use kinds::*;
    let descriptive = match kind_of(json) {
        SEND_MESSAGE => str_field(json, "activity"),
        SET_PROPERTY | DELETE_PROPERTY => str_field(json, "property"),
        IF_CONDITION | SWITCH_CONDITION => str_field(json, "condition"),
        FOREACH | FOREACH_PAGE => str_field(json, "itemsProperty"),
        BEGIN_DIALOG => str_field(json, "dialog"),
        QUESTION | BOT_ASKS | TEXT_INPUT | NUMBER_INPUT | CONFIRM_INPUT | CHOICE_INPUT
        | ATTACHMENT_INPUT | DATETIME_INPUT => str_field(json, "prompt"),
        USER_ANSWERS => str_field(json, "property"),
        EMIT_EVENT => str_field(json, "eventName"),
        HTTP_REQUEST => str_field(json, "url"),
        LOG_MESSAGE => str_field(json, "text"),
        _ => None,
    };
    if let Some(text) = descriptive {
        return text.to_string();
    }
    let kind = kind_of(json);
    if kind.is_empty() {
        "?".to_string()
    } else {
        kind.to_string()
    }
}

/// Parse a dialog document. Strict JSON first, then JSON5 so hand-edited
/// files with comments and trailing commas still load.
pub fn parse_dialog(input: &str) -> Result<Value, DialogError> {
    let value = match serde_json::from_str::<Value>(input) {
        Ok(value) => value,
        Err(json_err) => match json5::from_str::<Value>(input) {
            Ok(value) => value,
            Err(_) => {
                return Err(DialogError::Json {
                    message: json_err.to_string(),
                });
            }
        },
    };
    if !value.is_object() {
        return Err(DialogError::NotAnObject);
    }
    Ok(value)
}
