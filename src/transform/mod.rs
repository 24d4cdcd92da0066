//! Transformers decompose one raw node into the virtual parts its layouter
//! positions. They never mutate the input document; parts are fresh JSON
//! values carrying path-like ids derived from the parent's id.

pub mod base_input;
pub mod foreach;
pub mod if_condition;
pub mod question;
pub mod root_dialog;
pub mod step_group;
pub mod switch_condition;
pub mod trigger;

pub use base_input::{BaseInputParts, transform_base_input};
pub use foreach::{ForeachParts, transform_foreach};
pub use if_condition::{IfConditionParts, transform_if_condition};
pub use question::{QuestionParts, transform_question};
pub use root_dialog::{RootDialogParts, transform_root_dialog};
pub use step_group::transform_step_group;
pub use switch_condition::{SwitchConditionParts, transform_switch_condition};
pub use trigger::{TriggerParts, transform_trigger};

use serde_json::{Value, json};

use crate::schema::{self, kinds};

/// Join a role or field name onto a parent path. The root document has the
/// empty path, so its direct fields keep bare names.
pub(crate) fn child_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

pub(crate) fn item_path(parent: &str, field: &str, index: usize) -> String {
    format!("{}[{index}]", child_path(parent, field))
}

/// Disabled containers disable every part derived from them.
pub(crate) fn inherit_disabled(parent: &Value, child: &mut Value) {
    if schema::is_disabled(parent) && child.is_object() {
        child["disabled"] = Value::Bool(true);
    }
}

/// Header node for a branching or looping container: the original payload
/// with the `$kind` swapped for the virtual header kind and an explicit
/// display label. Keeping the payload lets selection map back to the
/// original element.
pub(crate) fn as_header(input: &Value, kind: &str, label: String) -> Value {
    let mut header = input.clone();
    header["$kind"] = json!(kind);
    header["label"] = json!(label);
    header
}

/// Small fixed-size virtual part (diamond, loop dots, terminator, brick).
pub(crate) fn indicator_json(parent: &Value, kind: &str) -> Value {
    let mut node = json!({ "$kind": kind });
    inherit_disabled(parent, &mut node);
    node
}

/// Virtual step group wrapping an action array.
pub(crate) fn step_group_json(parent: &Value, children: &[Value], label: Option<&str>) -> Value {
    let mut group = json!({ "$kind": kinds::STEP_GROUP, "children": children });
    if let Some(label) = label {
        group["label"] = json!(label);
    }
    inherit_disabled(parent, &mut group);
    group
}

/// Read an array field, treating a missing or malformed value as empty.
pub(crate) fn array_field<'a>(input: &'a Value, field: &str) -> &'a [Value] {
    input
        .get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
