use serde_json::Value;

use super::{array_field, inherit_disabled};
use crate::graph::IndexedNode;
use crate::schema::{self, kinds};

/// Decompose a virtual step group into its child steps. Ids keep the
/// original array index so they stay valid selection paths even when
/// malformed entries are skipped.
pub fn transform_step_group(input: &Value, self_path: &str) -> Option<Vec<IndexedNode>> {
    if !input.is_object() || schema::kind_of(input) != kinds::STEP_GROUP {
        return None;
    }
    let children = array_field(input, "children");
    Some(
        children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.is_object())
            .map(|(index, child)| {
                let mut child = child.clone();
                inherit_disabled(input, &mut child);
                IndexedNode::new(format!("{self_path}[{index}]"), child)
            })
            .collect(),
    )
}
