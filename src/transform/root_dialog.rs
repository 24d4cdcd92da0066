use serde_json::Value;

use super::{array_field, inherit_disabled, item_path};
use crate::graph::IndexedNode;
use crate::schema::{self, kinds};

/// Parts of the root document: one entry per trigger, in document order.
#[derive(Debug)]
pub struct RootDialogParts {
    pub triggers: Vec<IndexedNode>,
}

pub fn transform_root_dialog(input: &Value, self_path: &str) -> Option<RootDialogParts> {
    if !input.is_object() || schema::kind_of(input) != kinds::DIALOG {
        return None;
    }
    let triggers = array_field(input, "triggers")
        .iter()
        .enumerate()
        .filter(|(_, trigger)| trigger.is_object())
        .map(|(index, trigger)| {
            let mut trigger = trigger.clone();
            inherit_disabled(input, &mut trigger);
            IndexedNode::new(item_path(self_path, "triggers", index), trigger)
        })
        .collect();
    Some(RootDialogParts { triggers })
}
