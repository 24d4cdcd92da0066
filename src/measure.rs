use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde_json::Value;

use crate::config::LayoutConfig;
use crate::graph::Boundary;
use crate::layout::calculators::{
    calculate_base_input_boundary, calculate_dialog_boundary, calculate_foreach_boundary,
    calculate_if_else_boundary, calculate_question_boundary, calculate_sequence_boundary,
    calculate_switch_case_boundary,
};
use crate::schema::{self, ShapeClass, kinds};
use crate::transform;

fn hash_value(value: &Value, state: &mut DefaultHasher) {
    match value {
        Value::Null => 0u8.hash(state),
        Value::Bool(b) => {
            1u8.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            2u8.hash(state);
            n.to_string().hash(state);
        }
        Value::String(s) => {
            3u8.hash(state);
            s.hash(state);
        }
        Value::Array(items) => {
            4u8.hash(state);
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            5u8.hash(state);
            map.len().hash(state);
            for (key, item) in map {
                key.hash(state);
                hash_value(item, state);
            }
        }
    }
}

/// Key for the boundary cache: a hash over the payload's structure. Object
/// keys iterate in sorted order, so structurally equal payloads collide on
/// purpose and share one entry.
fn structural_hash(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    hash_value(value, &mut hasher);
    hasher.finish()
}

/// Memo of measured boundaries keyed by payload structure. Entries can also
/// be injected up front (`store_measured`) for nodes whose size came from
/// somewhere else, e.g. a DOM measurement pass in a hosting editor.
#[derive(Debug, Default)]
pub struct BoundaryCache {
    entries: HashMap<u64, Boundary>,
}

impl BoundaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, json: &Value) -> Option<Boundary> {
        self.entries.get(&structural_hash(json)).copied()
    }

    pub fn insert(&mut self, json: &Value, boundary: Boundary) {
        self.entries.insert(structural_hash(json), boundary);
    }

    /// Forget the boundary for one payload so the next measurement
    /// recomputes it. Returns whether an entry was removed.
    pub fn uncache_boundary(&mut self, json: &Value) -> bool {
        self.entries.remove(&structural_hash(json)).is_some()
    }

    /// Record an externally measured size. The axis defaults to the center,
    /// matching how plain boxes are measured.
    pub fn store_measured(&mut self, json: &Value, width: f32, height: f32) {
        self.insert(json, Boundary::new(width, height));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Measures payload boundaries through the cache. Container kinds are
/// decomposed with the same transformers the layouters use, so a container's
/// measured boundary always matches what its layouter will produce.
pub struct Measurer<'a> {
    pub cache: &'a mut BoundaryCache,
    pub config: &'a LayoutConfig,
}

impl<'a> Measurer<'a> {
    pub fn new(cache: &'a mut BoundaryCache, config: &'a LayoutConfig) -> Self {
        Self { cache, config }
    }

    pub fn measure_json_boundary(&mut self, json: &Value) -> Boundary {
        if !json.is_object() {
            return Boundary::default();
        }
        if let Some(hit) = self.cache.get(json) {
            return hit;
        }
        let boundary = self.compute(json);
        self.cache.insert(json, boundary);
        boundary
    }

    fn compute(&mut self, json: &Value) -> Boundary {
        let kind = schema::kind_of(json);
        match schema::shape_of(kind) {
            ShapeClass::Element => self.element_boundary(kind),
            ShapeClass::StepGroup => self.step_group_boundary(json),
            ShapeClass::IfElse => self.if_else_boundary(json),
            ShapeClass::SwitchCase => self.switch_case_boundary(json),
            ShapeClass::Loop => self.foreach_boundary(json),
            ShapeClass::BaseInput => self.base_input_boundary(json),
            ShapeClass::Question => self.question_boundary(json),
            ShapeClass::Trigger => self.trigger_boundary(json),
            ShapeClass::Dialog => self.dialog_boundary(json),
        }
    }

    fn element_boundary(&self, kind: &str) -> Boundary {
        let config = self.config;
        match kind {
            kinds::CHOICE_DIAMOND => Boundary::new(config.diamond_width, config.diamond_height),
            kinds::LOOP_INDICATOR | kinds::LOOP_END => {
                Boundary::new(config.icon_size, config.icon_size)
            }
            kinds::TERMINATOR => Boundary::new(config.terminator_size, config.terminator_size),
            kinds::INVALID_PROMPT_INDICATOR => Boundary::new(config.brick_size, config.brick_size),
            _ => Boundary::new(config.element_width, config.element_height),
        }
    }

    fn step_group_boundary(&mut self, json: &Value) -> Boundary {
        let Some(children) = transform::transform_step_group(json, "") else {
            return Boundary::default();
        };
        let bounds: Vec<Boundary> = children
            .iter()
            .map(|child| self.measure_json_boundary(&child.json))
            .collect();
        calculate_sequence_boundary(&bounds, true, true, self.config)
    }

    fn if_else_boundary(&mut self, json: &Value) -> Boundary {
        let Some(parts) = transform::transform_if_condition(json, "") else {
            return Boundary::default();
        };
        let condition = self.measure_json_boundary(&parts.condition.json);
        let choice = self.measure_json_boundary(&parts.choice.json);
        let if_branch = self.measure_json_boundary(&parts.if_group.json);
        let else_branch = self.measure_json_boundary(&parts.else_group.json);
        calculate_if_else_boundary(
            Some(&condition),
            Some(&choice),
            &if_branch,
            &else_branch,
            self.config,
        )
    }

    fn switch_case_boundary(&mut self, json: &Value) -> Boundary {
        let Some(parts) = transform::transform_switch_condition(json, "") else {
            return Boundary::default();
        };
        let condition = self.measure_json_boundary(&parts.condition.json);
        let choice = self.measure_json_boundary(&parts.choice.json);
        let branches: Vec<Boundary> = parts
            .branches
            .iter()
            .map(|branch| self.measure_json_boundary(&branch.json))
            .collect();
        calculate_switch_case_boundary(Some(&condition), Some(&choice), &branches, self.config)
    }

    fn foreach_boundary(&mut self, json: &Value) -> Boundary {
        let Some(parts) = transform::transform_foreach(json, "") else {
            return Boundary::default();
        };
        let detail = self.measure_json_boundary(&parts.detail.json);
        let loop_begin = self.measure_json_boundary(&parts.loop_begin.json);
        let loop_end = self.measure_json_boundary(&parts.loop_end.json);
        let steps = self.measure_json_boundary(&parts.steps.json);
        calculate_foreach_boundary(
            Some(&detail),
            Some(&steps),
            &loop_begin,
            &loop_end,
            self.config,
        )
    }

    fn base_input_boundary(&mut self, json: &Value) -> Boundary {
        let Some(parts) = transform::transform_base_input(json, "") else {
            return Boundary::default();
        };
        let bot_asks = self.measure_json_boundary(&parts.bot_asks.json);
        let user_answers = self.measure_json_boundary(&parts.user_answers.json);
        let brick = parts
            .invalid_prompt
            .as_ref()
            .map(|part| self.measure_json_boundary(&part.json));
        calculate_base_input_boundary(&bot_asks, &user_answers, brick.as_ref(), self.config)
    }

    fn question_boundary(&mut self, json: &Value) -> Boundary {
        let Some(parts) = transform::transform_question(json, "") else {
            return Boundary::default();
        };
        let question = self.measure_json_boundary(&parts.question.json);
        let choice = parts
            .choice
            .as_ref()
            .map(|part| self.measure_json_boundary(&part.json));
        let branches: Vec<Boundary> = parts
            .branches
            .iter()
            .map(|branch| self.measure_json_boundary(&branch.json))
            .collect();
        calculate_question_boundary(
            &question,
            choice.as_ref(),
            &branches,
            schema::question_type(json),
            self.config,
        )
    }

    fn trigger_boundary(&mut self, json: &Value) -> Boundary {
        let Some(parts) = transform::transform_trigger(json, "") else {
            return Boundary::default();
        };
        let mut bounds = vec![
            self.measure_json_boundary(&parts.summary.json),
            self.measure_json_boundary(&parts.content.json),
        ];
        if self.config.shows_terminator(parts.trailing_kind.as_deref()) {
            bounds.push(Boundary::new(
                self.config.terminator_size,
                self.config.terminator_size,
            ));
        }
        calculate_sequence_boundary(&bounds, false, false, self.config)
    }

    fn dialog_boundary(&mut self, json: &Value) -> Boundary {
        let Some(parts) = transform::transform_root_dialog(json, "") else {
            return Boundary::default();
        };
        let lanes: Vec<Boundary> = parts
            .triggers
            .iter()
            .map(|trigger| self.measure_json_boundary(&trigger.json))
            .collect();
        calculate_dialog_boundary(&lanes, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn plain_elements_measure_to_the_configured_box() {
        let config = config();
        let mut cache = BoundaryCache::new();
        let mut measurer = Measurer::new(&mut cache, &config);
        let b = measurer.measure_json_boundary(&json!({"$kind": "SendMessage"}));
        assert_eq!(b.width, 200.0);
        assert_eq!(b.height, 48.0);
        assert_eq!(b.axis_x, 100.0);
    }

    #[test]
    fn non_objects_measure_empty_and_are_not_cached() {
        let config = config();
        let mut cache = BoundaryCache::new();
        let mut measurer = Measurer::new(&mut cache, &config);
        assert!(measurer.measure_json_boundary(&json!(null)).is_empty());
        assert!(measurer.measure_json_boundary(&json!("x")).is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn structurally_equal_payloads_share_one_entry() {
        let config = config();
        let mut cache = BoundaryCache::new();
        let mut measurer = Measurer::new(&mut cache, &config);
        measurer.measure_json_boundary(&json!({"$kind": "SendMessage", "activity": "hi"}));
        measurer.measure_json_boundary(&json!({"activity": "hi", "$kind": "SendMessage"}));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn injected_measurements_preempt_computation() {
        let config = config();
        let mut cache = BoundaryCache::new();
        let payload = json!({"$kind": "SendMessage", "activity": "long text"});
        cache.store_measured(&payload, 320.0, 80.0);
        let mut measurer = Measurer::new(&mut cache, &config);
        let b = measurer.measure_json_boundary(&payload);
        assert_eq!((b.width, b.height), (320.0, 80.0));
        assert_eq!(b.axis_x, 160.0);
    }

    #[test]
    fn uncache_forces_a_recompute_with_the_same_result() {
        let config = config();
        let mut cache = BoundaryCache::new();
        let payload = json!({
            "$kind": "IfCondition",
            "condition": "x",
            "actions": [{"$kind": "SendMessage"}],
        });
        let first = {
            let mut measurer = Measurer::new(&mut cache, &config);
            measurer.measure_json_boundary(&payload)
        };
        assert!(cache.uncache_boundary(&payload));
        assert!(!cache.uncache_boundary(&payload));
        let second = {
            let mut measurer = Measurer::new(&mut cache, &config);
            measurer.measure_json_boundary(&payload)
        };
        assert_eq!(first, second);
    }

    #[test]
    fn containers_cache_their_parts_too() {
        let config = config();
        let mut cache = BoundaryCache::new();
        let payload = json!({
            "$kind": "IfCondition",
            "condition": "x",
            "actions": [{"$kind": "SendMessage"}],
            "elseActions": [],
        });
        let mut measurer = Measurer::new(&mut cache, &config);
        let boundary = measurer.measure_json_boundary(&payload);
        assert!(boundary.width > 0.0);
        // container + header + diamond + two groups + the child message
        assert!(cache.len() >= 5);
    }

    #[test]
    fn clear_empties_the_cache() {
        let config = config();
        let mut cache = BoundaryCache::new();
        let mut measurer = Measurer::new(&mut cache, &config);
        measurer.measure_json_boundary(&json!({"$kind": "SendMessage"}));
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
