use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub element_fill: String,
    pub element_border: String,
    pub element_text: String,
    pub trigger_fill: String,
    pub trigger_border: String,
    pub trigger_text: String,
    pub diamond_fill: String,
    pub diamond_border: String,
    pub indicator_fill: String,
    pub indicator_border: String,
    pub brick_fill: String,
    pub brick_border: String,
    pub edge_color: String,
    pub edge_label_color: String,
    pub edge_label_background: String,
    pub disabled_fill: String,
    pub disabled_border: String,
    pub disabled_text: String,
    pub background: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            font_family: "Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 12.0,
            element_fill: "#FFFFFF".to_string(),
            element_border: "#D1D1D1".to_string(),
            element_text: "#323130".to_string(),
            trigger_fill: "#F3F2F1".to_string(),
            trigger_border: "#C8C6C4".to_string(),
            trigger_text: "#605E5C".to_string(),
            diamond_fill: "#FFFFFF".to_string(),
            diamond_border: "#C8C6C4".to_string(),
            indicator_fill: "#FFFFFF".to_string(),
            indicator_border: "#979593".to_string(),
            brick_fill: "#FFF4CE".to_string(),
            brick_border: "#EAA300".to_string(),
            edge_color: "#BDBDBD".to_string(),
            edge_label_color: "#757575".to_string(),
            edge_label_background: "#F6F6F6".to_string(),
            disabled_fill: "#F8F8F8".to_string(),
            disabled_border: "#E1E1E1".to_string(),
            disabled_text: "#A19F9D".to_string(),
            background: "#F6F6F6".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 12.0,
            element_fill: "#252423".to_string(),
            element_border: "#3B3A39".to_string(),
            element_text: "#F3F2F1".to_string(),
            trigger_fill: "#2D2C2B".to_string(),
            trigger_border: "#3B3A39".to_string(),
            trigger_text: "#C8C6C4".to_string(),
            diamond_fill: "#252423".to_string(),
            diamond_border: "#605E5C".to_string(),
            indicator_fill: "#252423".to_string(),
            indicator_border: "#797775".to_string(),
            brick_fill: "#433519".to_string(),
            brick_border: "#C87E0E".to_string(),
            edge_color: "#605E5C".to_string(),
            edge_label_color: "#979593".to_string(),
            edge_label_background: "#1B1A19".to_string(),
            disabled_fill: "#201F1E".to_string(),
            disabled_border: "#323130".to_string(),
            disabled_text: "#605E5C".to_string(),
            background: "#1B1A19".to_string(),
        }
    }
}
