use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sizes, gaps and policies driving boundary measurement and layout.
/// Lengths are CSS pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub element_width: f32,
    pub element_height: f32,
    pub diamond_width: f32,
    pub diamond_height: f32,
    pub icon_size: f32,
    pub terminator_size: f32,
    pub brick_size: f32,
    pub element_interval_x: f32,
    pub element_interval_y: f32,
    pub branch_interval_x: f32,
    pub branch_interval_y: f32,
    pub loop_edge_margin: f32,
    pub trigger_interval_y: f32,
    pub max_label_width_chars: usize,
    pub invalid_prompt_loop: bool,
    pub trailing_terminator_suppressors: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            element_width: 200.0,
            element_height: 48.0,
            diamond_width: 30.0,
            diamond_height: 12.0,
            icon_size: 16.0,
            terminator_size: 16.0,
            brick_size: 24.0,
            element_interval_x: 50.0,
            element_interval_y: 20.0,
            branch_interval_x: 50.0,
            branch_interval_y: 10.0,
            loop_edge_margin: 20.0,
            trigger_interval_y: 48.0,
            max_label_width_chars: 28,
            invalid_prompt_loop: true,
            trailing_terminator_suppressors: vec![
                "Question".to_string(),
                "EndDialog".to_string(),
                "RepeatDialog".to_string(),
                "CancelAllDialogs".to_string(),
            ],
        }
    }
}

impl LayoutConfig {
    /// Length of the half-step connector stubs entering and leaving a
    /// step group.
    pub fn edge_stub(&self) -> f32 {
        self.element_interval_y / 2.0
    }

    /// Whether a trigger lane ends in a terminator dot given the kind of
    /// its last action.
    pub fn shows_terminator(&self, trailing_kind: Option<&str>) -> bool {
        match trailing_kind {
            Some(kind) => !self
                .trailing_terminator_suppressors
                .iter()
                .any(|s| s == kind),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub padding: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: 24.0,
            background: "#F6F6F6".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::light();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    element_width: Option<f32>,
    element_height: Option<f32>,
    diamond_width: Option<f32>,
    diamond_height: Option<f32>,
    icon_size: Option<f32>,
    terminator_size: Option<f32>,
    brick_size: Option<f32>,
    element_interval_x: Option<f32>,
    element_interval_y: Option<f32>,
    branch_interval_x: Option<f32>,
    branch_interval_y: Option<f32>,
    loop_edge_margin: Option<f32>,
    trigger_interval_y: Option<f32>,
    max_label_width_chars: Option<usize>,
    invalid_prompt_loop: Option<bool>,
    trailing_terminator_suppressors: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    element_fill: Option<String>,
    element_border: Option<String>,
    element_text: Option<String>,
    trigger_fill: Option<String>,
    trigger_border: Option<String>,
    trigger_text: Option<String>,
    diamond_fill: Option<String>,
    diamond_border: Option<String>,
    indicator_fill: Option<String>,
    indicator_border: Option<String>,
    brick_fill: Option<String>,
    brick_border: Option<String>,
    edge_color: Option<String>,
    edge_label_color: Option<String>,
    edge_label_background: Option<String>,
    disabled_fill: Option<String>,
    disabled_border: Option<String>,
    disabled_text: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    padding: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "dark" {
            config.theme = Theme::dark();
        } else if theme_name == "light" || theme_name == "default" {
            config.theme = Theme::light();
        }
        config.render.background = config.theme.background.clone();
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.element_fill {
            config.theme.element_fill = v;
        }
        if let Some(v) = vars.element_border {
            config.theme.element_border = v;
        }
        if let Some(v) = vars.element_text {
            config.theme.element_text = v;
        }
        if let Some(v) = vars.trigger_fill {
            config.theme.trigger_fill = v;
        }
        if let Some(v) = vars.trigger_border {
            config.theme.trigger_border = v;
        }
        if let Some(v) = vars.trigger_text {
            config.theme.trigger_text = v;
        }
        if let Some(v) = vars.diamond_fill {
            config.theme.diamond_fill = v;
        }
        if let Some(v) = vars.diamond_border {
            config.theme.diamond_border = v;
        }
        if let Some(v) = vars.indicator_fill {
            config.theme.indicator_fill = v;
        }
        if let Some(v) = vars.indicator_border {
            config.theme.indicator_border = v;
        }
        if let Some(v) = vars.brick_fill {
            config.theme.brick_fill = v;
        }
        if let Some(v) = vars.brick_border {
            config.theme.brick_border = v;
        }
        if let Some(v) = vars.edge_color {
            config.theme.edge_color = v;
        }
        if let Some(v) = vars.edge_label_color {
            config.theme.edge_label_color = v;
        }
        if let Some(v) = vars.edge_label_background {
            config.theme.edge_label_background = v;
        }
        if let Some(v) = vars.disabled_fill {
            config.theme.disabled_fill = v;
        }
        if let Some(v) = vars.disabled_border {
            config.theme.disabled_border = v;
        }
        if let Some(v) = vars.disabled_text {
            config.theme.disabled_text = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
            config.render.background = config.theme.background.clone();
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.element_width {
            config.layout.element_width = v;
        }
        if let Some(v) = layout.element_height {
            config.layout.element_height = v;
        }
        if let Some(v) = layout.diamond_width {
            config.layout.diamond_width = v;
        }
        if let Some(v) = layout.diamond_height {
            config.layout.diamond_height = v;
        }
        if let Some(v) = layout.icon_size {
            config.layout.icon_size = v;
        }
        if let Some(v) = layout.terminator_size {
            config.layout.terminator_size = v;
        }
        if let Some(v) = layout.brick_size {
            config.layout.brick_size = v;
        }
        if let Some(v) = layout.element_interval_x {
            config.layout.element_interval_x = v;
        }
        if let Some(v) = layout.element_interval_y {
            config.layout.element_interval_y = v;
        }
        if let Some(v) = layout.branch_interval_x {
            config.layout.branch_interval_x = v;
        }
        if let Some(v) = layout.branch_interval_y {
            config.layout.branch_interval_y = v;
        }
        if let Some(v) = layout.loop_edge_margin {
            config.layout.loop_edge_margin = v;
        }
        if let Some(v) = layout.trigger_interval_y {
            config.layout.trigger_interval_y = v;
        }
        if let Some(v) = layout.max_label_width_chars {
            config.layout.max_label_width_chars = v;
        }
        if let Some(v) = layout.invalid_prompt_loop {
            config.layout.invalid_prompt_loop = v;
        }
        if let Some(v) = layout.trailing_terminator_suppressors {
            config.layout.trailing_terminator_suppressors = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.padding {
            config.render.padding = v;
        }
        if let Some(v) = render.background {
            config.render.background = v;
        }
    }

    Ok(config)
}
