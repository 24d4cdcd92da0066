use botflow_renderer::layout_dump::LayoutDump;
use botflow_renderer::{BoundaryCache, Config, Measurer, Theme, layout_dialog, parse_dialog, render_svg};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DialogRenderOptions {
    theme: Option<String>,
    font_family: Option<String>,
    font_size: Option<f32>,
    padding: Option<f32>,
}

fn build_config(options: DialogRenderOptions) -> Config {
    let mut config = Config::default();

    if options.theme.as_deref() == Some("dark") {
        config.theme = Theme::dark();
        config.render.background = config.theme.background.clone();
    }
    if let Some(font_family) = options.font_family {
        config.theme.font_family = font_family;
    }
    if let Some(font_size) = options.font_size {
        config.theme.font_size = font_size;
    }
    if let Some(padding) = options.padding {
        config.render.padding = padding;
    }

    config
}

fn parse_options(options_json: Option<String>) -> Result<DialogRenderOptions, JsValue> {
    match options_json {
        Some(raw) => serde_json::from_str::<DialogRenderOptions>(&raw)
            .map_err(|error| JsValue::from_str(&error.to_string())),
        None => Ok(DialogRenderOptions::default()),
    }
}

#[wasm_bindgen]
pub fn render_dialog_svg(dialog_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let config = build_config(parse_options(options_json)?);
    let doc = parse_dialog(dialog_json).map_err(|error| JsValue::from_str(&error.to_string()))?;

    let mut cache = BoundaryCache::new();
    let mut measurer = Measurer::new(&mut cache, &config.layout);
    let flow = layout_dialog(&doc, &mut measurer);
    Ok(render_svg(&flow, &config))
}

#[wasm_bindgen]
pub fn layout_dialog_json(dialog_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let config = build_config(parse_options(options_json)?);
    let doc = parse_dialog(dialog_json).map_err(|error| JsValue::from_str(&error.to_string()))?;

    let mut cache = BoundaryCache::new();
    let mut measurer = Measurer::new(&mut cache, &config.layout);
    let flow = layout_dialog(&doc, &mut measurer);
    serde_json::to_string(&LayoutDump::from_flow(&flow))
        .map_err(|error| JsValue::from_str(&error.to_string()))
}
