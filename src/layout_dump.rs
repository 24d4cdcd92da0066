use crate::layout::FlowLayout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Machine-readable mirror of a computed layout, for hosts that draw the
/// flowchart themselves instead of taking the SVG.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    pub id: String,
    pub kind: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub disabled: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDump {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub direction: String,
    pub length: f32,
    pub end: [f32; 2],
    pub directed: bool,
    pub dashed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl LayoutDump {
    pub fn from_flow(flow: &FlowLayout) -> Self {
        let nodes = flow
            .nodes
            .iter()
            .map(|node| NodeDump {
                id: node.id.clone(),
                kind: node.kind.clone(),
                label: node.label.clone(),
                x: node.x,
                y: node.y,
                width: node.width,
                height: node.height,
                disabled: node.disabled,
            })
            .collect();

        let edges = flow
            .edges
            .iter()
            .map(|edge| {
                let (ex, ey) = edge.end_point();
                EdgeDump {
                    id: edge.id.clone(),
                    x: edge.x,
                    y: edge.y,
                    direction: edge.direction.as_str().to_string(),
                    length: edge.length,
                    end: [ex, ey],
                    directed: edge.options.directed,
                    dashed: edge.options.dashed,
                    label: edge.options.label.clone(),
                }
            })
            .collect();

        LayoutDump {
            width: flow.width,
            height: flow.height,
            nodes,
            edges,
        }
    }
}

pub fn write_layout_dump(flow: &FlowLayout, output: Option<&Path>) -> anyhow::Result<()> {
    let dump = LayoutDump::from_flow(flow);
    match output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(writer, &dump)?;
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::layout_dialog;
    use crate::measure::{BoundaryCache, Measurer};
    use serde_json::json;

    #[test]
    fn dumps_nodes_and_edges_as_camel_case_json() {
        let doc = json!({
            "$kind": "Dialog",
            "triggers": [
                {"$kind": "Trigger", "intent": "Greeting", "actions": [
                    {"$kind": "SendMessage", "activity": "Hello"},
                ]},
            ],
        });
        let config = LayoutConfig::default();
        let mut cache = BoundaryCache::new();
        let mut measurer = Measurer::new(&mut cache, &config);
        let flow = layout_dialog(&doc, &mut measurer);

        let value = serde_json::to_value(LayoutDump::from_flow(&flow)).unwrap();
        assert_eq!(value["width"], json!(flow.width));
        assert_eq!(value["nodes"].as_array().unwrap().len(), flow.nodes.len());
        let first = &value["nodes"][0];
        assert!(first.get("kind").is_some());
        assert!(first.get("disabled").is_some());

        let edge = &value["edges"][0];
        let end = edge["end"].as_array().unwrap();
        assert_eq!(end.len(), 2);
        // plain spine segments skip the label field entirely
        assert!(value["edges"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e.get("label").is_none()));
    }

    #[test]
    fn edge_end_points_match_direction_and_length() {
        let doc = json!({
            "$kind": "Dialog",
            "triggers": [{"$kind": "Trigger", "actions": [{"$kind": "SendMessage"}]}],
        });
        let config = LayoutConfig::default();
        let mut cache = BoundaryCache::new();
        let mut measurer = Measurer::new(&mut cache, &config);
        let flow = layout_dialog(&doc, &mut measurer);

        let dump = LayoutDump::from_flow(&flow);
        for (dumped, edge) in dump.edges.iter().zip(&flow.edges) {
            let (ex, ey) = edge.end_point();
            assert_eq!(dumped.end, [ex, ey]);
        }
    }
}
