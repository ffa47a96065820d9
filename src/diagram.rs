//! Declarative description of the "input JSON -> engine -> decision result" flow diagram.
//!
//! This module only builds the node/edge list; drawing, layout and
//! animation belong to the graph renderer on the page. Field names are
//! serialized in the renderer's camelCase shape.

use crate::i18n::Translator;
use serde::Serialize;

/// Sample request shown in the input node.
pub const SAMPLE_INPUT: &str = r#"{
  "user": {
    "vip": true,
    "level": "gold"
  },
  "order": {
    "amount": 1500
  }
}"#;

/// Sample decision shown in the output node.
pub const SAMPLE_OUTPUT: &str = r#"{
  "result": "VIP_DISCOUNT",
  "discount": 0.20,
  "trace": ["check_vip", "vip_discount"],
  "duration_us": 1.63
}"#;

/// Logo shown in the engine node.
pub const ENGINE_LOGO: &str = "/images/favicon_io/apple-touch-icon.png";

const LABEL_FONT: &str = "JetBrains Mono, monospace";
const INPUT_COLOR: &str = "#f97316";
const OUTPUT_COLOR: &str = "#22c55e";

/// Display strings for the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDiagram {
    pub input_label: String,
    pub output_label: String,
    pub engine_label: String,
    pub engine_subtitle: String,
}

impl Default for FlowDiagram {
    fn default() -> Self {
        Self {
            input_label: "Input JSON".to_string(),
            output_label: "Decision Result".to_string(),
            engine_label: "ORDO".to_string(),
            engine_subtitle: "ENGINE".to_string(),
        }
    }
}

impl FlowDiagram {
    /// Labels from the `diagram.*` keys, keeping the built-in label for any
    /// key that resolves to nothing usable.
    pub fn localized(t: &Translator<'_>) -> Self {
        let label = |key: &str, fallback: String| {
            t.get(key)
                .ok()
                .and_then(|translation| translation.as_text())
                .filter(|text| !text.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        let defaults = Self::default();
        Self {
            input_label: label("diagram.input", defaults.input_label),
            output_label: label("diagram.output", defaults.output_label),
            engine_label: label("diagram.engine", defaults.engine_label),
            engine_subtitle: label("diagram.subtitle", defaults.engine_subtitle),
        }
    }

    /// Build the fixed 3-node, 2-edge graph.
    pub fn graph(&self) -> FlowGraph {
        let nodes = vec![
            Node {
                id: "input",
                kind: NodeKind::InputNode,
                position: Position { x: 0.0, y: 80.0 },
                data: NodeData::Code {
                    label: self.input_label.clone(),
                    code: SAMPLE_INPUT,
                },
            },
            Node {
                id: "engine",
                kind: NodeKind::EngineNode,
                position: Position { x: 320.0, y: 50.0 },
                data: NodeData::Engine {
                    label: self.engine_label.clone(),
                    subtitle: self.engine_subtitle.clone(),
                    logo: ENGINE_LOGO,
                    particles: vec!["JIT", "0 Alloc", "1.63µs"],
                },
            },
            Node {
                id: "output",
                kind: NodeKind::OutputNode,
                position: Position { x: 620.0, y: 95.0 },
                data: NodeData::Code {
                    label: self.output_label.clone(),
                    code: SAMPLE_OUTPUT,
                },
            },
        ];

        let edges = vec![
            Edge::animated("input-engine", "input", "engine", INPUT_COLOR, "JSON"),
            Edge::animated("engine-output", "engine", "output", OUTPUT_COLOR, "1.63µs"),
        ];

        FlowGraph {
            nodes,
            edges,
            options: ViewOptions::static_view(),
        }
    }
}

/// Graph handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub options: ViewOptions,
}

impl FlowGraph {
    /// Find a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    InputNode,
    EngineNode,
    OutputNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeData {
    /// Input and output nodes: a header label above a code block.
    Code { label: String, code: &'static str },
    Engine {
        label: String,
        subtitle: String,
        logo: &'static str,
        particles: Vec<&'static str>,
    },
}

impl NodeData {
    pub fn label(&self) -> &str {
        match self {
            NodeData::Code { label, .. } | NodeData::Engine { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: &'static str,
    pub source: &'static str,
    pub target: &'static str,
    pub animated: bool,
    pub style: EdgeStyle,
    pub marker_end: Marker,
    pub label: &'static str,
    pub label_style: LabelStyle,
    pub label_bg_style: LabelBackground,
    pub label_bg_padding: [u32; 2],
    pub label_bg_border_radius: u32,
}

impl Edge {
    fn animated(
        id: &'static str,
        source: &'static str,
        target: &'static str,
        color: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            id,
            source,
            target,
            animated: true,
            style: EdgeStyle {
                stroke: color,
                stroke_width: 2,
            },
            marker_end: Marker {
                kind: "arrowclosed",
                color,
                width: 20,
                height: 20,
            },
            label,
            label_style: LabelStyle {
                fill: "#94a3b8",
                font_size: 11,
                font_family: LABEL_FONT,
            },
            label_bg_style: LabelBackground {
                fill: "#0f172a",
                fill_opacity: 0.9,
            },
            label_bg_padding: [6, 4],
            label_bg_border_radius: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: &'static str,
    pub stroke_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub color: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    pub fill: &'static str,
    pub font_size: u32,
    pub font_family: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelBackground {
    pub fill: &'static str,
    pub fill_opacity: f64,
}

/// Renderer options. The diagram is decorative: every interaction is off.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    pub fit_view: bool,
    pub fit_view_padding: f64,
    pub nodes_draggable: bool,
    pub nodes_connectable: bool,
    pub elements_selectable: bool,
    pub pan_on_drag: bool,
    pub zoom_on_scroll: bool,
    pub zoom_on_pinch: bool,
    pub zoom_on_double_click: bool,
    pub prevent_scrolling: bool,
    pub default_edge_type: &'static str,
    pub background: Background,
}

impl ViewOptions {
    fn static_view() -> Self {
        Self {
            fit_view: true,
            fit_view_padding: 0.2,
            nodes_draggable: false,
            nodes_connectable: false,
            elements_selectable: false,
            pan_on_drag: false,
            zoom_on_scroll: false,
            zoom_on_pinch: false,
            zoom_on_double_click: false,
            prevent_scrolling: false,
            default_edge_type: "smoothstep",
            background: Background {
                color: "#1e293b",
                gap: 20,
                size: 1,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Background {
    pub color: &'static str,
    pub gap: u32,
    pub size: u32,
}
