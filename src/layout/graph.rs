//! Node and edge records handed to the graph widget.
//!
//! Field names serialize in the shape React Flow expects (`type`,
//! `sourcePosition`, `data.label`, ...), so the JSON can be passed to the
//! widget unchanged.

use serde::Serialize;

const NODE_TYPE: &str = "default";
const BOX_SHADOW: &str = "0 0px 6px rgba(0,0,0, 0.2)";
const BORDER_RADIUS: &str = "8px";
const ROOT_FONT_FAMILY: &str = "PingFang SC, sans-serif";
const EDGE_STROKE_WIDTH: f64 = 1.0;

/// Prompts longer than this many characters get the smaller root font.
const LONG_PROMPT_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Side of a node where edges attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTier {
    Root,
    Image,
    Category,
    Item,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub width: f64,
    pub padding: &'static str,
    pub border: &'static str,
    pub border_radius: &'static str,
    pub box_shadow: &'static str,
    pub background_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<&'static str>,
}

impl NodeStyle {
    #[must_use]
    pub fn for_tier(tier: NodeTier) -> Self {
        let (width, padding, border, background_color) = match tier {
            NodeTier::Root => (250.0, "10px", "2px solid #8bcbff", "#e3f2fd"),
            NodeTier::Image => (150.0, "8px", "2px solid #8bcbff", "#f3e5f5"),
            NodeTier::Category => (150.0, "8px", "2px solid #81d59c", "#f1f8e9"),
            NodeTier::Item => (150.0, "4px 10px", "2px solid #ffce84", "#fff3e0"),
        };
        Self {
            width,
            padding,
            border,
            border_radius: BORDER_RADIUS,
            box_shadow: BOX_SHADOW,
            background_color,
            font_size: None,
            font_family: None,
        }
    }

    /// Root style with the font sized to the primary prompt length.
    #[must_use]
    pub fn root(prompt: &str) -> Self {
        let font_size = if prompt.chars().count() > LONG_PROMPT_CHARS { "14px" } else { "18px" };
        Self { font_size: Some(font_size), font_family: Some(ROOT_FONT_FAMILY), ..Self::for_tier(NodeTier::Root) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub position: Position,
    pub data: NodeData,
    pub style: NodeStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_position: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_position: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub draggable: bool,
}

impl Node {
    /// Node with tier-default style and connection sides.
    #[must_use]
    pub fn new(id: impl Into<String>, tier: NodeTier, position: Position, label: impl Into<String>) -> Self {
        let (source_position, target_position) = match tier {
            NodeTier::Root => (Some(Side::Right), None),
            NodeTier::Image => (None, Some(Side::Top)),
            NodeTier::Category | NodeTier::Item => (Some(Side::Right), Some(Side::Left)),
        };
        Self {
            id: id.into(),
            kind: NODE_TYPE,
            position,
            data: NodeData { label: label.into(), image_url: None },
            style: NodeStyle::for_tier(tier),
            source_position,
            target_position,
            width: None,
            height: None,
            draggable: true,
        }
    }
}

// =============================================================================
// EDGES
// =============================================================================

/// Which connection an edge draws; selects the stroke colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeTier {
    Media,
    Category,
    Item,
}

impl EdgeTier {
    fn stroke(self) -> &'static str {
        match self {
            Self::Media => "#9c27b0",
            Self::Category => "#2196f3",
            Self::Item => "#4caf50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveStyle {
    Bezier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: &'static str,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub curve: CurveStyle,
    pub animated: bool,
    pub style: EdgeStyle,
}

impl Edge {
    #[must_use]
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>, tier: EdgeTier) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            curve: CurveStyle::Bezier,
            animated: tier == EdgeTier::Media,
            style: EdgeStyle { stroke: tier.stroke(), stroke_width: EDGE_STROKE_WIDTH },
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Freshly built node and edge lists for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphOutput {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
