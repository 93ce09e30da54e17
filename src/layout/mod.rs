//! Layout engine: converts a prompt record into a three-tier node/edge graph.
//!
//! DESIGN
//! ======
//! The tree is fixed: a root node for the prompt text, an optional image node,
//! one node per category, and one node per phrase of the selected language.
//! Items are stacked in rows and the whole stack is centered on `center_y`;
//! each category is centered over the span of its own items. Columns are fixed
//! per tier.
//!
//! The engine is a pure function. It takes the decoded structure, never the
//! raw column, and builds a fresh `GraphOutput` on every call.

pub mod graph;
pub mod labels;

use crate::prompt::{Language, PromptRecord, Structure};
use graph::{Edge, EdgeTier, GraphOutput, Node, NodeStyle, NodeTier, Position};
use labels::CategoryLabels;

pub const ROOT_ID: &str = "root";
pub const IMAGE_NODE_ID: &str = "image-node";

// Layout constants (in widget units).
const ROW_HEIGHT: f64 = 50.0;
const LEVEL_PADDING: f64 = 400.0;
const CENTER_Y: f64 = 300.0;
const ROOT_ANCHOR: Position = Position { x: 50.0, y: 50.0 };
const IMAGE_ANCHOR: Position = Position { x: 0.0, y: 300.0 };
const IMAGE_BOX: f64 = 300.0;

/// The image host serves assets under this prefix.
const IMAGE_HOST_BOUNDARY: &str = ".com/";
const IMAGE_PATH_PREFIX: &str = ".com/midjourney/";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Vertical distance between consecutive item rows.
    pub row_height: f64,
    /// Horizontal distance from the tier origin to the category column.
    pub level_padding: f64,
    /// Tier origin; categories and items are offset from it.
    pub origin_x: f64,
    /// Line the item stack is centered on.
    pub center_y: f64,
    pub root_anchor: Position,
    pub image_anchor: Position,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT,
            level_padding: LEVEL_PADDING,
            origin_x: 0.0,
            center_y: CENTER_Y,
            root_anchor: ROOT_ANCHOR,
            image_anchor: IMAGE_ANCHOR,
        }
    }
}

impl LayoutConfig {
    fn category_x(&self) -> f64 {
        self.origin_x + self.level_padding
    }

    fn item_x(&self) -> f64 {
        self.origin_x + self.level_padding * 1.5
    }
}

/// Lay out `record` with its decoded `structure` for the selected language.
#[must_use]
pub fn layout(
    record: &PromptRecord,
    structure: &Structure,
    language: Language,
    labels: &CategoryLabels,
    config: &LayoutConfig,
) -> GraphOutput {
    let mut graph = GraphOutput::default();

    graph.nodes.push(root_node(record, language, config));

    if let Some(url) = record.image_url.as_deref().filter(|u| !u.is_empty()) {
        graph.nodes.push(image_node(&rewrite_image_url(url), config));
        graph.edges.push(Edge::new("edge-root-image", ROOT_ID, IMAGE_NODE_ID, EdgeTier::Media));
    }

    let categories: Vec<(&str, &[String])> = structure.valid_categories(language).collect();
    let total_items: usize = categories.iter().map(|(_, phrases)| phrases.len()).sum();

    #[allow(clippy::cast_precision_loss)]
    let mut cursor = config.center_y - (total_items as f64 - 1.0) * config.row_height / 2.0;

    for (key, phrases) in categories {
        let field_id = format!("field-{key}");
        #[allow(clippy::cast_precision_loss)]
        let category_y = cursor + (phrases.len() as f64 - 1.0) * config.row_height / 2.0;
        let label = match language {
            Language::En => key,
            Language::Cn => labels.label_for(key),
        };

        graph.nodes.push(Node::new(
            field_id.as_str(),
            NodeTier::Category,
            Position { x: config.category_x(), y: category_y },
            label,
        ));
        graph.edges.push(Edge::new(format!("edge-root-{field_id}"), ROOT_ID, field_id.as_str(), EdgeTier::Category));

        for (index, phrase) in phrases.iter().enumerate() {
            let item_id = format!("item-{key}-{index}");
            graph.nodes.push(Node::new(
                item_id.as_str(),
                NodeTier::Item,
                Position { x: config.item_x(), y: cursor },
                phrase.as_str(),
            ));
            graph.edges.push(Edge::new(format!("edge-{field_id}-{item_id}"), field_id.as_str(), item_id, EdgeTier::Item));
            cursor += config.row_height;
        }
    }

    graph
}

fn root_node(record: &PromptRecord, language: Language, config: &LayoutConfig) -> Node {
    let label = match (language, record.prompt_cn.as_deref()) {
        (Language::Cn, Some(localized)) if !localized.is_empty() => localized,
        _ => record.prompt.as_str(),
    };
    let mut node = Node::new(ROOT_ID, NodeTier::Root, config.root_anchor, label);
    node.style = NodeStyle::root(&record.prompt);
    node
}

fn image_node(url: &str, config: &LayoutConfig) -> Node {
    let mut node = Node::new(IMAGE_NODE_ID, NodeTier::Image, config.image_anchor, "");
    node.data.image_url = Some(url.to_owned());
    node.width = Some(IMAGE_BOX);
    node.height = Some(IMAGE_BOX);
    node
}

/// Insert the asset prefix after the first `.com/` of the URL.
#[must_use]
pub fn rewrite_image_url(url: &str) -> String {
    url.replacen(IMAGE_HOST_BOUNDARY, IMAGE_PATH_PREFIX, 1)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
