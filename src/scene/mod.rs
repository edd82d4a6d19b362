//! Scene model and its wire serialization.
//!
//! The wire document is the flattened single-layer shape consumed by the
//! renderer: `{"title"?, "nodes": [...], "links": [...]}`. Layers are
//! concatenated in insertion order. Node ids are not rewritten, so a scene
//! whose layers share ids serializes to a document the validator rejects.

pub mod validate;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::error::{NetVisError, Result};
use crate::graph::{Attributes, GraphType};

/// Layer metadata key carrying the graph type tag.
pub const GRAPH_TYPE_KEY: &str = "graph_type";
/// Edge metadata marker for directed graphs.
pub const DIRECTED_KEY: &str = "directed";
/// Edge metadata marker distinguishing parallel edges.
pub const EDGE_KEY: &str = "edge_key";

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub color: Option<String>,
    pub label: Option<String>,
    pub metadata: Attributes,
}

impl Node {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            color: None,
            label: None,
            metadata: Attributes::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub label: Option<String>,
    pub metadata: Attributes,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
            metadata: Attributes::new(),
        }
    }
}

/// One converted graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Blank until the owning scene assigns it.
    pub layer_id: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub metadata: Attributes,
}

impl Layer {
    pub fn new(graph_type: GraphType) -> Self {
        let mut metadata = Attributes::new();
        metadata.insert(GRAPH_TYPE_KEY.into(), Value::from(graph_type.as_str()));
        Self {
            layer_id: String::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            metadata,
        }
    }

    pub fn graph_type(&self) -> Option<&str> {
        self.metadata.get(GRAPH_TYPE_KEY).and_then(Value::as_str)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Ordered, append-only collection of layers.
///
/// Owns the layer id counter. Not synchronized; share across threads only
/// behind external locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub title: Option<String>,
    layers: Vec<Layer>,
    next_layer: usize,
}

impl Scene {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            layers: Vec::new(),
            next_layer: 0,
        }
    }

    /// Append a layer and return its id.
    ///
    /// Without an explicit id the layer becomes `layer_{N}`. The counter
    /// advances on every call, explicit id or not, and skips ids already in
    /// use. An explicit id that is already in use is rejected.
    pub fn add_layer(&mut self, mut layer: Layer, layer_id: Option<&str>) -> Result<String> {
        let mut generated = format!("layer_{}", self.next_layer);
        self.next_layer += 1;
        let id = match layer_id {
            Some(id) if self.layer(id).is_some() => {
                return Err(NetVisError::DuplicateLayer(id.to_owned()));
            }
            Some(id) => id.to_owned(),
            None => {
                while self.layer(&generated).is_some() {
                    generated = format!("layer_{}", self.next_layer);
                    self.next_layer += 1;
                }
                generated
            }
        };
        layer.layer_id = id.clone();
        info!(
            layer = %layer.layer_id,
            nodes = layer.nodes.len(),
            edges = layer.edges.len(),
            "added layer"
        );
        self.layers.push(layer);
        Ok(id)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, layer_id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.layer_id == layer_id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn to_wire(&self) -> WireDocument<'_> {
        WireDocument {
            title: self.title.as_deref(),
            nodes: self
                .layers
                .iter()
                .flat_map(|l| l.nodes.iter())
                .map(WireNode::from)
                .collect(),
            links: self
                .layers
                .iter()
                .flat_map(|l| l.edges.iter())
                .map(WireLink::from)
                .collect(),
        }
    }

    pub fn to_document(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_wire())?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_wire())?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_wire())?)
    }
}

// ─── Wire shape ──────────────────────────────────────────────────────────────

fn is_empty(map: &&Map<String, Value>) -> bool {
    map.is_empty()
}

#[derive(Debug, Serialize)]
pub struct WireDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    pub nodes: Vec<WireNode<'a>>,
    pub links: Vec<WireLink<'a>>,
}

#[derive(Debug, Serialize)]
pub struct WireNode<'a> {
    pub id: &'a str,
    pub x: f64,
    pub y: f64,
    /// Resolved color; the renderer reads it as the node category.
    #[serde(rename = "category", skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty")]
    pub metadata: &'a Map<String, Value>,
}

impl<'a> From<&'a Node> for WireNode<'a> {
    fn from(node: &'a Node) -> Self {
        Self {
            id: &node.id,
            x: node.x,
            y: node.y,
            color: node.color.as_deref(),
            label: node.label.as_deref(),
            metadata: &node.metadata,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WireLink<'a> {
    pub source: &'a str,
    pub target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty")]
    pub metadata: &'a Map<String, Value>,
}

impl<'a> From<&'a Edge> for WireLink<'a> {
    fn from(edge: &'a Edge) -> Self {
        Self {
            source: &edge.source,
            target: &edge.target,
            label: edge.label.as_deref(),
            metadata: &edge.metadata,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_scene.rs"]
mod tests;
