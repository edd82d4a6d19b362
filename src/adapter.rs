//! Graph adapter: converts any [`GraphSource`] into a scene [`Layer`].
//!
//! Detects the graph type, computes positions, copies node and edge
//! attributes, resolves styling and attaches the `directed` / `edge_key`
//! markers. The returned layer has a blank id; the scene assigns one.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::config::{ColorMode, ConvertConfig};
use crate::error::Result;
use crate::graph::{Attributes, GraphSource, detect};
use crate::layout::{self, LayoutSpec};
use crate::scene::{DIRECTED_KEY, EDGE_KEY, Edge, Layer, Node};
use crate::style::{self, StyleSpec, scale};

/// Styling and layout directives for one conversion.
pub struct ConvertOptions<G: GraphSource + ?Sized> {
    pub layout: LayoutSpec<G>,
    pub node_color: StyleSpec,
    pub node_label: StyleSpec,
    pub edge_label: StyleSpec,
    pub config: ConvertConfig,
}

impl<G: GraphSource + ?Sized> Default for ConvertOptions<G> {
    fn default() -> Self {
        Self {
            layout: LayoutSpec::Auto,
            node_color: StyleSpec::None,
            node_label: StyleSpec::None,
            edge_label: StyleSpec::None,
            config: ConvertConfig::default(),
        }
    }
}

impl<G: GraphSource + ?Sized> ConvertOptions<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: impl Into<LayoutSpec<G>>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn node_color(mut self, spec: impl Into<StyleSpec>) -> Self {
        self.node_color = spec.into();
        self
    }

    pub fn node_label(mut self, spec: impl Into<StyleSpec>) -> Self {
        self.node_label = spec.into();
        self
    }

    pub fn edge_label(mut self, spec: impl Into<StyleSpec>) -> Self {
        self.edge_label = spec.into();
        self
    }

    pub fn config(mut self, config: ConvertConfig) -> Self {
        self.config = config;
        self
    }
}

impl<G: GraphSource + ?Sized> fmt::Debug for ConvertOptions<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertOptions")
            .field("layout", &self.layout)
            .field("node_color", &self.node_color)
            .field("node_label", &self.node_label)
            .field("edge_label", &self.edge_label)
            .field("config", &self.config)
            .finish()
    }
}

/// Convert `graph` into a layer.
///
/// Only layout failures abort; styling failures leave the affected field
/// unset. Nodes without a computed position sit at (0, 0). The `directed`
/// and `edge_key` markers replace edge attributes of the same name.
pub fn convert<G: GraphSource + ?Sized>(graph: &G, options: &ConvertOptions<G>) -> Result<Layer> {
    let graph_type = detect(graph);
    let positions = layout::compute(graph, &options.layout, &options.config.layout)?;
    let scaled = options.config.scale.mode == ColorMode::Scaled;

    let mut layer = Layer::new(graph_type);
    let node_ids = graph.node_ids();
    let mut raw_colors = Vec::with_capacity(if scaled { node_ids.len() } else { 0 });

    for native in &node_ids {
        let id = native.to_string();
        let metadata = graph
            .node_attributes(native)
            .map(|attrs| attrs.into_owned())
            .unwrap_or_default();
        let (x, y) = positions.get(native).copied().unwrap_or((0.0, 0.0));

        let mut node = Node::new(id, x, y);
        if scaled {
            raw_colors.push(style::resolve(&node.id, &metadata, &options.node_color));
        } else {
            node.color = style::map_color(&node.id, &metadata, &options.node_color);
        }
        node.label = style::map_label(&node.id, &metadata, &options.node_label);
        node.metadata = metadata;
        layer.nodes.push(node);
    }

    if scaled {
        let colors = scale::apply(&raw_colors, &options.config.scale);
        for (node, color) in layer.nodes.iter_mut().zip(colors) {
            node.color = color;
        }
    }

    for view in graph.edges() {
        let mut metadata = view.attributes.into_owned();
        let mut edge = Edge::new(view.source.to_string(), view.target.to_string());
        edge.label = style::map_edge_label(&metadata, &options.edge_label);
        if graph_type.is_directed() {
            set_marker(&mut metadata, DIRECTED_KEY, Value::Bool(true));
        }
        if graph_type.is_multigraph() {
            if let Some(key) = view.key {
                set_marker(&mut metadata, EDGE_KEY, key);
            }
        }
        edge.metadata = metadata;
        layer.edges.push(edge);
    }

    debug!(
        %graph_type,
        nodes = layer.nodes.len(),
        edges = layer.edges.len(),
        "converted graph"
    );
    Ok(layer)
}

fn set_marker(metadata: &mut Attributes, name: &str, value: Value) {
    if let Some(previous) = metadata.insert(name.into(), value.clone()) {
        if previous != value {
            debug!(marker = name, ?previous, "edge attribute replaced by marker");
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_adapter.rs"]
mod tests;
