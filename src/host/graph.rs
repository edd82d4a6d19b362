//! NetworkGraph: attributed graph over a petgraph `DiGraph`.
//!
//! Covers the four graph variants. Edges are always stored directed; the
//! graph kind decides how re-added and reversed edges are treated:
//!
//! - plain graphs keep one edge per node pair and merge attributes when an
//!   edge is added again,
//! - undirected graphs treat (a, b) and (b, a) as the same pair,
//! - multi graphs keep every edge and give each one a key, unique per pair.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use serde_json::Value;

use super::layouts;
use crate::config::LayoutConfig;
use crate::error::BoxError;
use crate::graph::{Attributes, EdgeView, GraphSource, GraphType, Positions};
use crate::layout::LayoutAlgorithm;

// ─── NodeKey ─────────────────────────────────────────────────────────────────

/// Native node identifier.
///
/// `Int(1)` and `Str("1")` are distinct nodes but share the output id `"1"`;
/// graphs mixing them produce ambiguous layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    Int(i64),
    Str(String),
}

impl NodeKey {
    /// Integers stay integers; strings and other numbers become `Str`.
    pub fn from_json(value: &Value) -> Option<NodeKey> {
        match value {
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => NodeKey::Int(i),
                None => NodeKey::Str(n.to_string()),
            }),
            Value::String(s) => Some(NodeKey::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Int(i) => write!(f, "{i}"),
            NodeKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeKey {
    fn from(i: i64) -> Self {
        NodeKey::Int(i)
    }
}

impl From<i32> for NodeKey {
    fn from(i: i32) -> Self {
        NodeKey::Int(i as i64)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        NodeKey::Str(s.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        NodeKey::Str(s)
    }
}

// ─── Stored data ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NodeData {
    pub key: NodeKey,
    pub attrs: Attributes,
}

#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Parallel-edge key; always set in multi graphs.
    pub key: Option<Value>,
    pub attrs: Attributes,
}

/// Build an attribute map from a JSON object. Non-objects give an empty map.
pub fn attributes(value: Value) -> Attributes {
    match value {
        Value::Object(map) => map,
        _ => Attributes::new(),
    }
}

// ─── NetworkGraph ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct NetworkGraph {
    kind: GraphType,
    digraph: DiGraph<NodeData, EdgeData>,
    /// Maps node key → petgraph NodeIndex.
    node_index: HashMap<NodeKey, NodeIndex>,
}

impl NetworkGraph {
    pub fn new(kind: GraphType) -> Self {
        Self {
            kind,
            digraph: DiGraph::new(),
            node_index: HashMap::new(),
        }
    }

    pub fn graph() -> Self {
        Self::new(GraphType::Graph)
    }

    pub fn digraph() -> Self {
        Self::new(GraphType::DiGraph)
    }

    pub fn multigraph() -> Self {
        Self::new(GraphType::MultiGraph)
    }

    pub fn multidigraph() -> Self {
        Self::new(GraphType::MultiDiGraph)
    }

    pub fn kind(&self) -> GraphType {
        self.kind
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn contains_node(&self, key: &NodeKey) -> bool {
        self.node_index.contains_key(key)
    }

    pub fn node_attrs(&self, key: &NodeKey) -> Option<&Attributes> {
        self.node_index.get(key).map(|&idx| &self.digraph[idx].attrs)
    }

    /// Add a node, or merge `attrs` into an existing node's attributes.
    pub fn add_node(&mut self, key: impl Into<NodeKey>, attrs: Attributes) {
        let idx = self.ensure_node(key.into());
        self.digraph[idx].attrs.extend(attrs);
    }

    /// Add an edge, creating missing endpoints. Returns the edge key in
    /// multi graphs.
    pub fn add_edge(
        &mut self,
        source: impl Into<NodeKey>,
        target: impl Into<NodeKey>,
        attrs: Attributes,
    ) -> Option<Value> {
        let a = self.ensure_node(source.into());
        let b = self.ensure_node(target.into());
        if self.kind.is_multigraph() {
            let key = Value::from(self.free_key(a, b));
            self.digraph.add_edge(
                a,
                b,
                EdgeData {
                    key: Some(key.clone()),
                    attrs,
                },
            );
            return Some(key);
        }
        match self.pair_edges(a, b).first() {
            Some(&existing) => self.digraph[existing].attrs.extend(attrs),
            None => {
                self.digraph.add_edge(a, b, EdgeData { key: None, attrs });
            }
        }
        None
    }

    /// Add a keyed edge to a multi graph. An existing edge with the same key
    /// between the same pair has its attributes merged instead.
    ///
    /// Plain graphs ignore the key and behave like [`Self::add_edge`].
    pub fn add_edge_with_key(
        &mut self,
        source: impl Into<NodeKey>,
        target: impl Into<NodeKey>,
        key: Value,
        attrs: Attributes,
    ) {
        if !self.kind.is_multigraph() {
            self.add_edge(source, target, attrs);
            return;
        }
        let a = self.ensure_node(source.into());
        let b = self.ensure_node(target.into());
        let existing = self
            .pair_edges(a, b)
            .into_iter()
            .find(|&e| self.digraph[e].key.as_ref() == Some(&key));
        match existing {
            Some(e) => self.digraph[e].attrs.extend(attrs),
            None => {
                self.digraph.add_edge(
                    a,
                    b,
                    EdgeData {
                        key: Some(key),
                        attrs,
                    },
                );
            }
        }
    }

    /// Edge data between two nodes, in insertion order. Undirected graphs
    /// also return edges stored in the reverse direction.
    pub fn edges_between(&self, source: &NodeKey, target: &NodeKey) -> Vec<&EdgeData> {
        match (self.node_index.get(source), self.node_index.get(target)) {
            (Some(&a), Some(&b)) => self
                .pair_edges(a, b)
                .into_iter()
                .map(|e| &self.digraph[e])
                .collect(),
            _ => Vec::new(),
        }
    }

    fn ensure_node(&mut self, key: NodeKey) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&key) {
            return idx;
        }
        let idx = self.digraph.add_node(NodeData {
            key: key.clone(),
            attrs: Attributes::new(),
        });
        self.node_index.insert(key, idx);
        idx
    }

    /// Edges stored between `a` and `b`, oldest first. Only the two
    /// endpoints' adjacency lists are walked.
    fn pair_edges(&self, a: NodeIndex, b: NodeIndex) -> Vec<EdgeIndex> {
        let mut edges: Vec<EdgeIndex> = self
            .digraph
            .edges_connecting(a, b)
            .map(|e| e.id())
            .collect();
        if !self.kind.is_directed() && a != b {
            edges.extend(self.digraph.edges_connecting(b, a).map(|e| e.id()));
        }
        edges.sort();
        edges
    }

    /// Lowest unused integer key, starting from the pair's edge count.
    fn free_key(&self, a: NodeIndex, b: NodeIndex) -> i64 {
        let used: Vec<&Value> = self
            .pair_edges(a, b)
            .into_iter()
            .filter_map(|e| self.digraph[e].key.as_ref())
            .collect();
        let mut key = used.len() as i64;
        while used.iter().any(|k| k.as_i64() == Some(key)) {
            key += 1;
        }
        key
    }

    fn topology(&self) -> Vec<(usize, usize)> {
        self.digraph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect()
    }
}

impl GraphSource for NetworkGraph {
    type NodeId = NodeKey;

    fn type_tag(&self) -> &str {
        self.kind.class_name()
    }

    fn node_ids(&self) -> Vec<NodeKey> {
        self.digraph
            .node_indices()
            .map(|idx| self.digraph[idx].key.clone())
            .collect()
    }

    fn node_attributes(&self, id: &NodeKey) -> Option<Cow<'_, Attributes>> {
        self.node_attrs(id).map(Cow::Borrowed)
    }

    fn edges(&self) -> Vec<EdgeView<'_, NodeKey>> {
        let multi = self.kind.is_multigraph();
        self.digraph
            .edge_references()
            .map(|e| EdgeView {
                source: self.digraph[e.source()].key.clone(),
                target: self.digraph[e.target()].key.clone(),
                key: if multi { e.weight().key.clone() } else { None },
                attributes: Cow::Borrowed(&e.weight().attrs),
            })
            .collect()
    }

    fn run_layout(
        &self,
        algorithm: LayoutAlgorithm,
        config: &LayoutConfig,
    ) -> Result<Positions<NodeKey>, BoxError> {
        let coords = layouts::run(self.node_count(), &self.topology(), algorithm, config)?;
        Ok(self
            .digraph
            .node_indices()
            .zip(coords)
            .map(|(idx, xy)| (self.digraph[idx].key.clone(), xy))
            .collect())
    }

    fn node_count(&self) -> usize {
        self.digraph.node_count()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_host_graph.rs"]
mod tests;
