//! Graph capability interface consumed by the adapter.
//!
//! The core never touches a concrete graph library type. Anything that can
//! enumerate nodes and edges, look up their attributes, report a type tag and
//! run layout routines implements [`GraphSource`] and can be converted.

pub mod kind;

pub use kind::{GraphType, detect, detect_tag};

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use serde_json::{Map, Value};

use crate::config::LayoutConfig;
use crate::error::BoxError;
use crate::layout::LayoutAlgorithm;

/// Per-entity attribute mapping. Insertion order is preserved.
pub type Attributes = Map<String, Value>;

/// Node id → (x, y).
pub type Positions<K> = HashMap<K, (f64, f64)>;

/// One edge instance as reported by a [`GraphSource`].
///
/// Multi-graphs report one view per parallel edge, each with its own `key`.
#[derive(Debug, Clone)]
pub struct EdgeView<'a, K> {
    pub source: K,
    pub target: K,
    pub key: Option<Value>,
    pub attributes: Cow<'a, Attributes>,
}

/// Values that carry an attribute mapping (node and edge weights).
pub trait Attributed {
    fn attributes(&self) -> Cow<'_, Attributes>;
}

impl Attributed for Attributes {
    fn attributes(&self) -> Cow<'_, Attributes> {
        Cow::Borrowed(self)
    }
}

impl Attributed for () {
    fn attributes(&self) -> Cow<'_, Attributes> {
        Cow::Owned(Attributes::new())
    }
}

impl Attributed for Value {
    /// Objects expose their fields; any other value has no attributes.
    fn attributes(&self) -> Cow<'_, Attributes> {
        match self {
            Value::Object(map) => Cow::Borrowed(map),
            _ => Cow::Owned(Attributes::new()),
        }
    }
}

/// Capability surface of a host graph.
pub trait GraphSource {
    /// Native node identifier. Output ids are its `Display` form.
    type NodeId: Clone + Eq + Hash + Display;

    /// Declared class name of the graph, e.g. `"MultiDiGraph"`.
    fn type_tag(&self) -> &str;

    /// All node ids in enumeration order.
    fn node_ids(&self) -> Vec<Self::NodeId>;

    /// Attributes of one node. None when the node is unknown.
    fn node_attributes(&self, id: &Self::NodeId) -> Option<Cow<'_, Attributes>>;

    /// All edges in enumeration order, one entry per parallel edge.
    fn edges(&self) -> Vec<EdgeView<'_, Self::NodeId>>;

    /// Run one of the host library's layout routines.
    fn run_layout(
        &self,
        algorithm: LayoutAlgorithm,
        config: &LayoutConfig,
    ) -> Result<Positions<Self::NodeId>, BoxError>;

    fn node_count(&self) -> usize {
        self.node_ids().len()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_source.rs"]
mod tests;
