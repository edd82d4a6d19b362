//! Graph type classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GraphSource;

/// The four graph variants a layer can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    #[default]
    Graph,
    DiGraph,
    MultiGraph,
    MultiDiGraph,
}

impl GraphType {
    pub fn from_flags(directed: bool, multigraph: bool) -> Self {
        match (directed, multigraph) {
            (true, true) => GraphType::MultiDiGraph,
            (false, true) => GraphType::MultiGraph,
            (true, false) => GraphType::DiGraph,
            (false, false) => GraphType::Graph,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GraphType::Graph => "graph",
            GraphType::DiGraph => "digraph",
            GraphType::MultiGraph => "multigraph",
            GraphType::MultiDiGraph => "multidigraph",
        }
    }

    /// Declared class name used as a host type tag.
    pub fn class_name(self) -> &'static str {
        match self {
            GraphType::Graph => "Graph",
            GraphType::DiGraph => "DiGraph",
            GraphType::MultiGraph => "MultiGraph",
            GraphType::MultiDiGraph => "MultiDiGraph",
        }
    }

    pub fn is_directed(self) -> bool {
        matches!(self, GraphType::DiGraph | GraphType::MultiDiGraph)
    }

    pub fn is_multigraph(self) -> bool {
        matches!(self, GraphType::MultiGraph | GraphType::MultiDiGraph)
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a type tag by case-insensitive substring match.
///
/// Multi-directed is checked before multi, multi before directed. Unknown
/// tags are plain graphs.
pub fn detect_tag(tag: &str) -> GraphType {
    let tag = tag.to_lowercase();
    if tag.contains("multidigraph") {
        GraphType::MultiDiGraph
    } else if tag.contains("multigraph") {
        GraphType::MultiGraph
    } else if tag.contains("digraph") {
        GraphType::DiGraph
    } else {
        GraphType::Graph
    }
}

/// Classify a graph by its declared type tag.
pub fn detect<G: GraphSource + ?Sized>(graph: &G) -> GraphType {
    detect_tag(graph.type_tag())
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_kind.rs"]
mod tests;
