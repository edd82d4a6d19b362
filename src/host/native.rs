//! [`GraphSource`] for plain petgraph graphs.
//!
//! Node ids are node indices. petgraph allows parallel edges, so graphs are
//! tagged as multi graphs and each edge gets a per-pair key counting from 0.

use std::borrow::Cow;
use std::collections::HashMap;

use petgraph::EdgeType;
use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;
use serde_json::Value;

use super::layouts;
use crate::config::LayoutConfig;
use crate::error::BoxError;
use crate::graph::{Attributed, Attributes, EdgeView, GraphSource, Positions};
use crate::layout::LayoutAlgorithm;

impl<N, E, Ty, Ix> GraphSource for Graph<N, E, Ty, Ix>
where
    N: Attributed,
    E: Attributed,
    Ty: EdgeType,
    Ix: IndexType,
{
    type NodeId = usize;

    fn type_tag(&self) -> &str {
        if self.is_directed() {
            "MultiDiGraph"
        } else {
            "MultiGraph"
        }
    }

    fn node_ids(&self) -> Vec<usize> {
        self.node_indices().map(|idx| idx.index()).collect()
    }

    fn node_attributes(&self, id: &usize) -> Option<Cow<'_, Attributes>> {
        self.node_weight(NodeIndex::new(*id)).map(Attributed::attributes)
    }

    fn edges(&self) -> Vec<EdgeView<'_, usize>> {
        let directed = self.is_directed();
        let mut seen: HashMap<(usize, usize), u64> = HashMap::new();
        self.edge_references()
            .map(|e| {
                let (a, b) = (e.source().index(), e.target().index());
                let pair = if directed || a <= b { (a, b) } else { (b, a) };
                let count = seen.entry(pair).or_insert(0);
                let key = *count;
                *count += 1;
                EdgeView {
                    source: a,
                    target: b,
                    key: Some(Value::from(key)),
                    attributes: e.weight().attributes(),
                }
            })
            .collect()
    }

    fn run_layout(
        &self,
        algorithm: LayoutAlgorithm,
        config: &LayoutConfig,
    ) -> Result<Positions<usize>, BoxError> {
        let edges: Vec<(usize, usize)> = self
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        let coords = layouts::run(Graph::node_count(self), &edges, algorithm, config)?;
        Ok(coords.into_iter().enumerate().collect())
    }

    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_host_native.rs"]
mod tests;
