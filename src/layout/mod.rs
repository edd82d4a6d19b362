//! Layout provider: node coordinates for one conversion.
//!
//! Coordinates come from a named host layout routine, a caller-supplied
//! function, or `pos` attributes already stored on the nodes. Output with
//! any non-finite coordinate is replaced wholesale by the host's random
//! layout.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::error::{BoxError, NetVisError, Result};
use crate::graph::{GraphSource, Positions};

/// Node attribute holding pre-computed coordinates.
pub const POS_ATTRIBUTE: &str = "pos";

/// Layout routines a host graph library may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutAlgorithm {
    /// Force-directed placement.
    #[default]
    Spring,
    /// Path-length minimizing placement.
    KamadaKawai,
    Spectral,
    Circular,
    Random,
}

impl LayoutAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutAlgorithm::Spring => "spring",
            LayoutAlgorithm::KamadaKawai => "kamada_kawai",
            LayoutAlgorithm::Spectral => "spectral",
            LayoutAlgorithm::Circular => "circular",
            LayoutAlgorithm::Random => "random",
        }
    }
}

impl fmt::Display for LayoutAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutAlgorithm {
    type Err = NetVisError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "spring" | "force" | "force_directed" => Ok(LayoutAlgorithm::Spring),
            "kamada_kawai" | "kamada" => Ok(LayoutAlgorithm::KamadaKawai),
            "spectral" => Ok(LayoutAlgorithm::Spectral),
            "circular" | "circle" => Ok(LayoutAlgorithm::Circular),
            "random" => Ok(LayoutAlgorithm::Random),
            other => Err(NetVisError::InvalidConfig(format!(
                "unknown layout '{other}'; use spring, kamada_kawai, spectral, circular or random"
            ))),
        }
    }
}

/// Caller-supplied coordinate function.
pub type CustomLayout<G> =
    Box<dyn Fn(&G) -> std::result::Result<Positions<<G as GraphSource>::NodeId>, BoxError>>;

/// Where node coordinates come from.
pub enum LayoutSpec<G: GraphSource + ?Sized> {
    /// Use `pos` attributes when every node has one, otherwise spring.
    Auto,
    Named(LayoutAlgorithm),
    Custom(CustomLayout<G>),
}

impl<G: GraphSource + ?Sized> LayoutSpec<G> {
    /// Parse a layout name.
    pub fn named(name: &str) -> Result<Self> {
        name.parse().map(LayoutSpec::Named)
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&G) -> std::result::Result<Positions<G::NodeId>, BoxError> + 'static,
    {
        LayoutSpec::Custom(Box::new(f))
    }
}

impl<G: GraphSource + ?Sized> Default for LayoutSpec<G> {
    fn default() -> Self {
        LayoutSpec::Auto
    }
}

impl<G: GraphSource + ?Sized> From<LayoutAlgorithm> for LayoutSpec<G> {
    fn from(algorithm: LayoutAlgorithm) -> Self {
        LayoutSpec::Named(algorithm)
    }
}

impl<G: GraphSource + ?Sized> fmt::Debug for LayoutSpec<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutSpec::Auto => f.write_str("Auto"),
            LayoutSpec::Named(a) => f.debug_tuple("Named").field(a).finish(),
            LayoutSpec::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// Compute coordinates for every node of `graph`.
///
/// Empty graphs return an empty mapping without running any routine.
pub fn compute<G: GraphSource + ?Sized>(
    graph: &G,
    spec: &LayoutSpec<G>,
    config: &LayoutConfig,
) -> Result<Positions<G::NodeId>> {
    let nodes = graph.node_ids();
    if nodes.is_empty() {
        return Ok(HashMap::new());
    }

    let positions = match spec {
        LayoutSpec::Auto => match stored_positions(graph, &nodes) {
            Some(positions) => {
                debug!(nodes = nodes.len(), "using stored node positions");
                positions
            }
            None => run_named(graph, LayoutAlgorithm::default(), config)?,
        },
        LayoutSpec::Named(algorithm) => run_named(graph, *algorithm, config)?,
        LayoutSpec::Custom(f) => {
            f(graph).map_err(|e| NetVisError::LayoutComputation(e.to_string()))?
        }
    };

    if all_finite(&positions) {
        return Ok(positions);
    }
    warn!(
        nodes = nodes.len(),
        "layout produced non-finite coordinates; falling back to random layout"
    );
    run_named(graph, LayoutAlgorithm::Random, config)
}

fn run_named<G: GraphSource + ?Sized>(
    graph: &G,
    algorithm: LayoutAlgorithm,
    config: &LayoutConfig,
) -> Result<Positions<G::NodeId>> {
    debug!(%algorithm, iterations = config.iterations, seed = ?config.seed, "running layout");
    graph
        .run_layout(algorithm, config)
        .map_err(|e| NetVisError::LayoutComputation(e.to_string()))
}

/// Positions read from `pos` attributes, or None if any node lacks one.
fn stored_positions<G: GraphSource + ?Sized>(
    graph: &G,
    nodes: &[G::NodeId],
) -> Option<Positions<G::NodeId>> {
    let mut positions = HashMap::with_capacity(nodes.len());
    for id in nodes {
        let attrs = graph.node_attributes(id)?;
        let xy = parse_position(attrs.get(POS_ATTRIBUTE)?)?;
        positions.insert(id.clone(), xy);
    }
    Some(positions)
}

/// Accepts `[x, y]` or `{"x": .., "y": ..}`.
pub fn parse_position(value: &Value) -> Option<(f64, f64)> {
    match value {
        Value::Array(items) if items.len() == 2 => Some((items[0].as_f64()?, items[1].as_f64()?)),
        Value::Object(map) => Some((map.get("x")?.as_f64()?, map.get("y")?.as_f64()?)),
        _ => None,
    }
}

fn all_finite<K>(positions: &Positions<K>) -> bool {
    positions.values().all(|(x, y)| x.is_finite() && y.is_finite())
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout.rs"]
mod tests;
