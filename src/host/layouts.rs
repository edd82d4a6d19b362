//! Layout routines of the bundled host graph.
//!
//! Routines work on an index topology (`node_count` nodes, edges as index
//! pairs) and return one coordinate per node index.

use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::LayoutConfig;
use crate::error::BoxError;
use crate::layout::LayoutAlgorithm;

/// Simulation step used for every spring iteration.
const SPRING_DT: f32 = 0.035;
/// Half-width of the box spring nodes start in.
const SPRING_SPREAD: f64 = 250.0;

pub fn run(
    node_count: usize,
    edges: &[(usize, usize)],
    algorithm: LayoutAlgorithm,
    config: &LayoutConfig,
) -> Result<Vec<(f64, f64)>, BoxError> {
    match algorithm {
        LayoutAlgorithm::Spring => Ok(spring(node_count, edges, config)),
        LayoutAlgorithm::Circular => Ok(circular(node_count)),
        LayoutAlgorithm::Random => Ok(random(node_count, config)),
        LayoutAlgorithm::KamadaKawai | LayoutAlgorithm::Spectral => {
            Err(format!("{algorithm} layout is not available for this graph library").into())
        }
    }
}

fn rng(config: &LayoutConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Uniform positions in [0, 1)².
pub fn random(node_count: usize, config: &LayoutConfig) -> Vec<(f64, f64)> {
    let mut rng = rng(config);
    (0..node_count)
        .map(|_| (rng.random::<f64>(), rng.random::<f64>()))
        .collect()
}

/// Nodes evenly spaced on the unit circle. A single node sits at the origin.
pub fn circular(node_count: usize) -> Vec<(f64, f64)> {
    if node_count == 1 {
        return vec![(0.0, 0.0)];
    }
    (0..node_count)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / node_count as f64;
            (theta.cos(), theta.sin())
        })
        .collect()
}

/// Force-directed placement, rescaled into [-1, 1].
///
/// Starts from random positions, so results are only reproducible with a
/// seed. Self-loops exert no force and are skipped.
pub fn spring(node_count: usize, edges: &[(usize, usize)], config: &LayoutConfig) -> Vec<(f64, f64)> {
    if node_count == 0 {
        return Vec::new();
    }
    let mut rng = rng(config);
    let mut graph: ForceGraph<usize, ()> = ForceGraph::new(SimulationParameters {
        force_charge: 12000.0,
        force_spring: 0.3,
        force_max: 280.0,
        node_speed: 7000.0,
        damping_factor: 0.95,
    });

    let indices: Vec<_> = (0..node_count)
        .map(|i| {
            graph.add_node(NodeData {
                x: rng.random_range(-SPRING_SPREAD..SPRING_SPREAD) as f32,
                y: rng.random_range(-SPRING_SPREAD..SPRING_SPREAD) as f32,
                mass: 10.0,
                is_anchor: false,
                user_data: i,
            })
        })
        .collect();

    for &(a, b) in edges {
        if a != b && a < node_count && b < node_count {
            graph.add_edge(indices[a], indices[b], EdgeData::default());
        }
    }

    for _ in 0..config.iterations {
        graph.update(SPRING_DT);
    }

    let mut coords = vec![(0.0, 0.0); node_count];
    graph.visit_nodes(|node| {
        coords[node.data.user_data] = (node.x() as f64, node.y() as f64);
    });
    rescale(&mut coords);
    coords
}

/// Center on the mean and scale so the largest coordinate magnitude is 1.
fn rescale(coords: &mut [(f64, f64)]) {
    let n = coords.len() as f64;
    let (cx, cy) = coords
        .iter()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    let (cx, cy) = (cx / n, cy / n);
    let mut extent: f64 = 0.0;
    for (x, y) in coords.iter_mut() {
        *x -= cx;
        *y -= cy;
        extent = extent.max(x.abs()).max(y.abs());
    }
    if extent > 0.0 {
        for (x, y) in coords.iter_mut() {
            *x /= extent;
            *y /= extent;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_host_layouts.rs"]
mod tests;
