use super::*;
use petgraph::graph::{DiGraph, UnGraph};
use serde_json::json;

use crate::adapter::{ConvertOptions, convert};
use crate::config::ConvertConfig;
use crate::graph::{GraphType, detect};
use crate::scene::EDGE_KEY;

#[test]
fn test_type_tags() {
    let directed: DiGraph<(), ()> = DiGraph::new();
    let undirected: UnGraph<(), ()> = UnGraph::new_undirected();
    assert_eq!(detect(&directed), GraphType::MultiDiGraph);
    assert_eq!(detect(&undirected), GraphType::MultiGraph);
}

#[test]
fn test_node_ids_and_attributes() {
    let mut g: DiGraph<Value, ()> = DiGraph::new();
    g.add_node(json!({ "color": "red" }));
    g.add_node(json!("not an object"));
    assert_eq!(g.node_ids(), vec![0, 1]);
    assert_eq!(g.node_attributes(&0).unwrap()["color"], "red");
    assert!(g.node_attributes(&1).unwrap().is_empty());
    assert!(g.node_attributes(&5).is_none());
}

#[test]
fn test_parallel_edge_keys() {
    let mut g: DiGraph<(), Attributes> = DiGraph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    g.add_edge(a, b, Attributes::new());
    g.add_edge(a, b, Attributes::new());
    g.add_edge(b, a, Attributes::new());
    let keys: Vec<_> = GraphSource::edges(&g).into_iter().map(|e| e.key).collect();
    assert_eq!(keys, vec![Some(json!(0)), Some(json!(1)), Some(json!(0))]);
}

#[test]
fn test_undirected_keys_ignore_direction() {
    let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
    let a = g.add_node(());
    let b = g.add_node(());
    g.add_edge(a, b, ());
    g.add_edge(b, a, ());
    let keys: Vec<_> = GraphSource::edges(&g).into_iter().map(|e| e.key).collect();
    assert_eq!(keys, vec![Some(json!(0)), Some(json!(1))]);
}

#[test]
fn test_run_layout() {
    let mut g: UnGraph<(), ()> = UnGraph::new_undirected();
    let a = g.add_node(());
    let b = g.add_node(());
    g.add_edge(a, b, ());
    let config = LayoutConfig {
        seed: Some(1),
        ..LayoutConfig::default()
    };
    let positions = g.run_layout(LayoutAlgorithm::Random, &config).unwrap();
    assert_eq!(positions.len(), 2);
    assert!(positions.contains_key(&0) && positions.contains_key(&1));
}

#[test]
fn test_convert_petgraph() {
    let mut g: DiGraph<Value, Value> = DiGraph::new();
    let a = g.add_node(json!({ "name": "a" }));
    let b = g.add_node(json!({ "name": "b" }));
    g.add_edge(a, b, json!({ "weight": 2 }));
    let options = ConvertOptions::new()
        .node_label("name")
        .config(ConvertConfig::new().with_seed(4));
    let layer = convert(&g, &options).unwrap();
    assert_eq!(layer.graph_type(), Some("multidigraph"));
    assert_eq!(layer.node("0").unwrap().label.as_deref(), Some("a"));
    let edge = &layer.edges[0];
    assert_eq!((edge.source.as_str(), edge.target.as_str()), ("0", "1"));
    assert_eq!(edge.metadata["weight"], 2);
    assert_eq!(edge.metadata["directed"], true);
    assert_eq!(edge.metadata[EDGE_KEY], 0);
}
