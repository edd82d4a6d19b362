use super::*;
use serde_json::json;

fn two_node_layer() -> Layer {
    let mut layer = Layer::new(GraphType::Graph);
    layer.nodes.push(Node::new("1", 0.0, 0.0));
    layer.nodes.push(Node::new("2", 1.0, 1.0));
    layer.edges.push(Edge::new("1", "2"));
    layer
}

// ── Layer ─────────────────────────────────────────────────────────────────

#[test]
fn test_layer_records_graph_type() {
    let layer = Layer::new(GraphType::MultiDiGraph);
    assert_eq!(layer.graph_type(), Some("multidigraph"));
    assert!(layer.layer_id.is_empty());
}

#[test]
fn test_layer_node_lookup() {
    let layer = two_node_layer();
    assert_eq!(layer.node("2").map(|n| n.x), Some(1.0));
    assert!(layer.node("3").is_none());
}

// ── Layer ids ─────────────────────────────────────────────────────────────

#[test]
fn test_generated_layer_ids() {
    let mut scene = Scene::default();
    assert_eq!(scene.add_layer(two_node_layer(), None).unwrap(), "layer_0");
    assert_eq!(scene.add_layer(two_node_layer(), None).unwrap(), "layer_1");
    assert_eq!(scene.len(), 2);
}

#[test]
fn test_explicit_id_still_advances_counter() {
    let mut scene = Scene::default();
    assert_eq!(scene.add_layer(two_node_layer(), None).unwrap(), "layer_0");
    assert_eq!(scene.add_layer(two_node_layer(), Some("custom")).unwrap(), "custom");
    assert_eq!(scene.add_layer(two_node_layer(), None).unwrap(), "layer_2");
    let ids: Vec<&str> = scene.layers().iter().map(|l| l.layer_id.as_str()).collect();
    assert_eq!(ids, vec!["layer_0", "custom", "layer_2"]);
    assert!(scene.layer("custom").is_some());
}

#[test]
fn test_empty_scene() {
    let scene = Scene::new(None);
    assert!(scene.is_empty());
    assert_eq!(
        scene.to_document().unwrap(),
        json!({ "nodes": [], "links": [] })
    );
}

// ── Wire document ─────────────────────────────────────────────────────────

#[test]
fn test_minimal_document() {
    let mut scene = Scene::default();
    scene.add_layer(two_node_layer(), None).unwrap();
    assert_eq!(
        scene.to_document().unwrap(),
        json!({
            "nodes": [
                { "id": "1", "x": 0.0, "y": 0.0 },
                { "id": "2", "x": 1.0, "y": 1.0 }
            ],
            "links": [ { "source": "1", "target": "2" } ]
        })
    );
}

#[test]
fn test_document_title() {
    let scene = Scene::new(Some("My graph".to_string()));
    let doc = scene.to_document().unwrap();
    assert_eq!(doc["title"], "My graph");
}

#[test]
fn test_node_styling_keys() {
    let mut layer = Layer::new(GraphType::Graph);
    let mut node = Node::new("a", 0.5, -0.5);
    node.color = Some("red".into());
    node.label = Some("Node A".into());
    node.metadata.insert("weight".into(), json!(2));
    layer.nodes.push(node);

    let mut scene = Scene::default();
    scene.add_layer(layer, None).unwrap();
    let doc = scene.to_document().unwrap();
    let wire = &doc["nodes"][0];
    assert_eq!(wire["category"], "red");
    assert_eq!(wire["name"], "Node A");
    assert_eq!(wire["metadata"], json!({ "weight": 2 }));
    assert!(wire.get("color").is_none());
    assert!(wire.get("label").is_none());
}

#[test]
fn test_link_label_and_metadata() {
    let mut layer = two_node_layer();
    layer.edges[0].label = Some("connects".into());
    layer.edges[0]
        .metadata
        .insert(DIRECTED_KEY.into(), json!(true));

    let mut scene = Scene::default();
    scene.add_layer(layer, None).unwrap();
    let doc = scene.to_document().unwrap();
    assert_eq!(
        doc["links"][0],
        json!({
            "source": "1",
            "target": "2",
            "label": "connects",
            "metadata": { "directed": true }
        })
    );
}

#[test]
fn test_layers_concatenated_in_order() {
    let mut first = Layer::new(GraphType::Graph);
    first.nodes.push(Node::new("a", 0.0, 0.0));
    let mut second = Layer::new(GraphType::Graph);
    second.nodes.push(Node::new("b", 0.0, 0.0));

    let mut scene = Scene::default();
    scene.add_layer(first, None).unwrap();
    scene.add_layer(second, None).unwrap();
    let doc = scene.to_document().unwrap();
    let ids: Vec<&str> = doc["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_json_output_parses_and_validates() {
    let mut scene = Scene::new(Some("t".into()));
    scene.add_layer(two_node_layer(), None).unwrap();
    let compact = scene.to_json().unwrap();
    let pretty = scene.to_json_pretty().unwrap();
    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
    let a = validate::validate_str(&compact).unwrap();
    let b = validate::validate_str(&pretty).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_generated_id_skips_explicit_one() {
    let mut scene = Scene::default();
    assert_eq!(scene.add_layer(two_node_layer(), Some("layer_1")).unwrap(), "layer_1");
    assert_eq!(scene.add_layer(two_node_layer(), None).unwrap(), "layer_2");
    assert_eq!(scene.add_layer(two_node_layer(), None).unwrap(), "layer_3");
}

#[test]
fn test_duplicate_explicit_id_rejected() {
    let mut scene = Scene::default();
    scene.add_layer(two_node_layer(), Some("main")).unwrap();
    let err = scene.add_layer(two_node_layer(), Some("main")).unwrap_err();
    assert!(matches!(err, NetVisError::DuplicateLayer(ref id) if id == "main"));
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.add_layer(two_node_layer(), None).unwrap(), "layer_2");
}
