//! Node-link JSON import.
//!
//! Accepts the common node-link layout:
//!
//! ```json
//! {"directed": false, "multigraph": false,
//!  "nodes": [{"id": 1, "color": "red"}],
//!  "links": [{"source": 1, "target": 2, "key": 0, "weight": 3}]}
//! ```
//!
//! `edges` is accepted in place of `links`. Every field besides `id`,
//! `source`, `target` and (for multi graphs) `key` becomes an attribute.

use serde_json::Value;

use super::graph::{NetworkGraph, NodeKey};
use crate::error::{NetVisError, Result};
use crate::graph::{Attributes, GraphType};

pub fn from_str(data: &str) -> Result<NetworkGraph> {
    let value: Value = serde_json::from_str(data)?;
    from_value(&value)
}

pub fn from_value(value: &Value) -> Result<NetworkGraph> {
    let obj = value
        .as_object()
        .ok_or_else(|| NetVisError::InputType(json_kind(value).to_string()))?;
    let nodes = obj
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or_else(|| NetVisError::InputType("object without a 'nodes' array".into()))?;
    let no_links = Vec::new();
    let links = match obj.get("links").or_else(|| obj.get("edges")) {
        None => &no_links,
        Some(Value::Array(links)) => links,
        Some(other) => {
            return Err(NetVisError::MalformedGraph(format!(
                "links are a {}, not a list",
                json_kind(other)
            )));
        }
    };

    let directed = obj.get("directed").and_then(Value::as_bool).unwrap_or(false);
    let multigraph = obj.get("multigraph").and_then(Value::as_bool).unwrap_or(false);
    let mut graph = NetworkGraph::new(GraphType::from_flags(directed, multigraph));

    for (index, node) in nodes.iter().enumerate() {
        let fields = entity_object(node, "node", index)?;
        let key = fields
            .get("id")
            .and_then(NodeKey::from_json)
            .ok_or_else(|| {
                NetVisError::MalformedGraph(format!("node {index} has no usable 'id'"))
            })?;
        graph.add_node(key, attributes_without(fields, &["id"]));
    }

    // Plain graphs have no edge keys, so a "key" field stays an attribute.
    let link_reserved: &[&str] = if multigraph {
        &["source", "target", "key"]
    } else {
        &["source", "target"]
    };
    for (index, link) in links.iter().enumerate() {
        let fields = entity_object(link, "link", index)?;
        let endpoint = |field: &str| {
            fields.get(field).and_then(NodeKey::from_json).ok_or_else(|| {
                NetVisError::MalformedGraph(format!("link {index} has no usable '{field}'"))
            })
        };
        let source = endpoint("source")?;
        let target = endpoint("target")?;
        let attrs = attributes_without(fields, link_reserved);
        match fields.get("key").filter(|_| multigraph) {
            Some(key) => graph.add_edge_with_key(source, target, key.clone(), attrs),
            None => {
                graph.add_edge(source, target, attrs);
            }
        }
    }
    Ok(graph)
}

fn entity_object<'a>(value: &'a Value, what: &str, index: usize) -> Result<&'a Attributes> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(NetVisError::MalformedGraph(format!(
            "{what} {index} is a {}, not an object",
            json_kind(other)
        ))),
    }
}

/// Copy of `fields` without the `reserved` keys, in the original order.
fn attributes_without(fields: &Attributes, reserved: &[&str]) -> Attributes {
    fields
        .iter()
        .filter(|(name, _)| !reserved.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_host_node_link.rs"]
mod tests;
