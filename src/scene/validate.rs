//! Wire document validation.
//!
//! The renderer refuses documents that break these rules, so every document
//! the scene emits must pass them. Ids are compared by string form; numeric
//! ids are accepted.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::ValidationError;

/// Validate a serialized document. An empty or blank string is an empty graph.
pub fn validate_str(data: &str) -> Result<Value, ValidationError> {
    if data.trim().is_empty() {
        return Ok(serde_json::json!({ "nodes": [], "links": [] }));
    }
    let doc: Value =
        serde_json::from_str(data).map_err(|e| ValidationError::InvalidJson(e.to_string()))?;
    validate_document(&doc)?;
    Ok(doc)
}

pub fn validate_document(doc: &Value) -> Result<(), ValidationError> {
    let obj = doc.as_object().ok_or(ValidationError::NotAnObject)?;
    let nodes = obj
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingNodes)?;
    let links = obj
        .get("links")
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingLinks)?;

    let mut ids: HashSet<String> = HashSet::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        let id = node
            .get("id")
            .and_then(id_text)
            .ok_or(ValidationError::MissingNodeId(index))?;
        if !ids.insert(id.clone()) {
            return Err(ValidationError::DuplicateNodeId(id));
        }
    }

    for (index, link) in links.iter().enumerate() {
        for field in ["source", "target"] {
            let id = link
                .get(field)
                .and_then(id_text)
                .ok_or(ValidationError::MissingLinkEndpoint { index, field })?;
            if !ids.contains(&id) {
                return Err(ValidationError::DanglingLink { field, id });
            }
        }
    }
    Ok(())
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_scene_validate.rs"]
mod tests;
