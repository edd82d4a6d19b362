//! Error types for graph conversion and wire validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NetVisError>;

/// Boxed error returned by caller-supplied functions and host layout routines.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum NetVisError {
    /// The input does not expose the graph capability surface.
    #[error("Expected graph object, got {0}")]
    InputType(String),

    /// Graph-shaped input whose nodes or links cannot be read.
    #[error("Malformed graph data: {0}")]
    MalformedGraph(String),

    #[error("Layer ID already in use: {0}")]
    DuplicateLayer(String),

    #[error("Layout computation failed: {0}")]
    LayoutComputation(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A wire document rejected by [`crate::scene::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),

    #[error("Graph data must be an object")]
    NotAnObject,

    #[error("Graph data must contain 'nodes' array")]
    MissingNodes,

    #[error("Graph data must contain 'links' array")]
    MissingLinks,

    #[error("Node at index {0} is missing 'id'")]
    MissingNodeId(usize),

    #[error("Duplicate node ID: {0}")]
    DuplicateNodeId(String),

    #[error("Link at index {index} is missing '{field}'")]
    MissingLinkEndpoint { index: usize, field: &'static str },

    #[error("Link {field} '{id}' does not exist in nodes")]
    DanglingLink { field: &'static str, id: String },
}
