//! netvis: convert attributed graphs into a renderer-agnostic network
//! visualization scene.
//!
//! Public API: [`Plotter`] for sessions, [`adapter::convert`] for one-off
//! conversions, [`scene::validate`] for the wire document rules.
//!
//! Pipeline: graph type detection → layout → per-entity styling → layer →
//! scene → JSON wire document.

pub mod adapter;
pub mod config;
pub mod error;
pub mod graph;
pub mod host;
pub mod layout;
pub mod plotter;
pub mod scene;
pub mod style;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use adapter::{ConvertOptions, convert};
pub use config::{ColorMode, ConvertConfig, LayoutConfig, ScaleConfig};
pub use error::{NetVisError, Result, ValidationError};
pub use graph::{Attributes, GraphSource, GraphType};
pub use host::{NetworkGraph, NodeKey};
pub use layout::{LayoutAlgorithm, LayoutSpec};
pub use plotter::{MimeBundle, Plotter};
pub use scene::{Edge, Layer, Node, Scene};
pub use style::StyleSpec;

/// Convert a node-link JSON document into a validated wire document.
///
/// Shared by the CLI and the wasm bindings.
pub fn render_node_link(
    src: &str,
    title: Option<&str>,
    options: &ConvertOptions<NetworkGraph>,
    pretty: bool,
) -> Result<String> {
    let data: serde_json::Value = serde_json::from_str(src)?;
    let mut plotter = Plotter::new(title);
    plotter.add_node_link(&data, options, None)?;
    let doc = plotter.scene().to_document()?;
    scene::validate::validate_document(&doc)?;
    if pretty {
        Ok(serde_json::to_string_pretty(&doc)?)
    } else {
        Ok(serde_json::to_string(&doc)?)
    }
}
