//! Plotter: caller-facing session API.
//!
//! Owns one [`Scene`], converts graphs into layers and exports the scene as
//! JSON or as a MIME bundle for notebook front-ends.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::adapter::{ConvertOptions, convert};
use crate::error::Result;
use crate::graph::GraphSource;
use crate::host::{NetworkGraph, node_link};
use crate::scene::{Scene, validate};

/// Content type of the scene payload.
pub const MIME_TYPE: &str = "application/vnd.netvis+json";

/// Version reported to the front-end.
pub const VERSION: &str = env!("NETVIS_VERSION");

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MimePayload {
    /// Serialized wire document.
    pub data: String,
    pub version: String,
}

/// Content-type → content mapping for rich display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MimeBundle {
    #[serde(rename = "application/vnd.netvis+json")]
    pub netvis: MimePayload,
    #[serde(rename = "text/plain")]
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Plotter {
    scene: Scene,
}

impl Plotter {
    pub fn new(title: Option<&str>) -> Self {
        Self {
            scene: Scene::new(title.map(str::to_owned)),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Convert `graph` and append it as a layer. Returns the layer id.
    pub fn add_graph<G: GraphSource + ?Sized>(
        &mut self,
        graph: &G,
        options: &ConvertOptions<G>,
        layer_id: Option<&str>,
    ) -> Result<String> {
        let layer = convert(graph, options)?;
        self.scene.add_layer(layer, layer_id)
    }

    /// Import a node-link JSON value and append it as a layer.
    ///
    /// Values that are not graph-shaped fail with an input type error.
    pub fn add_node_link(
        &mut self,
        data: &Value,
        options: &ConvertOptions<NetworkGraph>,
        layer_id: Option<&str>,
    ) -> Result<String> {
        let graph = node_link::from_value(data)?;
        self.add_graph(&graph, options, layer_id)
    }

    pub fn to_json(&self) -> Result<String> {
        self.scene.to_json_pretty()
    }

    /// Validated scene payload plus a plain-text fallback.
    pub fn mime_bundle(&self) -> Result<MimeBundle> {
        let data = self.scene.to_json()?;
        validate::validate_str(&data)?;
        Ok(MimeBundle {
            netvis: MimePayload {
                data,
                version: VERSION.to_string(),
            },
            text: self.to_string(),
        })
    }
}

impl fmt::Display for Plotter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Plotter with {} layer(s)>", self.scene.len())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_plotter.rs"]
mod tests;
