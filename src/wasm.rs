//! WASM bindings for netvis.
//!
//! Exposes `convert` and `convertWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::adapter::ConvertOptions;
use crate::config::ConvertConfig;
use crate::host::NetworkGraph;
use crate::layout::LayoutSpec;
use crate::style::StyleSpec;

fn to_js(e: crate::NetVisError) -> JsError {
    JsError::new(&e.to_string())
}

/// Convert node-link JSON to a wire document with default settings.
#[wasm_bindgen]
pub fn convert(src: &str) -> Result<String, JsError> {
    crate::render_node_link(src, None, &ConvertOptions::default(), false).map_err(to_js)
}

/// Convert node-link JSON with full control over styling.
///
/// Empty strings leave the corresponding option unset.
/// - `layout`: "spring", "circular", "random", ... or "" for stored positions
/// - `node_color`, `node_label`, `edge_label`: attribute names
/// - `color_mode`: "raw" or "scaled"
#[wasm_bindgen(js_name = "convertWithOptions")]
#[allow(clippy::too_many_arguments)]
pub fn convert_with_options(
    src: &str,
    title: &str,
    layout: &str,
    node_color: &str,
    node_label: &str,
    edge_label: &str,
    color_mode: &str,
    seed: Option<u64>,
) -> Result<String, JsError> {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    let mut config = ConvertConfig::default();
    config.layout.seed = seed;
    if !color_mode.is_empty() {
        config.scale.mode = color_mode.parse().map_err(to_js)?;
    }
    let layout: LayoutSpec<NetworkGraph> = match non_empty(layout) {
        Some(name) => LayoutSpec::named(&name).map_err(to_js)?,
        None => LayoutSpec::Auto,
    };
    let options = ConvertOptions::new()
        .layout(layout)
        .node_color(StyleSpec::from(non_empty(node_color)))
        .node_label(StyleSpec::from(non_empty(node_label)))
        .edge_label(StyleSpec::from(non_empty(edge_label)))
        .config(config);
    crate::render_node_link(src, non_empty(title).as_deref(), &options, false).map_err(to_js)
}
