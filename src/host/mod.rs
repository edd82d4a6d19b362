//! Bundled host graph library.
//!
//! `NetworkGraph` is an attributed graph covering the plain, directed, multi
//! and multi-directed variants, with node-link JSON import and a small set of
//! layout routines. Plain petgraph graphs are also accepted as sources.

pub mod graph;
pub mod layouts;
pub mod native;
pub mod node_link;

pub use graph::{EdgeData, NetworkGraph, NodeData, NodeKey, attributes};
