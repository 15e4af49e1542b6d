//! Render backend trait for realising a board tree.
//!
//! The tree is built once per render pass and handed to a backend: the HTML
//! backend serializes it (CLI, tests), the DOM backend on wasm32 replaces the
//! widget's root element contents and wires click handlers.

use super::Node;
use crate::error::Result;

pub trait RenderBackend {
    /// Replace whatever was previously shown with `root`.
    fn mount(&mut self, root: &Node) -> Result<()>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
