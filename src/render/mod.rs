//! Tile rendering.
//!
//! This module provides:
//! - A small element tree (`Node`) describing the board
//! - Tile sub-renderers (default link tile, menu tile) and board assembly
//! - Backends that realise the tree: HTML text, and the live DOM on wasm32

pub mod backend;
pub mod html;
pub mod node;
pub mod tiles;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use backend::RenderBackend;
pub use html::HtmlBackend;
pub use node::{ClickAction, Node};
pub use tiles::{
    menu_target, render_board, render_default_tile, render_menu_tile, render_root, render_status,
    render_tile, version_tag,
};

#[cfg(target_arch = "wasm32")]
pub use dom::DomBackend;
