//! tileboard - dashboard tiles for spreadsheet plugin surfaces
//!
//! Reads tile rows from a host table and renders them as clickable tiles:
//! - Record mapping with total numeric coercion and defaults
//! - Absolute (pixel unit) or 12-column CSS grid placement
//! - Menu tiles listing sub-pages
//! - Same-origin navigation through the host's history, full navigation otherwise
//! - A crash boundary that turns render failures into a diagnostic panel
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TileWidget } from 'tileboard';
//! await init();
//! const widget = TileWidget.mount(document.getElementById('root'), { layout: { kind: 'absolute' } });
//! ```

pub mod binding;
pub mod boundary;
pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod mapper;
pub mod navigation;
pub mod render;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod widget;

use wasm_bindgen::prelude::*;

pub use binding::{HostBinding, WidgetStatus};
pub use boundary::CrashBoundary;
pub use config::WidgetConfig;
pub use error::{Result, WidgetError};
pub use layout::LayoutStrategy;
pub use mapper::{map_record, map_records, MapOutcome};
pub use navigation::{plan_navigation, BrowsingContext, NavAction, Navigator};
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use widget::TileWidget;

/// Render a record batch to static HTML.
///
/// `config` may be `undefined` for defaults. Useful for previews outside the
/// host, where no live records or navigation exist.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_records_html(records: JsValue, config: JsValue) -> std::result::Result<String, JsValue> {
    let config = WidgetConfig::from_js(config)?;
    let records: Vec<SourceRecord> = serde_wasm_bindgen::from_value(records)
        .map_err(|e| WidgetError::Render(format!("Deserialization error: {e}")))?;
    Ok(render_html(&records, &config))
}

/// Map records and render the resulting view (board or empty status) to HTML.
pub fn render_html(records: &[SourceRecord], config: &WidgetConfig) -> String {
    let mut binding = HostBinding::new(config.clone());
    binding.on_records(records, None);
    let mut backend = render::HtmlBackend::new();
    binding.render_into(&mut backend);
    backend.into_html()
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
