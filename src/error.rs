//! Structured error types for tileboard.
//!
//! Malformed record fields never surface here; the mapper absorbs them with
//! defaults. What remains are host, configuration and render failures.

/// All errors that can occur while binding, rendering or navigating.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The host ready-handshake failed.
    #[error("Initialization failed: {0}")]
    Init(String),

    /// Widget configuration could not be decoded.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failure raised while building or mounting the visual tree.
    #[error("Render error: {0}")]
    Render(String),

    /// A browsing-context operation (history, location) failed.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Target or current location is not a valid URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(target_arch = "wasm32")]
impl From<WidgetError> for wasm_bindgen::JsValue {
    fn from(e: WidgetError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

/// Describe a thrown JS value for logs and status text.
#[cfg(target_arch = "wasm32")]
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
