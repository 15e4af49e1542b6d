//! Navigation dispatcher.
//!
//! Clicking a tile hands its target here. Same-origin targets (including
//! hash-only ones) are pushed onto the top window's history and announced with
//! a synthetic `popstate`, which the host listens for to resync its own
//! routing without a reload. Cross-origin targets replace the location.

use tracing::{debug, warn};
use url::Url;

use crate::error::Result;
#[cfg(target_arch = "wasm32")]
use crate::error::WidgetError;

/// The top-level browsing context the widget navigates.
///
/// Every operation may fail (cross-origin frames, detached windows); the
/// dispatcher absorbs those failures.
pub trait BrowsingContext {
    /// Current top-level URL, `None` when it cannot be read
    fn current_href(&self) -> Option<String>;
    /// Push a history entry without reloading
    fn push_state(&self, url: &str) -> Result<()>;
    /// Fire the browser's history-change notification
    fn notify_history_change(&self) -> Result<()>;
    /// Full navigation
    fn assign_location(&self, url: &str) -> Result<()>;
}

/// Effect chosen for a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    None,
    /// Same document, new fragment
    PushHash { url: String },
    /// Same origin, new path
    PushState { url: String },
    /// Different origin (or unknown current location): full navigation
    Replace { url: String },
}

/// Decide what navigating to `target` from `current_href` means.
pub fn plan_navigation(target: &str, current_href: Option<&str>) -> Result<NavAction> {
    let target = target.trim();
    if target.is_empty() {
        return Ok(NavAction::None);
    }
    let current = match current_href {
        Some(href) => Some(Url::parse(href)?),
        None => None,
    };

    if let Some(fragment) = target.strip_prefix('#') {
        return Ok(match current {
            Some(mut url) => {
                url.set_fragment(Some(fragment));
                NavAction::PushHash {
                    url: url.to_string(),
                }
            }
            None => NavAction::Replace {
                url: target.to_string(),
            },
        });
    }

    match current {
        Some(base) => {
            let resolved = base.join(target)?;
            if resolved.origin() == base.origin() {
                Ok(NavAction::PushState {
                    url: resolved.to_string(),
                })
            } else {
                Ok(NavAction::Replace {
                    url: resolved.to_string(),
                })
            }
        }
        None => Ok(NavAction::Replace {
            url: Url::parse(target)?.to_string(),
        }),
    }
}

/// Executes navigation plans against a browsing context.
pub struct Navigator<C> {
    context: C,
}

impl<C: BrowsingContext> Navigator<C> {
    pub fn new(context: C) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// Navigate to `target`. Never fails; returns the action that was taken.
    pub fn navigate(&self, target: &str) -> NavAction {
        let current = self.context.current_href();
        let action = match plan_navigation(target, current.as_deref()) {
            Ok(action) => action,
            Err(e) => {
                warn!(target_url = target, error = %e, "ignoring unusable navigation target");
                return NavAction::None;
            }
        };
        debug!(?action, "navigating");

        let outcome = match &action {
            NavAction::None => Ok(()),
            NavAction::PushHash { url } | NavAction::PushState { url } => {
                self.push_and_notify(url)
            }
            NavAction::Replace { url } => self.context.assign_location(url),
        };
        if let Err(e) = outcome {
            warn!(error = %e, "navigation failed");
        }
        action
    }

    fn push_and_notify(&self, url: &str) -> Result<()> {
        match self.context.push_state(url) {
            Ok(()) => self.context.notify_history_change(),
            Err(e) => {
                // Nothing happened yet, so a full navigation is still the only effect.
                warn!(error = %e, "history push rejected, falling back to location change");
                self.context.assign_location(url)
            }
        }
    }
}

/// `window.top`, or the widget's own window when the top is unreachable.
#[cfg(target_arch = "wasm32")]
pub struct TopWindow {
    window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl TopWindow {
    pub fn new() -> Result<Self> {
        Self::from_window(web_sys::window())
    }

    /// Resolve the top window starting from `own`, which is absent outside a page.
    pub fn from_window(own: Option<web_sys::Window>) -> Result<Self> {
        let own = own.ok_or_else(|| WidgetError::Navigation("no window".to_string()))?;
        let window = own.top().ok().flatten().unwrap_or(own);
        Ok(Self { window })
    }
}

#[cfg(target_arch = "wasm32")]
fn js_nav_err(value: &wasm_bindgen::JsValue) -> WidgetError {
    WidgetError::Navigation(crate::error::describe_js(value))
}

#[cfg(target_arch = "wasm32")]
impl BrowsingContext for TopWindow {
    fn current_href(&self) -> Option<String> {
        self.window.location().href().ok()
    }

    fn push_state(&self, url: &str) -> Result<()> {
        self.window
            .history()
            .map_err(|e| js_nav_err(&e))?
            .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
            .map_err(|e| js_nav_err(&e))
    }

    fn notify_history_change(&self) -> Result<()> {
        let event = web_sys::PopStateEvent::new("popstate").map_err(|e| js_nav_err(&e))?;
        self.window
            .dispatch_event(&event)
            .map(|_| ())
            .map_err(|e| js_nav_err(&e))
    }

    fn assign_location(&self, url: &str) -> Result<()> {
        self.window
            .location()
            .set_href(url)
            .map_err(|e| js_nav_err(&e))
    }
}
