//! Crash boundary around the render pass.
//!
//! The first failure while building or mounting the board (an `Err` from the
//! pass, or a panic on targets that unwind) is latched. From then on the
//! boundary only shows the diagnostic panel; recovering takes a reload.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::error;

use crate::error::Result;
use crate::render::Node;

pub const DIAGNOSTIC_TITLE: &str = "Something went wrong.";

#[derive(Debug, Default)]
pub struct CrashBoundary {
    failure: Option<String>,
}

impl CrashBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tripped(&self) -> bool {
        self.failure.is_some()
    }

    /// Description of the latched failure
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Run one render pass.
    ///
    /// Returns the pass's tree, or the diagnostic panel once any pass has
    /// failed. After tripping, `pass` is not called again.
    pub fn render<F>(&mut self, pass: F) -> Node
    where
        F: FnOnce() -> Result<Node>,
    {
        if let Some(failure) = &self.failure {
            return diagnostic_panel(failure);
        }
        let message = match catch_unwind(AssertUnwindSafe(pass)) {
            Ok(Ok(node)) => return node,
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };
        error!(failure = %message, "render failed, showing diagnostic panel");
        let panel = diagnostic_panel(&message);
        self.failure = Some(message);
        panel
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Fixed fallback view carrying the failure description
pub fn diagnostic_panel(message: &str) -> Node {
    Node::new("div")
        .class("crash-panel")
        .attr("role", "alert")
        .child(Node::new("h2").text(DIAGNOSTIC_TITLE))
        .child(Node::new("pre").class("crash-detail").text(message))
}
