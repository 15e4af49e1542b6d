//! Shared fixtures for the integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::cell::RefCell;

use serde_json::{json, Value};
use tileboard::error::{Result, WidgetError};
use tileboard::{BrowsingContext, SourceRecord};

// ============================================================================
// Record fixtures
// ============================================================================

/// A fully specified tile row.
pub fn tile_row(id: i64, label: &str, x: i64, y: i64, w: i64, h: i64) -> SourceRecord {
    SourceRecord::new(id)
        .with("Label", label)
        .with("X", x)
        .with("Y", y)
        .with("W", w)
        .with("H", h)
}

/// Parse a JSON array of host rows.
pub fn rows(value: Value) -> Vec<SourceRecord> {
    serde_json::from_value(value).expect("fixture rows must deserialize")
}

/// A menu row with the two-page `Pages` reference used across tests.
pub fn menu_row() -> SourceRecord {
    SourceRecord::new(10)
        .with("Label", "Navigate")
        .with("Type", "Menu")
        .with(
            "Pages",
            json!([
                "Pages",
                [
                    {"id": 1, "fields": {"page_name": "Home"}},
                    {"id": 2, "fields": {"page_name": "About"}}
                ]
            ]),
        )
}

// ============================================================================
// Browsing context double
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Push(String),
    PopState,
    Assign(String),
}

/// Records every effect instead of touching a browser.
#[derive(Debug, Default)]
pub struct RecordingContext {
    pub href: Option<String>,
    pub reject_push: bool,
    pub effects: RefCell<Vec<Effect>>,
}

impl RecordingContext {
    pub fn at(href: &str) -> Self {
        Self {
            href: Some(href.to_string()),
            ..Self::default()
        }
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }
}

impl BrowsingContext for RecordingContext {
    fn current_href(&self) -> Option<String> {
        self.href.clone()
    }

    fn push_state(&self, url: &str) -> Result<()> {
        if self.reject_push {
            return Err(WidgetError::Navigation("SecurityError".to_string()));
        }
        self.effects.borrow_mut().push(Effect::Push(url.to_string()));
        Ok(())
    }

    fn notify_history_change(&self) -> Result<()> {
        self.effects.borrow_mut().push(Effect::PopState);
        Ok(())
    }

    fn assign_location(&self, url: &str) -> Result<()> {
        self.effects.borrow_mut().push(Effect::Assign(url.to_string()));
        Ok(())
    }
}
