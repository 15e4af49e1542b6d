//! Host binding: ready handshake, record batches, and the current view.
//!
//! The host calls in one notification at a time on the UI thread. Each record
//! batch replaces the held tiles wholesale; nothing is merged or diffed.

use std::collections::HashMap;

use tracing::{debug, error, info, warn};

use crate::boundary::CrashBoundary;
use crate::config::WidgetConfig;
use crate::error::{Result, WidgetError};
use crate::mapper::{map_records, MapOutcome};
use crate::render::{render_board, render_root, render_status, Node, RenderBackend};
use crate::types::{ReadyRequest, SourceRecord, Tile};

/// Host mapping of widget column name to table column name.
/// `None` means the user left the column unmapped.
pub type ColumnMappings = HashMap<String, Option<String>>;

pub const CONNECTING_TEXT: &str = "Connecting...";
pub const HOST_UNAVAILABLE_TEXT: &str =
    "Host API not available. Open this widget as a custom widget inside a document.";
pub const EMPTY_TEXT: &str = "No tiles configured. Add rows to the linked table.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetStatus {
    /// Waiting for the first record batch
    Connecting,
    HostUnavailable,
    InitFailed(String),
    /// Connected, zero records
    Empty,
    Ready(Vec<Tile>),
}

impl WidgetStatus {
    /// User-visible status text, `None` when tiles are shown
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Connecting => Some(CONNECTING_TEXT.to_string()),
            Self::HostUnavailable => Some(HOST_UNAVAILABLE_TEXT.to_string()),
            Self::InitFailed(reason) => Some(format!("Failed to initialize widget: {reason}")),
            Self::Empty => Some(EMPTY_TEXT.to_string()),
            Self::Ready(_) => None,
        }
    }
}

/// Rename mapped table columns to the widget's column names.
///
/// Columns without a mapping keep whatever the host sent under the widget
/// name, so unmapped tables still work when their columns match.
pub fn apply_mappings(record: &SourceRecord, mappings: &ColumnMappings) -> SourceRecord {
    let mut mapped = record.clone();
    for (widget_col, table_col) in mappings {
        let Some(table_col) = table_col else {
            continue;
        };
        if table_col == widget_col {
            continue;
        }
        if let Some(value) = record.fields.get(table_col) {
            mapped.fields.insert(widget_col.clone(), value.clone());
        }
    }
    mapped
}

pub struct HostBinding {
    config: WidgetConfig,
    status: WidgetStatus,
    boundary: CrashBoundary,
    batches: u64,
}

impl HostBinding {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            status: WidgetStatus::Connecting,
            boundary: CrashBoundary::new(),
            batches: 0,
        }
    }

    pub fn status(&self) -> &WidgetStatus {
        &self.status
    }

    /// Tiles of the latest batch, empty unless `Ready`
    pub fn tiles(&self) -> &[Tile] {
        match &self.status {
            WidgetStatus::Ready(tiles) => tiles,
            _ => &[],
        }
    }

    /// Number of record batches received so far
    pub fn batches(&self) -> u64 {
        self.batches
    }

    pub fn boundary(&self) -> &CrashBoundary {
        &self.boundary
    }

    /// Column declaration for the host handshake
    pub fn ready_request(&self) -> ReadyRequest {
        ReadyRequest::for_widget(self.config.menu_support)
    }

    /// The host global was missing at mount time.
    pub fn host_missing(&mut self) {
        warn!("host API missing, no tiles will be shown");
        self.status = WidgetStatus::HostUnavailable;
    }

    /// Record the outcome of the ready handshake.
    pub fn on_ready_result(&mut self, result: Result<()>) {
        match result {
            Ok(()) => info!("host handshake complete"),
            Err(e) => {
                error!(error = %e, "host handshake failed");
                self.fail_init(e);
            }
        }
    }

    fn fail_init(&mut self, e: WidgetError) {
        let reason = match e {
            WidgetError::Init(reason) => reason,
            other => other.to_string(),
        };
        self.status = WidgetStatus::InitFailed(reason);
    }

    /// Record the outcome of registering for record updates.
    ///
    /// A failure is shown as `InitFailed`; no batch will arrive afterwards.
    pub fn on_subscribe_result(&mut self, result: Result<()>) {
        if let Err(e) = result {
            error!(error = %e, "record subscription failed");
            self.fail_init(e);
        }
    }

    /// Replace held tiles with a new batch.
    pub fn on_records(&mut self, records: &[SourceRecord], mappings: Option<&ColumnMappings>) {
        self.batches += 1;
        debug!(batch = self.batches, count = records.len(), "records updated");
        let outcome = match mappings {
            Some(mappings) => {
                let renamed: Vec<_> = records
                    .iter()
                    .map(|r| apply_mappings(r, mappings))
                    .collect();
                map_records(&renamed, &self.config)
            }
            None => map_records(records, &self.config),
        };
        self.status = match outcome {
            MapOutcome::Empty => WidgetStatus::Empty,
            MapOutcome::Tiles(tiles) => WidgetStatus::Ready(tiles),
        };
    }

    /// Build the current view through the crash boundary.
    pub fn view(&mut self) -> Node {
        let Self {
            config,
            status,
            boundary,
            ..
        } = self;
        boundary.render(|| Ok(build_view(status, config)))
    }

    /// Build and mount the current view in one guarded pass.
    ///
    /// When the pass fails the diagnostic panel is mounted in its place.
    pub fn render_into<B: RenderBackend>(&mut self, backend: &mut B) -> Node {
        let Self {
            config,
            status,
            boundary,
            ..
        } = self;
        let node = boundary.render(|| {
            let node = build_view(status, config);
            backend.mount(&node)?;
            Ok(node)
        });
        if boundary.is_tripped() {
            if let Err(e) = backend.mount(&node) {
                error!(backend = backend.name(), error = %e, "could not mount diagnostic panel");
            }
        }
        node
    }
}

fn build_view(status: &WidgetStatus, config: &WidgetConfig) -> Node {
    let content = match status {
        WidgetStatus::Ready(tiles) => render_board(tiles, config),
        other => render_status(&other.message().unwrap_or_default()),
    };
    render_root(content, config)
}
