//! Record mapper: host rows to tile view-models.
//!
//! Every coercion here is total. A malformed cell never produces an error,
//! it falls back to the column default, so a batch of N records always maps
//! to exactly N tiles in the same order.

use serde_json::Value;
use tracing::debug;

use crate::color::tile_colors;
use crate::config::WidgetConfig;
use crate::types::{PagesRef, SourceRecord, Tile};

pub const DEFAULT_X: i64 = 0;
pub const DEFAULT_Y: i64 = 0;
pub const DEFAULT_W: i64 = 2;
pub const DEFAULT_H: i64 = 1;

/// The host numbers columns from 0, the presentation from 1.
const ORIGIN_OFFSET: i64 = 1;

/// Result of mapping one record batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOutcome {
    /// Host connected but supplied no rows
    Empty,
    Tiles(Vec<Tile>),
}

/// Coerce a cell to an integer, substituting `default` when it is not a
/// finite number or numeric text.
///
/// Rounds half toward positive infinity, matching the host's own rounding.
pub fn coerce_int(value: Option<&Value>, default: i64) -> i64 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .filter(|n| n.is_finite())
        .map_or(default, round_half_up)
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(n: f64) -> i64 {
    // `as` saturates at the i64 bounds
    (n + 0.5).floor() as i64
}

/// Map a single host row.
pub fn map_record(record: &SourceRecord, config: &WidgetConfig) -> Tile {
    let label = record
        .text("Label")
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| config.label_default().to_string());
    let link = record
        .text("Link")
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());
    let (color, bg_color) = tile_colors(record.text("Color").as_deref());

    let (tile_type, pages) = if config.menu_support {
        (
            record.text("Type"),
            record.field("Pages").and_then(PagesRef::from_value),
        )
    } else {
        (None, None)
    };

    Tile {
        id: record.id,
        x: coerce_int(record.field("X"), DEFAULT_X).saturating_add(ORIGIN_OFFSET),
        y: coerce_int(record.field("Y"), DEFAULT_Y).saturating_add(ORIGIN_OFFSET),
        w: coerce_int(record.field("W"), DEFAULT_W),
        h: coerce_int(record.field("H"), DEFAULT_H),
        label,
        link,
        color,
        bg_color,
        tile_type,
        pages,
    }
}

/// Map a whole batch, preserving input order.
pub fn map_records(records: &[SourceRecord], config: &WidgetConfig) -> MapOutcome {
    debug!(count = records.len(), "mapping record batch");
    if records.is_empty() {
        return MapOutcome::Empty;
    }
    MapOutcome::Tiles(records.iter().map(|r| map_record(r, config)).collect())
}
