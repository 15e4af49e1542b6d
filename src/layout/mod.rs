//! Tile placement strategies.
//!
//! Two interchangeable ways of turning a tile's `(x, y, w, h)` into CSS:
//! - Absolute: fixed pixels per unit, tiles positioned inside a relative box
//! - Grid: start line plus span on a fixed-column, auto-row CSS grid
//!
//! Neither strategy checks for overlap. Tiles claiming the same cells are
//! drawn in document order, the last one on top.

mod placement;

pub use placement::{container_style, place, Placement};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};

/// Pixels per layout unit for the absolute strategy
pub const DEFAULT_UNIT_PX: u32 = 60;
/// Column count of the grid strategy
pub const DEFAULT_GRID_COLUMNS: u32 = 12;
/// Height of an auto-generated grid row
pub const DEFAULT_ROW_HEIGHT_PX: u32 = 60;

const fn default_unit_px() -> u32 {
    DEFAULT_UNIT_PX
}

const fn default_columns() -> u32 {
    DEFAULT_GRID_COLUMNS
}

const fn default_row_height_px() -> u32 {
    DEFAULT_ROW_HEIGHT_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum LayoutStrategy {
    Absolute {
        #[serde(default = "default_unit_px")]
        unit_px: u32,
    },
    Grid {
        #[serde(default = "default_columns")]
        columns: u32,
        #[serde(default = "default_row_height_px")]
        row_height_px: u32,
    },
}

impl Default for LayoutStrategy {
    fn default() -> Self {
        Self::Grid {
            columns: DEFAULT_GRID_COLUMNS,
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
        }
    }
}

impl LayoutStrategy {
    pub fn absolute() -> Self {
        Self::Absolute {
            unit_px: DEFAULT_UNIT_PX,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Absolute { unit_px: 0 } => {
                Err(WidgetError::Config("unitPx must be positive".to_string()))
            }
            Self::Grid { columns: 0, .. } => {
                Err(WidgetError::Config("columns must be positive".to_string()))
            }
            Self::Grid {
                row_height_px: 0, ..
            } => Err(WidgetError::Config("rowHeightPx must be positive".to_string())),
            _ => Ok(()),
        }
    }

    /// CSS class applied to the board root
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Absolute { .. } => "board board-absolute",
            Self::Grid { .. } => "board board-grid",
        }
    }
}
