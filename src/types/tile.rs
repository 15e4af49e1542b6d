use serde::{Deserialize, Serialize};

use super::PagesRef;

/// `Type` value that selects the menu sub-renderer
pub const MENU_TYPE: &str = "Menu";

/// Render model for one tile.
///
/// Rebuilt wholesale on every record batch; never mutated after mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Host row id, unique within the current batch only
    pub id: i64,
    /// 1-based start column
    pub x: i64,
    /// 1-based start row
    pub y: i64,
    /// Span in columns (or units)
    pub w: i64,
    /// Span in rows (or units)
    pub h: i64,
    pub label: String,
    /// Navigation target; `None` makes the tile non-interactive
    pub link: Option<String>,
    pub color: String,
    /// Background tint, present only when the row set an explicit color
    pub bg_color: Option<String>,
    #[serde(rename = "type")]
    pub tile_type: Option<String>,
    pub pages: Option<PagesRef>,
}

impl Tile {
    /// Whether this tile takes the menu sub-renderer.
    ///
    /// Requires `type == "Menu"` and a pages reference listing more than one
    /// sub-page; anything else renders as a plain link tile.
    pub fn is_menu(&self) -> bool {
        self.tile_type.as_deref() == Some(MENU_TYPE)
            && self.pages.as_ref().is_some_and(|p| p.len() > 1)
    }

    pub fn is_interactive(&self) -> bool {
        self.is_menu() || self.link.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubRecord;

    fn tile() -> Tile {
        Tile {
            id: 1,
            x: 1,
            y: 1,
            w: 2,
            h: 1,
            label: String::new(),
            link: None,
            color: String::new(),
            bg_color: None,
            tile_type: None,
            pages: None,
        }
    }

    fn pages(n: i64) -> PagesRef {
        PagesRef {
            table: "Pages".to_string(),
            records: (1..=n)
                .map(|id| SubRecord {
                    id,
                    page_name: format!("P{id}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_menu_needs_type_and_two_pages() {
        let mut t = tile();
        t.pages = Some(pages(2));
        assert!(!t.is_menu());

        t.tile_type = Some("Menu".to_string());
        assert!(t.is_menu());

        t.pages = Some(pages(1));
        assert!(!t.is_menu());

        t.tile_type = Some("menu".to_string());
        t.pages = Some(pages(3));
        assert!(!t.is_menu());
    }

    #[test]
    fn test_interactive_requires_link_or_menu() {
        let mut t = tile();
        assert!(!t.is_interactive());
        t.link = Some("#p=Budget".to_string());
        assert!(t.is_interactive());
    }
}
