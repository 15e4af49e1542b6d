use crate::types::Tile;

use super::LayoutStrategy;

/// Ordered CSS declarations positioning one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub declarations: Vec<(&'static str, String)>,
}

impl Placement {
    fn push(&mut self, property: &'static str, value: String) {
        self.declarations.push((property, value));
    }

    /// Value of a single property, if set
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }
}

fn px(units: i64, unit_px: u32) -> String {
    format!("{}px", units.saturating_mul(i64::from(unit_px)))
}

/// Position a tile under the given strategy.
pub fn place(tile: &Tile, strategy: &LayoutStrategy) -> Placement {
    let mut placement = Placement::default();
    match *strategy {
        LayoutStrategy::Absolute { unit_px } => {
            placement.push("position", "absolute".to_string());
            placement.push("left", px(tile.x, unit_px));
            placement.push("top", px(tile.y, unit_px));
            placement.push("width", px(tile.w, unit_px));
            placement.push("height", px(tile.h, unit_px));
        }
        LayoutStrategy::Grid { .. } => {
            placement.push("grid-column", format!("{} / span {}", tile.x, tile.w));
            placement.push("grid-row", format!("{} / span {}", tile.y, tile.h));
        }
    }
    placement
}

/// Style of the root region holding all tiles.
///
/// The absolute board reserves enough room for its furthest tile so the
/// embedding frame can scroll to it.
pub fn container_style(tiles: &[Tile], strategy: &LayoutStrategy, gap_px: u32) -> Placement {
    let mut placement = Placement::default();
    match *strategy {
        LayoutStrategy::Absolute { unit_px } => {
            let right = tiles
                .iter()
                .map(|t| t.x.saturating_add(t.w))
                .max()
                .unwrap_or(0);
            let bottom = tiles
                .iter()
                .map(|t| t.y.saturating_add(t.h))
                .max()
                .unwrap_or(0);
            placement.push("position", "relative".to_string());
            placement.push("min-width", px(right.max(0), unit_px));
            placement.push("min-height", px(bottom.max(0), unit_px));
        }
        LayoutStrategy::Grid {
            columns,
            row_height_px,
        } => {
            placement.push("display", "grid".to_string());
            placement.push(
                "grid-template-columns",
                format!("repeat({columns}, minmax(0, 1fr))"),
            );
            placement.push("grid-auto-rows", format!("{row_height_px}px"));
            placement.push("gap", format!("{gap_px}px"));
        }
    }
    placement
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tile(x: i64, y: i64, w: i64, h: i64) -> Tile {
        Tile {
            id: 1,
            x,
            y,
            w,
            h,
            label: String::new(),
            link: None,
            color: String::new(),
            bg_color: None,
            tile_type: None,
            pages: None,
        }
    }

    #[test]
    fn test_absolute_scales_by_unit() {
        let p = place(&tile(5, 2, 2, 1), &LayoutStrategy::Absolute { unit_px: 50 });
        assert_eq!(p.get("left"), Some("250px"));
        assert_eq!(p.get("top"), Some("100px"));
        assert_eq!(p.get("width"), Some("100px"));
        assert_eq!(p.get("height"), Some("50px"));
    }

    #[test]
    fn test_grid_uses_lines_and_spans() {
        let p = place(&tile(3, 1, 4, 2), &LayoutStrategy::default());
        assert_eq!(p.get("grid-column"), Some("3 / span 4"));
        assert_eq!(p.get("grid-row"), Some("1 / span 2"));
        assert!(p.get("left").is_none());
    }

    #[test]
    fn test_overlapping_tiles_are_placed_as_given() {
        let strategy = LayoutStrategy::absolute();
        let a = place(&tile(1, 1, 2, 2), &strategy);
        let b = place(&tile(1, 1, 3, 1), &strategy);
        assert_eq!(a.get("left"), b.get("left"));
        assert_eq!(a.get("top"), b.get("top"));
    }

    #[test]
    fn test_absolute_container_covers_extent() {
        let tiles = [tile(1, 1, 2, 1), tile(4, 3, 2, 2)];
        let p = container_style(&tiles, &LayoutStrategy::Absolute { unit_px: 10 }, 0);
        assert_eq!(p.get("min-width"), Some("60px"));
        assert_eq!(p.get("min-height"), Some("50px"));
    }

    #[test]
    fn test_grid_container_declares_columns() {
        let p = container_style(&[], &LayoutStrategy::default(), 8);
        assert_eq!(p.get("display"), Some("grid"));
        assert_eq!(
            p.get("grid-template-columns"),
            Some("repeat(12, minmax(0, 1fr))")
        );
        assert_eq!(p.get("grid-auto-rows"), Some("60px"));
        assert_eq!(p.declarations.len(), 4);
    }
}
