//! Tile sub-renderers and board assembly.

use super::{ClickAction, Node};
use crate::color::DEFAULT_TILE_BG;
use crate::config::WidgetConfig;
use crate::layout::{container_style, place, LayoutStrategy};
use crate::types::{SubRecord, Tile};

/// Same-page hash for a menu entry
pub fn menu_target(page_name: &str) -> String {
    format!("#{}", urlencoding::encode(page_name))
}

/// Shared shell of every tile: placement, colors, id.
fn tile_shell(tile: &Tile, strategy: &LayoutStrategy, class: &str) -> Node {
    let background = tile.bg_color.as_deref().unwrap_or(DEFAULT_TILE_BG);
    Node::new("div")
        .class(class)
        .attr("data-tile-id", tile.id.to_string())
        .styles(place(tile, strategy).declarations)
        .style("color", tile.color.as_str())
        .style("background", background)
}

/// Plain tile: one clickable region following the tile's link.
pub fn render_default_tile(tile: &Tile, strategy: &LayoutStrategy) -> Node {
    let label = Node::new("span").class("tile-label").text(tile.label.as_str());
    match &tile.link {
        Some(link) => tile_shell(tile, strategy, "tile tile-link")
            .attr("role", "link")
            .attr("title", link.as_str())
            .on_click(ClickAction::Navigate(link.clone()))
            .child(label),
        None => tile_shell(tile, strategy, "tile").child(label),
    }
}

fn menu_entry(page: &SubRecord) -> Node {
    Node::new("li")
        .class("menu-entry")
        .attr("role", "link")
        .attr("data-page-id", page.id.to_string())
        .text(page.page_name.as_str())
        .on_click(ClickAction::Navigate(menu_target(&page.page_name)))
}

/// Menu tile: a caption and one clickable row per sub-page.
pub fn render_menu_tile(tile: &Tile, strategy: &LayoutStrategy) -> Node {
    let entries = tile
        .pages
        .iter()
        .flat_map(|pages| pages.records.iter())
        .map(menu_entry);
    tile_shell(tile, strategy, "tile tile-menu")
        .child(Node::new("div").class("tile-label").text(tile.label.as_str()))
        .child(Node::new("ul").class("menu-list").children(entries))
}

/// Pick the sub-renderer for a tile.
pub fn render_tile(tile: &Tile, strategy: &LayoutStrategy) -> Node {
    if tile.is_menu() {
        render_menu_tile(tile, strategy)
    } else {
        render_default_tile(tile, strategy)
    }
}

/// All tiles inside the layout container
pub fn render_board(tiles: &[Tile], config: &WidgetConfig) -> Node {
    Node::new("div")
        .class(config.layout.class_name())
        .styles(container_style(tiles, &config.layout, config.gap_px).declarations)
        .children(tiles.iter().map(|t| render_tile(t, &config.layout)))
}

/// Status message shown instead of a board
pub fn render_status(message: &str) -> Node {
    Node::new("div")
        .class("status")
        .attr("role", "status")
        .text(message)
}

pub fn version_tag() -> Node {
    Node::new("div")
        .class("version-tag")
        .style("position", "fixed")
        .style("right", "4px")
        .style("bottom", "2px")
        .style("font-size", "10px")
        .style("opacity", "0.5")
        .style("pointer-events", "none")
        .text(format!("v{}", env!("CARGO_PKG_VERSION")))
}

/// Widget root: the given content plus the version overlay when enabled.
pub fn render_root(content: Node, config: &WidgetConfig) -> Node {
    let root = Node::new("div").class("tileboard").child(content);
    if config.show_version_tag {
        root.child(version_tag())
    } else {
        root
    }
}
