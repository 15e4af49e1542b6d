//! Tests for tile rendering under both layout strategies.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::unreachable
)]

mod common;

use common::{menu_row, tile_row};
use tileboard::render::html::to_html;
use tileboard::render::{render_board, render_tile, ClickAction, Node};
use tileboard::{map_record, render_html, LayoutStrategy, SourceRecord, Tile, WidgetConfig};

fn tile(record: &SourceRecord) -> Tile {
    map_record(record, &WidgetConfig::default())
}

fn targets(node: &Node) -> Vec<String> {
    node.clickables()
        .into_iter()
        .map(|n| match &n.on_click {
            Some(ClickAction::Navigate(t)) => t.clone(),
            None => unreachable!(),
        })
        .collect()
}

// ============================================================================
// Menu tiles
// ============================================================================

#[test]
fn test_menu_lists_every_page() {
    let node = render_tile(&tile(&menu_row()), &LayoutStrategy::default());
    assert!(node.has_class("tile-menu"));

    let entries = node.find_all(&|n| n.has_class("menu-entry"));
    let labels: Vec<_> = entries.iter().map(|n| n.text.as_deref().unwrap()).collect();
    assert_eq!(labels, ["Home", "About"]);
    assert_eq!(targets(&node), ["#Home", "#About"]);
}

#[test]
fn test_menu_targets_are_escaped() {
    let record = SourceRecord::new(1).with("Type", "Menu").with(
        "Pages",
        serde_json::json!(["Pages", [
            {"id": 1, "page_name": "Sales & Ops"},
            {"id": 2, "page_name": "Q1/Q2"}
        ]]),
    );
    let node = render_tile(&tile(&record), &LayoutStrategy::default());
    assert_eq!(targets(&node), ["#Sales%20%26%20Ops", "#Q1%2FQ2"]);
}

#[test]
fn test_non_object_page_entries_still_count() {
    let record = SourceRecord::new(1).with("Type", "Menu").with(
        "Pages",
        serde_json::json!(["Pages", [{"id": 1, "page_name": "A"}, 2]]),
    );
    let tile = tile(&record);
    assert!(tile.is_menu());
    let node = render_tile(&tile, &LayoutStrategy::default());
    assert_eq!(node.find_all(&|n| n.has_class("menu-entry")).len(), 2);
    assert_eq!(targets(&node), ["#A", "#"]);
}

#[test]
fn test_single_page_menu_renders_as_default_tile() {
    let record = SourceRecord::new(1)
        .with("Type", "Menu")
        .with("Link", "#p=Solo")
        .with(
            "Pages",
            serde_json::json!(["Pages", [{"id": 1, "page_name": "Solo"}]]),
        );
    let node = render_tile(&tile(&record), &LayoutStrategy::default());
    assert!(!node.has_class("tile-menu"));
    assert_eq!(targets(&node), ["#p=Solo"]);
}

#[test]
fn test_menu_disabled_renders_default_tile() {
    let config = WidgetConfig {
        menu_support: false,
        ..WidgetConfig::default()
    };
    let node = render_tile(&map_record(&menu_row(), &config), &config.layout);
    assert!(node.find_all(&|n| n.has_class("menu-entry")).is_empty());
}

// ============================================================================
// Default tiles
// ============================================================================

#[test]
fn test_default_tile_is_one_click_region() {
    let record = tile_row(1, "Budget", 0, 0, 2, 1).with("Link", "#p=Budget");
    let node = render_tile(&tile(&record), &LayoutStrategy::default());
    assert_eq!(node.clickables().len(), 1);
    assert_eq!(targets(&node), ["#p=Budget"]);
    assert_eq!(
        node.find_all(&|n| n.has_class("tile-label"))[0].text.as_deref(),
        Some("Budget")
    );
}

#[test]
fn test_tile_without_link_is_inert() {
    let node = render_tile(&tile(&tile_row(1, "Info", 0, 0, 2, 1)), &LayoutStrategy::default());
    assert!(node.clickables().is_empty());
    assert!(node.attr_value("role").is_none());
}

#[test]
fn test_explicit_color_sets_background() {
    let record = tile_row(1, "Red", 0, 0, 1, 1).with("Color", "#FF0000");
    let node = render_tile(&tile(&record), &LayoutStrategy::default());
    assert_eq!(node.style_value("color"), Some("#FF0000"));
    assert_eq!(node.style_value("background"), Some("#FFD9D9"));
}

// ============================================================================
// Layout strategies
// ============================================================================

#[test]
fn test_absolute_strategy_positions_in_pixels() {
    let strategy = LayoutStrategy::Absolute { unit_px: 50 };
    let node = render_tile(&tile(&tile_row(1, "A", 3, 0, 2, 1)), &strategy);
    assert_eq!(node.style_value("position"), Some("absolute"));
    assert_eq!(node.style_value("left"), Some("200px"));
    assert_eq!(node.style_value("top"), Some("50px"));
    assert_eq!(node.style_value("width"), Some("100px"));
    assert_eq!(node.style_value("height"), Some("50px"));
}

#[test]
fn test_grid_strategy_positions_by_line() {
    let node = render_tile(&tile(&tile_row(1, "A", 3, 0, 4, 2)), &LayoutStrategy::default());
    assert_eq!(node.style_value("grid-column"), Some("4 / span 4"));
    assert_eq!(node.style_value("grid-row"), Some("1 / span 2"));
}

#[test]
fn test_overlapping_tiles_both_render_in_order() {
    let config = WidgetConfig::default();
    let tiles = vec![
        tile(&tile_row(1, "Under", 0, 0, 2, 2)),
        tile(&tile_row(2, "Over", 0, 0, 2, 2)),
    ];
    let board = render_board(&tiles, &config);
    let labels: Vec<_> = board
        .find_all(&|n| n.has_class("tile-label"))
        .iter()
        .map(|n| n.text.clone().unwrap())
        .collect();
    assert_eq!(labels, ["Under", "Over"]);
}

#[test]
fn test_board_container_matches_strategy() {
    let grid = render_board(&[], &WidgetConfig::default());
    assert!(grid.has_class("board-grid"));
    assert_eq!(grid.style_value("display"), Some("grid"));

    let config = WidgetConfig {
        layout: LayoutStrategy::absolute(),
        ..WidgetConfig::default()
    };
    let absolute = render_board(&[], &config);
    assert!(absolute.has_class("board-absolute"));
    assert_eq!(absolute.style_value("position"), Some("relative"));
}

// ============================================================================
// Whole views
// ============================================================================

#[test]
fn test_empty_batch_renders_status_not_tiles() {
    let html = render_html(&[], &WidgetConfig::default());
    assert!(html.contains("No tiles configured"));
    assert!(!html.contains("data-tile-id"));
    assert!(!html.contains("board-grid"));
}

#[test]
fn test_board_html_carries_version_tag_and_targets() {
    let records = vec![tile_row(1, "Docs", 0, 0, 2, 1).with("Link", "https://other.example/x")];
    let html = render_html(&records, &WidgetConfig::default());
    assert!(html.contains("data-href=\"https://other.example/x\""));
    assert!(html.contains(&format!("v{}", tileboard::version())));
}

#[test]
fn test_labels_are_escaped_in_html() {
    let tile = tile(&tile_row(1, "<b>Q&A</b>", 0, 0, 2, 1));
    let html = to_html(&render_tile(&tile, &LayoutStrategy::default()));
    assert!(html.contains("&lt;b&gt;Q&amp;A&lt;/b&gt;"));
}
