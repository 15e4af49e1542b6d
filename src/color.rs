//! Tile color resolution.
//!
//! Rows without a `Color` follow the host theme through CSS variables. Rows
//! with one also get a pale background derived from it, which is how an
//! explicitly colored tile stands apart from the default background.

/// Text color used when the row sets none
pub const DEFAULT_TEXT_COLOR: &str = "var(--grist-theme-text, #262633)";

/// Background of tiles without an explicit color
pub const DEFAULT_TILE_BG: &str = "var(--grist-theme-page-panels-bg, #ffffff)";

/// Fraction of white mixed into an explicit color to get its background
const BACKGROUND_TINT: f64 = 0.85;

/// Resolve `(text color, background override)` for a row's `Color` cell.
pub fn tile_colors(raw: Option<&str>) -> (String, Option<String>) {
    match raw.map(str::trim).filter(|c| !c.is_empty()) {
        None => (DEFAULT_TEXT_COLOR.to_string(), None),
        Some(color) => (color.to_string(), Some(background_tint(color))),
    }
}

/// Pale background for an explicit color.
///
/// Hex colors are lightened directly; other CSS colors (names, `rgb()`,
/// variables) are left to the browser via `color-mix()`.
pub fn background_tint(color: &str) -> String {
    match parse_hex(color) {
        Some(rgb) => {
            let (r, g, b) = lighten(rgb, BACKGROUND_TINT);
            format!("#{r:02X}{g:02X}{b:02X}")
        }
        None => format!("color-mix(in srgb, {color} 15%, transparent)"),
    }
}

/// Parse `#RGB` or `#RRGGBB`
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut it = hex.chars().map(|c| channel(&format!("{c}{c}")));
            Some((it.next()??, it.next()??, it.next()??))
        }
        6 => Some((
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

/// Mix a color toward white by `amount` (0.0 = unchanged, 1.0 = white).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lighten((r, g, b): (u8, u8, u8), amount: f64) -> (u8, u8, u8) {
    let mix = |c: u8| {
        let c = f64::from(c);
        (255.0 - c).mul_add(amount, c).round().clamp(0.0, 255.0) as u8
    };
    (mix(r), mix(g), mix(b))
}
