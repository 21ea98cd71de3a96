/// Single-character stand-ins for named icons.
///
/// Both renderers print these as text, so an icon reads the same on screen
/// and in an exported deck. Unknown names fall back to the check mark.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "speed" => "⚡",
        "money" => "$",
        "grid" => "▦",
        "clock" => "◷",
        "recycle" | "sync" | "continuous" => "↻",
        "shield" => "⛨",
        "apps" | "queue" => "☰",
        "warning" => "⚠",
        "doc" => "▤",
        "robot" | "auto" => "⚙",
        "chart" => "▥",
        "platform" => "▭",
        "inherit" => "⧉",
        _ => "✓",
    }
}

pub const BULLET: &str = "• ";
pub const TREND_UP: &str = "▲";
pub const TREND_DOWN: &str = "▼";
pub const TREND_FLAT: &str = "■";
