//! Fixed colors used by the layout engines

use phf::phf_map;
use tiertip_types::{Color, ItemModsSettings, tooltip_colors};

pub const CRAFTED_COLOR: Color = [180, 96, 255, 255];
pub const DESCRIPTION_COLOR: Color = tooltip_colors::GAINSBORO;
pub const STAT_NAME_COLOR: Color = tooltip_colors::GRAY;
pub const FRAME_COLOR: Color = tooltip_colors::GRAY;
pub const BADGE_BG: Color = [0, 0, 0, 180];
pub const TAG_FALLBACK: Color = tooltip_colors::GRAY;

/// Tag name → chip color
pub static TAG_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "Fire" => [255, 0, 0, 255],
    "Cold" => [41, 102, 241, 255],
    "Life" => [255, 0, 255, 255],
    "Lightning" => [255, 255, 0, 255],
    "Physical" => [225, 170, 20, 255],
    "Critical" => [168, 220, 26, 255],
    "Mana" => [20, 240, 255, 255],
    "Attack" => [240, 100, 30, 255],
    "Speed" => [0, 255, 192, 255],
    "Caster" => [216, 0, 255, 255],
    "Elemental" => [255, 255, 255, 255],
    "Gem Level" => [200, 230, 160, 255],
};

/// Chip color for a mod tag, gray when unmapped
pub fn tag_color(tag: &str) -> Color {
    TAG_COLORS.get(tag).copied().unwrap_or(TAG_FALLBACK)
}

/// Color for a tier, falling back when the tier has no configured color
pub fn tier_color_or(settings: &ItemModsSettings, tier: u32, fallback: Color) -> Color {
    settings.tier_color(tier).unwrap_or(fallback)
}
