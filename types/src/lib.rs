//! Shared settings types for Tiertip
//!
//! This crate contains the serializable settings bundle consumed by the
//! tooltip engine (tiertip-core) and the raster preview (tiertip-overlay).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Color Type
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color as [r, g, b, a] bytes
pub type Color = [u8; 4];

/// Default colors used by the settings and the engine's fixed tables
pub mod tooltip_colors {
    use super::Color;

    pub const BLACK: Color = [0, 0, 0, 255];
    pub const GRAY: Color = [128, 128, 128, 255];
    pub const GAINSBORO: Color = [220, 220, 220, 255];
    pub const PREFIX: Color = [136, 136, 255, 255];
    pub const SUFFIX: Color = [0, 206, 209, 255];
    pub const TIER_1: Color = [255, 0, 255, 255];
    pub const TIER_2: Color = [255, 255, 0, 255];
    pub const TIER_3: Color = [0, 255, 0, 255];
    pub const BLOCK_BG: Color = [0, 0, 0, 220];
    pub const ITEM_LEVEL_TEXT: Color = [255, 255, 0, 255];
    pub const ITEM_LEVEL_BG: Color = [255, 255, 255, 150];
}

// ─────────────────────────────────────────────────────────────────────────────
// Fast Mods Anchor
// ─────────────────────────────────────────────────────────────────────────────

/// Which edge of the tooltip the fast-mods panel hugs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FastModsAnchor {
    Top,
    #[default]
    Bottom,
}

impl FastModsAnchor {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Item Mods Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Switches and colors for everything drawn from the item's modifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemModsSettings {
    /// Mod block beneath the tooltip
    #[serde(default = "default_true")]
    pub enable_tooltip: bool,
    /// "T1 xN" count panel in the tooltip's top-left corner
    #[serde(default = "default_true")]
    pub enable_mod_count: bool,
    /// Frame around the tooltip colored by the best tier present
    #[serde(default = "default_true")]
    pub enable_item_highlight: bool,
    /// S/A/B grade in the tooltip's top-right corner
    #[serde(default = "default_true")]
    pub enable_grade_badge: bool,
    #[serde(default = "default_true")]
    pub enable_fast_mods: bool,
    #[serde(default = "default_true")]
    pub enable_fast_mods_tags: bool,
    #[serde(default = "default_true")]
    pub show_tags: bool,
    #[serde(default = "default_true")]
    pub show_short_names: bool,
    #[serde(default = "default_true")]
    pub show_mod_names: bool,
    /// Debug: print the first stat id of every mod
    #[serde(default)]
    pub show_stat_names: bool,
    #[serde(default)]
    pub start_stats_on_same_line: bool,
    #[serde(default)]
    pub start_tags_on_same_line: bool,
    #[serde(default = "default_true")]
    pub sort_mods_by_tier: bool,
    #[serde(default)]
    pub sort_mods_by_name: bool,
    /// Prefer the tier printed by the game's advanced tooltip over catalog ranking
    #[serde(default)]
    pub use_ui_tier_parsing: bool,
    #[serde(default)]
    pub fast_mods_anchor: FastModsAnchor,
    #[serde(default = "default_prefix_color")]
    pub prefix_color: Color,
    #[serde(default = "default_suffix_color")]
    pub suffix_color: Color,
    #[serde(default = "default_t1_color")]
    pub t1_color: Color,
    #[serde(default = "default_t2_color")]
    pub t2_color: Color,
    #[serde(default = "default_t3_color")]
    pub t3_color: Color,
    #[serde(default = "default_block_bg")]
    pub background_color: Color,
}

impl Default for ItemModsSettings {
    fn default() -> Self {
        Self {
            enable_tooltip: true,
            enable_mod_count: true,
            enable_item_highlight: true,
            enable_grade_badge: true,
            enable_fast_mods: true,
            enable_fast_mods_tags: true,
            show_tags: true,
            show_short_names: true,
            show_mod_names: true,
            show_stat_names: false,
            start_stats_on_same_line: false,
            start_tags_on_same_line: false,
            sort_mods_by_tier: true,
            sort_mods_by_name: false,
            use_ui_tier_parsing: false,
            fast_mods_anchor: FastModsAnchor::Bottom,
            prefix_color: tooltip_colors::PREFIX,
            suffix_color: tooltip_colors::SUFFIX,
            t1_color: tooltip_colors::TIER_1,
            t2_color: tooltip_colors::TIER_2,
            t3_color: tooltip_colors::TIER_3,
            background_color: tooltip_colors::BLOCK_BG,
        }
    }
}

impl ItemModsSettings {
    /// Configured color for tiers 1..=3, `None` for anything else
    pub fn tier_color(&self, tier: u32) -> Option<Color> {
        match tier {
            1 => Some(self.t1_color),
            2 => Some(self.t2_color),
            3 => Some(self.t3_color),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Item Level Settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLevelSettings {
    #[serde(default = "default_true")]
    pub enable: bool,
    /// Scale factor for item level text (0.5 - 2.0)
    #[serde(default = "default_text_size")]
    pub text_size: f32,
    #[serde(default = "default_item_level_text")]
    pub text_color: Color,
    #[serde(default = "default_item_level_bg")]
    pub background_color: Color,
}

impl Default for ItemLevelSettings {
    fn default() -> Self {
        Self {
            enable: true,
            text_size: 1.0,
            text_color: tooltip_colors::ITEM_LEVEL_TEXT,
            background_color: tooltip_colors::ITEM_LEVEL_BG,
        }
    }
}

impl ItemLevelSettings {
    /// Text scale clamped to the supported range
    pub fn clamped_text_size(&self) -> f32 {
        self.text_size.clamp(0.5, 2.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Debug Settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugSettings {
    #[serde(default)]
    pub show_debug: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Root Settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipSettings {
    #[serde(default = "default_true")]
    pub enable: bool,
    #[serde(default)]
    pub item_mods: ItemModsSettings,
    #[serde(default)]
    pub item_level: ItemLevelSettings,
    #[serde(default)]
    pub debug: DebugSettings,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            enable: true,
            item_mods: ItemModsSettings::default(),
            item_level: ItemLevelSettings::default(),
            debug: DebugSettings::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_text_size() -> f32 {
    1.0
}
fn default_prefix_color() -> Color {
    tooltip_colors::PREFIX
}
fn default_suffix_color() -> Color {
    tooltip_colors::SUFFIX
}
fn default_t1_color() -> Color {
    tooltip_colors::TIER_1
}
fn default_t2_color() -> Color {
    tooltip_colors::TIER_2
}
fn default_t3_color() -> Color {
    tooltip_colors::TIER_3
}
fn default_block_bg() -> Color {
    tooltip_colors::BLOCK_BG
}
fn default_item_level_text() -> Color {
    tooltip_colors::ITEM_LEVEL_TEXT
}
fn default_item_level_bg() -> Color {
    tooltip_colors::ITEM_LEVEL_BG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let settings: TooltipSettings = toml::from_str("").unwrap();
        assert_eq!(settings.item_mods, ItemModsSettings::default());
        assert_eq!(settings.item_level, ItemLevelSettings::default());
        assert!(settings.enable);
    }

    #[test]
    fn partial_item_mods_keeps_other_defaults() {
        let settings: TooltipSettings = toml::from_str(
            r#"
            [item_mods]
            show_tags = false
            fast_mods_anchor = "Top"
            t1_color = [1, 2, 3, 4]
            "#,
        )
        .unwrap();

        assert!(!settings.item_mods.show_tags);
        assert_eq!(settings.item_mods.fast_mods_anchor, FastModsAnchor::Top);
        assert_eq!(settings.item_mods.t1_color, [1, 2, 3, 4]);
        assert!(settings.item_mods.show_short_names);
        assert_eq!(settings.item_mods.t2_color, tooltip_colors::TIER_2);
    }

    #[test]
    fn settings_survive_toml_serialization() {
        let mut settings = TooltipSettings::default();
        settings.item_mods.sort_mods_by_name = true;
        settings.item_level.text_size = 1.5;

        let text = toml::to_string(&settings).unwrap();
        let parsed: TooltipSettings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn tier_color_only_for_first_three_tiers() {
        let mods = ItemModsSettings::default();
        assert_eq!(mods.tier_color(1), Some(mods.t1_color));
        assert_eq!(mods.tier_color(3), Some(mods.t3_color));
        assert_eq!(mods.tier_color(0), None);
        assert_eq!(mods.tier_color(4), None);
    }

    #[test]
    fn item_level_text_size_is_clamped() {
        let level = ItemLevelSettings {
            text_size: 7.0,
            ..Default::default()
        };
        assert_eq!(level.clamped_text_size(), 2.0);
    }
}
