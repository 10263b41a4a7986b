//! Per-frame render pass
//!
//! Takes the hovered item and the game tooltip's rectangle, decides which
//! pieces are visible for this item and settings, and collects everything
//! into one display list. The pass itself never fails: a fast-mods panel
//! that cannot be laid out is logged and left out.

use tiertip_types::TooltipSettings;

use crate::catalog::ModCatalog;
use crate::error::FastModsError;
use crate::geometry::{Pos, Rect};
use crate::item::{HoveredItem, ItemRarity};
use crate::layout::fast_mods::{self, PlacedBadge};
use crate::layout::panels;
use crate::layout::tooltip::TooltipEngine;
use crate::mod_value::{BuildContext, ModCache, ModValue};
use crate::ordering::{SortOptions, sorted_mods};
use crate::surface::{DisplayList, TextMeasure};
use crate::tiers::TierCounts;

/// Gap between the game tooltip and the mod block
const BLOCK_GAP: f32 = 5.0;
/// Offset of the first mod inside the block
const BLOCK_INSET: (f32, f32) = (5.0, 4.0);
/// Blocks this short hold nothing worth a background
const MIN_BLOCK_HEIGHT: f32 = 4.0;

/// Everything produced for one frame
#[derive(Debug, Default)]
pub struct RenderOutput {
    pub display: DisplayList,
    /// Background box of the mod block, when one was drawn
    pub block: Option<Rect>,
    pub block_height: f32,
    pub counts: TierCounts,
    pub badges: Vec<PlacedBadge>,
    /// Why the fast-mods panel was left out this frame
    pub fast_mods_error: Option<FastModsError>,
}

/// Owns the per-item cache and layout state across frames
#[derive(Debug, Default)]
pub struct AdvancedTooltip {
    cache: ModCache,
    engine: TooltipEngine,
}

impl AdvancedTooltip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of the item last rendered
    pub fn cached_mods(&self) -> &[ModValue] {
        self.cache.current().map(|(_, mods)| mods).unwrap_or(&[])
    }

    pub fn cache(&self) -> &ModCache {
        &self.cache
    }

    /// Drop cached records, e.g. after the catalog was reloaded
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    pub fn render(
        &mut self,
        item: &HoveredItem,
        tooltip: Rect,
        settings: &TooltipSettings,
        catalog: &ModCatalog,
        measure: &mut impl TextMeasure,
    ) -> RenderOutput {
        let mut output = RenderOutput::default();
        if !settings.enable {
            return output;
        }
        if item.has_insufficient_text() {
            tracing::debug!(item = item.id.0, "Skipping item with incomplete mod text");
            return output;
        }

        let mod_settings = &settings.item_mods;
        let ctx = BuildContext::new(catalog).with_rich_tier_parsing(mod_settings.use_ui_tier_parsing);
        let mods = self.cache.get_or_build(item, ctx);

        if mod_settings.enable_tooltip && item.identified && item.rarity != ItemRarity::Normal {
            let top = tooltip.bottom() + BLOCK_GAP;
            let origin = Pos::new(tooltip.left() + BLOCK_INSET.0, top + BLOCK_INSET.1);

            let visible: Vec<ModValue> = mods
                .iter()
                .filter(|mv| mv.stat_names.iter().any(|s| !s.is_empty()))
                .cloned()
                .collect();
            let ordered = sorted_mods(&visible, SortOptions::from_settings(mod_settings));
            let mut layout = self.engine.layout(&ordered, origin, mod_settings, measure);

            let height = layout.height + BLOCK_INSET.1;
            output.block_height = height;
            let mark = output.display.len();
            output.display.append(&mut layout.display);
            if height > MIN_BLOCK_HEIGHT {
                let rect = Rect::new(tooltip.left(), top, tooltip.w, height);
                output
                    .display
                    .insert_background(mark, rect, mod_settings.background_color);
                output.block = Some(rect);
            }
        }

        let counts = TierCounts::count(mods);
        output.counts = counts;

        if mod_settings.enable_mod_count {
            panels::draw_count_panel(
                &mut output.display,
                &counts,
                tooltip.top_left(),
                mod_settings,
                measure,
            );
        }
        if mod_settings.enable_item_highlight {
            panels::draw_highlight_frame(&mut output.display, &counts, tooltip, mod_settings);
        }
        if mod_settings.enable_grade_badge {
            panels::draw_grade_badge(&mut output.display, &counts, tooltip, mod_settings, measure);
        }
        if settings.item_level.enable {
            panels::draw_item_level_badge(
                &mut output.display,
                item.item_level,
                tooltip,
                item.header_offset(),
                &settings.item_level,
                measure,
            );
        }

        if mod_settings.enable_fast_mods
            && matches!(item.rarity, ItemRarity::Magic | ItemRarity::Rare)
        {
            match fast_mods::layout(mods, tooltip, mod_settings, settings.debug.show_debug, measure) {
                Ok(mut panel) => {
                    output.display.append(&mut panel.display);
                    output.badges = panel.badges;
                }
                Err(err) => {
                    tracing::debug!(error = %err, "Fast mods panel skipped");
                    output.fast_mods_error = Some(err);
                }
            }
        }

        output
    }
}
