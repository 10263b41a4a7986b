//! Derived per-modifier records and the same-item cache

use crate::affix::AffixType;
use crate::catalog::ModCatalog;
use crate::item::{HoveredItem, ItemId, RawModifier};
use crate::short_names::short_name;

/// Immutable display record derived from one [`RawModifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModValue {
    pub affix_type: AffixType,
    /// Raw category code, kept for ordering unknown categories
    pub category: u8,
    /// 1-based rank among unlocked variants, 0 when no tier applies
    pub tier: u32,
    /// Number of unlocked variants; 1 means a tier label is meaningless
    pub total_tiers: u32,
    /// Compact label, empty when the group has none
    pub short_name: String,
    pub human_name: String,
    pub affix_name: String,
    pub raw_name: String,
    pub stat_names: Vec<String>,
    pub tags: Vec<String>,
    pub is_implicit: bool,
    pub is_crafted: bool,
    pub can_have_tiers: bool,
}

impl ModValue {
    /// Whether a "T{n}" marker carries information for this mod
    pub fn shows_tier_marker(&self) -> bool {
        !self.is_crafted && self.can_have_tiers && self.tier > 0 && self.total_tiers > 1
    }

    pub fn has_short_name(&self) -> bool {
        !self.short_name.is_empty()
    }

    /// First stat identifier, used by the debug dump and the stat-name export
    pub fn first_stat_name(&self) -> Option<&str> {
        self.stat_names
            .first()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Ordering value: affix order, raw code for unknown categories
    pub fn category_order(&self) -> i32 {
        match self.affix_type {
            AffixType::Unknown => self.category as i32,
            other => other.sort_key(),
        }
    }
}

/// Collaborators and switches the builder needs besides the item itself
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub catalog: &'a ModCatalog,
    /// Prefer the tier text scraped from the game's tooltip
    pub rich_tier_parsing: bool,
}

impl<'a> BuildContext<'a> {
    pub fn new(catalog: &'a ModCatalog) -> Self {
        Self {
            catalog,
            rich_tier_parsing: false,
        }
    }

    pub fn with_rich_tier_parsing(mut self, enabled: bool) -> Self {
        self.rich_tier_parsing = enabled;
        self
    }
}

/// Derive the display record for one modifier. Pure: the same inputs always
/// produce the same record.
pub fn build(raw: &RawModifier, item_level: u32, base_type: &str, ctx: BuildContext<'_>) -> ModValue {
    let affix_type = AffixType::from_code(raw.category);

    let variants = ctx
        .catalog
        .unlocked_variants(&raw.group, raw.category, base_type, item_level);
    let total_tiers = variants.len() as u32;
    let ranked_tier = variants
        .iter()
        .position(|v| v.key == raw.key)
        .map(|idx| idx as u32 + 1)
        .unwrap_or(0);

    let can_have_tiers = affix_type.is_affix() && !raw.is_crafted && total_tiers > 0;

    let ui_tier = if ctx.rich_tier_parsing {
        raw.ui_tier_text.as_deref().and_then(parse_ui_tier)
    } else {
        None
    };

    let tier = match (can_have_tiers, ui_tier) {
        (false, _) => 0,
        (true, Some(parsed)) => parsed,
        (true, None) => ranked_tier,
    };

    ModValue {
        affix_type,
        category: raw.category,
        tier,
        total_tiers,
        short_name: short_name(&raw.group).to_string(),
        human_name: raw.human_name.clone(),
        affix_name: raw.affix_name.clone(),
        raw_name: raw.raw_name.clone(),
        stat_names: raw.stat_names.clone(),
        tags: raw.tags.clone(),
        is_implicit: raw.is_implicit,
        is_crafted: raw.is_crafted,
        can_have_tiers,
    }
}

/// Build records for every mod of an item
pub fn build_all(item: &HoveredItem, ctx: BuildContext<'_>) -> Vec<ModValue> {
    item.mods
        .iter()
        .map(|raw| build(raw, item.item_level, &item.base_type, ctx))
        .collect()
}

/// Extract a tier number from the game's advanced tooltip text.
///
/// Accepts `Tier: 3` anywhere in the line (case-insensitive) or a bare
/// `T3` token. Tier 0 is not a tier.
pub fn parse_ui_tier(text: &str) -> Option<u32> {
    let lower = text.to_ascii_lowercase();
    if let Some(idx) = lower.find("tier:") {
        return leading_number(&text[idx + "tier:".len()..]);
    }

    text.split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .find_map(|token| {
            let rest = token.strip_prefix('T').or_else(|| token.strip_prefix('t'))?;
            if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            rest.parse::<u32>().ok()
        })
        .filter(|tier| *tier > 0)
}

fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<u32>().ok().filter(|tier| *tier > 0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-item cache
// ─────────────────────────────────────────────────────────────────────────────

/// Derived records for the currently hovered item, rebuilt wholesale when
/// the hovered identity changes
#[derive(Debug, Default)]
pub struct ModCache {
    item: Option<ItemId>,
    mods: Vec<ModValue>,
    rebuilds: u64,
}

impl ModCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached records for `item`, building them on first sight of its identity
    pub fn get_or_build(&mut self, item: &HoveredItem, ctx: BuildContext<'_>) -> &[ModValue] {
        if self.item != Some(item.id) {
            self.mods = build_all(item, ctx);
            self.item = Some(item.id);
            self.rebuilds += 1;
            tracing::debug!(item = item.id.0, mods = self.mods.len(), "Rebuilt mod cache");
        }
        &self.mods
    }

    /// Records of the last built item, if any
    pub fn current(&self) -> Option<(ItemId, &[ModValue])> {
        self.item.map(|id| (id, self.mods.as_slice()))
    }

    pub fn invalidate(&mut self) {
        self.item = None;
        self.mods.clear();
    }

    /// Number of times the cache was (re)built
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}
