//! Hovered item data as handed over by the game-data collaborator
//!
//! Everything in here is read-only input to the engine. The reader that
//! fills these records (memory access, stat translation) lives outside
//! this crate.

use serde::{Deserialize, Serialize};

/// Stable identity of the hovered item instance, used for cache invalidation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemRarity {
    #[default]
    Normal,
    Magic,
    Rare,
    Unique,
}

/// One modifier line exactly as the game reports it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawModifier {
    /// Raw category code (prefix, suffix, corrupted, ...)
    pub category: u8,
    /// Stat group shared by every tier variant of this mod
    #[serde(default)]
    pub group: String,
    /// Key of the specific tier variant
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub values: Vec<i32>,
    /// Untranslated template name
    #[serde(default)]
    pub raw_name: String,
    /// Translated description with rolled values
    #[serde(default)]
    pub human_name: String,
    /// In-game affix name ("Hale", "of the Whelpling")
    #[serde(default)]
    pub affix_name: String,
    #[serde(default)]
    pub stat_names: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_implicit: bool,
    #[serde(default)]
    pub is_crafted: bool,
    /// Tier line scraped from the game's advanced tooltip, if available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_tier_text: Option<String>,
}

impl RawModifier {
    pub fn new(category: u8, group: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            category,
            group: group.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_human_name(mut self, text: impl Into<String>) -> Self {
        self.human_name = text.into();
        self
    }

    pub fn with_raw_name(mut self, text: impl Into<String>) -> Self {
        self.raw_name = text.into();
        self
    }

    pub fn with_affix_name(mut self, text: impl Into<String>) -> Self {
        self.affix_name = text.into();
        self
    }

    pub fn with_stat_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stat_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_values(mut self, values: Vec<i32>) -> Self {
        self.values = values;
        self
    }

    pub fn implicit(mut self) -> Self {
        self.is_implicit = true;
        self
    }

    pub fn crafted(mut self) -> Self {
        self.is_crafted = true;
        self
    }

    pub fn with_ui_tier_text(mut self, text: impl Into<String>) -> Self {
        self.ui_tier_text = Some(text.into());
        self
    }

    /// True when neither a raw template nor a translated description exists
    pub fn lacks_display_text(&self) -> bool {
        self.raw_name.is_empty() && self.human_name.is_empty()
    }
}

/// The item under the cursor for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoveredItem {
    pub id: ItemId,
    #[serde(default)]
    pub rarity: ItemRarity,
    #[serde(default)]
    pub identified: bool,
    pub item_level: u32,
    /// Base item type identifier (e.g. "Vaal Regalia")
    pub base_type: String,
    #[serde(default)]
    pub mods: Vec<RawModifier>,
}

impl HoveredItem {
    /// Height of the game's own tooltip header above the first property line
    pub fn header_offset(&self) -> f32 {
        match self.rarity {
            ItemRarity::Rare | ItemRarity::Unique if self.identified => 80.0,
            _ => 50.0,
        }
    }

    /// Any mod missing both display strings makes the block unrenderable
    pub fn has_insufficient_text(&self) -> bool {
        self.mods.iter().any(RawModifier::lacks_display_text)
    }
}
