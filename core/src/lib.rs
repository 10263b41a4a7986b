pub mod affix;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod geometry;
pub mod item;
pub mod layout;
pub mod mod_value;
pub mod ordering;
pub mod palette;
pub mod render;
pub mod short_names;
pub mod surface;
pub mod tiers;

// Re-exports for convenience
pub use affix::{AffixType, Classification, classify, classify_with, display_label};
pub use catalog::{ModCatalog, ModRecord};
pub use clipboard::{ClipboardAction, spawn_copy};
pub use config::TooltipSettingsExt;
pub use error::{CatalogError, ClipboardError, ConfigError, FastModsError};
pub use geometry::{Pos, Rect, Size, TextAnchor};
pub use item::{HoveredItem, ItemId, ItemRarity, RawModifier};
pub use layout::{FastModsPanel, PlacedBadge, TierBadge, TooltipEngine, TooltipLayout};
pub use mod_value::{BuildContext, ModCache, ModValue};
pub use ordering::{SortOptions, sort_mods, sorted_mods};
pub use render::{AdvancedTooltip, RenderOutput};
pub use short_names::short_name;
pub use surface::{DisplayList, DrawCommand, RenderSurface, TextMeasure};
pub use tiers::{Grade, TierCounts, is_tier_counted};
