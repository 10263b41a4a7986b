//! Layout engines. Each one measures text and records draw commands; none
//! of them draws directly.

pub mod fast_mods;
pub mod panels;
pub mod tooltip;

pub use fast_mods::{BadgeTag, FastModsPanel, PlacedBadge, TierBadge};
pub use tooltip::{BlockMetrics, LayoutCursor, ModBlock, TooltipEngine, TooltipLayout};
