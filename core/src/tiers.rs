//! Tier aggregation shared by the count panel, highlight frame and grade badge

use tiertip_types::{Color, ItemModsSettings};

use crate::mod_value::ModValue;

/// The one predicate every tier consumer uses
pub fn is_tier_counted(mv: &ModValue) -> bool {
    mv.can_have_tiers && mv.affix_type.is_affix() && !mv.is_implicit && !mv.is_crafted
}

/// Number of counted mods in tiers 1, 2 and 3
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub t1: usize,
    pub t2: usize,
    pub t3: usize,
}

impl TierCounts {
    pub fn count(mods: &[ModValue]) -> Self {
        mods.iter()
            .filter(|mv| is_tier_counted(mv))
            .fold(Self::default(), |mut counts, mv| {
                match mv.tier {
                    1 => counts.t1 += 1,
                    2 => counts.t2 += 1,
                    3 => counts.t3 += 1,
                    _ => {}
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.t1 + self.t2 + self.t3
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Lowest tier number with a non-zero count
    pub fn best_tier(&self) -> Option<u32> {
        if self.t1 > 0 {
            Some(1)
        } else if self.t2 > 0 {
            Some(2)
        } else if self.t3 > 0 {
            Some(3)
        } else {
            None
        }
    }

    /// Non-zero tiers with their counts, best first
    pub fn lines(&self) -> impl Iterator<Item = (u32, usize)> {
        [(1, self.t1), (2, self.t2), (3, self.t3)]
            .into_iter()
            .filter(|(_, n)| *n > 0)
    }

    /// Number of non-zero tiers
    pub fn non_zero_tiers(&self) -> usize {
        self.lines().count()
    }

    /// Grade for the best tier present
    pub fn grade(&self) -> Option<Grade> {
        self.best_tier().map(|tier| match tier {
            1 => Grade::S,
            2 => Grade::A,
            _ => Grade::B,
        })
    }

    /// Frame color for the highlight, `fallback` when nothing is counted
    pub fn highlight_color(&self, settings: &ItemModsSettings, fallback: Color) -> Color {
        self.best_tier()
            .and_then(|tier| settings.tier_color(tier))
            .unwrap_or(fallback)
    }
}

/// Quick-judgment letter for the best tier on the item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    S,
    A,
    B,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
        }
    }

    pub fn tier(&self) -> u32 {
        match self {
            Grade::S => 1,
            Grade::A => 2,
            Grade::B => 3,
        }
    }
}
