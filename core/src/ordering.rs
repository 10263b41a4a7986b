//! Display order of mod blocks

use std::cmp::Ordering;

use tiertip_types::ItemModsSettings;

use crate::mod_value::ModValue;

/// Which optional sort keys are active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub by_tier: bool,
    pub by_name: bool,
}

impl SortOptions {
    pub fn from_settings(settings: &ItemModsSettings) -> Self {
        Self {
            by_tier: settings.sort_mods_by_tier,
            by_name: settings.sort_mods_by_name,
        }
    }
}

/// Compare two records: implicits first, then category order, then the
/// optional tier and short-name keys
pub fn compare_mods(a: &ModValue, b: &ModValue, options: SortOptions) -> Ordering {
    a.is_implicit
        .cmp(&b.is_implicit)
        .reverse()
        .then_with(|| a.category_order().cmp(&b.category_order()))
        .then_with(|| {
            if options.by_tier {
                a.tier.cmp(&b.tier)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| {
            if options.by_name {
                // Named entries come before unnamed ones
                b.has_short_name()
                    .cmp(&a.has_short_name())
                    .then_with(|| a.short_name.cmp(&b.short_name))
            } else {
                Ordering::Equal
            }
        })
}

/// Stable sort in place; ties keep their input order
pub fn sort_mods(mods: &mut [ModValue], options: SortOptions) {
    mods.sort_by(|a, b| compare_mods(a, b, options));
}

/// Sorted copy of `mods`
pub fn sorted_mods(mods: &[ModValue], options: SortOptions) -> Vec<ModValue> {
    let mut sorted = mods.to_vec();
    sort_mods(&mut sorted, options);
    sorted
}
