//! Built-in sample data for the preview binary

use tiertip_core::{CatalogError, HoveredItem, ItemId, ItemRarity, ModCatalog, RawModifier};

/// Tier variants for every group the sample item uses
pub const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.toml");

pub fn sample_catalog() -> Result<ModCatalog, CatalogError> {
    ModCatalog::from_toml_str(SAMPLE_CATALOG)
}

/// An item-level 84 belt with a spread of tiers, a crafted mod and an implicit
pub fn sample_item(rarity: ItemRarity) -> HoveredItem {
    HoveredItem {
        id: ItemId(0x5717_0001),
        rarity,
        identified: true,
        item_level: 84,
        base_type: "Stygian Vise".to_string(),
        mods: vec![
            RawModifier::new(1, "AbyssJewelSocket", "AbyssJewelSocketImplicit")
                .implicit()
                .with_raw_name("AbyssJewelSocketImplicit")
                .with_human_name("Has 1 Abyssal Socket")
                .with_stat_names(["number_of_abyss_jewel_sockets"]),
            RawModifier::new(1, "IncreasedLife", "IncreasedLife12")
                .with_raw_name("IncreasedLife12")
                .with_human_name("+102 to maximum Life")
                .with_affix_name("Rapturous")
                .with_stat_names(["base_maximum_life"])
                .with_tags(["Life"])
                .with_values(vec![102]),
            RawModifier::new(1, "IncreasedPhysicalDamageReductionRating", "LocalArmour4")
                .with_raw_name("LocalArmour4")
                .with_human_name("+201 to Armour")
                .with_affix_name("Fortified")
                .with_stat_names(["base_physical_damage_reduction_rating"])
                .with_tags(["Defences", "Armour"])
                .with_values(vec![201]),
            RawModifier::new(2, "FireResistance", "FireResist7")
                .with_raw_name("FireResist7")
                .with_human_name("+43% to Fire Resistance")
                .with_affix_name("of the Furnace")
                .with_stat_names(["base_fire_damage_resistance_%"])
                .with_tags(["Elemental", "Fire", "Resistance"])
                .with_values(vec![43]),
            RawModifier::new(2, "ColdResistance", "ColdResist6")
                .with_raw_name("ColdResist6")
                .with_human_name("+38% to Cold Resistance")
                .with_affix_name("of the Ice")
                .with_stat_names(["base_cold_damage_resistance_%"])
                .with_tags(["Elemental", "Cold", "Resistance"])
                .with_values(vec![38]),
            RawModifier::new(2, "ChaosResistance", "EinharMasterChaosResistance3")
                .crafted()
                .with_raw_name("EinharMasterChaosResistance3")
                .with_human_name("+16% to Chaos Resistance")
                .with_stat_names(["base_chaos_damage_resistance_%"])
                .with_tags(["Chaos", "Resistance"])
                .with_values(vec![16]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiertip_core::mod_value::build_all;
    use tiertip_core::{AdvancedTooltip, BuildContext, Rect, Size, TextMeasure, TierCounts};
    use tiertip_types::TooltipSettings;

    struct FixedMeasure;

    impl TextMeasure for FixedMeasure {
        fn measure(&mut self, text: &str) -> Size {
            Size::new(text.len() as f32 * 8.0, 16.0)
        }
    }

    #[test]
    fn bundled_catalog_parses() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.len(), 43);
    }

    #[test]
    fn sample_item_covers_three_tiers() {
        let catalog = sample_catalog().unwrap();
        let item = sample_item(ItemRarity::Rare);
        let mods = build_all(&item, BuildContext::new(&catalog));
        let tiers: Vec<_> = mods.iter().map(|m| (m.tier, m.total_tiers)).collect();
        assert_eq!(tiers, vec![(0, 0), (1, 12), (2, 5), (2, 8), (3, 8), (0, 0)]);
        assert_eq!(TierCounts::count(&mods), TierCounts { t1: 1, t2: 2, t3: 1 });
    }

    #[test]
    fn sample_renders_every_piece() {
        let catalog = sample_catalog().unwrap();
        let output = AdvancedTooltip::new().render(
            &sample_item(ItemRarity::Rare),
            Rect::new(260.0, 60.0, 360.0, 240.0),
            &TooltipSettings::default(),
            &catalog,
            &mut FixedMeasure,
        );
        assert!(output.block.is_some());
        assert_eq!(output.badges.len(), 4);
        assert!(output.fast_mods_error.is_none());
    }
}
