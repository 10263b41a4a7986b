//! Compact labels for common stat groups.

use phf::phf_map;

/// Short label for a stat group, or `""` when the group has none
pub fn short_name(stat_group: &str) -> &'static str {
    SHORT_MOD_NAMES.get(stat_group).copied().unwrap_or("")
}

/// Stat group key → short label
pub static SHORT_MOD_NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    // Physical damage
    "PhysicalDamage" => "Flat Phys",
    "LocalPhysicalDamagePercent" => "%-Phys",
    "LocalIncreasedPhysicalDamagePercentAndAccuracyRating" => "Hybrid Phys",

    // Attack & cast speed
    "IncreasedAttackSpeed" => "Attack Speed",
    "IncreasedCastSpeed" => "Cast Speed",

    // Elemental damage
    "FireDamage" => "Flat Fire",
    "ColdDamage" => "Flat Cold",
    "LightningDamage" => "Flat Lightning",
    "FireDamagePercentage" => "%-Fire",
    "ColdDamagePercentage" => "%-Cold",
    "LightningDamagePercentage" => "%-Lightning",
    "IncreasedWeaponElementalDamagePercent" => "Ele Damage",

    // Critical strike
    "CriticalStrikeChanceIncrease" => "Crit Chance",
    "CriticalStrikeMultiplier" => "Crit Multi",
    "SpellCriticalStrikeChanceIncrease" => "Spell Crit",

    "IncreasedAccuracy" => "Accuracy",

    // Defences
    "BaseLocalDefences" => "Flat Defence",
    "DefencesPercent" => "%-Defence",
    "BaseLocalDefencesAndDefencePercent" => "Hybrid Defence",
    "DefencesPercentAndStunThreshold" => "Hybrid Stun",
    "BaseLocalDefencesAndLife" => "Hybrid Life",
    "BaseLocalDefencesAndMana" => "Hybrid Mana",
    "IncreasedPhysicalDamageReductionRating" => "Flat Armour",
    "IncreasedPhysicalDamageReductionRatingPercent" => "%-Armour",
    "IncreasedEvasionRating" => "Flat Evasion",
    "EvasionRatingPercent" => "%-Evasion",
    "EnergyShieldPercent" => "%-ES",
    "MaximumEnergyShield" => "Flat ES",

    // Resistances
    "FireResistance" => "Fire Res",
    "ColdResistance" => "Cold Res",
    "LightningResistance" => "Lightning Res",
    "ChaosResistance" => "Chaos Res",
    "AllResistances" => "All Res",

    // Life & mana
    "IncreasedLife" => "Life",
    "MaximumLifeIncreasePercent" => "%-Life",
    "IncreasedMana" => "Mana",
    "ManaRegeneration" => "Mana Regen",

    // Attributes
    "Strength" => "Strength",
    "Intelligence" => "Intelligence",
    "Dexterity" => "Dexterity",

    // Misc
    "MovementVelocity" => "Movespeed",
    "LifeLeech" => "Life Leech",
    "ManaLeech" => "Mana Leech",
    "LifeGainedFromEnemyDeath" => "Life on Kill",
    "ManaGainedFromEnemyDeath" => "Mana on Kill",
    "ItemFoundRarityIncrease" => "Rarity",
    "ItemFoundRarityIncreasePrefix" => "Rarity",
    "IncreaseSocketedGemLevel" => "+Gem Level",
    "ProjectileSpeed" => "Proj Speed",
    "ChanceToPierce" => "Pierce",
    "DamageWithWeaponTypeSkill" => "Weapon Damage",
};
