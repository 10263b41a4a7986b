//! Affix classification
//!
//! Maps the game's raw modifier category code to an [`AffixType`], the
//! bracketed label drawn in the tooltip and the label color. Classification
//! is total: codes missing from the table become [`AffixType::Unknown`] and
//! render as `[?]` in neutral gray.

use tiertip_types::{Color, ItemModsSettings};

/// Label drawn for implicit modifiers regardless of their category
pub const IMPLICIT_LABEL: &str = "[I]";
pub const IMPLICIT_COLOR: Color = [218, 219, 193, 156];
pub const UNKNOWN_LABEL: &str = "[?]";
pub const UNKNOWN_COLOR: Color = [211, 211, 211, 255];

/// Semantic category of a modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixType {
    Prefix,
    Suffix,
    Unique,
    Nemesis,
    Corrupted,
    Bloodlines,
    Torment,
    Tempest,
    Talisman,
    Enchantment,
    EssenceMonster,
    Bestiary,
    DelveArea,
    SynthesisA,
    SynthesisGlobals,
    SynthesisBonus,
    Blight,
    BlightTower,
    MonsterAffliction,
    FlaskEnchantmentEnkindling,
    FlaskEnchantmentInstilling,
    ExpeditionLogbook,
    ScourgeUpside,
    ScourgeDownside,
    ScourgeMap,
    ExarchImplicit,
    EaterImplicit,
    WeaponTree,
    WeaponTreeRecombined,
    Unknown,
}

/// Static display data for one affix type
#[derive(Debug, Clone, Copy)]
struct AffixInfo {
    code: u8,
    label: &'static str,
    /// `None` for the configurable prefix/suffix colors
    color: Option<Color>,
}

const fn info(code: u8, label: &'static str, color: Option<Color>) -> AffixInfo {
    AffixInfo { code, label, color }
}

const fn rgb(r: u8, g: u8, b: u8) -> Option<Color> {
    Some([r, g, b, 255])
}

/// Every classified type, in category code order
pub const ALL_AFFIX_TYPES: [AffixType; 29] = [
    AffixType::Prefix,
    AffixType::Suffix,
    AffixType::Unique,
    AffixType::Nemesis,
    AffixType::Corrupted,
    AffixType::Bloodlines,
    AffixType::Torment,
    AffixType::Tempest,
    AffixType::Talisman,
    AffixType::Enchantment,
    AffixType::EssenceMonster,
    AffixType::Bestiary,
    AffixType::DelveArea,
    AffixType::SynthesisA,
    AffixType::SynthesisGlobals,
    AffixType::SynthesisBonus,
    AffixType::Blight,
    AffixType::BlightTower,
    AffixType::MonsterAffliction,
    AffixType::FlaskEnchantmentEnkindling,
    AffixType::FlaskEnchantmentInstilling,
    AffixType::ExpeditionLogbook,
    AffixType::ScourgeUpside,
    AffixType::ScourgeDownside,
    AffixType::ScourgeMap,
    AffixType::ExarchImplicit,
    AffixType::EaterImplicit,
    AffixType::WeaponTree,
    AffixType::WeaponTreeRecombined,
];

impl AffixType {
    fn info(self) -> AffixInfo {
        match self {
            Self::Prefix => info(1, "[P]", None),
            Self::Suffix => info(2, "[S]", None),
            Self::Unique => info(3, "[U]", rgb(255, 140, 0)),
            Self::Nemesis => info(4, "[NEM]", rgb(255, 20, 147)),
            Self::Corrupted => info(5, "[COR]", rgb(220, 20, 60)),
            Self::Bloodlines => info(6, "[BLD]", rgb(0, 128, 0)),
            Self::Torment => info(7, "[TOR]", rgb(178, 34, 34)),
            Self::Tempest => info(8, "[TEM]", rgb(65, 105, 225)),
            Self::Talisman => info(9, "[TAL]", rgb(218, 165, 32)),
            Self::Enchantment => info(10, "[E]", rgb(255, 0, 255)),
            Self::EssenceMonster => info(11, "[ESS]", rgb(139, 0, 139)),
            Self::Bestiary => info(13, "[BES]", rgb(255, 99, 71)),
            Self::DelveArea => info(14, "[DEL]", rgb(47, 79, 79)),
            Self::SynthesisA => info(15, "[SYN]", rgb(255, 105, 180)),
            Self::SynthesisGlobals => info(16, "[SGS]", rgb(186, 85, 211)),
            Self::SynthesisBonus => info(17, "[SYB]", rgb(100, 149, 237)),
            Self::Blight => info(18, "[BLI]", rgb(0, 100, 0)),
            Self::BlightTower => info(19, "[BLT]", rgb(0, 100, 0)),
            Self::MonsterAffliction => info(20, "[MAF]", rgb(123, 104, 238)),
            Self::FlaskEnchantmentEnkindling => info(21, "[FEE]", rgb(255, 165, 0)),
            Self::FlaskEnchantmentInstilling => info(22, "[FEI]", rgb(255, 165, 0)),
            Self::ExpeditionLogbook => info(24, "[LOG]", rgb(218, 165, 32)),
            Self::ScourgeUpside => info(25, "[SCU]", rgb(218, 165, 32)),
            Self::ScourgeDownside => info(26, "[SCD]", rgb(218, 165, 32)),
            Self::ScourgeMap => info(27, "[SCM]", rgb(218, 165, 32)),
            Self::ExarchImplicit => info(29, "[EXI]", rgb(255, 69, 0)),
            Self::EaterImplicit => info(30, "[EAT]", rgb(255, 69, 0)),
            Self::WeaponTree => info(32, "[CRU]", rgb(254, 114, 53)),
            Self::WeaponTreeRecombined => info(33, "[CRC]", rgb(254, 114, 53)),
            Self::Unknown => info(u8::MAX, UNKNOWN_LABEL, Some(UNKNOWN_COLOR)),
        }
    }

    /// Resolve a raw category code; unlisted codes become `Unknown`
    pub fn from_code(code: u8) -> Self {
        ALL_AFFIX_TYPES
            .iter()
            .copied()
            .find(|t| t.info().code == code)
            .unwrap_or(Self::Unknown)
    }

    /// Raw category code (`u8::MAX` for `Unknown`)
    pub fn code(self) -> u8 {
        self.info().code
    }

    /// Ordering value: Corrupted and Unique come before every numeric category
    pub fn sort_key(self) -> i32 {
        match self {
            Self::Corrupted => -1,
            Self::Unique => 0,
            other => other.code() as i32,
        }
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Label color, substituting the configured prefix/suffix colors
    pub fn color(self, settings: &ItemModsSettings) -> Color {
        match self {
            Self::Prefix => settings.prefix_color,
            Self::Suffix => settings.suffix_color,
            other => other.info().color.unwrap_or(UNKNOWN_COLOR),
        }
    }

    pub fn is_affix(self) -> bool {
        matches!(self, Self::Prefix | Self::Suffix)
    }

    /// Unique and corrupted mods show only their label and description
    pub fn is_label_only(self) -> bool {
        matches!(self, Self::Unique | Self::Corrupted)
    }

    /// One-letter badge used by the fast-mods panel
    pub fn badge_letter(self) -> Option<&'static str> {
        match self {
            Self::Prefix => Some("P"),
            Self::Suffix => Some("S"),
            _ => None,
        }
    }
}

/// Result of classifying one raw category code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub affix_type: AffixType,
    pub label: &'static str,
    pub color: Color,
}

/// Classify with the default prefix/suffix palette
pub fn classify(code: u8) -> Classification {
    classify_with(code, &ItemModsSettings::default())
}

/// Classify using the configured prefix/suffix colors
pub fn classify_with(code: u8, settings: &ItemModsSettings) -> Classification {
    let affix_type = AffixType::from_code(code);
    Classification {
        affix_type,
        label: affix_type.label(),
        color: affix_type.color(settings),
    }
}

/// Label and color actually drawn for a mod, applying the implicit override
pub fn display_label(
    affix_type: AffixType,
    is_implicit: bool,
    settings: &ItemModsSettings,
) -> (&'static str, Color) {
    if is_implicit {
        (IMPLICIT_LABEL, IMPLICIT_COLOR)
    } else {
        (affix_type.label(), affix_type.color(settings))
    }
}

/// Single-letter bracketed labels, the narrowest column a label may claim
pub fn single_letter_labels() -> impl Iterator<Item = &'static str> {
    ALL_AFFIX_TYPES
        .iter()
        .map(|t| t.label())
        .chain([IMPLICIT_LABEL, UNKNOWN_LABEL])
        .filter(|label| label.chars().count() == 3)
}
