//! Mod catalog: every tier variant the game defines, grouped by stat group
//!
//! The builder ranks a modifier against the variants of its group that can
//! roll on the item's base type at the item's level. The catalog is plain
//! data and can be loaded from TOML:
//!
//! ```toml
//! [[mods]]
//! key = "IncreasedLife7"
//! group = "IncreasedLife"
//! category = 1
//! required_level = 54
//! base_types = []        # empty = every base
//! ```

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One tier variant of a stat group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRecord {
    pub key: String,
    pub group: String,
    /// Raw category code, variants only compete within one category
    pub category: u8,
    pub required_level: u32,
    /// Base types this variant spawns on; empty means all
    #[serde(default)]
    pub base_types: Vec<String>,
}

impl ModRecord {
    pub fn new(key: impl Into<String>, group: impl Into<String>, category: u8, required_level: u32) -> Self {
        Self {
            key: key.into(),
            group: group.into(),
            category,
            required_level,
            base_types: Vec::new(),
        }
    }

    pub fn with_base_types<I, S>(mut self, bases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_types = bases.into_iter().map(Into::into).collect();
        self
    }

    pub fn spawns_on(&self, base_type: &str) -> bool {
        self.base_types.is_empty() || self.base_types.iter().any(|b| b == base_type)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    mods: Vec<ModRecord>,
}

/// Tier variants indexed by stat group
#[derive(Debug, Clone, Default)]
pub struct ModCatalog {
    by_group: HashMap<String, Vec<ModRecord>>,
    keys: HashSet<String>,
}

impl ModCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML catalog document
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        let mut catalog = Self::new();
        for record in file.mods {
            catalog.insert(record)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, record: ModRecord) -> Result<(), CatalogError> {
        if record.group.is_empty() {
            return Err(CatalogError::EmptyGroup { key: record.key });
        }
        if !self.keys.insert(record.key.clone()) {
            return Err(CatalogError::DuplicateKey { key: record.key });
        }
        self.by_group
            .entry(record.group.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Variants of `group` in `category` that can roll on `base_type` at
    /// `item_level`, strongest first (highest level requirement, then key)
    pub fn unlocked_variants(
        &self,
        group: &str,
        category: u8,
        base_type: &str,
        item_level: u32,
    ) -> Vec<&ModRecord> {
        let Some(records) = self.by_group.get(group) else {
            return Vec::new();
        };

        let mut variants: Vec<&ModRecord> = records
            .iter()
            .filter(|r| r.category == category)
            .filter(|r| r.required_level <= item_level)
            .filter(|r| r.spawns_on(base_type))
            .collect();
        variants.sort_by(|a, b| {
            b.required_level
                .cmp(&a.required_level)
                .then_with(|| a.key.cmp(&b.key))
        });
        variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn life_catalog() -> ModCatalog {
        let mut catalog = ModCatalog::new();
        for (key, level) in [("Life1", 1), ("Life2", 11), ("Life3", 30), ("Life4", 60)] {
            catalog
                .insert(ModRecord::new(key, "IncreasedLife", 1, level))
                .unwrap();
        }
        catalog
            .insert(ModRecord::new("LifeEssence", "IncreasedLife", 1, 5).with_base_types(["Amulet"]))
            .unwrap();
        catalog
    }

    #[test]
    fn variants_are_ranked_strongest_first() {
        let catalog = life_catalog();
        let keys: Vec<_> = catalog
            .unlocked_variants("IncreasedLife", 1, "Vaal Regalia", 100)
            .into_iter()
            .map(|r| r.key.as_str())
            .collect();
        assert_eq!(keys, vec!["Life4", "Life3", "Life2", "Life1"]);
    }

    #[test]
    fn item_level_and_base_type_filter_variants() {
        let catalog = life_catalog();
        assert_eq!(catalog.unlocked_variants("IncreasedLife", 1, "Vaal Regalia", 30).len(), 3);
        assert_eq!(catalog.unlocked_variants("IncreasedLife", 1, "Amulet", 30).len(), 4);
        assert!(catalog.unlocked_variants("IncreasedLife", 2, "Amulet", 30).is_empty());
        assert!(catalog.unlocked_variants("Nope", 1, "Amulet", 30).is_empty());
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut catalog = life_catalog();
        let err = catalog
            .insert(ModRecord::new("Life1", "IncreasedLife", 1, 1))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKey { key } if key == "Life1"));
    }

    #[test]
    fn loads_from_toml() {
        let catalog = ModCatalog::from_toml_str(
            r#"
            [[mods]]
            key = "FireResist1"
            group = "FireResistance"
            category = 2
            required_level = 1

            [[mods]]
            key = "FireResist2"
            group = "FireResistance"
            category = 2
            required_level = 12
            base_types = ["Ruby Ring"]
            "#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.unlocked_variants("FireResistance", 2, "Ruby Ring", 20).len(), 2);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = ModCatalog::from_toml_str("[[mods]]\nkey = 3").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn empty_group_is_rejected() {
        let err = ModCatalog::new()
            .insert(ModRecord::new("Orphan", "", 1, 1))
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyGroup { .. }));
    }
}
