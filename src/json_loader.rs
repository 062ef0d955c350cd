// json_loader.rs
use serde::Deserialize;
use std::collections::HashMap;
use crate::error::AssetError;
use crate::skin::SkinType;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RecommendationEntry {
    pub label: String,
    pub how_to_use: String,
    pub precautions: String,
    pub expected_result: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RemedyEntry { pub label: String, pub how_to_use: String, pub benefits: String }

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProductEntry { pub tier: String, pub name_and_price: String, pub link: String }

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ProductCategory { pub name: String, pub items: Vec<ProductEntry> }

/// Base entries are keyed by `SkinType::as_str()`; a missing key reads as an
/// empty list.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CareLibrary {
    #[serde(default)] pub base: HashMap<String, Vec<RecommendationEntry>>,
    pub sun_protection: RecommendationEntry,
    /// `how_to_use` may contain a `{weekly}` placeholder.
    pub anti_aging: RecommendationEntry,
    pub antioxidant: RecommendationEntry,
    pub repair: RecommendationEntry,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RemedyLibrary {
    #[serde(default)] pub base: HashMap<String, Vec<RemedyEntry>>,
    pub aging_toner: RemedyEntry,
    pub damage_repair: RemedyEntry,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProductLibrary {
    #[serde(default)] pub base: HashMap<String, Vec<ProductCategory>>,
    pub sunscreen: ProductCategory,
    pub anti_aging: ProductCategory,
    pub repair: ProductCategory,
}

impl CareLibrary {
    pub fn base_for(&self, t: SkinType) -> &[RecommendationEntry] {
        self.base.get(t.as_str()).map(Vec::as_slice).unwrap_or(&[])
    }
}
impl RemedyLibrary {
    pub fn base_for(&self, t: SkinType) -> &[RemedyEntry] {
        self.base.get(t.as_str()).map(Vec::as_slice).unwrap_or(&[])
    }
}
impl ProductLibrary {
    pub fn base_for(&self, t: SkinType) -> &[ProductCategory] {
        self.base.get(t.as_str()).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The three static tables the recommender reads from.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub care: CareLibrary,
    pub remedies: RemedyLibrary,
    pub products: ProductLibrary,
}

impl Catalog {
    /// Loads every embedded table. A table that fails to parse is replaced by
    /// an empty one and reported once.
    pub fn load() -> Self {
        Self {
            care:     load_or_warn("care_steps.json"),
            remedies: load_or_warn("remedies.json"),
            products: load_or_warn("products.json"),
        }
    }
}

fn load_or_warn<T: for<'de> Deserialize<'de> + Default>(name: &str) -> T {
    load(name).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to an empty table");
        T::default()
    })
}

// include_str! requires compile-time paths; all assets must be listed here.
fn asset(name: &str) -> Result<&'static str, AssetError> {
    match name {
        "care_steps.json" => Ok(include_str!("../assets/care_steps.json")),
        "remedies.json"   => Ok(include_str!("../assets/remedies.json")),
        "products.json"   => Ok(include_str!("../assets/products.json")),
        _ => Err(AssetError::NotEmbedded(name.to_string())),
    }
}

pub fn load<T: for<'de> Deserialize<'de>>(name: &str) -> Result<T, AssetError> {
    serde_json::from_str(asset(name)?).map_err(|source| AssetError::Parse { name: name.to_string(), source })
}
