//! カタログモジュール
//!
//! 商品とレシピの一覧。アプリ起動時に外部から1回だけ読み込み、
//! セッション中は読み取り専用で扱う。

use crate::error::Result;
use crate::types::{Product, ProductId, Recipe, RecipeKey};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 商品とレシピのカタログ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub recipes: Vec<Recipe>,
}

/// 読込前の生データ（要素単位で検証する）
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCatalog {
    products: Vec<serde_json::Value>,
    recipes: Vec<serde_json::Value>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, recipes: Vec<Recipe>) -> Self {
        Self { products, recipes }
    }

    /// JSON文字列から読み込み
    ///
    /// 壊れた商品・レシピは警告を出して読み飛ばす。
    /// JSON全体が読めない場合のみエラー。
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// 解析済みJSON値から読み込み
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_value(value)?;
        Ok(Self::from_raw(raw))
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn from_raw(raw: RawCatalog) -> Self {
        let products: Vec<Product> = raw
            .products
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| match serde_json::from_value(value) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(index = i, error = %e, "malformed product skipped");
                    None
                }
            })
            .collect();

        let recipes: Vec<Recipe> = raw
            .recipes
            .into_iter()
            .enumerate()
            .filter_map(|(i, value)| match serde_json::from_value(value) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    warn!(index = i, error = %e, "malformed recipe skipped");
                    None
                }
            })
            .collect();

        debug!(products = products.len(), recipes = recipes.len(), "catalog loaded");
        Self { products, recipes }
    }

    /// IDで商品を検索
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// キーでレシピを検索
    pub fn recipe(&self, key: &RecipeKey) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.key() == key)
    }

    /// カテゴリ一覧（出現順、重複除去）
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            let category = product.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.recipes.is_empty()
    }
}

/// カタログの読込元
///
/// 読込自体の失敗は呼び出し側の責任。エンジンは空のカタログでも動作する。
pub trait CatalogSource {
    fn load_catalog(&self) -> Result<Catalog>;
}

impl CatalogSource for Catalog {
    fn load_catalog(&self) -> Result<Catalog> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_JSON: &str = r#"{
        "products": [
            {"id": "1", "name": "Яйца", "category": "dairy", "calories": 155, "protein": 13, "fat": 11},
            {"id": 2, "name": "Брашно", "category": "bakery", "calories": 364},
            {"name": "без ID"},
            {"id": "3", "name": "Мляко", "category": "dairy"}
        ],
        "recipes": [
            {"title": "Палачинки", "description": "...", "steps": "...", "level": "Лесно", "ingredients": ["1", 2, 3]},
            {"title": "Счупена", "ingredients": "not a list"},
            {"id": "r-omelette", "title": "Омлет", "ingredients": [1]}
        ]
    }"#;

    #[test]
    fn test_from_json_skips_malformed() {
        let catalog = Catalog::from_json(TEST_JSON).unwrap();
        assert_eq!(catalog.products.len(), 3);
        assert_eq!(catalog.recipes.len(), 2);
        assert_eq!(
            catalog.recipes[0].ingredients,
            vec![ProductId::Num(1), ProductId::Num(2), ProductId::Num(3)]
        );
    }

    #[test]
    fn test_from_json_missing_sections() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Catalog::from_json("[").is_err());
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::from_json(TEST_JSON).unwrap();
        assert_eq!(catalog.product(&ProductId::Num(2)).map(|p| p.name.as_str()), Some("Брашно"));
        assert!(catalog.product(&ProductId::Num(42)).is_none());
    }

    #[test]
    fn test_recipe_lookup_by_key() {
        let catalog = Catalog::from_json(TEST_JSON).unwrap();
        assert!(catalog.recipe(&RecipeKey::new("Палачинки")).is_some());
        assert!(catalog.recipe(&RecipeKey::new("r-omelette")).is_some());
        // idがあるレシピはタイトルでは引けない
        assert!(catalog.recipe(&RecipeKey::new("Омлет")).is_none());
    }

    #[test]
    fn test_categories() {
        let catalog = Catalog::from_json(TEST_JSON).unwrap();
        assert_eq!(catalog.categories(), vec!["dairy", "bakery"]);
    }
}
