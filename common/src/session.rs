//! セッションモジュール
//!
//! 読み込み済みのカタログと、エンジンが所有するカートをまとめて扱う。
//! 表示側（CLI・Web）はこの型だけを通してエンジンを操作する。

use crate::cart::{AddOutcome, Cart};
use crate::catalog::{Catalog, CatalogSource};
use crate::error::{Error, Result};
use crate::matcher::{match_all, BestRecipe, MatchReport};
use crate::nutrition::NutritionSummary;
use crate::search::{filter_products, ProductFilter};
use crate::types::{Product, ProductId};

#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    /// 読込元からカタログを取得してセッションを開始
    pub fn load(source: &impl CatalogSource) -> Result<Self> {
        Ok(Self::new(source.load_catalog()?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, product: &Product) -> AddOutcome {
        self.cart.add_to_cart(product)
    }

    /// カタログの商品をIDで追加
    pub fn add_product_by_id(&mut self, id: &ProductId) -> Result<AddOutcome> {
        let product = self
            .catalog
            .product(id)
            .ok_or_else(|| Error::UnknownProduct(id.clone()))?;
        Ok(self.cart.add_to_cart(product))
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove_from_cart(id);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear_cart();
    }

    /// 現在のカートでレシピを照合
    pub fn match_recipes(&self) -> MatchReport {
        match_all(&self.cart, &self.catalog.recipes, &self.catalog.products)
    }

    pub fn best_recipe(&self) -> BestRecipe {
        self.match_recipes().best()
    }

    pub fn nutrition(&self) -> NutritionSummary {
        NutritionSummary::from_cart(&self.cart)
    }

    pub fn filter_products(&self, filter: &ProductFilter) -> Vec<&Product> {
        filter_products(&self.catalog.products, filter)
    }
}
