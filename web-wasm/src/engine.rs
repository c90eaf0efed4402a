//! ブラウザ向けエンジン
//!
//! `FridgeEngine` はカタログとカートを保持し、JSから呼ばれる操作を
//! 共通エンジンの `Session` に委譲する。

use crate::js_types::JsCartItem;
use fridge_chef_common::{favorite_recipes, Catalog, ProductFilter, ProductId, RecipeKey, Session};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

/// JSへ返す件数（u32に収まらなければ飽和）
fn js_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

fn product_id(value: JsValue) -> Result<ProductId, JsError> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}

#[wasm_bindgen]
pub struct FridgeEngine {
    session: Session,
}

impl FridgeEngine {
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            session: Session::new(catalog),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[wasm_bindgen]
impl FridgeEngine {
    /// `{ products, recipes }` 形式のオブジェクトから作成
    ///
    /// `null` / `undefined` は空のカタログとして扱う。
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: JsValue) -> Result<FridgeEngine, JsError> {
        if catalog.is_null() || catalog.is_undefined() {
            return Ok(Self::from_catalog(Catalog::default()));
        }
        let value: serde_json::Value = serde_wasm_bindgen::from_value(catalog)?;
        Ok(Self::from_catalog(Catalog::from_value(value)?))
    }

    /// JSON文字列から作成
    #[wasm_bindgen(js_name = "fromJson")]
    pub fn from_json(json: &str) -> Result<FridgeEngine, JsError> {
        Ok(Self::from_catalog(Catalog::from_json(json)?))
    }

    /// 商品を追加し `{ action, product }` を返す
    #[wasm_bindgen(js_name = "addToCart")]
    pub fn add_to_cart(&mut self, id: JsValue) -> Result<JsValue, JsError> {
        let id = product_id(id)?;
        let outcome = self.session.add_product_by_id(&id)?;
        to_js(&outcome)
    }

    #[wasm_bindgen(js_name = "removeFromCart")]
    pub fn remove_from_cart(&mut self, id: JsValue) -> Result<(), JsError> {
        let id = product_id(id)?;
        self.session.remove_from_cart(&id);
        Ok(())
    }

    #[wasm_bindgen(js_name = "clearCart")]
    pub fn clear_cart(&mut self) {
        self.session.clear_cart();
    }

    /// カートの行一覧（`qty` 付きの商品）
    pub fn cart(&self) -> Result<JsValue, JsError> {
        let items: Vec<JsCartItem> = self.session.cart().lines().iter().map(JsCartItem::from).collect();
        to_js(&items)
    }

    #[wasm_bindgen(js_name = "cartCount")]
    pub fn cart_count(&self) -> u32 {
        js_count(self.session.cart().len())
    }

    /// `{ status, exact, partial }`
    #[wasm_bindgen(js_name = "matchAll")]
    pub fn match_all(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.match_recipes())
    }

    #[wasm_bindgen(js_name = "bestRecipe")]
    pub fn best_recipe(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.best_recipe())
    }

    pub fn nutrition(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.nutrition())
    }

    #[wasm_bindgen(js_name = "filterProducts")]
    pub fn filter_products(&self, term: String, category: Option<String>) -> Result<JsValue, JsError> {
        let filter = ProductFilter::new(term, category);
        to_js(&self.session.filter_products(&filter))
    }

    pub fn categories(&self) -> js_sys::Array {
        self.session
            .catalog()
            .categories()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    /// お気に入りキー配列に含まれるレシピ（カタログ順）
    #[wasm_bindgen(js_name = "favoriteRecipes")]
    pub fn favorite_recipes(&self, keys: JsValue) -> Result<JsValue, JsError> {
        let keys: Vec<RecipeKey> = serde_wasm_bindgen::from_value(keys)?;
        to_js(&favorite_recipes(&self.session.catalog().recipes, &keys))
    }

    /// レシピの識別キー（お気に入り保存用）
    #[wasm_bindgen(js_name = "recipeKeys")]
    pub fn recipe_keys(&self) -> Result<JsValue, JsError> {
        let keys: Vec<RecipeKey> = self.session.catalog().recipes.iter().map(|r| r.key()).collect();
        to_js(&keys)
    }
}
