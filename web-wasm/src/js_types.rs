//! JavaScript側に渡すデータ型

use fridge_chef_common::{CartLine, ProductId};
use serde::Serialize;

/// カート表示用の1行（商品情報に数量を付けた形）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsCartItem {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub qty: u32,
}

impl From<&CartLine> for JsCartItem {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product_id.clone(),
            name: line.product.name.clone(),
            category: line.product.category.clone(),
            calories: line.product.calories,
            protein: line.product.protein,
            fat: line.product.fat,
            qty: line.quantity,
        }
    }
}
