//! カタログとカートの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ProductId: 商品ID（数値にできれば数値、できなければ文字列）
//! - Product / Recipe: セッション中は不変のカタログレコード
//! - CartLine: カート内の1行（数量と追加時点の商品スナップショット）

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 商品ID
///
/// 保存データのIDは文字列で届くことが多いので、0以外の整数として
/// 読めるものは `Num` に寄せる。`"1"` と `1` は同じ商品を指す。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ProductId {
    Num(i64),
    Text(String),
}

impl ProductId {
    /// 文字列IDを正規化
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) if n != 0 => ProductId::Num(n),
            _ => ProductId::Text(raw.to_string()),
        }
    }
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::Text(String::new())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Num(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Num(n)
    }
}

impl From<i32> for ProductId {
    fn from(n: i32) -> Self {
        ProductId::Num(i64::from(n))
    }
}

impl From<&str> for ProductId {
    fn from(raw: &str) -> Self {
        ProductId::parse(raw)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProductId::parse(s))
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => ProductId::Num(n),
            // i64::MAX as f64 は 2^63 に丸められるため上限は未満で判定
            Raw::Float(f)
                if f.is_finite()
                    && f.fract() == 0.0
                    && f >= i64::MIN as f64
                    && f < i64::MAX as f64 =>
            {
                ProductId::Num(f as i64)
            }
            Raw::Float(f) => ProductId::Text(f.to_string()),
            Raw::Text(s) => ProductId::parse(&s),
        })
    }
}

/// 商品（食材）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub calories: f64,      // kcal

    #[serde(default)]
    pub protein: f64,       // g

    #[serde(default)]
    pub fat: f64,           // g
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// お気に入りなどで使うレシピの識別キー
///
/// `id` があればそれを、無ければタイトルを使う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeKey(String);

impl RecipeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// レシピ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    /// 安定ID（古いカタログには無い）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub title: String,

    pub description: String,

    /// 調理手順
    pub steps: String,

    /// 難易度
    pub level: String,

    /// 材料の商品ID（カタログに無いIDも含まれうる）
    #[serde(deserialize_with = "null_as_empty")]
    pub ingredients: Vec<ProductId>,
}

impl Recipe {
    pub fn new(title: impl Into<String>, ingredients: Vec<ProductId>) -> Self {
        Self {
            title: title.into(),
            ingredients,
            ..Default::default()
        }
    }

    /// 識別キー
    pub fn key(&self) -> RecipeKey {
        match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => RecipeKey::new(id),
            _ => RecipeKey::new(self.title.clone()),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ProductId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ProductId>>::deserialize(deserializer)?.unwrap_or_default())
}

/// カートの1行
///
/// 数量0の行を作れないよう、デシリアライズは提供しない。
///
/// ```compile_fail
/// let _: fridge_chef_common::CartLine =
///     serde_json::from_str(r#"{"productId":1,"quantity":0,"product":{"id":1}}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    /// 常に1以上
    pub quantity: u32,
    /// 追加時点の商品情報
    pub product: Product,
}
