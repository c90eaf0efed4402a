//! レシピ照合モジュール
//!
//! カートの中身とカタログのレシピを突き合わせ、
//! 「今すぐ作れる」（exact）と「あと少しで作れる」（partial）に分類する。
//!
//! ## 照合ルール
//! - カートと共通の材料が1つも無いレシピは無関係として除外
//! - 不足材料が0件 → exact
//! - 不足材料が1〜`MAX_MISSING_INGREDIENTS`件 → partial
//! - それ以上不足 → 除外
//!
//! ## 並び順
//! - exact: 使用商品数の多い順
//! - partial: 使用商品数の少ない順
//!
//! どちらも安定ソートで、同数ならカタログ順を保つ。

use crate::cart::Cart;
use crate::types::{Product, ProductId, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// partialとして扱う不足材料数の上限
pub const MAX_MISSING_INGREDIENTS: usize = 2;

/// 照合結果のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// カートが空
    Empty,
    /// exactかpartialが1件以上
    Found,
    /// 該当なし
    #[serde(rename = "none")]
    NoMatch,
}

/// 今すぐ作れるレシピ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExactMatch {
    pub recipe: Recipe,
    pub used: Vec<Product>,
}

/// あと少しで作れるレシピ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialMatch {
    pub recipe: Recipe,
    pub used: Vec<Product>,
    pub missing: Vec<Product>,
}

/// 照合結果
///
/// 呼び出しごとに新しく作られ、キャッシュしない。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub status: MatchStatus,
    pub exact: Vec<ExactMatch>,
    pub partial: Vec<PartialMatch>,
}

impl MatchReport {
    fn empty() -> Self {
        Self {
            status: MatchStatus::Empty,
            exact: Vec::new(),
            partial: Vec::new(),
        }
    }

    /// exact + partial の件数
    pub fn len(&self) -> usize {
        self.exact.len() + self.partial.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1件だけ選ぶ場合の結果
    ///
    /// exactの先頭、無ければpartialの先頭。
    pub fn best(&self) -> BestRecipe {
        if self.status == MatchStatus::Empty {
            return BestRecipe::Empty;
        }
        if let Some(top) = self.exact.first() {
            return BestRecipe::Found {
                recipe: top.recipe.clone(),
                used: top.used.clone(),
            };
        }
        if let Some(first) = self.partial.first() {
            return BestRecipe::Partial {
                recipe: first.recipe.clone(),
                used: first.used.clone(),
                missing: first.missing.clone(),
            };
        }
        BestRecipe::NoMatch
    }
}

/// 単一レシピ表示用の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BestRecipe {
    Empty,
    Found {
        recipe: Recipe,
        used: Vec<Product>,
    },
    Partial {
        recipe: Recipe,
        used: Vec<Product>,
        missing: Vec<Product>,
    },
    #[serde(rename = "none")]
    NoMatch,
}

/// カートとレシピ一覧を照合
pub fn match_all(cart: &Cart, recipes: &[Recipe], products: &[Product]) -> MatchReport {
    if cart.is_empty() {
        return MatchReport::empty();
    }

    let cart_ids = cart.product_ids();
    let known_ids: HashSet<&ProductId> = products.iter().map(|p| &p.id).collect();

    let mut exact = Vec::new();
    let mut partial = Vec::new();

    for recipe in recipes {
        let (used_ids, missing_ids): (Vec<&ProductId>, Vec<&ProductId>) = recipe
            .ingredients
            .iter()
            .partition(|id| cart_ids.contains(id));

        // カートと無関係
        if used_ids.is_empty() {
            continue;
        }

        if missing_ids.len() > MAX_MISSING_INGREDIENTS {
            continue;
        }

        let used = resolve_products(recipe, &used_ids, products, &known_ids);

        if missing_ids.is_empty() {
            exact.push(ExactMatch {
                recipe: recipe.clone(),
                used,
            });
        } else {
            let missing = resolve_products(recipe, &missing_ids, products, &known_ids);
            partial.push(PartialMatch {
                recipe: recipe.clone(),
                used,
                missing,
            });
        }
    }

    exact.sort_by(|a, b| b.used.len().cmp(&a.used.len()));
    // partialは昇順。exactと逆向きだが既存の挙動に合わせる
    partial.sort_by_key(|m| m.used.len());

    let status = if exact.is_empty() && partial.is_empty() {
        MatchStatus::NoMatch
    } else {
        MatchStatus::Found
    };

    debug!(
        cart_lines = cart.len(),
        recipes = recipes.len(),
        exact = exact.len(),
        partial = partial.len(),
        "recipe matching finished"
    );

    MatchReport {
        status,
        exact,
        partial,
    }
}

/// IDを商品に解決（カタログ順、未知のIDは落とす）
fn resolve_products(
    recipe: &Recipe,
    ids: &[&ProductId],
    products: &[Product],
    known_ids: &HashSet<&ProductId>,
) -> Vec<Product> {
    for id in ids.iter().filter(|id| !known_ids.contains(*id)) {
        warn!(recipe = %recipe.title, ingredient = %id, "ingredient not found in catalog, skipped");
    }

    let wanted: HashSet<&ProductId> = ids.iter().copied().collect();
    products
        .iter()
        .filter(|p| wanted.contains(&p.id))
        .cloned()
        .collect()
}
