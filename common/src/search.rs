//! 商品検索モジュール
//!
//! 検索語とカテゴリで商品一覧を絞り込む。

use crate::types::Product;

/// 全カテゴリを表す値
pub const ALL_CATEGORIES: &str = "all";

/// 絞り込み条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// 商品名の部分一致（大文字小文字を区別しない）
    pub term: String,
    /// カテゴリ（`None` または `"all"` で全件）
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn new(term: impl Into<String>, category: Option<String>) -> Self {
        Self {
            term: term.into(),
            category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let term = self.term.trim().to_lowercase();
        let name_ok = term.is_empty() || product.name.to_lowercase().contains(&term);
        let category_ok = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) | Some("") => true,
            Some(category) => product.category == category,
        };
        name_ok && category_ok
    }
}

/// 条件に合う商品をカタログ順で返す
pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}
