//! カートモジュール
//!
//! 商品IDごとに1行を持つ買い物カート。数量は常に1以上で、
//! 0になる行は保持せず削除する。行の並びは追加順。

use crate::types::{CartLine, Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// 追加操作の結果種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    /// 新しい行を作った
    Added,
    /// 既存行の数量を増やした
    Increased,
}

/// `add_to_cart` の戻り値
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddOutcome {
    pub action: CartAction,
    pub product: Product,
}

/// 買い物カート
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// 商品を1つ追加
    ///
    /// 行が無ければ数量1で作成し、あれば数量を1増やす。
    pub fn add_to_cart(&mut self, product: &Product) -> AddOutcome {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(product = %product.id, quantity = line.quantity, "cart line increased");
            return AddOutcome {
                action: CartAction::Increased,
                product: product.clone(),
            };
        }

        self.lines.push(CartLine {
            product_id: product.id.clone(),
            quantity: 1,
            product: product.clone(),
        });
        debug!(product = %product.id, "cart line added");
        AddOutcome {
            action: CartAction::Added,
            product: product.clone(),
        }
    }

    /// 行ごと削除（存在しなければ何もしない）
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != id);
        if self.lines.len() != before {
            debug!(product = %id, "cart line removed");
        }
    }

    /// 全削除
    pub fn clear_cart(&mut self) {
        self.lines.clear();
    }

    /// カートの行一覧（追加順）
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == id)
    }

    /// 指定商品の数量（無ければ0）
    pub fn quantity(&self, id: &ProductId) -> u32 {
        self.get(id).map(|l| l.quantity).unwrap_or(0)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// カート内の商品IDの集合（数量は無視）
    pub fn product_ids(&self) -> HashSet<&ProductId> {
        self.lines.iter().map(|l| &l.product_id).collect()
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 全行の数量合計
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eggs() -> Product {
        Product::new(1, "Яйца")
    }

    fn milk() -> Product {
        Product::new(3, "Мляко")
    }

    #[test]
    fn test_add_new_product() {
        let mut cart = Cart::new();
        let outcome = cart.add_to_cart(&eggs());

        assert_eq!(outcome.action, CartAction::Added);
        assert_eq!(outcome.product.name, "Яйца");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.lines()[0].product, eggs());
    }

    #[test]
    fn test_add_same_product_increases() {
        let mut cart = Cart::new();
        cart.add_to_cart(&eggs());
        let outcome = cart.add_to_cart(&eggs());

        assert_eq!(outcome.action, CartAction::Increased);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity(&ProductId::Num(1)), 2);
    }

    #[test]
    fn test_snapshot_is_kept_on_increase() {
        let mut cart = Cart::new();
        cart.add_to_cart(&eggs());

        let mut renamed = eggs();
        renamed.name = "Пресни яйца".into();
        cart.add_to_cart(&renamed);

        assert_eq!(cart.lines()[0].product.name, "Яйца");
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_to_cart(&milk());
        cart.add_to_cart(&eggs());
        cart.add_to_cart(&milk());

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id.clone()).collect();
        assert_eq!(ids, vec![ProductId::Num(3), ProductId::Num(1)]);
        assert_eq!(cart.total_units(), 3);
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(&eggs());
        cart.add_to_cart(&eggs());
        cart.add_to_cart(&milk());

        cart.remove_from_cart(&ProductId::Num(1));

        assert_eq!(cart.len(), 1);
        assert!(!cart.contains(&ProductId::Num(1)));
        assert_eq!(cart.quantity(&ProductId::Num(1)), 0);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(&eggs());
        let before = cart.clone();

        cart.remove_from_cart(&ProductId::Num(99));
        cart.remove_from_cart(&ProductId::Text("ghost".into()));

        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_then_remove() {
        let mut cart = Cart::new();
        cart.add_to_cart(&eggs());
        cart.add_to_cart(&milk());

        cart.clear_cart();
        cart.remove_from_cart(&ProductId::Num(1));
        cart.remove_from_cart(&ProductId::Num(3));

        assert!(cart.is_empty());
        assert_eq!(cart.total_units(), 0);
    }

    #[test]
    fn test_product_ids_ignore_quantity() {
        let mut cart = Cart::new();
        cart.add_to_cart(&eggs());
        cart.add_to_cart(&eggs());
        cart.add_to_cart(&milk());

        let ids = cart.product_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&ProductId::Num(1)));
        assert!(ids.contains(&ProductId::Num(3)));
    }

    #[test]
    fn test_add_outcome_serialize() {
        let mut cart = Cart::new();
        let json = serde_json::to_string(&cart.add_to_cart(&eggs())).unwrap();
        assert!(json.contains("\"action\":\"added\""));
        let json = serde_json::to_string(&cart.add_to_cart(&eggs())).unwrap();
        assert!(json.contains("\"action\":\"increased\""));
    }
}
