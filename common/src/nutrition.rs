//! 栄養集計モジュール
//!
//! カート全体のカロリー・タンパク質・脂質を数量込みで合計し、
//! 1日の目安量に対するゲージ値を計算する。

use crate::cart::Cart;
use serde::Serialize;

/// タンパク質の目安量 (g)
pub const PROTEIN_LIMIT_G: f64 = 100.0;
/// 脂質の目安量 (g)
pub const FAT_LIMIT_G: f64 = 70.0;

/// 目安量に対するゲージ
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gauge {
    pub value: f64,
    pub limit: f64,
    /// 0〜100に丸めた割合
    pub percent: f64,
    pub over_limit: bool,
}

impl Gauge {
    pub fn new(value: f64, limit: f64) -> Self {
        let percent = if limit > 0.0 {
            (value * 100.0 / limit).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            value,
            limit,
            percent,
            over_limit: value > limit,
        }
    }
}

/// カートの栄養合計
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSummary {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub protein_gauge: Gauge,
    pub fat_gauge: Gauge,
}

impl NutritionSummary {
    /// カートから集計（追加時点のスナップショットを使う）
    pub fn from_cart(cart: &Cart) -> Self {
        let (calories, protein, fat) = cart.lines().iter().fold((0.0, 0.0, 0.0), |acc, line| {
            let qty = f64::from(line.quantity);
            (
                acc.0 + line.product.calories * qty,
                acc.1 + line.product.protein * qty,
                acc.2 + line.product.fat * qty,
            )
        });

        Self {
            calories,
            protein,
            fat,
            protein_gauge: Gauge::new(protein, PROTEIN_LIMIT_G),
            fat_gauge: Gauge::new(fat, FAT_LIMIT_G),
        }
    }
}
