//! お気に入りモジュール
//!
//! ユーザーごとのお気に入りレシピ。保存先は外部（ファイル・DBなど）で、
//! エンジン側はインターフェースとメモリ実装だけを持つ。

use crate::error::Result;
use crate::types::{Recipe, RecipeKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// お気に入りの保存先
pub trait FavoritesStore {
    /// ユーザーのお気に入り一覧（登録順）
    fn favorites(&self, user: &str) -> Result<Vec<RecipeKey>>;

    /// お気に入りの登録・解除
    ///
    /// 登録は重複させず、解除は該当キーをすべて取り除く。
    fn set_favorite(&mut self, user: &str, key: &RecipeKey, is_favorite: bool) -> Result<()>;

    fn is_favorite(&self, user: &str, key: &RecipeKey) -> Result<bool> {
        Ok(self.favorites(user)?.contains(key))
    }

    /// 登録状態を反転し、新しい状態を返す
    fn toggle_favorite(&mut self, user: &str, key: &RecipeKey) -> Result<bool> {
        let next = !self.is_favorite(user, key)?;
        self.set_favorite(user, key, next)?;
        Ok(next)
    }
}

/// メモリ上のお気に入り
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryFavorites {
    by_user: BTreeMap<String, Vec<RecipeKey>>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登録ユーザー数
    pub fn user_count(&self) -> usize {
        self.by_user.len()
    }
}

impl FavoritesStore for InMemoryFavorites {
    fn favorites(&self, user: &str) -> Result<Vec<RecipeKey>> {
        Ok(self.by_user.get(user).cloned().unwrap_or_default())
    }

    fn set_favorite(&mut self, user: &str, key: &RecipeKey, is_favorite: bool) -> Result<()> {
        if is_favorite {
            let keys = self.by_user.entry(user.to_string()).or_default();
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        } else if let Some(keys) = self.by_user.get_mut(user) {
            keys.retain(|k| k != key);
        }
        Ok(())
    }
}

/// お気に入りに含まれるレシピをカタログ順で返す
pub fn favorite_recipes<'a>(recipes: &'a [Recipe], favorites: &[RecipeKey]) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|r| favorites.contains(&r.key()))
        .collect()
}
