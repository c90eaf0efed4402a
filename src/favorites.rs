//! お気に入りファイル
//!
//! ユーザー → レシピキー一覧のJSONファイル。変更のたびに即保存する。

use fridge_chef_common::{FavoritesStore, InMemoryFavorites, RecipeKey};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FavoritesFile {
    path: PathBuf,
    store: InMemoryFavorites,
}

impl FavoritesFile {
    /// 読み込み（ファイルが無ければ空）
    pub fn load(path: &Path) -> fridge_chef_common::Result<Self> {
        let store = if path.exists() {
            let reader = BufReader::new(File::open(path)?);
            serde_json::from_reader(reader)?
        } else {
            InMemoryFavorites::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            store,
        })
    }

    pub fn save(&self) -> fridge_chef_common::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &self.store)?;
        writer.flush()?;
        debug!(path = %self.path.display(), "favorites saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for FavoritesFile {
    fn favorites(&self, user: &str) -> fridge_chef_common::Result<Vec<RecipeKey>> {
        self.store.favorites(user)
    }

    fn set_favorite(&mut self, user: &str, key: &RecipeKey, is_favorite: bool) -> fridge_chef_common::Result<()> {
        self.store.set_favorite(user, key, is_favorite)?;
        self.save()
    }
}
