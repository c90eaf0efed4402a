use crate::error::{FridgeChefError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログパスを上書きする環境変数
pub const CATALOG_ENV: &str = "FRIDGE_CHEF_CATALOG";
/// お気に入りファイルを上書きする環境変数
pub const FAVORITES_ENV: &str = "FRIDGE_CHEF_FAVORITES";

const FAVORITES_FILE_NAME: &str = "favorites.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// カタログJSON（products / recipes）
    pub catalog_path: Option<PathBuf>,
    /// お気に入りJSON
    pub favorites_path: Option<PathBuf>,
    /// --user省略時のユーザー
    pub default_user: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FridgeChefError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("fridge-chef"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// カタログパスを決定（引数 > 環境変数 > 設定ファイル）
    pub fn catalog_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        self.resolve_catalog_path(cli_override, std::env::var(CATALOG_ENV).ok())
    }

    pub fn resolve_catalog_path(&self, cli_override: Option<&Path>, env: Option<String>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = env.filter(|s| !s.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }
        self.catalog_path.clone().ok_or(FridgeChefError::MissingCatalog)
    }

    /// お気に入りファイルのパスを決定（環境変数 > 設定ファイル > 既定）
    pub fn favorites_path(&self) -> Result<PathBuf> {
        self.resolve_favorites_path(std::env::var(FAVORITES_ENV).ok())
    }

    pub fn resolve_favorites_path(&self, env: Option<String>) -> Result<PathBuf> {
        if let Some(path) = env.filter(|s| !s.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }
        match &self.favorites_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(FAVORITES_FILE_NAME)),
        }
    }

    /// ユーザーを決定（引数 > 設定ファイル）
    pub fn user(&self, cli_user: Option<&str>) -> Result<String> {
        cli_user
            .map(str::to_string)
            .or_else(|| self.default_user.clone())
            .ok_or_else(|| FridgeChefError::Config("ユーザーが指定されていません（--user）".into()))
    }

    pub fn set_catalog(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = Some(path);
        self.save()
    }

    pub fn set_default_user(&mut self, user: String) -> Result<()> {
        self.default_user = Some(user);
        self.save()
    }
}
