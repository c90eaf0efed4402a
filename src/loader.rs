//! カタログ読込
//!
//! ディスク上のカタログJSONを読み込み、エンジンのセッションを作る。

use crate::error::{FridgeChefError, Result};
use fridge_chef_common::{Catalog, CatalogSource, Session};
use std::path::{Path, PathBuf};
use tracing::info;

/// JSONファイルのカタログ
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn load_catalog(&self) -> fridge_chef_common::Result<Catalog> {
        Catalog::from_file(&self.path)
    }
}

/// カタログを読み込んでセッションを開始
pub fn load_session(path: &Path) -> Result<Session> {
    if !path.exists() {
        return Err(FridgeChefError::FileNotFound(path.display().to_string()));
    }

    let source = JsonFileSource::new(path);
    let session = Session::load(&source)
        .map_err(|e| FridgeChefError::CatalogLoad(format!("{}: {}", path.display(), e)))?;

    info!(
        path = %path.display(),
        products = session.catalog().products.len(),
        recipes = session.catalog().recipes.len(),
        "catalog ready"
    );
    Ok(session)
}
