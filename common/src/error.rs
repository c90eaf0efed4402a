//! エラー型定義

use crate::types::ProductId;
use thiserror::Error;

/// 共通エラー型
///
/// 照合エンジン本体はエラーを返さない。カタログ読込やお気に入り保存など
/// 外部とやり取りする境界と、IDによる商品追加でのみ使用する。
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
