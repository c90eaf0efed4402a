use thiserror::Error;

#[derive(Error, Debug)]
pub enum FridgeChefError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログが設定されていません。`fridge-chef config --set-catalog PATH` または --catalog で指定してください")]
    MissingCatalog,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("カタログ読込エラー: {0}")]
    CatalogLoad(String),

    #[error("商品が見つかりません: {0}")]
    UnknownProduct(String),

    #[error("レシピが見つかりません: {0}")]
    UnknownRecipe(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(String),
}

impl From<fridge_chef_common::Error> for FridgeChefError {
    fn from(err: fridge_chef_common::Error) -> Self {
        match err {
            fridge_chef_common::Error::Io(e) => FridgeChefError::Io(e),
            fridge_chef_common::Error::Json(e) => FridgeChefError::JsonParse(e),
            fridge_chef_common::Error::UnknownProduct(id) => FridgeChefError::UnknownProduct(id.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FridgeChefError>;
