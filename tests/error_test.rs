//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use fridge_chef::error::FridgeChefError;
use fridge_chef::loader;
use fridge_chef_common::ProductId;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないカタログを読み込んだ場合
#[test]
fn test_load_nonexistent_catalog() {
    let result = loader::load_session(Path::new("/nonexistent/path/catalog.json"));
    assert!(matches!(result, Err(FridgeChefError::FileNotFound(_))));
}

/// JSONとして読めないカタログ
#[test]
fn test_load_broken_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = loader::load_session(&path);
    match result {
        Err(FridgeChefError::CatalogLoad(msg)) => assert!(msg.contains("catalog.json")),
        other => panic!("CatalogLoad expected: {:?}", other.map(|_| ())),
    }
}

/// 空のカタログはエラーにならない
#[test]
fn test_load_empty_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{}").unwrap();

    let session = loader::load_session(&path).expect("空のカタログは読める");
    assert!(session.catalog().is_empty());
}

/// エンジンのエラーからの変換
#[test]
fn test_engine_error_conversion() {
    let err: FridgeChefError = fridge_chef_common::Error::UnknownProduct(ProductId::Num(7)).into();
    assert!(matches!(err, FridgeChefError::UnknownProduct(ref id) if id == "7"));

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "x");
    let err: FridgeChefError = fridge_chef_common::Error::Io(io).into();
    assert!(matches!(err, FridgeChefError::Io(_)));

    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: FridgeChefError = fridge_chef_common::Error::Json(json).into();
    assert!(matches!(err, FridgeChefError::JsonParse(_)));
}

/// FridgeChefErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        FridgeChefError::Config("テスト設定エラー".to_string()),
        FridgeChefError::MissingCatalog,
        FridgeChefError::FileNotFound("catalog.json".to_string()),
        FridgeChefError::CatalogLoad("壊れたJSON".to_string()),
        FridgeChefError::UnknownProduct("42".to_string()),
        FridgeChefError::UnknownRecipe("ムサカ".to_string()),
        FridgeChefError::Prompt("中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}
