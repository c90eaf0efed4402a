//! Fridge Chef CLI
//!
//! 共通エンジン（fridge-chef-common）にカタログ読込・お気に入り保存・
//! 設定・端末表示を組み合わせる。

pub mod cli;
pub mod config;
pub mod error;
pub mod favorites;
pub mod loader;
pub mod logging;
pub mod report;
pub mod shop;
