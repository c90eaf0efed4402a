//! Fridge Chef Web bindings (WASM)
//!
//! ブラウザ側の画面から共通エンジンを呼び出すためのバインディング。
//! 描画は行わず、結果はすべてプレーンなJSオブジェクトで返す。

mod engine;
mod js_types;

pub use engine::FridgeEngine;
pub use js_types::JsCartItem;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
