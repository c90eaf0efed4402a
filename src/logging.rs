//! ログ初期化
//!
//! `RUST_LOG` があればそれを優先し、無ければ `--verbose` で debug、
//! 通常は warn。出力は標準エラー（標準出力は結果表示用）。

use std::io;
use tracing_subscriber::EnvFilter;

/// 既定のフィルタ文字列
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "fridge_chef=debug,fridge_chef_common=debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = std::env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new(default_directive(verbose)),
        |directive| EnvFilter::new(directive),
    );

    // 二重初期化（テストなど）は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
