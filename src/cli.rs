use clap::{Parser, Subcommand};
use fridge_chef_common::ProductId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fridge-chef")]
#[command(about = "冷蔵庫の食材から作れるレシピを探す", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// カタログJSONファイル（省略時は設定ファイル / FRIDGE_CHEF_CATALOG）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商品一覧を表示（検索・カテゴリ絞り込み）
    Products {
        /// 商品名の検索語
        #[arg(short, long, default_value = "")]
        search: String,

        /// カテゴリ（all で全件）
        #[arg(short, long)]
        category: Option<String>,

        /// カテゴリ一覧のみ表示
        #[arg(long)]
        categories: bool,
    },

    /// カートの商品で作れるレシピを探す
    Cook {
        /// カートに入れる商品ID（複数回指定で数量が増える）
        #[arg(short, long = "item", required = true)]
        items: Vec<ProductId>,

        /// 1件だけ表示
        #[arg(long)]
        best: bool,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// カートの栄養合計を表示
    Nutrition {
        /// カートに入れる商品ID
        #[arg(short, long = "item", required = true)]
        items: Vec<ProductId>,
    },

    /// レシピ一覧を表示
    Recipes {
        /// お気に入りのみ
        #[arg(short, long)]
        favorites: bool,

        /// ユーザーID
        #[arg(short, long)]
        user: Option<String>,
    },

    /// お気に入りを登録/解除
    Favorite {
        /// レシピのIDまたはタイトル
        #[arg(required = true)]
        recipe: String,

        /// ユーザーID
        #[arg(short, long)]
        user: Option<String>,

        /// 解除する
        #[arg(long)]
        remove: bool,
    },

    /// 対話式でカートを操作
    Shop,

    /// 設定を表示/編集
    Config {
        /// カタログJSONのパスを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 既定ユーザーを設定
        #[arg(long)]
        set_user: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
