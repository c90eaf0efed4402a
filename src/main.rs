use clap::Parser;
use fridge_chef::{cli, config, error, favorites, loader, logging, report, shop};
use cli::{Cli, Commands};
use config::Config;
use error::{FridgeChefError, Result};
use favorites::FavoritesFile;
use fridge_chef_common::{
    favorite_recipes, FavoritesStore, ProductFilter, ProductId, Recipe, RecipeKey, Session,
};
use std::path::Path;
use tracing::debug;

/// 商品IDを順にカートへ入れる
fn fill_cart(session: &mut Session, items: &[ProductId]) -> Result<()> {
    for id in items {
        session.add_product_by_id(id)?;
    }
    Ok(())
}

fn open_session(config: &Config, catalog: Option<&Path>) -> Result<Session> {
    let path = config.catalog_path(catalog)?;
    debug!(path = %path.display(), "loading catalog");
    loader::load_session(&path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Products { search, category, categories } => {
            let session = open_session(&config, cli.catalog.as_deref())?;

            if categories {
                println!("カテゴリ:");
                for c in session.catalog().categories() {
                    println!("  {}", c);
                }
                return Ok(());
            }

            let filter = ProductFilter::new(search, category);
            let products = session.filter_products(&filter);
            println!("🥚 商品 ({}件)", products.len());
            print!("{}", report::render_products(&products));
        }

        Commands::Cook { items, best, json } => {
            let mut session = open_session(&config, cli.catalog.as_deref())?;
            fill_cart(&mut session, &items)?;

            if json {
                let out = if best {
                    serde_json::to_string_pretty(&session.best_recipe())?
                } else {
                    serde_json::to_string_pretty(&session.match_recipes())?
                };
                println!("{}", out);
                return Ok(());
            }

            print!("{}", report::render_cart(session.cart()));
            println!();
            if best {
                print!("{}", report::render_best(&session.best_recipe()));
            } else {
                print!("{}", report::render_report(&session.match_recipes()));
            }
        }

        Commands::Nutrition { items } => {
            let mut session = open_session(&config, cli.catalog.as_deref())?;
            fill_cart(&mut session, &items)?;

            print!("{}", report::render_cart(session.cart()));
            print!("{}", report::render_nutrition(&session.nutrition()));
        }

        Commands::Recipes { favorites, user } => {
            let session = open_session(&config, cli.catalog.as_deref())?;
            let recipes = &session.catalog().recipes;

            let user = if favorites {
                Some(config.user(user.as_deref())?)
            } else {
                user.or_else(|| config.default_user.clone())
            };

            let keys: Vec<RecipeKey> = match &user {
                Some(user) => FavoritesFile::load(&config.favorites_path()?)?.favorites(user)?,
                None => Vec::new(),
            };

            let shown: Vec<&Recipe> = if favorites {
                favorite_recipes(recipes, &keys)
            } else {
                recipes.iter().collect()
            };

            println!("📖 レシピ ({}件)", shown.len());
            print!("{}", report::render_recipes(&shown, &keys));
        }

        Commands::Favorite { recipe, user, remove } => {
            let session = open_session(&config, cli.catalog.as_deref())?;
            let user = config.user(user.as_deref())?;

            let key = RecipeKey::new(recipe.clone());
            let found = session
                .catalog()
                .recipe(&key)
                .or_else(|| session.catalog().recipes.iter().find(|r| r.title == recipe))
                .ok_or(FridgeChefError::UnknownRecipe(recipe))?;

            let mut store = FavoritesFile::load(&config.favorites_path()?)?;
            store.set_favorite(&user, &found.key(), !remove)?;

            if remove {
                println!("✔ お気に入りから削除しました: {}", found.title);
            } else {
                println!("✔ お気に入りに追加しました: {}", found.title);
            }
        }

        Commands::Shop => {
            let mut session = open_session(&config, cli.catalog.as_deref())?;
            shop::run_shop(&mut session)?;
        }

        Commands::Config { set_catalog, set_user, show } => {
            let mut config = config;

            if let Some(path) = set_catalog {
                config.set_catalog(path)?;
                println!("✔ カタログを設定しました");
            }

            if let Some(user) = set_user {
                config.set_default_user(user)?;
                println!("✔ 既定ユーザーを設定しました");
            }

            if show {
                let unset = || "未設定".to_string();
                println!("設定:");
                println!(
                    "  カタログ: {}",
                    config.catalog_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(unset)
                );
                println!(
                    "  お気に入り: {}",
                    config.favorites_path().map(|p| p.display().to_string()).unwrap_or_else(|_| unset())
                );
                println!("  ユーザー: {}", config.default_user.clone().unwrap_or_else(unset));
            }
        }
    }

    Ok(())
}
