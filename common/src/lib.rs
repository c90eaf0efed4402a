//! Fridge Chef Common Library
//!
//! CLIとWeb(WASM)で共有されるカート・レシピ照合エンジン

pub mod types;
pub mod error;
pub mod cart;
pub mod catalog;
pub mod matcher;
pub mod search;
pub mod nutrition;
pub mod favorites;
pub mod session;

pub use types::{CartLine, Product, ProductId, Recipe, RecipeKey};
pub use error::{Error, Result};
pub use cart::{AddOutcome, Cart, CartAction};
pub use catalog::{Catalog, CatalogSource};
pub use matcher::{match_all, BestRecipe, ExactMatch, MatchReport, MatchStatus, PartialMatch, MAX_MISSING_INGREDIENTS};
pub use search::{filter_products, ProductFilter, ALL_CATEGORIES};
pub use nutrition::{Gauge, NutritionSummary};
pub use favorites::{favorite_recipes, FavoritesStore, InMemoryFavorites};
pub use session::Session;
