//! 端末表示
//!
//! エンジンの結果を端末向けの文字列に整形する。

use fridge_chef_common::{
    BestRecipe, Cart, Gauge, MatchReport, MatchStatus, NutritionSummary, Product, Recipe, RecipeKey,
};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

fn names(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 商品一覧
pub fn render_products(products: &[&Product]) -> String {
    if products.is_empty() {
        return "商品が見つかりません\n".to_string();
    }

    let mut out = String::new();
    for p in products {
        let _ = writeln!(
            out,
            "  [{}] {} ({}) - {} kcal / P {}g / F {}g",
            p.id, p.name, p.category, p.calories, p.protein, p.fat
        );
    }
    out
}

/// カートの中身
pub fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "🛒 カートは空です\n".to_string();
    }

    let mut out = format!("🛒 カート ({}品目)\n", cart.len());
    for line in cart.lines() {
        let _ = writeln!(out, "  {} x {} [{}]", line.quantity, line.product.name, line.product_id);
    }
    out
}

fn render_recipe_body(out: &mut String, recipe: &Recipe) {
    if !recipe.description.is_empty() {
        let _ = writeln!(out, "     {}", recipe.description);
    }
    let steps = if recipe.steps.is_empty() {
        "手順は登録されていません"
    } else {
        recipe.steps.as_str()
    };
    let _ = writeln!(out, "     🔪 {}", steps);
}

/// 照合結果
pub fn render_report(report: &MatchReport) -> String {
    match report.status {
        MatchStatus::Empty => return "カートが空です。商品を追加してください\n".to_string(),
        MatchStatus::NoMatch => {
            return "作れるレシピが見つかりませんでした。卵・牛乳・小麦粉など基本の食材を追加してみてください\n"
                .to_string()
        }
        MatchStatus::Found => {}
    }

    let mut out = String::new();

    if !report.exact.is_empty() {
        let _ = writeln!(out, "✨ 今すぐ作れる ({})", report.exact.len());
        for m in &report.exact {
            let _ = writeln!(out, "  ✔ {}", m.recipe.title);
            let _ = writeln!(out, "     使う食材: {}", names(&m.used));
            render_recipe_body(&mut out, &m.recipe);
        }
    }

    if !report.partial.is_empty() {
        let _ = writeln!(out, "🛒 少し買い足せば作れる ({})", report.partial.len());
        for m in &report.partial {
            let _ = writeln!(out, "  - {}", m.recipe.title);
            let _ = writeln!(out, "     不足: {}", names(&m.missing));
            let _ = writeln!(out, "     使う食材: {}", names(&m.used));
            render_recipe_body(&mut out, &m.recipe);
        }
    }

    out
}

/// 1件表示
pub fn render_best(best: &BestRecipe) -> String {
    match best {
        BestRecipe::Empty => "カートが空です。商品を追加してください\n".to_string(),
        BestRecipe::NoMatch => "ぴったりのレシピはありません\n".to_string(),
        BestRecipe::Found { recipe, used } => {
            let mut out = format!("✨ {}\n     使う食材: {}\n", recipe.title, names(used));
            render_recipe_body(&mut out, recipe);
            out
        }
        BestRecipe::Partial { recipe, used, missing } => {
            let mut out = format!(
                "🛒 {}\n     不足: {}\n     使う食材: {}\n",
                recipe.title,
                names(missing),
                names(used)
            );
            render_recipe_body(&mut out, recipe);
            out
        }
    }
}

fn render_gauge(label: &str, gauge: &Gauge) -> String {
    let filled = ((gauge.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "  {:<4} [{}{}] {:.1}g / {}g{}\n",
        label,
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        gauge.value,
        gauge.limit,
        if gauge.over_limit { " ⚠ 超過" } else { "" }
    )
}

/// 栄養合計
pub fn render_nutrition(summary: &NutritionSummary) -> String {
    let mut out = format!(
        "📊 カロリー: {:.0} kcal | タンパク質: {:.1}g | 脂質: {:.1}g\n",
        summary.calories, summary.protein, summary.fat
    );
    out.push_str(&render_gauge("P", &summary.protein_gauge));
    out.push_str(&render_gauge("F", &summary.fat_gauge));
    out
}

/// レシピ一覧（お気に入りに ♥）
pub fn render_recipes(recipes: &[&Recipe], favorites: &[RecipeKey]) -> String {
    if recipes.is_empty() {
        return "レシピがありません\n".to_string();
    }

    let mut out = String::new();
    for r in recipes {
        let mark = if favorites.contains(&r.key()) { "♥" } else { " " };
        let level = if r.level.is_empty() { "かんたん" } else { r.level.as_str() };
        let _ = writeln!(out, "{} {} [{}] ({}) 材料{}品", mark, r.title, r.key(), level, r.ingredients.len());
    }
    out
}
