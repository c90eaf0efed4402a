//! 対話式カート操作モジュール
//!
//! 1行ずつコマンドを受け取り、セッションのカートを操作する。

use crate::error::{FridgeChefError, Result};
use crate::report;
use fridge_chef_common::{CartAction, ProductFilter, ProductId, Session};
use dialoguer::Input;

const HELP: &str = "操作: a ID 追加 / r ID 削除 / c 全削除 / l カート / s 語 検索 / m レシピ / b おすすめ / n 栄養 / q 終了";

/// 対話コマンド
#[derive(Debug, Clone, PartialEq)]
pub enum ShopCommand {
    /// 商品を追加
    Add(ProductId),
    /// 商品を削除
    Remove(ProductId),
    /// カートを空に
    Clear,
    /// カートを表示
    List,
    /// 商品検索
    Search(String),
    /// レシピ照合
    Match,
    /// おすすめ1件
    Best,
    /// 栄養合計
    Nutrition,
    /// ヘルプ
    Help,
    /// 終了
    Quit,
    /// 解釈できない入力
    Unknown(String),
}

/// 入力行をコマンドに変換
pub fn parse_command(input: &str) -> ShopCommand {
    let trimmed = input.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match (head, rest) {
        ("a" | "add", id) if !id.is_empty() => ShopCommand::Add(ProductId::parse(id)),
        ("r" | "rm" | "remove", id) if !id.is_empty() => ShopCommand::Remove(ProductId::parse(id)),
        ("c" | "clear", "") => ShopCommand::Clear,
        ("l" | "list", "") => ShopCommand::List,
        ("s" | "search", term) => ShopCommand::Search(term.to_string()),
        ("m" | "cook", "") => ShopCommand::Match,
        ("b" | "best", "") => ShopCommand::Best,
        ("n" | "nutrition", "") => ShopCommand::Nutrition,
        ("?" | "h" | "help", _) | ("", _) => ShopCommand::Help,
        ("q" | "Q" | "quit", _) => ShopCommand::Quit,
        _ => ShopCommand::Unknown(trimmed.to_string()),
    }
}

/// コマンドを実行して表示用の文字列を返す
///
/// 終了コマンドでは `None`。
pub fn apply_command(session: &mut Session, command: ShopCommand) -> Option<String> {
    let out = match command {
        ShopCommand::Add(id) => match session.add_product_by_id(&id) {
            Ok(outcome) => match outcome.action {
                CartAction::Added => format!("✔ {} を追加しました\n", outcome.product.name),
                CartAction::Increased => format!(
                    "✔ {} の数量を増やしました ({})\n",
                    outcome.product.name,
                    session.cart().quantity(&id)
                ),
            },
            Err(_) => format!("商品が見つかりません: {}\n", id),
        },
        ShopCommand::Remove(id) => {
            session.remove_from_cart(&id);
            report::render_cart(session.cart())
        }
        ShopCommand::Clear => {
            session.clear_cart();
            "カートを空にしました\n".to_string()
        }
        ShopCommand::List => report::render_cart(session.cart()),
        ShopCommand::Search(term) => {
            let filter = ProductFilter::new(term, None);
            report::render_products(&session.filter_products(&filter))
        }
        ShopCommand::Match => report::render_report(&session.match_recipes()),
        ShopCommand::Best => report::render_best(&session.best_recipe()),
        ShopCommand::Nutrition => report::render_nutrition(&session.nutrition()),
        ShopCommand::Help => format!("{}\n", HELP),
        ShopCommand::Quit => return None,
        ShopCommand::Unknown(input) => format!("不明な操作: {}\n{}\n", input, HELP),
    };
    Some(out)
}

/// 対話ループ
pub fn run_shop(session: &mut Session) -> Result<()> {
    println!("🧊 fridge-chef - 対話モード");
    println!("{}", HELP);
    println!("---\n");

    loop {
        let input: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| FridgeChefError::Prompt(e.to_string()))?;

        match apply_command(session, parse_command(&input)) {
            Some(out) => print!("{}", out),
            None => break,
        }
    }

    println!("終了します");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fridge_chef_common::{Catalog, Product, Recipe};

    fn session() -> Session {
        Session::new(Catalog::new(
            vec![Product::new(1, "Eggs"), Product::new(3, "Milk")],
            vec![Recipe::new("Omelette", vec![1.into()])],
        ))
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("a 1"), ShopCommand::Add(ProductId::Num(1)));
        assert_eq!(parse_command("  add   egg "), ShopCommand::Add(ProductId::Text("egg".into())));
        assert_eq!(parse_command("r 3"), ShopCommand::Remove(ProductId::Num(3)));
        assert_eq!(parse_command("c"), ShopCommand::Clear);
        assert_eq!(parse_command("s"), ShopCommand::Search(String::new()));
        assert_eq!(parse_command("s мляко"), ShopCommand::Search("мляко".into()));
        assert_eq!(parse_command(""), ShopCommand::Help);
        assert_eq!(parse_command("q"), ShopCommand::Quit);
        assert_eq!(parse_command("a"), ShopCommand::Unknown("a".into()));
        assert_eq!(parse_command("xyz"), ShopCommand::Unknown("xyz".into()));
    }

    #[test]
    fn test_apply_add_and_increase() {
        let mut session = session();
        let out = apply_command(&mut session, ShopCommand::Add(ProductId::Num(1))).unwrap();
        assert!(out.contains("Eggs を追加しました"));

        let out = apply_command(&mut session, ShopCommand::Add(ProductId::Num(1))).unwrap();
        assert!(out.contains("数量を増やしました (2)"));
    }

    #[test]
    fn test_apply_unknown_product() {
        let mut session = session();
        let out = apply_command(&mut session, ShopCommand::Add(ProductId::Num(42))).unwrap();
        assert!(out.contains("商品が見つかりません: 42"));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_apply_match_and_quit() {
        let mut session = session();
        apply_command(&mut session, ShopCommand::Add(ProductId::Num(1)));
        let out = apply_command(&mut session, ShopCommand::Match).unwrap();
        assert!(out.contains("Omelette"));

        assert!(apply_command(&mut session, ShopCommand::Quit).is_none());
    }

    #[test]
    fn test_apply_remove_and_clear() {
        let mut session = session();
        apply_command(&mut session, ShopCommand::Add(ProductId::Num(1)));
        apply_command(&mut session, ShopCommand::Add(ProductId::Num(3)));
        apply_command(&mut session, ShopCommand::Remove(ProductId::Num(1)));
        assert_eq!(session.cart().len(), 1);

        apply_command(&mut session, ShopCommand::Clear);
        assert!(session.cart().is_empty());
    }
}
