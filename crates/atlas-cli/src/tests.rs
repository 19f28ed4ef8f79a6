use super::*;

#[test]
fn parses_product_with_selection() {
    let cli = Cli::try_parse_from(["atlas", "product", "42", "--design", "Blue", "--size", "L"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Product {
            ref id,
            design: Some(ref d),
            size: Some(ref s),
        } if id == "42" && d == "Blue" && s == "L"
    ));
}

#[test]
fn parses_product_without_selection() {
    let cli = Cli::try_parse_from(["atlas", "product", "42"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Product {
            design: None,
            size: None,
            ..
        }
    ));
}

#[test]
fn product_requires_id() {
    assert!(Cli::try_parse_from(["atlas", "product"]).is_err());
}

#[test]
fn products_defaults_to_first_page_without_filters() {
    let cli = Cli::try_parse_from(["atlas", "products"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Products {
            category: None,
            color: None,
            size: None,
            title: None,
            available: false,
            min_price: None,
            max_price: None,
            page: 1,
        }
    ));
}

#[test]
fn parses_products_filters() {
    let cli = Cli::try_parse_from([
        "atlas",
        "products",
        "--color",
        "red",
        "--available",
        "--min-price",
        "1000",
        "--page",
        "3",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Products {
            color: Some(ref c),
            available: true,
            min_price: Some(1000),
            max_price: None,
            page: 3,
            ..
        } if c == "red"
    ));
}

#[test]
fn parses_menu_placement() {
    let cli = Cli::try_parse_from(["atlas", "menu", "footer"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Menu {
            placement: MenuArg::Footer
        }
    ));
    assert_eq!(MenuPlacement::from(MenuArg::Footer), MenuPlacement::Footer);
}

#[test]
fn rejects_unknown_menu_placement() {
    assert!(Cli::try_parse_from(["atlas", "menu", "sidebar"]).is_err());
}

#[test]
fn parses_route_command() {
    let cli =
        Cli::try_parse_from(["atlas", "route", "/products/7"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Route { ref path } if path == "/products/7"));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["atlas"]).is_err());
}

#[test]
fn route_command_rejects_unknown_path() {
    assert!(browse::run_route("/cart").is_err());
    assert!(browse::run_route("/products/7").is_ok());
}
