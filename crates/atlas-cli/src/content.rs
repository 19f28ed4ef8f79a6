//! `atlas home`, `atlas menu`, and `atlas posts`.

use std::sync::Arc;

use atlas_client::StorefrontClient;
use atlas_core::{MenuItem, MenuPlacement};
use atlas_store::{CategoryStore, HomeSections, MenuStore, PostsStore, Section, SliderStore};

use crate::browse::summary_line;

pub(crate) async fn run_home(api: Arc<StorefrontClient>) -> anyhow::Result<()> {
    let mut sliders = SliderStore::new(Arc::clone(&api));
    let mut categories = CategoryStore::new(Arc::clone(&api));
    let mut sections = HomeSections::new(api);
    tokio::join!(
        sliders.fetch_slides(),
        categories.fetch_categories(),
        sections.fetch_all()
    );

    match sliders.error() {
        Some(error) => println!("sliders: unavailable ({error})"),
        None => println!(
            "sliders: {} desktop, {} mobile",
            sliders.desktop_slides().len(),
            sliders.mobile_slides().len()
        ),
    }

    let main: Vec<&str> = categories
        .main_categories()
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    println!("categories: {}", main.join(", "));

    for strip in &sections.categories.items {
        println!("\n{} ({} products)", strip.title, strip.products.len());
        for product in &strip.products {
            println!("  {}", summary_line(product));
        }
    }
    print_section("most discounts", &sections.most_discounts);
    print_section("best sellers", &sections.most_sales);
    print_section("new arrivals", &sections.new_products);
    Ok(())
}

fn print_section(heading: &str, section: &Section<atlas_core::ProductSummary>) {
    println!("\n{heading}");
    if let Some(error) = &section.error {
        println!("  unavailable ({error})");
        return;
    }
    for product in &section.items {
        println!("  {}", summary_line(product));
    }
}

pub(crate) async fn run_menu(
    api: Arc<StorefrontClient>,
    placement: MenuPlacement,
) -> anyhow::Result<()> {
    let mut menu = MenuStore::new(api, placement);
    menu.fetch_menu().await;
    if menu.items().is_empty() {
        println!("{placement} menu is empty");
    }
    print_menu(menu.items(), 0);
    Ok(())
}

fn print_menu(items: &[MenuItem], depth: usize) {
    for item in items {
        let indent = "  ".repeat(depth);
        match &item.link {
            Some(link) => println!("{indent}{} -> {link}", item.title),
            None => println!("{indent}{}", item.title),
        }
        print_menu(&item.children, depth + 1);
    }
}

pub(crate) async fn run_posts(api: Arc<StorefrontClient>) -> anyhow::Result<()> {
    let mut store = PostsStore::new(api);
    store.fetch_posts().await;

    for post in store.posts() {
        println!("{} {}", post.id, post.title);
    }
    if !store.most_viewed().is_empty() {
        println!("\nmost viewed");
        for post in store.most_viewed() {
            println!("  {} ({} views)", post.title, post.views_count.unwrap_or(0));
        }
    }
    let categories: Vec<&str> = store.categories().iter().map(|c| c.name.as_str()).collect();
    if !categories.is_empty() {
        println!("\ncategories: {}", categories.join(", "));
    }
    Ok(())
}
