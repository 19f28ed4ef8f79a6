//! `atlas products` and `atlas route`.

use std::sync::Arc;

use atlas_client::StorefrontClient;
use atlas_core::{format_toman, ProductFilters, ProductSummary, Route};
use atlas_store::ProductListingStore;

pub(crate) async fn run_products(
    api: Arc<StorefrontClient>,
    filters: ProductFilters,
    page: u32,
) -> anyhow::Result<()> {
    let mut store = ProductListingStore::new(api);
    store.apply_filters(filters).await;
    if page != 1 {
        store.change_page(page).await;
    }

    let state = store.state();
    if let Some(message) = &state.error_message {
        anyhow::bail!("{message}");
    }

    println!(
        "page {} of {} (prices {} to {} toman)",
        state.bounds.current,
        state.bounds.last,
        format_toman(state.price_range.min),
        format_toman(state.price_range.max)
    );
    for product in state.current_products() {
        println!("{}", summary_line(product));
    }
    Ok(())
}

pub(crate) fn summary_line(product: &ProductSummary) -> String {
    match product.price {
        Some(price) => format!("#{} {} - {} toman", product.id, product.title, format_toman(price)),
        None => format!("#{} {}", product.id, product.title),
    }
}

pub(crate) fn run_route(path: &str) -> anyhow::Result<()> {
    let route = Route::parse(path).ok_or_else(|| anyhow::anyhow!("no page matches '{path}'"))?;
    match &route {
        Route::Home => println!("home page"),
        Route::Products => println!("product listing"),
        Route::ProductDetails { id } => println!("product details for {id}"),
    }
    println!("canonical path: {}", route.path());
    if let Some(name) = route.name() {
        println!("route name: {name}");
    }
    Ok(())
}
