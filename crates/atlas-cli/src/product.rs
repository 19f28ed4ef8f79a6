//! `atlas product`: product detail with variant selection.

use std::sync::Arc;

use atlas_client::StorefrontClient;
use atlas_core::format_toman;
use atlas_store::{LoadOutcome, ProductDetailStore};

/// Prints a product and walks the design → size → variety selection the
/// product page offers.
///
/// Without `--design` the first design is selected. `--size` is resolved
/// against the selected design.
///
/// # Errors
///
/// Returns an error if the product cannot be loaded.
pub(crate) async fn run_product(
    api: Arc<StorefrontClient>,
    product_id: &str,
    design: Option<&str>,
    size: Option<&str>,
) -> anyhow::Result<()> {
    let store = ProductDetailStore::new(api);
    match store.fetch_product(product_id).await {
        LoadOutcome::Loaded => {}
        LoadOutcome::NotFound | LoadOutcome::Superseded => {
            anyhow::bail!("product '{product_id}' not found")
        }
    }

    let Some(product) = store.product() else {
        anyhow::bail!("product '{product_id}' not found");
    };

    println!("{} (#{})", product.title, product.id);
    if product.has_discount() {
        println!(
            "price: {} -> {} toman ({}% off)",
            format_toman(product.price),
            format_toman(store.final_price()),
            product.discount_percent.normalize()
        );
    } else {
        println!("price: {} toman", format_toman(store.final_price()));
    }
    println!("size attribute: {}", store.size_attribute());

    let designs = store.unique_designs();
    if designs.is_empty() {
        println!("no designs available");
        return Ok(());
    }
    println!("designs: {}", designs.join(", "));

    let selected = design.unwrap_or(&designs[0]);
    let sizes = store.available_sizes_for_design(selected);
    if sizes.is_empty() {
        println!("design {selected}: out of stock");
    } else {
        println!("design {selected}: sizes {}", sizes.join(", "));
    }

    if let Some(size) = size {
        let quantity = store.max_quantity_for_design_and_size(selected, size);
        match store.find_variety(selected, size) {
            Some(variety) => println!("variety {variety}: {quantity} in stock"),
            None => println!("no variety for design {selected} and size {size}"),
        }
    }

    Ok(())
}
