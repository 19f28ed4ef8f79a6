//! Product detail page state and variant selection.
//!
//! Loads race: the shopper can navigate to another product (or away) while
//! a fetch is in flight. Every load and reset bumps a generation counter
//! under the state lock, and a finished fetch is applied only if its
//! generation is still current, so a late response can never overwrite
//! newer state. The variant index is swapped as a whole `Arc`; readers hold
//! either the old list or the new one, never a mix.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use atlas_client::CatalogApi;
use atlas_core::{ProductDetail, SizeAttribute, VariantId, VariantIndex};
use rust_decimal::Decimal;

/// What happened to a [`ProductDetailStore::fetch_product`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// The product does not exist or could not be fetched; `not_found` is set.
    NotFound,
    /// A newer load or a reset started meanwhile; the result was dropped.
    Superseded,
}

/// Snapshot of the product page state.
#[derive(Debug, Clone, Default)]
pub struct ProductState {
    pub loading: bool,
    pub not_found: bool,
    pub product: Option<Arc<ProductDetail>>,
    pub variants: Arc<VariantIndex>,
}

#[derive(Debug, Default)]
struct Inner {
    state: ProductState,
    generation: u64,
}

pub struct ProductDetailStore<A> {
    api: Arc<A>,
    inner: RwLock<Inner>,
}

impl<A: CatalogApi> ProductDetailStore<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Loads `product_id`, replacing the current product and variant index.
    ///
    /// A 404, an empty product payload, and transport or decoding failures
    /// all end the same way: `not_found = true` and an empty variant index.
    pub async fn fetch_product(&self, product_id: &str) -> LoadOutcome {
        let generation = {
            let mut inner = self.write();
            inner.generation += 1;
            inner.state.loading = true;
            inner.state.not_found = false;
            inner.generation
        };

        let result = self.api.fetch_product(product_id).await;

        let mut inner = self.write();
        if inner.generation != generation {
            tracing::debug!(
                product_id,
                generation,
                current = inner.generation,
                "discarding stale product response"
            );
            return LoadOutcome::Superseded;
        }

        inner.state.loading = false;
        match result {
            Ok(detail) => {
                let index = VariantIndex::new(detail.varieties.clone());
                tracing::info!(
                    product_id,
                    varieties = index.len(),
                    size_attribute = %index.size_attribute(),
                    "product loaded"
                );
                inner.state.variants = Arc::new(index);
                inner.state.product = Some(Arc::new(detail));
                LoadOutcome::Loaded
            }
            Err(e) => {
                if e.is_not_found() {
                    tracing::info!(product_id, error = %e, "product not found");
                } else {
                    tracing::warn!(product_id, error = %e, "product fetch failed");
                }
                inner.state.product = None;
                inner.state.variants = Arc::new(VariantIndex::default());
                inner.state.not_found = true;
                LoadOutcome::NotFound
            }
        }
    }

    /// Clears the page state and invalidates any in-flight load.
    pub fn reset(&self) {
        let mut inner = self.write();
        inner.generation += 1;
        inner.state = ProductState::default();
    }

    #[must_use]
    pub fn snapshot(&self) -> ProductState {
        self.read().state.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().state.loading
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.read().state.not_found
    }

    #[must_use]
    pub fn product(&self) -> Option<Arc<ProductDetail>> {
        self.read().state.product.clone()
    }

    /// The current variant index. Queries against the returned `Arc` are
    /// unaffected by loads that complete afterwards.
    #[must_use]
    pub fn variants(&self) -> Arc<VariantIndex> {
        Arc::clone(&self.read().state.variants)
    }

    #[must_use]
    pub fn size_attribute(&self) -> SizeAttribute {
        self.variants().size_attribute()
    }

    #[must_use]
    pub fn unique_designs(&self) -> Vec<String> {
        let variants = self.variants();
        owned(variants.resolver().unique_designs())
    }

    #[must_use]
    pub fn available_sizes_for_design(&self, design: &str) -> Vec<String> {
        let variants = self.variants();
        owned(variants.resolver().available_sizes_for_design(design))
    }

    #[must_use]
    pub fn max_quantity_for_design_and_size(&self, design: &str, size: &str) -> u32 {
        self.variants()
            .resolver()
            .max_quantity_for_design_and_size(design, size)
    }

    #[must_use]
    pub fn find_variety(&self, design: &str, size: &str) -> Option<VariantId> {
        self.variants().resolver().find_variety(design, size)
    }

    /// Discounted price of the loaded product, or zero when none is loaded.
    #[must_use]
    pub fn final_price(&self) -> Decimal {
        self.product()
            .map_or(Decimal::ZERO, |p| p.final_price())
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod tests;
