//! Product listing page: filter facets, filtered results, and pagination.

use std::collections::BTreeMap;
use std::sync::Arc;

use atlas_client::CatalogApi;
use atlas_core::{Category, ColorRange, PageBounds, PriceRange, ProductFilters, ProductSummary};

const INIT_ERROR: &str = "Error loading data!";
const FILTER_ERROR: &str = "Error fetching products!";
const PAGE_ERROR: &str = "Error loading this page!";

#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    /// True until the first [`ProductListingStore::init`] finishes.
    pub is_loading_init: bool,
    pub is_loading_products: bool,
    pub error_message: Option<String>,
    /// Children of the first root category.
    pub categories: Vec<Category>,
    pub colors: Vec<ColorRange>,
    pub sizes: Vec<serde_json::Value>,
    pub price_range: PriceRange,
    pub bounds: PageBounds,
    /// Fetched result pages keyed by page number. Replaced wholesale by
    /// every filter change.
    pub product_pages: BTreeMap<u32, Vec<ProductSummary>>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            is_loading_init: true,
            is_loading_products: false,
            error_message: None,
            categories: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
            price_range: PriceRange::default(),
            bounds: PageBounds::default(),
            product_pages: BTreeMap::new(),
        }
    }
}

impl ListingState {
    /// Page numbers for the paginator; empty when `last < first`.
    #[must_use]
    pub fn pages(&self) -> Vec<u32> {
        (self.bounds.first..=self.bounds.last).collect()
    }

    /// Products of the current page, if that page has been fetched.
    #[must_use]
    pub fn current_products(&self) -> &[ProductSummary] {
        self.product_pages
            .get(&self.bounds.current)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub struct ProductListingStore<A> {
    api: Arc<A>,
    state: ListingState,
    /// Last successfully applied filters, reused for page changes.
    filters: ProductFilters,
}

impl<A: CatalogApi> ProductListingStore<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: ListingState::default(),
            filters: ProductFilters::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    #[must_use]
    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    /// Loads the filter facets and then the unfiltered first page.
    ///
    /// Categories, colors, and the catalog-wide facets are fetched in that
    /// order; the first failure stops initialization.
    pub async fn init(&mut self) {
        self.state.is_loading_init = true;
        self.state.error_message = None;

        match self.load_facets().await {
            Ok(()) => self.apply_filters(ProductFilters::default()).await,
            Err(e) => {
                tracing::warn!(error = %e, "listing initialization failed");
                self.state.error_message = Some(INIT_ERROR.to_string());
            }
        }

        self.state.is_loading_init = false;
    }

    async fn load_facets(&mut self) -> Result<(), atlas_client::ClientError> {
        let roots = self.api.fetch_categories().await?;
        self.state.categories = roots
            .into_iter()
            .next()
            .map(|root| root.children)
            .unwrap_or_default();

        self.state.colors = self.api.fetch_color_ranges().await?;

        let first = self.api.fetch_listing(&ProductFilters::default(), 1).await?;
        self.state.sizes = first.sizes;
        self.state.price_range = first.price_range;
        self.state.bounds.first = first.bounds.first;
        self.state.bounds.last = first.bounds.last;

        tracing::debug!(
            categories = self.state.categories.len(),
            colors = self.state.colors.len(),
            sizes = self.state.sizes.len(),
            "listing facets loaded"
        );
        Ok(())
    }

    /// Fetches page 1 for `filters`, discarding every memoized page.
    pub async fn apply_filters(&mut self, filters: ProductFilters) {
        self.state.is_loading_products = true;
        self.state.error_message = None;

        match self.api.fetch_listing(&filters, 1).await {
            Ok(page) => {
                tracing::debug!(
                    products = page.products.len(),
                    last_page = page.bounds.last,
                    "filters applied"
                );
                self.state.price_range = page.price_range;
                self.state.bounds = page.bounds;
                self.state.product_pages = BTreeMap::from([(page.bounds.current, page.products)]);
                self.filters = filters;
            }
            Err(e) => {
                tracing::warn!(error = %e, "filtered listing fetch failed");
                self.state.error_message = Some(FILTER_ERROR.to_string());
            }
        }

        self.state.is_loading_products = false;
    }

    /// Shows `page`, fetching it with the last applied filters unless it is
    /// already memoized.
    pub async fn change_page(&mut self, page: u32) {
        if self.state.product_pages.contains_key(&page) {
            self.state.bounds.current = page;
            return;
        }

        self.state.is_loading_products = true;
        self.state.error_message = None;

        match self.api.fetch_listing(&self.filters, page).await {
            Ok(listing) => {
                self.state.product_pages.insert(page, listing.products);
                self.state.bounds.current = page;
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "listing page fetch failed");
                self.state.error_message = Some(PAGE_ERROR.to_string());
            }
        }

        self.state.is_loading_products = false;
    }
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
