//! In-memory `CatalogApi` used by the store tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use atlas_client::{CatalogApi, ClientError};
use atlas_core::{
    Attribute, Category, ColorRange, HomeCategory, ListingPage, MenuItem, MenuPlacement,
    PageBounds, PostsFeed, PriceRange, ProductDetail, ProductFilters, ProductSummary, Slide,
    Variant, VariantId,
};
use rust_decimal::Decimal;
use tokio::sync::Notify;

#[derive(Default)]
pub(crate) struct FakeApi {
    pub products: HashMap<String, ProductDetail>,
    pub listing_pages: HashMap<u32, ListingPage>,
    pub categories: Vec<Category>,
    pub colors: Vec<ColorRange>,
    pub slides: Vec<Slide>,
    pub home_categories: Vec<HomeCategory>,
    pub summaries: Vec<ProductSummary>,
    pub menus: Vec<MenuItem>,
    pub posts: Option<PostsFeed>,
    /// Endpoint names that answer with HTTP 500.
    pub failing: HashSet<&'static str>,
    /// Product ids whose fetch waits until [`FakeApi::release`] is called.
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    pub calls: Mutex<Vec<String>>,
    pub listing_calls: Mutex<Vec<(ProductFilters, u32)>>,
}

impl FakeApi {
    pub fn gate(&self, product_id: &str) {
        self.gates
            .lock()
            .unwrap()
            .insert(product_id.to_owned(), Arc::new(Notify::new()));
    }

    pub fn release(&self, product_id: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(product_id) {
            gate.notify_one();
        }
    }

    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.as_str() == endpoint)
            .count()
    }

    fn record(&self, endpoint: &'static str) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(endpoint.to_owned());
        if self.failing.contains(endpoint) {
            return Err(ClientError::UnexpectedStatus {
                status: 500,
                url: format!("http://fake/{endpoint}"),
            });
        }
        Ok(())
    }
}

impl CatalogApi for FakeApi {
    async fn fetch_product(&self, product_id: &str) -> Result<ProductDetail, ClientError> {
        let gate = self.gates.lock().unwrap().get(product_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.record("product")?;
        self.products
            .get(product_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                url: format!("http://fake/front/products/{product_id}"),
            })
    }

    async fn fetch_listing(
        &self,
        filters: &ProductFilters,
        page: u32,
    ) -> Result<ListingPage, ClientError> {
        self.listing_calls
            .lock()
            .unwrap()
            .push((filters.clone(), page));
        self.record("listing")?;
        Ok(self.listing_pages.get(&page).cloned().unwrap_or_default())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.record("categories")?;
        Ok(self.categories.clone())
    }

    async fn fetch_color_ranges(&self) -> Result<Vec<ColorRange>, ClientError> {
        self.record("colors")?;
        Ok(self.colors.clone())
    }

    async fn fetch_sliders(&self) -> Result<Vec<Slide>, ClientError> {
        self.record("sliders")?;
        Ok(self.slides.clone())
    }

    async fn fetch_home_categories(&self) -> Result<Vec<HomeCategory>, ClientError> {
        self.record("home")?;
        Ok(self.home_categories.clone())
    }

    async fn fetch_most_discounts(&self) -> Result<Vec<ProductSummary>, ClientError> {
        self.record("most-discounts")?;
        Ok(self.summaries.clone())
    }

    async fn fetch_most_sales(&self) -> Result<Vec<ProductSummary>, ClientError> {
        self.record("most-sales")?;
        Ok(self.summaries.clone())
    }

    async fn fetch_new_products(&self) -> Result<Vec<ProductSummary>, ClientError> {
        self.record("new-products")?;
        Ok(self.summaries.clone())
    }

    async fn fetch_menu(&self, _placement: MenuPlacement) -> Result<Vec<MenuItem>, ClientError> {
        self.record("menu")?;
        Ok(self.menus.clone())
    }

    async fn fetch_posts(&self) -> Result<Option<PostsFeed>, ClientError> {
        self.record("posts")?;
        Ok(self.posts.clone())
    }
}

pub(crate) fn variant(id: i64, quantity: u32, design: &str, size: &str) -> Variant {
    Variant {
        id: VariantId(id),
        quantity,
        attributes: vec![
            Attribute::new("tarh", design),
            Attribute::new("sizePants", size),
        ],
    }
}

pub(crate) fn product(id: i64, price: i64, discount: i64, varieties: Vec<Variant>) -> ProductDetail {
    ProductDetail {
        id,
        title: format!("Product {id}"),
        images: Vec::new(),
        price: Decimal::from(price),
        discount_percent: Decimal::from(discount),
        discount_until: None,
        total_quantity: varieties.iter().map(|v| v.quantity).sum(),
        status: "available".to_string(),
        size_charts: Vec::new(),
        specifications: Vec::new(),
        varieties,
        categories: Vec::new(),
        related_products: Vec::new(),
    }
}

pub(crate) fn summary(id: i64) -> ProductSummary {
    ProductSummary {
        id,
        title: format!("Product {id}"),
        slug: None,
        price: None,
        discount: None,
        major_final_price: None,
        main_image: None,
        status: None,
    }
}

pub(crate) fn listing_page(current: u32, last: u32, ids: &[i64]) -> ListingPage {
    ListingPage {
        products: ids.iter().copied().map(summary).collect(),
        bounds: PageBounds {
            first: 1,
            last,
            current,
        },
        price_range: PriceRange {
            min: Decimal::from(100),
            max: Decimal::from(5000),
        },
        sizes: vec![serde_json::json!("S"), serde_json::json!("M")],
    }
}
