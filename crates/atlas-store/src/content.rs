//! Home page and navigation sections.

use std::sync::Arc;

use atlas_client::{CatalogApi, ClientError};
use atlas_core::content::{DESKTOP_SLIDER_GROUP, MOBILE_SLIDER_GROUP};
use atlas_core::{
    Category, HomeCategory, MenuItem, MenuPlacement, Post, PostCategory, ProductSummary, Slide,
};

/// Hero slider. Fetched at most once per store.
pub struct SliderStore<A> {
    api: Arc<A>,
    slides: Vec<Slide>,
    loading: bool,
    error: Option<String>,
}

impl<A: CatalogApi> SliderStore<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            slides: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Fetches the slides unless they are already loaded or loading.
    pub async fn fetch_slides(&mut self) {
        if self.loading || !self.slides.is_empty() {
            return;
        }
        self.loading = true;
        self.error = None;

        match self.api.fetch_sliders().await {
            Ok(slides) => {
                tracing::debug!(count = slides.len(), "sliders loaded");
                self.slides = slides;
            }
            Err(e) => {
                tracing::warn!(error = %e, "slider fetch failed");
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn desktop_slides(&self) -> Vec<&Slide> {
        self.shown_in(DESKTOP_SLIDER_GROUP)
    }

    #[must_use]
    pub fn mobile_slides(&self) -> Vec<&Slide> {
        self.shown_in(MOBILE_SLIDER_GROUP)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn shown_in(&self, group: &str) -> Vec<&Slide> {
        self.slides.iter().filter(|s| s.is_shown_in(group)).collect()
    }
}

/// A header or footer navigation menu.
pub struct MenuStore<A> {
    api: Arc<A>,
    placement: MenuPlacement,
    items: Vec<MenuItem>,
    loading: bool,
}

impl<A: CatalogApi> MenuStore<A> {
    pub fn new(api: Arc<A>, placement: MenuPlacement) -> Self {
        Self {
            api,
            placement,
            items: Vec::new(),
            loading: false,
        }
    }

    /// Failures leave the menu empty.
    pub async fn fetch_menu(&mut self) {
        self.loading = true;
        self.items = match self.api.fetch_menu(self.placement).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(placement = %self.placement, error = %e, "menu fetch failed");
                Vec::new()
            }
        };
        self.loading = false;
    }

    #[must_use]
    pub fn placement(&self) -> MenuPlacement {
        self.placement
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Blog posts for the home page.
pub struct PostsStore<A> {
    api: Arc<A>,
    loading: bool,
    posts: Vec<Post>,
    most_viewed: Vec<Post>,
    categories: Vec<PostCategory>,
}

impl<A: CatalogApi> PostsStore<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            loading: false,
            posts: Vec::new(),
            most_viewed: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Replaces the lists only when the API reports success. An
    /// unsuccessful response or a failed request keeps what was there.
    pub async fn fetch_posts(&mut self) {
        self.loading = true;
        match self.api.fetch_posts().await {
            Ok(Some(feed)) => {
                self.posts = feed.posts;
                self.most_viewed = feed.most_viewed;
                self.categories = feed.categories;
            }
            Ok(None) => tracing::debug!("posts endpoint reported no success"),
            Err(e) => tracing::warn!(error = %e, "posts fetch failed"),
        }
        self.loading = false;
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn most_viewed(&self) -> &[Post] {
        &self.most_viewed
    }

    #[must_use]
    pub fn categories(&self) -> &[PostCategory] {
        &self.categories
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// One independently loaded home page section.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> Section<T> {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish(&mut self, name: &'static str, result: Result<Vec<T>, ClientError>) {
        match result {
            Ok(items) => {
                tracing::debug!(section = name, count = items.len(), "home section loaded");
                self.items = items;
            }
            Err(e) => {
                tracing::warn!(section = name, error = %e, "home section fetch failed");
                self.items = Vec::new();
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }
}

/// Product strips on the home page.
pub struct HomeSections<A> {
    api: Arc<A>,
    pub categories: Section<HomeCategory>,
    pub most_discounts: Section<ProductSummary>,
    pub most_sales: Section<ProductSummary>,
    pub new_products: Section<ProductSummary>,
}

impl<A: CatalogApi> HomeSections<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            categories: Section::default(),
            most_discounts: Section::default(),
            most_sales: Section::default(),
            new_products: Section::default(),
        }
    }

    pub async fn fetch_categories(&mut self) {
        self.categories.begin();
        let result = self.api.fetch_home_categories().await;
        self.categories.finish("categories", result);
    }

    pub async fn fetch_most_discounts(&mut self) {
        self.most_discounts.begin();
        let result = self.api.fetch_most_discounts().await;
        self.most_discounts.finish("most_discounts", result);
    }

    pub async fn fetch_most_sales(&mut self) {
        self.most_sales.begin();
        let result = self.api.fetch_most_sales().await;
        self.most_sales.finish("most_sales", result);
    }

    pub async fn fetch_new_products(&mut self) {
        self.new_products.begin();
        let result = self.api.fetch_new_products().await;
        self.new_products.finish("new_products", result);
    }

    /// Loads all four sections concurrently. A failing section does not
    /// affect the others.
    pub async fn fetch_all(&mut self) {
        self.categories.begin();
        self.most_discounts.begin();
        self.most_sales.begin();
        self.new_products.begin();

        let api = &*self.api;
        let (categories, discounts, sales, new_products) = tokio::join!(
            api.fetch_home_categories(),
            api.fetch_most_discounts(),
            api.fetch_most_sales(),
            api.fetch_new_products(),
        );

        self.categories.finish("categories", categories);
        self.most_discounts.finish("most_discounts", discounts);
        self.most_sales.finish("most_sales", sales);
        self.new_products.finish("new_products", new_products);
    }
}

/// The full category tree, used for home page category cards.
pub struct CategoryStore<A> {
    api: Arc<A>,
    categories: Vec<Category>,
    loading: bool,
}

impl<A: CatalogApi> CategoryStore<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            categories: Vec::new(),
            loading: false,
        }
    }

    /// On failure the previous tree is kept.
    pub async fn fetch_categories(&mut self) {
        self.loading = true;
        match self.api.fetch_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => tracing::warn!(error = %e, "category fetch failed"),
        }
        self.loading = false;
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Children of the first root that have an image.
    #[must_use]
    pub fn main_categories(&self) -> Vec<&Category> {
        self.categories
            .first()
            .map(|root| root.children.iter().filter(|c| c.has_image()).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
