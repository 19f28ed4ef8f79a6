//! The storefront capability the stores are written against.
//!
//! [`StorefrontClient`] is the production implementation; tests substitute
//! in-memory fakes.

use std::future::Future;

use atlas_core::{
    Category, ColorRange, HomeCategory, ListingPage, MenuItem, MenuPlacement, PostsFeed,
    ProductDetail, ProductFilters, ProductSummary, Slide,
};

use crate::client::StorefrontClient;
use crate::error::ClientError;

pub trait CatalogApi: Send + Sync {
    fn fetch_product(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<ProductDetail, ClientError>> + Send;

    fn fetch_listing(
        &self,
        filters: &ProductFilters,
        page: u32,
    ) -> impl Future<Output = Result<ListingPage, ClientError>> + Send;

    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<Category>, ClientError>> + Send;

    fn fetch_color_ranges(
        &self,
    ) -> impl Future<Output = Result<Vec<ColorRange>, ClientError>> + Send;

    fn fetch_sliders(&self) -> impl Future<Output = Result<Vec<Slide>, ClientError>> + Send;

    fn fetch_home_categories(
        &self,
    ) -> impl Future<Output = Result<Vec<HomeCategory>, ClientError>> + Send;

    fn fetch_most_discounts(
        &self,
    ) -> impl Future<Output = Result<Vec<ProductSummary>, ClientError>> + Send;

    fn fetch_most_sales(
        &self,
    ) -> impl Future<Output = Result<Vec<ProductSummary>, ClientError>> + Send;

    fn fetch_new_products(
        &self,
    ) -> impl Future<Output = Result<Vec<ProductSummary>, ClientError>> + Send;

    fn fetch_menu(
        &self,
        placement: MenuPlacement,
    ) -> impl Future<Output = Result<Vec<MenuItem>, ClientError>> + Send;

    fn fetch_posts(&self) -> impl Future<Output = Result<Option<PostsFeed>, ClientError>> + Send;
}

impl CatalogApi for StorefrontClient {
    async fn fetch_product(&self, product_id: &str) -> Result<ProductDetail, ClientError> {
        StorefrontClient::fetch_product(self, product_id).await
    }

    async fn fetch_listing(
        &self,
        filters: &ProductFilters,
        page: u32,
    ) -> Result<ListingPage, ClientError> {
        StorefrontClient::fetch_listing(self, filters, page).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        StorefrontClient::fetch_categories(self).await
    }

    async fn fetch_color_ranges(&self) -> Result<Vec<ColorRange>, ClientError> {
        StorefrontClient::fetch_color_ranges(self).await
    }

    async fn fetch_sliders(&self) -> Result<Vec<Slide>, ClientError> {
        StorefrontClient::fetch_sliders(self).await
    }

    async fn fetch_home_categories(&self) -> Result<Vec<HomeCategory>, ClientError> {
        StorefrontClient::fetch_home_categories(self).await
    }

    async fn fetch_most_discounts(&self) -> Result<Vec<ProductSummary>, ClientError> {
        StorefrontClient::fetch_most_discounts(self).await
    }

    async fn fetch_most_sales(&self) -> Result<Vec<ProductSummary>, ClientError> {
        StorefrontClient::fetch_most_sales(self).await
    }

    async fn fetch_new_products(&self) -> Result<Vec<ProductSummary>, ClientError> {
        StorefrontClient::fetch_new_products(self).await
    }

    async fn fetch_menu(&self, placement: MenuPlacement) -> Result<Vec<MenuItem>, ClientError> {
        StorefrontClient::fetch_menu(self, placement).await
    }

    async fn fetch_posts(&self) -> Result<Option<PostsFeed>, ClientError> {
        StorefrontClient::fetch_posts(self).await
    }
}
