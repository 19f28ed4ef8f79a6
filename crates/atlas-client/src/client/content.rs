//! Home page sections, sliders, menus, and posts.

use serde::de::DeserializeOwned;

use atlas_core::{HomeCategory, MenuItem, MenuPlacement, PostsFeed, ProductSummary, Slide};

use crate::error::ClientError;
use crate::types::{
    DataEnvelope, HomeResponse, MenusData, MostDiscountResponse, MostSalesResponse,
    NewProductsResponse, PostsBody, ResponseEnvelope, SlidersResponse,
};

use super::StorefrontClient;

impl StorefrontClient {
    /// Fetches `data.response` of a home page endpoint, or `None` when
    /// either level is missing.
    async fn fetch_home_response<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<Option<T>, ClientError> {
        let envelope: DataEnvelope<ResponseEnvelope<T>> =
            self.get_json(&["front", endpoint], &[], endpoint).await?;
        Ok(envelope.data.and_then(|d| d.response))
    }

    /// # Errors
    ///
    /// Returns any transport or decoding error from the request.
    pub async fn fetch_sliders(&self) -> Result<Vec<Slide>, ClientError> {
        Ok(self
            .fetch_home_response::<SlidersResponse>("sliders")
            .await?
            .map(|r| r.sliders)
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns any transport or decoding error from the request.
    pub async fn fetch_home_categories(&self) -> Result<Vec<HomeCategory>, ClientError> {
        Ok(self
            .fetch_home_response::<HomeResponse>("home")
            .await?
            .map(|r| r.show_in_home_categories)
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns any transport or decoding error from the request.
    pub async fn fetch_most_discounts(&self) -> Result<Vec<ProductSummary>, ClientError> {
        Ok(self
            .fetch_home_response::<MostDiscountResponse>("most-discounts")
            .await?
            .map(|r| r.most_discount)
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns any transport or decoding error from the request.
    pub async fn fetch_most_sales(&self) -> Result<Vec<ProductSummary>, ClientError> {
        Ok(self
            .fetch_home_response::<MostSalesResponse>("most-sales")
            .await?
            .map(|r| r.most_sales)
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns any transport or decoding error from the request.
    pub async fn fetch_new_products(&self) -> Result<Vec<ProductSummary>, ClientError> {
        Ok(self
            .fetch_home_response::<NewProductsResponse>("new-products")
            .await?
            .map(|r| r.new_products)
            .unwrap_or_default())
    }

    /// Fetches a navigation menu from `all/menus/{placement}`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decoding error from the request.
    pub async fn fetch_menu(&self, placement: MenuPlacement) -> Result<Vec<MenuItem>, ClientError> {
        let context = format!("{placement} menu");
        let envelope: DataEnvelope<MenusData> = self
            .get_json(&["all", "menus", placement.as_str()], &[], &context)
            .await?;
        Ok(envelope.data.map(|d| d.menus).unwrap_or_default())
    }

    /// Fetches blog posts from `front/posts`.
    ///
    /// Returns `Ok(None)` when the API answers with `success: false`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decoding error from the request.
    pub async fn fetch_posts(&self) -> Result<Option<PostsFeed>, ClientError> {
        let body: PostsBody = self.get_json(&["front", "posts"], &[], "posts").await?;
        if !body.success {
            tracing::debug!("posts endpoint reported success=false");
            return Ok(None);
        }
        let data = body.data.unwrap_or_default();
        Ok(Some(PostsFeed {
            posts: data.posts.map(|p| p.data).unwrap_or_default(),
            most_viewed: data.most_views,
            categories: data.category,
        }))
    }
}
