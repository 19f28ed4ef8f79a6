//! Product, listing, and filter-facet endpoints.

use atlas_core::{Category, ColorRange, ListingPage, ProductDetail, ProductFilters};

use crate::error::ClientError;
use crate::normalize::{normalize_color_range, normalize_listing, normalize_product};
use crate::types::{ColorRangesData, DataEnvelope, ListingData, ProductDetailData};

use super::StorefrontClient;

impl StorefrontClient {
    /// Fetches a product and its related products from `front/products/{id}`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] if the endpoint returns 404.
    /// - [`ClientError::MissingProduct`] if the payload has no `data.product`.
    /// - Any transport or decoding error from the request.
    pub async fn fetch_product(&self, product_id: &str) -> Result<ProductDetail, ClientError> {
        let envelope: DataEnvelope<ProductDetailData> = self
            .get_json(
                &["front", "products", product_id],
                &[],
                &format!("product {product_id}"),
            )
            .await?;

        let data = envelope.data.ok_or_else(|| ClientError::MissingProduct {
            product_id: product_id.to_owned(),
        })?;
        let product = data.product.ok_or_else(|| ClientError::MissingProduct {
            product_id: product_id.to_owned(),
        })?;

        let detail = normalize_product(product, data.related_products);
        tracing::debug!(
            product_id,
            varieties = detail.varieties.len(),
            "fetched product"
        );
        Ok(detail)
    }

    /// Fetches one page of `front/products` with the given filters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingData`] if the body has no `data`
    /// object, or any transport or decoding error from the request.
    pub async fn fetch_listing(
        &self,
        filters: &ProductFilters,
        page: u32,
    ) -> Result<ListingPage, ClientError> {
        let context = format!("product listing page {page}");
        let envelope: DataEnvelope<ListingData> = self
            .get_json(&["front", "products"], &filters.query_pairs(page), &context)
            .await?;
        let data = envelope
            .data
            .ok_or(ClientError::MissingData { context })?;
        Ok(normalize_listing(data))
    }

    /// Fetches the category tree from `front/get-categories`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decoding error from the request.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        let roots: Option<Vec<Category>> = self
            .get_json(&["front", "get-categories"], &[], "category tree")
            .await?;
        Ok(roots.unwrap_or_default())
    }

    /// Fetches color filter options from `front/color-ranges`.
    ///
    /// # Errors
    ///
    /// Returns any transport or decoding error from the request.
    pub async fn fetch_color_ranges(&self) -> Result<Vec<ColorRange>, ClientError> {
        let envelope: DataEnvelope<ColorRangesData> = self
            .get_json(&["front", "color-ranges"], &[], "color ranges")
            .await?;
        Ok(envelope
            .data
            .map(|d| d.color_ranges)
            .unwrap_or_default()
            .into_iter()
            .map(normalize_color_range)
            .collect())
    }
}
