use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, ProductSummary};
use crate::pricing::final_price;
use crate::variants::Variant;

/// A product as shown on its detail page, normalized from the storefront API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: i64,
    pub title: String,
    pub images: Vec<ProductImage>,
    /// List price in toman.
    pub price: Decimal,
    /// Discount as a percentage of `price` (e.g. `10` for 10% off).
    pub discount_percent: Decimal,
    /// Raw deadline string for the running discount, exactly as the API sends it.
    pub discount_until: Option<String>,
    /// Stock across all variants, as reported by the API.
    pub total_quantity: u32,
    /// Availability status label, e.g. `"available"`.
    pub status: String,
    /// Size charts are rendered by the presentation layer; kept opaque here.
    pub size_charts: Vec<serde_json::Value>,
    pub specifications: Vec<serde_json::Value>,
    pub varieties: Vec<Variant>,
    pub categories: Vec<Category>,
    pub related_products: Vec<ProductSummary>,
}

impl ProductDetail {
    #[must_use]
    pub fn final_price(&self) -> Decimal {
        final_price(self.price, self.discount_percent)
    }

    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount_percent > Decimal::ZERO
    }

    /// URL of the first gallery image, if any.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(|i| i.url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: Option<i64>,
    pub url: String,
}
