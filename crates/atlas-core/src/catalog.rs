//! Product listing types: category tree, color filters, and result pages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A node of the category tree returned by `front/get-categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Category card image; top-level categories without one are not shown
    /// on the home page.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub children: Vec<Category>,
}

impl Category {
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// A color filter option. `value` is what gets sent back as the `color`
/// listing filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub id: Option<i64>,
    pub title: String,
    pub hex: Option<String>,
    pub gradient: String,
    pub image: String,
    pub value: String,
}

/// A product card in listings and home sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub discount: Option<Decimal>,
    #[serde(default)]
    pub major_final_price: Option<serde_json::Value>,
    #[serde(default)]
    pub main_image: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// First, last, and current page numbers reported by a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBounds {
    pub first: u32,
    pub last: u32,
    pub current: u32,
}

impl Default for PageBounds {
    fn default() -> Self {
        Self {
            first: 1,
            last: 1,
            current: 1,
        }
    }
}

/// One page of `front/products`, with the facet data the listing page uses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingPage {
    pub products: Vec<ProductSummary>,
    pub bounds: PageBounds,
    pub price_range: PriceRange,
    /// Size filter values offered for the whole catalog.
    pub sizes: Vec<serde_json::Value>,
}

/// A home page category strip with its featured products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeCategory {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductSummary>,
}

/// Filters for the product listing page.
///
/// Empty text filters are omitted from the request; `available`,
/// `min_price`, and `max_price` are always sent, as `0` when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub category_id: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub title: Option<String>,
    /// Only in-stock products.
    pub available: bool,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
}

impl ProductFilters {
    /// Query parameters for `front/products` at `page`, excluding `version`.
    #[must_use]
    pub fn query_pairs(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", page.to_string())];

        let text_filters = [
            ("category_id", &self.category_id),
            ("color", &self.color),
            ("size", &self.size),
            ("title", &self.title),
        ];
        for (key, value) in text_filters {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((key, value.to_string()));
            }
        }

        pairs.push(("available", u8::from(self.available).to_string()));
        pairs.push(("min_price", self.min_price.unwrap_or(0).to_string()));
        pairs.push(("max_price", self.max_price.unwrap_or(0).to_string()));
        pairs
    }
}
