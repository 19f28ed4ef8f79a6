//! Wire types for the Atlas Mode storefront API (`/v1/front/*`, `/v1/all/*`).
//!
//! ## Response envelopes
//! Every endpoint wraps its payload in `{"data": ...}`. Home sections and
//! sliders nest one level deeper under `data.response`. The category tree is
//! the exception: `front/get-categories` returns a bare JSON array.
//!
//! ## Nulls
//! List fields are sometimes sent as `null` instead of `[]` (notably
//! `product.varieties`). Lists are decoded through [`null_as_empty`] so both
//! shapes become an empty `Vec`.
//!
//! ## Variety attributes
//! Each variety carries `attributes: [{ "name": "tarh", "pivot": { "value": ... } }]`.
//! `pivot.value` is a string for designs and clothing sizes but a JSON
//! number for shoe sizes (e.g. `42`). [`JsonScalar`] accepts both.
//!
//! ## Quantities
//! `quantity` and `total_quantity` are usually integers, but some varieties
//! carry them as strings (`"2"`). Both decode through [`JsonScalar`];
//! anything unparseable counts as zero stock. Negative values are clamped to
//! zero during normalization.
//!
//! ## Malformed varieties
//! Varieties and their attributes are decoded one entry at a time
//! ([`RawVariety`], [`RawAttribute`]). An entry that does not fit its shape
//! is dropped during normalization instead of failing the whole product.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use atlas_core::{
    Category, HomeCategory, MenuItem, Post, PostCategory, ProductSummary, Slide,
};

/// `{"data": T}` wrapper used by every JSON endpoint except categories.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Option<T>,
}

/// `{"response": T}` wrapper nested inside `data` by home-page endpoints.
#[derive(Debug, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub response: Option<T>,
}

/// `data` of `GET front/products/{id}`.
#[derive(Debug, Deserialize)]
pub struct ProductDetailData {
    pub product: Option<ProductWire>,
    #[serde(
        default,
        rename = "relatedProducts",
        deserialize_with = "null_as_empty"
    )]
    pub related_products: Vec<ProductSummary>,
}

#[derive(Debug, Deserialize)]
pub struct ProductWire {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<ImageWire>,
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Discount percentage; `null` or absent when not on sale.
    #[serde(default)]
    pub discount: Option<Decimal>,
    #[serde(default)]
    pub discount_until: Option<String>,
    #[serde(default)]
    pub total_quantity: Option<JsonScalar>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub size_charts: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub specifications: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub varieties: Vec<RawVariety>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<Category>,
}

/// Gallery entries are objects on current API versions; older payloads sent
/// bare URL strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImageWire {
    Url(String),
    Object {
        #[serde(default)]
        id: Option<i64>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        path: Option<String>,
    },
}

/// A variety entry not yet checked against [`VarietyWire`].
pub type RawVariety = serde_json::Value;

/// An attribute entry not yet checked against [`AttributeWire`].
pub type RawAttribute = serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct VarietyWire {
    pub id: i64,
    #[serde(default)]
    pub quantity: Option<JsonScalar>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Vec<RawAttribute>,
}

#[derive(Debug, Deserialize)]
pub struct AttributeWire {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pivot: Option<PivotWire>,
}

#[derive(Debug, Deserialize)]
pub struct PivotWire {
    #[serde(default)]
    pub value: Option<JsonScalar>,
}

/// A JSON value that may arrive as a string or a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum JsonScalar {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

/// `data` of `GET front/products`.
#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default, rename = "priceFilter")]
    pub price_filter: Option<PriceFilterWire>,
    #[serde(default)]
    pub products: Option<PaginatedWire<ProductSummary>>,
    #[serde(default)]
    pub attributes: Option<AttributeValuesWire>,
}

#[derive(Debug, Deserialize)]
pub struct PriceFilterWire {
    #[serde(default)]
    pub min_price: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
}

/// Laravel-style paginator.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedWire<T> {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub last_page: Option<u32>,
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct AttributeValuesWire {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub values: Vec<serde_json::Value>,
}

/// `data` of `GET front/color-ranges`.
#[derive(Debug, Deserialize)]
pub struct ColorRangesData {
    #[serde(default, rename = "colorRanges", deserialize_with = "null_as_empty")]
    pub color_ranges: Vec<ColorRangeWire>,
}

#[derive(Debug, Deserialize)]
pub struct ColorRangeWire {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub hex: Option<String>,
    #[serde(default)]
    pub gradient: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// `data.response` of `GET front/sliders`.
#[derive(Debug, Deserialize)]
pub struct SlidersResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sliders: Vec<Slide>,
}

/// `data.response` of `GET front/home`.
#[derive(Debug, Deserialize)]
pub struct HomeResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub show_in_home_categories: Vec<HomeCategory>,
}

/// `data.response` of `GET front/most-discounts`.
#[derive(Debug, Deserialize)]
pub struct MostDiscountResponse {
    #[serde(default, rename = "mostDiscount", deserialize_with = "null_as_empty")]
    pub most_discount: Vec<ProductSummary>,
}

/// `data.response` of `GET front/most-sales`.
#[derive(Debug, Deserialize)]
pub struct MostSalesResponse {
    #[serde(default, rename = "mostSales", deserialize_with = "null_as_empty")]
    pub most_sales: Vec<ProductSummary>,
}

/// `data.response` of `GET front/new-products`.
#[derive(Debug, Deserialize)]
pub struct NewProductsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub new_products: Vec<ProductSummary>,
}

/// Full body of `GET front/posts`; the only endpoint with a `success` flag.
#[derive(Debug, Deserialize)]
pub struct PostsBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<PostsData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PostsData {
    #[serde(default)]
    pub posts: Option<PaginatedWire<Post>>,
    #[serde(default, rename = "mostViews", deserialize_with = "null_as_empty")]
    pub most_views: Vec<Post>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: Vec<PostCategory>,
}

/// `data` of `GET all/menus/{placement}`.
#[derive(Debug, Deserialize)]
pub struct MenusData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub menus: Vec<MenuItem>,
}

/// Decodes a list that may be sent as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
