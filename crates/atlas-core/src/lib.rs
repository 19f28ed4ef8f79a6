pub mod app_config;
pub mod catalog;
pub mod config;
pub mod content;
pub mod pricing;
pub mod product;
pub mod routes;
pub mod variants;

pub use app_config::{AppConfig, Environment};
pub use catalog::{
    Category, ColorRange, HomeCategory, ListingPage, PageBounds, PriceRange, ProductFilters,
    ProductSummary,
};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use content::{MenuItem, MenuPlacement, Post, PostCategory, PostsFeed, Slide};
pub use pricing::{final_price, format_toman};
pub use product::{ProductDetail, ProductImage};
pub use routes::Route;
pub use variants::{
    Attribute, Resolver, SizeAttribute, Variant, VariantId, VariantIndex, DESIGN_ATTRIBUTE,
};
