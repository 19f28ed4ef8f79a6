pub mod api;
pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use api::CatalogApi;
pub use client::StorefrontClient;
pub use error::ClientError;
pub use normalize::normalize_product;
