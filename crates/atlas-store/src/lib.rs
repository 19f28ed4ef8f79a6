//! State containers behind the storefront pages.
//!
//! Each store owns the data one page (or page section) renders and the
//! loading/error flags around it. Stores talk to the API only through
//! [`atlas_client::CatalogApi`], so they can be driven by in-memory fakes.

pub mod content;
pub mod listing;
pub mod product_detail;

#[cfg(test)]
pub(crate) mod fake;

pub use content::{CategoryStore, HomeSections, MenuStore, PostsStore, Section, SliderStore};
pub use listing::{ListingState, ProductListingStore};
pub use product_detail::{LoadOutcome, ProductDetailStore, ProductState};
