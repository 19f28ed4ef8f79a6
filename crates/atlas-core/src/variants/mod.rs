//! Product variants and the option-resolution engine used on the product
//! detail page.
//!
//! A product's purchasable combinations arrive as a flat list of
//! [`Variant`]s. Each carries named [`Attribute`]s: a design (`tarh`) and a
//! size whose attribute name depends on the product category. The
//! [`VariantIndex`] owns that list for the currently loaded product and
//! resolves the size attribute name once; the [`Resolver`] answers the
//! selection queries the UI asks as the shopper changes design and size.

mod index;
mod resolver;

use serde::{Deserialize, Serialize};

pub use index::VariantIndex;
pub use resolver::Resolver;

/// Attribute name carrying a variant's design.
pub const DESIGN_ATTRIBUTE: &str = "tarh";

/// Stock-keeping variant identifier, used when adding to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub i64);

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named characteristic of a variant, e.g. `tarh = "A"` or `sizeShoes = "42"`.
///
/// Numeric wire values are stored in their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One purchasable combination of product options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    /// Units in stock.
    pub quantity: u32,
    pub attributes: Vec<Attribute>,
}

impl Variant {
    /// Value of the first attribute called `name`, if any.
    #[must_use]
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// `true` if any attribute called `name` has exactly `value`.
    #[must_use]
    pub fn has_attribute(&self, name: &str, value: &str) -> bool {
        self.attributes
            .iter()
            .any(|a| a.name == name && a.value == value)
    }

    #[must_use]
    pub fn design(&self) -> Option<&str> {
        self.attribute_value(DESIGN_ATTRIBUTE)
    }

    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// The attribute name a product uses for its size axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeAttribute {
    #[default]
    Pants,
    Clothes,
    Shoes,
}

impl SizeAttribute {
    /// Candidate names in resolution priority order.
    pub const ALL: [SizeAttribute; 3] = [
        SizeAttribute::Pants,
        SizeAttribute::Clothes,
        SizeAttribute::Shoes,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SizeAttribute::Pants => "sizePants",
            SizeAttribute::Clothes => "sizeClothes",
            SizeAttribute::Shoes => "sizeShoes",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl std::fmt::Display for SizeAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
