use super::{Resolver, SizeAttribute, Variant};

/// The variant list of the currently loaded product.
///
/// Owned by the product-detail store; replaced in full on every product
/// load and cleared on reset. The size attribute name is resolved once per
/// load from the first variant and reused for every query until the next
/// load, so per-variant naming differences can never mix within one
/// generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantIndex {
    variants: Vec<Variant>,
    size_attribute: SizeAttribute,
}

impl VariantIndex {
    #[must_use]
    pub fn new(variants: Vec<Variant>) -> Self {
        let size_attribute = resolve_size_attribute(&variants);
        Self {
            variants,
            size_attribute,
        }
    }

    /// Replaces the held variants. An empty list is accepted and makes every
    /// query return an empty result.
    pub fn load(&mut self, variants: Vec<Variant>) {
        *self = Self::new(variants);
    }

    pub fn clear(&mut self) {
        self.variants.clear();
        self.size_attribute = SizeAttribute::default();
    }

    /// Size attribute name resolved for this load.
    #[must_use]
    pub fn size_attribute(&self) -> SizeAttribute {
        self.size_attribute
    }

    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    #[must_use]
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }
}

impl From<Vec<Variant>> for VariantIndex {
    fn from(variants: Vec<Variant>) -> Self {
        Self::new(variants)
    }
}

/// Inspects only the first variant. Candidates are tried in
/// [`SizeAttribute::ALL`] order, not the variant's attribute order.
fn resolve_size_attribute(variants: &[Variant]) -> SizeAttribute {
    let Some(first) = variants.first() else {
        return SizeAttribute::default();
    };
    SizeAttribute::ALL
        .into_iter()
        .find(|candidate| first.attributes.iter().any(|a| a.name == candidate.as_str()))
        .unwrap_or_default()
}
