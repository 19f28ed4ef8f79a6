//! Read-only selection queries over a [`VariantIndex`].
//!
//! Nothing here errors: missing attributes and empty lists degrade to empty,
//! zero, or `None` results so a partially populated product never breaks the
//! product page. When several variants match the same design and size, the
//! first one in list order wins.

use std::collections::HashSet;

use super::{Variant, VariantId, VariantIndex, DESIGN_ATTRIBUTE};

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a VariantIndex,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(index: &'a VariantIndex) -> Self {
        Self { index }
    }

    /// Distinct design values in first-seen order.
    #[must_use]
    pub fn unique_designs(&self) -> Vec<&'a str> {
        dedup_first_seen(
            self.index
                .variants()
                .iter()
                .filter_map(Variant::design),
        )
    }

    /// Distinct sizes that can still be bought in `design`, first-seen order.
    ///
    /// Variants with zero stock are excluded, so a size backed only by
    /// sold-out variants is never offered.
    #[must_use]
    pub fn available_sizes_for_design(&self, design: &str) -> Vec<&'a str> {
        let size_attr = self.index.size_attribute().as_str();
        dedup_first_seen(
            self.index
                .variants()
                .iter()
                .filter(|v| v.has_attribute(DESIGN_ATTRIBUTE, design) && v.is_in_stock())
                .filter_map(|v| v.attribute_value(size_attr)),
        )
    }

    /// Stock of the variant matching `design` and `size`, or `0` when no
    /// variant matches.
    #[must_use]
    pub fn max_quantity_for_design_and_size(&self, design: &str, size: &str) -> u32 {
        self.first_match(design, size).map_or(0, |v| v.quantity)
    }

    /// Identifier of the variant matching `design` and `size`.
    #[must_use]
    pub fn find_variety(&self, design: &str, size: &str) -> Option<VariantId> {
        self.first_match(design, size).map(|v| v.id)
    }

    /// First variant whose size attribute equals `size` and whose design
    /// equals `design`. Stock is not considered.
    #[must_use]
    pub fn first_match(&self, design: &str, size: &str) -> Option<&'a Variant> {
        let size_attr = self.index.size_attribute().as_str();
        self.index.variants().iter().find(|v| {
            v.has_attribute(size_attr, size) && v.has_attribute(DESIGN_ATTRIBUTE, design)
        })
    }
}

fn dedup_first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values
        .filter(|value| !value.is_empty() && seen.insert(*value))
        .collect()
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
