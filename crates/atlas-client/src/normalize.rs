//! Normalization from storefront wire types to `atlas_core` domain types.

use atlas_core::{
    Attribute, ColorRange, ListingPage, PageBounds, PriceRange, ProductDetail, ProductImage,
    ProductSummary, Variant, VariantId,
};
use rust_decimal::Decimal;

use crate::types::{
    AttributeWire, ColorRangeWire, ImageWire, JsonScalar, ListingData, PaginatedWire,
    ProductWire, RawAttribute, RawVariety, VarietyWire,
};

/// Normalizes a raw [`ProductWire`] and its related products into a
/// [`ProductDetail`].
///
/// Never fails: missing prices become zero, missing lists become empty,
/// malformed varieties are skipped, and attributes without a name or a
/// scalar value are dropped.
#[must_use]
pub fn normalize_product(product: ProductWire, related: Vec<ProductSummary>) -> ProductDetail {
    let product_id = product.id;
    let varieties = product
        .varieties
        .into_iter()
        .filter_map(|v| normalize_variety(v, product_id))
        .collect();
    let total_quantity = product.total_quantity.map_or(0, scalar_to_quantity);

    ProductDetail {
        id: product.id,
        title: product.title.unwrap_or_default(),
        images: product
            .images
            .into_iter()
            .filter_map(normalize_image)
            .collect(),
        price: product.price.unwrap_or_default(),
        discount_percent: product.discount.unwrap_or_default(),
        discount_until: product.discount_until.filter(|s| !s.is_empty()),
        total_quantity: clamp_quantity(total_quantity, product_id, None),
        status: product.status.unwrap_or_default(),
        size_charts: product.size_charts,
        specifications: product.specifications,
        varieties,
        categories: product.categories,
        related_products: related,
    }
}

/// `None` when the entry is not a variety object with an integer `id`.
fn normalize_variety(raw: RawVariety, product_id: i64) -> Option<Variant> {
    let variety: VarietyWire = match serde_json::from_value(raw) {
        Ok(variety) => variety,
        Err(e) => {
            tracing::warn!(product_id, error = %e, "skipping malformed variety");
            return None;
        }
    };

    let attributes = variety
        .attributes
        .into_iter()
        .filter_map(|attr| normalize_attribute(attr, product_id, variety.id))
        .collect();
    let quantity = variety.quantity.map_or(0, scalar_to_quantity);

    Some(Variant {
        id: VariantId(variety.id),
        quantity: clamp_quantity(quantity, product_id, Some(variety.id)),
        attributes,
    })
}

fn normalize_attribute(raw: RawAttribute, product_id: i64, variety_id: i64) -> Option<Attribute> {
    let attr: AttributeWire = match serde_json::from_value(raw) {
        Ok(attr) => attr,
        Err(e) => {
            tracing::warn!(product_id, variety_id, error = %e, "skipping malformed attribute");
            return None;
        }
    };
    let name = attr.name.filter(|n| !n.is_empty())?;
    let value = attr.pivot.and_then(|p| p.value)?;
    Some(Attribute::new(name, scalar_to_string(value)))
}

/// Stock count from an integer, float, or numeric string. Anything else is 0.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn scalar_to_quantity(value: JsonScalar) -> i64 {
    match value {
        JsonScalar::Int(n) => n,
        JsonScalar::Float(f) if f.is_finite() => f.trunc() as i64,
        JsonScalar::Text(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| scalar_to_quantity(JsonScalar::Float(f))))
                .unwrap_or(0)
        }
        JsonScalar::Float(_) | JsonScalar::Bool(_) => 0,
    }
}

fn normalize_image(image: ImageWire) -> Option<ProductImage> {
    match image {
        ImageWire::Url(url) if !url.is_empty() => Some(ProductImage { id: None, url }),
        ImageWire::Url(_) => None,
        ImageWire::Object { id, url, path } => url
            .or(path)
            .filter(|u| !u.is_empty())
            .map(|url| ProductImage { id, url }),
    }
}

fn clamp_quantity(raw: i64, product_id: i64, variety_id: Option<i64>) -> u32 {
    if raw < 0 {
        tracing::warn!(
            product_id,
            variety_id,
            quantity = raw,
            "negative stock quantity from API, treating as 0"
        );
        return 0;
    }
    u32::try_from(raw).unwrap_or(u32::MAX)
}

/// Renders an attribute value as the string the UI compares against.
///
/// Whole floats lose their fractional part (`42.0` → `"42"`) so numeric
/// sizes match however the API happened to encode them.
pub(crate) fn scalar_to_string(value: JsonScalar) -> String {
    match value {
        JsonScalar::Int(n) => n.to_string(),
        JsonScalar::Float(f) if f.is_finite() && f.fract().abs() < f64::EPSILON && f.abs() < 1e15 => {
            format!("{f:.0}")
        }
        JsonScalar::Float(f) => f.to_string(),
        JsonScalar::Text(s) => s,
        JsonScalar::Bool(b) => b.to_string(),
    }
}

/// Fills in display defaults: `value` falls back to `hex` then `title`, and
/// missing `gradient`/`image` become empty strings.
#[must_use]
pub fn normalize_color_range(color: ColorRangeWire) -> ColorRange {
    let title = color.title.unwrap_or_default();
    let value = [color.value.as_deref(), color.hex.as_deref(), Some(title.as_str())]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .to_string();

    ColorRange {
        id: color.id,
        value,
        hex: color.hex,
        gradient: color.gradient.unwrap_or_default(),
        image: color.image.unwrap_or_default(),
        title,
    }
}

/// Converts a `front/products` payload into a [`ListingPage`].
///
/// Missing paginator fields default to a single page 1; a missing price
/// filter defaults to `0..0`.
#[must_use]
pub fn normalize_listing(data: ListingData) -> ListingPage {
    let price_range = data
        .price_filter
        .map(|p| PriceRange {
            min: p.min_price.unwrap_or(Decimal::ZERO),
            max: p.max_price.unwrap_or(Decimal::ZERO),
        })
        .unwrap_or_default();

    let (products, bounds) = match data.products {
        Some(page) => paginated_bounds(page),
        None => (Vec::new(), PageBounds::default()),
    };

    ListingPage {
        products,
        bounds,
        price_range,
        sizes: data.attributes.map(|a| a.values).unwrap_or_default(),
    }
}

fn paginated_bounds<T>(page: PaginatedWire<T>) -> (Vec<T>, PageBounds) {
    let last = page.last_page.unwrap_or(1).max(1);
    let bounds = PageBounds {
        first: 1,
        last,
        current: page.current_page.unwrap_or(1),
    };
    (page.data, bounds)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
