//! Products Data
//!
//! Caller-supplied product payloads. Normalisation of child rows (image URLs,
//! image ordering, link prices) happens here so every entry point stores the
//! same shape.

use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde_json::Value;

use crate::domain::products::records::{MetaTags, ProductStatus, ProductUuid};

/// Scalar fields and child sets shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub status: ProductStatus,
    pub meta_tags: MetaTags,
    pub images: Vec<NewProductImage>,
    pub links: Vec<NewProductLink>,
    pub specifications: Vec<NewProductSpecification>,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub details: ProductDetails,
}

/// Product Update Data
///
/// Replaces every scalar field and every child set of an existing product.
pub type ProductUpdate = ProductDetails;

/// Image as submitted. Display order comes from the position in
/// [`ProductDetails::images`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductImage {
    pub url: String,
    pub label: String,
}

impl NewProductImage {
    /// URL with a single leading `/` removed.
    #[must_use]
    pub fn normalized_url(&self) -> &str {
        self.url.strip_prefix('/').unwrap_or(&self.url)
    }
}

/// Largest link price a `NUMERIC(12, 2)` column holds: 9999999999.99.
pub const MAX_LINK_PRICE: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, 2);

/// Link as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductLink {
    pub title: String,
    pub url: String,

    /// Raw price: a JSON number or numeric string.
    pub price: Option<Value>,
    pub city: Option<String>,
    pub warranty: Option<String>,
}

impl NewProductLink {
    /// Price coerced to a decimal in `0..=MAX_LINK_PRICE`. Anything absent,
    /// unparsable, non-finite, negative or too large becomes zero.
    #[must_use]
    pub fn normalized_price(&self) -> Decimal {
        let raw = match &self.price {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => coerce_numeric_str(text),
            _ => None,
        };

        raw.filter(|price| price.is_finite() && *price >= 0.0)
            .and_then(Decimal::from_f64)
            .map(|price| price.round_dp(2))
            .filter(|price| *price <= MAX_LINK_PRICE)
            .unwrap_or(Decimal::ZERO)
    }
}

fn coerce_numeric_str(text: &str) -> Option<f64> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Some(0.0);
    }

    trimmed.parse::<f64>().ok()
}

/// Specification as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductSpecification {
    pub category: String,
    pub label: String,
    pub value: String,
}

/// Image rows ready to insert: normalised URL and index-derived order.
pub(crate) fn image_rows(images: &[NewProductImage]) -> (Vec<String>, Vec<String>, Vec<i32>) {
    let mut urls = Vec::with_capacity(images.len());
    let mut labels = Vec::with_capacity(images.len());
    let mut orders = Vec::with_capacity(images.len());

    for (index, image) in (0_i32..).zip(images) {
        urls.push(image.normalized_url().to_string());
        labels.push(image.label.clone());
        orders.push(index);
    }

    (urls, labels, orders)
}
