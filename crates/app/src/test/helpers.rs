//! Test Helpers

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::domain::products::{data::ProductDetails, records::ProductStatus};

/// In-stock product details with no images, links or specifications.
pub(crate) fn product_details(name: &str, category: &str) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        description: format!("{name} description"),
        price: Decimal::new(1999, 2),
        category: category.to_string(),
        status: ProductStatus::InStock,
        meta_tags: SmallVec::new(),
        images: Vec::new(),
        links: Vec::new(),
        specifications: Vec::new(),
    }
}
