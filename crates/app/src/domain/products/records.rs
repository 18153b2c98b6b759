//! Product Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{domain::profiles::records::ProfileUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Meta tags rarely exceed a handful per product.
pub type MetaTags = SmallVec<[String; 3]>;

/// Stock status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    InStock,
    OutOfStock,
}

impl ProductStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown product status `{0}`")]
pub struct UnknownProductStatus(pub String);

impl FromStr for ProductStatus {
    type Err = UnknownProductStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "in_stock" => Ok(Self::InStock),
            "out_of_stock" => Ok(Self::OutOfStock),
            other => Err(UnknownProductStatus(other.to_string())),
        }
    }
}

/// Product Record
///
/// A product together with its images, links and specifications.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub status: ProductStatus,
    pub meta_tags: MetaTags,
    pub created_by: ProfileUuid,

    /// Full name of the owning profile.
    pub owner_name: Option<String>,

    /// Ordered by `order`, ascending.
    pub images: Vec<ProductImageRecord>,
    pub links: Vec<ProductLinkRecord>,
    pub specifications: Vec<ProductSpecificationRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Product Image Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductImageRecord {
    pub url: String,
    pub label: String,
    pub order: u32,
}

/// Product Link Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLinkRecord {
    pub title: String,
    pub url: String,
    pub price: Decimal,
    pub city: String,
    pub warranty: String,
}

/// Product Specification Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSpecificationRecord {
    pub category: String,
    pub label: String,
    pub value: String,
}
