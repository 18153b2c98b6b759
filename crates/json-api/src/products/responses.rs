//! Product response bodies.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::domain::products::records::{
    ProductImageRecord, ProductLinkRecord, ProductRecord, ProductSpecificationRecord,
};

use crate::products::requests::ProductStatusBody;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductImageResponse {
    pub url: String,
    pub label: String,

    /// Zero-based display position
    pub order: u32,
}

impl From<ProductImageRecord> for ProductImageResponse {
    fn from(image: ProductImageRecord) -> Self {
        ProductImageResponse {
            url: image.url,
            label: image.label,
            order: image.order,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductLinkResponse {
    pub title: String,
    pub url: String,

    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    pub city: String,
    pub warranty: String,
}

impl From<ProductLinkRecord> for ProductLinkResponse {
    fn from(link: ProductLinkRecord) -> Self {
        ProductLinkResponse {
            title: link.title,
            url: link.url,
            price: link.price,
            city: link.city,
            warranty: link.warranty,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductSpecificationResponse {
    pub category: String,
    pub label: String,
    pub value: String,
}

impl From<ProductSpecificationRecord> for ProductSpecificationResponse {
    fn from(spec: ProductSpecificationRecord) -> Self {
        ProductSpecificationResponse {
            category: spec.category,
            label: spec.label,
            value: spec.value,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,
    pub description: String,

    /// Decimal price
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    pub category: String,
    pub status: ProductStatusBody,
    pub meta_tags: Vec<String>,

    /// Profile that created the product
    pub created_by: Uuid,

    /// Full name of the owning profile
    pub owner_name: Option<String>,

    pub images: Vec<ProductImageResponse>,
    pub links: Vec<ProductLinkResponse>,
    pub specifications: Vec<ProductSpecificationResponse>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            status: product.status.into(),
            meta_tags: product.meta_tags.into_vec(),
            created_by: product.created_by.into(),
            owner_name: product.owner_name,
            images: product.images.into_iter().map(Into::into).collect(),
            links: product.links.into_iter().map(Into::into).collect(),
            specifications: product.specifications.into_iter().map(Into::into).collect(),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

impl From<Vec<ProductRecord>> for ProductsResponse {
    fn from(products: Vec<ProductRecord>) -> Self {
        ProductsResponse {
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductIdsResponse {
    pub uuids: Vec<Uuid>,
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    /// Created product UUID
    pub uuid: Uuid,
}
