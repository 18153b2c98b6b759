//! Product request bodies.

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use vitrine_app::domain::products::{
    data::{
        NewProduct, NewProductImage, NewProductLink, NewProductSpecification, ProductDetails,
    },
    records::{ProductStatus, ProductUuid},
};

/// Stock status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ProductStatusBody {
    #[default]
    InStock,
    OutOfStock,
}

impl From<ProductStatusBody> for ProductStatus {
    fn from(status: ProductStatusBody) -> Self {
        match status {
            ProductStatusBody::InStock => ProductStatus::InStock,
            ProductStatusBody::OutOfStock => ProductStatus::OutOfStock,
        }
    }
}

impl From<ProductStatus> for ProductStatusBody {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::InStock => ProductStatusBody::InStock,
            ProductStatus::OutOfStock => ProductStatusBody::OutOfStock,
        }
    }
}

/// Product image.
///
/// Display order is the image's position in the list; an `order` field
/// sent by the caller is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductImageRequest {
    /// Image URL. A single leading `/` is removed.
    pub url: String,

    #[serde(default)]
    pub label: String,
}

/// Where to buy the product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductLinkRequest {
    pub title: String,
    pub url: String,

    /// Number or numeric string. Missing, negative or unparsable prices
    /// are stored as 0.
    #[serde(default)]
    pub price: Option<Value>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub warranty: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductSpecificationRequest {
    pub category: String,
    pub label: String,
    pub value: String,
}

/// Product fields shared by create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Decimal price, e.g. `"19.99"`
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    pub category: String,

    #[serde(default)]
    pub status: ProductStatusBody,

    #[serde(default)]
    pub meta_tags: Vec<String>,

    #[serde(default)]
    pub images: Vec<ProductImageRequest>,

    #[serde(default)]
    pub links: Vec<ProductLinkRequest>,

    #[serde(default)]
    pub specifications: Vec<ProductSpecificationRequest>,
}

impl From<ProductRequest> for ProductDetails {
    fn from(request: ProductRequest) -> Self {
        ProductDetails {
            name: request.name,
            description: request.description,
            price: request.price,
            category: request.category,
            status: request.status.into(),
            meta_tags: request.meta_tags.into_iter().collect(),
            images: request
                .images
                .into_iter()
                .map(|image| NewProductImage {
                    url: image.url,
                    label: image.label,
                })
                .collect(),
            links: request
                .links
                .into_iter()
                .map(|link| NewProductLink {
                    title: link.title,
                    url: link.url,
                    price: link.price,
                    city: link.city,
                    warranty: link.warranty,
                })
                .collect(),
            specifications: request
                .specifications
                .into_iter()
                .map(|spec| NewProductSpecification {
                    category: spec.category,
                    label: spec.label,
                    value: spec.value,
                })
                .collect(),
        }
    }
}

/// Create Product Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Client-chosen identifier; generated when omitted.
    #[serde(default)]
    pub uuid: Option<Uuid>,

    #[serde(flatten)]
    pub product: ProductRequest,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            uuid: request.uuid.map_or_else(ProductUuid::new, ProductUuid::from_uuid),
            details: request.product.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn create_request_fills_defaults() -> TestResult {
        let uuid = Uuid::now_v7();

        let request: CreateProductRequest = serde_json::from_value(json!({
            "uuid": uuid,
            "name": "Lamp",
            "price": "12.50",
            "category": "lighting",
            "images": [{ "url": "/lamp.png", "order": 9 }],
        }))?;

        let product = NewProduct::from(request);

        assert_eq!(product.uuid.into_uuid(), uuid);
        assert_eq!(product.details.description, "");
        assert_eq!(product.details.status, ProductStatus::InStock);
        assert_eq!(product.details.price, Decimal::new(1250, 2));
        assert_eq!(product.details.images.len(), 1);
        assert!(product.details.links.is_empty());

        Ok(())
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed = serde_json::from_value::<ProductRequest>(json!({
            "name": "Lamp",
            "price": "1",
            "category": "lighting",
            "status": "discontinued",
        }));

        assert!(parsed.is_err());
    }
}
