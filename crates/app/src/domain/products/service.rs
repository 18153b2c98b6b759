//! Products service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{Span, info};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        products::{
            data::{NewProduct, ProductDetails, ProductUpdate},
            errors::ProductsServiceError,
            records::{ProductRecord, ProductUuid},
            repositories::{
                PgProductImagesRepository, PgProductLinksRepository,
                PgProductSpecificationsRepository, PgProductsRepository, ProductRow,
            },
        },
        profiles::records::ProfileUuid,
    },
};

/// Number of related products returned when the caller does not ask for a
/// specific amount.
pub const DEFAULT_RELATED_LIMIT: u32 = 4;

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    products: PgProductsRepository,
    images: PgProductImagesRepository,
    links: PgProductLinksRepository,
    specifications: PgProductSpecificationsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            images: PgProductImagesRepository::new(),
            links: PgProductLinksRepository::new(),
            specifications: PgProductSpecificationsRepository::new(),
        }
    }

    /// Attach images, links and specifications to each row, keeping row order.
    async fn assemble(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        rows: Vec<ProductRow>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = rows.iter().map(|row| row.uuid.into_uuid()).collect();

        let mut images = self.images.list_for_products(tx, &uuids).await?;
        let mut links = self.links.list_for_products(tx, &uuids).await?;
        let mut specifications = self.specifications.list_for_products(tx, &uuids).await?;

        Ok(rows
            .into_iter()
            .map(|row| ProductRecord {
                images: images.remove(&row.uuid).unwrap_or_default(),
                links: links.remove(&row.uuid).unwrap_or_default(),
                specifications: specifications.remove(&row.uuid).unwrap_or_default(),
                uuid: row.uuid,
                name: row.name,
                description: row.description,
                price: row.price,
                category: row.category,
                status: row.status,
                meta_tags: row.meta_tags,
                created_by: row.created_by,
                owner_name: row.owner_name,
                created_at: row.created_at,
                updated_at: row.updated_at,
            })
            .collect())
    }

    async fn load_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let row = self.products.get_product(tx, product).await?;

        self.assemble(tx, vec![row])
            .await?
            .pop()
            .ok_or(ProductsServiceError::NotFound)
    }

    /// Insert every child set of `product` from `details`.
    async fn insert_children(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        details: &ProductDetails,
    ) -> Result<(), ProductsServiceError> {
        self.links.create_links(tx, product, &details.links).await?;
        self.images
            .create_images(tx, product, &details.images)
            .await?;
        self.specifications
            .create_specifications(tx, product, &details.specifications)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    #[tracing::instrument(name = "products.service.get_product", skip(self), err)]
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.load_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    #[tracing::instrument(name = "products.service.list_product_ids", skip(self), err)]
    async fn list_product_ids(&self) -> Result<Vec<ProductUuid>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let ids = self.products.list_product_ids(&mut tx).await?;

        tx.commit().await?;

        Ok(ids)
    }

    #[tracing::instrument(name = "products.service.list_products", skip(self), err)]
    async fn list_products(
        &self,
        category: Option<String>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows = self
            .products
            .list_products(&mut tx, category.as_deref())
            .await?;

        let products = self.assemble(&mut tx, rows).await?;

        tx.commit().await?;

        Ok(products)
    }

    #[tracing::instrument(
        name = "products.service.list_related_products",
        skip(self),
        fields(returned = tracing::field::Empty),
        err
    )]
    async fn list_related_products(
        &self,
        product: ProductUuid,
        limit: u32,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let source = self.products.get_product(&mut tx, product).await?;

        let rows = self
            .products
            .list_related_products(&mut tx, &source.category, product, i64::from(limit))
            .await?;

        let related = self.assemble(&mut tx, rows).await?;

        tx.commit().await?;

        Span::current().record("returned", related.len());

        Ok(related)
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, product),
        fields(
            product_uuid = %product.uuid,
            image_count = product.details.images.len(),
            link_count = product.details.links.len(),
            specification_count = product.details.specifications.len()
        ),
        err
    )]
    async fn create_product(
        &self,
        actor: Option<ProfileUuid>,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let actor = actor.ok_or(ProductsServiceError::AuthRequired)?;

        let mut tx = self.db.begin_transaction().await?;

        self.products
            .create_product(&mut tx, product.uuid, actor, &product.details)
            .await?;

        self.insert_children(&mut tx, product.uuid, &product.details)
            .await?;

        let created = self.load_product(&mut tx, product.uuid).await?;

        tx.commit().await?;

        info!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, update),
        fields(
            image_count = update.images.len(),
            link_count = update.links.len(),
            specification_count = update.specifications.len()
        ),
        err
    )]
    async fn update_product(
        &self,
        actor: Option<ProfileUuid>,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        actor.ok_or(ProductsServiceError::AuthRequired)?;

        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .products
            .update_product(&mut tx, product, &update)
            .await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        self.links.delete_links(&mut tx, product).await?;
        self.images.delete_images(&mut tx, product).await?;
        self.specifications
            .delete_specifications(&mut tx, product)
            .await?;

        self.insert_children(&mut tx, product, &update).await?;

        let updated = self.load_product(&mut tx, product).await?;

        tx.commit().await?;

        info!(product_uuid = %updated.uuid, "updated product");

        Ok(updated)
    }

    #[tracing::instrument(name = "products.service.delete_product", skip(self), err)]
    async fn delete_product(
        &self,
        actor: Option<ProfileUuid>,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError> {
        actor.ok_or(ProductsServiceError::AuthRequired)?;

        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.products.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(product_uuid = %product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieve a single product with its images, links and specifications.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieve every product identifier, oldest first.
    async fn list_product_ids(&self) -> Result<Vec<ProductUuid>, ProductsServiceError>;

    /// Retrieve all products, optionally restricted to one category.
    async fn list_products(
        &self,
        category: Option<String>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve up to `limit` other products sharing `product`'s category.
    async fn list_related_products(
        &self,
        product: ProductUuid,
        limit: u32,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Create a product and its child rows in one transaction, owned by `actor`.
    async fn create_product(
        &self,
        actor: Option<ProfileUuid>,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Replace a product's fields and child rows in one transaction.
    async fn update_product(
        &self,
        actor: Option<ProfileUuid>,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Delete a product. Child rows go with it.
    async fn delete_product(
        &self,
        actor: Option<ProfileUuid>,
        product: ProductUuid,
    ) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use smallvec::smallvec;
    use sqlx::query_scalar;
    use testresult::TestResult;

    use crate::{
        domain::products::{
            data::{NewProductImage, NewProductLink, NewProductSpecification},
            records::{ProductImageRecord, ProductLinkRecord, ProductSpecificationRecord, ProductStatus},
        },
        test::{TestContext, helpers::product_details},
    };

    use super::*;

    async fn count_rows(ctx: &TestContext, table: &str) -> TestResult<i64> {
        let count = query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(ctx.db.pool())
            .await?;

        Ok(count)
    }

    #[tokio::test]
    async fn create_product_strips_image_slash_and_reindexes_order() -> TestResult {
        let ctx = TestContext::new().await;

        let mut details = product_details("Lamp", "lighting");
        details.images = vec![NewProductImage {
            url: "/a.png".to_string(),
            label: "front".to_string(),
        }];

        let created = ctx
            .products
            .create_product(
                Some(ctx.actor),
                NewProduct {
                    uuid: ProductUuid::new(),
                    details,
                },
            )
            .await?;

        assert_eq!(
            created.images,
            vec![ProductImageRecord {
                url: "a.png".to_string(),
                label: "front".to_string(),
                order: 0,
            }]
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_then_get_returns_transformed_children() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let mut details = product_details("Desk", "furniture");
        details.meta_tags = smallvec!["oak".to_string(), "standing".to_string()];
        details.images = vec![
            NewProductImage {
                url: "/front.png".to_string(),
                label: "front".to_string(),
            },
            NewProductImage {
                url: "side.png".to_string(),
                label: "side".to_string(),
            },
        ];
        details.links = vec![
            NewProductLink {
                title: "Store A".to_string(),
                url: "https://a.example".to_string(),
                price: Some(json!("199.90")),
                city: Some("Lisbon".to_string()),
                warranty: None,
            },
            NewProductLink {
                title: "Store B".to_string(),
                url: "https://b.example".to_string(),
                price: Some(json!("n/a")),
                city: None,
                warranty: Some("2 years".to_string()),
            },
        ];
        details.specifications = vec![NewProductSpecification {
            category: "Dimensions".to_string(),
            label: "Width".to_string(),
            value: "120cm".to_string(),
        }];

        ctx.products
            .create_product(Some(ctx.actor), NewProduct { uuid, details })
            .await?;

        let product = ctx.products.get_product(uuid).await?;

        assert_eq!(product.name, "Desk");
        assert_eq!(product.created_by, ctx.actor);
        assert_eq!(product.owner_name.as_deref(), Some("Test Operator"));
        assert_eq!(product.meta_tags.as_slice(), ["oak", "standing"]);
        assert_eq!(
            product
                .images
                .iter()
                .map(|image| (image.url.as_str(), image.order))
                .collect::<Vec<_>>(),
            vec![("front.png", 0), ("side.png", 1)]
        );
        assert_eq!(
            product.links,
            vec![
                ProductLinkRecord {
                    title: "Store A".to_string(),
                    url: "https://a.example".to_string(),
                    price: Decimal::new(19990, 2),
                    city: "Lisbon".to_string(),
                    warranty: String::new(),
                },
                ProductLinkRecord {
                    title: "Store B".to_string(),
                    url: "https://b.example".to_string(),
                    price: Decimal::ZERO,
                    city: String::new(),
                    warranty: "2 years".to_string(),
                },
            ]
        );
        assert_eq!(
            product.specifications,
            vec![ProductSpecificationRecord {
                category: "Dimensions".to_string(),
                label: "Width".to_string(),
                value: "120cm".to_string(),
            }]
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_without_actor_returns_auth_required_and_writes_nothing() -> TestResult
    {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(
                None,
                NewProduct {
                    uuid: ProductUuid::new(),
                    details: product_details("Chair", "furniture"),
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AuthRequired)),
            "expected AuthRequired, got {result:?}"
        );

        for table in [
            "products",
            "product_images",
            "product_links",
            "product_specifications",
        ] {
            assert_eq!(count_rows(&ctx, table).await?, 0, "{table} should be empty");
        }

        Ok(())
    }

    #[tokio::test]
    async fn create_product_negative_price_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let mut details = product_details("Chair", "furniture");
        details.price = Decimal::new(-1, 0);

        let result = ctx
            .products
            .create_product(
                Some(ctx.actor),
                NewProduct {
                    uuid: ProductUuid::new(),
                    details,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_product_price_beyond_column_returns_invalid_data() -> TestResult {
        let ctx = TestContext::new().await;

        let mut details = product_details("Chair", "furniture");
        details.price = Decimal::new(1_000_000_000_000, 0);

        let result = ctx
            .products
            .create_product(
                Some(ctx.actor),
                NewProduct {
                    uuid: ProductUuid::new(),
                    details,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
        assert_eq!(count_rows(&ctx, "products").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_oversized_link_price_is_stored_as_zero() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let mut details = product_details("Chair", "furniture");
        details.links = vec![
            NewProductLink {
                title: "Store A".to_string(),
                url: "https://a.example".to_string(),
                price: Some(json!(1e12)),
                city: None,
                warranty: None,
            },
            NewProductLink {
                title: "Store B".to_string(),
                url: "https://b.example".to_string(),
                price: Some(json!("9999999999.99")),
                city: None,
                warranty: None,
            },
        ];

        ctx.products
            .create_product(Some(ctx.actor), NewProduct { uuid, details })
            .await?;

        let product = ctx.products.get_product(uuid).await?;

        assert_eq!(
            product
                .links
                .iter()
                .map(|link| link.price)
                .collect::<Vec<_>>(),
            vec![Decimal::ZERO, Decimal::new(999_999_999_999, 2)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_failing_child_insert_rolls_back_every_step() -> TestResult {
        let ctx = TestContext::new().await;

        let mut details = product_details("Chair", "furniture");
        details.images = vec![NewProductImage {
            url: "x.png".to_string(),
            label: String::new(),
        }];
        details.specifications = vec![NewProductSpecification {
            category: "Material".to_string(),
            label: "Seat".to_string(),
            value: "nul\0byte".to_string(),
        }];

        let result = ctx
            .products
            .create_product(
                Some(ctx.actor),
                NewProduct {
                    uuid: ProductUuid::new(),
                    details,
                },
            )
            .await;

        assert!(result.is_err(), "expected failure, got {result:?}");

        for table in ["products", "product_images", "product_specifications"] {
            assert_eq!(count_rows(&ctx, table).await?, 0, "{table} should be empty");
        }

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ctx.create_product("Chair", "furniture").await?;

        let result = ctx
            .products
            .create_product(
                Some(ctx.actor),
                NewProduct {
                    uuid,
                    details: product_details("Chair again", "furniture"),
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );
        assert_eq!(count_rows(&ctx, "products").await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_unknown_actor_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(
                Some(ProfileUuid::new()),
                NewProduct {
                    uuid: ProductUuid::new(),
                    details: product_details("Chair", "furniture"),
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_related_products_returns_other_members_of_category() -> TestResult {
        let ctx = TestContext::new().await;

        let source = ctx.create_product("Sofa", "furniture").await?;
        let first = ctx.create_product("Table", "furniture").await?;
        let second = ctx.create_product("Shelf", "furniture").await?;
        ctx.create_product("Bulb", "lighting").await?;

        let related = ctx
            .products
            .list_related_products(source, DEFAULT_RELATED_LIMIT)
            .await?;

        let uuids: Vec<ProductUuid> = related.iter().map(|product| product.uuid).collect();

        assert_eq!(uuids, vec![first, second]);

        Ok(())
    }

    #[tokio::test]
    async fn list_related_products_respects_limit() -> TestResult {
        let ctx = TestContext::new().await;

        let source = ctx.create_product("Sofa", "furniture").await?;

        for name in ["A", "B", "C"] {
            ctx.create_product(name, "furniture").await?;
        }

        let related = ctx.products.list_related_products(source, 2).await?;

        assert_eq!(related.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn list_related_products_unknown_source_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .list_related_products(ProductUuid::new(), DEFAULT_RELATED_LIMIT)
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_filters_by_category() -> TestResult {
        let ctx = TestContext::new().await;

        let lamp = ctx.create_product("Lamp", "lighting").await?;
        ctx.create_product("Sofa", "furniture").await?;

        let all = ctx.products.list_products(None).await?;
        let lighting = ctx
            .products
            .list_products(Some("lighting".to_string()))
            .await?;

        assert_eq!(all.len(), 2);
        assert_eq!(
            lighting.iter().map(|p| p.uuid).collect::<Vec<_>>(),
            vec![lamp]
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_product_ids_returns_creation_order() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx.create_product("One", "misc").await?;
        let second = ctx.create_product("Two", "misc").await?;

        assert_eq!(ctx.products.list_product_ids().await?, vec![first, second]);

        Ok(())
    }

    #[tokio::test]
    async fn list_product_ids_empty_store_returns_empty() -> TestResult {
        let ctx = TestContext::new().await;

        assert!(ctx.products.list_product_ids().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn update_product_replaces_children_including_specifications() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let mut details = product_details("Desk", "furniture");
        details.images = vec![NewProductImage {
            url: "old.png".to_string(),
            label: "old".to_string(),
        }];
        details.specifications = vec![NewProductSpecification {
            category: "Size".to_string(),
            label: "Width".to_string(),
            value: "100cm".to_string(),
        }];

        ctx.products
            .create_product(Some(ctx.actor), NewProduct { uuid, details })
            .await?;

        let mut update = product_details("Desk v2", "office");
        update.status = ProductStatus::OutOfStock;
        update.price = Decimal::new(4999, 2);
        update.images = vec![NewProductImage {
            url: "/new.png".to_string(),
            label: "new".to_string(),
        }];
        update.specifications = vec![NewProductSpecification {
            category: "Size".to_string(),
            label: "Width".to_string(),
            value: "140cm".to_string(),
        }];

        let updated = ctx
            .products
            .update_product(Some(ctx.actor), uuid, update)
            .await?;

        assert_eq!(updated.name, "Desk v2");
        assert_eq!(updated.category, "office");
        assert_eq!(updated.status, ProductStatus::OutOfStock);
        assert_eq!(updated.price, Decimal::new(4999, 2));
        assert_eq!(updated.images.len(), 1);
        assert_eq!(updated.images[0].url, "new.png");
        assert_eq!(updated.specifications.len(), 1);
        assert_eq!(updated.specifications[0].value, "140cm");

        Ok(())
    }

    #[tokio::test]
    async fn update_product_twice_with_same_payload_is_idempotent() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ctx.create_product("Desk", "furniture").await?;

        let mut update = product_details("Desk", "furniture");
        update.images = vec![
            NewProductImage {
                url: "/a.png".to_string(),
                label: "a".to_string(),
            },
            NewProductImage {
                url: "/b.png".to_string(),
                label: "b".to_string(),
            },
        ];
        update.links = vec![NewProductLink {
            title: "Store".to_string(),
            url: "https://store.example".to_string(),
            price: Some(json!(10)),
            city: None,
            warranty: None,
        }];

        let first = ctx
            .products
            .update_product(Some(ctx.actor), uuid, update.clone())
            .await?;
        let second = ctx
            .products
            .update_product(Some(ctx.actor), uuid, update)
            .await?;

        assert_eq!(first.images, second.images);
        assert_eq!(first.links, second.links);
        assert_eq!(count_rows(&ctx, "product_images").await?, 2);
        assert_eq!(count_rows(&ctx, "product_links").await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .update_product(
                Some(ctx.actor),
                ProductUuid::new(),
                product_details("Ghost", "none"),
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_product_without_actor_returns_auth_required() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ctx.create_product("Desk", "furniture").await?;

        let result = ctx
            .products
            .update_product(None, uuid, product_details("Changed", "furniture"))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AuthRequired)),
            "expected AuthRequired, got {result:?}"
        );
        assert_eq!(ctx.products.get_product(uuid).await?.name, "Desk");

        Ok(())
    }

    #[tokio::test]
    async fn update_product_failure_keeps_previous_children() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let mut details = product_details("Desk", "furniture");
        details.images = vec![NewProductImage {
            url: "keep.png".to_string(),
            label: "keep".to_string(),
        }];

        ctx.products
            .create_product(Some(ctx.actor), NewProduct { uuid, details })
            .await?;

        let mut update = product_details("Desk", "furniture");
        update.price = Decimal::new(-5, 0);

        let result = ctx
            .products
            .update_product(Some(ctx.actor), uuid, update)
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );

        let product = ctx.products.get_product(uuid).await?;

        assert_eq!(product.images.len(), 1);
        assert_eq!(product.images[0].url, "keep.png");

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_removes_children() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let mut details = product_details("Desk", "furniture");
        details.images = vec![NewProductImage {
            url: "a.png".to_string(),
            label: String::new(),
        }];

        ctx.products
            .create_product(Some(ctx.actor), NewProduct { uuid, details })
            .await?;

        ctx.products.delete_product(Some(ctx.actor), uuid).await?;

        assert!(matches!(
            ctx.products.get_product(uuid).await,
            Err(ProductsServiceError::NotFound)
        ));
        assert_eq!(count_rows(&ctx, "product_images").await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .delete_product(Some(ctx.actor), ProductUuid::new())
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
