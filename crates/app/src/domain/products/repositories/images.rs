//! Product Images Repository

use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction, query, query_as};
use uuid::Uuid;

use crate::domain::products::{
    data::{NewProductImage, image_rows},
    records::{ProductImageRecord, ProductUuid},
};

const LIST_PRODUCT_IMAGES_SQL: &str = include_str!("../sql/list_product_images.sql");
const CREATE_PRODUCT_IMAGES_SQL: &str = include_str!("../sql/create_product_images.sql");
const DELETE_PRODUCT_IMAGES_SQL: &str = include_str!("../sql/delete_product_images.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductImagesRepository;

impl PgProductImagesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Images for each of `products`, keyed by product and sorted by `order`.
    pub(crate) async fn list_for_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[Uuid],
    ) -> Result<FxHashMap<ProductUuid, Vec<ProductImageRecord>>, sqlx::Error> {
        let rows: Vec<(Uuid, String, String, i32)> = query_as(LIST_PRODUCT_IMAGES_SQL)
            .bind(products)
            .fetch_all(&mut **tx)
            .await?;

        let mut images: FxHashMap<ProductUuid, Vec<ProductImageRecord>> = FxHashMap::default();

        for (product, url, label, order) in rows {
            let order = u32::try_from(order).map_err(|error| sqlx::Error::ColumnDecode {
                index: "order".to_string(),
                source: Box::new(error),
            })?;

            images
                .entry(ProductUuid::from_uuid(product))
                .or_default()
                .push(ProductImageRecord { url, label, order });
        }

        Ok(images)
    }

    pub(crate) async fn create_images(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        images: &[NewProductImage],
    ) -> Result<(), sqlx::Error> {
        if images.is_empty() {
            return Ok(());
        }

        let (urls, labels, orders) = image_rows(images);

        query(CREATE_PRODUCT_IMAGES_SQL)
            .bind(product.into_uuid())
            .bind(urls)
            .bind(labels)
            .bind(orders)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_images(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_IMAGES_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
