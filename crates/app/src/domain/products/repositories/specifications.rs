//! Product Specifications Repository

use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction, query, query_as};
use uuid::Uuid;

use crate::domain::products::{
    data::NewProductSpecification,
    records::{ProductSpecificationRecord, ProductUuid},
};

const LIST_PRODUCT_SPECIFICATIONS_SQL: &str =
    include_str!("../sql/list_product_specifications.sql");
const CREATE_PRODUCT_SPECIFICATIONS_SQL: &str =
    include_str!("../sql/create_product_specifications.sql");
const DELETE_PRODUCT_SPECIFICATIONS_SQL: &str =
    include_str!("../sql/delete_product_specifications.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductSpecificationsRepository;

impl PgProductSpecificationsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_for_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[Uuid],
    ) -> Result<FxHashMap<ProductUuid, Vec<ProductSpecificationRecord>>, sqlx::Error> {
        let rows: Vec<(Uuid, String, String, String)> = query_as(LIST_PRODUCT_SPECIFICATIONS_SQL)
            .bind(products)
            .fetch_all(&mut **tx)
            .await?;

        let mut specifications: FxHashMap<ProductUuid, Vec<ProductSpecificationRecord>> =
            FxHashMap::default();

        for (product, category, label, value) in rows {
            specifications
                .entry(ProductUuid::from_uuid(product))
                .or_default()
                .push(ProductSpecificationRecord {
                    category,
                    label,
                    value,
                });
        }

        Ok(specifications)
    }

    pub(crate) async fn create_specifications(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        specifications: &[NewProductSpecification],
    ) -> Result<(), sqlx::Error> {
        if specifications.is_empty() {
            return Ok(());
        }

        let categories: Vec<&str> = specifications
            .iter()
            .map(|spec| spec.category.as_str())
            .collect();
        let labels: Vec<&str> = specifications
            .iter()
            .map(|spec| spec.label.as_str())
            .collect();
        let values: Vec<&str> = specifications
            .iter()
            .map(|spec| spec.value.as_str())
            .collect();

        query(CREATE_PRODUCT_SPECIFICATIONS_SQL)
            .bind(product.into_uuid())
            .bind(categories)
            .bind(labels)
            .bind(values)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_specifications(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SPECIFICATIONS_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
