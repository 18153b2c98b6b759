//! Products Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    products::{
        data::ProductDetails,
        records::{MetaTags, ProductStatus, ProductUuid},
    },
    profiles::records::ProfileUuid,
};

const GET_PRODUCT_SQL: &str = include_str!("../sql/get_product.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("../sql/list_products.sql");
const LIST_PRODUCT_IDS_SQL: &str = include_str!("../sql/list_product_ids.sql");
const LIST_RELATED_PRODUCTS_SQL: &str = include_str!("../sql/list_related_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("../sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("../sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("../sql/delete_product.sql");

/// Scalar columns of a product row joined with its owner's name.
#[derive(Debug, Clone)]
pub(crate) struct ProductRow {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub status: ProductStatus,
    pub meta_tags: MetaTags,
    pub created_by: ProfileUuid,
    pub owner_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    #[instrument(name = "products.get_product", skip(self, tx), fields(product = %product))]
    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRow, sqlx::Error> {
        query_as::<Postgres, ProductRow>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    #[instrument(
        name = "products.list_products",
        skip(self, tx),
        fields(returned = tracing::field::Empty)
    )]
    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: Option<&str>,
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        let rows = query_as::<Postgres, ProductRow>(LIST_PRODUCTS_SQL)
            .bind(category)
            .fetch_all(&mut **tx)
            .await?;

        tracing::Span::current().record("returned", rows.len());

        Ok(rows)
    }

    #[instrument(name = "products.list_product_ids", skip(self, tx))]
    pub(crate) async fn list_product_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductUuid>, sqlx::Error> {
        let ids: Vec<Uuid> = query_scalar(LIST_PRODUCT_IDS_SQL)
            .fetch_all(&mut **tx)
            .await?;

        Ok(ids.into_iter().map(ProductUuid::from_uuid).collect())
    }

    #[instrument(
        name = "products.list_related_products",
        skip(self, tx),
        fields(source = %source)
    )]
    pub(crate) async fn list_related_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: &str,
        source: ProductUuid,
        limit: i64,
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        query_as::<Postgres, ProductRow>(LIST_RELATED_PRODUCTS_SQL)
            .bind(category)
            .bind(source.into_uuid())
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    #[instrument(name = "products.create_product", skip(self, tx, details), fields(product = %product))]
    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        created_by: ProfileUuid,
        details: &ProductDetails,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&details.name)
            .bind(&details.description)
            .bind(details.price)
            .bind(&details.category)
            .bind(details.status.as_str())
            .bind(details.meta_tags.as_slice())
            .bind(created_by.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Returns the number of rows touched; zero means the product is unknown.
    #[instrument(name = "products.update_product", skip(self, tx, details), fields(product = %product))]
    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        details: &ProductDetails,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(&details.name)
            .bind(&details.description)
            .bind(details.price)
            .bind(&details.category)
            .bind(details.status.as_str())
            .bind(details.meta_tags.as_slice())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    #[instrument(name = "products.delete_product", skip(self, tx), fields(product = %product))]
    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;
        let status = status
            .parse::<ProductStatus>()
            .map_err(|error| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(error),
            })?;

        let meta_tags: Vec<String> = row.try_get("meta_tags")?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
            status,
            meta_tags: MetaTags::from_vec(meta_tags),
            created_by: ProfileUuid::from_uuid(row.try_get("created_by")?),
            owner_name: row.try_get("owner_name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
