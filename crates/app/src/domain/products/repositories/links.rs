//! Product Links Repository

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::products::{
    data::NewProductLink,
    records::{ProductLinkRecord, ProductUuid},
};

const LIST_PRODUCT_LINKS_SQL: &str = include_str!("../sql/list_product_links.sql");
const CREATE_PRODUCT_LINKS_SQL: &str = include_str!("../sql/create_product_links.sql");
const DELETE_PRODUCT_LINKS_SQL: &str = include_str!("../sql/delete_product_links.sql");

struct LinkRow {
    product_uuid: Uuid,
    link: ProductLinkRecord,
}

impl<'r> FromRow<'r, PgRow> for LinkRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_uuid: row.try_get("product_uuid")?,
            link: ProductLinkRecord {
                title: row.try_get("title")?,
                url: row.try_get("url")?,
                price: row.try_get("price")?,
                city: row.try_get("city")?,
                warranty: row.try_get("warranty")?,
            },
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductLinksRepository;

impl PgProductLinksRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Links for each of `products`, in insertion order.
    pub(crate) async fn list_for_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[Uuid],
    ) -> Result<FxHashMap<ProductUuid, Vec<ProductLinkRecord>>, sqlx::Error> {
        let rows = query_as::<Postgres, LinkRow>(LIST_PRODUCT_LINKS_SQL)
            .bind(products)
            .fetch_all(&mut **tx)
            .await?;

        let mut links: FxHashMap<ProductUuid, Vec<ProductLinkRecord>> = FxHashMap::default();

        for row in rows {
            links
                .entry(ProductUuid::from_uuid(row.product_uuid))
                .or_default()
                .push(row.link);
        }

        Ok(links)
    }

    pub(crate) async fn create_links(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        links: &[NewProductLink],
    ) -> Result<(), sqlx::Error> {
        if links.is_empty() {
            return Ok(());
        }

        let titles: Vec<&str> = links.iter().map(|link| link.title.as_str()).collect();
        let urls: Vec<&str> = links.iter().map(|link| link.url.as_str()).collect();
        let prices: Vec<Decimal> = links.iter().map(NewProductLink::normalized_price).collect();
        let cities: Vec<&str> = links
            .iter()
            .map(|link| link.city.as_deref().unwrap_or_default())
            .collect();
        let warranties: Vec<&str> = links
            .iter()
            .map(|link| link.warranty.as_deref().unwrap_or_default())
            .collect();

        query(CREATE_PRODUCT_LINKS_SQL)
            .bind(product.into_uuid())
            .bind(titles)
            .bind(urls)
            .bind(prices)
            .bind(cities)
            .bind(warranties)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_links(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_LINKS_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
