//! View Events Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};
use tracing::instrument;

use crate::domain::views::{data::NewViewEvent, records::ViewEvent};

const LIST_VIEWS_SQL: &str = include_str!("sql/list_views.sql");
const CREATE_VIEW_SQL: &str = include_str!("sql/create_view.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgViewsRepository {
    pool: PgPool,
}

impl PgViewsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[instrument(name = "views.list_views", skip(self), fields(returned = tracing::field::Empty))]
    pub(crate) async fn list_views(&self) -> Result<Vec<ViewEvent>, sqlx::Error> {
        let views = query_as::<Postgres, ViewEvent>(LIST_VIEWS_SQL)
            .fetch_all(&self.pool)
            .await?;

        tracing::Span::current().record("returned", views.len());

        Ok(views)
    }

    #[instrument(name = "views.create_view", skip(self, view), fields(subject = %view.subject))]
    pub(crate) async fn create_view(&self, view: NewViewEvent) -> Result<ViewEvent, sqlx::Error> {
        query_as::<Postgres, ViewEvent>(CREATE_VIEW_SQL)
            .bind(view.uuid.into_uuid())
            .bind(view.subject)
            .bind(view.ip_address)
            .bind(view.viewed_at.map(SqlxTimestamp::from))
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ViewEvent {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            subject: row.try_get("subject")?,
            ip_address: row.try_get("ip_address")?,
            viewed_at: row
                .try_get::<Option<SqlxTimestamp>, _>("viewed_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
