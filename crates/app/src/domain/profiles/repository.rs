//! Profiles Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::profiles::{
    data::NewProfile,
    records::{ProfileRecord, ProfileUuid},
};

const CREATE_PROFILE_SQL: &str = include_str!("sql/create_profile.sql");
const GET_PROFILE_SQL: &str = include_str!("sql/get_profile.sql");

/// PostgreSQL-backed profiles repository.
#[derive(Debug, Clone)]
pub(crate) struct PgProfilesRepository {
    pool: PgPool,
}

impl PgProfilesRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_profile(
        &self,
        profile: NewProfile,
    ) -> Result<ProfileRecord, sqlx::Error> {
        query_as::<Postgres, ProfileRecord>(CREATE_PROFILE_SQL)
            .bind(profile.uuid.into_uuid())
            .bind(profile.full_name)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn get_profile(
        &self,
        profile: ProfileUuid,
    ) -> Result<ProfileRecord, sqlx::Error> {
        query_as::<Postgres, ProfileRecord>(GET_PROFILE_SQL)
            .bind(profile.into_uuid())
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProfileRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProfileUuid::from_uuid(row.try_get("uuid")?),
            full_name: row.try_get("full_name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
