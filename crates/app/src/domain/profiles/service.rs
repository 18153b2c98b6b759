//! Profiles service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::profiles::{
    data::NewProfile,
    errors::ProfilesServiceError,
    records::{ProfileRecord, ProfileUuid},
    repository::PgProfilesRepository,
};

#[derive(Debug, Clone)]
pub struct PgProfilesService {
    repository: PgProfilesRepository,
}

impl PgProfilesService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgProfilesRepository::new(pool),
        }
    }
}

#[async_trait]
impl ProfilesService for PgProfilesService {
    async fn create_profile(
        &self,
        profile: NewProfile,
    ) -> Result<ProfileRecord, ProfilesServiceError> {
        self.repository
            .create_profile(profile)
            .await
            .map_err(Into::into)
    }

    async fn get_profile(
        &self,
        profile: ProfileUuid,
    ) -> Result<ProfileRecord, ProfilesServiceError> {
        self.repository
            .get_profile(profile)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
/// Profile persistence operations.
pub trait ProfilesService: Send + Sync {
    /// Creates a new profile.
    async fn create_profile(
        &self,
        profile: NewProfile,
    ) -> Result<ProfileRecord, ProfilesServiceError>;

    /// Retrieves a single profile.
    async fn get_profile(&self, profile: ProfileUuid)
    -> Result<ProfileRecord, ProfilesServiceError>;
}
