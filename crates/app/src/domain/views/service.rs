//! View events services.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::views::{
    data::NewViewEvent, errors::ViewsServiceError, records::ViewEvent,
    repository::PgViewsRepository,
};

/// Somewhere the dashboard can read the complete view-event feed from.
#[automock]
#[async_trait]
pub trait ViewEventsSource: Send + Sync {
    /// Fetch every view event.
    async fn fetch_all(&self) -> Result<Vec<ViewEvent>, ViewsServiceError>;
}

#[automock]
#[async_trait]
pub trait ViewsService: Send + Sync {
    /// List every stored view event, oldest first.
    async fn list_views(&self) -> Result<Vec<ViewEvent>, ViewsServiceError>;

    /// Record a single view.
    async fn record_view(&self, view: NewViewEvent) -> Result<ViewEvent, ViewsServiceError>;
}

#[derive(Debug, Clone)]
pub struct PgViewsService {
    repository: PgViewsRepository,
}

impl PgViewsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgViewsRepository::new(pool),
        }
    }
}

#[async_trait]
impl ViewsService for PgViewsService {
    async fn list_views(&self) -> Result<Vec<ViewEvent>, ViewsServiceError> {
        self.repository.list_views().await.map_err(Into::into)
    }

    #[tracing::instrument(name = "views.service.record_view", skip(self, view), err)]
    async fn record_view(&self, view: NewViewEvent) -> Result<ViewEvent, ViewsServiceError> {
        let recorded = self.repository.create_view(view).await?;

        debug!(subject = ?recorded.subject, "recorded view");

        Ok(recorded)
    }
}

#[async_trait]
impl ViewEventsSource for PgViewsService {
    async fn fetch_all(&self) -> Result<Vec<ViewEvent>, ViewsServiceError> {
        self.list_views().await
    }
}
