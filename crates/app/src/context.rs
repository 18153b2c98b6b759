//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        dashboard::{DashboardService, FeedDashboardService},
        products::{PgProductsService, ProductsService},
        profiles::{PgProfilesService, ProfilesService},
        views::{HttpViewFeed, PgViewsService, ViewEventsSource, ViewsService},
    },
};

/// Settings needed to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,

    /// Apply pending migrations before serving.
    pub run_migrations: bool,

    /// Read dashboard view events from this URL instead of the local table.
    pub view_feed_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Every service the application exposes, built once per process.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub profiles: Arc<dyn ProfilesService>,
    pub views: Arc<dyn ViewsService>,
    pub view_source: Arc<dyn ViewEventsSource>,
    pub dashboard: Arc<dyn DashboardService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let pool = database::connect_with(&config.database_url, config.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        if config.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;

            info!("database migrations applied");
        }

        let db = Db::new(pool.clone());

        let profiles: Arc<dyn ProfilesService> = Arc::new(PgProfilesService::new(pool.clone()));
        let views = Arc::new(PgViewsService::new(pool.clone()));

        let view_source: Arc<dyn ViewEventsSource> = match &config.view_feed_url {
            Some(url) => {
                info!(url = %url, "reading view events from remote feed");

                Arc::new(HttpViewFeed::new(url.clone()))
            }
            None => views.clone(),
        };

        Ok(Self {
            products: Arc::new(PgProductsService::new(db)),
            dashboard: Arc::new(FeedDashboardService::new(
                profiles.clone(),
                view_source.clone(),
            )),
            profiles,
            views,
            view_source,
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
