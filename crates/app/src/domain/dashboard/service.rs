//! Dashboard service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::domain::{
    analytics::{self, ViewKey, models::Timeline},
    dashboard::models::{DashboardState, DashboardSummary},
    profiles::{ProfilesService, records::ProfileUuid},
    views::ViewEventsSource,
};

/// Entries shown in the most viewed panel.
pub const MOST_VIEWED_LIMIT: usize = 5;

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Build the dashboard for `actor`, attributing "my views" to `viewer`.
    ///
    /// Never fails: lookup and fetch problems are logged and reported as empty
    /// metrics.
    async fn summary(&self, actor: Option<ProfileUuid>, viewer: Option<String>) -> DashboardSummary;
}

/// Dashboard assembled from the profile store and a view-event source.
#[derive(Clone)]
pub struct FeedDashboardService {
    profiles: Arc<dyn ProfilesService>,
    views: Arc<dyn ViewEventsSource>,
}

impl FeedDashboardService {
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfilesService>, views: Arc<dyn ViewEventsSource>) -> Self {
        Self { profiles, views }
    }
}

impl std::fmt::Debug for FeedDashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedDashboardService").finish_non_exhaustive()
    }
}

#[async_trait]
impl DashboardService for FeedDashboardService {
    #[tracing::instrument(name = "dashboard.service.summary", skip(self, viewer), fields(has_viewer = viewer.is_some()))]
    async fn summary(&self, actor: Option<ProfileUuid>, viewer: Option<String>) -> DashboardSummary {
        let Some(actor) = actor else {
            return DashboardSummary::loading();
        };

        let profile = match self.profiles.get_profile(actor).await {
            Ok(profile) => profile,
            Err(error) => {
                warn!(profile_uuid = %actor, error = %error, "failed to resolve dashboard profile");

                return DashboardSummary::loading();
            }
        };

        let events = self.views.fetch_all().await.unwrap_or_else(|error| {
            warn!(error = %error, "failed to fetch view events");

            Vec::new()
        });

        let (my_views, my_views_timeline) = match viewer.as_deref() {
            Some(address) => (
                analytics::count_by(&events, ViewKey::Address, address),
                analytics::timeline_by(&events, ViewKey::Address, address),
            ),
            None => (0, Timeline::default()),
        };

        DashboardSummary {
            state: DashboardState::Ready,
            profile: Some(profile),
            my_views,
            my_views_timeline,
            unique_visitors: analytics::distinct_total(&events, ViewKey::Address),
            unique_visitors_timeline: analytics::distinct_timeline(&events, ViewKey::Address),
            distinct_subjects: analytics::total_distinct_subjects(&events),
            most_viewed: analytics::most_viewed(&events, MOST_VIEWED_LIMIT),
        }
    }
}
