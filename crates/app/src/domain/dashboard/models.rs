//! Dashboard Models

use serde::Serialize;

use crate::domain::{
    analytics::models::{SubjectViews, Timeline},
    profiles::records::ProfileRecord,
};

/// Whether the dashboard has an actor to render metrics for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardState {
    /// No actor has been resolved yet. Metrics are empty.
    Loading,
    Ready,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub state: DashboardState,
    pub profile: Option<ProfileRecord>,

    /// Views originating from the requesting viewer's address.
    pub my_views: u64,
    pub my_views_timeline: Timeline,

    /// Distinct visitor addresses across the feed.
    pub unique_visitors: u64,
    pub unique_visitors_timeline: Timeline,

    /// Distinct products or pages viewed.
    pub distinct_subjects: u64,
    pub most_viewed: Vec<SubjectViews>,
}

impl DashboardSummary {
    #[must_use]
    pub fn loading() -> Self {
        Self {
            state: DashboardState::Loading,
            profile: None,
            my_views: 0,
            my_views_timeline: Timeline::default(),
            unique_visitors: 0,
            unique_visitors_timeline: Timeline::default(),
            distinct_subjects: 0,
            most_viewed: Vec::new(),
        }
    }
}
