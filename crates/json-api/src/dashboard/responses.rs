//! Dashboard response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_app::domain::{
    analytics::models::{SubjectViews, Timeline},
    dashboard::models::{DashboardState, DashboardSummary},
    profiles::records::ProfileRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DashboardStateBody {
    /// No actor resolved yet
    Loading,
    Ready,
}

impl From<DashboardState> for DashboardStateBody {
    fn from(state: DashboardState) -> Self {
        match state {
            DashboardState::Loading => DashboardStateBody::Loading,
            DashboardState::Ready => DashboardStateBody::Ready,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardProfileResponse {
    pub uuid: Uuid,
    pub full_name: String,
}

impl From<ProfileRecord> for DashboardProfileResponse {
    fn from(profile: ProfileRecord) -> Self {
        DashboardProfileResponse {
            uuid: profile.uuid.into(),
            full_name: profile.full_name,
        }
    }
}

/// Aligned per-day series.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct TimelineResponse {
    /// `YYYY-MM-DD` labels, ascending
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

impl From<Timeline> for TimelineResponse {
    fn from(timeline: Timeline) -> Self {
        TimelineResponse {
            labels: timeline.labels.iter().map(ToString::to_string).collect(),
            counts: timeline.counts,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubjectViewsResponse {
    pub subject: String,
    pub views: u64,
}

impl From<SubjectViews> for SubjectViewsResponse {
    fn from(entry: SubjectViews) -> Self {
        SubjectViewsResponse {
            subject: entry.subject,
            views: entry.views,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    pub state: DashboardStateBody,
    pub profile: Option<DashboardProfileResponse>,

    /// Views from the requesting address
    pub my_views: u64,
    pub my_views_timeline: TimelineResponse,

    /// Distinct visitor addresses
    pub unique_visitors: u64,
    pub unique_visitors_timeline: TimelineResponse,

    /// Distinct viewed subjects
    pub distinct_subjects: u64,
    pub most_viewed: Vec<SubjectViewsResponse>,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(summary: DashboardSummary) -> Self {
        DashboardResponse {
            state: summary.state.into(),
            profile: summary.profile.map(Into::into),
            my_views: summary.my_views,
            my_views_timeline: summary.my_views_timeline.into(),
            unique_visitors: summary.unique_visitors,
            unique_visitors_timeline: summary.unique_visitors_timeline.into(),
            distinct_subjects: summary.distinct_subjects,
            most_viewed: summary.most_viewed.into_iter().map(Into::into).collect(),
        }
    }
}
