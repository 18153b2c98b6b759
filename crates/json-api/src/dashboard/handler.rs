//! Dashboard Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{dashboard::responses::DashboardResponse, extensions::*, state::State};

/// Dashboard Handler
///
/// View metrics for the authenticated profile. "My views" counts events from
/// the caller's own address. Without a valid token the summary is returned
/// in the `loading` state with empty metrics.
#[endpoint(
    tags("dashboard"),
    summary = "Dashboard Summary",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .app
        .dashboard
        .summary(depot.actor(), req.viewer_address())
        .await;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use vitrine_app::domain::{
        analytics::models::{SubjectViews, Timeline},
        dashboard::{
            MockDashboardService,
            models::{DashboardState, DashboardSummary},
        },
        profiles::records::ProfileRecord,
    };

    use crate::{
        dashboard::responses::DashboardStateBody,
        test_helpers::{TEST_ACTOR, inject_actor, state_with_dashboard},
    };

    use super::*;

    fn ready_summary() -> DashboardSummary {
        DashboardSummary {
            state: DashboardState::Ready,
            profile: Some(ProfileRecord {
                uuid: TEST_ACTOR,
                full_name: "Test Operator".to_string(),
                created_at: Timestamp::UNIX_EPOCH,
                updated_at: Timestamp::UNIX_EPOCH,
            }),
            my_views: 3,
            my_views_timeline: Timeline {
                labels: vec![date(2024, 1, 1), date(2024, 1, 2)],
                counts: vec![2, 1],
            },
            unique_visitors: 2,
            unique_visitors_timeline: Timeline::default(),
            distinct_subjects: 1,
            most_viewed: vec![SubjectViews {
                subject: "lamp".to_string(),
                views: 4,
            }],
        }
    }

    #[tokio::test]
    async fn test_dashboard_for_actor_passes_forwarded_viewer() -> TestResult {
        let mut dashboard = MockDashboardService::new();

        dashboard
            .expect_summary()
            .once()
            .withf(|actor, viewer| {
                *actor == Some(TEST_ACTOR) && viewer.as_deref() == Some("198.51.100.4")
            })
            .return_once(|_, _| ready_summary());

        let service = Service::new(
            Router::new()
                .hoop(inject(state_with_dashboard(dashboard)))
                .hoop(inject_actor)
                .push(Router::with_path("dashboard").get(handler)),
        );

        let mut res = TestClient::get("http://example.com/dashboard")
            .add_header("x-forwarded-for", "198.51.100.4", true)
            .send(&service)
            .await;

        let body: DashboardResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.state, DashboardStateBody::Ready);
        assert_eq!(body.my_views, 3);
        assert_eq!(body.my_views_timeline.labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(body.my_views_timeline.counts, vec![2, 1]);
        assert_eq!(body.most_viewed.first().map(|entry| entry.views), Some(4));

        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_without_actor_is_loading() -> TestResult {
        let mut dashboard = MockDashboardService::new();

        dashboard
            .expect_summary()
            .once()
            .withf(|actor, _| actor.is_none())
            .return_once(|_, _| DashboardSummary::loading());

        let service = Service::new(
            Router::new()
                .hoop(inject(state_with_dashboard(dashboard)))
                .push(Router::with_path("dashboard").get(handler)),
        );

        let mut res = TestClient::get("http://example.com/dashboard")
            .send(&service)
            .await;

        let body: DashboardResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.state, DashboardStateBody::Loading);
        assert!(body.profile.is_none());
        assert!(body.my_views_timeline.labels.is_empty());

        Ok(())
    }
}
