//! View Feed Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::views::records::ViewEvent;

use crate::{extensions::*, state::State, views::errors::into_status_error};

/// One entry of the view feed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ViewEventResponse {
    /// Identifier of the viewed product or page
    pub subject: Option<String>,

    /// Visitor address
    pub ip_address: Option<String>,

    /// RFC 3339 instant of the view
    pub viewed_at: Option<String>,
}

impl From<ViewEvent> for ViewEventResponse {
    fn from(event: ViewEvent) -> Self {
        ViewEventResponse {
            subject: event.subject,
            ip_address: event.ip_address,
            viewed_at: event.viewed_at.map(|at| at.to_string()),
        }
    }
}

/// View Feed Handler
///
/// Returns the raw view-event feed as a JSON array.
#[endpoint(tags("views"), summary = "List View Events")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ViewEventResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let events = state
        .app
        .view_source
        .fetch_all()
        .await
        .map_err(into_status_error)?;

    Ok(Json(events.into_iter().map(Into::into).collect()))
}
