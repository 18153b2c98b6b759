//! Record View Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use vitrine_app::domain::views::{
    data::{NewViewEvent, parse_view_timestamp},
    records::ViewEventUuid,
};

use crate::{
    extensions::*,
    state::State,
    views::{errors::into_status_error, index::ViewEventResponse},
};

/// Record View Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateViewRequest {
    /// Identifier of the viewed product or page
    pub subject: String,

    /// Visitor address; the caller's own address when omitted
    #[serde(default)]
    pub ip_address: Option<String>,

    /// RFC 3339 instant, civil datetime or date; now when omitted
    #[serde(default)]
    pub viewed_at: Option<String>,
}

/// Record View Handler
#[endpoint(
    tags("views"),
    summary = "Record View Event",
    responses(
        (status_code = StatusCode::CREATED, description = "View recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateViewRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ViewEventResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if request.subject.trim().is_empty() {
        return Err(StatusError::bad_request().brief("subject must not be empty"));
    }

    let viewed_at = match request.viewed_at.as_deref() {
        Some(raw) => Some(
            parse_view_timestamp(raw)
                .ok_or_else(|| StatusError::bad_request().brief("could not parse viewed_at"))?,
        ),
        None => None,
    };

    let ip_address = request
        .ip_address
        .filter(|ip| !ip.trim().is_empty())
        .or_else(|| req.viewer_address());

    let recorded = state
        .app
        .views
        .record_view(NewViewEvent {
            uuid: ViewEventUuid::new(),
            subject: request.subject,
            ip_address,
            viewed_at,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(recorded.into()))
}
