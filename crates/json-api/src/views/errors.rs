//! View Errors

use salvo::http::StatusError;
use tracing::error;

use vitrine_app::domain::views::ViewsServiceError;

pub(crate) fn into_status_error(error: ViewsServiceError) -> StatusError {
    match error {
        ViewsServiceError::AlreadyExists => {
            StatusError::conflict().brief("View event already exists")
        }
        ViewsServiceError::Sql(source) => {
            error!("view store failure: {source}");

            StatusError::internal_server_error()
        }
        ViewsServiceError::Http(source) => {
            error!("view feed request failed: {source}");

            StatusError::bad_gateway()
        }
        ViewsServiceError::UnexpectedResponse(message) => {
            error!("unexpected view feed response: {message}");

            StatusError::bad_gateway()
        }
    }
}
