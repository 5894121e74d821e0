use crate::error::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub(crate) struct APIError(anyhow::Error);

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let any_err = self.0;
        let status = match any_err.downcast_ref::<Error>() {
            Some(Error::MissingHost | Error::MalformedHost(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("request failed: {any_err:#}");
        } else {
            tracing::debug!("rejected request: {any_err:#}");
        }
        // Only the status reason is returned, error details stay in the logs.
        let body = status.canonical_reason().unwrap_or_default();
        (status, body).into_response()
    }
}

impl<E> From<E> for APIError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
