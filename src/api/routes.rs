use crate::api::api_error::APIError;
use crate::api::server::AppState;
use crate::hostname;
use crate::resolver::FALLBACK_BODY;
use axum::extract::State;
use axum::http::{HeaderMap, Uri};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .fallback(resolve)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.timeout))
        .with_state(state)
}

async fn resolve(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<String, APIError> {
    let handle = hostname::from_request(&uri, &headers)?;

    match state.resolver.resolve(&handle).await? {
        Some(did) => {
            tracing::debug!("resolved \"{handle}\" to \"{did}\"");
            Ok(did)
        }
        None => {
            tracing::debug!("no DID for \"{handle}\"");
            Ok(FALLBACK_BODY.to_string())
        }
    }
}
