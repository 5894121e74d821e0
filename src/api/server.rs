use crate::api::routes;
use crate::config::SharedConfig;
use crate::handle_store::DynHandleStore;
use crate::resolver::Resolver;
use axum::Router;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub resolver: Resolver,
}

/// Build the HTTP application without binding it, e.g. to drive it directly in tests.
pub fn app(config: SharedConfig, handle_store: DynHandleStore) -> Router {
    routes::new(AppState {
        config,
        resolver: Resolver::new(handle_store),
    })
}

/// Bind the configured address and serve the HTTP application until it fails.
pub fn new(
    config: SharedConfig,
    handle_store: DynHandleStore,
) -> impl Future<Output = hyper::Result<()>> {
    axum::Server::bind(&config.bind_addr)
        .serve(app(config.clone(), handle_store).into_make_service())
}
