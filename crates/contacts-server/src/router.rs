//! Router assembly for the contacts server.
//!
//! [`build_router`] wires the page and contact handlers, mounts the static
//! asset directories, and adds request tracing.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// Routes use axum 0.8 `/{param}` path syntax. `/css` and `/images` are
/// served from `state.assets_dir`. TraceLayer logs every request via tracing.
pub fn build_router(state: AppState) -> Router {
    let css = ServeDir::new(state.assets_dir.join("css"));
    let images = ServeDir::new(state.assets_dir.join("images"));

    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/contacts", post(handlers::contacts::create_contact))
        .route(
            "/contacts/{id}",
            delete(handlers::contacts::delete_contact),
        )
        .nest_service("/css", css)
        .nest_service("/images", images)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
