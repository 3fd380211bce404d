//! Full-page handlers.

use axum::extract::State;
use axum::response::Html;

use crate::render;
use crate::schema::contacts::FormData;
use crate::state::AppState;

/// Serves the contact list with an empty creation form.
///
/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let contacts = state.registry.list().await;
    Html(render::index_page(&contacts, &FormData::new()))
}
