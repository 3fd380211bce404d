//! Contact create and delete handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;

use contacts_core::ContactId;

use crate::error::ApiError;
use crate::render;
use crate::schema::contacts::{ContactForm, FormData};
use crate::state::AppState;

/// Creates a contact from the submitted form.
///
/// On success returns a fresh empty form plus the new contact as an
/// out-of-band fragment. A duplicate email returns 422 with the form
/// re-rendered around the submitted values.
///
/// `POST /contacts`
pub async fn create_contact(
    State(state): State<AppState>,
    Form(req): Form<ContactForm>,
) -> Result<Html<String>, ApiError> {
    let contact = match state.registry.create(&*req.name, &*req.email).await {
        Ok(contact) => contact,
        Err(err) => {
            tracing::warn!("Rejected contact: {}", err);
            return Err(ApiError::from(err).with_submitted(&req.name, &req.email));
        }
    };
    tracing::info!("Created contact {} ({})", contact.id, contact.email);

    let mut html = render::form_fragment(&FormData::new());
    html.push_str(&render::oob_contact_fragment(&contact));
    Ok(Html(html))
}

/// Deletes a contact after the configured delay.
///
/// The id is validated before the registry is touched. The target is chosen
/// up front, the delay runs without holding the registry lock, then the
/// removal is committed. Unknown ids succeed as a no-op.
///
/// The delete runs on its own task so it completes even if the client
/// disconnects mid-wait.
///
/// `DELETE /contacts/{id}`
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: ContactId = raw_id.parse().map_err(|_| {
        tracing::warn!("Rejected delete with malformed id '{}'", raw_id);
        ApiError::BadRequest(format!("invalid contact id '{}'", raw_id))
    })?;

    let registry = Arc::clone(&state.registry);
    let delay = state.delete_delay;
    tracing::debug!("Delete of contact {} scheduled in {:?}", id, delay);

    let removed = tokio::spawn(async move { registry.delete_by_id_after(id, delay).await })
        .await
        .map_err(|err| ApiError::InternalError(format!("delete task failed: {}", err)))?;

    if removed {
        tracing::info!("Deleted contact {}", id);
    } else {
        tracing::debug!("Delete of contact {} matched nothing", id);
    }
    Ok(StatusCode::OK)
}
