//! End-to-end tests for the contacts HTTP routes.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! ContactRegistry -> rendered HTML. Requests go through
//! `tower::ServiceExt::oneshot` without starting a network server.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use contacts_core::{ContactId, ContactRegistry};
use contacts_server::router::build_router;
use contacts_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Creates a router over a fresh seeded registry with no delete delay.
fn test_app() -> (Router, Arc<ContactRegistry>) {
    let registry = Arc::new(ContactRegistry::seeded());
    let state = AppState::with_registry(Arc::clone(&registry), Duration::ZERO);
    (build_router(state), registry)
}

/// Sends a request and returns (status, body text).
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: &Router, path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(app, request).await
}

/// Posts an urlencoded form body.
async fn post_form(app: &Router, path: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn delete(app: &Router, path: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn live_ids(registry: &ContactRegistry) -> Vec<i64> {
    registry.list().await.iter().map(|c| c.id.0).collect()
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_lists_seed_contacts_with_empty_form() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="contact-form""#));
    assert!(body.contains(r#"name="name" value="""#));
    assert!(body.contains(r#"<div id="contacts" class="contacts">"#));
    let igor = body.find(r#"id="contact-1""#).expect("Igor missing");
    let clara = body.find(r#"id="contact-2""#).expect("Clara missing");
    assert!(igor < clara);
    assert!(body.contains("Email: abc@gmail.com"));
}

// ---------------------------------------------------------------------------
// POST /contacts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_empty_form_and_oob_contact() {
    let (app, registry) = test_app();
    let (status, body) = post_form(&app, "/contacts", "name=Dan&email=d%40x.com").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(r#"<form id="contact-form""#));
    assert!(body.contains(r#"name="email" value="""#));
    assert!(body.contains(r##"hx-swap-oob="beforeend:#contacts""##));
    assert!(body.contains(r#"id="contact-3""#));
    assert!(body.contains("Name: Dan"));

    assert_eq!(live_ids(&registry).await, vec![1, 2, 3]);
    assert_eq!(registry.next_id().await, ContactId(4));

    let (_, page) = get(&app, "/").await;
    assert!(page.contains("Email: d@x.com"));
}

#[tokio::test]
async fn duplicate_email_rerenders_form_with_422() {
    let (app, registry) = test_app();
    let (status, _) = post_form(&app, "/contacts", "name=Dan&email=d%40x.com").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_form(&app, "/contacts", "name=Eve&email=d%40x.com").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains(r#"name="name" value="Eve""#));
    assert!(body.contains(r#"name="email" value="d@x.com""#));
    assert!(body.contains("Email already exists!"));
    assert!(!body.contains("hx-swap-oob"));

    assert_eq!(live_ids(&registry).await, vec![1, 2, 3]);
    assert_eq!(registry.next_id().await, ContactId(4));
}

#[tokio::test]
async fn duplicate_of_seed_email_is_rejected() {
    let (app, registry) = test_app();
    let (status, _) = post_form(&app, "/contacts", "name=Igor2&email=abc%40gmail.com").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(registry.len().await, 2);
}

#[tokio::test]
async fn missing_fields_read_as_empty() {
    let (app, registry) = test_app();
    let (status, _) = post_form(&app, "/contacts", "").await;
    assert_eq!(status, StatusCode::OK);
    let created = registry.get(ContactId(3)).await.unwrap();
    assert_eq!(created.name, "");
    assert_eq!(created.email, "");

    // The empty email is now taken.
    let (status, _) = post_form(&app, "/contacts", "name=Zed").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn created_markup_is_escaped() {
    let (app, _) = test_app();
    let (status, body) = post_form(
        &app,
        "/contacts",
        "name=%3Cb%3Ebold%3C%2Fb%3E&email=x%40x.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Name: &lt;b&gt;bold&lt;/b&gt;"));
    assert!(!body.contains("<b>bold</b>"));
}

// ---------------------------------------------------------------------------
// DELETE /contacts/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_contact_with_empty_200() {
    let (app, registry) = test_app();
    let (status, body) = delete(&app, "/contacts/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(live_ids(&registry).await, vec![2]);

    let (_, page) = get(&app, "/").await;
    assert!(!page.contains(r#"id="contact-1""#));
}

#[tokio::test]
async fn delete_is_idempotent_and_unknown_ids_succeed() {
    let (app, registry) = test_app();
    post_form(&app, "/contacts", "name=Dan&email=d%40x.com").await;

    let (status, _) = delete(&app, "/contacts/1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = delete(&app, "/contacts/1").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = delete(&app, "/contacts/99").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(live_ids(&registry).await, vec![2, 3]);
    assert_eq!(registry.next_id().await, ContactId(4));
}

#[tokio::test]
async fn malformed_id_is_400_and_touches_nothing() {
    let (app, registry) = test_app();
    for path in [
        "/contacts/abc",
        "/contacts/1.5",
        "/contacts/%20",
        "/contacts/9223372036854775808",
        "/contacts/18446744073709551615",
    ] {
        let (status, body) = delete(&app, path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "path {path}");
        assert!(body.is_empty(), "path {path}");
    }
    assert_eq!(live_ids(&registry).await, vec![1, 2]);
}

#[tokio::test]
async fn signed_ids_are_well_formed() {
    let (app, registry) = test_app();

    let (status, body) = delete(&app, "/contacts/-1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    let (status, _) = delete(&app, "/contacts/9223372036854775807").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(live_ids(&registry).await, vec![1, 2]);

    let (status, _) = delete(&app, "/contacts/+1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(live_ids(&registry).await, vec![2]);
    assert_eq!(registry.next_id().await, ContactId(3));
}

#[tokio::test]
async fn deleted_email_can_be_reused_with_fresh_id() {
    let (app, registry) = test_app();
    delete(&app, "/contacts/2").await;

    let (status, body) = post_form(&app, "/contacts", "name=Clara&email=cb%40gmail.com").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="contact-3""#));
    assert_eq!(live_ids(&registry).await, vec![1, 3]);
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let (app, _) = test_app();
    let (status, _) = get(&app, "/contacts/1").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Static assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn serves_css_and_images_from_assets_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("css")).unwrap();
    std::fs::create_dir_all(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("css/index.css"), "body { color: red; }").unwrap();
    std::fs::write(dir.path().join("images/bars.svg"), "<svg></svg>").unwrap();

    let mut state = AppState::with_registry(Arc::new(ContactRegistry::seeded()), Duration::ZERO);
    state.assets_dir = dir.path().to_path_buf();
    let app = build_router(state);

    let (status, body) = get(&app, "/css/index.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { color: red; }");

    let (status, body) = get(&app, "/images/bars.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<svg></svg>");

    let (status, _) = get(&app, "/images/missing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn bundled_assets_exist() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
    assert!(root.join("css/index.css").is_file());
    assert!(root.join("images/bars.svg").is_file());
}
