//! Common test utilities

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use customer_ledger::{api, LedgerStore, SharedLedger};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

/// Fresh app over an empty ledger; the ledger handle is returned for inspection
pub fn setup_app() -> (Router, SharedLedger) {
    let ledger = LedgerStore::shared();
    let app = api::create_router().with_state(ledger.clone());
    (app, ledger)
}

/// Percent-encode form pairs as application/x-www-form-urlencoded
pub fn form_body(fields: &[(&str, &str)]) -> String {
    fn encode(raw: &str) -> String {
        let mut out = String::new();
        for byte in raw.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    out.push(byte as char)
                }
                b' ' => out.push('+'),
                other => out.push_str(&format!("%{:02X}", other)),
            }
        }
        out
    }

    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(fields)))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert a post-redirect-get response back to the list view
pub fn assert_redirects_home(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}

pub async fn add_customer(app: &Router, first_name: &str, due_amount: &str) {
    let response = post_form(
        app,
        "/customers",
        &[
            ("first_name", first_name),
            ("last_name", "Doe"),
            ("address", "1 Elm St"),
            ("phone_number", "555-1234"),
            ("due_amount", due_amount),
        ],
    )
    .await;
    assert_redirects_home(&response);
}
