use std::fs;
use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::Request,
    response::Response,
};
use tower::util::ServiceExt;

use folio_core::config::ContentConfig;
use folio_core::{ContentStore, LogoResolver, SiteConfig};

use crate::{WebState, app_router};

pub(super) struct TestHarness {
    pub(super) temp: tempfile::TempDir,
    pub(super) router: Router,
}

impl TestHarness {
    /// Empty content tree with the directory layout in place.
    pub(super) fn empty() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = ContentStore::new(SiteConfig {
            content: ContentConfig {
                data_root: temp.path().join("data"),
                static_root: temp.path().join("static"),
                skip_malformed: false,
            },
            ..SiteConfig::default()
        });
        store.ensure_layout().expect("layout");
        let state = WebState::new(store, Arc::new(LogoResolver::builtin()));
        let router = app_router(state);
        Self { temp, router }
    }

    /// Two projects, one certificate and a custom profile.
    pub(super) fn seeded() -> Self {
        let harness = Self::empty();
        harness.write(
            "data/projects/sales.json",
            r#"{"title":"Sales Dashboard","date":"2023-08-10","technologies":["Tableau","SQL"],"description":"Weekly **revenue** view."}"#,
        );
        harness.write(
            "data/projects/churn.json",
            r#"{"title":"Churn Model","date":"2024-02-01","technologies":["python","Rustacean Tools"],"github":"https://github.com/ada/churn"}"#,
        );
        harness.write("data/projects/notes.txt", "ignored");
        harness.write(
            "data/certificates/cert.json",
            r#"{"title":"Google Data Analytics","issuer":"Coursera","date":"2023-01-15","link":"https://coursera.org/verify/abc"}"#,
        );
        harness.write(
            "data/profile.json",
            r#"{"name":"Ada Lovelace","title":"Data Analyst","tagline":"Numbers with a story","bio":"Analyst at heart.","email":"ada@example.com"}"#,
        );
        harness
    }

    pub(super) fn write(&self, relative: &str, body: &str) {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir parent");
        }
        fs::write(path, body).expect("seed file");
    }

    pub(super) async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response")
    }
}

pub(super) async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body bytes");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub(super) async fn decode_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body bytes");
    serde_json::from_slice(&bytes).expect("decode json")
}

pub(super) fn header_value<'a>(headers: &'a axum::http::HeaderMap, key: &str) -> Option<&'a str> {
    headers.get(key).and_then(|value| value.to_str().ok())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "tests usually pass temporary `json!` values directly"
)]
pub(super) fn json_request(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&body).expect("json request body"),
        ))
        .expect("json request")
}
