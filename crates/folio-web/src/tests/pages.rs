use axum::http::StatusCode;

use folio_core::{FALLBACK_LOGO_URL, LogoResolver};

use super::harness::{TestHarness, body_text};

#[tokio::test]
async fn landing_page_renders_profile_projects_and_certificates() {
    let harness = TestHarness::seeded();

    let response = harness.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("<h1 class=\"hero-title\">Ada Lovelace</h1>"));
    assert!(html.contains("Numbers with a story"));
    assert!(html.contains("mailto:ada@example.com"));
    let churn = html.find("Churn Model").expect("churn rendered");
    let sales = html.find("Sales Dashboard").expect("sales rendered");
    assert!(churn < sales, "newest project must come first");
    assert!(html.contains("Google Data Analytics"));
    assert!(html.contains("<strong>revenue</strong>"));
}

#[tokio::test]
async fn landing_page_uses_default_profile_when_file_is_missing() {
    let harness = TestHarness::empty();

    let response = harness.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Your Name"));
    assert!(html.contains("No projects yet."));
    assert!(html.contains("No certificates yet."));
}

#[tokio::test]
async fn projects_page_resolves_technology_logos() {
    let harness = TestHarness::seeded();
    let logos = LogoResolver::builtin();

    let response = harness.get("/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains(logos.resolve("Python")));
    assert!(html.contains(logos.resolve("Tableau")));
    assert!(html.contains(FALLBACK_LOGO_URL));
    assert!(html.contains("https://github.com/ada/churn"));
    assert!(!html.contains("ignored"));
}

#[tokio::test]
async fn certificates_page_lists_certificates() {
    let harness = TestHarness::seeded();

    let response = harness.get("/certificates").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Google Data Analytics"));
    assert!(html.contains("Coursera"));
    assert!(html.contains("Jan 2023"));
    assert!(html.contains("https://coursera.org/verify/abc"));
}

#[tokio::test]
async fn static_pages_render_without_content() {
    let harness = TestHarness::empty();
    harness.write("data/profile.json", "{ not json");

    for (path, marker) in [("/about", "<h1>About</h1>"), ("/contact", "id=\"contactForm\"")] {
        let response = harness.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let html = body_text(response).await;
        assert!(html.contains(marker), "{path}");
    }
}

#[tokio::test]
async fn malformed_content_fails_the_request() {
    let harness = TestHarness::seeded();
    harness.write("data/projects/broken.json", "{\"title\": ");

    let response = harness.get("/projects").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(response).await;
    assert!(html.contains("Something went wrong"));
    assert!(html.contains("Reference:"));
    assert!(!html.contains("Churn Model"));

    let landing = harness.get("/").await;
    assert_eq!(landing.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let certificates = harness.get("/certificates").await;
    assert_eq!(certificates.status(), StatusCode::OK);
}

#[tokio::test]
async fn content_edits_show_up_on_the_next_request() {
    let harness = TestHarness::empty();
    let before = body_text(harness.get("/projects").await).await;
    assert!(before.contains("No projects yet."));

    harness.write("data/projects/new.json", r#"{"title":"Fresh Work","date":"2025-01-01"}"#);
    let after = body_text(harness.get("/projects").await).await;
    assert!(after.contains("Fresh Work"));
}

#[tokio::test]
async fn unknown_paths_render_not_found_page() {
    let harness = TestHarness::empty();

    let response = harness.get("/blog").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("Page not found"));
    assert!(html.contains("/blog"));
}

#[tokio::test]
async fn record_images_outside_the_images_tree_are_dropped() {
    let harness = TestHarness::empty();
    harness.write(
        "data/projects/escape.json",
        r#"{"title":"Escape","date":"2024-01-01","image":"../../x.png"}"#,
    );
    harness.write(
        "data/projects/local.json",
        r#"{"title":"Local","date":"2023-01-01","image":"projects/local.png"}"#,
    );

    let response = harness.get("/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("src=\"/static/images/projects/local.png\""));
    assert!(!html.contains("x.png"));
}

#[tokio::test]
async fn non_object_profile_renders_blank_fields() {
    let harness = TestHarness::empty();
    harness.write("data/profile.json", "[]");

    let response = harness.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1 class=\"hero-title\"></h1>"));
}
