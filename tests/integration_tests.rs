//! Integration tests for blog-content
//!
//! These tests drive the public API the way a rendering layer would: resolve
//! a request path, fetch the document from a mocked content store, and pull
//! listing thumbnails.

use blog_content::config::Config;
use blog_content::i18n::{parse_locale_value, Locale};
use blog_content::preferences::{JsonFileStore, PreferenceContext, Theme};
use blog_content::retry::RetryPolicy;
use blog_content::routing::switch_locale_href;
use blog_content::{
    build_localized_href, extract_thumbnail, parse_locale, resolve_route, ContentClient,
    ContentError, ContentQuery, Page, RouteResolution,
};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ==================== Test Helpers ====================

fn create_test_config(base_url: &str) -> Config {
    Config {
        content_base_url: base_url.to_string(),
        content_extension: "mdx".to_string(),
        content_max_attempts: 2,
        default_locale: Locale::En,
        preferences_file: None,
    }
}

fn create_query(server: &MockServer) -> ContentQuery {
    ContentQuery::from_config(&create_test_config(&server.uri()))
        .expect("query should build")
        .with_retry_policy(RetryPolicy::new(2, Duration::from_millis(5)))
}

fn create_post(title: &str, image: Option<&str>) -> String {
    let image = image
        .map(|url| format!("\n![cover]({})\n", url))
        .unwrap_or_default();
    format!("---\ntitle: {}\n---\n\n# {}\n{}\nBody text.\n", title, title, image)
}

// ==================== Contract Properties ====================

#[test]
fn test_parse_locale_contract() {
    for locale in Locale::ALL {
        assert_eq!(parse_locale(Some(locale.code())), locale);
    }
    assert_eq!(parse_locale(None::<&str>), Locale::default());
    assert_eq!(parse_locale(Some("xx")), Locale::default());
    assert_eq!(parse_locale_value(&serde_json::json!(7)), Locale::default());
    assert_eq!(parse_locale_value(&serde_json::Value::Null), Locale::default());
}

#[test]
fn test_build_localized_href_contract() {
    assert_eq!(
        build_localized_href("https://example.com", Locale::En),
        "https://example.com"
    );
    assert_eq!(build_localized_href("/", Locale::Ja), "/ja");
    assert_eq!(build_localized_href("/about", Locale::En), "/en/about");
    assert_eq!(build_localized_href("about", Locale::Ko), "/ko/about");
}

#[test]
fn test_extract_thumbnail_contract() {
    assert_eq!(
        extract_thumbnail("![pic](http://x.com/a.png)").as_deref(),
        Some("http://x.com/a.png")
    );
    assert_eq!(
        extract_thumbnail(r#"<img src="http://x.com/b.png">"#).as_deref(),
        Some("http://x.com/b.png")
    );
    assert_eq!(extract_thumbnail("no images here"), None);
    assert_eq!(
        extract_thumbnail("![a](url1) ![b](url2)").as_deref(),
        Some("url1")
    );
}

// ==================== Fetch Tests ====================

#[tokio::test]
async fn test_fetch_post_non_200_is_not_found() {
    let mock_server = MockServer::start().await;

    for status in [301u16, 403, 404, 410, 500] {
        Mock::given(method("GET"))
            .and(path(format!("/en/posts/s{}.mdx", status)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&mock_server)
            .await;
    }

    let client = ContentClient::new(mock_server.uri()).expect("client should build");

    for status in [301u16, 403, 404, 410, 500] {
        let err = client
            .fetch_post(Locale::En, &format!("posts/s{}", status), "mdx")
            .await
            .unwrap_err();

        assert!(
            matches!(err, ContentError::NotFound { .. }),
            "HTTP {} should be NotFound, got {:?}",
            status,
            err
        );
    }
}

// ==================== End-to-end Flow ====================

#[tokio::test]
async fn test_request_to_rendered_document_flow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ja/posts/async-rust.mdx"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(create_post("非同期Rust", Some("/images/async.png"))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = create_query(&mock_server);

    // Unprefixed request redirects to the preferred locale
    let page = query.load("/posts/async-rust", Locale::Ja).await.unwrap();
    let location = match page {
        Page::Redirect { location } => location,
        other => panic!("Expected redirect, got {:?}", other),
    };
    assert_eq!(location, "/ja/posts/async-rust");

    // Following the redirect renders the document
    let doc = match query.load(&location, Locale::Ja).await.unwrap() {
        Page::Post(doc) => doc,
        other => panic!("Expected post, got {:?}", other),
    };
    assert_eq!(doc.locale, Locale::Ja);
    assert_eq!(doc.slug, "posts/async-rust");
    assert!(doc.body.contains("非同期Rust"));
    assert_eq!(doc.thumbnail().as_deref(), Some("/images/async.png"));
}

#[tokio::test]
async fn test_missing_translation_surfaces_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ko/posts/only-english.mdx"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = create_query(&mock_server);
    let err = query.load("/ko/posts/only-english", Locale::En).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_listing_thumbnails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/posts/with-image.mdx"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(create_post("With image", Some("https://cdn.example/w.png"))),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/en/posts/plain.mdx"))
        .respond_with(ResponseTemplate::new(200).set_body_string(create_post("Plain", None)))
        .mount(&mock_server)
        .await;

    let query = create_query(&mock_server);
    let slugs = vec!["posts/with-image".to_string(), "posts/plain".to_string()];
    let results = query.thumbnails(Locale::En, &slugs).await;

    assert_eq!(results[0].0, "posts/with-image");
    assert_eq!(
        results[0].1.as_ref().unwrap().as_deref(),
        Some("https://cdn.example/w.png")
    );
    assert_eq!(results[1].1.as_ref().unwrap(), &None);
}

// ==================== Routing + Preferences ====================

#[test]
fn test_language_switch_persists_and_relinks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let prefs_path = temp_dir.path().join("prefs.json");

    let context = PreferenceContext::load(JsonFileStore::new(&prefs_path));
    assert_eq!(context.locale(), Locale::En);

    // User on /en/posts/a switches to Korean
    context.set_locale(Locale::Ko).unwrap();
    context.set_theme(Theme::Dark).unwrap();
    assert_eq!(switch_locale_href("/en/posts/a", context.locale()), "/ko/posts/a");

    // Next session: bare root resolves with the persisted preference
    let next_session = PreferenceContext::load(JsonFileStore::new(&prefs_path));
    assert_eq!(
        resolve_route("/", next_session.locale()),
        RouteResolution::Redirect {
            location: "/ko".to_string()
        }
    );
    assert_eq!(next_session.theme(), Theme::Dark);
}
