use crate::content::document::{document_url, normalize_slug, RawDocument};
use crate::error::ContentError;
use crate::i18n::Locale;
use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::StatusCode;

const USER_AGENT: &str = concat!("blog-content/", env!("CARGO_PKG_VERSION"));

/// Single-shot reader for the remote content store.
///
/// Performs exactly one GET per call: no retries, no timeout and no logging.
/// Resilience belongs to [`ContentQuery`](crate::content::ContentQuery).
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    /// Create a client for the store rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_http_client(http, base_url))
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a document: `{base_url}/{locale}/{slug}.{extension}`.
    pub fn document_url(
        &self,
        locale: Locale,
        slug: &str,
        extension: &str,
    ) -> Result<String, ContentError> {
        document_url(&self.base_url, locale, slug, extension)
    }

    /// Fetch the raw source of `slug` in `locale`.
    ///
    /// # Errors
    /// * `NotFound` when the store answers anything but 200, or 200 with a
    ///   blank body
    /// * `InvalidSlug` when the slug cannot name a document (no request made)
    /// * `Transport` when no response could be read
    pub async fn fetch_post(
        &self,
        locale: Locale,
        slug: &str,
        extension: &str,
    ) -> Result<RawDocument, ContentError> {
        let url = self.document_url(locale, slug, extension)?;

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ContentError::NotFound {
                url,
                status: Some(status.as_u16()),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(ContentError::NotFound { url, status: None });
        }

        Ok(RawDocument {
            locale,
            slug: normalize_slug(slug)?,
            extension: extension.trim_start_matches('.').to_string(),
            url,
            body,
            fetched_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{header_exists, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const POST_BODY: &str = "---\ntitle: Ownership\n---\n\n# Ownership\n\n![diagram](/img/own.png)\n";

    #[tokio::test]
    async fn test_fetch_post_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ko/posts/ownership.mdx"))
            .respond_with(ResponseTemplate::new(200).set_body_string(POST_BODY))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ContentClient::new(mock_server.uri()).unwrap();
        let doc = client
            .fetch_post(Locale::Ko, "posts/ownership", "mdx")
            .await
            .expect("document should be fetched");

        assert_eq!(doc.locale, Locale::Ko);
        assert_eq!(doc.slug, "posts/ownership");
        assert_eq!(doc.extension, "mdx");
        assert_eq!(doc.body, POST_BODY);
        assert_eq!(doc.url, format!("{}/ko/posts/ownership.mdx", mock_server.uri()));
        assert_eq!(doc.thumbnail(), Some("/img/own.png".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_post_sends_user_agent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/en/about.md"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# About"))
            .mount(&mock_server)
            .await;

        let client = ContentClient::new(format!("{}/", mock_server.uri())).unwrap();
        let result = client.fetch_post(Locale::En, "/about", ".md").await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
    }

    #[tokio::test]
    async fn test_fetch_post_404_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ja/posts/missing.mdx"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = ContentClient::new(mock_server.uri()).unwrap();
        let err = client
            .fetch_post(Locale::Ja, "posts/missing", "mdx")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_fetch_post_non_200_success_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/en/posts/a.mdx"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = ContentClient::new(mock_server.uri()).unwrap();
        let err = client
            .fetch_post(Locale::En, "posts/a", "mdx")
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::NotFound { status: Some(204), .. }));
    }

    #[tokio::test]
    async fn test_fetch_post_server_error_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = ContentClient::new(mock_server.uri()).unwrap();
        let err = client
            .fetch_post(Locale::En, "posts/a", "mdx")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_fetch_post_blank_body_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/en/posts/empty.mdx"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  \n\t"))
            .mount(&mock_server)
            .await;

        let client = ContentClient::new(mock_server.uri()).unwrap();
        let err = client
            .fetch_post(Locale::En, "posts/empty", "mdx")
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::NotFound { status: None, .. }));
    }

    #[tokio::test]
    async fn test_fetch_post_invalid_slug_makes_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("secret"))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = ContentClient::new(mock_server.uri()).unwrap();
        let err = client
            .fetch_post(Locale::En, "../private/keys", "mdx")
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::InvalidSlug(_)));
    }

    #[tokio::test]
    async fn test_fetch_post_connection_error_is_transport() {
        // Nothing listens on port 1
        let client = ContentClient::new("http://127.0.0.1:1").unwrap();
        let err = client
            .fetch_post(Locale::En, "posts/a", "mdx")
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::Transport(_)));
        assert!(err.is_retryable());
        assert!(!err.is_not_found());
    }
}
