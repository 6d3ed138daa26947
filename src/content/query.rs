//! The one entry point renderers and listing views fetch content through.

use crate::config::Config;
use crate::content::{ContentClient, RawDocument};
use crate::error::ContentError;
use crate::i18n::Locale;
use crate::retry::{with_retry_if, RetryPolicy};
use crate::routing::{resolve_route, RouteResolution};
use futures::future::join_all;
use tracing::{debug, info};

/// What a request path turned into.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// The locale's index page; no document to fetch.
    Index { locale: Locale },
    /// A post to hand to the renderer.
    Post(RawDocument),
    /// The path needs a locale; redirect the client.
    Redirect { location: String },
}

/// Retrying, logging wrapper around [`ContentClient`].
///
/// Does not cache: every call goes to the content store.
#[derive(Debug, Clone)]
pub struct ContentQuery {
    client: ContentClient,
    extension: String,
    retry: RetryPolicy,
}

impl ContentQuery {
    pub fn new(client: ContentClient, extension: impl Into<String>) -> Self {
        Self {
            client,
            extension: extension.into(),
            retry: RetryPolicy::content_query(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = ContentClient::new(config.content_base_url.clone())?;
        let retry = RetryPolicy {
            max_attempts: config.content_max_attempts,
            ..RetryPolicy::content_query()
        };

        Ok(Self::new(client, config.content_extension.clone()).with_retry_policy(retry))
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn client(&self) -> &ContentClient {
        &self.client
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Fetch a post, retrying transport failures and 5xx responses.
    pub async fn post(&self, locale: Locale, slug: &str) -> Result<RawDocument, ContentError> {
        let operation = format!("content {}/{}", locale, slug);

        let doc = with_retry_if(
            &self.retry,
            &operation,
            || self.client.fetch_post(locale, slug, &self.extension),
            ContentError::is_retryable,
        )
        .await?;

        debug!("{}: {} bytes from {}", operation, doc.body.len(), doc.url);
        Ok(doc)
    }

    /// Preview image of a post; `Ok(None)` when the post has no image.
    pub async fn thumbnail(
        &self,
        locale: Locale,
        slug: &str,
    ) -> Result<Option<String>, ContentError> {
        Ok(self.post(locale, slug).await?.thumbnail())
    }

    /// Thumbnails for a listing view, fetched concurrently.
    ///
    /// Results are in the same order as `slugs`; one missing post does not
    /// affect the others.
    pub async fn thumbnails<S: AsRef<str>>(
        &self,
        locale: Locale,
        slugs: &[S],
    ) -> Vec<(String, Result<Option<String>, ContentError>)> {
        let results = join_all(
            slugs
                .iter()
                .map(|slug| self.thumbnail(locale, slug.as_ref())),
        )
        .await;

        let found = results.iter().filter(|r| matches!(r, Ok(Some(_)))).count();
        info!(
            "Resolved {}/{} thumbnails for locale {}",
            found,
            slugs.len(),
            locale
        );

        slugs
            .iter()
            .map(|slug| slug.as_ref().to_string())
            .zip(results)
            .collect()
    }

    /// Resolve a request path and fetch its document when it names one.
    pub async fn load(&self, path: &str, preferred: Locale) -> Result<Page, ContentError> {
        match resolve_route(path, preferred) {
            RouteResolution::Redirect { location } => {
                debug!("Redirecting {} -> {}", path, location);
                Ok(Page::Redirect { location })
            }
            RouteResolution::Render { locale, slug } if slug.is_empty() => {
                Ok(Page::Index { locale })
            }
            RouteResolution::Render { locale, slug } => {
                self.post(locale, &slug).await.map(Page::Post)
            }
        }
    }
}
