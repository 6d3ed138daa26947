//! Raw document fetching.
//!
//! `ContentClient` is the single-shot fetcher; `ContentQuery` layers retries,
//! logging, thumbnails and route loading on top of it.

mod document;
mod fetcher;
mod query;

pub use document::RawDocument;
pub use fetcher::ContentClient;
pub use query::{ContentQuery, Page};
