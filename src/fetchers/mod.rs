mod request;

pub use request::RequestFetcher;

use crate::error::FetchError;
use async_trait::async_trait;

/// Source of raw recipe-site markup
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the search result page for a food name
    async fn fetch_search_page(&self, name: &str) -> Result<String, FetchError>;

    /// Fetch a recipe detail page by its site id
    async fn fetch_detail_page(&self, id: &str) -> Result<String, FetchError>;
}
