use super::PageSource;
use crate::config::FinderConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;

pub struct RequestFetcher {
    client: Client,
    base_url: String,
}

impl RequestFetcher {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; RecipeFinderBot/1.0)")
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &FinderConfig) -> Result<Self, FetchError> {
        Self::new(&config.base_url, Some(config.request_timeout()))
    }

    pub fn search_url(&self) -> String {
        format!("{}/recipe/list.html", self.base_url)
    }

    pub fn detail_url(&self, id: &str) -> String {
        format!("{}/recipe/{}", self.base_url, id)
    }

    /// Send the request and return the body only on 200 OK
    async fn fetch(&self, request: RequestBuilder) -> Result<String, FetchError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        debug!("GET {} -> {}", url, status);

        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PageSource for RequestFetcher {
    async fn fetch_search_page(&self, name: &str) -> Result<String, FetchError> {
        let request = self.client.get(self.search_url()).query(&[("q", name)]);
        self.fetch(request).await
    }

    async fn fetch_detail_page(&self, id: &str) -> Result<String, FetchError> {
        let request = self.client.get(self.detail_url(id));
        self.fetch(request).await
    }
}
