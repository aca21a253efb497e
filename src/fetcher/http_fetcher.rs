use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::domain::CinemaIdentity;
use crate::fetcher::{FetchedPage, PageFetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }
}

/// Append `params` to `url` as a query string.
pub fn build_url(url: &str, params: Option<&[(String, String)]>) -> Result<Url> {
    let url = match params {
        Some(params) => Url::parse_with_params(url, params)?,
        None => Url::parse(url)?,
    };
    Ok(url)
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        identity: &CinemaIdentity,
        params: Option<&[(String, String)]>,
    ) -> Option<FetchedPage> {
        let request_url = match build_url(url, params) {
            Ok(u) => u,
            Err(e) => {
                tracing::error!("Cannot build request for {}: {}", url, e);
                return None;
            }
        };

        let response = match self
            .client
            .get(request_url)
            .header(USER_AGENT, identity.as_str())
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                return None;
            }
        };

        let final_url = response.url().to_string();

        match response.text().await {
            Ok(body) => Some(FetchedPage { body, final_url }),
            Err(e) => {
                tracing::warn!("Reading body from {} failed: {}", final_url, e);
                None
            }
        }
    }
}
