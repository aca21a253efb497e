pub mod http_fetcher;

use async_trait::async_trait;

use crate::domain::CinemaIdentity;

pub use http_fetcher::HttpFetcher;

/// A fetched page together with the address it was finally served from.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: String,
    /// URL after redirects; identifier resolution depends on it
    pub final_url: String,
}

#[async_trait]
pub trait PageFetcher {
    /// Issue one GET request.
    ///
    /// Returns `None` when the request could not be completed (connection
    /// failure, timeout). HTTP error statuses still yield the page body.
    async fn fetch(
        &self,
        url: &str,
        identity: &CinemaIdentity,
        params: Option<&[(String, String)]>,
    ) -> Option<FetchedPage>;
}
