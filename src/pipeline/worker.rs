use std::sync::Arc;

use crate::app::{CinemaError, Result};
use crate::config::CatalogConfig;
use crate::domain::{CinemaIdentity, MovieRecord, SearchParameters};
use crate::fetcher::PageFetcher;
use crate::parser::{parse_rating, resolve_identifier};

/// Where a single movie's enrichment stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerOutcome {
    /// Catalog search request failed; record untouched
    SearchFailed,
    /// Search page fetched but no film id could be read from it
    IdentifierUnresolved,
    /// Rating document missing or malformed; record untouched
    RatingFailed,
    /// `kp_url` set, the catalog reports a zero rating
    TooFewVotes,
    /// Both `kp_url` and `kp_rating` set
    Rated(f64),
    /// The worker task panicked; the record is returned as scheduled
    Aborted,
}

impl WorkerOutcome {
    pub fn is_rated(&self) -> bool {
        matches!(self, WorkerOutcome::Rated(_))
    }
}

/// Per-movie enrichment: catalog search, id resolution, rating lookup.
pub struct Enricher {
    fetcher: Arc<dyn PageFetcher + Send + Sync>,
    catalog: CatalogConfig,
}

impl Enricher {
    pub fn new(fetcher: Arc<dyn PageFetcher + Send + Sync>, catalog: CatalogConfig) -> Self {
        Self { fetcher, catalog }
    }

    /// Enrich `movie` in place and report how far it got.
    ///
    /// Every outcome other than [`WorkerOutcome::Rated`] is logged at
    /// error level with the movie name.
    pub async fn enrich(&self, movie: &mut MovieRecord) -> WorkerOutcome {
        let params = SearchParameters::for_movie(movie).to_query();
        let identity = CinemaIdentity::random();

        let page = match self
            .fetcher
            .fetch(&self.catalog.search_url, &identity, Some(params.as_slice()))
            .await
        {
            Some(page) => page,
            None => {
                tracing::error!("Error fetching search page for \"{}\"", movie.name);
                return WorkerOutcome::SearchFailed;
            }
        };
        tracing::info!("Search page for \"{}\" fetched", movie.name);

        let Some(film_id) = resolve_identifier(&page.body, &page.final_url) else {
            tracing::error!("No catalog id found for \"{}\"", movie.name);
            return WorkerOutcome::IdentifierUnresolved;
        };

        match self.fetch_rating(&film_id, &identity).await {
            Ok(rating) if rating > 0.0 => {
                movie.kp_url = Some(self.catalog.film_url(&film_id));
                movie.kp_rating = Some(rating);
                tracing::info!("Movie \"{}\" rating fetched: {}", movie.name, rating);
                WorkerOutcome::Rated(rating)
            }
            Ok(_) => {
                movie.kp_url = Some(self.catalog.film_url(&film_id));
                tracing::error!("Error fetching \"{}\" rating: too few votes", movie.name);
                WorkerOutcome::TooFewVotes
            }
            Err(e) => {
                tracing::error!("Error fetching \"{}\" rating: {}", movie.name, e);
                WorkerOutcome::RatingFailed
            }
        }
    }

    /// Fetch and parse the rating document for a catalog id.
    pub async fn fetch_rating(&self, film_id: &str, identity: &CinemaIdentity) -> Result<f64> {
        let url = self.catalog.rating_url(film_id);
        let page = self
            .fetcher
            .fetch(&url, identity, None)
            .await
            .ok_or_else(|| CinemaError::RatingUnavailable(film_id.to_string()))?;

        parse_rating(&page.body)
    }
}
