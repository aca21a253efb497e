//! Concurrent enrichment of the daily schedule.
//!
//! ```text
//! schedule page → parse → one worker per movie (bounded) → join → absolute links
//! ```

pub mod worker;

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::app::{CinemaError, Result};
use crate::config::{Config, ScheduleConfig};
use crate::domain::{CinemaIdentity, MovieRecord};
use crate::fetcher::PageFetcher;
use crate::parser::parse_schedule;

pub use worker::{Enricher, WorkerOutcome};

pub const DEFAULT_WORKERS: usize = 10;

pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher + Send + Sync>,
    enricher: Arc<Enricher>,
    schedule: ScheduleConfig,
    semaphore: Arc<Semaphore>,
}

impl Pipeline {
    pub fn new(fetcher: Arc<dyn PageFetcher + Send + Sync>, config: &Config) -> Self {
        Self::with_workers(fetcher, config, config.fetch.workers)
    }

    pub fn with_workers(
        fetcher: Arc<dyn PageFetcher + Send + Sync>,
        config: &Config,
        workers: usize,
    ) -> Self {
        let enricher = Arc::new(Enricher::new(fetcher.clone(), config.catalog.clone()));
        Self {
            fetcher,
            enricher,
            schedule: config.schedule.clone(),
            semaphore: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    /// Fetch today's schedule and parse its movie list.
    pub async fn fetch_schedule(&self) -> Result<Vec<MovieRecord>> {
        let params = [("view".to_string(), "list".to_string())];
        let page = self
            .fetcher
            .fetch(&self.schedule.url, &CinemaIdentity::random(), Some(params.as_slice()))
            .await
            .ok_or_else(|| CinemaError::ScheduleUnavailable(self.schedule.url.clone()))?;
        tracing::info!("Schedule content loaded from {}", page.final_url);

        parse_schedule(&page.body)
    }

    /// Fetch the schedule, rate every movie and return the whole list.
    ///
    /// Movies whose enrichment failed are still returned, without
    /// `kp_url`/`kp_rating`.
    pub async fn enrich_all(&self) -> Result<Vec<MovieRecord>> {
        let movies = match self.fetch_schedule().await {
            Ok(movies) => movies,
            Err(e) => {
                tracing::error!("Enrichment aborted: {}", e);
                return Err(e);
            }
        };

        if movies.is_empty() {
            tracing::error!("Enrichment aborted: {}", CinemaError::NoMovies);
            return Err(CinemaError::NoMovies);
        }
        tracing::info!("Movie list fetched: {} movies", movies.len());

        let total = movies.len();
        let results = self.enrich_movies(movies).await;
        let rated = results.iter().filter(|(_, o)| o.is_rated()).count();
        tracing::info!("Enrichment finished: {} of {} movies rated", rated, total);

        Ok(results.into_iter().map(|(movie, _)| movie).collect())
    }

    /// Run one worker per movie and wait for all of them.
    ///
    /// Output keeps the input order; schedule links are made absolute.
    pub async fn enrich_movies(
        &self,
        movies: Vec<MovieRecord>,
    ) -> Vec<(MovieRecord, WorkerOutcome)> {
        let mut fallbacks = Vec::with_capacity(movies.len());
        let mut handles = Vec::with_capacity(movies.len());

        for mut movie in movies {
            fallbacks.push(movie.clone());
            let enricher = self.enricher.clone();
            let semaphore = self.semaphore.clone();

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.expect("Semaphore closed");
                let outcome = enricher.enrich(&mut movie).await;
                (movie, outcome)
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (joined, fallback) in join_all(handles).await.into_iter().zip(fallbacks) {
            let (mut movie, outcome) = match joined {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("Worker for \"{}\" failed: {}", fallback.name, e);
                    (fallback, WorkerOutcome::Aborted)
                }
            };
            movie.absolutize_schedule_url(&self.schedule.base_url);
            results.push((movie, outcome));
        }

        results
    }
}
