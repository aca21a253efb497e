//! Read-only views over the enriched schedule, cached for a fixed window.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::app::Result;
use crate::cache::{Clock, TimedCache};
use crate::domain::{sort_by_rating, MovieRecord};
use crate::pipeline::Pipeline;

const MOVIES_KEY: &str = "cached_movies";

pub struct MovieService {
    pipeline: Pipeline,
    // Held across the pipeline run so concurrent cold requests share one run
    cache: Mutex<TimedCache<Arc<Vec<MovieRecord>>>>,
}

impl MovieService {
    pub fn new(pipeline: Pipeline, ttl: chrono::Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            pipeline,
            cache: Mutex::new(TimedCache::new(ttl, clock)),
        }
    }

    /// Today's movies, best rated first.
    ///
    /// Runs the pipeline when the cached listing is missing or expired.
    /// Failures are not cached.
    pub async fn movies(&self) -> Result<Arc<Vec<MovieRecord>>> {
        let mut cache = self.cache.lock().await;

        if let Some(movies) = cache.get(MOVIES_KEY) {
            tracing::debug!("Serving {} cached movies", movies.len());
            return Ok(movies);
        }

        let mut movies = self.pipeline.enrich_all().await?;
        sort_by_rating(&mut movies);

        let movies = Arc::new(movies);
        cache.insert(MOVIES_KEY, movies.clone());
        Ok(movies)
    }

    /// Look a movie up by its schedule ID.
    pub async fn movie(&self, id: i64) -> Result<Option<MovieRecord>> {
        let movies = self.movies().await?;
        Ok(movies.iter().find(|m| m.id == id).cloned())
    }
}
