use std::sync::Arc;

use crate::app::error::Result;
use crate::cache::SystemClock;
use crate::config::Config;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::pipeline::Pipeline;
use crate::service::MovieService;

pub struct AppContext {
    pub config: Config,
    pub service: Arc<MovieService>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn PageFetcher + Send + Sync> =
            Arc::new(HttpFetcher::with_timeout(config.fetch.timeout())?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn PageFetcher + Send + Sync>) -> Self {
        let pipeline = Pipeline::new(fetcher, &config);
        let service = Arc::new(MovieService::new(
            pipeline,
            config.server.cache_ttl(),
            Arc::new(SystemClock),
        ));

        Self { config, service }
    }
}
