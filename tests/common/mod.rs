#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use cinemas::cache::Clock;
use cinemas::config::Config;
use cinemas::domain::CinemaIdentity;
use cinemas::fetcher::{FetchedPage, PageFetcher};
use cinemas::pipeline::Pipeline;
use cinemas::service::MovieService;

/// How the catalog answers a search for one movie name.
#[derive(Clone)]
pub enum Search {
    /// Catalog redirects straight to the film page
    Redirect(String),
    /// Catalog shows a result listing with this film as the best match
    Listing(String),
    /// Listing without a best match
    NoMatch,
    /// Request fails
    Down,
}

/// Canned responses for the schedule site and the catalog.
#[derive(Clone, Default)]
pub struct Site {
    pub schedule: Option<String>,
    pub search: HashMap<String, Search>,
    pub ratings: HashMap<String, String>,
}

impl Site {
    pub fn with_schedule(items_json: &str) -> Self {
        Self {
            schedule: Some(schedule_page(items_json)),
            ..Default::default()
        }
    }

    pub fn search(mut self, name: &str, search: Search) -> Self {
        self.search.insert(name.to_string(), search);
        self
    }

    pub fn rating(mut self, film_id: &str, value: &str) -> Self {
        self.ratings.insert(
            film_id.to_string(),
            format!(
                r#"<?xml version="1.0" encoding="utf-8"?><rating><kp_rating num_vote="100">{}</kp_rating><imdb_rating num_vote="50">7.0</imdb_rating></rating>"#,
                value
            ),
        );
        self
    }

    pub fn raw_rating(mut self, film_id: &str, body: &str) -> Self {
        self.ratings.insert(film_id.to_string(), body.to_string());
        self
    }
}

pub fn schedule_page(items_json: &str) -> String {
    format!(
        r#"<html><body><div id="root"></div><script>ReactDOM.hydrate(React.createElement(__desktopComponents.Widget,{{"widget":{{"Title":"Schedule","Items":{}}}}}),document.getElementById("root"));</script></body></html>"#,
        items_json
    )
}

fn listing_page(film_id: &str) -> String {
    format!(
        r#"<html><body><div class="search_results"><div class="element most_wanted"><div class="info"><p class="name"><a href="/level/1/film/{0}/sr/1/">Film {0}</a></p></div></div></div></body></html>"#,
        film_id
    )
}

pub struct StubFetcher {
    site: Site,
    config: Config,
    delay: Duration,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub schedule_calls: AtomicUsize,
    pub searches: Mutex<Vec<Vec<(String, String)>>>,
}

impl StubFetcher {
    pub fn new(site: Site) -> Self {
        Self::with_delay(site, Duration::ZERO)
    }

    pub fn with_delay(site: Site, delay: Duration) -> Self {
        Self {
            site,
            config: Config::default(),
            delay,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            schedule_calls: AtomicUsize::new(0),
            searches: Mutex::new(Vec::new()),
        }
    }

    fn respond(&self, url: &str, params: &[(String, String)]) -> Option<FetchedPage> {
        if url == self.config.schedule.url {
            self.schedule_calls.fetch_add(1, Ordering::SeqCst);
            return self.site.schedule.clone().map(|body| FetchedPage {
                body,
                final_url: url.to_string(),
            });
        }

        if url == self.config.catalog.search_url {
            self.searches.lock().unwrap().push(params.to_vec());
            let name = params
                .iter()
                .find(|(k, _)| k == "m_act[find]")
                .map(|(_, v)| v.as_str())
                .unwrap_or_default();
            let listing_url = format!("{}?level=7&from=forma", url);

            return match self.site.search.get(name).cloned().unwrap_or(Search::Down) {
                Search::Redirect(id) => Some(FetchedPage {
                    body: "<html><body>film page</body></html>".to_string(),
                    final_url: format!("https://www.kinopoisk.ru/film/{}/", id),
                }),
                Search::Listing(id) => Some(FetchedPage {
                    body: listing_page(&id),
                    final_url: listing_url,
                }),
                Search::NoMatch => Some(FetchedPage {
                    body: r#"<html><body><div class="search_results"></div></body></html>"#
                        .to_string(),
                    final_url: listing_url,
                }),
                Search::Down => None,
            };
        }

        let film_id = url
            .strip_prefix("https://rating.kinopoisk.ru/")?
            .strip_suffix(".xml")?;
        self.site.ratings.get(film_id).map(|body| FetchedPage {
            body: body.clone(),
            final_url: url.to_string(),
        })
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(
        &self,
        url: &str,
        _identity: &CinemaIdentity,
        params: Option<&[(String, String)]>,
    ) -> Option<FetchedPage> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let page = self.respond(url, params.unwrap_or_default());

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        page
    }
}

pub fn pipeline(fetcher: Arc<StubFetcher>, workers: usize) -> Pipeline {
    Pipeline::with_workers(fetcher, &Config::default(), workers)
}

pub fn service(fetcher: Arc<StubFetcher>, clock: Arc<dyn Clock>) -> MovieService {
    MovieService::new(pipeline(fetcher, 4), chrono::Duration::seconds(600), clock)
}

/// Four movies covering the main paths through a worker.
pub fn mixed_site() -> Site {
    Site::with_schedule(
        r#"[
            {"ID":1,"Name":"Redirected","ProductionYear":"2023","MovieScheduleUrl":"/movie/1/"},
            {"ID":2,"Name":"Listed","ProductionYear":2024,"MovieScheduleUrl":"/movie/2/"},
            {"ID":3,"Name":"Offline","ProductionYear":"2022","MovieScheduleUrl":"/movie/3/"},
            {"ID":4,"Name":"Unknown","ProductionYear":"2021","MovieScheduleUrl":"/movie/4/"}
        ]"#,
    )
    .search("Redirected", Search::Redirect("111".into()))
    .search("Listed", Search::Listing("222".into()))
    .search("Offline", Search::Down)
    .search("Unknown", Search::NoMatch)
    .rating("111", "7.5")
    .rating("222", "8.1")
}
