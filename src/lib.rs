//! # Cinemas
//!
//! Today's cinema schedule, ranked by catalog rating.
//!
//! ## Architecture
//!
//! ```text
//! Schedule page → Parser → Enrichment workers (search → id → rating) → Cache → Web/CLI
//! ```
//!
//! - [`fetcher`]: HTTP client with per-request identity and timeout
//! - [`parser`]: schedule, search result and rating document extraction
//! - [`pipeline`]: bounded concurrent enrichment of every scheduled movie
//! - [`service`]: cached, rating-sorted views over the pipeline output
//! - [`server`]: rocket routes for the two views
//!
//! ## Quick Start
//!
//! ```bash
//! # Print today's movies, best first
//! cinemas list
//!
//! # One movie as JSON
//! cinemas show 229012
//!
//! # Web front-end on 127.0.0.1:8000
//! cinemas serve
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// fetcher, pipeline and service.
pub mod app;

/// Time-boxed cache with an injectable clock.
pub mod cache;

/// Command-line interface using clap.
///
/// - `list` - Print today's movies sorted by rating
/// - `show <id>` - Print one movie
/// - `serve` - Run the web front-end
pub mod cli;

/// Configuration loaded from `~/.config/cinemas/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`MovieRecord`](domain::MovieRecord): a schedule entry plus catalog data
/// - [`CinemaIdentity`](domain::CinemaIdentity): per-request user agent
/// - [`SearchParameters`](domain::SearchParameters): catalog search query
pub mod domain;

/// HTTP fetching.
///
/// - [`PageFetcher`](fetcher::PageFetcher): Async trait for page fetching
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

pub mod parser;

/// Concurrent enrichment pipeline.
///
/// - [`Pipeline`](pipeline::Pipeline): schedule fetch, worker pool, join
/// - [`Enricher`](pipeline::Enricher): one movie's search → id → rating chain
pub mod pipeline;

pub mod server;

pub mod service;
