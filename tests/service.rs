mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rocket::http::Status;
use rocket::local::asynchronous::Client;

use cinemas::app::CinemaError;
use cinemas::cache::{ManualClock, SystemClock};
use cinemas::domain::MovieRecord;
use cinemas::server;

use common::{mixed_site, service, Site, StubFetcher};

#[tokio::test]
async fn test_movies_sorted_by_rating() {
    let fetcher = Arc::new(StubFetcher::new(mixed_site()));
    let service = service(fetcher, Arc::new(SystemClock));

    let movies = service.movies().await.unwrap();
    let names: Vec<&str> = movies.iter().map(|m| m.name.as_str()).collect();

    // Unrated movies keep schedule order after the rated ones
    assert_eq!(names, vec!["Listed", "Redirected", "Offline", "Unknown"]);
}

#[tokio::test]
async fn test_listing_cached_until_expiry() {
    let fetcher = Arc::new(StubFetcher::new(mixed_site()));
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let service = service(fetcher.clone(), clock.clone());

    service.movies().await.unwrap();
    clock.advance(chrono::Duration::seconds(599));
    service.movies().await.unwrap();
    service.movie(2).await.unwrap();
    assert_eq!(fetcher.schedule_calls.load(Ordering::SeqCst), 1);

    clock.advance(chrono::Duration::seconds(1));
    service.movies().await.unwrap();
    assert_eq!(fetcher.schedule_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_concurrent_cold_requests_share_one_run() {
    let fetcher = Arc::new(StubFetcher::with_delay(
        mixed_site(),
        Duration::from_millis(20),
    ));
    let service = Arc::new(service(fetcher.clone(), Arc::new(SystemClock)));

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.movies().await.map(|m| m.len()) })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 4);
    }
    assert_eq!(fetcher.schedule_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let fetcher = Arc::new(StubFetcher::new(Site::with_schedule("[]")));
    let service = service(fetcher.clone(), Arc::new(SystemClock));

    assert!(matches!(
        service.movies().await.unwrap_err(),
        CinemaError::NoMovies
    ));
    assert!(service.movies().await.is_err());
    assert_eq!(fetcher.schedule_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_movie_lookup() {
    let fetcher = Arc::new(StubFetcher::new(mixed_site()));
    let service = service(fetcher, Arc::new(SystemClock));

    let movie = service.movie(2).await.unwrap().expect("movie 2");
    assert_eq!(movie.name, "Listed");
    assert_eq!(movie.kp_rating, Some(8.1));

    assert!(service.movie(999).await.unwrap().is_none());
}

async fn client(site: Site) -> Client {
    let fetcher = Arc::new(StubFetcher::new(site));
    let service = Arc::new(service(fetcher, Arc::new(SystemClock)));
    Client::tracked(server::build(service))
        .await
        .expect("valid rocket instance")
}

#[rocket::async_test]
async fn test_route_films_list() {
    let client = client(mixed_site()).await;
    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let movies: Vec<MovieRecord> = response.into_json().await.expect("json body");
    assert_eq!(movies.len(), 4);
    assert_eq!(movies[0].name, "Listed");
    assert_eq!(movies[0].schedule_url, "https://www.afisha.ru/movie/2/");
}

#[rocket::async_test]
async fn test_route_film() {
    let client = client(mixed_site()).await;

    let response = client.get("/1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let movie: MovieRecord = response.into_json().await.expect("json body");
    assert_eq!(movie.name, "Redirected");
    assert_eq!(
        movie.kp_url.as_deref(),
        Some("https://www.kinopoisk.ru/film/111")
    );

    let response = client.get("/999").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_route_pipeline_failure() {
    let client = client(Site::default()).await;
    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::ServiceUnavailable);
}
