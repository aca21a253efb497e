use std::sync::Arc;

use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{get, routes, Route, State};

use crate::app::CinemaError;
use crate::domain::MovieRecord;
use crate::service::MovieService;

type Unavailable = status::Custom<String>;

fn unavailable(e: CinemaError) -> Unavailable {
    status::Custom(Status::ServiceUnavailable, e.to_string())
}

#[get("/")]
async fn films_list(
    service: &State<Arc<MovieService>>,
) -> Result<Json<Vec<MovieRecord>>, Unavailable> {
    service
        .movies()
        .await
        .map(|movies| Json(movies.as_ref().clone()))
        .map_err(unavailable)
}

#[get("/<movie_id>")]
async fn film(
    service: &State<Arc<MovieService>>,
    movie_id: i64,
) -> Result<Option<Json<MovieRecord>>, Unavailable> {
    service
        .movie(movie_id)
        .await
        .map(|movie| movie.map(Json))
        .map_err(unavailable)
}

pub fn routes() -> Vec<Route> {
    routes![films_list, film]
}
