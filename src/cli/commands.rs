use crate::app::{AppContext, CinemaError, Result};
use crate::domain::MovieRecord;
use crate::server;

pub async fn list_movies(ctx: &AppContext) -> Result<()> {
    let movies = ctx.service.movies().await?;

    for movie in movies.iter() {
        println!("{}", format_line(movie));
    }

    let rated = movies.iter().filter(|m| m.kp_rating.is_some()).count();
    println!("\n{} movies, {} rated", movies.len(), rated);
    Ok(())
}

pub async fn show_movie(ctx: &AppContext, id: i64) -> Result<()> {
    match ctx.service.movie(id).await? {
        Some(movie) => {
            let json = serde_json::to_string_pretty(&movie)
                .map_err(|e| CinemaError::Other(e.to_string()))?;
            println!("{}", json);
        }
        None => println!("No movie with ID {} today", id),
    }
    Ok(())
}

pub async fn serve(ctx: &AppContext) -> Result<()> {
    server::serve(ctx.service.clone(), &ctx.config.server).await
}

fn format_line(movie: &MovieRecord) -> String {
    format!("{} / {}", movie.name, movie.display_rating())
}
