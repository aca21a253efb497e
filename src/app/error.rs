use thiserror::Error;

#[derive(Error, Debug)]
pub enum CinemaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No info at schedule page or connection error: {0}")]
    ScheduleUnavailable(String),

    #[error("Schedule parsing error: {0}")]
    ScheduleParse(String),

    #[error("No movies today")]
    NoMovies,

    #[error("Rating document unavailable for film {0}")]
    RatingUnavailable(String),

    #[error("Rating parsing error: {0}")]
    RatingParse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CinemaError>;
