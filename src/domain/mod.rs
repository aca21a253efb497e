pub mod identity;
pub mod movie;
pub mod search;

pub use identity::CinemaIdentity;
pub use movie::{sort_by_rating, MovieRecord};
pub use search::SearchParameters;
