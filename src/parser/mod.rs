//! Page-shape specific extraction.
//!
//! Everything here is synchronous and network-free: the pipeline hands in
//! bodies it already fetched.

pub mod identifier;
pub mod rating;
pub mod schedule;

pub use identifier::resolve_identifier;
pub use rating::parse_rating;
pub use schedule::parse_schedule;
