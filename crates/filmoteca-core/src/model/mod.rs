pub mod ids;
pub mod movie;
pub mod review;

pub use ids::MovieId;
pub use movie::{rating_in_range, CastMember, Metadata, Movie, MovieDraft};
pub use review::Review;
