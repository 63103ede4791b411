//! The bundled starter dataset: eleven movies with cast, reviews and
//! production metadata.

use crate::error::Result;
use crate::model::MovieDraft;

const SEED_JSON: &str = include_str!("../data/seed.json");

/// Number of movies in the seed set.
pub const SEED_SIZE: usize = 11;

/// Parse the seed set into drafts, in their canonical order.
pub fn drafts() -> Result<Vec<MovieDraft>> {
    Ok(serde_json::from_str(SEED_JSON)?)
}
