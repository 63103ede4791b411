//! Core of filmoteca, a movie catalog over a document-style store.
//!
//! This crate defines the movie document model, the
//! [`MovieCollection`] contract with its SQLite implementation
//! ([`Database`]), the [`Catalog`] record-store operations and the
//! bundled seed dataset.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod collection;
pub mod error;
pub mod model;
pub mod query;
pub mod schema;
pub mod seed;

pub use catalog::{Catalog, KeywordMatch, MovieSummary, SearchHit};
pub use collection::MovieCollection;
pub use error::{Error, Result};
pub use model::{CastMember, Metadata, Movie, MovieDraft, MovieId, Review};
pub use query::{Filter, IndexInfo, ScoredMovie, Sort, Update, UpdateResult};
pub use schema::Database;
