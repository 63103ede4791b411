//! Aggregation reports for filmoteca.
//!
//! Reports read the whole collection through
//! [`MovieCollection`](filmoteca_core::MovieCollection) and aggregate in
//! process with the typed stages in [`pipeline`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod pipeline;
pub mod rows;

pub use engine::{Reports, DEFAULT_LIMIT};
pub use rows::{
    DecadeEntry, DecadeReport, DirectorRanking, GenreRating, GenreStats, GeneralStats,
    ReviewAnalysis, TopMovie,
};
