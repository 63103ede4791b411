//! Declarative filters, sort orders and updates handed to a
//! [`MovieCollection`](crate::collection::MovieCollection).
//!
//! These values describe *what* to select or change; the collection
//! decides how to execute them.

use serde::Serialize;

use crate::model::{Movie, Review};

/// Which movies an operation applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Every movie in the collection.
    All,
    /// Exact title (the business key).
    TitleEquals(String),
    /// Case-insensitive substring of the title.
    TitleContains(String),
    /// Exact match against any element of `genres`.
    Genre(String),
    /// Case-insensitive substring of the director.
    DirectorContains(String),
    /// `rating >= threshold`.
    MinRating(f64),
    /// Release year within `[start, end]`, both inclusive.
    YearRange { start: i32, end: i32 },
    /// Case-insensitive substring of the title or of any review comment.
    Keyword(String),
}

/// Result ordering for [`Filter`] lookups.
///
/// Every order falls back to ascending title so equal keys come out in a
/// reproducible sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    /// Insertion order.
    #[default]
    Natural,
    RatingDesc,
    YearAsc,
    TitleAsc,
}

/// A single-document modification.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Replace the official rating.
    SetRating(f64),
    /// Append a review to the end of `reviews`.
    PushReview(Review),
    /// Remove every review written by the given user.
    PullReviewsBy(String),
}

/// Counts reported by a single-document update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateResult {
    /// Documents selected by the filter (0 or 1).
    pub matched: u64,
    /// Documents actually changed (0 or 1).
    pub modified: u64,
}

/// A full-text match with its relevance (higher is more relevant).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMovie {
    pub movie: Movie,
    pub score: f64,
}

/// Description of a lookup index maintained by the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexInfo {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
    pub full_text: bool,
}
