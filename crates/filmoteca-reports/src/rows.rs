//! Result rows produced by the report engine.

use serde::Serialize;

/// Mean rating of the movies listing one genre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRating {
    pub genre: String,
    pub avg_rating: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorRanking {
    pub director: String,
    pub count: u64,
    pub avg_rating: f64,
    /// Titles in collection order.
    pub titles: Vec<String>,
}

/// Rating, budget and runtime figures for one genre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreStats {
    pub genre: String,
    pub count: u64,
    pub avg_rating: f64,
    pub max_rating: f64,
    pub min_rating: f64,
    /// Sum over movies that carry metadata.
    pub total_budget: i64,
    /// `None` when no movie in the genre carries metadata.
    pub avg_duration: Option<i64>,
}

/// A movie ranked by the mean of its rating and its review average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopMovie {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genres: Vec<String>,
    pub rating: f64,
    /// Mean review score, 0 for an unreviewed movie.
    pub review_avg: f64,
    pub combined_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewAnalysis {
    pub title: String,
    pub review_count: u64,
    pub avg_score: f64,
    pub max_score: i32,
    pub min_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeEntry {
    pub title: String,
    pub year: i32,
    pub rating: f64,
}

/// Movies released in one decade, labelled like `"2010s"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadeReport {
    pub decade: String,
    pub count: u64,
    pub avg_rating: f64,
    /// `None` when no movie of the decade carries metadata.
    pub avg_budget: Option<i64>,
    pub movies: Vec<DecadeEntry>,
}

/// Collection-wide counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GeneralStats {
    pub total: u64,
    pub genres_unique: u64,
    pub directors: u64,
    pub total_reviews: u64,
}
