use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::ids::MovieId;
use crate::model::review::Review;

/// Earliest release year accepted by the schema.
pub const MIN_YEAR: i32 = 1888;

/// Latest release year accepted by the schema.
pub const MAX_YEAR: i32 = 2030;

/// Lowest accepted official rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted official rating.
pub const MAX_RATING: f64 = 10.0;

/// An actor credited in a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub role: String,
}

impl CastMember {
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Production details of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Runtime in minutes (at least 1).
    pub duration_minutes: i64,
    pub original_language: String,
    /// Budget in whole currency units (never negative).
    pub budget: i64,
}

/// The fields a caller supplies to create a movie.
///
/// Identity and timestamps are assigned by [`Movie::from_draft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub genres: Vec<String>,
    pub rating: f64,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

const fn default_available() -> bool {
    true
}

impl MovieDraft {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        year: i32,
        director: impl Into<String>,
        genres: Vec<String>,
        rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            director: director.into(),
            genres,
            rating,
            cast: Vec::new(),
            reviews: Vec::new(),
            available: true,
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_cast(mut self, cast: Vec<CastMember>) -> Self {
        self.cast = cast;
        self
    }

    #[must_use]
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Parse a draft from a JSON object.
    ///
    /// # Errors
    ///
    /// A document that is not a draft (missing required fields, wrong
    /// types) is reported as [`Error::Validation`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| invalid(format!("malformed movie: {e}")))
    }

    /// Check the draft against the movie schema.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(invalid("title must not be empty"));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(invalid(format!(
                "year {} outside {}-{}",
                self.year, MIN_YEAR, MAX_YEAR
            )));
        }
        if self.genres.is_empty() {
            return Err(invalid("at least one genre is required"));
        }
        if !rating_in_range(self.rating) {
            return Err(invalid(format!(
                "rating {} outside {}-{}",
                self.rating, MIN_RATING, MAX_RATING
            )));
        }
        if let Some(review) = self.reviews.iter().find(|r| !Review::score_in_range(r.score)) {
            return Err(invalid(format!(
                "review by {} has score {} outside 1-10",
                review.user, review.score
            )));
        }
        if let Some(metadata) = &self.metadata {
            if metadata.duration_minutes < 1 {
                return Err(invalid("metadata.duration_minutes must be at least 1"));
            }
            if metadata.budget < 0 {
                return Err(invalid("metadata.budget must not be negative"));
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::Validation(message.into())
}

/// Whether `rating` is a finite value within the official rating range.
#[must_use]
pub fn rating_in_range(rating: f64) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// A movie document as stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,

    /// Ordered genre labels; never empty.
    pub genres: Vec<String>,

    /// Official rating, 0-10.
    pub rating: f64,

    pub cast: Vec<CastMember>,
    pub reviews: Vec<Review>,
    pub available: bool,
    pub metadata: Option<Metadata>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Give a draft its identity, stamping both timestamps with `now`.
    #[must_use]
    pub fn from_draft(draft: MovieDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: MovieId::new(),
            title: draft.title,
            year: draft.year,
            director: draft.director,
            genres: draft.genres,
            rating: draft.rating,
            cast: draft.cast,
            reviews: draft.reviews,
            available: draft.available,
            metadata: draft.metadata,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mean of the review scores, or `None` for an unreviewed movie.
    #[must_use]
    pub fn review_average(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: i64 = self.reviews.iter().map(|r| i64::from(r.score)).sum();
        Some(total as f64 / self.reviews.len() as f64)
    }

    /// Release decade, e.g. 2010 for a 2014 release.
    #[must_use]
    pub const fn decade(&self) -> i32 {
        self.year.div_euclid(10) * 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MovieDraft {
        MovieDraft::new(
            "Interstellar",
            2014,
            "Christopher Nolan",
            vec!["Science Fiction".to_string(), "Drama".to_string()],
            8.7,
        )
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_year_bounds() {
        let mut d = draft();
        d.year = 1887;
        assert!(d.validate().unwrap_err().is_validation());
        d.year = 1888;
        assert!(d.validate().is_ok());
        d.year = 2031;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_rating_bounds() {
        let mut d = draft();
        d.rating = -0.1;
        assert!(d.validate().is_err());
        d.rating = 10.5;
        assert!(d.validate().is_err());
        d.rating = f64::NAN;
        assert!(d.validate().is_err());
        d.rating = 10.0;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_empty_genres_rejected() {
        let mut d = draft();
        d.genres.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_review_score_checked() {
        let d = draft().with_reviews(vec![Review::new("troll", 11, "!!!")]);
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("troll"));
    }

    #[test]
    fn test_metadata_bounds() {
        let d = draft().with_metadata(Metadata {
            duration_minutes: 0,
            original_language: "English".to_string(),
            budget: 165_000_000,
        });
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_draft_defaults_from_json() {
        let json = r#"{"title": "Roma", "year": 2018, "director": "Alfonso Cuaron",
                       "genres": ["Drama"], "rating": 7.7}"#;
        let d: MovieDraft = serde_json::from_str(json).unwrap();
        assert!(d.available);
        assert!(d.cast.is_empty());
        assert!(d.reviews.is_empty());
        assert!(d.metadata.is_none());
    }

    #[test]
    fn test_from_json_missing_field_is_validation() {
        let err = MovieDraft::from_json(r#"{"title": "Roma", "year": 2018}"#).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_review_average_and_decade() {
        let mut movie = Movie::from_draft(draft(), Utc::now());
        assert_eq!(movie.review_average(), None);
        assert_eq!(movie.decade(), 2010);

        movie.reviews = vec![Review::new("a", 10, "x"), Review::new("b", 8, "y")];
        assert_eq!(movie.review_average(), Some(9.0));
    }

    #[test]
    fn test_from_draft_stamps_timestamps() {
        let now = Utc::now();
        let movie = Movie::from_draft(draft(), now);
        assert_eq!(movie.created_at, now);
        assert_eq!(movie.updated_at, now);
        assert_eq!(movie.title, "Interstellar");
    }
}
