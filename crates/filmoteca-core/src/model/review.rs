use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lowest accepted review score.
pub const MIN_SCORE: i32 = 1;

/// Highest accepted review score.
pub const MAX_SCORE: i32 = 10;

/// A user review embedded in a movie document.
///
/// Reviews have no identity of their own; they are addressed by `user`
/// within their parent movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    pub score: i32,
    pub comment: String,

    /// Calendar date of the review, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// Set when the review is appended through the catalog; seed reviews
    /// carry only a date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Build a review stamped with the current time.
    #[must_use]
    pub fn new(user: impl Into<String>, score: i32, comment: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user: user.into(),
            score,
            comment: comment.into(),
            date: now.date_naive(),
            created_at: Some(now),
        }
    }

    /// Whether `score` lies within the accepted review range.
    #[must_use]
    pub const fn score_in_range(score: i32) -> bool {
        score >= MIN_SCORE && score <= MAX_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_new_stamps_date() {
        let review = Review::new("DreamWatcher", 9, "Brilliant");
        assert_eq!(review.user, "DreamWatcher");
        assert_eq!(review.score, 9);
        let created = review.created_at.unwrap();
        assert_eq!(review.date, created.date_naive());
    }

    #[test]
    fn test_score_bounds() {
        assert!(!Review::score_in_range(0));
        assert!(Review::score_in_range(1));
        assert!(Review::score_in_range(10));
        assert!(!Review::score_in_range(11));
    }

    #[test]
    fn test_seed_review_json_shape() {
        let json = r#"{"user": "ArtHouse", "score": 8, "comment": "Visual poetry", "date": "2023-09-10"}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.date, NaiveDate::from_ymd_opt(2023, 9, 10).unwrap());
        assert!(review.created_at.is_none());

        let back = serde_json::to_value(&review).unwrap();
        assert_eq!(back["date"], "2023-09-10");
        assert!(back.get("created_at").is_none());
    }
}
