//! Record-store operations over a [`MovieCollection`].
//!
//! The catalog validates input before it reaches the collection, turns
//! business-level requests (by title, by user) into filters and updates,
//! and projects stored documents into the shapes callers display.

use chrono::Utc;
use serde::Serialize;

use crate::collection::MovieCollection;
use crate::error::Result;
use crate::model::{rating_in_range, Movie, MovieDraft, MovieId, Review};
use crate::query::{Filter, IndexInfo, Sort, Update};
use crate::seed;

/// The listing projection of a movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub genres: Vec<String>,
    pub rating: f64,
}

impl From<&Movie> for MovieSummary {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year,
            director: movie.director.clone(),
            genres: movie.genres.clone(),
            rating: movie.rating,
        }
    }
}

/// A keyword hit: the title, rating and every review comment of the movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordMatch {
    pub title: String,
    pub rating: f64,
    pub comments: Vec<String>,
}

/// A full-text hit with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub director: String,
    pub rating: f64,
    pub score: f64,
}

/// Catalog operations borrowing a collection.
#[derive(Debug)]
pub struct Catalog<'a, C: MovieCollection + ?Sized> {
    collection: &'a C,
}

impl<'a, C: MovieCollection + ?Sized> Catalog<'a, C> {
    #[must_use]
    pub const fn new(collection: &'a C) -> Self {
        Self { collection }
    }

    /// Insert a new movie, assigning its id and timestamps.
    ///
    /// # Errors
    ///
    /// `Validation` for a draft outside the schema, `Conflict` for a
    /// title that is already stored, `Database` for storage faults.
    pub fn insert(&self, draft: MovieDraft) -> Result<MovieId> {
        draft.validate()?;
        let movie = Movie::from_draft(draft, Utc::now());
        self.collection.insert_one(&movie)?;
        log::info!("Inserted movie '{}' ({})", movie.title, movie.id);
        Ok(movie.id)
    }

    /// Every movie, best rated first.
    pub fn find_all(&self) -> Result<Vec<MovieSummary>> {
        self.summaries(&Filter::All, Sort::RatingDesc)
    }

    pub fn find_by_title_substring(&self, text: &str) -> Result<Vec<MovieSummary>> {
        self.summaries(&Filter::TitleContains(text.to_string()), Sort::Natural)
    }

    /// Movies listing `genre` among their genres (exact, case-sensitive).
    pub fn find_by_genre(&self, genre: &str) -> Result<Vec<MovieSummary>> {
        self.summaries(&Filter::Genre(genre.to_string()), Sort::Natural)
    }

    pub fn find_by_director_substring(&self, text: &str) -> Result<Vec<MovieSummary>> {
        self.summaries(&Filter::DirectorContains(text.to_string()), Sort::Natural)
    }

    /// Movies rated at least `threshold`, best rated first.
    pub fn find_by_min_rating(&self, threshold: f64) -> Result<Vec<MovieSummary>> {
        self.summaries(&Filter::MinRating(threshold), Sort::RatingDesc)
    }

    /// Movies whose title or any review comment contains `word`.
    pub fn find_by_keyword(&self, word: &str) -> Result<Vec<KeywordMatch>> {
        let movies = self
            .collection
            .find(&Filter::Keyword(word.to_string()), Sort::Natural)?;
        Ok(movies
            .into_iter()
            .map(|movie| KeywordMatch {
                title: movie.title,
                rating: movie.rating,
                comments: movie.reviews.into_iter().map(|r| r.comment).collect(),
            })
            .collect())
    }

    /// Relevance-ranked search over titles, directors and review comments.
    pub fn full_text_search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let hits = self.collection.text_search(query)?;
        log::debug!("Full-text query {:?} matched {} movies", query, hits.len());
        Ok(hits
            .into_iter()
            .map(|hit| SearchHit {
                title: hit.movie.title,
                director: hit.movie.director,
                rating: hit.movie.rating,
                score: hit.score,
            })
            .collect())
    }

    /// Replace the rating of the movie titled `title`.
    ///
    /// An out-of-range rating is logged and reported as `Ok(false)`
    /// without touching the collection.
    pub fn update_rating(&self, title: &str, rating: f64) -> Result<bool> {
        if !rating_in_range(rating) {
            log::error!("Rejected rating {} for '{}': must be within 0-10", rating, title);
            return Ok(false);
        }

        let result = self
            .collection
            .update_one(&Filter::TitleEquals(title.to_string()), &Update::SetRating(rating))?;
        if result.modified > 0 {
            log::info!("Rating of '{}' set to {}", title, rating);
        } else {
            log::warn!("No movie titled '{}' to rate", title);
        }
        Ok(result.modified > 0)
    }

    /// Append a review dated today to the movie titled `title`.
    ///
    /// A score outside 1-10 is logged and reported as `Ok(false)`.
    pub fn add_review(&self, title: &str, user: &str, score: i32, comment: &str) -> Result<bool> {
        if !Review::score_in_range(score) {
            log::error!("Rejected review by {} on '{}': score {} outside 1-10", user, title, score);
            return Ok(false);
        }

        let review = Review::new(user, score, comment);
        let result = self.collection.update_one(
            &Filter::TitleEquals(title.to_string()),
            &Update::PushReview(review),
        )?;
        if result.matched > 0 {
            log::info!("Review by {} added to '{}'", user, title);
        }
        Ok(result.matched > 0)
    }

    /// Remove every review `user` wrote on the movie titled `title`.
    pub fn delete_review(&self, title: &str, user: &str) -> Result<bool> {
        let result = self.collection.update_one(
            &Filter::TitleEquals(title.to_string()),
            &Update::PullReviewsBy(user.to_string()),
        )?;
        if result.modified > 0 {
            log::info!("Reviews by {} removed from '{}'", user, title);
        }
        Ok(result.modified > 0)
    }

    pub fn delete_movie(&self, title: &str) -> Result<bool> {
        let removed = self
            .collection
            .delete_one(&Filter::TitleEquals(title.to_string()))?;
        if removed == 1 {
            log::info!("Deleted movie '{}'", title);
        }
        Ok(removed == 1)
    }

    /// Load the bundled seed set, optionally clearing the collection first.
    ///
    /// All seed movies share one creation timestamp.
    pub fn load_seed(&self, clear: bool) -> Result<usize> {
        if clear {
            let removed = self.collection.clear()?;
            log::info!("Cleared {} movies", removed);
        }

        let now = Utc::now();
        let movies = seed::drafts()?
            .into_iter()
            .map(|draft| -> Result<Movie> {
                draft.validate()?;
                Ok(Movie::from_draft(draft, now))
            })
            .collect::<Result<Vec<_>>>()?;

        let inserted = self.collection.insert_many(&movies)?;
        log::info!("Loaded {} seed movies", inserted);
        Ok(inserted)
    }

    pub fn list_indexes(&self) -> Result<Vec<IndexInfo>> {
        self.collection.list_indexes()
    }

    pub fn count(&self) -> Result<u64> {
        self.collection.count()
    }

    fn summaries(&self, filter: &Filter, sort: Sort) -> Result<Vec<MovieSummary>> {
        let movies = self.collection.find(filter, sort)?;
        Ok(movies.iter().map(MovieSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Database;

    fn draft(title: &str, rating: f64) -> MovieDraft {
        MovieDraft::new(title, 2000, "Someone", vec!["Drama".to_string()], rating)
    }

    #[test]
    fn test_insert_rejects_invalid_draft_before_storage() {
        let db = Database::open_in_memory().unwrap();
        let catalog = Catalog::new(&db);

        let mut bad = draft("Bad", 5.0);
        bad.genres.clear();
        assert!(catalog.insert(bad).unwrap_err().is_validation());
        assert_eq!(catalog.count().unwrap(), 0);
    }

    #[test]
    fn test_find_all_ties_by_title() {
        let db = Database::open_in_memory().unwrap();
        let catalog = Catalog::new(&db);
        catalog.insert(draft("Beta", 8.0)).unwrap();
        catalog.insert(draft("Alpha", 8.0)).unwrap();
        catalog.insert(draft("Gamma", 9.0)).unwrap();

        let titles: Vec<_> = catalog
            .find_all()
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn test_update_rating_rejects_out_of_range() {
        let db = Database::open_in_memory().unwrap();
        let catalog = Catalog::new(&db);
        catalog.insert(draft("Alpha", 8.0)).unwrap();

        assert!(!catalog.update_rating("Alpha", 11.0).unwrap());
        assert!(!catalog.update_rating("Alpha", f64::NAN).unwrap());
        assert!(!catalog.update_rating("Missing", 5.0).unwrap());
        assert!(catalog.update_rating("Alpha", 10.0).unwrap());
        assert_eq!(catalog.find_all().unwrap()[0].rating, 10.0);
    }

    #[test]
    fn test_add_review_checks_score() {
        let db = Database::open_in_memory().unwrap();
        let catalog = Catalog::new(&db);
        catalog.insert(draft("Alpha", 8.0)).unwrap();

        assert!(!catalog.add_review("Alpha", "u", 0, "bad").unwrap());
        assert!(!catalog.add_review("Alpha", "u", 11, "bad").unwrap());
        assert!(!catalog.add_review("Missing", "u", 5, "ok").unwrap());
        assert!(catalog.add_review("Alpha", "u", 1, "ok").unwrap());

        let keyword = catalog.find_by_keyword("ok").unwrap();
        assert_eq!(keyword.len(), 1);
        assert_eq!(keyword[0].comments, vec!["ok"]);
    }

    #[test]
    fn test_delete_review_without_match_leaves_movie() {
        let db = Database::open_in_memory().unwrap();
        let catalog = Catalog::new(&db);
        catalog.insert(draft("Alpha", 8.0)).unwrap();
        let before = db.find(&Filter::All, Sort::Natural).unwrap();

        assert!(!catalog.delete_review("Alpha", "nobody").unwrap());
        let after = db.find(&Filter::All, Sort::Natural).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_movie() {
        let db = Database::open_in_memory().unwrap();
        let catalog = Catalog::new(&db);
        catalog.insert(draft("Alpha", 8.0)).unwrap();

        assert!(catalog.delete_movie("Alpha").unwrap());
        assert!(!catalog.delete_movie("Alpha").unwrap());
    }

    #[test]
    fn test_load_seed_twice_without_clear_conflicts() {
        let db = Database::open_in_memory().unwrap();
        let catalog = Catalog::new(&db);
        assert_eq!(catalog.load_seed(true).unwrap(), 11);

        let err = catalog.load_seed(false).unwrap_err();
        assert!(matches!(err, crate::Error::Conflict(_)));
        assert_eq!(catalog.count().unwrap(), 11);

        assert_eq!(catalog.load_seed(true).unwrap(), 11);
        assert_eq!(catalog.count().unwrap(), 11);
    }
}
