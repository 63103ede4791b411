use chrono::{DateTime, Utc};
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::collection::MovieCollection;
use crate::error::Result;
use crate::model::{Movie, MovieId};
use crate::query::{Filter, IndexInfo, ScoredMovie, Sort, Update, UpdateResult};

use super::migrations::MIGRATIONS;

const MOVIE_COLUMNS: &str = "m.id, m.title, m.year, m.director, m.genres, m.rating, \
     m.cast_members, m.reviews, m.available, m.metadata, m.created_at, m.updated_at";

const PULL_REVIEWS_SQL: &str = "UPDATE movies
     SET reviews = (
             SELECT json_group_array(json(value) ORDER BY key)
             FROM json_each(movies.reviews)
             WHERE json_extract(value, '$.user') IS NOT ?1
         ),
         updated_at = ?2
     WHERE seq = ?3
       AND EXISTS (
             SELECT 1 FROM json_each(movies.reviews)
             WHERE json_extract(value, '$.user') = ?1
         )";

const FULL_TEXT_COLUMNS: [&str; 3] = ["title", "director", "comments"];

/// A SQLite-backed movie collection.
///
/// Each movie is one row; genres, cast, reviews and metadata are stored
/// as JSON so the row reads back as the whole document.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and apply migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::init(Connection::open(path)?)
    }

    /// Open an in-memory database (for tests and throwaway sessions).
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    fn init(conn: Connection) -> Result<Self> {
        register_functions(&conn)?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    fn apply_migrations(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        let mut stmt = self
            .conn
            .prepare("SELECT version FROM schema_migrations ORDER BY version")?;
        let applied: Vec<u32> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        for migration in MIGRATIONS {
            if !applied.contains(&migration.version) {
                log::info!(
                    "Applying migration {} ({})",
                    migration.version,
                    migration.name
                );
                self.conn.execute_batch(migration.sql)?;
                self.conn.execute(
                    "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                    params![migration.version, migration.name],
                )?;
            }
        }

        Ok(())
    }
}

/// `contains_ci(haystack, needle)`: Unicode-aware case-insensitive
/// substring test. SQLite's own `LIKE` only folds ASCII.
fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "contains_ci",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let haystack: Option<String> = ctx.get(0)?;
            let needle: Option<String> = ctx.get(1)?;
            Ok(match (haystack, needle) {
                (Some(haystack), Some(needle)) => {
                    haystack.to_lowercase().contains(&needle.to_lowercase())
                }
                _ => false,
            })
        },
    )
}

/// SQL predicate and positional parameters for a filter.
///
/// Column references are unqualified so the predicate works against
/// `movies` with or without an alias.
fn filter_clause(filter: &Filter) -> (&'static str, Vec<Value>) {
    match filter {
        Filter::All => ("1 = 1", Vec::new()),
        Filter::TitleEquals(title) => ("title = ?", vec![Value::Text(title.clone())]),
        Filter::TitleContains(text) => ("contains_ci(title, ?)", vec![Value::Text(text.clone())]),
        Filter::Genre(genre) => (
            "EXISTS (SELECT 1 FROM json_each(genres) WHERE value = ?)",
            vec![Value::Text(genre.clone())],
        ),
        Filter::DirectorContains(text) => (
            "contains_ci(director, ?)",
            vec![Value::Text(text.clone())],
        ),
        Filter::MinRating(threshold) => ("rating >= ?", vec![Value::Real(*threshold)]),
        Filter::YearRange { start, end } => (
            "year BETWEEN ? AND ?",
            vec![Value::Integer(i64::from(*start)), Value::Integer(i64::from(*end))],
        ),
        Filter::Keyword(word) => (
            "(contains_ci(title, ?) OR EXISTS (
                 SELECT 1 FROM json_each(reviews)
                 WHERE contains_ci(json_extract(value, '$.comment'), ?)))",
            vec![Value::Text(word.clone()), Value::Text(word.clone())],
        ),
    }
}

fn order_clause(sort: Sort) -> &'static str {
    match sort {
        Sort::Natural => "m.seq",
        Sort::RatingDesc => "m.rating DESC, m.title ASC",
        Sort::YearAsc => "m.year ASC, m.title ASC",
        Sort::TitleAsc => "m.title ASC",
    }
}

/// Turn free text into an FTS5 query in which any term may match.
///
/// Terms are quoted so user input can never be read as FTS5 syntax.
fn match_expression(query: &str) -> Option<String> {
    let terms: Vec<String> = query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|term| !term.is_empty())
        .map(|term| format!("\"{term}\""))
        .collect();
    if terms.is_empty() {
        None
    } else {
        Some(terms.join(" OR "))
    }
}

fn insert_movie(conn: &Connection, movie: &Movie) -> Result<()> {
    conn.execute(
        "INSERT INTO movies (
            id, title, year, director, genres, rating, cast_members,
            reviews, available, metadata, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            movie.id.to_string(),
            movie.title,
            movie.year,
            movie.director,
            serde_json::to_string(&movie.genres)?,
            movie.rating,
            serde_json::to_string(&movie.cast)?,
            serde_json::to_string(&movie.reviews)?,
            movie.available,
            movie
                .metadata
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
            movie.created_at.to_rfc3339(),
            movie.updated_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

fn conversion_error(
    idx: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn json_column<T: DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw).map_err(|e| conversion_error(idx, e))
}

fn optional_json_column<T: DeserializeOwned>(
    row: &Row<'_>,
    idx: usize,
) -> rusqlite::Result<Option<T>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|raw| serde_json::from_str(&raw).map_err(|e| conversion_error(idx, e)))
        .transpose()
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

fn row_to_movie(row: &Row<'_>) -> rusqlite::Result<Movie> {
    let id: String = row.get(0)?;
    Ok(Movie {
        id: id.parse::<MovieId>().map_err(|e| conversion_error(0, e))?,
        title: row.get(1)?,
        year: row.get(2)?,
        director: row.get(3)?,
        genres: json_column(row, 4)?,
        rating: row.get(5)?,
        cast: json_column(row, 6)?,
        reviews: json_column(row, 7)?,
        available: row.get(8)?,
        metadata: optional_json_column(row, 9)?,
        created_at: timestamp_column(row, 10)?,
        updated_at: timestamp_column(row, 11)?,
    })
}

impl MovieCollection for Database {
    fn insert_one(&self, movie: &Movie) -> Result<()> {
        insert_movie(&self.conn, movie)
    }

    fn insert_many(&self, movies: &[Movie]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        for movie in movies {
            insert_movie(&tx, movie)?;
        }
        tx.commit()?;
        Ok(movies.len())
    }

    fn find(&self, filter: &Filter, sort: Sort) -> Result<Vec<Movie>> {
        let (clause, values) = filter_clause(filter);
        let sql = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies m WHERE {clause} ORDER BY {}",
            order_clause(sort)
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let movies = stmt
            .query_map(params_from_iter(values), row_to_movie)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(movies)
    }

    fn update_one(&self, filter: &Filter, update: &Update) -> Result<UpdateResult> {
        let (clause, values) = filter_clause(filter);
        let tx = self.conn.unchecked_transaction()?;

        let seq: Option<i64> = tx
            .query_row(
                &format!("SELECT seq FROM movies WHERE {clause} ORDER BY seq LIMIT 1"),
                params_from_iter(values),
                |row| row.get(0),
            )
            .optional()?;
        let Some(seq) = seq else {
            return Ok(UpdateResult::default());
        };

        let now = Utc::now().to_rfc3339();
        let modified = match update {
            Update::SetRating(rating) => tx.execute(
                "UPDATE movies SET rating = ?1, updated_at = ?2 WHERE seq = ?3",
                params![rating, now, seq],
            )?,
            Update::PushReview(review) => tx.execute(
                "UPDATE movies
                 SET reviews = json_insert(reviews, '$[#]', json(?1)), updated_at = ?2
                 WHERE seq = ?3",
                params![serde_json::to_string(review)?, now, seq],
            )?,
            Update::PullReviewsBy(user) => {
                tx.execute(PULL_REVIEWS_SQL, params![user, now, seq])?
            }
        };
        tx.commit()?;

        Ok(UpdateResult {
            matched: 1,
            modified: modified as u64,
        })
    }

    fn delete_one(&self, filter: &Filter) -> Result<u64> {
        let (clause, values) = filter_clause(filter);
        let removed = self.conn.execute(
            &format!(
                "DELETE FROM movies
                 WHERE seq = (SELECT seq FROM movies WHERE {clause} ORDER BY seq LIMIT 1)"
            ),
            params_from_iter(values),
        )?;
        Ok(removed as u64)
    }

    fn clear(&self) -> Result<u64> {
        let removed = self.conn.execute("DELETE FROM movies", [])?;
        Ok(removed as u64)
    }

    fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    fn text_search(&self, query: &str) -> Result<Vec<ScoredMovie>> {
        let Some(expression) = match_expression(query) else {
            return Ok(Vec::new());
        };

        let sql = format!(
            "SELECT {MOVIE_COLUMNS}, -bm25(movies_fts) AS score
             FROM movies_fts
             JOIN movies m ON m.seq = movies_fts.rowid
             WHERE movies_fts MATCH ?1
             ORDER BY score DESC, m.title ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let hits = stmt
            .query_map([expression], |row| {
                Ok(ScoredMovie {
                    movie: row_to_movie(row)?,
                    score: row.get(12)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(hits)
    }

    fn list_indexes(&self) -> Result<Vec<IndexInfo>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, \"unique\" FROM pragma_index_list('movies')
             WHERE origin = 'c'
             ORDER BY name",
        )?;
        let declared: Vec<(String, bool)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut columns_stmt = self
            .conn
            .prepare("SELECT name FROM pragma_index_info(?1) ORDER BY seqno")?;
        let mut indexes = Vec::with_capacity(declared.len() + 1);
        for (name, unique) in declared {
            let columns = columns_stmt
                .query_map([&name], |row| row.get(0))?
                .collect::<rusqlite::Result<Vec<String>>>()?;
            indexes.push(IndexInfo {
                name,
                columns,
                unique,
                full_text: false,
            });
        }

        indexes.push(IndexInfo {
            name: "movies_fts".to_string(),
            columns: FULL_TEXT_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            unique: false,
            full_text: true,
        });
        Ok(indexes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CastMember, Metadata, MovieDraft, Review};

    fn movie(title: &str, year: i32, director: &str, genres: &[&str], rating: f64) -> Movie {
        let draft = MovieDraft::new(
            title,
            year,
            director,
            genres.iter().map(|g| (*g).to_string()).collect(),
            rating,
        );
        Movie::from_draft(draft, Utc::now())
    }

    fn sample_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        let mut inception = movie(
            "Inception",
            2010,
            "Christopher Nolan",
            &["Science Fiction", "Action"],
            8.8,
        );
        inception.reviews = vec![Review::new("DreamWatcher", 9, "Nolan's brilliant mind")];
        inception.metadata = Some(Metadata {
            duration_minutes: 148,
            original_language: "English".to_string(),
            budget: 160_000_000,
        });
        let roma = movie("Roma", 2018, "Alfonso Cuarón", &["Drama"], 7.7);
        let elite = movie("Élite Squad", 2007, "José Padilha", &["Action", "Crime"], 8.0);
        db.insert_many(&[inception, roma, elite]).unwrap();
        db
    }

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(db.count().unwrap(), 0);
    }

    #[test]
    fn test_movie_round_trip() {
        let db = Database::open_in_memory().unwrap();
        let draft = MovieDraft::new(
            "Coco",
            2017,
            "Lee Unkrich",
            vec!["Animation".to_string(), "Family".to_string()],
            8.4,
        )
        .with_cast(vec![
            CastMember::new("Anthony Gonzalez", "Miguel"),
            CastMember::new("Gael García Bernal", "Héctor"),
        ])
        .with_reviews(vec![Review::new("PixarFan", 10, "Moving")])
        .with_available(false);
        let original = Movie::from_draft(draft, Utc::now());
        db.insert_one(&original).unwrap();

        let stored = db.find(&Filter::All, Sort::Natural).unwrap();
        assert_eq!(stored, vec![original]);
        assert!(!stored[0].available);
        assert_eq!(stored[0].cast[1].role, "Héctor");
    }

    #[test]
    fn test_schema_rejects_out_of_range_rating() {
        let db = Database::open_in_memory().unwrap();
        let err = db
            .insert_one(&movie("Broken", 2000, "Nobody", &["Drama"], 11.0))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(db.count().unwrap(), 0);
    }

    #[test]
    fn test_schema_rejects_empty_genres() {
        let db = Database::open_in_memory().unwrap();
        let err = db
            .insert_one(&movie("Genreless", 2000, "Nobody", &[], 5.0))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_schema_rejects_bad_review_score() {
        let db = sample_db();
        let result = db
            .update_one(
                &Filter::TitleEquals("Roma".to_string()),
                &Update::PushReview(Review::new("troll", 0, "meh")),
            )
            .unwrap_err();
        assert!(result.is_validation());

        let roma = db
            .find(&Filter::TitleEquals("Roma".to_string()), Sort::Natural)
            .unwrap();
        assert!(roma[0].reviews.is_empty());
    }

    #[test]
    fn test_duplicate_title_is_conflict() {
        let db = sample_db();
        let err = db
            .insert_one(&movie("Roma", 1990, "Someone Else", &["Drama"], 5.0))
            .unwrap_err();
        assert!(matches!(err, crate::Error::Conflict(_)));
    }

    #[test]
    fn test_insert_many_is_atomic() {
        let db = Database::open_in_memory().unwrap();
        let good = movie("Good", 2000, "A", &["Drama"], 5.0);
        let bad = movie("Bad", 1500, "B", &["Drama"], 5.0);
        assert!(db.insert_many(&[good, bad]).is_err());
        assert_eq!(db.count().unwrap(), 0);
    }

    #[test]
    fn test_filters() {
        let db = sample_db();

        let by_title = db
            .find(&Filter::TitleContains("ÉLITE".to_string()), Sort::Natural)
            .unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Élite Squad");

        let by_genre = db
            .find(&Filter::Genre("Action".to_string()), Sort::TitleAsc)
            .unwrap();
        let titles: Vec<_> = by_genre.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Inception", "Élite Squad"]);

        let none = db
            .find(&Filter::Genre("action".to_string()), Sort::Natural)
            .unwrap();
        assert!(none.is_empty());

        let by_director = db
            .find(&Filter::DirectorContains("nolan".to_string()), Sort::Natural)
            .unwrap();
        assert_eq!(by_director.len(), 1);

        let by_rating = db.find(&Filter::MinRating(8.0), Sort::RatingDesc).unwrap();
        let titles: Vec<_> = by_rating.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Inception", "Élite Squad"]);

        let by_years = db
            .find(&Filter::YearRange { start: 2007, end: 2010 }, Sort::YearAsc)
            .unwrap();
        let titles: Vec<_> = by_years.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Élite Squad", "Inception"]);

        let by_keyword = db
            .find(&Filter::Keyword("BRILLIANT".to_string()), Sort::Natural)
            .unwrap();
        assert_eq!(by_keyword.len(), 1);
        assert_eq!(by_keyword[0].title, "Inception");
    }

    #[test]
    fn test_push_and_pull_reviews() {
        let db = sample_db();
        let roma = Filter::TitleEquals("Roma".to_string());

        db.update_one(&roma, &Update::PushReview(Review::new("ArtHouse", 8, "Poetry")))
            .unwrap();
        db.update_one(&roma, &Update::PushReview(Review::new("Critic", 6, "Slow")))
            .unwrap();
        db.update_one(&roma, &Update::PushReview(Review::new("ArtHouse", 9, "Again")))
            .unwrap();

        let result = db
            .update_one(&roma, &Update::PullReviewsBy("ArtHouse".to_string()))
            .unwrap();
        assert_eq!(result, UpdateResult { matched: 1, modified: 1 });

        let stored = db.find(&roma, Sort::Natural).unwrap();
        assert_eq!(stored[0].reviews.len(), 1);
        assert_eq!(stored[0].reviews[0].user, "Critic");

        let again = db
            .update_one(&roma, &Update::PullReviewsBy("ArtHouse".to_string()))
            .unwrap();
        assert_eq!(again, UpdateResult { matched: 1, modified: 0 });
    }

    #[test]
    fn test_pull_keeps_review_order() {
        let db = sample_db();
        let roma = Filter::TitleEquals("Roma".to_string());
        for (user, score) in [("a", 1), ("b", 2), ("c", 3), ("b", 4), ("d", 5)] {
            db.update_one(&roma, &Update::PushReview(Review::new(user, score, "x")))
                .unwrap();
        }
        db.update_one(&roma, &Update::PullReviewsBy("b".to_string()))
            .unwrap();

        let stored = db.find(&roma, Sort::Natural).unwrap();
        let users: Vec<_> = stored[0].reviews.iter().map(|r| r.user.as_str()).collect();
        assert_eq!(users, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_update_refreshes_updated_at() {
        let db = sample_db();
        let roma = Filter::TitleEquals("Roma".to_string());
        let before = db.find(&roma, Sort::Natural).unwrap()[0].updated_at;

        db.update_one(&roma, &Update::SetRating(8.0)).unwrap();

        let after = db.find(&roma, Sort::Natural).unwrap();
        assert_eq!(after[0].rating, 8.0);
        assert!(after[0].updated_at >= before);
        assert_eq!(after[0].created_at, before);
    }

    #[test]
    fn test_update_without_match() {
        let db = sample_db();
        let result = db
            .update_one(
                &Filter::TitleEquals("Missing".to_string()),
                &Update::SetRating(5.0),
            )
            .unwrap();
        assert_eq!(result, UpdateResult::default());
    }

    #[test]
    fn test_delete_one_and_clear() {
        let db = sample_db();
        assert_eq!(
            db.delete_one(&Filter::TitleEquals("Roma".to_string())).unwrap(),
            1
        );
        assert_eq!(
            db.delete_one(&Filter::TitleEquals("Roma".to_string())).unwrap(),
            0
        );
        assert_eq!(db.count().unwrap(), 2);
        assert_eq!(db.clear().unwrap(), 2);
        assert_eq!(db.count().unwrap(), 0);
    }

    #[test]
    fn test_text_search_matches_any_term() {
        let db = sample_db();
        let hits = db.text_search("nolan cuaron").unwrap();
        let titles: Vec<_> = hits.iter().map(|h| h.movie.title.as_str()).collect();
        assert_eq!(hits.len(), 2);
        assert!(titles.contains(&"Inception"));
        assert!(titles.contains(&"Roma"));
        assert!(hits.iter().all(|h| h.score > 0.0));
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_text_search_indexes_review_comments() {
        let db = sample_db();
        let roma = Filter::TitleEquals("Roma".to_string());
        assert!(db.text_search("poetry").unwrap().is_empty());

        db.update_one(&roma, &Update::PushReview(Review::new("ArtHouse", 8, "Visual poetry")))
            .unwrap();
        let hits = db.text_search("poetry").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].movie.title, "Roma");

        db.delete_one(&roma).unwrap();
        assert!(db.text_search("poetry").unwrap().is_empty());
    }

    #[test]
    fn test_text_search_ignores_syntax() {
        let db = sample_db();
        assert!(db.text_search("  \"*() ").unwrap().is_empty());
        assert!(db.text_search("NEAR(inception").unwrap().len() == 1);
    }

    #[test]
    fn test_list_indexes() {
        let db = Database::open_in_memory().unwrap();
        let indexes = db.list_indexes().unwrap();
        let names: Vec<_> = indexes.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "idx_movies_director",
                "idx_movies_rating",
                "idx_movies_title",
                "idx_movies_year",
                "movies_fts"
            ]
        );
        let title = &indexes[2];
        assert!(title.unique);
        assert_eq!(title.columns, vec!["title"]);
        assert!(indexes[4].full_text);
    }

    #[test]
    fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.db");
        {
            let db = Database::open(&path).unwrap();
            db.insert_one(&movie("Roma", 2018, "Alfonso Cuarón", &["Drama"], 7.7))
                .unwrap();
        }
        let db = Database::open(&path).unwrap();
        assert_eq!(db.count().unwrap(), 1);
        assert_eq!(db.text_search("roma").unwrap().len(), 1);
    }

    #[test]
    fn test_match_expression() {
        assert_eq!(
            match_expression("Nolan, science!"),
            Some("\"Nolan\" OR \"science\"".to_string())
        );
        assert_eq!(match_expression(" - "), None);
    }
}
