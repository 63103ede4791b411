use anyhow::{Context, Result};
use std::path::Path;

use filmoteca_core::{Catalog, Database, IndexInfo, KeywordMatch, MovieDraft, MovieSummary, SearchHit};

use crate::output::Output;

/// What `find` looks up.
#[derive(Debug, Clone, clap::Subcommand)]
pub enum FindBy {
    /// Case-insensitive substring of the title
    Title { text: String },
    /// Exact genre label (case-sensitive)
    Genre { genre: String },
    /// Case-insensitive substring of the director
    Director { text: String },
    /// Rating at or above a threshold, best rated first
    MinRating {
        #[arg(allow_negative_numbers = true)]
        threshold: f64,
    },
    /// Substring of the title or of any review comment
    Keyword { word: String },
    /// Full-text search over titles, directors and review comments
    Text { query: String },
}

fn print_summaries(movies: &[MovieSummary]) {
    if movies.is_empty() {
        println!("No movies found.");
        return;
    }
    for movie in movies {
        println!(
            "  {:<28} {}  {:<24} {:>4.1}  {}",
            movie.title,
            movie.year,
            movie.director,
            movie.rating,
            movie.genres.join(", ")
        );
    }
}

fn print_keyword_matches(matches: &[KeywordMatch]) {
    if matches.is_empty() {
        println!("No movies found.");
        return;
    }
    for hit in matches {
        println!("  {} ({:.1})", hit.title, hit.rating);
        for comment in &hit.comments {
            println!("      \"{}\"", comment);
        }
    }
}

fn print_search_hits(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No matches.");
        return;
    }
    for hit in hits {
        println!(
            "  {:<28} (Dir: {}) - Score: {:.2}",
            hit.title, hit.director, hit.score
        );
    }
}

/// Load the seed set, replacing the collection unless `keep` is set.
pub fn run_init(db: &Database, out: Output, keep: bool) -> Result<()> {
    let inserted = Catalog::new(db)
        .load_seed(!keep)
        .context("Failed to load seed movies")?;
    out.outcome(true, &format!("Loaded {} movies", inserted), "")
}

pub fn run_list(db: &Database, out: Output) -> Result<()> {
    let movies = Catalog::new(db).find_all()?;
    out.emit(movies.as_slice(), print_summaries)
}

pub fn run_find(db: &Database, out: Output, by: FindBy) -> Result<()> {
    let catalog = Catalog::new(db);
    match by {
        FindBy::Title { text } => {
            out.emit(catalog.find_by_title_substring(&text)?.as_slice(), print_summaries)
        }
        FindBy::Genre { genre } => {
            out.emit(catalog.find_by_genre(&genre)?.as_slice(), print_summaries)
        }
        FindBy::Director { text } => out.emit(
            catalog.find_by_director_substring(&text)?.as_slice(),
            print_summaries,
        ),
        FindBy::MinRating { threshold } => out.emit(
            catalog.find_by_min_rating(threshold)?.as_slice(),
            print_summaries,
        ),
        FindBy::Keyword { word } => out.emit(
            catalog.find_by_keyword(&word)?.as_slice(),
            print_keyword_matches,
        ),
        FindBy::Text { query } => out.emit(
            catalog.full_text_search(&query)?.as_slice(),
            print_search_hits,
        ),
    }
}

/// Insert the movie described by a JSON file.
pub fn run_add(db: &Database, out: Output, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let draft = MovieDraft::from_json(&json)?;
    let title = draft.title.clone();
    let id = Catalog::new(db)
        .insert(draft)
        .with_context(|| format!("Failed to insert '{}'", title))?;
    out.outcome(true, &format!("Inserted '{}' ({})", title, id), "")
}

pub fn run_rate(db: &Database, out: Output, title: &str, rating: f64) -> Result<()> {
    let updated = Catalog::new(db).update_rating(title, rating)?;
    out.outcome(
        updated,
        &format!("Rating of '{}' set to {}", title, rating),
        &format!("Rating of '{}' not updated (unknown title or rating outside 0-10)", title),
    )
}

pub fn run_review_add(
    db: &Database,
    out: Output,
    title: &str,
    user: &str,
    score: i32,
    comment: &str,
) -> Result<()> {
    let added = Catalog::new(db).add_review(title, user, score, comment)?;
    out.outcome(
        added,
        &format!("Review by {} added to '{}'", user, title),
        "Review not added (unknown title or score outside 1-10)",
    )
}

pub fn run_review_delete(db: &Database, out: Output, title: &str, user: &str) -> Result<()> {
    let removed = Catalog::new(db).delete_review(title, user)?;
    out.outcome(
        removed,
        &format!("Reviews by {} removed from '{}'", user, title),
        &format!("No review by {} on '{}'", user, title),
    )
}

pub fn run_delete(db: &Database, out: Output, title: &str) -> Result<()> {
    let deleted = Catalog::new(db).delete_movie(title)?;
    out.outcome(
        deleted,
        &format!("Deleted '{}'", title),
        &format!("No movie titled '{}'", title),
    )
}

pub fn run_indexes(db: &Database, out: Output) -> Result<()> {
    let indexes = Catalog::new(db).list_indexes()?;
    out.emit(indexes.as_slice(), |indexes: &[IndexInfo]| {
        for index in indexes {
            let kind = if index.full_text {
                "full-text"
            } else if index.unique {
                "unique"
            } else {
                "index"
            };
            println!("  {:<22} {:<10} {}", index.name, kind, index.columns.join(", "));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmoteca_core::MovieCollection;

    #[test]
    fn test_add_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("movie.json");
        std::fs::write(
            &file,
            r#"{"title": "Spirited Away", "year": 2001, "director": "Hayao Miyazaki",
                "genres": ["Animation"], "rating": 8.6}"#,
        )
        .unwrap();

        let db = Database::open_in_memory().unwrap();
        run_add(&db, Output::new(false), &file).unwrap();
        assert_eq!(db.count().unwrap(), 1);

        assert!(run_add(&db, Output::new(false), &file).is_err());
        assert!(run_add(&db, Output::new(false), &dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_mutations_report_without_failing() {
        let db = Database::open_in_memory().unwrap();
        run_init(&db, Output::new(true), false).unwrap();

        run_rate(&db, Output::new(false), "Roma", 8.0).unwrap();
        run_rate(&db, Output::new(false), "Roma", 12.0).unwrap();
        run_review_add(&db, Output::new(false), "Roma", "me", 7, "Lovely").unwrap();
        run_review_delete(&db, Output::new(false), "Roma", "me").unwrap();
        run_delete(&db, Output::new(false), "Roma").unwrap();
        assert_eq!(db.count().unwrap(), 10);

        run_find(&db, Output::new(true), FindBy::Text { query: "nolan".to_string() }).unwrap();
        run_indexes(&db, Output::new(false)).unwrap();
    }
}
