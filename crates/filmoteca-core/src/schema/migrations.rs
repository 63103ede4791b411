/// A schema migration.
#[derive(Debug)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

const MIGRATION_001: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Movie documents. Nested fields are JSON text; seq keys the full-text rows.
CREATE TABLE IF NOT EXISTS movies (
    seq INTEGER PRIMARY KEY,
    id TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL CHECK (length(trim(title)) > 0),
    year INTEGER NOT NULL CHECK (year BETWEEN 1888 AND 2030),
    director TEXT NOT NULL,
    genres TEXT NOT NULL CHECK (
        json_valid(genres)
        AND json_type(genres) = 'array'
        AND json_array_length(genres) >= 1
    ),
    rating REAL NOT NULL CHECK (rating BETWEEN 0 AND 10),
    cast_members TEXT NOT NULL DEFAULT '[]' CHECK (json_valid(cast_members)),
    reviews TEXT NOT NULL DEFAULT '[]' CHECK (
        json_valid(reviews) AND json_type(reviews) = 'array'
    ),
    available INTEGER NOT NULL DEFAULT 1,
    metadata TEXT CHECK (
        metadata IS NULL OR (
            json_valid(metadata)
            AND json_extract(metadata, '$.duration_minutes') >= 1
            AND json_extract(metadata, '$.budget') >= 0
        )
    ),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Lookup indexes. Genre lookups go through json_each.
CREATE UNIQUE INDEX IF NOT EXISTS idx_movies_title ON movies(title);
CREATE INDEX IF NOT EXISTS idx_movies_year ON movies(year DESC);
CREATE INDEX IF NOT EXISTS idx_movies_rating ON movies(rating DESC);
CREATE INDEX IF NOT EXISTS idx_movies_director ON movies(director);

-- Review scores live inside JSON, out of reach of CHECK constraints.
CREATE TRIGGER IF NOT EXISTS movies_review_score_insert
BEFORE INSERT ON movies
WHEN EXISTS (
    SELECT 1 FROM json_each(NEW.reviews)
    WHERE json_type(value, '$.score') IS NOT 'integer'
       OR json_extract(value, '$.score') NOT BETWEEN 1 AND 10
)
BEGIN
    SELECT RAISE(ABORT, 'review score must be between 1 and 10');
END;

CREATE TRIGGER IF NOT EXISTS movies_review_score_update
BEFORE UPDATE OF reviews ON movies
WHEN EXISTS (
    SELECT 1 FROM json_each(NEW.reviews)
    WHERE json_type(value, '$.score') IS NOT 'integer'
       OR json_extract(value, '$.score') NOT BETWEEN 1 AND 10
)
BEGIN
    SELECT RAISE(ABORT, 'review score must be between 1 and 10');
END;

-- Full-text index over titles, directors and review comments
CREATE VIRTUAL TABLE IF NOT EXISTS movies_fts USING fts5(
    title,
    director,
    comments,
    tokenize = 'unicode61 remove_diacritics 2'
);

CREATE TRIGGER IF NOT EXISTS movies_fts_insert AFTER INSERT ON movies
BEGIN
    INSERT INTO movies_fts (rowid, title, director, comments)
    VALUES (
        NEW.seq,
        NEW.title,
        NEW.director,
        (SELECT coalesce(group_concat(json_extract(value, '$.comment'), ' '), '')
         FROM json_each(NEW.reviews))
    );
END;

CREATE TRIGGER IF NOT EXISTS movies_fts_delete AFTER DELETE ON movies
BEGIN
    DELETE FROM movies_fts WHERE rowid = OLD.seq;
END;

CREATE TRIGGER IF NOT EXISTS movies_fts_update AFTER UPDATE ON movies
BEGIN
    DELETE FROM movies_fts WHERE rowid = OLD.seq;
    INSERT INTO movies_fts (rowid, title, director, comments)
    VALUES (
        NEW.seq,
        NEW.title,
        NEW.director,
        (SELECT coalesce(group_concat(json_extract(value, '$.comment'), ' '), '')
         FROM json_each(NEW.reviews))
    );
END;
"#;

pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "movie_documents",
    sql: MIGRATION_001,
}];
