use std::collections::BTreeSet;

use filmoteca_core::{Filter, Movie, MovieCollection, MovieSummary, Result, Sort};

use crate::pipeline::{desc, group_by, round_to, round_to_int, Accumulator};
use crate::rows::{
    DecadeEntry, DecadeReport, DirectorRanking, GenreRating, GenreStats, GeneralStats,
    ReviewAnalysis, TopMovie,
};

/// Default truncation for the ranked reports.
pub const DEFAULT_LIMIT: usize = 5;

/// Decimal places kept on reported means and scores.
const PLACES: i32 = 2;

/// Canned analytical reports over a movie collection.
///
/// Every report performs one read of the collection and aggregates in
/// process. Ranked reports sort and truncate on unrounded figures and
/// round only the rows they return.
#[derive(Debug)]
pub struct Reports<'a, C: MovieCollection + ?Sized> {
    collection: &'a C,
}

impl<'a, C: MovieCollection + ?Sized> Reports<'a, C> {
    #[must_use]
    pub const fn new(collection: &'a C) -> Self {
        Self { collection }
    }

    /// Movies released within `[start, end]`, oldest first.
    pub fn year_range(&self, start: i32, end: i32) -> Result<Vec<MovieSummary>> {
        if start > end {
            return Ok(Vec::new());
        }
        let movies = self
            .collection
            .find(&Filter::YearRange { start, end }, Sort::YearAsc)?;
        Ok(movies.iter().map(MovieSummary::from).collect())
    }

    pub fn avg_rating_by_genre(&self) -> Result<Vec<GenreRating>> {
        Ok(avg_rating_by_genre(&self.load("genre ratings")?))
    }

    pub fn top_directors(&self, limit: usize) -> Result<Vec<DirectorRanking>> {
        Ok(top_directors(&self.load("top directors")?, limit))
    }

    pub fn genre_stats(&self) -> Result<Vec<GenreStats>> {
        Ok(genre_stats(&self.load("genre statistics")?))
    }

    pub fn top_movies(&self, n: usize) -> Result<Vec<TopMovie>> {
        Ok(top_movies(&self.load("top movies")?, n))
    }

    pub fn review_analysis(&self) -> Result<Vec<ReviewAnalysis>> {
        Ok(review_analysis(&self.load("review analysis")?))
    }

    pub fn decade_report(&self) -> Result<Vec<DecadeReport>> {
        Ok(decade_report(&self.load("decade report")?))
    }

    pub fn general_stats(&self) -> Result<GeneralStats> {
        Ok(general_stats(&self.load("general statistics")?))
    }

    fn load(&self, report: &str) -> Result<Vec<Movie>> {
        let movies = self.collection.find(&Filter::All, Sort::Natural)?;
        log::debug!("Running {} over {} movies", report, movies.len());
        Ok(movies)
    }
}

/// One `(genre, movie)` pair per genre listed by each movie.
fn unwind_genres(movies: &[Movie]) -> impl Iterator<Item = (&str, &Movie)> {
    movies
        .iter()
        .flat_map(|movie| movie.genres.iter().map(move |genre| (genre.as_str(), movie)))
}

fn mean(acc: &Accumulator) -> f64 {
    acc.mean().unwrap_or_default()
}

fn mean_rounded(acc: &Accumulator) -> f64 {
    round_to(mean(acc), PLACES)
}

/// Mean budget and runtime of the movies that carry metadata.
fn metadata_means<'m>(movies: impl Iterator<Item = &'m Movie>) -> (Accumulator, Accumulator) {
    let mut budget = Accumulator::default();
    let mut duration = Accumulator::default();
    for metadata in movies.filter_map(|m| m.metadata.as_ref()) {
        budget.push(metadata.budget as f64);
        duration.push(metadata.duration_minutes as f64);
    }
    (budget, duration)
}

pub fn avg_rating_by_genre(movies: &[Movie]) -> Vec<GenreRating> {
    let mut groups: Vec<(&str, Accumulator)> =
        group_by(unwind_genres(movies), |(genre, _)| *genre)
            .into_iter()
            .map(|(genre, group)| (genre, group.iter().map(|(_, m)| m.rating).collect()))
            .collect();

    groups.sort_by(|(a_genre, a), (b_genre, b)| {
        desc(mean(a), mean(b)).then_with(|| a_genre.cmp(b_genre))
    });
    groups
        .into_iter()
        .map(|(genre, acc)| GenreRating {
            genre: genre.to_string(),
            avg_rating: mean_rounded(&acc),
            count: acc.count,
        })
        .collect()
}

pub fn top_directors(movies: &[Movie], limit: usize) -> Vec<DirectorRanking> {
    let mut groups: Vec<(&str, Vec<&Movie>, Accumulator)> =
        group_by(movies, |m| m.director.as_str())
            .into_iter()
            .map(|(director, group)| {
                let acc = group.iter().map(|m| m.rating).collect();
                (director, group, acc)
            })
            .collect();

    groups.sort_by(|(a_director, _, a), (b_director, _, b)| {
        b.count
            .cmp(&a.count)
            .then_with(|| desc(mean(a), mean(b)))
            .then_with(|| a_director.cmp(b_director))
    });
    groups.truncate(limit);
    groups
        .into_iter()
        .map(|(director, group, acc)| DirectorRanking {
            director: director.to_string(),
            count: acc.count,
            avg_rating: mean_rounded(&acc),
            titles: group.iter().map(|m| m.title.clone()).collect(),
        })
        .collect()
}

pub fn genre_stats(movies: &[Movie]) -> Vec<GenreStats> {
    let mut rows: Vec<GenreStats> = group_by(unwind_genres(movies), |(genre, _)| *genre)
        .into_iter()
        .map(|(genre, group)| {
            let ratings: Accumulator = group.iter().map(|(_, m)| m.rating).collect();
            let (_, duration) = metadata_means(group.iter().map(|(_, m)| *m));
            GenreStats {
                genre: genre.to_string(),
                count: ratings.count,
                avg_rating: mean_rounded(&ratings),
                max_rating: ratings.max.unwrap_or_default(),
                min_rating: ratings.min.unwrap_or_default(),
                total_budget: group
                    .iter()
                    .filter_map(|(_, m)| m.metadata.as_ref())
                    .map(|metadata| metadata.budget)
                    .sum(),
                avg_duration: duration.mean().map(round_to_int),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.genre.cmp(&b.genre)));
    rows
}

pub fn top_movies(movies: &[Movie], n: usize) -> Vec<TopMovie> {
    let mut scored: Vec<(f64, Option<f64>, &Movie)> = movies
        .iter()
        .map(|movie| {
            let review_avg = movie.review_average();
            let combined = (movie.rating + review_avg.unwrap_or(movie.rating)) / 2.0;
            (combined, review_avg, movie)
        })
        .collect();

    scored.sort_by(|(a, _, a_movie), (b, _, b_movie)| {
        desc(*a, *b).then_with(|| a_movie.title.cmp(&b_movie.title))
    });
    scored.truncate(n);
    scored
        .into_iter()
        .map(|(combined, review_avg, movie)| TopMovie {
            title: movie.title.clone(),
            director: movie.director.clone(),
            year: movie.year,
            genres: movie.genres.clone(),
            rating: movie.rating,
            review_avg: round_to(review_avg.unwrap_or_default(), PLACES),
            combined_score: round_to(combined, PLACES),
        })
        .collect()
}

pub fn review_analysis(movies: &[Movie]) -> Vec<ReviewAnalysis> {
    let mut scored: Vec<(&Movie, Accumulator)> = movies
        .iter()
        .filter(|movie| !movie.reviews.is_empty())
        .map(|movie| (movie, movie.reviews.iter().map(|r| f64::from(r.score)).collect()))
        .collect();

    scored.sort_by(|(a_movie, a), (b_movie, b)| {
        b.count
            .cmp(&a.count)
            .then_with(|| desc(mean(a), mean(b)))
            .then_with(|| a_movie.title.cmp(&b_movie.title))
    });
    scored
        .into_iter()
        .map(|(movie, scores)| ReviewAnalysis {
            title: movie.title.clone(),
            review_count: scores.count,
            avg_score: mean_rounded(&scores),
            max_score: scores.max.unwrap_or_default() as i32,
            min_score: scores.min.unwrap_or_default() as i32,
        })
        .collect()
}

/// Decades in chronological order, each listing its movies in collection order.
pub fn decade_report(movies: &[Movie]) -> Vec<DecadeReport> {
    group_by(movies, |m| m.decade())
        .into_iter()
        .map(|(decade, group)| {
            let ratings: Accumulator = group.iter().map(|m| m.rating).collect();
            let (budget, _) = metadata_means(group.iter().copied());
            DecadeReport {
                decade: format!("{decade}s"),
                count: ratings.count,
                avg_rating: mean_rounded(&ratings),
                avg_budget: budget.mean().map(round_to_int),
                movies: group
                    .iter()
                    .map(|m| DecadeEntry {
                        title: m.title.clone(),
                        year: m.year,
                        rating: m.rating,
                    })
                    .collect(),
            }
        })
        .collect()
}

pub fn general_stats(movies: &[Movie]) -> GeneralStats {
    let genres: BTreeSet<&str> = unwind_genres(movies).map(|(genre, _)| genre).collect();
    let directors: BTreeSet<&str> = movies.iter().map(|m| m.director.as_str()).collect();
    GeneralStats {
        total: movies.len() as u64,
        genres_unique: genres.len() as u64,
        directors: directors.len() as u64,
        total_reviews: movies.iter().map(|m| m.reviews.len() as u64).sum(),
    }
}
