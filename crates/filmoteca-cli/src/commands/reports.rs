use anyhow::Result;

use filmoteca_core::{Database, MovieSummary};
use filmoteca_reports::{
    DecadeReport, DirectorRanking, GenreRating, GenreStats, GeneralStats, Reports, ReviewAnalysis,
    TopMovie,
};

use crate::output::Output;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum ReportKind {
    /// Movies released within a year range (inclusive), oldest first
    Years { start: i32, end: i32 },
    /// Mean rating per genre
    GenreRatings,
    /// Directors with the most movies
    Directors {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Count, rating spread, budget and runtime per genre
    GenreStats,
    /// Movies ranked by the mean of rating and review average
    Top {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Review count and score spread per reviewed movie
    Reviews,
    /// Movies grouped by release decade
    Decades,
    /// Collection-wide counters
    Stats,
}

fn print_years(movies: &[MovieSummary]) {
    for movie in movies {
        println!("  {} - {} (Dir: {})", movie.year, movie.title, movie.director);
    }
}

fn print_genre_ratings(rows: &[GenreRating]) {
    for row in rows {
        println!("  {:<18} {:>5.2}  ({} movies)", row.genre, row.avg_rating, row.count);
    }
}

fn print_directors(rows: &[DirectorRanking]) {
    for row in rows {
        println!(
            "  {:<24} {} movies, avg {:.2}: {}",
            row.director,
            row.count,
            row.avg_rating,
            row.titles.join(", ")
        );
    }
}

fn print_genre_stats(rows: &[GenreStats]) {
    println!(
        "  {:<18} {:>5} {:>6} {:>5} {:>5} {:>14} {:>8}",
        "genre", "count", "avg", "max", "min", "budget", "minutes"
    );
    for row in rows {
        let duration = row
            .avg_duration
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        println!(
            "  {:<18} {:>5} {:>6.2} {:>5.1} {:>5.1} {:>14} {:>8}",
            row.genre,
            row.count,
            row.avg_rating,
            row.max_rating,
            row.min_rating,
            row.total_budget,
            duration
        );
    }
}

fn print_top(rows: &[TopMovie]) {
    for (rank, row) in rows.iter().enumerate() {
        println!(
            "  {}. {} ({}, Dir: {}) - Score: {:.2} (rating {:.1}, reviews {:.2})",
            rank + 1,
            row.title,
            row.year,
            row.director,
            row.combined_score,
            row.rating,
            row.review_avg
        );
    }
}

fn print_reviews(rows: &[ReviewAnalysis]) {
    for row in rows {
        println!(
            "  {}: {} reviews (avg {:.2}, max {}, min {})",
            row.title, row.review_count, row.avg_score, row.max_score, row.min_score
        );
    }
}

fn print_decades(rows: &[DecadeReport]) {
    for row in rows {
        let budget = row
            .avg_budget
            .map_or_else(|| "-".to_string(), |b| b.to_string());
        println!(
            "  {}: {} movies (avg rating {:.2}, avg budget {})",
            row.decade, row.count, row.avg_rating, budget
        );
        for movie in &row.movies {
            println!("      {} ({}) {:.1}", movie.title, movie.year, movie.rating);
        }
    }
}

fn print_stats(stats: &GeneralStats) {
    println!("  Movies:          {}", stats.total);
    println!("  Distinct genres: {}", stats.genres_unique);
    println!("  Directors:       {}", stats.directors);
    println!("  Reviews:         {}", stats.total_reviews);
}

/// Run one report; `default_limit` applies to ranked reports without `--limit`.
pub fn run_report(db: &Database, out: Output, kind: ReportKind, default_limit: usize) -> Result<()> {
    let reports = Reports::new(db);
    match kind {
        ReportKind::Years { start, end } => {
            out.emit(reports.year_range(start, end)?.as_slice(), print_years)
        }
        ReportKind::GenreRatings => {
            out.emit(reports.avg_rating_by_genre()?.as_slice(), print_genre_ratings)
        }
        ReportKind::Directors { limit } => out.emit(
            reports
                .top_directors(limit.unwrap_or(default_limit))?
                .as_slice(),
            print_directors,
        ),
        ReportKind::GenreStats => out.emit(reports.genre_stats()?.as_slice(), print_genre_stats),
        ReportKind::Top { limit } => out.emit(
            reports.top_movies(limit.unwrap_or(default_limit))?.as_slice(),
            print_top,
        ),
        ReportKind::Reviews => out.emit(reports.review_analysis()?.as_slice(), print_reviews),
        ReportKind::Decades => out.emit(reports.decade_report()?.as_slice(), print_decades),
        ReportKind::Stats => out.emit(&reports.general_stats()?, print_stats),
    }
}
