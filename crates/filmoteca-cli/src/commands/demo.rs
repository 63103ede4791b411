use anyhow::Result;

use filmoteca_core::{Catalog, Database};
use filmoteca_reports::Reports;

fn banner(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

/// Reload the seed set and walk through every catalog operation and report.
pub fn run_demo(db: &Database) -> Result<()> {
    let catalog = Catalog::new(db);
    let reports = Reports::new(db);

    let loaded = catalog.load_seed(true)?;
    println!("Loaded {} movies", loaded);

    banner("Record store");
    catalog.update_rating("Inception", 9.0)?;
    catalog.update_rating("Roma", 8.0)?;
    catalog.add_review("The Matrix", "TestUser", 9, "Excellent science fiction")?;
    catalog.delete_review("The Matrix", "TestUser")?;

    println!("\n--- Title contains 'Coco' ---");
    for movie in catalog.find_by_title_substring("Coco")? {
        println!("  {} ({})", movie.title, movie.year);
    }

    println!("\n--- Genre 'Drama' (first 3) ---");
    for movie in catalog.find_by_genre("Drama")?.iter().take(3) {
        println!("  {} ({})", movie.title, movie.year);
    }

    println!("\n--- Director contains 'Nolan' ---");
    for movie in catalog.find_by_director_substring("Nolan")? {
        println!("  {} - Rating: {}", movie.title, movie.rating);
    }

    println!("\n--- Rating >= 8.5 ---");
    for movie in catalog.find_by_min_rating(8.5)? {
        println!("  {} - Rating: {}", movie.title, movie.rating);
    }

    println!("\n--- Keyword 'cinema' ---");
    for hit in catalog.find_by_keyword("cinema")? {
        println!("  {} ({} comments)", hit.title, hit.comments.len());
    }

    banner("Queries");
    println!("\n--- Movies 2000-2010 ---");
    for movie in reports.year_range(2000, 2010)? {
        println!("  {} - {} (Dir: {})", movie.year, movie.title, movie.director);
    }

    println!("\n--- Average rating per genre (top 5) ---");
    for row in reports.avg_rating_by_genre()?.iter().take(5) {
        println!("  {}: {} ({} movies)", row.genre, row.avg_rating, row.count);
    }

    println!("\n--- Directors with most movies ---");
    for row in reports.top_directors(3)? {
        println!("  {}: {} movies", row.director, row.count);
    }

    banner("Aggregations");
    println!("\n--- Statistics per genre (top 5) ---");
    for row in reports.genre_stats()?.iter().take(5) {
        println!(
            "  {}: {} movies, avg {}, budget {}",
            row.genre, row.count, row.avg_rating, row.total_budget
        );
    }

    println!("\n--- Top 5 movies ---");
    for (rank, row) in reports.top_movies(5)?.iter().enumerate() {
        println!(
            "  {}. {} (Dir: {}) - Score: {}",
            rank + 1,
            row.title,
            row.director,
            row.combined_score
        );
    }

    println!("\n--- Review analysis ---");
    for row in reports.review_analysis()?.iter().take(5) {
        println!("  {}: {} reviews (avg: {})", row.title, row.review_count, row.avg_score);
    }

    println!("\n--- Decades ---");
    for row in reports.decade_report()? {
        println!("  {}: {} movies (avg rating: {})", row.decade, row.count, row.avg_rating);
    }

    let stats = reports.general_stats()?;
    println!(
        "\n--- Totals ---\n  {} movies, {} genres, {} directors, {} reviews",
        stats.total, stats.genres_unique, stats.directors, stats.total_reviews
    );

    banner("Indexes and full-text search");
    for index in catalog.list_indexes()? {
        println!("  {}: {}", index.name, index.columns.join(", "));
    }

    println!("\n--- Full-text search: 'Nolan science' ---");
    for hit in catalog.full_text_search("Nolan science")? {
        println!("  {} (Dir: {}) - Score: {:.2}", hit.title, hit.director, hit.score);
    }

    Ok(())
}
