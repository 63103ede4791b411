use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use filmoteca_core::Database;

mod commands;
mod config;
mod output;

use commands::{ConfigAction, FindBy, ReportKind};
use config::Config;
use output::Output;

#[derive(Debug, Parser)]
#[command(name = "filmoteca", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the database (default: ~/.local/share/filmoteca/filmoteca.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Load the bundled seed set of eleven movies
    ///
    /// Replaces the whole collection unless --keep is given, in which case
    /// the seed is added to what is already stored (and fails on titles that
    /// are already present).
    Init {
        /// Keep existing movies instead of clearing the collection
        #[arg(long)]
        keep: bool,
    },
    /// List every movie, best rated first
    List,
    /// Look movies up by title, genre, director, rating, keyword or free text
    Find {
        #[command(subcommand)]
        by: FindBy,
    },
    /// Insert a movie from a JSON file
    ///
    /// The file holds one object with title, year, director, genres and
    /// rating; cast, reviews, available and metadata are optional.
    Add {
        #[arg(long)]
        file: PathBuf,
    },
    /// Set the rating of a movie (0-10)
    Rate {
        title: String,
        #[arg(allow_negative_numbers = true)]
        rating: f64,
    },
    /// Add or delete user reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Delete a movie by title
    Delete { title: String },
    /// Run one of the canned reports
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },
    /// List the indexes maintained over the collection
    Indexes,
    /// Reload the seed set and walk through every operation
    Demo,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ReviewAction {
    /// Append a review (score 1-10) dated today
    Add {
        title: String,
        user: String,
        #[arg(allow_negative_numbers = true)]
        score: i32,
        comment: String,
    },
    /// Remove every review a user wrote on a movie
    Delete { title: String, user: String },
}

fn open_database(path: &Path) -> Result<Database> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Database::open(path).with_context(|| format!("Failed to open database {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_with_db_path(cli.db)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let out = Output::new(cli.json);

    match cli.command {
        Commands::Config { action } => commands::run_config(action, &config),
        command => {
            let db = open_database(&config.database_path)?;
            log::debug!("Using database {}", config.database_path.display());
            dispatch(&db, out, command, &config)
        }
    }
}

fn dispatch(db: &Database, out: Output, command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Init { keep } => commands::run_init(db, out, keep),
        Commands::List => commands::run_list(db, out),
        Commands::Find { by } => commands::run_find(db, out, by),
        Commands::Add { file } => commands::run_add(db, out, &file),
        Commands::Rate { title, rating } => commands::run_rate(db, out, &title, rating),
        Commands::Review { action } => match action {
            ReviewAction::Add {
                title,
                user,
                score,
                comment,
            } => commands::run_review_add(db, out, &title, &user, score, &comment),
            ReviewAction::Delete { title, user } => {
                commands::run_review_delete(db, out, &title, &user)
            }
        },
        Commands::Delete { title } => commands::run_delete(db, out, &title),
        Commands::Report { kind } => commands::run_report(db, out, kind, config.report_limit),
        Commands::Indexes => commands::run_indexes(db, out),
        Commands::Demo => commands::run_demo(db),
        Commands::Config { action } => commands::run_config(action, config),
    }
}
