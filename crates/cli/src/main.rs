mod suggest;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Dataset;
use recommender::{
    filter_by_genre, MovieRecord, QueryError, RecommendOutcome, Recommendation,
    RecommendationEngine, RecommenderConfig, RecommenderContext, VoteThreshold,
};
use std::path::PathBuf;
use std::time::Instant;

/// How many "did you mean" titles to offer
const TITLE_SUGGESTIONS: usize = 5;

/// movie-recs - Movie recommendation lookup
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Find movies by genre or by similarity to a movie you like", long_about = None)]
struct Cli {
    /// Directory containing movies.dat, similarity.dat and optionally genres.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Vote count percentile used as the minimum-votes threshold
    #[arg(long, default_value_t = 0.90)]
    vote_percentile: f64,

    /// Fixed minimum-votes threshold (takes precedence over --vote-percentile)
    #[arg(long)]
    min_votes: Option<f64>,

    /// Fixed global mean vote instead of the catalog mean
    #[arg(long)]
    mean_vote: Option<f64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available genres
    Genres,

    /// Top 10 movies of a genre by weighted rating
    Genre {
        /// Genre name (case-insensitive)
        #[arg(long)]
        name: String,
    },

    /// Movies similar to a given movie
    Recommend {
        /// Movie title (case-insensitive exact match)
        #[arg(long)]
        title: String,

        /// Only recommend movies of this genre
        #[arg(long)]
        genre: Option<String>,

        /// Number of recommendations to return (5-50)
        #[arg(long, default_value = "10")]
        top_n: usize,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,

        /// Maximum number of results
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

impl Cli {
    fn recommender_config(&self) -> RecommenderConfig {
        let threshold = match self.min_votes {
            Some(m) => VoteThreshold::Fixed(m),
            None => VoteThreshold::Percentile(self.vote_percentile),
        };
        let config = RecommenderConfig::default().with_vote_threshold(threshold);
        match self.mean_vote {
            Some(c) => config.with_mean_vote(c),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let dataset = Dataset::load_from_dir(&cli.data_dir)
        .with_context(|| format!("Failed to load dataset from {}", cli.data_dir.display()))?;
    let ctx = RecommenderContext::from_dataset(dataset, cli.recommender_config())
        .context("Dataset is inconsistent, refusing to serve queries")?;
    tracing::info!("Dataset ready in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match &cli.command {
        Commands::Genres => handle_genres(&ctx, cli.json)?,
        Commands::Genre { name } => handle_genre(&ctx, name, cli.json)?,
        Commands::Recommend {
            title,
            genre,
            top_n,
        } => handle_recommend(&ctx, title, genre.as_deref(), *top_n, cli.json)?,
        Commands::Search { title, limit } => handle_search(&ctx, title, *limit, cli.json)?,
    }

    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(ctx: &RecommenderContext, json: bool) -> Result<()> {
    let labels = ctx.genres().labels();
    if json {
        println!("{}", serde_json::to_string_pretty(labels)?);
        return Ok(());
    }
    println!("{}", "Available Genres:".bold().blue());
    println!("{}", labels.join(", "));
    Ok(())
}

/// Map a user-typed genre to its catalog spelling, or fail with suggestions
fn resolve_genre<'a>(ctx: &'a RecommenderContext, name: &str) -> Result<&'a str> {
    if let Some(genre) = ctx.genres().resolve(name) {
        return Ok(genre);
    }
    let suggestions = suggest::genre_suggestions(ctx.genres(), name);
    if suggestions.is_empty() {
        bail!("Genre '{}' not found", name.trim());
    }
    bail!(
        "Genre '{}' not found. Did you mean one of these? {}",
        name.trim(),
        suggestions.join(", ")
    )
}

/// Handle the 'genre' command
fn handle_genre(ctx: &RecommenderContext, name: &str, json: bool) -> Result<()> {
    let genre = resolve_genre(ctx, name)?;
    let movies = filter_by_genre(ctx, genre);

    if json {
        println!("{}", serde_json::to_string_pretty(&movies)?);
        return Ok(());
    }
    if movies.is_empty() {
        println!("No {} movies found.", genre);
        return Ok(());
    }

    println!(
        "{}",
        format!("Top {} {} Movies (by Weighted Rating):", movies.len(), genre)
            .bold()
            .blue()
    );
    print_movies(&movies);
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    ctx: &RecommenderContext,
    title: &str,
    genre: Option<&str>,
    top_n: usize,
    json: bool,
) -> Result<()> {
    let genre = genre.map(|g| resolve_genre(ctx, g)).transpose()?;
    let engine = RecommendationEngine::new(ctx);

    let outcome = match engine.recommend(title, genre, top_n) {
        Ok(outcome) => outcome,
        Err(QueryError::NotFound { title }) => {
            let suggestions = suggest::title_suggestions(ctx.catalog(), &title, TITLE_SUGGESTIONS);
            if suggestions.is_empty() {
                bail!("Title '{}' not found", title);
            }
            let names: Vec<&str> = suggestions.iter().map(|m| m.title.as_str()).collect();
            bail!(
                "Title '{}' not found. Did you mean one of these?\n  {}",
                title,
                names.join("\n  ")
            );
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let seed = ctx
        .catalog()
        .find_by_title(title)
        .map(|m| m.title.as_str())
        .unwrap_or(title);
    match outcome {
        RecommendOutcome::Empty => match genre {
            Some(genre) => println!("No {} movies like {} found.", genre, seed),
            None => println!("No movies like {} found.", seed),
        },
        RecommendOutcome::Ranked(recs) => {
            let header = match genre {
                Some(genre) => format!("Top {} {} Movies like {}:", recs.len(), genre, seed),
                None => format!("Top {} Movies like {}:", recs.len(), seed),
            };
            println!("{}", header.bold().blue());
            print_recommendations(&recs);
        }
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(ctx: &RecommenderContext, title: &str, limit: usize, json: bool) -> Result<()> {
    let matches: Vec<MovieRecord> = suggest::search_titles(ctx.catalog(), title)
        .into_iter()
        .take(limit)
        .cloned()
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }
    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("No titles match.");
        return Ok(());
    }
    print_movies(&matches);
    Ok(())
}

/// Print a numbered table of movies with their quality stats
fn print_movies(movies: &[MovieRecord]) {
    for (rank, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} [{}] - Score: {:.2} (avg {:.1}, {} votes)",
            (rank + 1).to_string().green(),
            movie.title,
            movie.genres.join(", "),
            movie.weighted_score,
            movie.vote_average,
            movie.vote_count
        );
    }
}

/// Print a numbered table of recommendations, similarity rounded for display
fn print_recommendations(recommendations: &[Recommendation]) {
    for (rank, rec) in recommendations.iter().enumerate() {
        let movie = &rec.movie;
        println!(
            "{}. {} [{}] - Similarity: {:.2}, Score: {:.2} (avg {:.1}, {} votes)",
            (rank + 1).to_string().green(),
            movie.title,
            movie.genres.join(", "),
            rec.similarity_score,
            movie.weighted_score,
            movie.vote_average,
            movie.vote_count
        );
    }
}
