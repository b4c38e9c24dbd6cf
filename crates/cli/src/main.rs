use anyhow::{anyhow, Context, Result};
use cast_model::{
    parser, CastList, MediaType, MovieCastMember, ProductionId, RoleCredit, SeriesCastMember,
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use importer::{
    FileMetadataProvider, ImportOrchestrator, ImporterConfig, MemoryCastStore,
    DEFAULT_IMAGE_BASE_URL,
};
use rand::Rng;
use ranking::{
    rank_batch, select_config, CastFilterResult, CastRankingEngine, CastStats, NoopObserver,
    RankRequest,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// cast-rank - Cast ranking for movies and series
#[derive(Parser)]
#[command(name = "cast-rank")]
#[command(about = "Rank provider cast lists into main, supporting, recurring and guest tiers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a credits file and print the displayed cast
    Rank {
        /// Provider credits payload (movie credits or series aggregate credits)
        #[arg(long)]
        file: PathBuf,

        /// movie, series or tv
        #[arg(long)]
        media_type: MediaType,

        /// Total episode count (required for series)
        #[arg(long)]
        episodes: Option<u32>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the thresholds a ranking pass would use
    Config {
        #[arg(long)]
        file: PathBuf,

        #[arg(long)]
        media_type: MediaType,

        #[arg(long)]
        episodes: Option<u32>,
    },

    /// Import a production from saved provider payloads
    Import {
        /// Directory laid out as movie/{id}.json, tv/{id}/aggregate_credits.json, ...
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        #[arg(long)]
        media_type: MediaType,

        /// Provider id of the movie or series
        #[arg(long)]
        id: ProductionId,

        #[arg(long, default_value = DEFAULT_IMAGE_BASE_URL)]
        image_base_url: String,
    },

    /// Search saved provider results for movies and series to import
    Search {
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Case-insensitive title match
        #[arg(long)]
        query: String,

        #[arg(long, default_value = DEFAULT_IMAGE_BASE_URL)]
        image_base_url: String,

        /// Print the hits as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank synthetic casts to measure throughput
    Benchmark {
        /// Number of productions to rank
        #[arg(long, default_value = "1000")]
        productions: usize,

        /// Credited members per production
        #[arg(long, default_value = "200")]
        cast_size: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            file,
            media_type,
            episodes,
            json,
        } => handle_rank(file, media_type, episodes, json)?,
        Commands::Config {
            file,
            media_type,
            episodes,
        } => handle_config(file, media_type, episodes)?,
        Commands::Import {
            data_dir,
            media_type,
            id,
            image_base_url,
        } => handle_import(data_dir, media_type, id, image_base_url).await?,
        Commands::Search {
            data_dir,
            query,
            image_base_url,
            json,
        } => handle_search(data_dir, query, image_base_url, json).await?,
        Commands::Benchmark {
            productions,
            cast_size,
        } => handle_benchmark(productions, cast_size)?,
    }

    Ok(())
}

fn load_cast(file: &Path, media_type: MediaType) -> Result<CastList> {
    let start = Instant::now();
    let cast = parser::load_cast_list(file, media_type)
        .with_context(|| format!("Failed to load credits from {}", file.display()))?;
    println!(
        "{} Loaded {} credited {} cast members in {:?}",
        "✓".green(),
        cast.len(),
        media_type,
        start.elapsed()
    );
    Ok(cast)
}

/// Handle the 'rank' command
fn handle_rank(
    file: PathBuf,
    media_type: MediaType,
    episodes: Option<u32>,
    json: bool,
) -> Result<()> {
    let cast = load_cast(&file, media_type)?;

    let engine = CastRankingEngine::new();
    let result = engine
        .filter_cast_members(&cast, episodes)
        .context("Failed to rank cast")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_ranked_cast(&result);
    }
    Ok(())
}

/// Handle the 'config' command
fn handle_config(file: PathBuf, media_type: MediaType, episodes: Option<u32>) -> Result<()> {
    let cast = load_cast(&file, media_type)?;
    let config = select_config(&cast, episodes).context("Failed to select configuration")?;

    println!(
        "{}",
        format!("Selected {:?} {} configuration:", config.tier(), media_type)
            .bold()
            .blue()
    );
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Handle the 'import' command
async fn handle_import(
    data_dir: PathBuf,
    media_type: MediaType,
    id: ProductionId,
    image_base_url: String,
) -> Result<()> {
    let store = Arc::new(MemoryCastStore::new());
    let orchestrator = ImportOrchestrator::new(
        Arc::new(FileMetadataProvider::new(&data_dir)),
        store.clone(),
    )
    .with_config(ImporterConfig::default().with_image_base_url(image_base_url));

    let production_key = match media_type {
        MediaType::Movie => {
            let imported = orchestrator
                .import_movie(id)
                .await
                .with_context(|| format!("Failed to import movie {}", id))?;
            println!(
                "{} Imported {} ({}) with {} cast members",
                "✓".green(),
                imported.title.bold(),
                imported.year,
                imported.cast_count
            );
            imported.movie_id
        }
        MediaType::Series => {
            let imported = orchestrator
                .import_series(id)
                .await
                .with_context(|| format!("Failed to import series {}", id))?;
            println!(
                "{} Imported {} ({}, {} episodes) with {} cast members",
                "✓".green(),
                imported.title.bold(),
                imported.year_range,
                imported.episode_count,
                imported.cast_count
            );
            imported.series_id
        }
    };

    let production = store
        .production(&production_key)
        .await
        .ok_or_else(|| anyhow!("Production {} was not stored", production_key))?;
    println!("{}", format!("{}:", production_key).bold().blue());
    println!("{}", serde_json::to_string_pretty(&production)?);

    println!("{}", "Stored cast:".bold().blue());
    for record in store.production_cast(&production_key).await {
        let name = store
            .cast_member(record.cast_member_id)
            .await
            .map(|member| member.name)
            .unwrap_or_default();
        println!(
            "{}. {} as {} [{}]",
            record.order_number.to_string().green(),
            name,
            record.role,
            record.cast_member_id
        );
    }
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(
    data_dir: PathBuf,
    query: String,
    image_base_url: String,
    json: bool,
) -> Result<()> {
    let orchestrator = ImportOrchestrator::new(
        Arc::new(FileMetadataProvider::new(&data_dir)),
        Arc::new(MemoryCastStore::new()),
    )
    .with_config(ImporterConfig::default().with_image_base_url(image_base_url));

    let results = orchestrator
        .search_media(&query)
        .await
        .with_context(|| format!("Failed to search for '{}'", query))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{}", format!("Search results for '{}':", query).bold().blue());
    for result in &results {
        println!(
            "{} {} ({}) [{}]",
            result.id.to_string().green(),
            result.title,
            result.year,
            result.media_type
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(productions: usize, cast_size: usize) -> Result<()> {
    if productions == 0 {
        return Err(anyhow!("--productions must be at least 1"));
    }

    let mut rng = rand::rng();
    let requests: Vec<RankRequest> = (0..productions)
        .map(|i| {
            if i % 2 == 0 {
                RankRequest::movie(random_movie_cast(&mut rng, cast_size))
            } else {
                let episodes = rng.random_range(6..=200);
                RankRequest::series(random_series_cast(&mut rng, cast_size, episodes), episodes)
            }
        })
        .collect();
    info!(
        "Generated {} synthetic productions with {} cast members each",
        productions, cast_size
    );

    let engine = CastRankingEngine::new().with_observer(NoopObserver);

    // Sequential baseline
    let start = Instant::now();
    let mut timings = Vec::with_capacity(requests.len());
    for request in &requests {
        let ranked_at = Instant::now();
        engine.filter_cast_members(&request.cast, request.total_episodes)?;
        timings.push(ranked_at.elapsed());
    }
    let sequential = start.elapsed();

    // Parallel batch
    let start = Instant::now();
    let results = rank_batch(&engine, &requests);
    let parallel = start.elapsed();
    let displayed: usize = results
        .into_iter()
        .collect::<ranking::Result<Vec<_>>>()?
        .iter()
        .map(CastFilterResult::len)
        .sum();

    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];

    println!("{}", "Benchmark results:".bold().blue());
    println!("Productions: {} ({} cast members each)", productions, cast_size);
    println!("Displayed cast members: {}", displayed);
    println!("Sequential time: {:?}", sequential);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!(
        "Sequential throughput: {:.2} productions/second",
        productions as f64 / sequential.as_secs_f64()
    );
    println!("Parallel batch time: {:?}", parallel);
    println!(
        "Parallel throughput: {:.2} productions/second",
        productions as f64 / parallel.as_secs_f64()
    );
    Ok(())
}

fn random_movie_cast(rng: &mut impl Rng, size: usize) -> Vec<MovieCastMember> {
    (0..size)
        .map(|i| MovieCastMember {
            id: rng.random_range(1..=5_000_000),
            name: format!("Actor {}", i),
            profile_path: rng.random_bool(0.8).then(|| format!("/actor_{}.jpg", i)),
            popularity: rng.random_range(0.0..60.0),
            character: if rng.random_bool(0.1) {
                "Passenger (uncredited)".to_string()
            } else {
                format!("Character {}", i)
            },
            order: rng.random_bool(0.95).then_some(i as u32),
        })
        .collect()
}

fn random_series_cast(rng: &mut impl Rng, size: usize, episodes: u32) -> Vec<SeriesCastMember> {
    (0..size)
        .map(|i| {
            let appearances = rng.random_range(0..=episodes);
            SeriesCastMember {
                id: rng.random_range(1..=5_000_000),
                name: format!("Actor {}", i),
                profile_path: rng.random_bool(0.8).then(|| format!("/actor_{}.jpg", i)),
                popularity: rng.random_range(0.0..40.0),
                roles: vec![RoleCredit {
                    character: format!("Character {}", i),
                    episode_count: appearances,
                }],
                total_episode_count: appearances,
            }
        })
        .collect()
}

/// Print the ranked cast with a per-tier summary
fn print_ranked_cast(result: &CastFilterResult) {
    println!("{}", "Displayed cast:".bold().blue());
    for member in &result.cast {
        let appearances = member
            .total_episode_count
            .map(|episodes| format!(", {} episodes", episodes))
            .unwrap_or_default();
        println!(
            "{}. {} as {} (popularity {:.1}{})",
            member.order_number.to_string().green(),
            member.name,
            member.character,
            member.popularity,
            appearances
        );
    }

    println!("{}", "Summary:".bold().blue());
    match &result.stats {
        CastStats::Movie(stats) => {
            println!("{}Main cast: {}", "• ".green(), stats.main_cast_count);
            println!("{}Supporting cast: {}", "• ".green(), stats.supporting_cast_count);
            println!(
                "{}Shown {} of {} credited",
                "• ".cyan(),
                stats.total_processed,
                stats.total_original_cast
            );
        }
        CastStats::Series(stats) => {
            println!("{}Main cast: {}", "• ".green(), stats.main_cast_count);
            println!("{}Recurring cast: {}", "• ".green(), stats.recurring_cast_count);
            println!("{}Guest stars: {}", "• ".green(), stats.guest_stars_count);
            println!(
                "{}Shown {} of {} credited",
                "• ".cyan(),
                stats.total_processed,
                stats.total_original_cast
            );
            match stats.average_episodes_per_actor {
                Some(average) => println!("{}Average episodes per actor: {:.1}", "• ".cyan(), average),
                None => println!("{}Average episodes per actor: n/a", "• ".cyan()),
            }
        }
    }
}
