mod ingest;
mod pipeline;
mod progress;
mod report;
mod utils;

use {
    std::{path::PathBuf, sync::Arc},
    anyhow::Result,
    clap::Parser,
    tracing::info,
    review_sentiment_core::{
        config::{Config, DatabaseConfig},
        database::Database,
        lexicon::Lexicon,
    },
    crate::{
        ingest::load_reviews,
        pipeline::run_pipeline,
        report::{report_accuracy, report_distribution},
        utils::{init_logging, default_workers},
    },
};

/// Scores product reviews against a keyword lexicon and compares the result
/// with the label implied by the star rating.
#[derive(Parser, Debug)]
struct Args {
    /// Newline-delimited JSON file of reviews
    #[arg(long)]
    input: PathBuf,

    /// Worker count, defaults to the number of CPU cores
    #[arg(long)]
    workers: Option<usize>,

    /// Sqlite database path
    #[arg(long)]
    db: Option<String>,

    /// Write the predicted sentiment distribution to this csv file
    #[arg(long)]
    distribution_csv: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    let config = Config::load();

    let lexicon = Arc::new(Lexicon::from_config(&config.lexicon())?);

    let database_config = args.db.clone()
        .map(DatabaseConfig::with_path)
        .unwrap_or_else(|| config.database());
    let database = Database::new(&database_config).await?;

    let loaded = load_reviews(&args.input)?;
    info!(
        "total reviews loaded: {} ({} malformed lines discarded)",
        loaded.reviews.len(),
        loaded.malformed_lines,
    );

    let workers = args.workers
        .or_else(|| config.pipeline().workers())
        .unwrap_or_else(default_workers);

    let summary = run_pipeline(
        loaded.reviews,
        lexicon,
        &database,
        workers,
        config.pipeline().batch_size(),
    ).await?;

    info!("successfully processed {} reviews", summary.total_stored);

    report_accuracy(&database).await?;
    report_distribution(&database, args.distribution_csv.as_deref()).await?;

    Ok(())
}
