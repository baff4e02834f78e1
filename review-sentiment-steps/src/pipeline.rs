use {
    std::{
        panic::{catch_unwind, AssertUnwindSafe},
        sync::Arc,
    },
    anyhow::{Context, Result},
    futures::future::join_all,
    tracing::{info, warn},
    review_sentiment_core::{
        database::Database,
        entity::{RawReview, SentimentResultEntity},
        lexicon::Lexicon,
        sentiment::process_review,
    },
};

pub struct Summary {
    pub total_loaded: usize,
    pub total_stored: usize,
}

/// Fans the loaded reviews out across a fixed pool of blocking workers, joins
/// their results and writes them to the database in bounded batches. Only this
/// orchestrating task ever touches the database, workers stay write-free.
pub async fn run_pipeline(
    records: Vec<RawReview>,
    lexicon: Arc<Lexicon>,
    database: &Database,
    workers: usize,
    batch_size: usize,
) -> Result<Summary> {
    let total_loaded = records.len();
    let workers = workers.max(1);

    info!("scoring {} reviews across {} workers", total_loaded, workers);

    let handles: Vec<_> = partition(records, workers)
        .into_iter()
        .map(|part| {
            let lexicon = lexicon.clone();
            tokio::task::spawn_blocking(move || score_partition(part, &lexicon))
        })
        .collect();

    // No ordering is promised across workers, the stored multiset is what
    // matters. A lost worker degrades total_stored instead of aborting.
    let mut results = Vec::new();
    for outcome in join_all(handles).await {
        match outcome {
            Ok(scored) => results.extend(scored),
            Err(err) => warn!("worker partition lost: {}", err),
        }
    }

    let mut total_stored = 0;
    for batch in results.chunks(batch_size.max(1)) {
        database.insert_results(batch).await.with_context(|| {
            format!("sink write failed, {} results left unwritten", results.len() - total_stored)
        })?;
        total_stored += batch.len();
    }

    info!("stored {} of {} loaded reviews", total_stored, total_loaded);

    Ok(Summary { total_loaded, total_stored })
}

// Static round-robin. Per-review cost is uniform and cheap, so no work
// stealing is needed.
fn partition(records: Vec<RawReview>, workers: usize) -> Vec<Vec<RawReview>> {
    let mut partitions: Vec<Vec<RawReview>> = (0..workers).map(|_| Vec::new()).collect();
    for (i, record) in records.into_iter().enumerate() {
        partitions[i % workers].push(record);
    }
    partitions
}

fn score_partition(records: Vec<RawReview>, lexicon: &Lexicon) -> Vec<SentimentResultEntity> {
    let mut results = Vec::new();

    for record in records {
        match catch_unwind(AssertUnwindSafe(|| process_review(&record, lexicon))) {
            Ok(Some(result)) => results.push(result),
            Ok(None) => {}
            // one faulting review must not take its siblings down with it
            Err(_) => warn!("scoring panicked on one review, skipping it"),
        }
    }

    results
}
