use {
    std::path::Path,
    anyhow::{Context, Result},
    tracing::info,
    review_sentiment_core::database::Database,
};

pub async fn report_accuracy(database: &Database) -> Result<()> {
    let correct = database.correct_predictions().await?;
    let total = database.total_results().await?;

    match accuracy_percent(correct, total) {
        Some(accuracy) => info!("model accuracy: {:.2}%", accuracy),
        None => info!("no stored results, skipping accuracy report"),
    }

    Ok(())
}

/// Logs the per-label counts and optionally exports them as csv for an
/// external chart renderer.
pub async fn report_distribution(database: &Database, csv_path: Option<&Path>) -> Result<()> {
    let distribution = database.predicted_distribution().await?;

    for (sentiment, count) in &distribution {
        info!("predicted {}: {} reviews", sentiment, count);
    }

    if let Some(path) = csv_path {
        export_distribution_csv(&distribution, path)?;
        info!("sentiment distribution written to {}", path.display());
    }

    Ok(())
}

fn accuracy_percent(correct: i64, total: i64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some((correct as f64) / (total as f64) * 100.0)
    }
}

fn export_distribution_csv(distribution: &[(String, i64)], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["sentiment", "count"])?;
    for (sentiment, count) in distribution {
        writer.write_record([sentiment.as_str(), &count.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        review_sentiment_core::{
            entity::SentimentResultEntity,
            sentiment::Sentiment,
        },
    };

    #[test]
    fn two_of_three_correct_rounds_to_expected_percent() {
        let accuracy = accuracy_percent(2, 3).unwrap();
        assert_eq!(format!("{:.2}", accuracy), "66.67");
    }

    #[test]
    fn empty_table_has_no_accuracy() {
        assert!(accuracy_percent(0, 0).is_none());
    }

    #[test]
    fn all_correct_is_one_hundred_percent() {
        assert_eq!(accuracy_percent(5, 5), Some(100.0));
    }

    #[tokio::test]
    async fn accuracy_scenario_against_stored_rows() {
        let database = Database::in_memory().await.unwrap();
        let row = |predicted: Sentiment, actual: Sentiment| {
            SentimentResultEntity::builder()
                .review_text("x".to_owned())
                .score(0)
                .predicted_sentiment(predicted)
                .actual_sentiment(actual)
                .timestamp("2024-01-01 00:00:00".to_owned())
                .build()
        };
        database.insert_results(&[
            row(Sentiment::Positive, Sentiment::Positive),
            row(Sentiment::Negative, Sentiment::Negative),
            row(Sentiment::Neutral, Sentiment::Positive),
        ]).await.unwrap();

        let correct = database.correct_predictions().await.unwrap();
        let total = database.total_results().await.unwrap();
        assert_eq!(format!("{:.2}", accuracy_percent(correct, total).unwrap()), "66.67");
    }

    #[test]
    fn csv_export_writes_header_and_rows() {
        let path = std::env::temp_dir().join("review-sentiment-distribution-test.csv");
        let distribution = vec![("Positive".to_owned(), 2), ("Negative".to_owned(), 1)];

        export_distribution_csv(&distribution, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(contents, "sentiment,count\nPositive,2\nNegative,1\n");
    }
}
