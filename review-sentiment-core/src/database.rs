use {
    anyhow::Result,
    sqlx::{
        Row,
        sqlite::{SqlitePool, SqlitePoolOptions, SqliteConnectOptions},
    },
    crate::{
        config::DatabaseConfig,
        entity::SentimentResultEntity,
    },
};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS sentiment_results (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        review_text TEXT,
        score INTEGER,
        predicted_sentiment TEXT,
        actual_sentiment TEXT,
        timestamp TEXT
    )
";

/// Append-only result store. Rows from earlier runs are kept, so repeated
/// runs accumulate.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(config.path())
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// In-memory store, used by tests. One connection so every query sees the
    /// same database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(SqliteConnectOptions::new().in_memory(true))
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn insert_results(&self, results: &[SentimentResultEntity]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for result in results {
            sqlx::query("insert into sentiment_results (review_text, score, predicted_sentiment, actual_sentiment, timestamp) values ($1, $2, $3, $4, $5)")
                .bind(result.review_text())
                .bind(result.score())
                .bind(result.predicted_sentiment().as_str())
                .bind(result.actual_sentiment().as_str())
                .bind(result.timestamp())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn correct_predictions(&self) -> Result<i64> {
        let row = sqlx::query("select count(*) from sentiment_results where predicted_sentiment = actual_sentiment")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get(0))
    }

    pub async fn total_results(&self) -> Result<i64> {
        let row = sqlx::query("select count(*) from sentiment_results")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get(0))
    }

    pub async fn predicted_distribution(&self) -> Result<Vec<(String, i64)>> {
        let rows = sqlx::query("select predicted_sentiment, count(*) from sentiment_results group by predicted_sentiment")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|row| (row.get(0), row.get(1))).collect())
    }
}
