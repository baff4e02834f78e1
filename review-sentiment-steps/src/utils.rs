use {
    std::thread::available_parallelism,
    tracing::Level,
    tracing_subscriber::{prelude::*, filter::filter_fn},
};

pub fn init_logging() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish()
        .with(filter_fn(|metadata| {
            // sqlx logs every statement at INFO, which drowns the batch inserts
            if metadata.target().starts_with("sqlx::query") {
                metadata.level() < &Level::INFO
            } else {
                true
            }
        }))
        .init();
}

pub fn default_workers() -> usize {
    available_parallelism().map(|v| v.get()).unwrap_or(1)
}
