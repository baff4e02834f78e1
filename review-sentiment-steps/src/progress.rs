// Plain log lines instead of indicatif, so progress survives non-tty output
use {
    std::time::Instant,
    tracing::info,
};

const REPORT_INTERVAL_MILLIS: u128 = 10_000;

pub struct Progress {
    message: String,
    started_at: Instant,
    reported_at: Instant,
    total_processed: u64,
}

impl Progress {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            started_at: Instant::now(),
            reported_at: Instant::now(),
            total_processed: 0,
        }
    }

    pub fn update(&mut self) {
        self.total_processed += 1;

        let now = Instant::now();
        if (now - self.reported_at).as_millis() >= REPORT_INTERVAL_MILLIS {
            self.reported_at = now;
            info!("{}: {} total ({:.2}/second)", self.message, self.total_processed, self.rate(now));
        }
    }

    pub fn finish(self) {
        let now = Instant::now();
        info!("{}: finished, {} total ({:.2}/second)", self.message, self.total_processed, self.rate(now));
    }

    fn rate(&self, now: Instant) -> f32 {
        (self.total_processed as f32) / (now - self.started_at).as_secs_f32().max(f32::EPSILON)
    }
}
