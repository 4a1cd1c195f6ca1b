use log::info;

const LOG_EVERY: usize = 100;

/// Track progress while downloading show data
pub struct FetchProgress {
    total: usize,
    fetched: usize,
    cached: usize,
    failed: usize,
}

impl FetchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            fetched: 0,
            cached: 0,
            failed: 0,
        }
    }

    pub fn increment_fetched(&mut self) {
        self.fetched += 1;
        self.log_progress();
    }

    pub fn increment_cached(&mut self) {
        self.cached += 1;
        self.log_progress();
    }

    pub fn increment_failed(&mut self) {
        self.failed += 1;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.fetched + self.cached + self.failed
    }

    pub fn failed_count(&self) -> usize {
        self.failed
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if current % LOG_EVERY == 0 || current == self.total {
            info!(
                "  → Progress: {}/{} ({} new, {} cached, {} failed)",
                current, self.total, self.fetched, self.cached, self.failed
            );
        }
    }
}
