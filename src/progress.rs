// src/progress.rs
/// Lightweight progress reporting for a crawl.
/// Frontends implement this to surface status without touching the result stream.
pub trait Progress {
    /// Called at the start with the number of clubs found on the hub page.
    fn begin(&mut self, _total: usize) {}

    /// A club reached `Resolved`.
    fn item_done(&mut self, _name: &str) {}

    /// A club ended without colours or without a location.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Progress sink that writes to the debug log.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    seen: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logf!("Crawl started: {total} clubs");
    }

    fn item_done(&mut self, name: &str) {
        self.seen += 1;
        logf!("[{}/{}] {name}: resolved", self.seen, self.total);
    }

    fn item_failed(&mut self, name: &str, reason: &str) {
        self.seen += 1;
        logf!("[{}/{}] {name}: {reason}", self.seen, self.total);
    }

    fn finish(&mut self) {
        logf!("Crawl finished: {}/{} clubs processed", self.seen, self.total);
    }
}
