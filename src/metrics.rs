use std::sync::Mutex;
use chrono::{DateTime, Utc};

// Counts are kept as (status, count) pairs instead of a map so the
// /metrics output lists status codes in the order they were first seen.
#[derive(Debug)]
pub struct Metrics {
    counts: Mutex<Vec<(u16, u64)>>,
    start_time: DateTime<Utc>,
}

impl Metrics {
    pub fn new() -> Self {

        Self {
            counts: Mutex::new(Vec::new()),
            start_time: Utc::now(),
        }

    }

    // increment the count for a status code, creating it on first sight
    pub fn record(&self, status: u16) {

        let mut counts = self.counts.lock()
            .expect("metrics lock poisoned");

        match counts.iter_mut().find(|(code, _)| *code == status) {
            Some((_, count)) => *count += 1,
            None => counts.push((status, 1)),
        }

    }

    pub fn render(&self) -> String {

        let uptime = (Utc::now() - self.start_time).num_seconds();

        let counts = self.counts.lock()
            .expect("metrics lock poisoned");

        let mut output = format!(
            "# Metrics Collection\n# Uptime: {} seconds\n\n# HTTP Status Codes\n",
            uptime
        );

        for (status, count) in counts.iter() {
            output.push_str(&format!("{}: {}\n", status, count));
        }

        let total: u64 = counts.iter().map(|(_, count)| count).sum();
        output.push_str(&format!("\nTotal Requests: {}\n", total));

        output

    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
