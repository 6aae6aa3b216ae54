//! Basic metrics instrumentation for the store client.
//!
//! Provides counters and duration tracking for HTTP requests and record
//! operations against the hosted platform.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector shared by the store client.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Number of records fetched from the store
    records_fetched_total: Arc<AtomicU64>,

    /// Number of records written (inserted or updated)
    records_written_total: Arc<AtomicU64>,

    /// Number of objects uploaded to storage
    objects_uploaded_total: Arc<AtomicU64>,
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record records fetched from a list or get endpoint.
    pub fn record_records_fetched(&self, count: usize) {
        self.records_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record a write (insert or update).
    pub fn record_record_written(&self) {
        self.records_written_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an object upload.
    pub fn record_object_uploaded(&self) {
        self.objects_uploaded_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get total records fetched.
    pub fn records_fetched_total(&self) -> u64 {
        self.records_fetched_total.load(Ordering::Relaxed)
    }

    /// Get total records written.
    pub fn records_written_total(&self) -> u64 {
        self.records_written_total.load(Ordering::Relaxed)
    }

    /// Get total objects uploaded.
    pub fn objects_uploaded_total(&self) -> u64 {
        self.objects_uploaded_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.http_requests_total.store(0, Ordering::Relaxed);
        self.http_errors_total.store(0, Ordering::Relaxed);
        self.http_duration_total_ms.store(0, Ordering::Relaxed);
        self.records_fetched_total.store(0, Ordering::Relaxed);
        self.records_written_total.store(0, Ordering::Relaxed);
        self.objects_uploaded_total.store(0, Ordering::Relaxed);
    }
}
