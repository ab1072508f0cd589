use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct DeskMetrics {
    inquiries_total: AtomicU64,
    lines_total: AtomicU64,
    fallback_total: AtomicU64,
    degraded_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub inquiries_total: u64,
    pub lines_total: u64,
    pub fallback_total: u64,
    pub degraded_total: u64,
    pub avg_lines_per_inquiry: f64,
    pub avg_latency_micros: f64,
}

impl DeskMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_inquiry(&self) {
        self.inquiries_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_lines(&self, lines: usize) {
        self.lines_total.fetch_add(lines as u64, Ordering::Relaxed);
    }

    pub fn inc_fallback(&self) {
        self.fallback_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_degraded(&self) {
        self.degraded_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let inquiries = self.inquiries_total.load(Ordering::Relaxed);
        let lines = self.lines_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            inquiries_total: inquiries,
            lines_total: lines,
            fallback_total: self.fallback_total.load(Ordering::Relaxed),
            degraded_total: self.degraded_total.load(Ordering::Relaxed),
            avg_lines_per_inquiry: per_inquiry(lines, inquiries),
            avg_latency_micros: per_inquiry(latency, inquiries),
        }
    }
}

fn per_inquiry(total: u64, inquiries: u64) -> f64 {
    if inquiries == 0 {
        0.0
    } else {
        total as f64 / inquiries as f64
    }
}

pub const LOG_ENV: &str = "FREIGHT_LOG";

/// Directives used when neither `FREIGHT_LOG` nor `RUST_LOG` is set.
pub fn default_log_directives(service_name: &str) -> String {
    ["freight_desk", "freight_catalog"]
        .iter()
        .fold(format!("{service_name}=info"), |acc, target| {
            format!("{acc},{target}=info")
        })
}

/// Installs the JSON subscriber once per process; events go to stderr so
/// inquiry answers on stdout stay clean.
pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(default_log_directives(service_name)));

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
