use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use freight_core::{resolve, KeywordSets, KnowledgeBase, Outcome};
use freight_observability::{DeskMetrics, MetricsSnapshot};
use tracing::{info, instrument};

pub const CATALOG_PATH_ENV: &str = "FREIGHT_CATALOG_PATH";
pub const DEFAULT_CATALOG_PATH: &str = "catalog/simulated_data.json";

#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub catalog_path: PathBuf,
    pub keywords: KeywordSets,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            keywords: KeywordSets::default(),
        }
    }
}

impl DeskConfig {
    pub fn from_env() -> Self {
        let catalog_path = env::var(CATALOG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH));

        Self {
            catalog_path,
            ..Self::default()
        }
    }
}

/// Answers freight inquiries from one immutable knowledge base.
///
/// Cloning is cheap and clones share the knowledge base and metrics, so a
/// desk can be handed to as many concurrent callers as needed.
#[derive(Debug, Clone)]
pub struct FreightDesk {
    kb: Arc<KnowledgeBase>,
    keywords: Arc<KeywordSets>,
    metrics: Arc<DeskMetrics>,
}

impl FreightDesk {
    pub fn new(kb: Arc<KnowledgeBase>, keywords: KeywordSets, metrics: Arc<DeskMetrics>) -> Self {
        Self {
            kb,
            keywords: Arc::new(keywords),
            metrics,
        }
    }

    /// Loads the configured catalog once; a missing or broken file yields a
    /// desk that only answers with the apology line.
    pub fn from_config(config: &DeskConfig) -> Self {
        let kb = freight_catalog::load_or_degraded(&config.catalog_path);
        Self::new(Arc::new(kb), config.keywords.clone(), DeskMetrics::shared())
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    #[instrument(skip(self, text))]
    pub fn resolve_inquiry(&self, text: &str) -> Vec<String> {
        let started = Instant::now();
        self.metrics.inc_inquiry();

        let resolution = resolve(&self.kb, &self.keywords, text);
        match resolution.outcome {
            Outcome::NothingFound => self.metrics.inc_fallback(),
            Outcome::CatalogUnavailable => self.metrics.inc_degraded(),
            Outcome::Answered => {}
        }
        self.metrics.add_lines(resolution.lines.len());
        self.metrics.observe_latency(started.elapsed());

        info!(
            lines = resolution.lines.len(),
            destinations = resolution.destinations_matched,
            cargo_types = resolution.cargo_types_matched,
            outcome = ?resolution.outcome,
            "inquiry resolved"
        );

        resolution.lines
    }
}
