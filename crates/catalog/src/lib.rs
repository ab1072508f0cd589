use std::path::{Path, PathBuf};

use freight_core::{Catalog, KnowledgeBase};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed reading catalog document {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog document is not valid")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub destinations: usize,
    pub cargo_types: usize,
    pub base_prices: usize,
    pub surcharges: usize,
    pub transit_times: usize,
}

impl CatalogStats {
    pub fn of(catalog: &Catalog) -> Self {
        Self {
            destinations: catalog.destinations.len(),
            cargo_types: catalog.cargo_types.len(),
            base_prices: catalog.base_prices.len(),
            surcharges: catalog.surcharges.len(),
            transit_times: catalog.transit_times.len(),
        }
    }
}

pub fn load_from_str(raw: &str) -> Result<KnowledgeBase, CatalogError> {
    let catalog = serde_json::from_str::<Catalog>(raw)?;
    Ok(KnowledgeBase::new(catalog))
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<KnowledgeBase, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&raw)
}

/// Loads the catalog at `path`, or returns a degraded knowledge base if it
/// cannot be read or parsed. Never fails.
pub fn load_or_degraded(path: impl AsRef<Path>) -> KnowledgeBase {
    let path = path.as_ref();
    match load_from_path(path) {
        Ok(kb) => {
            if let Some(stats) = kb.catalog().map(CatalogStats::of) {
                info!(
                    path = %path.display(),
                    destinations = stats.destinations,
                    cargo_types = stats.cargo_types,
                    transit_times = stats.transit_times,
                    "catalog loaded"
                );
            }
            kb
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "catalog unavailable, running degraded");
            KnowledgeBase::degraded()
        }
    }
}
