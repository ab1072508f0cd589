use crate::models::{BasePrice, CargoType, Catalog, Destination, TransitTimeEntry};

/// Read-only view over a loaded catalog.
///
/// A knowledge base whose source could not be loaded is *degraded*: every
/// accessor answers `None` and inquiry resolution short-circuits to the
/// apology line. There is no way to mutate a knowledge base after construction.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    catalog: Option<Catalog>,
}

impl KnowledgeBase {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Some(catalog),
        }
    }

    pub fn degraded() -> Self {
        Self { catalog: None }
    }

    pub fn is_degraded(&self) -> bool {
        self.catalog.is_none()
    }

    pub fn destinations(&self) -> Option<&[Destination]> {
        self.catalog.as_ref().map(|c| c.destinations.as_slice())
    }

    pub fn cargo_types(&self) -> Option<&[CargoType]> {
        self.catalog.as_ref().map(|c| c.cargo_types.as_slice())
    }

    pub fn base_price(&self, destination_name: &str) -> Option<&BasePrice> {
        self.catalog
            .as_ref()
            .and_then(|c| c.base_prices.get(destination_name))
    }

    pub fn surcharge(&self, cargo_type_name: &str) -> Option<f64> {
        self.catalog
            .as_ref()
            .and_then(|c| c.surcharges.get(cargo_type_name).copied())
    }

    pub fn transit_times(&self) -> Option<&[TransitTimeEntry]> {
        self.catalog.as_ref().map(|c| c.transit_times.as_slice())
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }
}

impl From<Catalog> for KnowledgeBase {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
