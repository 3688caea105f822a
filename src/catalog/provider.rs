//! Data provider seam for loading the catalog.

use super::{Catalog, CatalogError, DateOption, Station};
use std::path::PathBuf;

/// Supplies the station and date records before the wizard starts.
pub trait DataProvider {
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Reads a catalog from a JSON file on disk.
#[derive(Clone, Debug)]
pub struct JsonCatalogProvider {
    path: PathBuf,
}

impl JsonCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataProvider for JsonCatalogProvider {
    fn load(&self) -> Result<Catalog, CatalogError> {
        log::info!("loading catalog from {}", self.path.display());
        let json = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        Catalog::from_json(&json)
    }
}

/// Serves records held in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalogProvider {
    stations: Vec<Station>,
    dates: Vec<DateOption>,
}

impl StaticCatalogProvider {
    pub fn new(stations: Vec<Station>, dates: Vec<DateOption>) -> Self {
        Self { stations, dates }
    }
}

impl DataProvider for StaticCatalogProvider {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.stations.clone(), self.dates.clone())
    }
}
