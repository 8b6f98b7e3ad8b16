use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::dataset::Dataset;

/// The catalog shipped with the binary, one YAML document embedded at compile
/// time. The main binary performs no runtime file I/O; everything it reports
/// on is in this document.
static BUILTIN_CATALOG_YAML: &str = include_str!("catalog.yaml");

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_yaml_str(BUILTIN_CATALOG_YAML).expect("built-in catalog should deserialize")
});

/// An ordered collection of measurement datasets. Declaration order is
/// report order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub datasets: Vec<Dataset>,
}

impl Catalog {
    /// The catalog compiled into the binary, parsed on first access.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Deserialize a catalog from a YAML document.
    pub fn from_yaml_str(raw: &str) -> Result<Catalog> {
        serde_yaml::from_str(raw).context("deserializing measurement catalog YAML")
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
