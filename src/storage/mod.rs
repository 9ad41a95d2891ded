//! JSON snapshot store: the input adapter feeding the accrual engine.
//!
//! Obligations and statuses are never written back; only the raw tenant,
//! property, and payment collections are persisted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::RentalError;
use crate::portfolio::{Payment, Property, Tenant};

pub type Result<T> = std::result::Result<T, RentalError>;

const TMP_SUFFIX: &str = "tmp";

/// Point-in-time export of the application datastore. Collections default to
/// empty so a partial export still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// Reads and writes portfolio snapshots as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<PortfolioSnapshot> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Writes through a sibling temp file so an interrupted save never
    /// leaves a half-written snapshot at the target path.
    pub fn save(&self, snapshot: &PortfolioSnapshot) -> Result<()> {
        let data = serde_json::to_string_pretty(snapshot)?;
        write_atomic(&self.path, &data)
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = path.with_extension(TMP_SUFFIX);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
