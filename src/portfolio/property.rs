use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How often a property's rent is scheduled to be revised. Carried with the
/// record for display; the accrual engine never evaluates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateFrequency {
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

/// Rental property record. The engine reads only `id` and `rent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Current monthly rent in the property's currency.
    pub rent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_frequency: Option<UpdateFrequency>,
}

impl Property {
    pub fn new(name: impl Into<String>, rent: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: None,
            rent,
            update_frequency: None,
        }
    }
}
