use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::month_key::MonthKey;

/// Tenant record as stored by the application datastore.
///
/// Contract bounds stay raw ISO-8601 strings: a newly created tenant has no
/// contract yet, and a malformed value must degrade to "no usable bound"
/// instead of failing the whole snapshot load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub property_id: Option<Uuid>,
    #[serde(default)]
    pub contract_start: Option<String>,
    #[serde(default)]
    pub contract_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Tenant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            property_id: None,
            contract_start: None,
            contract_end: None,
            notes: None,
        }
    }

    pub fn with_contract(
        mut self,
        property_id: Uuid,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.property_id = Some(property_id);
        self.contract_start = Some(start.into());
        self.contract_end = Some(end.into());
        self
    }

    /// Contract window normalized to month granularity.
    ///
    /// `None` when either bound is unset, empty, or not an ISO date.
    pub fn contract_months(&self) -> Option<(MonthKey, MonthKey)> {
        let start = parse_contract_date(self.contract_start.as_deref())?;
        let end = parse_contract_date(self.contract_end.as_deref())?;
        Some((MonthKey::from_date(start), MonthKey::from_date(end)))
    }
}

fn parse_contract_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_months_requires_both_bounds() {
        let tenant = Tenant::new("Ana");
        assert!(tenant.contract_months().is_none());

        let mut tenant = tenant.with_contract(Uuid::new_v4(), "2024-01-15", "2024-03-10");
        let (start, end) = tenant.contract_months().unwrap();
        assert_eq!(start.to_string(), "2024-01");
        assert_eq!(end.to_string(), "2024-03");

        tenant.contract_end = Some("  ".into());
        assert!(tenant.contract_months().is_none());
    }

    #[test]
    fn malformed_dates_degrade_to_no_window() {
        let tenant =
            Tenant::new("Luis").with_contract(Uuid::new_v4(), "15/01/2024", "2024-03-10");
        assert!(tenant.contract_months().is_none());
    }
}
