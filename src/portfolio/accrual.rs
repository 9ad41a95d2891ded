use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::month_key::{months_inclusive, MonthKey};
use super::property::Property;
use super::tenant::Tenant;

/// One tenant's rent owed for one calendar month, independent of payment.
///
/// Obligations are ephemeral: they are recomputed from the tenant and
/// property snapshot on every call and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyObligation {
    pub tenant_id: Uuid,
    pub month: MonthKey,
    pub amount: f64,
}

/// Expands each eligible tenant's contract window into one obligation per
/// whole calendar month touched by that window.
///
/// A tenant without both contract bounds, without a property link, or linked
/// to a property missing from `properties` accrues nothing. Those are normal
/// states for freshly created records, not errors.
///
/// Output order is tenant-list order, chronological within each tenant. The
/// amount is the linked property's rent as of this call; a later rent change
/// requires regenerating.
pub fn generate_obligations(tenants: &[Tenant], properties: &[Property]) -> Vec<MonthlyObligation> {
    let mut obligations = Vec::new();

    for tenant in tenants {
        let Some((start, end)) = tenant.contract_months() else {
            debug!(tenant = %tenant.id, "Skipping tenant without a usable contract window.");
            continue;
        };
        let Some(property_id) = tenant.property_id else {
            debug!(tenant = %tenant.id, "Skipping tenant without a property link.");
            continue;
        };
        let Some(property) = properties.iter().find(|p| p.id == property_id) else {
            debug!(
                tenant = %tenant.id,
                property = %property_id,
                "Skipping tenant linked to an unknown property."
            );
            continue;
        };

        // Rent is read once per tenant; the window spanning any part of a
        // month owes that whole month.
        let rent = property.rent;
        for month in months_inclusive(start, end) {
            obligations.push(MonthlyObligation {
                tenant_id: tenant.id,
                month,
                amount: rent,
            });
        }
    }

    obligations
}
