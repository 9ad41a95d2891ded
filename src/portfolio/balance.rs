use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::accrual::MonthlyObligation;
use super::payment::Payment;

/// Pooled reconciliation of one tenant's obligations against payments.
///
/// Derived on demand, never stored. A negative balance means overpayment and
/// still counts as up to date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TenantFinancialStatus {
    pub tenant_id: Uuid,
    pub total_obligation: f64,
    pub total_paid: f64,
    pub balance: f64,
    pub is_up_to_date: bool,
}

/// Folds the tenant's obligations and payments into a financial status.
///
/// Payments are pooled per tenant; no per-month attribution is performed or
/// available from this engine. A tenant id with no matching obligations or
/// payments yields the all-zero, up-to-date status.
pub fn tenant_financial_status(
    tenant_id: Uuid,
    obligations: &[MonthlyObligation],
    payments: &[Payment],
) -> TenantFinancialStatus {
    let total_obligation: f64 = obligations
        .iter()
        .filter(|o| o.tenant_id == tenant_id)
        .map(|o| o.amount)
        .sum();
    let total_paid: f64 = payments
        .iter()
        .filter(|p| p.tenant_id == tenant_id)
        .map(|p| p.amount)
        .sum();
    let balance = total_obligation - total_paid;

    TenantFinancialStatus {
        tenant_id,
        total_obligation,
        total_paid,
        balance,
        is_up_to_date: balance <= 0.0,
    }
}
