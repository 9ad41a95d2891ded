//! Report rendering for the snapshot CLI.

use colored::Colorize;

use crate::portfolio::{generate_obligations, tenant_financial_status, TenantFinancialStatus};
use crate::storage::PortfolioSnapshot;

/// One rendered status line per tenant, in tenant-list order. Obligations
/// and statuses are recomputed from the snapshot on every call.
pub fn status_report(snapshot: &PortfolioSnapshot) -> Vec<String> {
    let obligations = generate_obligations(&snapshot.tenants, &snapshot.properties);
    snapshot
        .tenants
        .iter()
        .map(|tenant| {
            let status = tenant_financial_status(tenant.id, &obligations, &snapshot.payments);
            status_line(&tenant.name, &status)
        })
        .collect()
}

/// One line per accrued obligation, grouped by tenant.
pub fn obligation_report(snapshot: &PortfolioSnapshot) -> Vec<String> {
    let obligations = generate_obligations(&snapshot.tenants, &snapshot.properties);
    snapshot
        .tenants
        .iter()
        .flat_map(|tenant| {
            obligations
                .iter()
                .filter(|o| o.tenant_id == tenant.id)
                .map(|o| format!("{:<24} {}  {:>10.2}", tenant.name, o.month, o.amount))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn status_line(name: &str, status: &TenantFinancialStatus) -> String {
    let label = if status.is_up_to_date {
        "up to date".green().bold()
    } else {
        "overdue".red().bold()
    };
    format!(
        "{:<24} owed {:>10.2}  paid {:>10.2}  balance {:>10.2}  {}",
        name, status.total_obligation, status.total_paid, status.balance, label
    )
}
