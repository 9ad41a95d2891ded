//! Portfolio domain models and the rent-obligation accrual engine.

pub mod accrual;
pub mod balance;
pub mod month_key;
pub mod payment;
pub mod property;
pub mod tenant;

pub use accrual::{generate_obligations, MonthlyObligation};
pub use balance::{tenant_financial_status, TenantFinancialStatus};
pub use month_key::{months_inclusive, MonthKey, MonthRange};
pub use payment::Payment;
pub use property::{Property, UpdateFrequency};
pub use tenant::Tenant;
