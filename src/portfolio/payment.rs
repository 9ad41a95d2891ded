use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded payment. Payments are pooled per tenant; nothing here links a
/// payment to a particular month's obligation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
}

impl Payment {
    pub fn new(tenant_id: Uuid, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            amount,
            date: None,
            concept: None,
        }
    }
}
