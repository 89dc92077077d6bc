use serde::{Deserialize, Serialize};

use super::enums::InvestStatus;

/// Outbound body of `POST /invest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestRequest {
    pub amount: f64,
    pub pool_name: String,
    /// Cover as much as possible from the existing balance first.
    pub use_balance: bool,
    pub user_id: i64,
}

/// Response to `POST /invest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestOutcome {
    pub status: InvestStatus,
    /// USD covered from the existing balance (`partial_hold` only).
    #[serde(default)]
    pub held: Option<f64>,
    /// USD still requiring external payment.
    #[serde(default)]
    pub remainder: Option<f64>,
    #[serde(default)]
    pub amount_token: Option<f64>,
}

/// Outbound body of `POST /invest/confirm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestConfirmRequest {
    pub user_id: i64,
    pub pool_name: String,
    pub amount_usd: f64,
    /// Currency key into the payment-details table (e.g. `usdt_ton`).
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Response to `POST /invest/confirm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestConfirmResponse {
    pub status: String,
    #[serde(default)]
    pub amount_token: Option<f64>,
}
