use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::enums::{WithdrawMode, WithdrawSource};

/// Fee parameters for one withdrawal mode of one pool.
///
/// `commission_amount` and `final_amount` are reference values computed by
/// the backend at an unspecified example amount; only `commission_rate`,
/// `execute_days` and `description` are reusable. Previews for the user's
/// actual amount are recomputed locally (see [`crate::fees`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawFeeInfo {
    pub days_since_deposit: u32,
    pub commission_rate: f64,
    pub commission_amount: f64,
    pub final_amount: f64,
    pub execute_days: u32,
    pub description: String,
}

/// Per-pool withdrawal snapshot for the requesting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolWithdrawInfo {
    pub pool_name: String,
    pub user_balance: f64,
    pub days_since_first_deposit: u32,
    pub standard_mode: WithdrawFeeInfo,
    pub express_mode: WithdrawFeeInfo,
}

/// Balance-source withdrawal parameters (always zero commission).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceWithdrawInfo {
    pub available_balance: f64,
    pub commission_rate: f64,
    pub processing_time: String,
    pub description: String,
    /// Minimum withdrawal amount per payment method id.
    pub min_amounts: HashMap<String, f64>,
}

/// Aggregate fee schedule returned by `GET /withdraw/fees/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawFeesData {
    pub pool_withdrawals: Vec<PoolWithdrawInfo>,
    pub balance_withdrawal: BalanceWithdrawInfo,
    /// Days-held threshold -> commission rate. The backend serializes the
    /// integer keys as JSON strings.
    #[serde(deserialize_with = "deserialize_fee_tiers")]
    pub fee_tiers: BTreeMap<u32, f64>,
    /// Flat surcharge rate for express mode.
    pub express_fee: f64,
}

fn deserialize_fee_tiers<'de, D>(deserializer: D) -> Result<BTreeMap<u32, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, f64> = HashMap::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| {
            k.parse::<u32>()
                .map(|days| (days, v))
                .map_err(serde::de::Error::custom)
        })
        .collect()
}

/// Outbound body of `POST /withdraw`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub user_id: i64,
    pub source: WithdrawSource,
    pub amount: f64,
    /// Payment method id ("RUB", "USDT_TON", "USDT_BEP20", "INTERNAL").
    pub method: String,
    /// Destination details (address / card); the pool name for pool withdrawals.
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_name: Option<String>,
    /// Only meaningful for `source = investment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<WithdrawMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_deposit: Option<u32>,
}

/// Response to a created withdraw request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawReceipt {
    pub final_amount: f64,
    pub execute_until: DateTime<Utc>,
    pub status: String,
    pub request_id: i64,
}
