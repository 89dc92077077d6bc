use serde::{Deserialize, Serialize};

/// A named yield-bearing investment bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolInfo {
    pub name: String,
    pub coefficient: f64,
    /// Daily yield bounds in percent, `[min, max]`.
    pub yield_range: (f64, f64),
    pub description: String,
    pub min_invest: f64,
    /// The requesting user's balance in this pool.
    pub user_balance: f64,
    /// Whether settled profit is automatically redeposited.
    pub reinvest: bool,
}

/// Wrapper returned by `GET /pools/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolsResponse {
    pub pools: Vec<PoolInfo>,
}

/// Body of `POST /reinvest/settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReinvestSettings {
    pub user_id: i64,
    pub pool_name: String,
    pub enabled: bool,
}
