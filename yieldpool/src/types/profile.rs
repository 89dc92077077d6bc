use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Authenticated user's profile snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub username: String,
    pub lang: String,
    pub deposit_usd: f64,
    pub withdraw_usd: f64,
    pub profit_usd: f64,
    pub hold_balance: f64,
    pub auto_reinvest_flags: HashMap<String, bool>,
    pub ref_code: String,
    pub ref_link: String,
    pub total_earned_usd: f64,
}
