use serde::{Deserialize, Serialize};

/// Referral counts and earnings for one level of the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralLevel {
    pub level: u32,
    pub count: u32,
    pub earned: f64,
}

/// Response to `GET /referrals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralStats {
    pub ref_code: String,
    pub levels: Vec<ReferralLevel>,
    pub total_earned: f64,
}
