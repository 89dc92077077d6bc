//! Integration tests for JSON round-trip serialization of the REST types.
//!
//! Each test constructs a realistic JSON fixture, deserializes it into the
//! Rust type, verifies field values, then re-serializes and deserializes
//! again to confirm the round-trip is lossless.

use yieldpool::types::*;

// ---------------------------------------------------------------------------
// UserProfile
// ---------------------------------------------------------------------------

#[test]
fn test_user_profile_round_trip() {
    let json = r#"{
        "user_id": 123456789,
        "username": "ann",
        "lang": "en",
        "deposit_usd": 1500.0,
        "withdraw_usd": 200.0,
        "profit_usd": 87.5,
        "hold_balance": 0.0,
        "auto_reinvest_flags": {"Alpha": true, "Beta": false},
        "ref_code": "ANN42",
        "ref_link": "https://t.me/pool_bot?start=ANN42",
        "total_earned_usd": 310.25
    }"#;

    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.user_id, 123456789);
    assert_eq!(profile.lang, "en");
    assert_eq!(profile.profit_usd, 87.5);
    assert_eq!(profile.auto_reinvest_flags["Alpha"], true);
    assert_eq!(profile.auto_reinvest_flags["Beta"], false);

    // Round-trip
    let serialized = serde_json::to_string(&profile).unwrap();
    let profile2: UserProfile = serde_json::from_str(&serialized).unwrap();
    assert_eq!(profile2.ref_code, profile.ref_code);
    assert_eq!(profile2.total_earned_usd, profile.total_earned_usd);
}

// ---------------------------------------------------------------------------
// PoolInfo / PoolsResponse
// ---------------------------------------------------------------------------

#[test]
fn test_pools_response_round_trip() {
    let json = r#"{
        "pools": [
            {
                "name": "Alpha",
                "coefficient": 1.2,
                "yield_range": [0.5, 1.2],
                "description": "Conservative pool",
                "min_invest": 50.0,
                "user_balance": 500.0,
                "reinvest": true
            },
            {
                "name": "Beta",
                "coefficient": 1.8,
                "yield_range": [1.0, 2.4],
                "description": "Aggressive pool",
                "min_invest": 250.0,
                "user_balance": 0.0,
                "reinvest": false
            }
        ]
    }"#;

    let resp: PoolsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.pools.len(), 2);
    assert_eq!(resp.pools[0].name, "Alpha");
    assert_eq!(resp.pools[0].yield_range, (0.5, 1.2));
    assert_eq!(resp.pools[1].min_invest, 250.0);
    assert!(!resp.pools[1].reinvest);

    let serialized = serde_json::to_string(&resp).unwrap();
    let resp2: PoolsResponse = serde_json::from_str(&serialized).unwrap();
    assert_eq!(resp2.pools[0].yield_range, resp.pools[0].yield_range);
}

// ---------------------------------------------------------------------------
// WithdrawFeesData
// ---------------------------------------------------------------------------

#[test]
fn test_withdraw_fees_data_round_trip() {
    let json = r#"{
        "pool_withdrawals": [
            {
                "pool_name": "Alpha",
                "user_balance": 500.0,
                "days_since_first_deposit": 45,
                "standard_mode": {
                    "days_since_deposit": 45,
                    "commission_rate": 0.05,
                    "commission_amount": 5.0,
                    "final_amount": 95.0,
                    "execute_days": 7,
                    "description": "Standard withdrawal - funds arrive in 7 days"
                },
                "express_mode": {
                    "days_since_deposit": 45,
                    "commission_rate": 0.1,
                    "commission_amount": 10.0,
                    "final_amount": 90.0,
                    "execute_days": 1,
                    "description": "Express withdrawal - funds arrive within 24 hours"
                }
            }
        ],
        "balance_withdrawal": {
            "available_balance": 87.5,
            "commission_rate": 0.0,
            "processing_time": "up to 24 hours",
            "description": "Profit withdrawal - no commission",
            "min_amounts": {"USDT_TON": 10, "USDT_BEP20": 10, "RUB": 500}
        },
        "fee_tiers": {"0": 0.2, "30": 0.1, "90": 0.05, "180": 0.0},
        "express_fee": 0.1
    }"#;

    let fees: WithdrawFeesData = serde_json::from_str(json).unwrap();
    assert_eq!(fees.pool_withdrawals.len(), 1);
    assert_eq!(fees.pool_withdrawals[0].standard_mode.commission_rate, 0.05);
    assert_eq!(fees.balance_withdrawal.min_amounts["RUB"], 500.0);

    // Stringified integer keys decode into an ordered map.
    assert_eq!(fees.fee_tiers.len(), 4);
    assert_eq!(fees.fee_tiers[&0], 0.2);
    assert_eq!(fees.fee_tiers[&180], 0.0);
    let thresholds: Vec<u32> = fees.fee_tiers.keys().copied().collect();
    assert_eq!(thresholds, vec![0, 30, 90, 180]);

    let serialized = serde_json::to_string(&fees).unwrap();
    let fees2: WithdrawFeesData = serde_json::from_str(&serialized).unwrap();
    assert_eq!(fees2.fee_tiers, fees.fee_tiers);
    assert_eq!(fees2.express_fee, 0.1);
}

// ---------------------------------------------------------------------------
// WithdrawRequest / WithdrawReceipt
// ---------------------------------------------------------------------------

#[test]
fn test_withdraw_request_serialization() {
    let req = WithdrawRequest {
        user_id: 123456789,
        source: WithdrawSource::Investment,
        amount: 100.0,
        method: "INTERNAL".to_string(),
        details: "Alpha".to_string(),
        pool_name: Some("Alpha".to_string()),
        mode: Some(WithdrawMode::Express),
        days_since_deposit: Some(45),
    };

    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["source"], "investment");
    assert_eq!(value["mode"], "express");
    assert_eq!(value["pool_name"], "Alpha");

    // Optional fields are omitted for balance withdrawals.
    let req = WithdrawRequest {
        user_id: 123456789,
        source: WithdrawSource::Balance,
        amount: 50.0,
        method: "USDT_TON".to_string(),
        details: "UQabc...".to_string(),
        pool_name: None,
        mode: None,
        days_since_deposit: None,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["source"], "balance");
    assert!(value.get("pool_name").is_none());
    assert!(value.get("mode").is_none());
}

#[test]
fn test_withdraw_receipt_round_trip() {
    let json = r#"{
        "final_amount": 95.0,
        "execute_until": "2026-08-26T12:30:00Z",
        "status": "pending",
        "request_id": 77
    }"#;

    let receipt: WithdrawReceipt = serde_json::from_str(json).unwrap();
    assert_eq!(receipt.final_amount, 95.0);
    assert_eq!(receipt.status, "pending");
    assert_eq!(receipt.request_id, 77);

    let serialized = serde_json::to_string(&receipt).unwrap();
    let receipt2: WithdrawReceipt = serde_json::from_str(&serialized).unwrap();
    assert_eq!(receipt2.execute_until, receipt.execute_until);
}

// ---------------------------------------------------------------------------
// InvestOutcome
// ---------------------------------------------------------------------------

#[test]
fn test_invest_outcome_statuses() {
    let reinvested: InvestOutcome =
        serde_json::from_str(r#"{"status": "reinvested"}"#).unwrap();
    assert_eq!(reinvested.status, InvestStatus::Reinvested);
    assert!(reinvested.held.is_none());

    let partial: InvestOutcome = serde_json::from_str(
        r#"{"status": "partial_hold", "held": 120.0, "remainder": 80.0}"#,
    )
    .unwrap();
    assert_eq!(partial.status, InvestStatus::PartialHold);
    assert_eq!(partial.held, Some(120.0));
    assert_eq!(partial.remainder, Some(80.0));

    let required: InvestOutcome = serde_json::from_str(
        r#"{"status": "request_required", "remainder": 200.0}"#,
    )
    .unwrap();
    assert_eq!(required.status, InvestStatus::RequestRequired);
    assert_eq!(required.remainder, Some(200.0));
}

// ---------------------------------------------------------------------------
// ReferralStats
// ---------------------------------------------------------------------------

#[test]
fn test_referral_stats_round_trip() {
    let json = r#"{
        "ref_code": "ANN42",
        "levels": [
            {"level": 1, "count": 4, "earned": 36.0},
            {"level": 2, "count": 11, "earned": 18.5}
        ],
        "total_earned": 54.5
    }"#;

    let stats: ReferralStats = serde_json::from_str(json).unwrap();
    assert_eq!(stats.levels.len(), 2);
    assert_eq!(stats.levels[1].level, 2);
    assert_eq!(stats.levels[1].count, 11);
    assert_eq!(stats.total_earned, 54.5);

    let serialized = serde_json::to_string(&stats).unwrap();
    let stats2: ReferralStats = serde_json::from_str(&serialized).unwrap();
    assert_eq!(stats2.levels[0].earned, stats.levels[0].earned);
}
