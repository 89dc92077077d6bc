//! Fee derivation over a fetched withdraw fee schedule.
//!
//! Pure functions of the loaded [`WithdrawFeesData`] and the user's chosen
//! amount/mode; no network calls. The backend's `commission_amount` /
//! `final_amount` fields are reference values at an example amount and are
//! never reused here; only the rate, delay and description are.

use crate::types::{PoolWithdrawInfo, WithdrawFeesData, WithdrawMode};

/// Priced preview for a requested withdrawal.
#[derive(Debug, Clone, PartialEq)]
pub struct FeePreview {
    pub commission: f64,
    pub final_amount: f64,
    pub commission_rate: f64,
    pub execute_days: u32,
    pub description: String,
}

impl WithdrawFeesData {
    /// Look up the withdrawal snapshot for a pool by name.
    pub fn pool_fees(&self, pool_name: &str) -> Option<&PoolWithdrawInfo> {
        self.pool_withdrawals
            .iter()
            .find(|p| p.pool_name == pool_name)
    }

    /// Derive a priced preview for `amount` withdrawn in `mode`.
    ///
    /// With a pool name, commission is `amount * rate` for that pool's mode;
    /// returns `None` if the pool has no snapshot, in which case submission
    /// must stay blocked. Without a pool name (balance withdrawal) the
    /// commission is always zero and settlement is fixed at one day.
    ///
    /// Amounts are not rounded here; rounding happens at presentation only.
    pub fn preview(
        &self,
        amount: f64,
        mode: WithdrawMode,
        pool_name: Option<&str>,
    ) -> Option<FeePreview> {
        match pool_name {
            Some(name) => {
                let pool = self.pool_fees(name)?;
                let fee_info = match mode {
                    WithdrawMode::Express => &pool.express_mode,
                    WithdrawMode::Basic => &pool.standard_mode,
                };
                let commission = amount * fee_info.commission_rate;
                Some(FeePreview {
                    commission,
                    final_amount: amount - commission,
                    commission_rate: fee_info.commission_rate,
                    execute_days: fee_info.execute_days,
                    description: fee_info.description.clone(),
                })
            }
            None => Some(FeePreview {
                commission: 0.0,
                final_amount: amount,
                commission_rate: 0.0,
                execute_days: 1,
                description: self.balance_withdrawal.description.clone(),
            }),
        }
    }

    /// Commission rate from the tier table for a given holding duration.
    ///
    /// Picks the rate of the largest threshold `<= days_since_deposit`;
    /// below the lowest threshold the maximum rate in the table applies.
    pub fn tier_rate(&self, days_since_deposit: u32) -> f64 {
        for (&days, &rate) in self.fee_tiers.iter().rev() {
            if days_since_deposit >= days {
                return rate;
            }
        }
        self.fee_tiers
            .values()
            .copied()
            .fold(0.0_f64, f64::max)
    }
}
