//! Pool-scoped withdraw flow: amount entry with an inline basic/express
//! toggle, then guarded submission.

use tracing::{info, warn};

use yieldpool::{
    FeePreview, PoolWithdrawInfo, UserSession, WithdrawMode, WithdrawReceipt, WithdrawRequest,
    WithdrawSource,
};

use crate::error::{AppError, Result};
use crate::flows::{parse_amount, sanitize_amount};

/// Method id used for pool withdrawals (funds move inside the platform).
const POOL_WITHDRAW_METHOD: &str = "INTERNAL";

/// Controller for withdrawing from a single pool position.
///
/// Built from the pool's entry in the fetched fee schedule; the schedule
/// itself stays owned by the session so that mode toggles recompute the
/// preview without any network round-trip.
pub struct PoolWithdrawFlow {
    pool_name: String,
    pool_balance: f64,
    days_since_deposit: u32,
    amount_input: String,
    mode: WithdrawMode,
    in_flight: bool,
}

impl PoolWithdrawFlow {
    pub fn new(pool: &PoolWithdrawInfo) -> Self {
        Self {
            pool_name: pool.pool_name.clone(),
            pool_balance: pool.user_balance,
            days_since_deposit: pool.days_since_first_deposit,
            amount_input: String::new(),
            mode: WithdrawMode::Basic,
            in_flight: false,
        }
    }

    /// Replace the amount input, filtering out non-numeric characters.
    pub fn set_amount(&mut self, raw: &str) {
        self.amount_input = sanitize_amount(raw);
    }

    /// Toggle between basic and express mode. Purely local.
    pub fn set_mode(&mut self, mode: WithdrawMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> WithdrawMode {
        self.mode
    }

    pub fn amount(&self) -> Option<f64> {
        parse_amount(&self.amount_input)
    }

    /// A positive parsed amount not exceeding the pool balance.
    pub fn is_amount_valid(&self) -> bool {
        matches!(self.amount(), Some(a) if a > 0.0 && a <= self.pool_balance)
    }

    /// Submission is available only with a valid amount and no request
    /// already in flight.
    pub fn can_submit(&self) -> bool {
        self.is_amount_valid() && !self.in_flight
    }

    /// Priced preview for the current amount and mode.
    ///
    /// `None` while the amount is invalid or the fee schedule has no entry
    /// for this pool; callers render a disabled state, not an error.
    pub fn preview(&self, fees: &yieldpool::WithdrawFeesData) -> Option<FeePreview> {
        if !self.is_amount_valid() {
            return None;
        }
        fees.preview(self.amount()?, self.mode, Some(&self.pool_name))
    }

    /// Send the withdraw request and refresh the profile on success.
    ///
    /// Failures are reported once; the entered amount and mode survive so
    /// the user can resubmit manually.
    pub async fn submit(&mut self, session: &mut UserSession) -> Result<WithdrawReceipt> {
        let Some(amount) = self.amount().filter(|_| self.can_submit()) else {
            return Err(AppError::Unavailable(
                "amount must be positive and within the pool balance".to_string(),
            ));
        };
        let user_id = session.user_id()?;

        self.in_flight = true;
        let result = session
            .api
            .withdraw(&WithdrawRequest {
                user_id,
                source: WithdrawSource::Investment,
                amount,
                method: POOL_WITHDRAW_METHOD.to_string(),
                details: self.pool_name.clone(),
                pool_name: Some(self.pool_name.clone()),
                mode: Some(self.mode),
                days_since_deposit: Some(self.days_since_deposit),
            })
            .await;
        self.in_flight = false;

        match result {
            Ok(receipt) => {
                info!(
                    pool = %self.pool_name,
                    amount,
                    mode = %self.mode,
                    final_amount = receipt.final_amount,
                    execute_until = %receipt.execute_until,
                    "withdraw request created"
                );
                if let Err(e) = session.refresh_profile().await {
                    warn!(error = %e, "profile refresh after withdraw failed");
                }
                Ok(receipt)
            }
            Err(e) => {
                warn!(pool = %self.pool_name, error = %e, "withdraw request failed");
                Err(e.into())
            }
        }
    }
}
