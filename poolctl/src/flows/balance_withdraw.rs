//! Balance-scoped withdraw wizard: amount entry, payment-method selection,
//! then destination details. Zero commission throughout.

use tracing::{info, warn};

use yieldpool::{
    BalanceWithdrawInfo, FeePreview, UserSession, WithdrawMode, WithdrawReceipt, WithdrawRequest,
    WithdrawSource,
};

use crate::error::{AppError, Result};
use crate::flows::{parse_amount, sanitize_amount};

/// Wizard steps, in order. `next` validates the current step before
/// advancing; `back` is always available and never discards input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Amount,
    Method,
    Details,
}

/// Controller for withdrawing profit from the balance.
pub struct BalanceWithdrawFlow {
    available: f64,
    info: BalanceWithdrawInfo,
    step: Step,
    amount_input: String,
    method: Option<String>,
    details: String,
    in_flight: bool,
}

impl BalanceWithdrawFlow {
    pub fn new(info: &BalanceWithdrawInfo) -> Self {
        Self {
            available: info.available_balance,
            info: info.clone(),
            step: Step::Amount,
            amount_input: String::new(),
            method: None,
            details: String::new(),
            in_flight: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn set_amount(&mut self, raw: &str) {
        self.amount_input = sanitize_amount(raw);
    }

    /// Select a payment method by id; unknown ids are rejected.
    pub fn set_method(&mut self, method: &str) -> bool {
        if self.info.min_amounts.contains_key(method) {
            self.method = Some(method.to_string());
            true
        } else {
            false
        }
    }

    pub fn set_details(&mut self, details: &str) {
        self.details = details.to_string();
    }

    pub fn amount(&self) -> Option<f64> {
        parse_amount(&self.amount_input)
    }

    /// A positive parsed amount not exceeding the available balance.
    pub fn is_amount_valid(&self) -> bool {
        matches!(self.amount(), Some(a) if a > 0.0 && a <= self.available)
    }

    /// Selected method whose minimum the amount satisfies.
    pub fn is_method_valid(&self) -> bool {
        let (Some(method), Some(amount)) = (self.method.as_deref(), self.amount()) else {
            return false;
        };
        self.info
            .min_amounts
            .get(method)
            .is_some_and(|min| amount >= *min)
    }

    pub fn is_details_valid(&self) -> bool {
        !self.details.trim().is_empty()
    }

    /// Advance to the next step if the current one validates.
    pub fn next(&mut self) -> bool {
        let (valid, next) = match self.step {
            Step::Amount => (self.is_amount_valid(), Step::Method),
            Step::Method => (self.is_method_valid(), Step::Details),
            Step::Details => return false,
        };
        if valid {
            self.step = next;
        }
        valid
    }

    /// Step back, preserving everything entered so far.
    pub fn back(&mut self) -> bool {
        let prev = match self.step {
            Step::Amount => return false,
            Step::Method => Step::Amount,
            Step::Details => Step::Method,
        };
        self.step = prev;
        true
    }

    pub fn can_submit(&self) -> bool {
        self.step == Step::Details
            && self.is_amount_valid()
            && self.is_method_valid()
            && self.is_details_valid()
            && !self.in_flight
    }

    /// Zero-commission preview for the entered amount.
    pub fn preview(&self, fees: &yieldpool::WithdrawFeesData) -> Option<FeePreview> {
        if !self.is_amount_valid() {
            return None;
        }
        fees.preview(self.amount()?, WithdrawMode::Basic, None)
    }

    /// Submit the balance withdrawal and refresh the profile on success.
    pub async fn submit(&mut self, session: &mut UserSession) -> Result<WithdrawReceipt> {
        let (Some(amount), Some(method)) = (
            self.amount().filter(|_| self.can_submit()),
            self.method.clone(),
        ) else {
            return Err(AppError::Unavailable(
                "complete all wizard steps before submitting".to_string(),
            ));
        };
        let user_id = session.user_id()?;

        self.in_flight = true;
        let result = session
            .api
            .withdraw(&WithdrawRequest {
                user_id,
                source: WithdrawSource::Balance,
                amount,
                method: method.clone(),
                details: self.details.clone(),
                pool_name: None,
                mode: None,
                days_since_deposit: None,
            })
            .await;
        self.in_flight = false;

        match result {
            Ok(receipt) => {
                info!(
                    amount,
                    method = %method,
                    final_amount = receipt.final_amount,
                    execute_until = %receipt.execute_until,
                    "balance withdraw request created"
                );
                if let Err(e) = session.refresh_profile().await {
                    warn!(error = %e, "profile refresh after withdraw failed");
                }
                Ok(receipt)
            }
            Err(e) => {
                warn!(method = %method, error = %e, "balance withdraw request failed");
                Err(e.into())
            }
        }
    }
}
