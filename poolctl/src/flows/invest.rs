//! Invest flow: amount entry with profit projections, balance-first
//! submission, and a payment-instruction step for any uncovered remainder.

use std::collections::HashMap;

use tracing::{info, warn};

use yieldpool::{
    InvestConfirmRequest, InvestConfirmResponse, InvestRequest, InvestStatus, PoolInfo,
    UserSession,
};

use crate::error::{AppError, Result};
use crate::flows::{parse_amount, sanitize_amount};

/// Projection horizons shown next to the amount input, in days.
pub const PROJECTION_HORIZONS: [u32; 3] = [1, 7, 30];

/// Linear profit projection: `amount * yield * days / 100` for both yield
/// bounds (percent per day). Deterministic, not a simulation.
pub fn project_profit(amount: f64, yield_range: (f64, f64), days: u32) -> (f64, f64) {
    let (min_yield, max_yield) = yield_range;
    (
        amount * min_yield * days as f64 / 100.0,
        amount * max_yield * days as f64 / 100.0,
    )
}

/// Settlement currency for the remainder payment.
///
/// A bare "usdt" choice is unrepresentable: picking USDT always carries its
/// network, so the confirm step cannot be reached half-selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChoice {
    CardRu,
    Ton,
    Trx,
    UsdtTon,
    UsdtBep20,
}

impl PaymentChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "card_ru" => Some(Self::CardRu),
            "ton" => Some(Self::Ton),
            "trx" => Some(Self::Trx),
            "usdt_ton" => Some(Self::UsdtTon),
            "usdt_bep20" => Some(Self::UsdtBep20),
            _ => None,
        }
    }

    /// Key into the payment-details address table. TON payments reuse the
    /// USDT (TON) address.
    pub fn currency_key(&self) -> &'static str {
        match self {
            Self::CardRu => "card_ru",
            Self::Ton => "usdt_ton",
            Self::Trx => "trx",
            Self::UsdtTon => "usdt_ton",
            Self::UsdtBep20 => "usdt_bep20",
        }
    }

    /// Convert a USD remainder into this settlement currency.
    ///
    /// Crypto rates are USD-quoted (`TON_USD` etc.), so the remainder is
    /// divided; the ruble rate is quoted per USDT, so it multiplies.
    /// `None` when the needed rate is missing from the fetched table.
    pub fn token_amount(&self, remainder: f64, rates: &HashMap<String, f64>) -> Option<f64> {
        match self {
            Self::CardRu => rates.get("USDT_RUB").map(|r| remainder * r),
            Self::Ton => rates.get("TON_USD").map(|r| remainder / r),
            Self::Trx => rates.get("TRX_USD").map(|r| remainder / r),
            Self::UsdtTon => rates.get("USDT_TON_USD").map(|r| remainder / r),
            Self::UsdtBep20 => rates.get("USDT_BEP20_USD").map(|r| remainder / r),
        }
    }
}

/// Where the invest flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvestStage {
    /// Entering the amount.
    Amount,
    /// Balance did not cover everything; remainder awaits external payment.
    Payment { held: f64, remainder: f64 },
    /// Flow finished with the given backend status.
    Done { status: InvestStatus },
}

/// Controller for investing into a pool.
pub struct InvestFlow {
    pool: PoolInfo,
    amount_input: String,
    stage: InvestStage,
    in_flight: bool,
}

impl InvestFlow {
    pub fn new(pool: PoolInfo) -> Self {
        Self {
            pool,
            amount_input: String::new(),
            stage: InvestStage::Amount,
            in_flight: false,
        }
    }

    pub fn stage(&self) -> &InvestStage {
        &self.stage
    }

    pub fn set_amount(&mut self, raw: &str) {
        self.amount_input = sanitize_amount(raw);
    }

    pub fn amount(&self) -> Option<f64> {
        parse_amount(&self.amount_input)
    }

    /// A parsed amount meeting the pool's minimum deposit.
    pub fn is_amount_valid(&self) -> bool {
        matches!(self.amount(), Some(a) if a >= self.pool.min_invest)
    }

    pub fn can_submit(&self) -> bool {
        self.stage == InvestStage::Amount && self.is_amount_valid() && !self.in_flight
    }

    /// Min/max profit projections for the entered amount over the standard
    /// horizons; `None` while the amount is invalid.
    pub fn projections(&self) -> Option<Vec<(u32, f64, f64)>> {
        let amount = self.is_amount_valid().then(|| self.amount())??;
        Some(
            PROJECTION_HORIZONS
                .iter()
                .map(|&days| {
                    let (min, max) = project_profit(amount, self.pool.yield_range, days);
                    (days, min, max)
                })
                .collect(),
        )
    }

    /// Ask the backend to invest, covering as much as possible from the
    /// existing balance. Transfers to the payment stage when a remainder
    /// requires external payment.
    pub async fn submit(&mut self, session: &mut UserSession) -> Result<InvestStatus> {
        let Some(amount) = self.amount().filter(|_| self.can_submit()) else {
            return Err(AppError::Unavailable(format!(
                "amount must be at least the pool minimum of {}",
                self.pool.min_invest
            )));
        };
        let user_id = session.user_id()?;

        self.in_flight = true;
        let result = session
            .api
            .invest(&InvestRequest {
                amount,
                pool_name: self.pool.name.clone(),
                use_balance: true,
                user_id,
            })
            .await;
        self.in_flight = false;

        let outcome = result.map_err(|e| {
            warn!(pool = %self.pool.name, error = %e, "invest request failed");
            e
        })?;

        match outcome.status {
            InvestStatus::Reinvested => {
                info!(pool = %self.pool.name, amount, "invest covered by balance");
                if let Err(e) = session.refresh_profile().await {
                    warn!(error = %e, "profile refresh after invest failed");
                }
                self.stage = InvestStage::Done {
                    status: InvestStatus::Reinvested,
                };
            }
            InvestStatus::PartialHold => {
                self.stage = InvestStage::Payment {
                    held: outcome.held.unwrap_or(0.0),
                    remainder: outcome.remainder.unwrap_or(0.0),
                };
            }
            InvestStatus::RequestRequired => {
                self.stage = InvestStage::Payment {
                    held: 0.0,
                    remainder: outcome.remainder.unwrap_or(amount),
                };
            }
        }
        Ok(outcome.status)
    }

    /// Create the payment request for the uncovered remainder.
    ///
    /// Only reachable from the payment stage; the destination address is
    /// looked up in the fetched payment-details table by currency key.
    pub async fn confirm(
        &mut self,
        session: &mut UserSession,
        choice: PaymentChoice,
        payment_details: &HashMap<String, String>,
    ) -> Result<InvestConfirmResponse> {
        let InvestStage::Payment { remainder, .. } = self.stage else {
            return Err(AppError::Unavailable(
                "no pending payment for this investment".to_string(),
            ));
        };
        if self.in_flight {
            return Err(AppError::Unavailable("request already in flight".to_string()));
        }
        let user_id = session.user_id()?;
        let currency = choice.currency_key();

        self.in_flight = true;
        let result = session
            .api
            .confirm_invest(&InvestConfirmRequest {
                user_id,
                pool_name: self.pool.name.clone(),
                amount_usd: remainder,
                currency: currency.to_string(),
                details: payment_details.get(currency).cloned(),
            })
            .await;
        self.in_flight = false;

        let resp = result.map_err(|e| {
            warn!(pool = %self.pool.name, currency, error = %e, "invest confirm failed");
            e
        })?;

        if resp.status == "request_created" {
            info!(pool = %self.pool.name, currency, remainder, "payment request created");
            if let Err(e) = session.refresh_profile().await {
                warn!(error = %e, "profile refresh after confirm failed");
            }
            self.stage = InvestStage::Done {
                status: InvestStatus::RequestRequired,
            };
            Ok(resp)
        } else {
            Err(AppError::Validation(format!(
                "unexpected confirm status: {}",
                resp.status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> PoolInfo {
        PoolInfo {
            name: "Alpha".to_string(),
            coefficient: 1.2,
            yield_range: (0.5, 1.2),
            description: String::new(),
            min_invest: 50.0,
            user_balance: 0.0,
            reinvest: false,
        }
    }

    #[test]
    fn test_projection_scenario() {
        // $1000 at [0.5, 1.2] percent/day over 30 days.
        let (min, max) = project_profit(1000.0, (0.5, 1.2), 30);
        assert_eq!(min, 150.0);
        assert_eq!(max, 360.0);
    }

    #[test]
    fn test_projections_require_min_invest() {
        let mut flow = InvestFlow::new(pool());
        flow.set_amount("49.99");
        assert!(flow.projections().is_none());
        assert!(!flow.can_submit());

        flow.set_amount("1000");
        let proj = flow.projections().unwrap();
        assert_eq!(proj.len(), 3);
        assert_eq!(proj[0].0, 1);
        assert_eq!(proj[2], (30, 150.0, 360.0));
        assert!(flow.can_submit());
    }

    #[test]
    fn test_token_amount_conversions() {
        let rates = HashMap::from([
            ("TON_USD".to_string(), 5.0),
            ("TRX_USD".to_string(), 0.25),
            ("USDT_TON_USD".to_string(), 1.0),
            ("USDT_RUB".to_string(), 95.0),
        ]);

        assert_eq!(PaymentChoice::Ton.token_amount(100.0, &rates), Some(20.0));
        assert_eq!(PaymentChoice::Trx.token_amount(100.0, &rates), Some(400.0));
        assert_eq!(
            PaymentChoice::UsdtTon.token_amount(100.0, &rates),
            Some(100.0)
        );
        // Fiat is quoted per USDT: multiply instead of divide.
        assert_eq!(
            PaymentChoice::CardRu.token_amount(100.0, &rates),
            Some(9500.0)
        );
        // Missing rate: no amount, caller shows the USD remainder.
        assert_eq!(PaymentChoice::UsdtBep20.token_amount(100.0, &rates), None);
    }

    #[test]
    fn test_currency_keys() {
        assert_eq!(PaymentChoice::Ton.currency_key(), "usdt_ton");
        assert_eq!(PaymentChoice::UsdtBep20.currency_key(), "usdt_bep20");
        assert_eq!(PaymentChoice::parse("card_ru"), Some(PaymentChoice::CardRu));
        assert_eq!(PaymentChoice::parse("doge"), None);
    }
}
