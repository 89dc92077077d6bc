use serde::{Deserialize, Serialize};

/// Withdrawal speed tier.
///
/// `Basic` is the standard mode (tiered commission by days held); `Express`
/// settles within a day for a flat surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawMode {
    Basic,
    Express,
}

impl std::fmt::Display for WithdrawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WithdrawMode::Basic => write!(f, "basic"),
            WithdrawMode::Express => write!(f, "express"),
        }
    }
}

/// Where withdrawn funds are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawSource {
    Balance,
    Investment,
}

impl std::fmt::Display for WithdrawSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WithdrawSource::Balance => write!(f, "balance"),
            WithdrawSource::Investment => write!(f, "investment"),
        }
    }
}

/// Outcome status of an invest request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestStatus {
    /// Fully covered by existing balance.
    Reinvested,
    /// Part covered by balance, remainder requires external payment.
    PartialHold,
    /// Nothing covered, full amount requires external payment.
    RequestRequired,
}
