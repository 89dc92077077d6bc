pub mod config;
pub mod error;
pub mod fees;
pub mod locale;
pub mod rest;
pub mod session;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use rest::ApiClient;
pub use session::UserSession;

// Core enums
pub use types::{InvestStatus, WithdrawMode, WithdrawSource};

// Profile + pools
pub use types::{PoolInfo, UserProfile};

// Withdraw fee schedule
pub use types::{BalanceWithdrawInfo, PoolWithdrawInfo, WithdrawFeeInfo, WithdrawFeesData};

// Withdraw requests
pub use types::{WithdrawReceipt, WithdrawRequest};

// Invest
pub use types::{InvestConfirmRequest, InvestConfirmResponse, InvestOutcome, InvestRequest};

// Referrals + language
pub use types::{LanguagePreference, ReferralLevel, ReferralStats};

// Fee derivation
pub use fees::FeePreview;

// Locale
pub use locale::Locale;
