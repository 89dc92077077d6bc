use clap::{Parser, Subcommand};

/// poolctl — command-line driver for the yieldpool dashboard flows.
#[derive(Parser, Debug)]
#[command(name = "poolctl", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Backend API base URL; falls back to API_URL, then localhost
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the authenticated user's profile
    Profile,

    /// List pools with yield ranges and per-user balances
    Pools,

    /// Show the withdraw fee schedule
    Fees,

    /// Show referral levels and earnings
    Referrals,

    /// Resolve the language-prefixed route for the given launch data
    ResolveLocale(ResolveLocaleArgs),

    /// Withdraw from a pool position
    Withdraw(WithdrawArgs),

    /// Withdraw profit from the balance
    WithdrawBalance(WithdrawBalanceArgs),

    /// Invest into a pool
    Invest(InvestArgs),

    /// Toggle auto-reinvest for a pool
    Reinvest(ReinvestArgs),

    /// Read or update the stored language preference
    Language(LanguageArgs),
}

/// Arguments for the `resolve-locale` subcommand.
#[derive(Parser, Debug)]
pub struct ResolveLocaleArgs {
    /// Raw Telegram init data; falls back to TMA_INIT_DATA
    #[arg(long)]
    pub init_data: Option<String>,
}

/// Arguments for the `withdraw` subcommand.
#[derive(Parser, Debug)]
pub struct WithdrawArgs {
    /// Pool name to withdraw from
    pub pool: String,

    /// Amount in USD
    pub amount: String,

    /// Use express mode (24h settlement, flat surcharge)
    #[arg(long)]
    pub express: bool,
}

/// Arguments for the `withdraw-balance` subcommand.
#[derive(Parser, Debug)]
pub struct WithdrawBalanceArgs {
    /// Amount in USD
    pub amount: String,

    /// Payment method id (USDT_TON, USDT_BEP20, RUB)
    pub method: String,

    /// Destination details (address or card number)
    pub details: String,
}

/// Arguments for the `invest` subcommand.
#[derive(Parser, Debug)]
pub struct InvestArgs {
    /// Pool name to invest into
    pub pool: String,

    /// Amount in USD
    pub amount: String,

    /// Settlement currency for any uncovered remainder
    /// (card_ru, ton, trx, usdt_ton, usdt_bep20)
    #[arg(long)]
    pub pay_with: Option<String>,
}

/// Arguments for the `reinvest` subcommand.
#[derive(Parser, Debug)]
pub struct ReinvestArgs {
    /// Pool name
    pub pool: String,

    /// Enable or disable auto-reinvest
    #[arg(long)]
    pub enabled: bool,
}

/// Arguments for the `language` subcommand.
#[derive(Parser, Debug)]
pub struct LanguageArgs {
    /// Telegram user id
    pub tg_id: i64,

    /// New language to store (ru, en, uk); omit to read
    #[arg(long)]
    pub set: Option<String>,
}
