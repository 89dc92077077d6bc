mod cli;
mod error;
mod flows;

use std::sync::Arc;

use clap::Parser;
use cli::Command;
use tracing::info;

use yieldpool::{ApiClient, ApiConfig, UserSession, WithdrawMode, WithdrawReceipt};

use error::{AppError, Result};
use flows::balance_withdraw::BalanceWithdrawFlow;
use flows::invest::{InvestFlow, InvestStage, PaymentChoice};
use flows::pool_withdraw::PoolWithdrawFlow;

#[tokio::main]
async fn main() {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("failed to install rustls crypto provider");

    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli) -> Result<()> {
    let base_url = cli
        .api_url
        .clone()
        .or_else(|| std::env::var("API_URL").ok())
        .unwrap_or_else(|| "http://localhost:8000/api".to_string());
    let api = Arc::new(ApiClient::from_config(&ApiConfig::new(base_url)));

    // Locale resolution runs before any login, exactly like the root route.
    if let Command::ResolveLocale(args) = &cli.command {
        let init_data = args
            .init_data
            .clone()
            .or_else(|| std::env::var("TMA_INIT_DATA").ok());
        let locale = yieldpool::locale::resolve(&api, init_data.as_deref()).await;
        println!("{}", locale.redirect_path());
        return Ok(());
    }

    let mut session = establish_session(api).await?;

    match cli.command {
        Command::ResolveLocale(_) => unreachable!("handled above"),

        Command::Profile => {
            let profile = session
                .profile
                .as_ref()
                .ok_or(yieldpool::ApiError::NotAuthenticated)?;
            println!("user:        {} (id {})", profile.username, profile.user_id);
            println!("language:    {}", profile.lang);
            println!("deposited:   ${:.2}", profile.deposit_usd);
            println!("withdrawn:   ${:.2}", profile.withdraw_usd);
            println!("profit:      ${:.2}", profile.profit_usd);
            println!("on hold:     ${:.2}", profile.hold_balance);
            println!("ref link:    {}", profile.ref_link);
        }

        Command::Pools => {
            session.refresh_pools().await?;
            for pool in &session.pools {
                let (lo, hi) = pool.yield_range;
                println!(
                    "{:<12} yield {lo}%..{hi}%/day  min ${:.2}  balance ${:.2}  reinvest {}",
                    pool.name, pool.min_invest, pool.user_balance, pool.reinvest
                );
            }
        }

        Command::Fees => {
            session.refresh_fees().await?;
            let fees = session
                .fees
                .as_ref()
                .ok_or_else(|| AppError::Unavailable("fee schedule not loaded".to_string()))?;
            for pool in &fees.pool_withdrawals {
                println!(
                    "{:<12} balance ${:.2}  held {}d  standard {:.1}% ({}d)  express {:.1}% ({}d)",
                    pool.pool_name,
                    pool.user_balance,
                    pool.days_since_first_deposit,
                    pool.standard_mode.commission_rate * 100.0,
                    pool.standard_mode.execute_days,
                    pool.express_mode.commission_rate * 100.0,
                    pool.express_mode.execute_days,
                );
            }
            println!(
                "balance: ${:.2} available, no commission, {}",
                fees.balance_withdrawal.available_balance, fees.balance_withdrawal.processing_time
            );
            for (days, rate) in &fees.fee_tiers {
                println!("tier: {days}+ days held -> {:.1}%", rate * 100.0);
            }
        }

        Command::Referrals => {
            let user_id = session.user_id()?;
            let stats = session.api.get_referrals(user_id).await?;
            println!("code: {}", stats.ref_code);
            for level in &stats.levels {
                println!(
                    "level {}: {} referrals, ${:.2} earned",
                    level.level, level.count, level.earned
                );
            }
            println!("total earned: ${:.2}", stats.total_earned);
        }

        Command::Withdraw(args) => {
            session.refresh_fees().await?;
            let fees = session
                .fees
                .clone()
                .ok_or_else(|| AppError::Unavailable("fee schedule not loaded".to_string()))?;
            let pool = fees
                .pool_fees(&args.pool)
                .ok_or_else(|| AppError::Unavailable(format!("no position in pool {}", args.pool)))?;

            let mut flow = PoolWithdrawFlow::new(pool);
            flow.set_amount(&args.amount);
            flow.set_mode(if args.express {
                WithdrawMode::Express
            } else {
                WithdrawMode::Basic
            });

            if let Some(preview) = flow.preview(&fees) {
                println!(
                    "commission ${:.2} ({:.1}%), to receive ${:.2} in {} day(s)",
                    preview.commission,
                    preview.commission_rate * 100.0,
                    preview.final_amount,
                    preview.execute_days
                );
            }

            let receipt = flow.submit(&mut session).await?;
            print_receipt(&receipt);
        }

        Command::WithdrawBalance(args) => {
            session.refresh_fees().await?;
            let fees = session
                .fees
                .clone()
                .ok_or_else(|| AppError::Unavailable("fee schedule not loaded".to_string()))?;

            let mut flow = BalanceWithdrawFlow::new(&fees.balance_withdrawal);
            flow.set_amount(&args.amount);
            if !flow.next() {
                return Err(AppError::Validation(
                    "amount must be positive and within the available balance".to_string(),
                ));
            }
            if !flow.set_method(&args.method) {
                return Err(AppError::Validation(format!(
                    "unknown payment method: {}",
                    args.method
                )));
            }
            if !flow.next() {
                return Err(AppError::Validation(format!(
                    "amount is below the minimum for {}",
                    args.method
                )));
            }
            flow.set_details(&args.details);

            let receipt = flow.submit(&mut session).await?;
            print_receipt(&receipt);
        }

        Command::Invest(args) => {
            session.refresh_pools().await?;
            let pool = session.find_pool(&args.pool)?.clone();

            let mut flow = InvestFlow::new(pool);
            flow.set_amount(&args.amount);
            if let Some(projections) = flow.projections() {
                for (days, min, max) in projections {
                    println!("{days}d projected profit: ${min:.2} .. ${max:.2}");
                }
            }

            let status = flow.submit(&mut session).await?;
            info!(?status, "invest submitted");

            if let InvestStage::Payment { held, remainder } = *flow.stage() {
                println!("covered from balance: ${held:.2}");
                println!("remainder to pay: ${remainder:.2}");

                let choice = args
                    .pay_with
                    .as_deref()
                    .and_then(PaymentChoice::parse)
                    .ok_or_else(|| {
                        AppError::Validation(
                            "external payment required, pass --pay-with \
                             (card_ru, ton, trx, usdt_ton, usdt_bep20)"
                                .to_string(),
                        )
                    })?;

                let details = session.api.get_payment_details().await?;
                let rates = session.api.get_rates().await?;

                match choice.token_amount(remainder, &rates) {
                    Some(token_amount) => println!("send exactly: {token_amount:.2}"),
                    None => println!("send the USD equivalent of ${remainder:.2}"),
                }
                if let Some(address) = details.get(choice.currency_key()) {
                    println!("send to: {address}");
                }

                let resp = flow.confirm(&mut session, choice, &details).await?;
                println!("payment request created ({})", resp.status);
            } else {
                println!("investment covered by balance");
            }
        }

        Command::Reinvest(args) => {
            let user_id = session.user_id()?;
            session
                .api
                .set_reinvest(user_id, &args.pool, args.enabled)
                .await?;
            println!(
                "auto-reinvest for {} {}",
                args.pool,
                if args.enabled { "enabled" } else { "disabled" }
            );
        }

        Command::Language(args) => match args.set {
            Some(lang) => {
                session.api.set_language(args.tg_id, &lang).await?;
                println!("language set to {lang}");
            }
            None => {
                let pref = session.api.get_language(args.tg_id).await?;
                println!("{}", pref.lang);
            }
        },
    }

    Ok(())
}

/// Log in with the Telegram init data from the environment.
async fn establish_session(api: Arc<ApiClient>) -> Result<UserSession> {
    let init_data = std::env::var("TMA_INIT_DATA").map_err(|_| {
        AppError::Validation("TMA_INIT_DATA environment variable is required".to_string())
    })?;
    let mut session = UserSession::new(api);
    session.login(&init_data).await?;
    Ok(session)
}

fn print_receipt(receipt: &WithdrawReceipt) {
    println!(
        "request #{} {}: ${:.2} by {}",
        receipt.request_id, receipt.status, receipt.final_amount, receipt.execute_until
    );
}
