use std::collections::HashMap;

use crate::error::Result;
use crate::rest::ApiClient;
use crate::types::*;

impl ApiClient {
    // --- Auth ---

    /// POST /auth/login - Exchange Telegram init data for a bearer token.
    ///
    /// Sends `Authorization: tma <init-data>`; the returned token is NOT
    /// installed automatically, callers decide when to adopt it.
    pub async fn login(&self, init_data: &str) -> Result<LoginResponse> {
        self.post_with_auth_header("/auth/login", &format!("tma {init_data}"))
            .await
    }

    // --- Profile ---

    /// GET /user/profile - Profile of the authenticated user.
    pub async fn get_profile(&self) -> Result<UserProfile> {
        self.get("/user/profile", &[]).await
    }

    // --- Pools ---

    /// GET /pools/info?user_id= - Pool listing with per-user balances.
    pub async fn get_pools(&self, user_id: i64) -> Result<Vec<PoolInfo>> {
        let resp: PoolsResponse = self
            .get("/pools/info", &[("user_id", &user_id.to_string())])
            .await?;
        Ok(resp.pools)
    }

    /// POST /reinvest/settings - Toggle per-pool auto-reinvest.
    pub async fn set_reinvest(&self, user_id: i64, pool_name: &str, enabled: bool) -> Result<()> {
        let _: serde_json::Value = self
            .post(
                "/reinvest/settings",
                &ReinvestSettings {
                    user_id,
                    pool_name: pool_name.to_string(),
                    enabled,
                },
            )
            .await?;
        Ok(())
    }

    // --- Invest ---

    /// POST /invest - Request an investment into a pool.
    pub async fn invest(&self, req: &InvestRequest) -> Result<InvestOutcome> {
        self.post("/invest", req).await
    }

    /// POST /invest/confirm - Create a payment request for the uncovered remainder.
    pub async fn confirm_invest(&self, req: &InvestConfirmRequest) -> Result<InvestConfirmResponse> {
        self.post("/invest/confirm", req).await
    }

    /// GET /invest/payment_details - Settlement address per currency key.
    pub async fn get_payment_details(&self) -> Result<HashMap<String, String>> {
        self.get("/invest/payment_details", &[]).await
    }

    /// GET /invest/rates - Conversion rates (e.g. `TON_USD`, `USDT_RUB`).
    pub async fn get_rates(&self) -> Result<HashMap<String, f64>> {
        self.get("/invest/rates", &[]).await
    }

    // --- Withdraw ---

    /// POST /withdraw - Create a withdraw request.
    pub async fn withdraw(&self, req: &WithdrawRequest) -> Result<WithdrawReceipt> {
        self.post("/withdraw", req).await
    }

    /// GET /withdraw/fees/{user_id} - Per-pool and balance fee schedule.
    pub async fn get_withdraw_fees(&self, user_id: i64) -> Result<WithdrawFeesData> {
        self.get(&format!("/withdraw/fees/{user_id}"), &[]).await
    }

    // --- Referrals ---

    /// GET /referrals?user_id= - Referral code and per-level earnings.
    pub async fn get_referrals(&self, user_id: i64) -> Result<ReferralStats> {
        self.get("/referrals", &[("user_id", &user_id.to_string())])
            .await
    }

    // --- Language ---

    /// GET /user/language/{tg_id} - Stored language preference.
    pub async fn get_language(&self, tg_id: i64) -> Result<LanguagePreference> {
        self.get(&format!("/user/language/{tg_id}"), &[]).await
    }

    /// POST /user/language - Update the stored language preference.
    pub async fn set_language(&self, tg_id: i64, lang: &str) -> Result<()> {
        let _: serde_json::Value = self
            .post(
                "/user/language",
                &LanguageUpdate {
                    tg_id,
                    lang: lang.to_string(),
                },
            )
            .await?;
        Ok(())
    }
}
