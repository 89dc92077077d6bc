//! Session state container for an authenticated dashboard user.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{ApiError, Result};
use crate::rest::ApiClient;
use crate::types::{PoolInfo, UserProfile, WithdrawFeesData};

/// Owns the bearer-token lifecycle and the request-scoped caches the
/// workflow controllers read from.
///
/// Created at session start and dropped at session end; every cache is
/// replaced wholesale on refetch, the backend stays the sole source of
/// truth. Controllers treat a `None` cache as "not loaded yet" and keep
/// the corresponding feature unavailable instead of erroring.
pub struct UserSession {
    pub api: Arc<ApiClient>,
    pub profile: Option<UserProfile>,
    pub pools: Vec<PoolInfo>,
    pub fees: Option<WithdrawFeesData>,
}

impl UserSession {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            profile: None,
            pools: Vec::new(),
            fees: None,
        }
    }

    /// Exchange Telegram init data for a bearer token and prime the profile.
    pub async fn login(&mut self, init_data: &str) -> Result<()> {
        let login = self.api.login(init_data).await?;
        self.api.set_token(Some(login.access_token));
        self.refresh_profile().await?;
        info!(user_id = self.profile.as_ref().map(|p| p.user_id), "session established");
        Ok(())
    }

    /// Drop the token and all cached state.
    pub fn logout(&mut self) {
        self.api.set_token(None);
        self.profile = None;
        self.pools.clear();
        self.fees = None;
    }

    /// Telegram user id of the logged-in user.
    pub fn user_id(&self) -> Result<i64> {
        self.profile
            .as_ref()
            .map(|p| p.user_id)
            .ok_or(ApiError::NotAuthenticated)
    }

    /// Withdrawable profit balance from the cached profile.
    pub fn profit_usd(&self) -> f64 {
        self.profile.as_ref().map(|p| p.profit_usd).unwrap_or(0.0)
    }

    /// Refetch the profile, replacing the cached copy.
    pub async fn refresh_profile(&mut self) -> Result<()> {
        self.profile = Some(self.api.get_profile().await?);
        debug!("profile refreshed");
        Ok(())
    }

    /// Refetch the pool listing.
    pub async fn refresh_pools(&mut self) -> Result<()> {
        let user_id = self.user_id()?;
        self.pools = self.api.get_pools(user_id).await?;
        debug!(pools = self.pools.len(), "pool listing refreshed");
        Ok(())
    }

    /// Refetch the withdraw fee schedule.
    pub async fn refresh_fees(&mut self) -> Result<()> {
        let user_id = self.user_id()?;
        self.fees = Some(self.api.get_withdraw_fees(user_id).await?);
        debug!("withdraw fee schedule refreshed");
        Ok(())
    }

    /// Find a pool in the cached listing by name.
    pub fn find_pool(&self, name: &str) -> Result<&PoolInfo> {
        self.pools
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ApiError::PoolNotFound(name.to_string()))
    }
}
