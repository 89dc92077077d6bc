use serde::{Deserialize, Serialize};

/// Response to the `tma` login exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}
