use serde::{Deserialize, Serialize};

/// Stored language preference returned by `GET /user/language/{tg_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagePreference {
    pub lang: String,
}

/// Body of `POST /user/language`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageUpdate {
    pub tg_id: i64,
    pub lang: String,
}
