//! Locale resolution for the root route.
//!
//! The dashboard is served under a language prefix (`/ru`, `/en`, `/uk`).
//! The root route derives the language from the Telegram launch parameters:
//! the signed init data embeds the user id, and the backend stores that
//! user's language preference. Any failure along the way falls back to the
//! default locale.

use std::str::FromStr;

use serde::Deserialize;
use tracing::warn;

use crate::rest::ApiClient;

/// Languages the dashboard is localized for.
pub const LOCALES: [Locale; 3] = [Locale::Ru, Locale::En, Locale::Uk];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
    Uk,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Ru => write!(f, "ru"),
            Locale::En => write!(f, "en"),
            Locale::Uk => write!(f, "uk"),
        }
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            "uk" => Ok(Locale::Uk),
            _ => Err(()),
        }
    }
}

impl Locale {
    /// Language-prefixed route the root redirects to.
    pub fn redirect_path(self) -> String {
        format!("/{self}")
    }
}

#[derive(Deserialize)]
struct InitDataUser {
    id: i64,
}

/// Extract the Telegram user id from raw init data.
///
/// Init data is a form-urlencoded query string whose `user` parameter holds
/// a JSON blob with the numeric `id`.
pub fn user_id_from_init_data(init_data: &str) -> Option<i64> {
    let user_json = url::form_urlencoded::parse(init_data.as_bytes())
        .find(|(k, _)| k == "user")
        .map(|(_, v)| v.into_owned())?;
    serde_json::from_str::<InitDataUser>(&user_json)
        .ok()
        .map(|u| u.id)
}

/// Resolve the locale for a launch: backend language lookup by the id
/// embedded in the init data, defaulting to [`Locale::Ru`] when the init
/// data is absent, malformed, or the lookup fails.
pub async fn resolve(api: &ApiClient, init_data: Option<&str>) -> Locale {
    let Some(raw) = init_data else {
        return Locale::default();
    };
    let Some(tg_id) = user_id_from_init_data(raw) else {
        warn!("launch parameters missing user id, using default locale");
        return Locale::default();
    };
    match api.get_language(tg_id).await {
        Ok(pref) => pref.lang.parse().unwrap_or_default(),
        Err(e) => {
            warn!(tg_id, error = %e, "language lookup failed, using default locale");
            Locale::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_init_data() {
        let init = "query_id=AAF1&user=%7B%22id%22%3A42%2C%22first_name%22%3A%22Ann%22%7D&auth_date=1700000000&hash=abc";
        assert_eq!(user_id_from_init_data(init), Some(42));
    }

    #[test]
    fn test_user_id_missing_or_malformed() {
        assert_eq!(user_id_from_init_data("auth_date=1&hash=abc"), None);
        assert_eq!(user_id_from_init_data("user=%7Bnot-json"), None);
    }

    #[test]
    fn test_locale_parse_and_redirect() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::En.redirect_path(), "/en");
        assert_eq!(Locale::default().redirect_path(), "/ru");
    }
}
