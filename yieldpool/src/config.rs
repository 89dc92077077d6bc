/// Configuration for the yieldpool API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the backend API (e.g. `https://app.example.com/api`).
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
