//! Where the placement API lives and how requests authenticate.
//!
//! The base URL is baked in at build time from `PLACEMENT_API_BASE_URL`
//! (e.g. `PLACEMENT_API_BASE_URL=https://placement.example.edu/api trunk build`)
//! and defaults to the same-origin `/api` prefix. Sessions ride on cookies set
//! by the login flow, so requests include credentials.

pub const DEFAULT_BASE_URL: &str = "/api";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub include_credentials: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = option_env!("PLACEMENT_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            include_credentials: true,
        }
    }

    /// Absolute URL for an API path such as `applications`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
