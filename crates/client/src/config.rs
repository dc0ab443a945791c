/// Default backend base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Backend connection settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base HTTP URL of the backend, without a trailing slash.
    pub api_url: String,
}

impl ApiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                 |
    /// |--------------------|-------------------------|
    /// | `TASKFORM_API_URL` | `http://localhost:5000` |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("TASKFORM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}
