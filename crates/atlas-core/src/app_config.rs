/// Deployment environment, from `ATLAS_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime configuration for the storefront client and CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Root of the storefront REST API, without a trailing slash
    /// (e.g. `"https://api.atlasmode.shop/v1"`).
    pub api_base_url: String,
    /// Value sent as the `version` query parameter on every request.
    pub api_version: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
