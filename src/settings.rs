//! Application settings
//!
//! Resolves the backend endpoint from the environment. Nothing is
//! persisted: the app holds no local state between runs.

/// Environment variable overriding the quotes API base URL
pub const API_URL_ENV: &str = "QUOTEDECK_API_URL";

/// Local-development default for the quotes API
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Base URL of the quotes API, without a trailing slash
    pub api_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl AppSettings {
    /// Normalize settings values
    ///
    /// Trims whitespace and trailing slashes from the API URL and falls
    /// back to the default when the configured value is blank.
    pub fn validate(&mut self) {
        let normalized = self.api_url.trim().trim_end_matches('/');
        if normalized.is_empty() {
            self.api_url = DEFAULT_API_URL.to_string();
        } else if normalized != self.api_url {
            self.api_url = normalized.to_string();
        }
    }
}

/// Load settings from the environment
///
/// Returns defaults when `QUOTEDECK_API_URL` is unset.
pub fn load_settings() -> AppSettings {
    from_env_value(std::env::var(API_URL_ENV).ok())
}

fn from_env_value(value: Option<String>) -> AppSettings {
    let mut settings = match value {
        Some(api_url) => AppSettings { api_url },
        None => {
            tracing::debug!("{} not set, using default endpoint", API_URL_ENV);
            AppSettings::default()
        }
    };
    settings.validate();
    settings
}
