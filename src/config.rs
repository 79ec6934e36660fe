// ============================================================================
// CONFIG - Compile-time configuration
// ============================================================================
// Values come from `option_env!` (build.rs forwards `.env` entries) and fall
// back to the local development backend.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Local development backend used when `LEARNIFY_API_URL` is unset
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// How long a toast stays on screen
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub socket_url: String,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            socket_url: socket_url_from_api(DEFAULT_API_URL),
            enable_logging: true,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Loads the configuration baked in at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("LEARNIFY_API_URL"),
            option_env!("LEARNIFY_SOCKET_URL"),
            option_env!("LEARNIFY_ENABLE_LOGGING"),
            option_env!("LEARNIFY_TOAST_DURATION_MS"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        socket_url: Option<&str>,
        enable_logging: Option<&str>,
        toast_duration_ms: Option<&str>,
    ) -> Self {
        let api_url = api_url
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let socket_url = socket_url
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| socket_url_from_api(&api_url));

        Self {
            api_url,
            socket_url,
            enable_logging: enable_logging.unwrap_or("true").parse().unwrap_or(true),
            toast_duration_ms: toast_duration_ms
                .unwrap_or("3000")
                .parse()
                .unwrap_or(DEFAULT_TOAST_DURATION_MS),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// The realtime server lives on the API host, without the `/api` path
fn socket_url_from_api(api_url: &str) -> String {
    let (scheme, rest) = match api_url.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, api_url),
    };
    let host = rest.split('/').next().unwrap_or(rest);
    match scheme {
        Some(scheme) => format!("{}://{}", scheme, host),
        None => host.to_string(),
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_backend() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(config.socket_url, "http://localhost:5000");
        assert!(config.enable_logging);
        assert_eq!(config.toast_duration_ms, 3000);
    }

    #[test]
    fn socket_url_follows_api_host() {
        let config = AppConfig::from_values(Some("https://api.learnify.app/v1/"), None, None, None);
        assert_eq!(config.api_url, "https://api.learnify.app/v1");
        assert_eq!(config.socket_url, "https://api.learnify.app");
    }

    #[test]
    fn explicit_socket_url_wins() {
        let config = AppConfig::from_values(
            Some("https://api.learnify.app/api"),
            Some("https://rt.learnify.app/"),
            Some("false"),
            Some("nope"),
        );
        assert_eq!(config.socket_url, "https://rt.learnify.app");
        assert!(!config.is_logging_enabled());
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
    }
}
