//! Backend endpoint configuration.

use std::env;

/// The Master API Configuration
pub struct ApiConfig {
    /// Environment variable consulted when no CLI override is given.
    pub env_var: &'static str,
    /// Where the backend lives when nothing else says otherwise.
    pub default_base_url: &'static str,
    /// Per-request timeout.
    pub timeout_ms: u64,
}

pub const API: ApiConfig = ApiConfig {
    env_var: "ZENTRADER_BACKEND_URL",
    default_base_url: "http://localhost:8097",
    timeout_ms: 5000,
};

impl ApiConfig {
    /// Resolution order: CLI flag, then the environment, then the default.
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        if let Some(url) = cli_override {
            return url.to_string();
        }
        match env::var(self.env_var) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.default_base_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_override_beats_everything() {
        assert_eq!(
            API.resolve_base_url(Some("http://10.0.0.5:9000")),
            "http://10.0.0.5:9000"
        );
    }

    #[test]
    fn falls_back_to_default_without_override() {
        // The env var is absent in the test environment.
        if env::var(API.env_var).is_err() {
            assert_eq!(API.resolve_base_url(None), API.default_base_url);
        }
    }
}
