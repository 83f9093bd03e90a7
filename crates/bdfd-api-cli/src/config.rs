//! Configuration loading and resolution.

use bdfd_api::config::{DEFAULT_API_BASE, DEFAULT_STATUS_URL};
use bdfd_api::ClientConfig;

pub const API_URL_ENV: &str = "BDFD_API_URL";
pub const STATUS_URL_ENV: &str = "BDFD_STATUS_URL";

/// Resolve the API base URL: flag, then `BDFD_API_URL`, then the default.
pub fn resolve_api_url(explicit: Option<&str>) -> String {
    resolve(explicit, std::env::var(API_URL_ENV).ok(), DEFAULT_API_BASE)
}

/// Resolve the status page URL: flag, then `BDFD_STATUS_URL`, then the default.
pub fn resolve_status_url(explicit: Option<&str>) -> String {
    resolve(explicit, std::env::var(STATUS_URL_ENV).ok(), DEFAULT_STATUS_URL)
}

fn resolve(explicit: Option<&str>, env: Option<String>, default: &str) -> String {
    if let Some(value) = explicit {
        return value.to_string();
    }

    match env {
        Some(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Build the client configuration from command-line values.
pub fn client_config(
    api_url: Option<&str>,
    status_url: Option<&str>,
    timeout_ms: Option<u64>,
) -> ClientConfig {
    let config = ClientConfig::default()
        .with_api_base(resolve_api_url(api_url))
        .with_status_url(resolve_status_url(status_url));

    match timeout_ms {
        Some(ms) => config.with_timeout_ms(ms),
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wins() {
        let url = resolve(
            Some("http://localhost:9000/api/"),
            Some("http://env/api/".to_string()),
            DEFAULT_API_BASE,
        );
        assert_eq!(url, "http://localhost:9000/api/");
    }

    #[test]
    fn test_env_before_default() {
        let url = resolve(None, Some("http://env/status".to_string()), DEFAULT_STATUS_URL);
        assert_eq!(url, "http://env/status");
    }

    #[test]
    fn test_blank_env_falls_back_to_default() {
        assert_eq!(resolve(None, Some("  ".to_string()), DEFAULT_API_BASE), DEFAULT_API_BASE);
        assert_eq!(resolve(None, None, DEFAULT_API_BASE), DEFAULT_API_BASE);
    }

    #[test]
    fn test_client_config_applies_timeout() {
        let config = client_config(Some("http://localhost:1"), Some("http://localhost:1/s"), Some(250));
        assert_eq!(config.api_base, "http://localhost:1/");
        assert_eq!(config.status_url, "http://localhost:1/s");
        assert_eq!(config.timeout_ms, Some(250));
    }
}
