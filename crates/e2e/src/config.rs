//! Run configuration sourced from the environment
//!
//! Every knob has a default matching a local docker-compose deployment of the
//! platform. Values are read once when the harness initializes and stay
//! immutable for the rest of the run.

use std::time::Duration;

/// Suite configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend base URL
    pub base_url: String,

    /// Backend API base URL (trailing slash expected, paths are appended)
    pub api_url: String,

    /// Retry budget for the readiness poller
    pub ready_retries: usize,

    /// Delay between readiness probes
    pub ready_delay: Duration,

    /// Attempt budget for the API client
    pub api_retries: usize,

    /// Run the browser headless
    pub headless: bool,

    /// Browser viewport
    pub viewport_width: u32,
    pub viewport_height: u32,

    /// Default timeout for browser actions and waits
    pub action_timeout: Duration,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("BASE_URL", "http://localhost:4200"),
            api_url: env_or("API_URL", "http://localhost:8000/api/"),
            ready_retries: env_parse("READY_RETRIES", 30),
            ready_delay: Duration::from_millis(env_parse("READY_DELAY_MS", 2000)),
            api_retries: env_parse("API_RETRIES", 5),
            headless: env_parse("HEADLESS", true),
            viewport_width: env_parse("VIEWPORT_WIDTH", 1280),
            viewport_height: env_parse("VIEWPORT_HEIGHT", 720),
            action_timeout: Duration::from_millis(env_parse("ACTION_TIMEOUT", 10_000)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Only exercised meaningfully when the variables are unset, which is
        // the normal case in CI.
        if std::env::var("BASE_URL").is_err() {
            let config = Config::from_env();
            assert_eq!(config.base_url, "http://localhost:4200");
            assert_eq!(config.api_url, "http://localhost:8000/api/");
            assert_eq!(config.ready_retries, 30);
            assert_eq!(config.api_retries, 5);
            assert_eq!(config.ready_delay, Duration::from_millis(2000));
        }
    }

    #[test]
    fn test_env_parse_falls_back_on_garbage() {
        std::env::set_var("CONDUIT_E2E_TEST_PARSE", "not-a-number");
        let parsed: usize = env_parse("CONDUIT_E2E_TEST_PARSE", 7);
        assert_eq!(parsed, 7);
        std::env::remove_var("CONDUIT_E2E_TEST_PARSE");
    }
}
