// =============================================================================
// config.rs — THE CONFIGURATION DESK
// =============================================================================
//
// Every tunable in the engine lives here. There are not many, because the
// system is deliberately simple: one base origin, one HTTP client, one port.
//
// All values can be overridden via environment variables, because hardcoding
// configuration is how you end up on the front page of Hacker News for the
// wrong reasons.
//
// Default values have been carefully chosen through a rigorous process of
// "that is what the live site needs" and "15 seconds is long enough to wait
// for any government web server."
// =============================================================================

use std::env;
use std::time::Duration;

/// Engine configuration. One struct, loaded once at startup, shared
/// immutably for the life of the process. If you need to change how
/// aggressively we lean on parliament.gh, this is where you come.
#[derive(Debug, Clone)]
pub struct Config {
    // =========================================================================
    // UPSTREAM
    // =========================================================================

    /// Base origin of the Parliament of Ghana website. Every document URL,
    /// image URL and pagination link is resolved against this.
    /// Default: https://www.parliament.gh
    pub base_url: String,

    /// Timeout on every outbound request. The upstream host has been
    /// observed to simply stop answering; without a timeout a single fetch
    /// would stall its caller indefinitely.
    /// Default: 15 seconds.
    pub request_timeout: Duration,

    /// User-Agent sent with every request. The site has no strict
    /// requirements, but we identify ourselves anyway because we were
    /// raised right.
    pub user_agent: String,

    // =========================================================================
    // SERVING
    // =========================================================================

    /// Port for the JSON API server.
    /// Default: 8080.
    pub listen_port: u16,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    /// "Sensible" here meaning "will work out of the box without any env vars
    /// but will also respect your wishes if you set them."
    ///
    /// Every parameter can be overridden via environment variables prefixed
    /// with PARLIAMENT_PULSE_. Because namespacing your env vars is what
    /// separates the professionals from the amateurs.
    pub fn from_env() -> Self {
        // Try to load .env file if it exists. Fail silently if it doesn't,
        // because not everyone has their life together enough to create
        // a .env file.
        let _ = dotenvy::dotenv();

        Config {
            base_url: env_or_default(
                "PARLIAMENT_PULSE_BASE_URL",
                "https://www.parliament.gh",
            ),
            request_timeout: Duration::from_secs(
                env_or_default("PARLIAMENT_PULSE_REQUEST_TIMEOUT_SECS", "15")
                    .parse()
                    .unwrap_or(15),
            ),
            user_agent: env_or_default(
                "PARLIAMENT_PULSE_USER_AGENT",
                "ParliamentPulse/1.0 (civic-data-mirror; educational-project)",
            ),
            listen_port: env_or_default("PARLIAMENT_PULSE_PORT", "8080")
                .parse()
                .unwrap_or(8080),
        }
    }
}

/// Helper function to read an environment variable with a default fallback.
/// Because unwrap_or on env::var is ugly and we have standards.
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_default_falls_back() {
        let value = env_or_default("PARLIAMENT_PULSE_DOES_NOT_EXIST", "fallback");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_defaults_are_sane() {
        let config = Config::from_env();
        assert!(config.base_url.starts_with("http"));
        assert!(config.request_timeout >= Duration::from_secs(1));
    }
}
