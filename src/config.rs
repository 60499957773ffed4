//! Env-driven runtime configuration.
//!
//! The API base URL is an explicit value handed to the row source at
//! construction; there is no module-level endpoint constant anywhere.

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the match service, no trailing slash required.
    pub api_base: String,
    pub request_timeout_secs: u64,
    /// Which row collection the binary renders: "sellers" or "buyers".
    pub page: String,
    /// Free-text search query; empty matches everything.
    pub query: String,
    /// Buyer category filter: "all", "client", or "pe_firm".
    pub type_filter: String,
    /// Sort key name in the page's wire vocabulary; unknown names leave
    /// the source order unchanged.
    pub sort_key: String,
    pub sort_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("MATCHDASH_API_BASE")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            request_timeout_secs: std::env::var("MATCHDASH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            page: std::env::var("PAGE").unwrap_or_else(|_| "sellers".to_string()),
            query: std::env::var("QUERY").unwrap_or_default(),
            type_filter: std::env::var("TYPE_FILTER").unwrap_or_else(|_| "all".to_string()),
            sort_key: std::env::var("SORT_KEY").unwrap_or_else(|_| "total_a".to_string()),
            sort_dir: std::env::var("SORT_DIR").unwrap_or_else(|_| "desc".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        // Only assert fields no test environment is expected to override.
        let cfg = Config::from_env();
        assert!(!cfg.api_base.is_empty());
        assert!(cfg.request_timeout_secs > 0);
    }
}
