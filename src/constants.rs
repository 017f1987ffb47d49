//! Application-wide constants
//!
//! Hosts, identification header and default values live here so that every
//! endpoint and the CLI agree on them.

/// Stable versioned API host
pub const API_BASE_URL: &str = "https://api.bgm.tv";

/// Secondary host for endpoints not yet available on the stable host
pub const NEXT_BASE_URL: &str = "https://next.bgm.tv";

/// Client identification sent with every request: `<name>/<version> (<repo-url>)`
pub const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_REPOSITORY"),
    ")"
);

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Pagination defaults
pub mod pagination {
    /// Page size for search and comments
    pub const DEFAULT_LIMIT: u32 = 20;

    /// Page size for the popular and top rated anime listings
    pub const LISTING_LIMIT: u32 = 24;

    pub const DEFAULT_OFFSET: u32 = 0;
}

/// Search filter values
pub mod search {
    /// Excludes unranked entries from score-sorted listings
    pub const RANKED_ONLY: &str = ">=1";
}

/// Environment variable names read by the CLI config
pub mod env_vars {
    /// Overrides the log file path
    pub const LOG_FILE: &str = "BANGUMI_LOG_FILE";

    /// Overrides the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "BANGUMI_HTTP_TIMEOUT";
}

/// Name of the log file written by the CLI
pub const LOG_FILE_NAME: &str = "bangumi_client.log";
