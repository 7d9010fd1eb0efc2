//! Network URL constants for the E*TRADE API.

/// Production REST API host.
pub const PRODUCTION_API_URL: &str = "https://api.etrade.com";

/// Sandbox REST API host.
pub const SANDBOX_API_URL: &str = "https://apisb.etrade.com";

/// Page where the user authorizes the application (same for both environments).
pub const AUTHORIZE_URL: &str = "https://us.etrade.com/e/t/etws/authorize";
