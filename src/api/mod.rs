//! REST API client for E*TRADE.
//!
//! This module builds and sends requests for the accounts, alerts, market
//! and order endpoints. Each operation validates its inputs, assembles a
//! deterministic URL (alphabetical query keys, unset parameters omitted) and
//! returns the raw response body.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use etrade::api::{EtradeClient, ListAlertsParams, AlertStatus};
//! use etrade::api::endpoints::Environment;
//!
//! let client = EtradeClient::builder(Environment::Sandbox).build()?;
//!
//! let accounts = client.list_accounts()?;
//! let unread = client.list_alerts(&ListAlertsParams::new().with_status(AlertStatus::Unread))?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `EtradeResult<T>`. Validation failures are
//! [`EtradeError::InvalidParameter`](crate::error::EtradeError::InvalidParameter)
//! and are raised before anything is sent:
//!
//! ```rust,ignore
//! use etrade::error::EtradeError;
//!
//! match client.lookup_product("") {
//!     Err(EtradeError::InvalidParameter(msg)) => println!("rejected: {}", msg),
//!     Err(EtradeError::Http(e)) => println!("request failed: {}", e),
//!     Err(e) => println!("other error: {}", e),
//!     Ok(body) => println!("{}", String::from_utf8_lossy(&body)),
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod params;
pub mod query;
pub mod types;

// Re-export main types for convenience
#[cfg(feature = "http")]
pub use client::EtradeClientBuilder;
pub use client::{
    EtradeClient, ALERTS_MAX_COUNT, PORTFOLIO_MAX_COUNT, QUOTES_MAX_SYMBOLS,
    QUOTES_OVERRIDE_THRESHOLD,
};
pub use endpoints::{EndpointUrls, Environment};
pub use params::*;
pub use query::QueryParams;
pub use types::*;
