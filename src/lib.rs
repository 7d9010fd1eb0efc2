//! # E*TRADE client
//!
//! A synchronous client core for the E*TRADE REST API.
//!
//! ## Modules
//!
//! - [`api`]: endpoint URLs, parameter encoding and the [`EtradeClient`](api::EtradeClient)
//! - [`http`]: the [`Transport`](http::Transport) seam, a reqwest transport and a fake
//! - [`domain`]: `Customer`, `Account` and `Alert` wrappers over decoded records
//! - [`config`]: environment-driven configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use etrade::prelude::*;
//!
//! let client = Config::from_env()?.build_client()?;
//! let customer = Customer::new(&client, "me");
//!
//! for account in customer.get_all_accounts()? {
//!     let balances = account.balances(true)?;
//!     println!("{}: {}", account.id(), String::from_utf8_lossy(&balances));
//! }
//! ```
//!
//! ## Testing without a network
//!
//! ```rust,ignore
//! use etrade::prelude::*;
//!
//! let client = EtradeClient::with_transport(Environment::Sandbox, FakeTransport::ok("{}"));
//! client.lookup_product("GOOG")?;
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Network URL constants (API hosts and the authorize page).
pub mod network;

/// Error types shared by every module.
pub mod error;

/// Transport abstraction and implementations.
pub mod http;

/// REST API client, parameter encoding and wire types.
pub mod api;

/// Domain wrappers with lookup-by-id.
pub mod domain;

/// Environment-driven configuration.
pub mod config;

/// Command-line front end.
pub mod cli;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use etrade::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        EndpointUrls, Environment, EtradeClient, QueryParams,
        // Parameter sets
        GetQuotesParams, ListAlertsParams, ListOrdersParams, ListTransactionsParams,
        OptionChainsParams, ViewPortfolioParams,
        // Wire enums
        AlertCategory, AlertStatus, MarketSession, OptionCategory, OptionChainType,
        OptionExpiryType, OptionPriceType, OrderSecurityType, OrderStatus, OrderTransactionType,
        PortfolioSortBy, PortfolioView, QuoteDetail, SortOrder,
        // Records
        AccountInfo, AlertInfo, Position,
    };

    #[cfg(feature = "http")]
    pub use crate::api::EtradeClientBuilder;

    pub use crate::config::Config;
    pub use crate::domain::{Account, Alert, Customer};
    pub use crate::error::{EtradeError, EtradeResult, HttpError};
    pub use crate::http::{FakeTransport, HttpRequest, HttpResponse, Method, RequestSigner, Transport};

    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
}
