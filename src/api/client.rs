//! E*TRADE REST API client implementation.
//!
//! The [`EtradeClient`] validates parameters, builds deterministic request
//! URLs and dispatches them through an injected [`Transport`]. Response bodies
//! are returned as raw JSON bytes; typed decoding happens in
//! [`domain`](crate::domain).
//!
//! # Example
//!
//! ```rust,ignore
//! use etrade::api::{EtradeClient, GetQuotesParams, QuoteDetail};
//! use etrade::api::endpoints::Environment;
//!
//! let client = EtradeClient::builder(Environment::Sandbox)
//!     .timeout_secs(10)
//!     .build()?;
//!
//! let quotes = client.get_quotes(&["GOOG", "MSFT"], &GetQuotesParams::new().with_detail(QuoteDetail::All))?;
//! println!("{}", String::from_utf8_lossy(&quotes));
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::api::endpoints::{EndpointUrls, Environment};
use crate::api::params::*;
use crate::api::query::QueryParams;
use crate::api::types::{CancelOrderRequest, InstitutionType, OptionExpiryType};
use crate::error::{EtradeError, EtradeResult, HttpError};
use crate::http::{HttpRequest, Method, Transport};

/// Maximum number of symbols per quote request.
pub const QUOTES_MAX_SYMBOLS: usize = 50;

/// Above this many symbols the quote request must carry `overrideSymbolCount`.
pub const QUOTES_OVERRIDE_THRESHOLD: usize = 25;

/// Maximum `count` for portfolio requests.
pub const PORTFOLIO_MAX_COUNT: u32 = 50;

/// Maximum `count` for alert list requests.
pub const ALERTS_MAX_COUNT: u32 = 300;

/// E*TRADE REST API client.
///
/// Holds no mutable state: every call is one validated request and one
/// response, so a client can be shared across threads if its transport can.
#[derive(Clone)]
pub struct EtradeClient {
    urls: EndpointUrls,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for EtradeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EtradeClient")
            .field("environment", &self.urls.environment())
            .finish()
    }
}

impl EtradeClient {
    /// Create a client over an existing transport.
    pub fn new(urls: EndpointUrls, transport: Arc<dyn Transport>) -> Self {
        Self { urls, transport }
    }

    /// Create a client for `environment` over the given transport.
    pub fn with_transport(environment: Environment, transport: impl Transport + 'static) -> Self {
        Self::new(EndpointUrls::new(environment), Arc::new(transport))
    }

    /// Create a builder for a client backed by the reqwest transport.
    #[cfg(feature = "http")]
    pub fn builder(environment: Environment) -> EtradeClientBuilder {
        EtradeClientBuilder::new(environment)
    }

    /// Get the endpoint URLs.
    pub fn urls(&self) -> &EndpointUrls {
        &self.urls
    }

    /// Get the target environment.
    pub fn environment(&self) -> Environment {
        self.urls.environment()
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn get(&self, url: String) -> EtradeResult<Vec<u8>> {
        self.execute(HttpRequest::new(Method::Get, url))
    }

    fn delete(&self, url: String) -> EtradeResult<Vec<u8>> {
        self.execute(HttpRequest::new(Method::Delete, url))
    }

    fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: String,
        body: &B,
    ) -> EtradeResult<Vec<u8>> {
        let body = serde_json::to_vec(body)?;
        self.execute(HttpRequest::new(method, url).with_body(body))
    }

    /// Send one request and map a non-2xx status to an error.
    fn execute(&self, request: HttpRequest) -> EtradeResult<Vec<u8>> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let response = self.transport.send(request)?;
        if response.is_success() {
            return Ok(response.body);
        }

        let body = String::from_utf8_lossy(&response.body).into_owned();
        tracing::warn!(status = response.status, "Request failed");
        Err(HttpError::from_status(response.status, body).into())
    }

    // =========================================================================
    // Validation helpers
    // =========================================================================

    fn require(value: &str, field_name: &str) -> EtradeResult<()> {
        if value.is_empty() {
            return Err(EtradeError::InvalidParameter(format!("{} cannot be empty", field_name)));
        }
        Ok(())
    }

    fn require_list<S: AsRef<str>>(values: &[S], field_name: &str) -> EtradeResult<()> {
        if values.is_empty() {
            return Err(EtradeError::InvalidParameter(format!(
                "at least one {} is required",
                field_name
            )));
        }
        if values.iter().any(|v| v.as_ref().is_empty()) {
            return Err(EtradeError::InvalidParameter(format!("{} cannot be empty", field_name)));
        }
        Ok(())
    }

    fn validate_count(count: Option<u32>, max: u32) -> EtradeResult<()> {
        match count {
            Some(c) if c > max => Err(EtradeError::InvalidParameter(format!(
                "count must be at most {}, got {}",
                max, c
            ))),
            _ => Ok(()),
        }
    }

    /// Percent-encode each element, then join with a literal comma.
    fn encode_path_list<S: AsRef<str>>(values: &[S]) -> String {
        values
            .iter()
            .map(|v| urlencoding::encode(v.as_ref()).into_owned())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn encode_path(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    // =========================================================================
    // Account endpoints
    // =========================================================================

    /// List the accounts of the authenticated user.
    pub fn list_accounts(&self) -> EtradeResult<Vec<u8>> {
        self.get(self.urls.list_accounts_url())
    }

    /// Get account balances; always sends instType=BROKERAGE and realTimeNAV.
    pub fn get_account_balances(
        &self,
        account_id_key: &str,
        real_time_nav: bool,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(account_id_key, "account_id_key")?;

        let mut query = QueryParams::new();
        query
            .insert("instType", InstitutionType::Brokerage)
            .insert("realTimeNAV", real_time_nav);

        let url = self.urls.account_balances_url(&Self::encode_path(account_id_key));
        self.get(query.apply(url)?)
    }

    /// List account transactions.
    pub fn list_transactions(
        &self,
        account_id_key: &str,
        params: &ListTransactionsParams,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(account_id_key, "account_id_key")?;

        let mut query = QueryParams::new();
        query
            .insert_date("startDate", params.start_date)
            .insert_date("endDate", params.end_date)
            .insert_opt("sortOrder", params.sort_order)
            .insert_str("marker", params.marker.as_deref())
            .insert_opt("count", params.count);

        let url = self.urls.list_transactions_url(&Self::encode_path(account_id_key));
        self.get(query.apply(url)?)
    }

    /// Get details for one transaction.
    pub fn list_transaction_details(
        &self,
        account_id_key: &str,
        transaction_id: &str,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(account_id_key, "account_id_key")?;
        Self::require(transaction_id, "transaction_id")?;

        self.get(self.urls.transaction_details_url(
            &Self::encode_path(account_id_key),
            &Self::encode_path(transaction_id),
        ))
    }

    /// View the portfolio of an account.
    ///
    /// Fails without sending if `count` exceeds [`PORTFOLIO_MAX_COUNT`].
    pub fn view_portfolio(
        &self,
        account_id_key: &str,
        params: &ViewPortfolioParams,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(account_id_key, "account_id_key")?;
        Self::validate_count(params.count, PORTFOLIO_MAX_COUNT)?;

        let mut query = QueryParams::new();
        query
            .insert_opt("count", params.count)
            .insert_opt("sortBy", params.sort_by)
            .insert_opt("sortOrder", params.sort_order)
            .insert_opt("pageNumber", params.page_number)
            .insert_opt("marketSession", params.market_session)
            .insert("totalsRequired", params.totals_required)
            .insert("lotsRequired", params.lots_required)
            .insert_opt("view", params.view);

        let url = self.urls.view_portfolio_url(&Self::encode_path(account_id_key));
        self.get(query.apply(url)?)
    }

    // =========================================================================
    // Alert endpoints
    // =========================================================================

    /// List alerts.
    ///
    /// Fails without sending if `count` exceeds [`ALERTS_MAX_COUNT`].
    pub fn list_alerts(&self, params: &ListAlertsParams) -> EtradeResult<Vec<u8>> {
        Self::validate_count(params.count, ALERTS_MAX_COUNT)?;

        let mut query = QueryParams::new();
        query
            .insert_opt("count", params.count)
            .insert_opt("category", params.category)
            .insert_opt("status", params.status)
            .insert_opt("direction", params.direction)
            .insert_str("search", params.search.as_deref());

        self.get(query.apply(self.urls.list_alerts_url())?)
    }

    /// Get details for one alert; always sends htmlTags.
    pub fn list_alert_details(&self, alert_id: &str, html_tags: bool) -> EtradeResult<Vec<u8>> {
        Self::require(alert_id, "alert_id")?;

        let mut query = QueryParams::new();
        query.insert("htmlTags", html_tags);

        let url = self.urls.alert_details_url(&Self::encode_path(alert_id));
        self.get(query.apply(url)?)
    }

    /// Delete one or more alerts in a single request.
    pub fn delete_alerts<S: AsRef<str>>(&self, alert_ids: &[S]) -> EtradeResult<Vec<u8>> {
        Self::require_list(alert_ids, "alert_id")?;
        self.delete(self.urls.delete_alerts_url(&Self::encode_path_list(alert_ids)))
    }

    // =========================================================================
    // Market endpoints
    // =========================================================================

    /// Get quotes for 1 to [`QUOTES_MAX_SYMBOLS`] symbols.
    ///
    /// Requests for more than [`QUOTES_OVERRIDE_THRESHOLD`] symbols carry
    /// `overrideSymbolCount=true`, which the API requires for those sizes.
    pub fn get_quotes<S: AsRef<str>>(
        &self,
        symbols: &[S],
        params: &GetQuotesParams,
    ) -> EtradeResult<Vec<u8>> {
        Self::require_list(symbols, "symbol")?;
        if symbols.len() > QUOTES_MAX_SYMBOLS {
            return Err(EtradeError::InvalidParameter(format!(
                "at most {} symbols may be requested, got {}",
                QUOTES_MAX_SYMBOLS,
                symbols.len()
            )));
        }

        let mut query = QueryParams::new();
        query
            .insert_opt("detailFlag", params.detail_flag)
            .insert("requireEarningsDate", params.require_earnings_date)
            .insert("skipMiniOptionsCheck", params.skip_mini_options_check);
        if symbols.len() > QUOTES_OVERRIDE_THRESHOLD {
            query.insert("overrideSymbolCount", true);
        }

        let url = self.urls.quotes_url(&Self::encode_path_list(symbols));
        self.get(query.apply(url)?)
    }

    /// Look up products by company name or symbol.
    pub fn lookup_product(&self, search: &str) -> EtradeResult<Vec<u8>> {
        Self::require(search, "search")?;
        self.get(self.urls.lookup_product_url(&Self::encode_path(search)))
    }

    /// Get an option chain; always sends includeWeekly and skipAdjusted.
    pub fn get_option_chains(
        &self,
        symbol: &str,
        params: &OptionChainsParams,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(symbol, "symbol")?;

        let mut query = QueryParams::new();
        query
            .insert("symbol", symbol)
            .insert_opt("expiryYear", params.expiry_year)
            .insert_opt("expiryMonth", params.expiry_month)
            .insert_opt("expiryDay", params.expiry_day)
            .insert_opt("strikePriceNear", params.strike_price_near)
            .insert_opt("noOfStrikes", params.no_of_strikes)
            .insert("includeWeekly", params.include_weekly)
            .insert("skipAdjusted", params.skip_adjusted)
            .insert_opt("optionCategory", params.option_category)
            .insert_opt("chainType", params.chain_type)
            .insert_opt("priceType", params.price_type);

        self.get(query.apply(self.urls.option_chains_url())?)
    }

    /// Get option expiration dates for a symbol.
    pub fn get_option_expire_dates(
        &self,
        symbol: &str,
        expiry_type: Option<OptionExpiryType>,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(symbol, "symbol")?;

        let mut query = QueryParams::new();
        query
            .insert("symbol", symbol)
            .insert_opt("expiryType", expiry_type);

        self.get(query.apply(self.urls.option_expire_dates_url())?)
    }

    // =========================================================================
    // Order endpoints
    // =========================================================================

    /// List orders for an account.
    pub fn list_orders(
        &self,
        account_id_key: &str,
        params: &ListOrdersParams,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(account_id_key, "account_id_key")?;

        let mut query = QueryParams::new();
        query
            .insert_str("marker", params.marker.as_deref())
            .insert_opt("count", params.count)
            .insert_opt("status", params.status)
            .insert_date("fromDate", params.from_date)
            .insert_date("toDate", params.to_date)
            .insert_list("symbol", params.symbols.as_slice())
            .insert_opt("securityType", params.security_type)
            .insert_opt("transactionType", params.transaction_type)
            .insert_opt("marketSession", params.market_session);

        let url = self.urls.list_orders_url(&Self::encode_path(account_id_key));
        self.get(query.apply(url)?)
    }

    /// Preview an order. `request` is serialized as the JSON body
    /// (`{"PreviewOrderRequest": {...}}`).
    pub fn preview_order<B: Serialize + ?Sized>(
        &self,
        account_id_key: &str,
        request: &B,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(account_id_key, "account_id_key")?;
        let url = self.urls.preview_order_url(&Self::encode_path(account_id_key));
        self.send_json(Method::Post, url, request)
    }

    /// Place a previously previewed order (`{"PlaceOrderRequest": {...}}`).
    pub fn place_order<B: Serialize + ?Sized>(
        &self,
        account_id_key: &str,
        request: &B,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(account_id_key, "account_id_key")?;
        let url = self.urls.place_order_url(&Self::encode_path(account_id_key));
        self.send_json(Method::Post, url, request)
    }

    /// Preview a change to an open order.
    pub fn change_preview_order<B: Serialize + ?Sized>(
        &self,
        account_id_key: &str,
        order_id: &str,
        request: &B,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(account_id_key, "account_id_key")?;
        Self::require(order_id, "order_id")?;
        let url = self.urls.change_preview_order_url(
            &Self::encode_path(account_id_key),
            &Self::encode_path(order_id),
        );
        self.send_json(Method::Post, url, request)
    }

    /// Place a previously previewed order change.
    pub fn place_changed_order<B: Serialize + ?Sized>(
        &self,
        account_id_key: &str,
        order_id: &str,
        request: &B,
    ) -> EtradeResult<Vec<u8>> {
        Self::require(account_id_key, "account_id_key")?;
        Self::require(order_id, "order_id")?;
        let url = self.urls.place_changed_order_url(
            &Self::encode_path(account_id_key),
            &Self::encode_path(order_id),
        );
        self.send_json(Method::Post, url, request)
    }

    /// Cancel an open order. `order_id` must be a positive integer.
    pub fn cancel_order(&self, account_id_key: &str, order_id: &str) -> EtradeResult<Vec<u8>> {
        Self::require(account_id_key, "account_id_key")?;
        Self::require(order_id, "order_id")?;
        let order_id = match order_id.parse::<u64>() {
            Ok(id) if id > 0 => id,
            _ => {
                return Err(EtradeError::InvalidParameter(format!(
                    "order_id must be a positive integer, got '{}'",
                    order_id
                )))
            }
        };

        let url = self.urls.cancel_order_url(&Self::encode_path(account_id_key));
        self.send_json(Method::Put, url, &CancelOrderRequest::new(order_id))
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Builder for an [`EtradeClient`] over [`ReqwestTransport`](crate::http::ReqwestTransport).
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct EtradeClientBuilder {
    environment: Environment,
    transport: crate::http::ReqwestTransportBuilder,
}

#[cfg(feature = "http")]
impl EtradeClientBuilder {
    /// Create a builder for the given environment.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            transport: crate::http::ReqwestTransportBuilder::new(),
        }
    }

    /// Set request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.transport = self.transport.timeout(timeout);
        self
    }

    /// Set request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.transport = self.transport.timeout_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.transport = self.transport.header(name, value);
        self
    }

    /// Attach a request signer.
    pub fn signer(mut self, signer: impl crate::http::RequestSigner + 'static) -> Self {
        self.transport = self.transport.signer(signer);
        self
    }

    /// Build the client.
    pub fn build(self) -> EtradeResult<EtradeClient> {
        let transport = self.transport.build()?;
        Ok(EtradeClient::with_transport(self.environment, transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FakeTransport;

    fn client_with(fake: &Arc<FakeTransport>) -> EtradeClient {
        EtradeClient::new(EndpointUrls::new(Environment::Production), fake.clone())
    }

    #[test]
    fn test_non_success_status_maps_to_http_error() {
        let fake = Arc::new(FakeTransport::status(401, "token expired"));
        let err = client_with(&fake).list_accounts().unwrap_err();
        assert!(matches!(
            err,
            EtradeError::Http(HttpError::Unauthorized(ref body)) if body == "token expired"
        ));
    }

    #[test]
    fn test_transport_error_propagates() {
        let fake = Arc::new(FakeTransport::new(|_| {
            Err(HttpError::Connection("refused".to_string()))
        }));
        let err = client_with(&fake).list_accounts().unwrap_err();
        assert_eq!(err.to_string(), "HTTP error: Connection failed: refused");
    }

    #[test]
    fn test_validation_precedes_network() {
        let fake = Arc::new(FakeTransport::new(|_| {
            Err(HttpError::Connection("unreachable".to_string()))
        }));
        let err = client_with(&fake).lookup_product("").unwrap_err();
        assert!(matches!(err, EtradeError::InvalidParameter(_)));
        assert_eq!(fake.request_count(), 0);
    }

    #[test]
    fn test_path_elements_encoded_but_not_separator() {
        assert_eq!(EtradeClient::encode_path_list(&["BRK B", "GOOG"]), "BRK%20B,GOOG");
        assert_eq!(EtradeClient::encode_path("a/b"), "a%2Fb");
    }

    #[test]
    fn test_cancel_order_rejects_non_numeric_id() {
        let fake = Arc::new(FakeTransport::ok("{}"));
        let client = client_with(&fake);
        assert!(client.cancel_order("1234", "abc").is_err());
        assert!(client.cancel_order("1234", "0").is_err());
        assert_eq!(fake.request_count(), 0);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_client_builder() {
        let client = EtradeClient::builder(Environment::Sandbox)
            .timeout_secs(60)
            .header("X-Custom", "test")
            .build()
            .unwrap();
        assert_eq!(client.environment(), Environment::Sandbox);
        assert_eq!(client.urls().base_url(), "https://apisb.etrade.com");
    }
}
