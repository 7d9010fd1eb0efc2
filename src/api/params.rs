//! Optional-parameter sets for the list and query endpoints.
//!
//! `None` means "not supplied": the key is left out of the query string.
//! Boolean flags that the API always expects are plain `bool`s.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::api::types::*;

/// Parameters for GET /v1/accounts/{key}/transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTransactionsParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_order: Option<SortOrder>,
    /// Pagination cursor from a previous response
    pub marker: Option<String>,
    pub count: Option<u32>,
}

impl ListTransactionsParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set date range (startDate, endDate).
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Set sort order.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Set pagination marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Set number of transactions to return.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

/// Parameters for GET /v1/accounts/{key}/portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewPortfolioParams {
    pub count: Option<u32>,
    pub sort_by: Option<PortfolioSortBy>,
    pub sort_order: Option<SortOrder>,
    pub page_number: Option<u32>,
    pub market_session: Option<MarketSession>,
    pub totals_required: bool,
    pub lots_required: bool,
    pub view: Option<PortfolioView>,
}

impl ViewPortfolioParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of positions per page.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set sort column and direction.
    pub fn with_sort(mut self, sort_by: PortfolioSortBy, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by);
        self.sort_order = Some(sort_order);
        self
    }

    /// Set page number.
    pub fn with_page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Set market session used for pricing.
    pub fn with_market_session(mut self, market_session: MarketSession) -> Self {
        self.market_session = Some(market_session);
        self
    }

    /// Request portfolio totals (totalsRequired).
    pub fn with_totals(mut self) -> Self {
        self.totals_required = true;
        self
    }

    /// Request position lots (lotsRequired).
    pub fn with_lots(mut self) -> Self {
        self.lots_required = true;
        self
    }

    /// Set portfolio view.
    pub fn with_view(mut self, view: PortfolioView) -> Self {
        self.view = Some(view);
        self
    }
}

/// Parameters for GET /v1/user/alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAlertsParams {
    pub count: Option<u32>,
    pub category: Option<AlertCategory>,
    pub status: Option<AlertStatus>,
    pub direction: Option<SortOrder>,
    pub search: Option<String>,
}

impl ListAlertsParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of alerts to return.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Filter by category.
    pub fn with_category(mut self, category: AlertCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by status.
    pub fn with_status(mut self, status: AlertStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set sort direction.
    pub fn with_direction(mut self, direction: SortOrder) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Filter by subject text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Parameters for GET /v1/market/quote/{symbols}.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetQuotesParams {
    pub detail_flag: Option<QuoteDetail>,
    pub require_earnings_date: bool,
    pub skip_mini_options_check: bool,
}

impl GetQuotesParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set detail level.
    pub fn with_detail(mut self, detail_flag: QuoteDetail) -> Self {
        self.detail_flag = Some(detail_flag);
        self
    }

    /// Include next earnings date (requireEarningsDate).
    pub fn with_earnings_date(mut self) -> Self {
        self.require_earnings_date = true;
        self
    }

    /// Skip the mini options check (skipMiniOptionsCheck).
    pub fn with_skip_mini_options_check(mut self) -> Self {
        self.skip_mini_options_check = true;
        self
    }
}

/// Parameters for GET /v1/market/optionchains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionChainsParams {
    pub expiry_year: Option<u32>,
    pub expiry_month: Option<u32>,
    pub expiry_day: Option<u32>,
    pub strike_price_near: Option<Decimal>,
    pub no_of_strikes: Option<u32>,
    pub include_weekly: bool,
    pub skip_adjusted: bool,
    pub option_category: Option<OptionCategory>,
    pub chain_type: Option<OptionChainType>,
    pub price_type: Option<OptionPriceType>,
}

impl OptionChainsParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expiration date.
    pub fn with_expiry(mut self, year: u32, month: u32, day: u32) -> Self {
        self.expiry_year = Some(year);
        self.expiry_month = Some(month);
        self.expiry_day = Some(day);
        self
    }

    /// Set strike price to center on and number of strikes.
    pub fn with_strikes_near(mut self, strike_price: Decimal, no_of_strikes: u32) -> Self {
        self.strike_price_near = Some(strike_price);
        self.no_of_strikes = Some(no_of_strikes);
        self
    }

    /// Include weekly options (includeWeekly).
    pub fn with_weekly(mut self) -> Self {
        self.include_weekly = true;
        self
    }

    /// Skip adjusted options (skipAdjusted).
    pub fn with_skip_adjusted(mut self) -> Self {
        self.skip_adjusted = true;
        self
    }

    /// Set option category.
    pub fn with_category(mut self, category: OptionCategory) -> Self {
        self.option_category = Some(category);
        self
    }

    /// Set chain type.
    pub fn with_chain_type(mut self, chain_type: OptionChainType) -> Self {
        self.chain_type = Some(chain_type);
        self
    }

    /// Set price type.
    pub fn with_price_type(mut self, price_type: OptionPriceType) -> Self {
        self.price_type = Some(price_type);
        self
    }
}

/// Parameters for GET /v1/accounts/{key}/orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOrdersParams {
    pub marker: Option<String>,
    pub count: Option<u32>,
    pub status: Option<OrderStatus>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub symbols: Vec<String>,
    pub security_type: Option<OrderSecurityType>,
    pub transaction_type: Option<OrderTransactionType>,
    pub market_session: Option<MarketSession>,
}

impl ListOrdersParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set pagination marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Set number of orders to return.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Filter by order status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set date range (fromDate, toDate).
    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from_date = Some(from);
        self.to_date = Some(to);
        self
    }

    /// Filter by symbols.
    pub fn with_symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by security type.
    pub fn with_security_type(mut self, security_type: OrderSecurityType) -> Self {
        self.security_type = Some(security_type);
        self
    }

    /// Filter by transaction type.
    pub fn with_transaction_type(mut self, transaction_type: OrderTransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// Filter by market session.
    pub fn with_market_session(mut self, market_session: MarketSession) -> Self {
        self.market_session = Some(market_session);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unset() {
        let params = ListTransactionsParams::default();
        assert!(params.start_date.is_none());
        assert!(params.count.is_none());
        let params = ViewPortfolioParams::default();
        assert!(!params.totals_required);
        assert!(!params.lots_required);
    }

    #[test]
    fn test_list_orders_params_builder() {
        let params = ListOrdersParams::new()
            .with_marker("m1")
            .with_count(5)
            .with_symbols(["A", "B"])
            .with_status(OrderStatus::Open);
        assert_eq!(params.marker.as_deref(), Some("m1"));
        assert_eq!(params.count, Some(5));
        assert_eq!(params.symbols, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(params.status, Some(OrderStatus::Open));
    }

    #[test]
    fn test_option_chains_params_builder() {
        let params = OptionChainsParams::new()
            .with_expiry(2024, 6, 21)
            .with_strikes_near(Decimal::from(150), 4)
            .with_weekly()
            .with_chain_type(OptionChainType::Put);
        assert_eq!(params.expiry_month, Some(6));
        assert_eq!(params.strike_price_near, Some(Decimal::from(150)));
        assert!(params.include_weekly);
        assert!(!params.skip_adjusted);
    }
}
