//! Account, balance and portfolio types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Institution type sent with balance requests.
    pub enum InstitutionType {
        Brokerage => "BROKERAGE",
    }
}

wire_enum! {
    /// Portfolio sort column (`sortBy`).
    pub enum PortfolioSortBy {
        Symbol => "SYMBOL",
        TypeName => "TYPE_NAME",
        ExchangeName => "EXCHANGE_NAME",
        Currency => "CURRENCY",
        Quantity => "QUANTITY",
        LongOrShort => "LONG_OR_SHORT",
        DateAcquired => "DATE_ACQUIRED",
        PricePaid => "PRICEPAID",
        TotalGain => "TOTAL_GAIN",
        TotalGainPct => "TOTAL_GAIN_PCT",
        MarketValue => "MARKET_VALUE",
        Bid => "BI",
        Ask => "ASK",
        PriceChange => "PRICE_CHANGE",
        PriceChangePct => "PRICE_CHANGE_PCT",
        Volume => "VOLUME",
        Week52High => "WEEK_52_HIGH",
        Week52Low => "WEEK_52_LOW",
        Eps => "EPS",
        PeRatio => "PE_RATIO",
        OptionType => "OPTION_TYPE",
        StrikePrice => "STRIKE_PRICE",
        Premium => "PREMIUM",
        Expiration => "EXPIRATION",
        DaysGain => "DAYS_GAIN",
        Commission => "COMMISSION",
        MarketCap => "MARKETCAP",
        PrevClose => "PREV_CLOSE",
        Open => "OPEN",
        DaysRange => "DAYS_RANGE",
        TotalCost => "TOTAL_COST",
        DaysGainPct => "DAYS_GAIN_PCT",
        PctOfPortfolio => "PCT_OF_PORTFOLIO",
        LastTradeTime => "LAST_TRADE_TIME",
        BasePrice => "BASE_PRICE",
        Dividend => "DIVIDEND",
    }
}

wire_enum! {
    /// Portfolio column set (`view`).
    pub enum PortfolioView {
        Performance => "PERFORMANCE",
        Fundamental => "FUNDAMENTAL",
        OptionsWatch => "OPTIONSWATCH",
        Quick => "QUICK",
        Complete => "COMPLETE",
    }
}

// ─── Account list ────────────────────────────────────────────────────────────

/// Response for GET /v1/accounts/list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountListResponse {
    #[serde(rename = "AccountListResponse")]
    pub inner: AccountListBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountListBody {
    #[serde(rename = "Accounts", default)]
    pub accounts: AccountList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountList {
    #[serde(rename = "Account", default)]
    pub account: Vec<AccountInfo>,
}

impl AccountListResponse {
    pub fn into_accounts(self) -> Vec<AccountInfo> {
        self.inner.accounts.account
    }
}

/// One account as listed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// Customer-facing account number
    pub account_id: String,
    /// Opaque key used in account URLs
    #[serde(default)]
    pub account_id_key: String,
    #[serde(default)]
    pub account_mode: Option<String>,
    #[serde(default)]
    pub account_desc: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub institution_type: Option<String>,
    #[serde(default)]
    pub account_status: Option<String>,
    /// Epoch seconds; 0 when open
    #[serde(default)]
    pub closed_date: Option<i64>,
}

// ─── Portfolio ───────────────────────────────────────────────────────────────

/// Response for GET /v1/accounts/{key}/portfolio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioResponse {
    #[serde(rename = "PortfolioResponse")]
    pub inner: PortfolioBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioBody {
    #[serde(rename = "AccountPortfolio", default)]
    pub account_portfolio: Vec<AccountPortfolio>,
}

/// Positions for one account, one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountPortfolio {
    #[serde(rename = "accountId", default)]
    pub account_id: String,
    #[serde(rename = "Position", default)]
    pub positions: Vec<Position>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<u32>,
    #[serde(rename = "nextPageNo", default)]
    pub next_page_no: Option<String>,
}

impl PortfolioResponse {
    /// All positions across every returned account portfolio.
    pub fn into_positions(self) -> Vec<Position> {
        self.inner
            .account_portfolio
            .into_iter()
            .flat_map(|p| p.positions)
            .collect()
    }
}

/// A held position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub position_id: i64,
    #[serde(default)]
    pub symbol_description: String,
    #[serde(default)]
    pub quantity: Decimal,
    /// LONG or SHORT
    #[serde(default)]
    pub position_type: Option<String>,
    #[serde(default)]
    pub price_paid: Option<Decimal>,
    #[serde(default)]
    pub market_value: Option<Decimal>,
    #[serde(default)]
    pub total_gain: Option<Decimal>,
    #[serde(default)]
    pub date_acquired: Option<i64>,
    #[serde(rename = "Product", default)]
    pub product: Option<Product>,
}

/// Instrument identity attached to a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub symbol: String,
    #[serde(default)]
    pub security_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_list_deserialize() {
        let json = r#"{
            "AccountListResponse": {
                "Accounts": {
                    "Account": [
                        {"accountId": "84010429", "accountIdKey": "JIdOIAcSpwR1Jva7RQBraQ",
                         "accountMode": "MARGIN", "accountName": "Brokerage",
                         "accountStatus": "ACTIVE", "closedDate": 0},
                        {"accountId": "84010430"}
                    ]
                }
            }
        }"#;
        let accounts = serde_json::from_str::<AccountListResponse>(json)
            .unwrap()
            .into_accounts();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].account_id_key, "JIdOIAcSpwR1Jva7RQBraQ");
        assert_eq!(accounts[0].account_mode.as_deref(), Some("MARGIN"));
        assert_eq!(accounts[1].account_id, "84010430");
        assert!(accounts[1].account_name.is_none());
    }

    #[test]
    fn test_portfolio_flattens_positions() {
        let json = r#"{
            "PortfolioResponse": {
                "AccountPortfolio": [
                    {"accountId": "1", "totalPages": 1, "Position": [
                        {"positionId": 10, "symbolDescription": "GOOG", "quantity": 5,
                         "positionType": "LONG", "pricePaid": 100,
                         "Product": {"symbol": "GOOG", "securityType": "EQ"}}
                    ]},
                    {"accountId": "2", "Position": [
                        {"positionId": 11, "symbolDescription": "MSFT", "quantity": 2}
                    ]}
                ]
            }
        }"#;
        let positions = serde_json::from_str::<PortfolioResponse>(json)
            .unwrap()
            .into_positions();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].quantity, Decimal::from(5));
        assert_eq!(positions[0].price_paid, Some(Decimal::from(100)));
        assert_eq!(positions[0].product.as_ref().unwrap().symbol, "GOOG");
        assert_eq!(positions[1].symbol_description, "MSFT");
    }

    #[test]
    fn test_portfolio_sort_by_wire() {
        assert_eq!(PortfolioSortBy::PricePaid.as_str(), "PRICEPAID");
        assert_eq!("week_52_high".parse::<PortfolioSortBy>().unwrap(), PortfolioSortBy::Week52High);
        assert_eq!(PortfolioView::OptionsWatch.as_str(), "OPTIONSWATCH");
    }
}
