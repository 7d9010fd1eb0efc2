//! CLI interface for the E*TRADE client
//!
//! Every subcommand maps onto one client or customer call and yields the
//! response body. `accounts`, `alerts` and `positions` decode through the
//! domain layer and re-serialize; everything else is passed through raw.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::api::*;
use crate::domain::Customer;
use crate::error::EtradeResult;

#[derive(Parser, Debug)]
#[command(name = "etrade")]
#[command(about = "Command-line client for the E*TRADE REST API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use the production host instead of the sandbox
    #[arg(long, global = true)]
    pub production: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List accounts
    Accounts,
    /// Show account balances
    Balances {
        account_id_key: String,
        #[arg(long)]
        real_time_nav: bool,
    },
    /// List account transactions
    Transactions(TransactionsArgs),
    /// Show one transaction
    Transaction {
        account_id_key: String,
        transaction_id: String,
    },
    /// View an account portfolio
    Portfolio(PortfolioArgs),
    /// Show decoded positions for an account, looked up by account id
    Positions(PositionsArgs),
    /// List alerts
    Alerts,
    /// Show alert details
    Alert {
        alert_id: String,
        #[arg(long)]
        html_tags: bool,
    },
    /// Delete alerts
    DeleteAlerts {
        #[arg(required = true)]
        alert_ids: Vec<String>,
    },
    /// Get quotes for up to 50 symbols
    Quotes(QuotesArgs),
    /// Look up products by name
    Lookup { search: String },
    /// Get an option chain
    OptionChains(OptionChainsArgs),
    /// List option expiration dates
    OptionExpire {
        symbol: String,
        #[arg(long)]
        expiry_type: Option<OptionExpiryType>,
    },
    /// List orders for an account
    Orders(OrdersArgs),
}

#[derive(Args, Debug)]
pub struct TransactionsArgs {
    pub account_id_key: String,
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    #[arg(long)]
    pub sort_order: Option<SortOrder>,
    #[arg(long)]
    pub marker: Option<String>,
    #[arg(long)]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct PortfolioArgs {
    pub account_id_key: String,
    #[command(flatten)]
    pub options: PortfolioOptions,
}

#[derive(Args, Debug)]
pub struct PositionsArgs {
    /// Customer-facing account number
    pub account_id: String,
    #[command(flatten)]
    pub options: PortfolioOptions,
}

#[derive(Args, Debug, Clone)]
pub struct PortfolioOptions {
    #[arg(long)]
    pub count: Option<u32>,
    #[arg(long)]
    pub sort_by: Option<PortfolioSortBy>,
    #[arg(long)]
    pub sort_order: Option<SortOrder>,
    #[arg(long)]
    pub page_number: Option<u32>,
    #[arg(long)]
    pub market_session: Option<MarketSession>,
    #[arg(long)]
    pub totals: bool,
    #[arg(long)]
    pub lots: bool,
    #[arg(long)]
    pub view: Option<PortfolioView>,
}

#[derive(Args, Debug)]
pub struct QuotesArgs {
    #[arg(required = true)]
    pub symbols: Vec<String>,
    #[arg(long)]
    pub detail: Option<QuoteDetail>,
    /// Include the next earnings date (`--earnings-date false` to omit)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub earnings_date: bool,
    #[arg(long)]
    pub skip_mini_options_check: bool,
}

#[derive(Args, Debug)]
pub struct OptionChainsArgs {
    pub symbol: String,
    #[arg(long)]
    pub expiry_year: Option<u32>,
    #[arg(long)]
    pub expiry_month: Option<u32>,
    #[arg(long)]
    pub expiry_day: Option<u32>,
    #[arg(long)]
    pub strike_price_near: Option<Decimal>,
    #[arg(long)]
    pub no_of_strikes: Option<u32>,
    #[arg(long)]
    pub include_weekly: bool,
    #[arg(long)]
    pub skip_adjusted: bool,
    #[arg(long)]
    pub category: Option<OptionCategory>,
    #[arg(long)]
    pub chain_type: Option<OptionChainType>,
    #[arg(long)]
    pub price_type: Option<OptionPriceType>,
}

#[derive(Args, Debug)]
pub struct OrdersArgs {
    pub account_id_key: String,
    #[arg(long)]
    pub marker: Option<String>,
    #[arg(long)]
    pub count: Option<u32>,
    #[arg(long)]
    pub status: Option<OrderStatus>,
    #[arg(long)]
    pub from_date: Option<NaiveDate>,
    #[arg(long)]
    pub to_date: Option<NaiveDate>,
    /// Comma-separated or repeated
    #[arg(long = "symbol", value_delimiter = ',')]
    pub symbols: Vec<String>,
    #[arg(long)]
    pub security_type: Option<OrderSecurityType>,
    #[arg(long)]
    pub transaction_type: Option<OrderTransactionType>,
    #[arg(long)]
    pub market_session: Option<MarketSession>,
}

impl From<PortfolioOptions> for ViewPortfolioParams {
    fn from(args: PortfolioOptions) -> Self {
        Self {
            count: args.count,
            sort_by: args.sort_by,
            sort_order: args.sort_order,
            page_number: args.page_number,
            market_session: args.market_session,
            totals_required: args.totals,
            lots_required: args.lots,
            view: args.view,
        }
    }
}

impl Commands {
    /// Run the command and return the bytes to print.
    pub fn execute(self, client: &EtradeClient) -> EtradeResult<Vec<u8>> {
        let customer = Customer::new(client, "default");

        match self {
            Commands::Accounts => {
                let accounts: Vec<AccountInfo> = customer
                    .get_all_accounts()?
                    .into_iter()
                    .map(|a| a.into_info())
                    .collect();
                Ok(serde_json::to_vec_pretty(&accounts)?)
            }
            Commands::Balances {
                account_id_key,
                real_time_nav,
            } => client.get_account_balances(&account_id_key, real_time_nav),
            Commands::Transactions(args) => {
                let params = ListTransactionsParams {
                    start_date: args.start_date,
                    end_date: args.end_date,
                    sort_order: args.sort_order,
                    marker: args.marker,
                    count: args.count,
                };
                client.list_transactions(&args.account_id_key, &params)
            }
            Commands::Transaction {
                account_id_key,
                transaction_id,
            } => client.list_transaction_details(&account_id_key, &transaction_id),
            Commands::Portfolio(args) => {
                client.view_portfolio(&args.account_id_key, &args.options.into())
            }
            Commands::Positions(args) => {
                let account = customer.get_account_by_id(&args.account_id)?;
                let positions = account.positions(&args.options.into())?;
                Ok(serde_json::to_vec_pretty(&positions)?)
            }
            Commands::Alerts => {
                let alerts: Vec<AlertInfo> = customer
                    .get_all_alerts()?
                    .into_iter()
                    .map(|a| a.into_info())
                    .collect();
                Ok(serde_json::to_vec_pretty(&alerts)?)
            }
            Commands::Alert {
                alert_id,
                html_tags,
            } => client.list_alert_details(&alert_id, html_tags),
            Commands::DeleteAlerts { alert_ids } => client.delete_alerts(&alert_ids),
            Commands::Quotes(args) => {
                let params = GetQuotesParams {
                    detail_flag: args.detail,
                    require_earnings_date: args.earnings_date,
                    skip_mini_options_check: args.skip_mini_options_check,
                };
                client.get_quotes(&args.symbols, &params)
            }
            Commands::Lookup { search } => client.lookup_product(&search),
            Commands::OptionChains(args) => {
                let params = OptionChainsParams {
                    expiry_year: args.expiry_year,
                    expiry_month: args.expiry_month,
                    expiry_day: args.expiry_day,
                    strike_price_near: args.strike_price_near,
                    no_of_strikes: args.no_of_strikes,
                    include_weekly: args.include_weekly,
                    skip_adjusted: args.skip_adjusted,
                    option_category: args.category,
                    chain_type: args.chain_type,
                    price_type: args.price_type,
                };
                client.get_option_chains(&args.symbol, &params)
            }
            Commands::OptionExpire {
                symbol,
                expiry_type,
            } => client.get_option_expire_dates(&symbol, expiry_type),
            Commands::Orders(args) => {
                let params = ListOrdersParams {
                    marker: args.marker,
                    count: args.count,
                    status: args.status,
                    from_date: args.from_date,
                    to_date: args.to_date,
                    symbols: args.symbols,
                    security_type: args.security_type,
                    transaction_type: args.transaction_type,
                    market_session: args.market_session,
                };
                client.list_orders(&args.account_id_key, &params)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FakeTransport;
    use std::sync::Arc;

    fn run(args: &[&str], fake: &Arc<FakeTransport>) -> EtradeResult<Vec<u8>> {
        let cli = Cli::try_parse_from(args).unwrap();
        let client = EtradeClient::new(
            EndpointUrls::new(Environment::from_production(cli.production)),
            fake.clone(),
        );
        cli.command.execute(&client)
    }

    #[test]
    fn test_quotes_command() {
        let fake = Arc::new(FakeTransport::ok("{}"));
        run(&["etrade", "--production", "quotes", "GOOG", "MSFT", "--detail", "all"], &fake).unwrap();
        assert_eq!(
            fake.last_url().as_deref(),
            Some("https://api.etrade.com/v1/market/quote/GOOG,MSFT.json?detailFlag=ALL&requireEarningsDate=true&skipMiniOptionsCheck=false")
        );
    }

    #[test]
    fn test_quotes_earnings_date_can_be_disabled() {
        let fake = Arc::new(FakeTransport::ok("{}"));
        run(&["etrade", "quotes", "GOOG", "--earnings-date", "false"], &fake).unwrap();
        assert_eq!(
            fake.last_url().as_deref(),
            Some("https://apisb.etrade.com/v1/market/quote/GOOG.json?requireEarningsDate=false&skipMiniOptionsCheck=false")
        );
    }

    #[test]
    fn test_orders_symbol_list() {
        let fake = Arc::new(FakeTransport::ok("{}"));
        run(&["etrade", "orders", "key1", "--symbol", "A,B", "--status", "open"], &fake).unwrap();
        assert_eq!(
            fake.last_url().as_deref(),
            Some("https://apisb.etrade.com/v1/accounts/key1/orders.json?status=OPEN&symbol=A%2CB")
        );
    }

    #[test]
    fn test_invalid_enum_value_rejected() {
        assert!(Cli::try_parse_from(["etrade", "option-expire", "GOOG", "--expiry-type", "yearly"]).is_err());
    }

    #[test]
    fn test_accounts_reserialized() {
        let body = r#"{"AccountListResponse":{"Accounts":{"Account":[{"accountId":"1","accountIdKey":"k1"}]}}}"#;
        let fake = Arc::new(FakeTransport::ok(body));
        let out = run(&["etrade", "accounts"], &fake).unwrap();
        let accounts: Vec<AccountInfo> = serde_json::from_slice(&out).unwrap();
        assert_eq!(accounts[0].account_id_key, "k1");
    }
}
