//! Endpoint URL builder.
//!
//! Pure string construction: path parameters are interpolated exactly as
//! given. Callers validate and percent-encode ids before reaching this layer.

use crate::network::{AUTHORIZE_URL, PRODUCTION_API_URL, SANDBOX_API_URL};

/// Resource suffix appended to every `/v1/` endpoint.
const RESOURCE_SUFFIX: &str = ".json";

/// Target API environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn from_production(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Sandbox
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }

    /// Base host for this environment.
    pub fn api_url(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_API_URL,
            Self::Production => PRODUCTION_API_URL,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment '{}' (expected sandbox or production)", other)),
        }
    }
}

/// URL templates for every API operation, bound to one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointUrls {
    environment: Environment,
    base_url: &'static str,
}

impl EndpointUrls {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            base_url: environment.api_url(),
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &str {
        self.base_url
    }

    fn api(&self, path: &str) -> String {
        format!("{}/v1/{}{}", self.base_url, path, RESOURCE_SUFFIX)
    }

    // ── OAuth ────────────────────────────────────────────────────────────

    pub fn request_token_url(&self) -> String {
        format!("{}/oauth/request_token", self.base_url)
    }

    pub fn authorize_application_url(&self) -> String {
        AUTHORIZE_URL.to_string()
    }

    pub fn access_token_url(&self) -> String {
        format!("{}/oauth/access_token", self.base_url)
    }

    pub fn renew_access_token_url(&self) -> String {
        format!("{}/oauth/renew_access_token", self.base_url)
    }

    pub fn revoke_access_token_url(&self) -> String {
        format!("{}/oauth/revoke_access_token", self.base_url)
    }

    // ── Accounts ─────────────────────────────────────────────────────────

    pub fn list_accounts_url(&self) -> String {
        self.api("accounts/list")
    }

    pub fn account_balances_url(&self, account_id_key: &str) -> String {
        self.api(&format!("accounts/{}/balance", account_id_key))
    }

    pub fn list_transactions_url(&self, account_id_key: &str) -> String {
        self.api(&format!("accounts/{}/transactions", account_id_key))
    }

    pub fn transaction_details_url(&self, account_id_key: &str, transaction_id: &str) -> String {
        self.api(&format!("accounts/{}/transactions/{}", account_id_key, transaction_id))
    }

    pub fn view_portfolio_url(&self, account_id_key: &str) -> String {
        self.api(&format!("accounts/{}/portfolio", account_id_key))
    }

    // ── Alerts ───────────────────────────────────────────────────────────

    pub fn list_alerts_url(&self) -> String {
        self.api("user/alerts")
    }

    pub fn alert_details_url(&self, alert_id: &str) -> String {
        self.api(&format!("user/alerts/{}", alert_id))
    }

    /// `alert_ids` is the already comma-joined id list.
    pub fn delete_alerts_url(&self, alert_ids: &str) -> String {
        self.api(&format!("user/alerts/{}", alert_ids))
    }

    // ── Market ───────────────────────────────────────────────────────────

    /// `symbols` is the already comma-joined symbol list.
    pub fn quotes_url(&self, symbols: &str) -> String {
        self.api(&format!("market/quote/{}", symbols))
    }

    pub fn lookup_product_url(&self, search: &str) -> String {
        self.api(&format!("market/lookup/{}", search))
    }

    pub fn option_chains_url(&self) -> String {
        self.api("market/optionchains")
    }

    pub fn option_expire_dates_url(&self) -> String {
        self.api("market/optionexpiredate")
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub fn list_orders_url(&self, account_id_key: &str) -> String {
        self.api(&format!("accounts/{}/orders", account_id_key))
    }

    pub fn preview_order_url(&self, account_id_key: &str) -> String {
        self.api(&format!("accounts/{}/orders/preview", account_id_key))
    }

    pub fn place_order_url(&self, account_id_key: &str) -> String {
        self.api(&format!("accounts/{}/orders/place", account_id_key))
    }

    pub fn cancel_order_url(&self, account_id_key: &str) -> String {
        self.api(&format!("accounts/{}/orders/cancel", account_id_key))
    }

    pub fn change_preview_order_url(&self, account_id_key: &str, order_id: &str) -> String {
        self.api(&format!("accounts/{}/orders/{}/change/preview", account_id_key, order_id))
    }

    pub fn place_changed_order_url(&self, account_id_key: &str, order_id: &str) -> String {
        self.api(&format!("accounts/{}/orders/{}/change/place", account_id_key, order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all_urls(urls: &EndpointUrls, host: &str) {
        let v1 = |path: &str| format!("{}/v1/{}.json", host, path);

        assert_eq!(urls.request_token_url(), format!("{}/oauth/request_token", host));
        assert_eq!(
            urls.authorize_application_url(),
            "https://us.etrade.com/e/t/etws/authorize"
        );
        assert_eq!(urls.access_token_url(), format!("{}/oauth/access_token", host));
        assert_eq!(urls.renew_access_token_url(), format!("{}/oauth/renew_access_token", host));
        assert_eq!(urls.revoke_access_token_url(), format!("{}/oauth/revoke_access_token", host));
        assert_eq!(urls.list_accounts_url(), v1("accounts/list"));
        assert_eq!(urls.account_balances_url("1234"), v1("accounts/1234/balance"));
        assert_eq!(urls.list_transactions_url("1234"), v1("accounts/1234/transactions"));
        assert_eq!(
            urls.transaction_details_url("1234", "5678"),
            v1("accounts/1234/transactions/5678")
        );
        assert_eq!(urls.view_portfolio_url("1234"), v1("accounts/1234/portfolio"));
        assert_eq!(urls.list_alerts_url(), v1("user/alerts"));
        assert_eq!(urls.alert_details_url("1234"), v1("user/alerts/1234"));
        assert_eq!(urls.delete_alerts_url("1234,5678"), v1("user/alerts/1234,5678"));
        assert_eq!(urls.quotes_url("FLIP,FLOP"), v1("market/quote/FLIP,FLOP"));
        assert_eq!(urls.lookup_product_url("FLIP"), v1("market/lookup/FLIP"));
        assert_eq!(urls.option_chains_url(), v1("market/optionchains"));
        assert_eq!(urls.option_expire_dates_url(), v1("market/optionexpiredate"));
        assert_eq!(urls.list_orders_url("1234"), v1("accounts/1234/orders"));
        assert_eq!(urls.preview_order_url("1234"), v1("accounts/1234/orders/preview"));
        assert_eq!(urls.place_order_url("1234"), v1("accounts/1234/orders/place"));
        assert_eq!(urls.cancel_order_url("1234"), v1("accounts/1234/orders/cancel"));
        assert_eq!(
            urls.change_preview_order_url("1234", "5678"),
            v1("accounts/1234/orders/5678/change/preview")
        );
        assert_eq!(
            urls.place_changed_order_url("1234", "5678"),
            v1("accounts/1234/orders/5678/change/place")
        );
    }

    #[test]
    fn test_sandbox_urls() {
        let urls = EndpointUrls::new(Environment::from_production(false));
        assert_eq!(urls.environment(), Environment::Sandbox);
        assert_all_urls(&urls, "https://apisb.etrade.com");
    }

    #[test]
    fn test_production_urls() {
        let urls = EndpointUrls::new(Environment::from_production(true));
        assert_eq!(urls.environment(), Environment::Production);
        assert_all_urls(&urls, "https://api.etrade.com");
    }

    #[test]
    fn test_empty_id_still_builds() {
        let urls = EndpointUrls::new(Environment::Production);
        assert_eq!(
            urls.account_balances_url(""),
            "https://api.etrade.com/v1/accounts//balance.json"
        );
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("PRODUCTION".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(Environment::default(), Environment::Sandbox);
    }
}
