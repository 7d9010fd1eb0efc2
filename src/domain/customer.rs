//! Entry point for the domain layer.

use crate::api::types::{AccountListResponse, AlertsResponse};
use crate::api::{EtradeClient, ListAlertsParams, ALERTS_MAX_COUNT};
use crate::domain::{Account, Alert};
use crate::error::{EtradeError, EtradeResult};

/// The authenticated customer behind a client.
#[derive(Debug, Clone)]
pub struct Customer<'a> {
    client: &'a EtradeClient,
    name: String,
}

impl<'a> Customer<'a> {
    pub fn new(client: &'a EtradeClient, name: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client(&self) -> &'a EtradeClient {
        self.client
    }

    /// Fetch every account. A failed fetch is returned unchanged.
    pub fn get_all_accounts(&self) -> EtradeResult<Vec<Account<'a>>> {
        let body = self.client.list_accounts()?;
        let response: AccountListResponse = serde_json::from_slice(&body)?;

        Ok(response
            .into_accounts()
            .into_iter()
            .map(|info| Account::new(self.client, info))
            .collect())
    }

    /// Fetch every account and return the one whose `accountId` equals `account_id`.
    pub fn get_account_by_id(&self, account_id: &str) -> EtradeResult<Account<'a>> {
        tracing::debug!(account_id, "Looking up account");
        self.get_all_accounts()?
            .into_iter()
            .find(|account| account.id() == account_id)
            .ok_or_else(|| EtradeError::NotFound(format!("account '{}'", account_id)))
    }

    /// Fetch every alert, up to [`ALERTS_MAX_COUNT`] in one page.
    pub fn get_all_alerts(&self) -> EtradeResult<Vec<Alert<'a>>> {
        let params = ListAlertsParams::new().with_count(ALERTS_MAX_COUNT);
        let body = self.client.list_alerts(&params)?;
        let response: AlertsResponse = serde_json::from_slice(&body)?;

        Ok(response
            .into_alerts()
            .into_iter()
            .map(|info| Alert::new(self.client, info))
            .collect())
    }

    /// Fetch every alert and return the one with id `alert_id`.
    pub fn get_alert_by_id(&self, alert_id: i64) -> EtradeResult<Alert<'a>> {
        tracing::debug!(alert_id, "Looking up alert");
        self.get_all_alerts()?
            .into_iter()
            .find(|alert| alert.id() == alert_id)
            .ok_or_else(|| EtradeError::NotFound(format!("alert {}", alert_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Environment;
    use crate::http::FakeTransport;

    #[test]
    fn test_undecodable_body_is_serde_error() {
        let client = EtradeClient::with_transport(Environment::Sandbox, FakeTransport::ok("not json"));
        let customer = Customer::new(&client, "TestCustomerName");
        assert_eq!(customer.name(), "TestCustomerName");
        assert!(matches!(customer.get_all_accounts(), Err(EtradeError::Serde(_))));
    }
}
