//! Account wrapper.

use crate::api::types::{AccountInfo, PortfolioResponse, Position};
use crate::api::{EtradeClient, ListOrdersParams, ListTransactionsParams, ViewPortfolioParams};
use crate::error::EtradeResult;

/// One brokerage account plus the client that fetched it.
#[derive(Debug, Clone)]
pub struct Account<'a> {
    client: &'a EtradeClient,
    info: AccountInfo,
}

impl<'a> Account<'a> {
    pub fn new(client: &'a EtradeClient, info: AccountInfo) -> Self {
        Self { client, info }
    }

    pub fn info(&self) -> &AccountInfo {
        &self.info
    }

    pub fn into_info(self) -> AccountInfo {
        self.info
    }

    /// Customer-facing account number, used for lookups.
    pub fn id(&self) -> &str {
        &self.info.account_id
    }

    /// Opaque key used in every account-scoped URL.
    pub fn key(&self) -> &str {
        &self.info.account_id_key
    }

    pub fn balances(&self, real_time_nav: bool) -> EtradeResult<Vec<u8>> {
        self.client.get_account_balances(self.key(), real_time_nav)
    }

    pub fn transactions(&self, params: &ListTransactionsParams) -> EtradeResult<Vec<u8>> {
        self.client.list_transactions(self.key(), params)
    }

    pub fn transaction_details(&self, transaction_id: &str) -> EtradeResult<Vec<u8>> {
        self.client.list_transaction_details(self.key(), transaction_id)
    }

    pub fn portfolio(&self, params: &ViewPortfolioParams) -> EtradeResult<Vec<u8>> {
        self.client.view_portfolio(self.key(), params)
    }

    /// Fetch one portfolio page and decode its positions.
    pub fn positions(&self, params: &ViewPortfolioParams) -> EtradeResult<Vec<Position>> {
        let body = self.portfolio(params)?;
        let response: PortfolioResponse = serde_json::from_slice(&body)?;
        Ok(response.into_positions())
    }

    pub fn orders(&self, params: &ListOrdersParams) -> EtradeResult<Vec<u8>> {
        self.client.list_orders(self.key(), params)
    }

    pub fn cancel_order(&self, order_id: &str) -> EtradeResult<Vec<u8>> {
        self.client.cancel_order(self.key(), order_id)
    }
}
