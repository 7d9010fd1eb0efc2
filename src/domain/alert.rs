//! Alert wrapper.

use crate::api::types::AlertInfo;
use crate::api::EtradeClient;
use crate::error::EtradeResult;

/// One alert plus the client that fetched it.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    client: &'a EtradeClient,
    info: AlertInfo,
}

impl<'a> Alert<'a> {
    pub fn new(client: &'a EtradeClient, info: AlertInfo) -> Self {
        Self { client, info }
    }

    pub fn info(&self) -> &AlertInfo {
        &self.info
    }

    pub fn into_info(self) -> AlertInfo {
        self.info
    }

    pub fn id(&self) -> i64 {
        self.info.id
    }

    pub fn details(&self, html_tags: bool) -> EtradeResult<Vec<u8>> {
        self.client.list_alert_details(&self.id().to_string(), html_tags)
    }

    pub fn delete(&self) -> EtradeResult<Vec<u8>> {
        self.client.delete_alerts(&[self.id().to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{EndpointUrls, Environment};
    use crate::http::{FakeTransport, Method};
    use std::sync::Arc;

    #[test]
    fn test_delete_targets_single_alert() {
        let fake = Arc::new(FakeTransport::ok("{}"));
        let client = EtradeClient::new(EndpointUrls::new(Environment::Production), fake.clone());
        let alert = Alert::new(&client, AlertInfo { id: 42, ..Default::default() });

        alert.delete().unwrap();
        let requests = fake.requests();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].url, "https://api.etrade.com/v1/user/alerts/42.json");
    }
}
