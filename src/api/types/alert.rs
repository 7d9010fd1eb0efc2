//! Alert types.

use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum AlertCategory {
        Stock => "STOCK",
        Account => "ACCOUNT",
    }
}

wire_enum! {
    pub enum AlertStatus {
        Read => "READ",
        Unread => "UNREAD",
        Deleted => "DELETED",
    }
}

/// Response for GET /v1/user/alerts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertsResponse {
    #[serde(rename = "AlertsResponse")]
    pub inner: AlertsBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertsBody {
    #[serde(rename = "totalAlerts", default)]
    pub total_alerts: i64,
    #[serde(rename = "Alert", default)]
    pub alerts: Vec<AlertInfo>,
}

impl AlertsResponse {
    pub fn into_alerts(self) -> Vec<AlertInfo> {
        self.inner.alerts
    }
}

/// One alert as listed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertInfo {
    pub id: i64,
    /// Epoch seconds
    #[serde(default)]
    pub create_time: Option<i64>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub status: Option<AlertStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_deserialize() {
        let json = r#"{
            "AlertsResponse": {
                "totalAlerts": 2,
                "Alert": [
                    {"id": 1, "createTime": 1529689206, "subject": "Order executed", "status": "UNREAD"},
                    {"id": 2}
                ]
            }
        }"#;
        let resp: AlertsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.inner.total_alerts, 2);
        let alerts = resp.into_alerts();
        assert_eq!(alerts[0].status, Some(AlertStatus::Unread));
        assert_eq!(alerts[1].id, 2);
        assert!(alerts[1].subject.is_none());
    }

    #[test]
    fn test_empty_alerts_body() {
        let resp: AlertsResponse = serde_json::from_str(r#"{"AlertsResponse": {}}"#).unwrap();
        assert!(resp.into_alerts().is_empty());
    }
}
