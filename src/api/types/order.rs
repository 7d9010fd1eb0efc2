//! Order request enums and fixed request bodies.

use serde::{Deserialize, Serialize};

wire_enum! {
    /// Order state filter (`status`).
    pub enum OrderStatus {
        Open => "OPEN",
        Executed => "EXECUTED",
        Cancelled => "CANCELLED",
        IndividualFills => "INDIVIDUAL_FILLS",
        CancelRequested => "CANCEL_REQUESTED",
        Expired => "EXPIRED",
        Rejected => "REJECTED",
    }
}

wire_enum! {
    /// Security type filter (`securityType`).
    pub enum OrderSecurityType {
        Equity => "EQ",
        Option => "OPTN",
        MutualFund => "MF",
        MoneyMarketFund => "MMF",
    }
}

wire_enum! {
    /// Transaction type filter (`transactionType`).
    pub enum OrderTransactionType {
        ExtendedHours => "ATNM",
        Buy => "BUY",
        Sell => "SELL",
        SellShort => "SELL_SHORT",
        BuyToCover => "BUY_TO_COVER",
        MutualFundExchange => "MF_EXCHANGE",
    }
}

/// Body for PUT /v1/accounts/{key}/orders/cancel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    #[serde(rename = "CancelOrderRequest")]
    pub inner: CancelOrderBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderBody {
    #[serde(rename = "orderId")]
    pub order_id: u64,
}

impl CancelOrderRequest {
    pub fn new(order_id: u64) -> Self {
        Self {
            inner: CancelOrderBody { order_id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_order_request_serialize() {
        let json = serde_json::to_string(&CancelOrderRequest::new(42)).unwrap();
        assert_eq!(json, r#"{"CancelOrderRequest":{"orderId":42}}"#);
    }

    #[test]
    fn test_security_type_wire() {
        assert_eq!(OrderSecurityType::Equity.as_str(), "EQ");
        assert_eq!("optn".parse::<OrderSecurityType>().unwrap(), OrderSecurityType::Option);
        assert_eq!(OrderTransactionType::SellShort.to_string(), "SELL_SHORT");
    }
}
