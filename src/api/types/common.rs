//! Enums shared by several endpoints.

wire_enum! {
    /// Sort direction (`sortOrder` / `direction`).
    pub enum SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}

wire_enum! {
    /// Trading session used when pricing positions and filtering orders.
    pub enum MarketSession {
        Regular => "REGULAR",
        Extended => "EXTENDED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_wire() {
        assert_eq!(SortOrder::Asc.as_str(), "ASC");
        assert_eq!(SortOrder::Desc.to_string(), "DESC");
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
    }

    #[test]
    fn test_parse_error_lists_expected() {
        let err = "sideways".parse::<MarketSession>().unwrap_err();
        assert_eq!(err.kind, "MarketSession");
        assert_eq!(err.expected, "REGULAR, EXTENDED");
    }

    #[test]
    fn test_serde_uses_wire_literal() {
        let json = serde_json::to_string(&MarketSession::Extended).unwrap();
        assert_eq!(json, r#""EXTENDED""#);
        let back: MarketSession = serde_json::from_str(r#""REGULAR""#).unwrap();
        assert_eq!(back, MarketSession::Regular);
    }
}
