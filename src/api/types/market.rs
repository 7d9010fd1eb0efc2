//! Quote and option-chain request enums.

wire_enum! {
    /// Quote detail level (`detailFlag`).
    pub enum QuoteDetail {
        All => "ALL",
        Fundamental => "FUNDAMENTAL",
        Intraday => "INTRADAY",
        Options => "OPTIONS",
        Week52 => "WEEK_52",
        MutualFund => "MF",
    }
}

wire_enum! {
    /// Option expiration cycle (`expiryType`).
    pub enum OptionExpiryType {
        Unspecified => "UNSPECIFIED",
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
        Quarterly => "QUARTERLY",
        Vix => "VIX",
        All => "ALL",
        MonthEnd => "MONTHEND",
    }
}

wire_enum! {
    /// Option contract size category (`optionCategory`).
    pub enum OptionCategory {
        Standard => "STANDARD",
        All => "ALL",
        Mini => "MINI",
    }
}

wire_enum! {
    /// Which side of the chain to return (`chainType`).
    pub enum OptionChainType {
        Call => "CALL",
        Put => "PUT",
        CallPut => "CALLPUT",
    }
}

wire_enum! {
    /// Pricing session for chain quotes (`priceType`).
    pub enum OptionPriceType {
        Extended => "EXTENDED",
        All => "ALL",
    }
}
