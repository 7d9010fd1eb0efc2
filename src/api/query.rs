//! Query-string assembly.
//!
//! Keys are held in a `BTreeMap`, so serialization is alphabetical and the
//! same logical request always produces the same URL. Unset optional values
//! never reach the map.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::EtradeResult;

/// Wire format for date parameters: zero-padded month, day, four-digit year.
pub const DATE_FORMAT: &str = "%m%d%Y";

/// Ordered set of query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<&'static str, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value that is always sent.
    pub fn insert(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.params.insert(key, value.to_string());
        self
    }

    /// Insert a value only when present.
    pub fn insert_opt<T: ToString>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.params.insert(key, v.to_string());
        }
        self
    }

    /// Insert a string only when present and non-empty.
    pub fn insert_str(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) if !v.is_empty() => {
                self.params.insert(key, v.to_string());
            }
            _ => {}
        }
        self
    }

    /// Insert a date in [`DATE_FORMAT`] only when present.
    pub fn insert_date(&mut self, key: &'static str, value: Option<NaiveDate>) -> &mut Self {
        self.insert_opt(key, value.map(|d| d.format(DATE_FORMAT)))
    }

    /// Insert a comma-joined list only when it has at least one element.
    pub fn insert_list<S: AsRef<str>>(&mut self, key: &'static str, values: &[S]) -> &mut Self {
        if !values.is_empty() {
            let joined = values.iter().map(|v| v.as_ref()).collect::<Vec<_>>().join(",");
            self.params.insert(key, joined);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Form-urlencode the parameters in key order.
    pub fn encode(&self) -> EtradeResult<String> {
        Ok(serde_urlencoded::to_string(&self.params)?)
    }

    /// Append the encoded parameters to `url`, omitting `?` when empty.
    pub fn apply(&self, url: String) -> EtradeResult<String> {
        if self.params.is_empty() {
            return Ok(url);
        }
        Ok(format!("{}?{}", url, self.encode()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_sorted_alphabetically() {
        let mut q = QueryParams::new();
        q.insert("sortOrder", "ASC")
            .insert("count", 6)
            .insert("marker", "5");
        assert_eq!(q.encode().unwrap(), "count=6&marker=5&sortOrder=ASC");
    }

    #[test]
    fn test_unset_values_omitted() {
        let mut q = QueryParams::new();
        q.insert_opt::<u32>("count", None)
            .insert_str("marker", None)
            .insert_str("search", Some(""))
            .insert_date("startDate", None)
            .insert_list::<&str>("symbol", &[]);
        assert!(q.is_empty());
        assert_eq!(q.apply("https://x/y.json".to_string()).unwrap(), "https://x/y.json");
    }

    #[test]
    fn test_date_format() {
        let mut q = QueryParams::new();
        q.insert_date("startDate", NaiveDate::from_ymd_opt(2023, 1, 2));
        assert_eq!(q.get("startDate"), Some("01022023"));
    }

    #[test]
    fn test_list_comma_is_percent_encoded() {
        let mut q = QueryParams::new();
        q.insert_list("symbol", &["A", "B"]);
        assert_eq!(q.encode().unwrap(), "symbol=A%2CB");
    }

    #[test]
    fn test_reserved_characters_encoded() {
        let mut q = QueryParams::new();
        q.insert("search", "a b&c");
        assert_eq!(q.encode().unwrap(), "search=a+b%26c");
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut q = QueryParams::new();
        q.insert("count", 1).insert("count", 2);
        assert_eq!(q.len(), 1);
        assert_eq!(q.get("count"), Some("2"));
    }

    #[test]
    fn test_apply_is_deterministic() {
        let build = || {
            let mut q = QueryParams::new();
            q.insert("b", 2).insert("a", 1).insert("c", 3);
            q.apply("https://x".to_string()).unwrap()
        };
        assert_eq!(build(), build());
        assert_eq!(build(), "https://x?a=1&b=2&c=3");
    }
}
