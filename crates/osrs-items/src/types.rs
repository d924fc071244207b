//! Prices API data types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Static item metadata from `/mapping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMeta {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub examine: Option<String>,
    #[serde(default)]
    pub members: Option<bool>,
    #[serde(default)]
    pub lowalch: Option<i64>,
    #[serde(default)]
    pub highalch: Option<i64>,
    /// Grand Exchange buy limit per four hours.
    #[serde(default)]
    pub limit: Option<u32>,
    /// Store value in coins.
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ItemMeta {
    /// Metadata with only an id and a name.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            examine: None,
            members: None,
            lowalch: None,
            highalch: None,
            limit: None,
            value: None,
            icon: None,
        }
    }
}

/// Latest instant-buy (`high`) and instant-sell (`low`) prices.
///
/// Timestamps are unix seconds of the last trade at that price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    #[serde(default)]
    pub high: Option<i64>,
    #[serde(rename = "highTime", default)]
    pub high_time: Option<i64>,
    #[serde(default)]
    pub low: Option<i64>,
    #[serde(rename = "lowTime", default)]
    pub low_time: Option<i64>,
}

impl PriceQuote {
    pub fn new(high: i64, low: i64) -> Self {
        Self {
            high: Some(high),
            low: Some(low),
            ..Self::default()
        }
    }
}

/// Item metadata together with its latest price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedItem {
    pub meta: ItemMeta,
    pub price: PriceQuote,
}

/// Lookup key: an item id or an exact item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemQuery {
    Id(u32),
    Name(String),
}

impl From<u32> for ItemQuery {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ItemQuery {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for ItemQuery {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for ItemQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// `/latest` response body. Keys of `data` are item ids as strings.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LatestResponse {
    #[serde(default)]
    pub data: Option<HashMap<String, PriceQuote>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_meta_partial_row() {
        let meta: ItemMeta = serde_json::from_value(json!({
            "id": 4151,
            "name": "Abyssal whip",
            "members": true,
            "limit": 70,
            "highalch": 72000
        }))
        .unwrap();
        assert_eq!(meta.id, 4151);
        assert_eq!(meta.members, Some(true));
        assert_eq!(meta.limit, Some(70));
        assert_eq!(meta.examine, None);
    }

    #[test]
    fn test_price_quote_camel_case_times() {
        let quote: PriceQuote = serde_json::from_value(json!({
            "high": 2300000,
            "highTime": 1700000000,
            "low": 2200000,
            "lowTime": null
        }))
        .unwrap();
        assert_eq!(quote.high, Some(2_300_000));
        assert_eq!(quote.high_time, Some(1_700_000_000));
        assert_eq!(quote.low_time, None);
    }

    #[test]
    fn test_latest_response_missing_or_null_data() {
        let missing: LatestResponse = serde_json::from_value(json!({})).unwrap();
        assert!(missing.data.is_none());
        let null: LatestResponse = serde_json::from_value(json!({"data": null})).unwrap();
        assert!(null.data.is_none());
    }

    #[test]
    fn test_item_query_conversions() {
        assert_eq!(ItemQuery::from(4151), ItemQuery::Id(4151));
        assert_eq!(ItemQuery::from("whip"), ItemQuery::Name("whip".to_string()));
        assert_eq!(ItemQuery::Id(7).to_string(), "7");
    }
}
