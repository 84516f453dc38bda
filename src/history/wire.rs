use std::collections::BTreeMap;

use serde::Deserialize;

use crate::core::wire::ControlFields;

#[derive(Deserialize)]
pub(crate) struct DailyEnvelope {
    #[serde(flatten)]
    pub(crate) control: ControlFields,

    #[serde(rename = "Meta Data")]
    pub(crate) meta: Option<MetaNode>,

    /// Keyed by trading day. ISO dates sort lexicographically, so the map is
    /// already chronological.
    #[serde(rename = "Time Series (Daily)")]
    pub(crate) series: Option<BTreeMap<String, DailyNode>>,
}

#[derive(Deserialize)]
pub(crate) struct MetaNode {
    #[serde(rename = "2. Symbol")]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "3. Last Refreshed")]
    pub(crate) last_refreshed: Option<String>,
    #[serde(rename = "5. Time Zone")]
    pub(crate) time_zone: Option<String>,
}

/// One trading day as the provider ships it: eight numbered fields, every
/// value a string. Fields are matched by key name, never by position.
#[derive(Deserialize)]
pub(crate) struct DailyNode {
    #[serde(rename = "1. open")]
    pub(crate) open: Option<String>,
    #[serde(rename = "2. high")]
    pub(crate) high: Option<String>,
    #[serde(rename = "3. low")]
    pub(crate) low: Option<String>,
    #[serde(rename = "4. close")]
    pub(crate) close: Option<String>,
    #[serde(rename = "5. adjusted close")]
    pub(crate) adjusted_close: Option<String>,
    #[serde(rename = "6. volume")]
    pub(crate) volume: Option<String>,
    #[serde(rename = "7. dividend amount")]
    pub(crate) dividend_amount: Option<String>,
    #[serde(rename = "8. split coefficient")]
    pub(crate) split_coefficient: Option<String>,
}
