use chrono::NaiveDate;

use crate::core::wire::{parse_f64, parse_u64};
use crate::core::{AvClient, AvError, net};

use super::model::{DailyBar, DailyMeta, DailySeries};
use super::wire::{DailyEnvelope, DailyNode};

pub(super) async fn daily_adjusted(
    client: &AvClient,
    symbol: &str,
) -> Result<DailySeries, AvError> {
    let mut url = client.query_url("TIME_SERIES_DAILY_ADJUSTED", symbol);
    url.query_pairs_mut().append_pair("outputsize", "full");

    let resp = client.http().get(url).send().await?;
    let body = net::get_text(resp).await?;

    decode_daily(symbol, &body)
}

fn decode_daily(symbol: &str, body: &str) -> Result<DailySeries, AvError> {
    let parsed: DailyEnvelope =
        serde_json::from_str(body).map_err(|e| AvError::Data(format!("json parse error: {e}")))?;

    if let Some(err) = parsed.control.into_error() {
        return Err(err);
    }

    let series = parsed
        .series
        .ok_or_else(|| AvError::Data("missing daily time series".into()))?;

    let mut bars = Vec::with_capacity(series.len());
    for (date, node) in series {
        bars.push(shape_bar(&date, node)?);
    }

    let meta = parsed.meta.map(|m| DailyMeta {
        symbol: m.symbol,
        last_refreshed: m.last_refreshed,
        time_zone: m.time_zone,
    });

    Ok(DailySeries {
        symbol: symbol.to_owned(),
        meta,
        bars,
    })
}

/// Key-name lookup into the eight per-day fields. A day that ships fewer than
/// all eight is malformed data, never a silently shorter row.
fn shape_bar(date: &str, node: DailyNode) -> Result<DailyBar, AvError> {
    fn require(field: &'static str, value: Option<String>) -> Result<String, AvError> {
        value.ok_or_else(|| AvError::Data(format!("daily bar missing '{field}'")))
    }

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AvError::Data(format!("bad trading-day key '{date}'")))?;

    Ok(DailyBar {
        date,
        open: parse_f64("1. open", &require("1. open", node.open)?)?,
        high: parse_f64("2. high", &require("2. high", node.high)?)?,
        low: parse_f64("3. low", &require("3. low", node.low)?)?,
        close: parse_f64("4. close", &require("4. close", node.close)?)?,
        adjusted_close: parse_f64(
            "5. adjusted close",
            &require("5. adjusted close", node.adjusted_close)?,
        )?,
        volume: parse_u64("6. volume", &require("6. volume", node.volume)?)?,
        dividend_amount: parse_f64(
            "7. dividend amount",
            &require("7. dividend amount", node.dividend_amount)?,
        )?,
        split_coefficient: parse_f64(
            "8. split coefficient",
            &require("8. split coefficient", node.split_coefficient)?,
        )?,
    })
}
