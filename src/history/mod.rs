//! Full-history adjusted daily prices (`TIME_SERIES_DAILY_ADJUSTED`).

mod api;
mod model;
mod wire;

pub use model::{DailyBar, DailyMeta, DailySeries};

use crate::core::{AvClient, AvError};

/// Fetch the full adjusted daily history for `symbol`, ascending by date.
pub async fn daily_adjusted(client: &AvClient, symbol: &str) -> Result<DailySeries, AvError> {
    api::daily_adjusted(client, symbol).await
}
