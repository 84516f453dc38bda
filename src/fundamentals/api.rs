use serde_json::{Map, Value};

use crate::core::wire::ControlFields;
use crate::core::{AvClient, AvError, Table, net};

use super::model::Fundamentals;
use super::wire::StatementEnvelope;

pub(super) async fn overview(client: &AvClient, symbol: &str) -> Result<Table, AvError> {
    let url = client.query_url("OVERVIEW", symbol);
    let resp = client.http().get(url).send().await?;
    let body = net::get_text(resp).await?;

    decode_overview(symbol, &body)
}

fn decode_overview(symbol: &str, body: &str) -> Result<Table, AvError> {
    let control: ControlFields =
        serde_json::from_str(body).map_err(|e| AvError::Data(format!("json parse error: {e}")))?;
    if let Some(err) = control.into_error() {
        return Err(err);
    }

    let record: Map<String, Value> =
        serde_json::from_str(body).map_err(|e| AvError::Data(format!("json parse error: {e}")))?;

    // Unknown symbols come back as a bare `{}` with HTTP 200. An empty table
    // here would silently mask a bad ticker.
    if record.is_empty() {
        return Err(AvError::Provider(format!(
            "empty OVERVIEW response for '{symbol}'"
        )));
    }

    Ok(Table::from_record(&record))
}

pub(super) async fn statement(
    client: &AvClient,
    symbol: &str,
    function: &'static str,
    quarterly: bool,
) -> Result<Table, AvError> {
    let url = client.query_url(function, symbol);
    let resp = client.http().get(url).send().await?;
    let body = net::get_text(resp).await?;

    decode_statement(function, quarterly, &body)
}

fn decode_statement(
    function: &'static str,
    quarterly: bool,
    body: &str,
) -> Result<Table, AvError> {
    let parsed: StatementEnvelope =
        serde_json::from_str(body).map_err(|e| AvError::Data(format!("json parse error: {e}")))?;

    if let Some(err) = parsed.control.into_error() {
        return Err(err);
    }

    let (period, reports) = if quarterly {
        ("quarterlyReports", parsed.quarterly_reports)
    } else {
        ("annualReports", parsed.annual_reports)
    };
    let reports =
        reports.ok_or_else(|| AvError::Data(format!("{function}: missing {period}")))?;

    Ok(Table::from_records(&reports))
}

/// The pipeline's fundamentals leg: four sequential calls, first failure wins.
pub(super) async fn fetch_all(client: &AvClient, symbol: &str) -> Result<Fundamentals, AvError> {
    let overview = overview(client, symbol).await?;
    let balance_sheet = statement(client, symbol, "BALANCE_SHEET", true).await?;
    let income_statement = statement(client, symbol, "INCOME_STATEMENT", true).await?;
    let cash_flow = statement(client, symbol, "CASH_FLOW", true).await?;

    Ok(Fundamentals {
        overview,
        balance_sheet,
        income_statement,
        cash_flow,
    })
}
