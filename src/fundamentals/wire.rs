use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::wire::ControlFields;

/* ---------------- Serde mapping (only what we need) ---------------- */

/// `BALANCE_SHEET`, `INCOME_STATEMENT` and `CASH_FLOW` share one envelope.
/// Report entries stay as raw JSON objects: the column set is whatever the
/// provider returns, so the shaping layer flattens them without a schema.
#[derive(Deserialize)]
pub(crate) struct StatementEnvelope {
    #[serde(flatten)]
    pub(crate) control: ControlFields,

    #[serde(rename = "annualReports")]
    pub(crate) annual_reports: Option<Vec<Map<String, Value>>>,
    #[serde(rename = "quarterlyReports")]
    pub(crate) quarterly_reports: Option<Vec<Map<String, Value>>>,
}

// OVERVIEW has no wire struct: the whole body is the record, so the api layer
// reads it as a raw map after checking the control fields.
