use serde::Deserialize;

use crate::core::AvError;

/* ---------------- Shared provider-payload plumbing ---------------- */

/// Control fields Alpha Vantage mixes into any payload, always with HTTP 200:
/// `"Error Message"` for rejected calls, `"Note"`/`"Information"` for the
/// free-tier throughput limit.
#[derive(Deserialize, Default)]
pub(crate) struct ControlFields {
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
    #[serde(rename = "Information")]
    pub(crate) information: Option<String>,
}

impl ControlFields {
    /// The error a control payload stands for, if any.
    pub(crate) fn into_error(self) -> Option<AvError> {
        if let Some(msg) = self.error_message {
            return Some(AvError::Provider(msg));
        }
        if let Some(msg) = self.note.or(self.information) {
            return Some(AvError::RateLimited(msg));
        }
        None
    }
}

/* --- numeric fields arrive as strings ("372.5000", "21236000") --- */

pub(crate) fn parse_f64(field: &'static str, value: &str) -> Result<f64, AvError> {
    value
        .trim()
        .parse()
        .map_err(|_| AvError::Data(format!("non-numeric '{field}': '{value}'")))
}

pub(crate) fn parse_u64(field: &'static str, value: &str) -> Result<u64, AvError> {
    value
        .trim()
        .parse()
        .map_err(|_| AvError::Data(format!("non-integer '{field}': '{value}'")))
}
