//! Centralized constants for the default endpoint and UA.

pub(crate) const USER_AGENT: &str = concat!("alphavantage-rs/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage routes every call through a single query endpoint;
/// the operation is selected with the `function` parameter.
pub(crate) const DEFAULT_BASE_QUERY: &str = "https://www.alphavantage.co/query";
