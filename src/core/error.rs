use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum AvError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// Alpha Vantage rejected the call: invalid symbol, unknown function, or a
    /// bad API key. Carried in an `"Error Message"` body with HTTP 200.
    #[error("provider error: {0}")]
    Provider(String),

    /// The request hit the provider's throughput limit (a `"Note"` or
    /// `"Information"` body). Surfaced to the caller, never retried here.
    #[error("provider rate limit: {0}")]
    RateLimited(String),

    /// The data received was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A database connection or write failed.
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    /// The client was built without an API key.
    #[error("no API key configured")]
    MissingApiKey,
}
