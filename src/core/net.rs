use crate::core::AvError;

/// Read a successful response body as text; a non-2xx status becomes
/// [`AvError::Status`] before the body is consumed.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, AvError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(AvError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp.text().await?)
}
