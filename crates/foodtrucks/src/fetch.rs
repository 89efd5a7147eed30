use crate::prelude::*;

/// Perform a single GET request and return the whole body as text
///
/// Connection failures, non-success statuses and body read failures all
/// surface as [`Error::Network`]. There is no retry.
pub async fn fetch_body(client: &reqwest::Client, url: &str) -> Result<String> {
    log::debug!("GET {url}");

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| Error::Network(f!("Failed to reach {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(f!("{url} returned HTTP {status}")).into());
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::Network(f!("Failed to read response from {url}: {e}")))?;

    log::debug!("Received {} bytes from {url}", body.len());

    Ok(body)
}
