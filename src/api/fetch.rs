// Page fetch for title scraping
// Browser User-Agent and a hard timeout; bodies are consumed as text

use tracing::debug;

use crate::models::error::ShareError;
use crate::utils::config::{FETCH_TIMEOUT, USER_AGENT};

/// Fetch a page body for title extraction
/// Non-success statuses are failures like any other
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, ShareError> {
    debug!("Fetching page for title: {}", url);

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.text().await?)
}
