use super::traits::FetchOutcome;
use reqwest::Client;
use tracing::{error, info, warn};
use url::Url;

/// Issues the single bounded-timeout GET for a feed. The timeout lives on
/// the shared client; a feed that cannot be retrieved is reported as
/// `Unavailable` rather than raised.
pub async fn fetch(client: &Client, url: &Url, name: &str) -> FetchOutcome {
    info!("Fetching '{}' from {}", name, url);

    let resp = match client.get(url.clone()).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Failed to fetch {}: {}", url, e);
            return FetchOutcome::Unavailable;
        }
    };

    if !resp.status().is_success() {
        warn!("'{}' answered {}", name, resp.status());
        return FetchOutcome::Unavailable;
    }

    match resp.text().await {
        Ok(text) => FetchOutcome::Retrieved(text),
        Err(e) => {
            error!("Failed to read body from {}: {}", url, e);
            FetchOutcome::Unavailable
        }
    }
}
