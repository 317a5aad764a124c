use super::fetch::fetch;
use crate::domain::Domain;
use reqwest::Client;
use tracing::info;
use url::Url;

/// Result of the single retrieval attempt against a feed. Transport errors,
/// timeouts and non-success statuses are all `Unavailable`; callers observe
/// availability without an error path.
#[derive(Debug)]
pub enum FetchOutcome {
    Retrieved(String),
    Unavailable,
}

/// What one feed contributed to a run.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub name: String,
    pub url: String,
    pub available: bool,
    pub domains: usize,
}

/// One remote feed and its line-level parsing rules.
#[async_trait::async_trait]
pub trait HostSource: Send + Sync {
    fn name(&self) -> &str;

    fn url(&self) -> &Url;

    /// Feed-specific filter and extraction for a single line of the body.
    /// Comments, markers and lines that fail normalization all map to `None`.
    fn parse_line(&self, line: &str) -> Option<Domain>;

    /// Fetches the feed once and runs every line through `parse_line`.
    /// An unavailable feed contributes an empty list, never an error.
    async fn collect(&self, client: &Client) -> (Vec<Domain>, SourceReport) {
        let (available, text) = match fetch(client, self.url(), self.name()).await {
            FetchOutcome::Retrieved(text) => (true, text),
            FetchOutcome::Unavailable => (false, String::new()),
        };

        let domains: Vec<Domain> = text.lines().filter_map(|l| self.parse_line(l)).collect();

        info!("Parsed {} entries from '{}'", domains.len(), self.name());

        let report = SourceReport {
            name: self.name().to_string(),
            url: self.url().to_string(),
            available,
            domains: domains.len(),
        };

        (domains, report)
    }
}
