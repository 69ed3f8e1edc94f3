use crate::error::Result;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Rate-limited page fetcher. Every request is preceded by a fixed
/// politeness delay; there is no adaptive backoff and no retry.
pub struct Fetcher {
    client: Client,
    delay: Duration,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Lorecrawl/0.1 (https://github.com/trapdoorsec/lorecrawl)")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            delay: Duration::from_secs(1),
        }
    }

    /// Overrides the politeness delay. Tests run with zero.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fetches a single URL, returning the response body. `None` means
    /// "skip this node": the failure has already been logged and the
    /// crawl must carry on without it.
    pub async fn get(&self, url: &str) -> Option<String> {
        match self.try_get(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                None
            }
        }
    }

    async fn try_get(&self, url: &str) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
