//! Reachability probing for favicon URLs.
//!
//! Every source in the pipeline runs its candidates through the same
//! validation: fetch the URL with a bounded wait and keep it only if the
//! server answered with something that could plausibly be an image.
//! Batches use settle-all semantics — each probe succeeds or fails on its
//! own, and one hung or broken URL never affects its siblings.

use std::time::Duration;

use futures::future::join_all;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::types::FaviconCandidate;
use crate::{Error, Result};

/// Default bound on a single probe (also the whole-request timeout of the
/// underlying client, so a hung connection is cancelled, not leaked).
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client configured for image probing.
pub struct ProbeClient {
    client: Client,
}

impl ProbeClient {
    /// Creates a probe client with the default 5-second per-probe timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(PROBE_TIMEOUT)
    }

    /// Creates a probe client with a custom timeout (primarily for tests).
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("favscout/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client })
    }

    /// The underlying HTTP client, shared with the relay fetcher so the
    /// whole pipeline carries one user agent and timeout policy.
    #[must_use]
    pub const fn http(&self) -> &Client {
        &self.client
    }

    /// Check whether `url` serves a loadable image.
    ///
    /// Success is a 2xx response whose `Content-Type`, when present, is
    /// not `text/html` — sites that answer every path with a styled 404
    /// page would otherwise validate every guess. Timeouts and transport
    /// errors count as failures; there are no retries.
    pub async fn probe_image(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => {
                if !response.status().is_success() {
                    debug!(%url, status = %response.status(), "probe rejected by status");
                    return false;
                }
                let html_body = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|ct| ct.starts_with("text/html"));
                if html_body {
                    debug!(%url, "probe rejected: text/html body");
                }
                !html_body
            },
            Err(err) => {
                debug!(%url, error = %err, "probe failed");
                false
            },
        }
    }

    /// Validate a batch of candidates concurrently, keeping only the
    /// reachable ones in their original order.
    pub async fn keep_reachable(
        &self,
        candidates: Vec<FaviconCandidate>,
    ) -> Vec<FaviconCandidate> {
        let probes = candidates.into_iter().map(|candidate| async move {
            if self.probe_image(&candidate.url).await {
                Some(candidate)
            } else {
                None
            }
        });

        join_all(probes).await.into_iter().flatten().collect()
    }
}
