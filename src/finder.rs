//! Top-level favicon discovery orchestration.
//!
//! [`FaviconFinder`] normalizes the user's input, fans out to the three
//! candidate sources concurrently, merges and deduplicates what they
//! return, and hands back a [`Discovery`] whose [`Discovery::best`] is
//! the single answer a presentation layer should show.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::probe::ProbeClient;
use crate::select;
use crate::sources::{
    RelayEndpoint, ServiceEndpoint, default_relays, default_services, icons_from_markup,
    icons_from_paths, icons_from_services,
};
use crate::types::FaviconCandidate;
use crate::{Error, Result};

/// Result of one discovery run.
///
/// Holds the full deduplicated candidate pool; an empty pool is the
/// "nothing found" outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discovery {
    /// The normalized URL that was probed.
    pub url: String,
    /// All validated candidates, markup first, then path guesses, then
    /// services, deduplicated by exact URL.
    pub candidates: Vec<FaviconCandidate>,
}

impl Discovery {
    /// The single best candidate, or `None` when nothing was found.
    #[must_use]
    pub fn best(&self) -> Option<&FaviconCandidate> {
        select::best_candidate(&self.candidates)
    }
}

/// Multi-source favicon discovery pipeline.
pub struct FaviconFinder {
    probe: ProbeClient,
    relays: Vec<RelayEndpoint>,
    services: Vec<ServiceEndpoint>,
}

impl FaviconFinder {
    /// Creates a finder with the default 5-second probe timeout and the
    /// built-in relay and service catalogs.
    pub fn new() -> Result<Self> {
        Ok(Self {
            probe: ProbeClient::new()?,
            relays: default_relays(),
            services: default_services(),
        })
    }

    /// Creates a finder with a custom probe timeout (primarily for tests).
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self {
            probe: ProbeClient::with_timeout(timeout)?,
            relays: default_relays(),
            services: default_services(),
        })
    }

    /// Replace the CORS relay list.
    #[must_use]
    pub fn with_relays(mut self, relays: Vec<RelayEndpoint>) -> Self {
        self.relays = relays;
        self
    }

    /// Replace the third-party service catalog.
    #[must_use]
    pub fn with_services(mut self, services: Vec<ServiceEndpoint>) -> Self {
        self.services = services;
        self
    }

    /// Discover favicons for a URL or bare domain.
    ///
    /// The input is normalized (an `https://` scheme is prefixed when
    /// none is present) and validated before any probing; the three
    /// sources then run concurrently and their settled results are merged
    /// markup-first and deduplicated by exact URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when the input cannot be parsed even
    /// after normalization. Source-level failures never surface here: a
    /// source that finds nothing contributes an empty list.
    #[instrument(skip_all, fields(input = %input))]
    pub async fn discover(&self, input: &str) -> Result<Discovery> {
        let target = normalize_input(input)?;
        let hostname = target.host_str().unwrap_or_default().to_string();

        let (from_markup, from_paths, from_services) = tokio::join!(
            icons_from_markup(&self.probe, &self.relays, &target),
            icons_from_paths(&self.probe, &target),
            icons_from_services(&self.probe, &self.services, &hostname),
        );

        debug!(
            markup = from_markup.len(),
            paths = from_paths.len(),
            services = from_services.len(),
            "sources settled"
        );

        // Concatenation order doubles as dedupe priority: the markup copy
        // of a URL wins over a path-guessed or service copy.
        let mut pool = from_markup;
        pool.extend(from_paths);
        pool.extend(from_services);

        Ok(Discovery {
            url: target.into(),
            candidates: select::dedupe_by_url(pool),
        })
    }
}

/// Discover favicons for a URL or bare domain using a default finder.
///
/// Convenience wrapper over [`FaviconFinder::discover`].
pub async fn discover(input: &str) -> Result<Discovery> {
    FaviconFinder::new()?.discover(input).await
}

/// Normalize user input into a probe-ready URL.
///
/// Bare domains get an `https://` prefix; anything that still fails to
/// parse is an input validation error, reported before probing starts.
pub fn normalize_input(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    Url::parse(&with_scheme).map_err(|source| Error::InvalidUrl {
        input: with_scheme.clone(),
        source,
    })
}
