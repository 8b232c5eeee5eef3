//! Conventional-path favicon guessing.
//!
//! Most sites keep their icons at a handful of well-known locations.
//! This source builds that list for a target URL — standard names, sized
//! variants, Apple touch icons, common asset directories, and variants
//! rooted at the URL's existing path segment — probes every path against
//! the site's origin, and keeps whatever actually loads.

use std::collections::HashSet;

use tracing::debug;
use url::Url;

use crate::probe::ProbeClient;
use crate::types::{CandidateOrigin, FaviconCandidate, IconSize};
use crate::{label, select};

/// Paths probed on every origin, before per-URL variants.
const COMMON_PATHS: [&str; 30] = [
    // Standard names
    "/favicon.ico",
    "/favicon.png",
    "/favicon.svg",
    // Apple touch icons
    "/apple-touch-icon.png",
    "/apple-touch-icon-precomposed.png",
    "/apple-touch-icon-120x120.png",
    "/apple-touch-icon-180x180.png",
    "/apple-touch-icon-152x152.png",
    "/apple-touch-icon-144x144.png",
    "/apple-touch-icon-114x114.png",
    "/apple-touch-icon-72x72.png",
    "/apple-touch-icon-57x57.png",
    // Sized favicons
    "/favicon-32x32.png",
    "/favicon-16x16.png",
    "/favicon-96x96.png",
    "/favicon-128x128.png",
    "/favicon-192x192.png",
    "/favicon-256x256.png",
    // Common asset directories
    "/img/favicon.ico",
    "/img/favicon.png",
    "/images/favicon.ico",
    "/images/favicon.png",
    "/assets/favicon.ico",
    "/assets/favicon.png",
    "/static/favicon.ico",
    "/static/favicon.png",
    "/public/favicon.ico",
    "/public/favicon.png",
    "/res/favicon.ico",
    "/resources/favicon.ico",
];

/// Build the deduplicated list of conventional paths for a target URL.
///
/// When the URL carries a path segment (e.g. `/docs`), variants rooted at
/// that segment are appended after the fixed list.
#[must_use]
pub fn conventional_paths(target: &Url) -> Vec<String> {
    let base_path = target.path().trim_end_matches('/');

    let mut paths: Vec<String> = COMMON_PATHS.iter().map(ToString::to_string).collect();

    for suffix in [
        "/favicon.ico",
        "/img/favicon.ico",
        "/images/favicon.ico",
        "/assets/favicon.ico",
        "/static/favicon.ico",
    ] {
        paths.push(format!("{base_path}{suffix}"));
    }

    let mut seen = HashSet::new();
    paths.retain(|path| seen.insert(path.clone()));
    paths
}

/// Probe conventional favicon paths on the target's origin.
///
/// Each surviving candidate carries a filename-derived label and a size
/// regex-extracted from the path. Probe failures only drop their own
/// path; this function itself never fails.
pub async fn icons_from_paths(probe: &ProbeClient, target: &Url) -> Vec<FaviconCandidate> {
    let origin = target.origin().ascii_serialization();

    let candidates: Vec<FaviconCandidate> = conventional_paths(target)
        .into_iter()
        .map(|path| FaviconCandidate {
            url: format!("{origin}{path}"),
            label: label::from_path(&path),
            size: IconSize::from_path(&path),
            origin: CandidateOrigin::PathGuess,
        })
        .collect();

    let found = probe.keep_reachable(candidates).await;
    debug!(count = found.len(), "conventional-path probing settled");
    select::dedupe_by_url(found)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn path_list_is_deduplicated() {
        let target = Url::parse("https://example.com/").unwrap();
        let paths = conventional_paths(&target);

        let mut seen = HashSet::new();
        for p in &paths {
            assert!(seen.insert(p.clone()), "duplicate path {p}");
        }
        // Root URL: the base-path variants collapse into the fixed list.
        assert!(paths.contains(&"/favicon.ico".to_string()));
    }

    #[test]
    fn path_list_includes_base_path_variants() {
        let target = Url::parse("https://example.com/docs/").unwrap();
        let paths = conventional_paths(&target);

        assert!(paths.contains(&"/docs/favicon.ico".to_string()));
        assert!(paths.contains(&"/docs/assets/favicon.ico".to_string()));
    }

    #[tokio::test]
    async fn finds_and_labels_working_paths() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/favicon-32x32.png"))
            .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/png"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let probe = ProbeClient::new().unwrap();
        let target = Url::parse(&server.uri()).unwrap();
        let found = icons_from_paths(&probe, &target).await;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].label, "Favicon 32x32");
        assert_eq!(found[0].size, IconSize::Pixels(32, 32));
        assert_eq!(found[0].origin, CandidateOrigin::PathGuess);
        assert!(found[0].url.ends_with("/favicon-32x32.png"));
    }

    #[tokio::test]
    async fn yields_empty_when_nothing_loads() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let probe = ProbeClient::new().unwrap();
        let target = Url::parse(&server.uri()).unwrap();
        assert!(icons_from_paths(&probe, &target).await.is_empty());
    }
}
