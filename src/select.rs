//! Candidate merging, scoring, and best-favicon selection.
//!
//! Selection is a strict trust hierarchy before it is a score contest:
//! markup the site declared itself always outranks conventional-path
//! guesses, which always outrank third-party service lookups — a
//! low-scoring markup icon beats a high-scoring guess. Scores only decide
//! ties *within* the markup and path-guess groups; the service group has
//! its own fixed preference (Google at 32x32, then any Google, then list
//! order).

use std::collections::HashSet;

use url::Url;

use crate::types::{CandidateOrigin, FaviconCandidate, IconSize};

/// Drop candidates whose exact URL has already been seen, keeping the
/// first occurrence. Two URLs differing only in query string are distinct.
#[must_use]
pub fn dedupe_by_url(candidates: Vec<FaviconCandidate>) -> Vec<FaviconCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.url.clone()))
        .collect()
}

/// Pick the single best candidate from a merged, deduplicated pool.
///
/// Returns `None` only for an empty pool.
#[must_use]
pub fn best_candidate(candidates: &[FaviconCandidate]) -> Option<&FaviconCandidate> {
    let markup: Vec<&FaviconCandidate> = candidates
        .iter()
        .filter(|c| c.origin == CandidateOrigin::Markup)
        .collect();
    if !markup.is_empty() {
        return best_in_group(&markup);
    }

    let guessed: Vec<&FaviconCandidate> = candidates
        .iter()
        .filter(|c| c.origin == CandidateOrigin::PathGuess)
        .collect();
    if !guessed.is_empty() {
        return best_in_group(&guessed);
    }

    let services: Vec<&FaviconCandidate> = candidates
        .iter()
        .filter(|c| c.origin.is_service())
        .collect();
    best_from_services(&services)
}

/// Quality score for one candidate. Used only within the markup and
/// path-guess groups.
#[must_use]
pub fn score(candidate: &FaviconCandidate) -> u64 {
    let mut score = extension_score(&candidate.url);
    score += candidate.size.score();
    if candidate.label.contains("Apple Touch Icon") {
        score += 50;
    }
    score
}

fn best_in_group<'a>(group: &[&'a FaviconCandidate]) -> Option<&'a FaviconCandidate> {
    // First candidate with the max score wins; input order breaks ties.
    let mut best: Option<(&FaviconCandidate, u64)> = None;
    for candidate in group {
        let s = score(candidate);
        if best.is_none_or(|(_, best_score)| s > best_score) {
            best = Some((candidate, s));
        }
    }
    best.map(|(candidate, _)| candidate)
}

fn best_from_services<'a>(services: &[&'a FaviconCandidate]) -> Option<&'a FaviconCandidate> {
    let google_32 = services.iter().find(|c| {
        c.origin.service_name() == Some("Google") && c.size == IconSize::Pixels(32, 32)
    });
    if let Some(found) = google_32 {
        return Some(found);
    }

    if let Some(found) = services
        .iter()
        .find(|c| c.origin.service_name() == Some("Google"))
    {
        return Some(found);
    }

    services.first().copied()
}

/// File-extension component of the score, taken from the URL's final path
/// segment (query strings and fragments do not leak into the extension).
fn extension_score(url: &str) -> u64 {
    let extension = Url::parse(url).ok().and_then(|parsed| {
        parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back().map(str::to_string))
            .and_then(|segment| {
                segment
                    .rsplit_once('.')
                    .map(|(_, ext)| ext.to_ascii_lowercase())
            })
    });

    match extension.as_deref() {
        Some("png") => 100,
        Some("svg") => 90,
        Some("ico") => 80,
        _ => 0,
    }
}
