//! Core data types for favicon discovery.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regex for `WxH` size tokens embedded in paths and attributes.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static SIZE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)x(\d+)").unwrap());

/// A single discovered favicon, validated as reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaviconCandidate {
    /// Absolute, resolved location of the icon resource.
    pub url: String,
    /// Human-readable classification, e.g. "Apple Touch Icon 180x180".
    pub label: String,
    /// Pixel dimensions, the scalable sentinel, or unknown.
    pub size: IconSize,
    /// Where this candidate came from.
    pub origin: CandidateOrigin,
}

/// Pixel dimensions of an icon, when they can be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconSize {
    /// A concrete raster size, width by height.
    Pixels(u32, u32),
    /// A scalable vector icon; effectively any size.
    Scalable,
    /// No size information was available.
    Unknown,
}

impl IconSize {
    /// Extract a `WxH` token from a path or URL, defaulting to unknown.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::parse_token(path).unwrap_or(Self::Unknown)
    }

    /// Interpret a markup `sizes` attribute together with a MIME `type`
    /// hint. A parseable `WxH` wins; any other non-empty `sizes` value
    /// (e.g. `"any"`) carries no usable dimensions; only when `sizes` is
    /// absent does the MIME type get a say (SVG means scalable).
    #[must_use]
    pub fn from_markup(sizes: &str, mime: &str) -> Self {
        if !sizes.is_empty() {
            return Self::parse_token(sizes).unwrap_or(Self::Unknown);
        }
        if mime.contains("svg") {
            return Self::Scalable;
        }
        Self::Unknown
    }

    fn parse_token(text: &str) -> Option<Self> {
        let caps = SIZE_TOKEN_RE.captures(text)?;
        let w = caps.get(1)?.as_str().parse().ok()?;
        let h = caps.get(2)?.as_str().parse().ok()?;
        Some(Self::Pixels(w, h))
    }

    /// Scoring weight of the size alone: scalable beats any raster size,
    /// raster sizes score their raw pixel count, unknown scores nothing.
    #[must_use]
    pub const fn score(self) -> u64 {
        match self {
            Self::Scalable => 1000,
            Self::Pixels(w, h) => w as u64 * h as u64,
            Self::Unknown => 0,
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(w, h) => write!(f, "{w}x{h}"),
            Self::Scalable => write!(f, "SVG"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Provenance of a discovered candidate.
///
/// The variants form a trust hierarchy used by the selector: markup the
/// site itself declared, then conventional-path guesses, then third-party
/// lookup services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CandidateOrigin {
    /// Declared by the page's own `<link rel=icon>` markup.
    Markup,
    /// Guessed from a conventional path on the site's origin.
    PathGuess,
    /// Returned by a named third-party favicon service.
    Service {
        /// The service's short name, e.g. "Google".
        name: String,
    },
}

impl CandidateOrigin {
    /// True when the candidate came from a third-party service.
    #[must_use]
    pub const fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// The service name, when there is one.
    #[must_use]
    pub fn service_name(&self) -> Option<&str> {
        match self {
            Self::Service { name } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for CandidateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup => write!(f, "HTML markup"),
            Self::PathGuess => write!(f, "conventional path"),
            Self::Service { name } => write!(f, "{name} service"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn size_from_path_extracts_token() {
        assert_eq!(
            IconSize::from_path("/apple-touch-icon-180x180.png"),
            IconSize::Pixels(180, 180)
        );
        assert_eq!(IconSize::from_path("/favicon.ico"), IconSize::Unknown);
    }

    #[test]
    fn size_from_markup_prefers_sizes_attribute() {
        assert_eq!(
            IconSize::from_markup("32x32", "image/png"),
            IconSize::Pixels(32, 32)
        );
        // A non-WxH sizes value beats the MIME hint, even for SVG.
        assert_eq!(
            IconSize::from_markup("any", "image/svg+xml"),
            IconSize::Unknown
        );
        assert_eq!(
            IconSize::from_markup("", "image/svg+xml"),
            IconSize::Scalable
        );
        assert_eq!(IconSize::from_markup("", "image/png"), IconSize::Unknown);
    }

    #[test]
    fn size_display_round_trips_documented_forms() {
        assert_eq!(IconSize::Pixels(64, 64).to_string(), "64x64");
        assert_eq!(IconSize::Scalable.to_string(), "SVG");
        assert_eq!(IconSize::Unknown.to_string(), "unknown");
    }

    #[test]
    fn size_score_ordering() {
        assert!(IconSize::Scalable.score() > IconSize::Pixels(31, 31).score());
        assert!(IconSize::Pixels(64, 64).score() > IconSize::Pixels(32, 32).score());
        assert_eq!(IconSize::Unknown.score(), 0);
    }

    #[test]
    fn origin_display_describes_provenance() {
        assert_eq!(CandidateOrigin::Markup.to_string(), "HTML markup");
        assert_eq!(CandidateOrigin::PathGuess.to_string(), "conventional path");
        assert_eq!(
            CandidateOrigin::Service {
                name: "Google".to_string()
            }
            .to_string(),
            "Google service"
        );
    }

    #[test]
    fn origin_service_name() {
        let origin = CandidateOrigin::Service {
            name: "DuckDuckGo".to_string(),
        };
        assert_eq!(origin.service_name(), Some("DuckDuckGo"));
        assert!(origin.is_service());
        assert_eq!(CandidateOrigin::Markup.service_name(), None);
    }
}
