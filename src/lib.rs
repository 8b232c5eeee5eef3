//! # favscout
//!
//! Multi-source favicon discovery and ranking for websites.
//!
//! Given a URL or bare domain, favscout probes three independent sources
//! concurrently — conventional favicon paths on the site's origin, the
//! page's own `<link rel=icon>` markup (fetched through public CORS
//! relays), and third-party favicon lookup services — validates every
//! candidate with a bounded image probe, merges and deduplicates the
//! results, and scores them to pick the single most likely favicon.
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn example() -> favscout::Result<()> {
//! let discovery = favscout::discover("example.com").await?;
//!
//! match discovery.best() {
//!     Some(icon) => println!("{} ({}, {} via {})", icon.url, icon.label, icon.size, icon.origin),
//!     None => println!("no favicon found"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Selection model
//!
//! Candidates are grouped by provenance and the groups form a strict
//! trust hierarchy: markup the site declared itself always beats
//! conventional-path guesses, which always beat third-party services.
//! Scores (file extension, pixel count, Apple touch icon bonus) only
//! break ties within a group; the service group instead prefers Google
//! at 32x32, then any Google result, then catalog order.
//!
//! ## Failure model
//!
//! The pipeline favors partial results over total failure. Individual
//! probe failures silently drop their own candidate; relay outages
//! degrade markup extraction to an empty result; only unparseable input
//! is an error. "Nothing found" is a valid outcome
//! ([`Discovery::best`] returns `None`), not an error.

/// Error types and result alias
pub mod error;
/// Discovery orchestration and the public entry point
pub mod finder;
/// Classification labels derived from paths and markup attributes
pub mod label;
/// Bounded image-reachability probing
pub mod probe;
/// Candidate scoring and best-favicon selection
pub mod select;
/// The three candidate sources: markup, conventional paths, services
pub mod sources;
/// Core data types
pub mod types;

pub use error::{Error, Result};
pub use finder::{Discovery, FaviconFinder, discover, normalize_input};
pub use probe::ProbeClient;
pub use sources::{RelayEndpoint, RelayEnvelope, ServiceEndpoint};
pub use types::{CandidateOrigin, FaviconCandidate, IconSize};
