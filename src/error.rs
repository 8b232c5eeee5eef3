//! Error types and result alias for favscout operations.
//!
//! The discovery pipeline favors partial results over total failure: probe
//! failures and relay outages are absorbed inside the pipeline and never
//! surface here. Only two things are worth an `Err` to the caller — input
//! that cannot be turned into a URL, and a transport layer that could not
//! be constructed at all.

use thiserror::Error;

/// The main error type for favscout operations.
///
/// "No favicon found" is deliberately not a variant: an empty discovery is
/// a valid outcome and is represented by [`crate::Discovery::best`]
/// returning `None`.
#[derive(Error, Debug)]
pub enum Error {
    /// The user-supplied URL or domain could not be parsed, even after
    /// `https://` normalization. Reported before any probing starts.
    #[error("invalid URL '{input}': {source}")]
    InvalidUrl {
        /// The input as received (post-normalization).
        input: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// An HTTP client could not be built, or a network operation failed at
    /// the orchestration level. Per-candidate probe failures never take
    /// this path; they only remove the one candidate they belong to.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Convenience result type for favscout operations.
pub type Result<T> = std::result::Result<T, Error>;
