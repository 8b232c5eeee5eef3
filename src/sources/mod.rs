//! Favicon candidate sources.
//!
//! Three independent sources feed the discovery pipeline, probed
//! concurrently by [`crate::FaviconFinder`]:
//!
//! 1. [`markup`] — the page's own `<link rel=icon>` declarations, fetched
//!    through CORS relays and parsed out of the HTML.
//! 2. [`paths`] — conventional favicon locations guessed against the
//!    site's origin.
//! 3. [`services`] — third-party favicon lookup services.
//!
//! Every source validates its candidates through the same settle-all
//! image probe before returning them; a source that finds nothing returns
//! an empty list, never an error.

pub mod markup;
pub mod paths;
pub mod services;

pub use markup::{RelayEnvelope, RelayEndpoint, default_relays, icons_from_markup};
pub use paths::{conventional_paths, icons_from_paths};
pub use services::{ServiceEndpoint, default_services, icons_from_services};
