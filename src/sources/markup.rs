//! Favicon extraction from a page's own HTML markup.
//!
//! Direct cross-origin fetches of arbitrary pages are not generally
//! possible from the environments this library targets, so the raw HTML
//! is retrieved through a fixed priority list of public CORS relays. The
//! first relay that answers wins; one of them wraps the body in a JSON
//! envelope that has to be unwrapped first. If every relay fails, this
//! source degrades to an empty result — the other sources can still find
//! candidates, so relay outage is a warning, not an error.
//!
//! Once HTML is in hand, `<link>` elements whose `rel` contains `icon`
//! (which covers `apple-touch-icon`) are collected, their `href` values
//! resolved against the page's origin, and the results validated with the
//! shared image probe.

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;
use url::form_urlencoded::byte_serialize;

use crate::probe::ProbeClient;
use crate::types::{CandidateOrigin, FaviconCandidate, IconSize};
use crate::{label, select};

/// How a relay wraps the fetched page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayEnvelope {
    /// The body is the raw HTML.
    Raw,
    /// The body is a JSON object with the HTML under a `contents` field.
    JsonContents,
}

/// One CORS relay endpoint.
///
/// `template` contains a `{target}` placeholder; when `encode_target` is
/// set the target URL is percent-encoded before substitution.
#[derive(Debug, Clone)]
pub struct RelayEndpoint {
    /// URL template with a `{target}` placeholder.
    pub template: String,
    /// Body format this relay answers with.
    pub envelope: RelayEnvelope,
    /// Whether the target URL must be percent-encoded into the template.
    pub encode_target: bool,
}

impl RelayEndpoint {
    /// Build the relay URL for a target page.
    #[must_use]
    pub fn url_for(&self, target: &str) -> String {
        let substituted = if self.encode_target {
            byte_serialize(target.as_bytes()).collect::<String>()
        } else {
            target.to_string()
        };
        self.template.replace("{target}", &substituted)
    }
}

/// The built-in relay list, tried in priority order.
#[must_use]
pub fn default_relays() -> Vec<RelayEndpoint> {
    vec![
        RelayEndpoint {
            template: "https://api.allorigins.win/get?url={target}".to_string(),
            envelope: RelayEnvelope::JsonContents,
            encode_target: true,
        },
        RelayEndpoint {
            template: "https://corsproxy.io/?{target}".to_string(),
            envelope: RelayEnvelope::Raw,
            encode_target: true,
        },
        RelayEndpoint {
            template: "https://cors-anywhere.herokuapp.com/{target}".to_string(),
            envelope: RelayEnvelope::Raw,
            encode_target: false,
        },
    ]
}

/// Extract favicon candidates declared in the page's markup.
///
/// Never fails: relay exhaustion and unparseable responses all degrade to
/// an empty list.
pub async fn icons_from_markup(
    probe: &ProbeClient,
    relays: &[RelayEndpoint],
    target: &Url,
) -> Vec<FaviconCandidate> {
    let Some(html) = fetch_page_html(probe.http(), relays, target.as_str()).await else {
        return Vec::new();
    };

    let declared = extract_icon_links(&html, target);
    let found = probe.keep_reachable(declared).await;
    debug!(count = found.len(), "markup-declared icons settled");
    select::dedupe_by_url(found)
}

/// Fetch a page's raw HTML through the relay list, first success wins.
async fn fetch_page_html(client: &Client, relays: &[RelayEndpoint], target: &str) -> Option<String> {
    for relay in relays {
        let relay_url = relay.url_for(target);

        let response = match client.get(&relay_url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!(relay = %relay_url, status = %response.status(), "relay rejected request");
                continue;
            },
            Err(err) => {
                debug!(relay = %relay_url, error = %err, "relay unreachable");
                continue;
            },
        };

        match relay.envelope {
            RelayEnvelope::Raw => match response.text().await {
                Ok(body) => return Some(body),
                Err(err) => {
                    debug!(relay = %relay_url, error = %err, "relay body read failed");
                },
            },
            RelayEnvelope::JsonContents => {
                match response.json::<serde_json::Value>().await {
                    Ok(envelope) => {
                        if let Some(contents) = envelope.get("contents").and_then(|v| v.as_str()) {
                            return Some(contents.to_string());
                        }
                        debug!(relay = %relay_url, "relay envelope missing contents field");
                    },
                    Err(err) => {
                        debug!(relay = %relay_url, error = %err, "relay envelope decode failed");
                    },
                }
            },
        }
    }

    warn!(%target, "all CORS relays failed; skipping HTML extraction");
    None
}

/// Parse HTML and collect `<link rel*=icon>` declarations as candidates.
fn extract_icon_links(html: &str, page: &Url) -> Vec<FaviconCandidate> {
    // SAFETY: selector is a compile-time constant that is known to be valid.
    #[allow(clippy::unwrap_used)]
    let selector = Selector::parse(r#"link[rel*="icon"]"#).unwrap();

    let document = Html::parse_document(html);
    let origin = page.origin().ascii_serialization();

    let mut candidates = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let rel = element.value().attr("rel").unwrap_or_default();
        let sizes = element.value().attr("sizes").unwrap_or_default();
        let mime = element.value().attr("type").unwrap_or_default();

        candidates.push(FaviconCandidate {
            url: resolve_href(href, page, &origin),
            label: label::from_markup(rel, sizes, mime),
            size: IconSize::from_markup(sizes, mime),
            origin: CandidateOrigin::Markup,
        });
    }
    candidates
}

/// Resolve an `href` to an absolute URL against the page's origin.
///
/// This join is deliberately origin-rooted: a bare relative href is
/// attached to the origin, not to the current page path.
fn resolve_href(href: &str, page: &Url, origin: &str) -> String {
    if let Some(rest) = href.strip_prefix("//") {
        return format!("{}://{rest}", page.scheme());
    }
    if href.starts_with('/') {
        return format!("{origin}{href}");
    }
    if href.starts_with("http") {
        return href.to_string();
    }
    format!("{origin}/{href}")
}
