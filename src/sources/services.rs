//! Third-party favicon lookup services.
//!
//! Public services index favicons by hostname and keep serving them even
//! when the site itself blocks direct probing, which makes this the
//! lowest-trust but most reliable source. Endpoints are blueprints with a
//! `{host}` placeholder so tests can point the catalog at a mock server.

use tracing::debug;

use crate::probe::ProbeClient;
use crate::types::{CandidateOrigin, FaviconCandidate, IconSize};

/// One third-party favicon service endpoint.
#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    /// Short service name, e.g. "Google".
    pub service: String,
    /// Display label for candidates from this endpoint.
    pub label: String,
    /// URL template with a `{host}` placeholder.
    pub template: String,
    /// Size this endpoint serves, when the service documents one.
    pub size: IconSize,
}

impl ServiceEndpoint {
    /// Build the lookup URL for a hostname.
    #[must_use]
    pub fn url_for(&self, hostname: &str) -> String {
        self.template.replace("{host}", hostname)
    }
}

fn google_endpoint(px: u32) -> ServiceEndpoint {
    ServiceEndpoint {
        service: "Google".to_string(),
        label: format!("Google Favicon Service ({px}px)"),
        template: format!("https://www.google.com/s2/favicons?domain={{host}}&sz={px}"),
        size: IconSize::Pixels(px, px),
    }
}

/// The built-in service catalog.
#[must_use]
pub fn default_services() -> Vec<ServiceEndpoint> {
    vec![
        google_endpoint(16),
        google_endpoint(32),
        google_endpoint(64),
        google_endpoint(128),
        ServiceEndpoint {
            service: "Favicon.io".to_string(),
            label: "Favicon.io Service".to_string(),
            template: "https://favicon.io/favicon-ico/{host}/".to_string(),
            size: IconSize::Unknown,
        },
        ServiceEndpoint {
            service: "DuckDuckGo".to_string(),
            label: "DuckDuckGo Service".to_string(),
            template: "https://icons.duckduckgo.com/ip3/{host}.ico".to_string(),
            size: IconSize::Unknown,
        },
        ServiceEndpoint {
            service: "Yandex".to_string(),
            label: "Yandex Service".to_string(),
            template: "https://favicon.yandex.net/favicon/{host}".to_string(),
            size: IconSize::Unknown,
        },
    ]
}

/// Probe the service catalog for a hostname, keeping endpoints that
/// actually serve an image.
pub async fn icons_from_services(
    probe: &ProbeClient,
    services: &[ServiceEndpoint],
    hostname: &str,
) -> Vec<FaviconCandidate> {
    let candidates: Vec<FaviconCandidate> = services
        .iter()
        .map(|endpoint| FaviconCandidate {
            url: endpoint.url_for(hostname),
            label: endpoint.label.clone(),
            size: endpoint.size,
            origin: CandidateOrigin::Service {
                name: endpoint.service.clone(),
            },
        })
        .collect();

    let found = probe.keep_reachable(candidates).await;
    debug!(count = found.len(), "service probing settled");
    found
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn endpoint_substitutes_hostname() {
        let endpoint = google_endpoint(32);
        assert_eq!(
            endpoint.url_for("example.com"),
            "https://www.google.com/s2/favicons?domain=example.com&sz=32"
        );
    }

    #[test]
    fn catalog_covers_known_services() {
        let catalog = default_services();
        let names: Vec<&str> = catalog.iter().map(|e| e.service.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Google",
                "Google",
                "Google",
                "Google",
                "Favicon.io",
                "DuckDuckGo",
                "Yandex"
            ]
        );
        assert!(
            catalog
                .iter()
                .any(|e| e.service == "Google" && e.size == IconSize::Pixels(32, 32))
        );
    }

    #[tokio::test]
    async fn keeps_only_working_endpoints() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/s2/favicons"))
            .and(query_param("domain", "example.com"))
            .and(query_param("sz", "32"))
            .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/png"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let services = vec![
            ServiceEndpoint {
                service: "Google".to_string(),
                label: "Google Favicon Service (32px)".to_string(),
                template: format!("{}/s2/favicons?domain={{host}}&sz=32", server.uri()),
                size: IconSize::Pixels(32, 32),
            },
            ServiceEndpoint {
                service: "Yandex".to_string(),
                label: "Yandex Service".to_string(),
                template: format!("{}/yandex/{{host}}", server.uri()),
                size: IconSize::Unknown,
            },
        ];

        let probe = ProbeClient::new().unwrap();
        let found = icons_from_services(&probe, &services, "example.com").await;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].origin.service_name(), Some("Google"));
        assert_eq!(found[0].label, "Google Favicon Service (32px)");
        assert_eq!(found[0].size, IconSize::Pixels(32, 32));
    }
}
