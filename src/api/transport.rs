//! Authenticated HTTP transport for the Nimbus v2 API

use std::sync::Mutex;
use std::time::Duration;

use log::debug;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::config::api;
use crate::error::{Error, Result};

use super::meta::{parse_link_header, PageLinks, RateLimit};

/// One decoded HTTP exchange: body plus extracted metadata
#[derive(Debug, Clone)]
pub struct Envelope {
    /// HTTP status code
    pub status: u16,
    /// Decoded response body (`Null` for empty bodies)
    pub body: Value,
    /// Rate budget from this response, when the headers carried one
    pub rate: Option<RateLimit>,
    /// Pagination relations from the `Link` header and/or body
    pub links: PageLinks,
    /// `monitor` link for long-running action endpoints
    pub monitor: Option<String>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Nimbus API client
///
/// Owns the connection pool and the process-wide rate budget. Resource
/// facades borrow it; one request is in flight at a time, the mutex on the
/// rate budget exists only for interior mutability.
pub struct Transport {
    client: Client,
    token: String,
    base_url: String,
    rate: Mutex<Option<RateLimit>>,
}

impl Transport {
    /// Create a transport with pooled connections and fixed timeouts
    pub fn new(token: String, base_url: String) -> Self {
        let client = Client::builder()
            .user_agent(format!("nimbusctl/{}", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate: Mutex::new(None),
        }
    }

    /// The configured base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Most recently observed rate budget, if any response carried one
    pub fn rate(&self) -> Option<RateLimit> {
        self.rate.lock().ok().and_then(|guard| guard.clone())
    }

    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
    }

    /// Perform one exchange and return the envelope regardless of status.
    ///
    /// `path` is relative to the base URL and must start with `/`. The body,
    /// when present, is serialized as JSON; request models skip `None`
    /// fields so PATCH-style endpoints leave unspecified fields untouched.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Envelope> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {} (query: {:?})", method, url, query);

        let mut builder = self.with_headers(self.client.request(method, &url));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();

        let rate = RateLimit::from_headers(&headers);
        if let Some(ref rate) = rate {
            debug!(
                "Rate budget: {}/{} until {}",
                rate.remaining, rate.limit, rate.reset
            );
            if let Ok(mut guard) = self.rate.lock() {
                *guard = Some(rate.clone());
            }
        }

        let (links, monitor) = match headers.get("Link").and_then(|v| v.to_str().ok()) {
            Some(value) => {
                let monitor = parse_link_header(value)
                    .into_iter()
                    .find(|(_, rel)| rel == "monitor")
                    .map(|(uri, _)| uri);
                (PageLinks::from_link_header(value), monitor)
            }
            None => (PageLinks::default(), None),
        };

        let text = response.text().await?;
        let body = decode_body(status, &text)?;
        debug!("Response status {} ({} byte body)", status, text.len());

        Ok(Envelope {
            status,
            body,
            rate,
            links,
            monitor,
        })
    }

    /// Like [`request`](Self::request), but maps non-2xx statuses to
    /// [`Error::Api`] carrying the decoded error document when present.
    pub async fn request_checked(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Envelope> {
        let envelope = self.request(method, path, query, body).await?;
        if envelope.is_success() {
            Ok(envelope)
        } else {
            debug!(
                "API error body for {} (status {}): {}",
                path, envelope.status, envelope.body
            );
            Err(Error::api_from_body(envelope.status, &envelope.body))
        }
    }

    /// Fetch a non-JSON payload (kubeconfig, invoice exports) verbatim.
    ///
    /// No decoding is attempted; rate headers are still recorded.
    pub async fn request_raw(&self, method: Method, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {} (raw)", method, url);

        let builder = self.with_headers(self.client.request(method, &url));
        let response = builder.send().await?;
        let status = response.status();

        if let Some(rate) = RateLimit::from_headers(response.headers()) {
            if let Ok(mut guard) = self.rate.lock() {
                *guard = Some(rate);
            }
        }

        if !status.is_success() {
            let body: Value = match response.text().await {
                Ok(text) => decode_body(status.as_u16(), &text)?,
                Err(_) => Value::Null,
            };
            return Err(Error::api_from_body(status.as_u16(), &body));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Decode a response body.
///
/// A 2xx body that is not valid JSON is a decode failure. An error body
/// that is not valid JSON is kept as a raw string so the envelope (and the
/// API error built from it) can still carry a prefix of it.
fn decode_body(status: u16, text: &str) -> Result<Value> {
    if text.trim().is_empty() || status == StatusCode::NO_CONTENT.as_u16() {
        return Ok(Value::Null);
    }
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(e) if (200..300).contains(&status) => Err(Error::Decode(format!(
            "invalid JSON in {} response: {}",
            status, e
        ))),
        Err(_) => Ok(Value::String(text.trim().to_string())),
    }
}

#[cfg(test)]
impl Transport {
    /// Create a test transport pointed at a mock server
    pub fn test_transport(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string())
    }
}


#[cfg(test)]
mod http_tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_request_sends_bearer_token_and_accept() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/account"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"account": {}})),
            )
            .mount(&mock_server)
            .await;

        let envelope = transport
            .request(Method::GET, "/account", &[], None)
            .await
            .unwrap();
        assert_eq!(envelope.status, 200);
        assert!(envelope.is_success());
    }

    #[tokio::test]
    async fn test_rate_budget_updated_from_headers() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/account"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"account": {}}))
                    .insert_header("X-RateLimit-Limit", "5000")
                    .insert_header("X-RateLimit-Remaining", "4999")
                    .insert_header("X-RateLimit-Reset", "1700000000"),
            )
            .mount(&mock_server)
            .await;

        let envelope = transport
            .request(Method::GET, "/account", &[], None)
            .await
            .unwrap();

        let rate = envelope.rate.unwrap();
        assert_eq!(rate.limit, 5000);
        assert_eq!(rate.remaining, 4999);
        assert_eq!(rate.reset.to_rfc3339(), "2023-11-14T22:13:20+00:00");

        // Process-wide budget reflects the latest observation
        let process_rate = transport.rate().unwrap();
        assert_eq!(process_rate.remaining, 4999);
    }

    #[tokio::test]
    async fn test_query_params_are_sent() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/servers"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "50"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"servers": []})),
            )
            .mount(&mock_server)
            .await;

        let envelope = transport
            .request(
                Method::GET,
                "/servers",
                &[("page", "2".to_string()), ("per_page", "50".to_string())],
                None,
            )
            .await
            .unwrap();
        assert_eq!(envelope.status, 200);
    }

    #[tokio::test]
    async fn test_error_envelope_still_returned() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/servers/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "id": "not_found",
                "message": "The resource you requested could not be found."
            })))
            .mount(&mock_server)
            .await;

        // request() surfaces the envelope, not an error
        let envelope = transport
            .request(Method::GET, "/servers/missing", &[], None)
            .await
            .unwrap();
        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.body["id"], "not_found");
    }

    #[tokio::test]
    async fn test_request_checked_decodes_api_error() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/load_balancers"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "id": "unprocessable_entity",
                "message": "ip is required"
            })))
            .mount(&mock_server)
            .await;

        let err = transport
            .request_checked(
                Method::POST,
                "/load_balancers",
                &[],
                Some(&serde_json::json!({"name": "lb-1"})),
            )
            .await
            .unwrap_err();

        match err {
            Error::Api {
                status,
                code,
                message,
                ..
            } => {
                assert_eq!(status, 422);
                assert_eq!(code, "unprocessable_entity");
                assert_eq!(message, "ip is required");
            }
            other => panic!("Expected Error::Api, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_monitor_link_extracted() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/servers/42/actions"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"action": {"id": 99, "status": "in-progress"}}))
                    .insert_header(
                        "Link",
                        "<https://api.nimbus.cloud/v2/actions/99>; rel=\"monitor\"",
                    ),
            )
            .mount(&mock_server)
            .await;

        let envelope = transport
            .request(
                Method::POST,
                "/servers/42/actions",
                &[],
                Some(&serde_json::json!({"type": "reboot"})),
            )
            .await
            .unwrap();
        assert_eq!(
            envelope.monitor.as_deref(),
            Some("https://api.nimbus.cloud/v2/actions/99")
        );
        assert!(envelope.links.is_empty());
    }

    #[tokio::test]
    async fn test_link_header_pagination_relations() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/servers"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"servers": []}))
                    .insert_header(
                        "Link",
                        "<https://api.nimbus.cloud/v2/servers?page=2>; rel=\"next\", \
                         <https://api.nimbus.cloud/v2/servers?page=7>; rel=\"last\"",
                    ),
            )
            .mount(&mock_server)
            .await;

        let envelope = transport
            .request(Method::GET, "/servers", &[], None)
            .await
            .unwrap();
        assert_eq!(
            envelope.links.next.as_deref(),
            Some("https://api.nimbus.cloud/v2/servers?page=2")
        );
        assert_eq!(
            envelope.links.last.as_deref(),
            Some("https://api.nimbus.cloud/v2/servers?page=7")
        );
        assert!(envelope.links.prev.is_none());
        assert!(envelope.links.first.is_none());
    }

    #[tokio::test]
    async fn test_request_raw_copies_body_verbatim() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        let kubeconfig = "apiVersion: v1\nkind: Config\nclusters: []\n";
        Mock::given(method("GET"))
            .and(path("/kubernetes/clusters/abc/kubeconfig"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(kubeconfig, "application/yaml"),
            )
            .mount(&mock_server)
            .await;

        let bytes = transport
            .request_raw(Method::GET, "/kubernetes/clusters/abc/kubeconfig")
            .await
            .unwrap();
        assert_eq!(bytes, kubeconfig.as_bytes());
    }

    #[tokio::test]
    async fn test_request_raw_non_success_is_api_error() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/kubernetes/clusters/abc/kubeconfig"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "id": "not_found",
                "message": "cluster not found"
            })))
            .mount(&mock_server)
            .await;

        let err = transport
            .request_raw(Method::GET, "/kubernetes/clusters/abc/kubeconfig")
            .await
            .unwrap_err();
        match err {
            Error::Api { status, code, .. } => {
                assert_eq!(status, 404);
                assert_eq!(code, "not_found");
            }
            other => panic!("Expected Error::Api, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_remaining_non_increasing_within_reset_window() {
        let mock_server = MockServer::start().await;
        let transport = Transport::test_transport(&mock_server.uri());

        for (path_str, remaining) in [("/first", "4999"), ("/second", "4998")] {
            Mock::given(method("GET"))
                .and(path(path_str))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(serde_json::json!({}))
                        .insert_header("X-RateLimit-Limit", "5000")
                        .insert_header("X-RateLimit-Remaining", remaining)
                        .insert_header("X-RateLimit-Reset", "1700000000"),
                )
                .mount(&mock_server)
                .await;
        }

        transport
            .request(Method::GET, "/first", &[], None)
            .await
            .unwrap();
        let first = transport.rate().unwrap();
        transport
            .request(Method::GET, "/second", &[], None)
            .await
            .unwrap();
        let second = transport.rate().unwrap();

        assert_eq!(first.reset, second.reset);
        assert!(second.remaining <= first.remaining);
    }
}
