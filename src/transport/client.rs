//! `reqwest`-backed transport.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, trace};

use super::{DavRequest, DavResponse, Transport};
use crate::error_handling::{transport_error_from_reqwest, TransportError};

/// [`Transport`] over a shared `reqwest::Client`.
///
/// The client must be built with redirects disabled (see
/// [`crate::initialization::init_redirect_client`]); otherwise `reqwest` would
/// follow 3xx responses itself and the `Destination` header would go stale.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Arc<reqwest::Client>,
}

impl ReqwestTransport {
    /// Wraps an existing client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &DavRequest) -> Result<DavResponse, TransportError> {
        let method = request.method().as_str();
        let url = request.url().as_str();
        debug!("{} {}", method, url);

        let response = self
            .client
            .request(request.method().clone(), request.url().clone())
            .headers(request.headers().clone())
            .send()
            .await
            .map_err(|e| transport_error_from_reqwest(e, method, url))?;

        let status = response.status();
        let headers = response.headers().clone();
        let answered = response.url().clone();
        // Reading to the end hands the connection back to the pool
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error_from_reqwest(e, method, url))?;
        trace!("{} {} -> {} ({} bytes)", method, url, status, body.len());

        Ok(DavResponse::new(answered, status)
            .with_headers(headers)
            .with_body(body))
    }

    fn release(&self, response: DavResponse) {
        trace!("Releasing response from {}", response.url());
        drop(response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use reqwest::header::HeaderValue;
    use reqwest::{Method, StatusCode};
    use url::Url;

    use crate::config::{Config, DESTINATION};
    use crate::error_handling::TransportErrorKind;
    use crate::initialization::init_redirect_client;

    async fn transport() -> ReqwestTransport {
        let client = init_redirect_client(&Config::default())
            .await
            .expect("Failed to create client");
        ReqwestTransport::new(client)
    }

    fn server_url(server: &Server, path: &str) -> Url {
        Url::parse(&server.url(path).to_string()).expect("mock server URL should parse")
    }

    #[tokio::test]
    async fn test_execute_does_not_follow_redirects() {
        let server = Server::run();
        let target = server.url("/final").to_string();
        server.expect(
            Expectation::matching(request::method_path("GET", "/start"))
                .respond_with(status_code(302).append_header("Location", target.as_str())),
        );
        // No expectation for /final: a request there would fail the test

        let request = DavRequest::new(Method::GET, server_url(&server, "/start"));
        let response = transport()
            .await
            .execute(&request)
            .await
            .expect("Request should succeed");

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.location(), Some(target.as_str()));
        assert_eq!(response.url().path(), "/start");
    }

    #[tokio::test]
    async fn test_execute_sends_extension_method_and_headers() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("MOVE", "/remote.php/dav/files/u/a.txt"),
                request::headers(contains((
                    "destination",
                    "http://example.com/remote.php/dav/files/u/b.txt"
                ))),
            ])
            .respond_with(status_code(201).body("created")),
        );

        let request = DavRequest::new(
            Method::from_bytes(b"MOVE").expect("MOVE is a valid method"),
            server_url(&server, "/remote.php/dav/files/u/a.txt"),
        )
        .with_header(
            DESTINATION,
            HeaderValue::from_static("http://example.com/remote.php/dav/files/u/b.txt"),
        );
        let response = transport()
            .await
            .execute(&request)
            .await
            .expect("Request should succeed");

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.body().as_ref(), b"created");
    }

    #[tokio::test]
    async fn test_execute_connect_failure_is_categorized() {
        let request = DavRequest::new(
            Method::GET,
            Url::parse("http://127.0.0.1:1/").expect("valid URL"),
        );
        let err = transport()
            .await
            .execute(&request)
            .await
            .expect_err("Connecting to a closed port should fail");

        assert_eq!(err.kind, TransportErrorKind::Connect);
        assert_eq!(err.method, "GET");
        assert_eq!(err.url, "http://127.0.0.1:1/");
    }
}
