//! Immutable request and response descriptions.
//!
//! Each redirect hop derives a fresh [`DavRequest`] from the previous one
//! instead of mutating a shared exchange.

use bytes::Bytes;
use reqwest::header::{AsHeaderName, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::config::{DESTINATION, LOCATION};

/// One HTTP request: method, target and headers.
#[derive(Debug, Clone)]
pub struct DavRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
}

impl DavRequest {
    /// Creates a request without headers.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Returns a copy with `name` set to `value`, replacing earlier values.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Returns a copy carrying all of `headers`, replacing values of the same name.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        // `extend` appends to existing names; insert per name to replace them
        let mut last_name = None;
        for (name, value) in headers {
            let name = match name {
                Some(name) => {
                    self.headers.insert(name.clone(), value);
                    last_name = Some(name);
                    continue;
                }
                None => last_name.clone(),
            };
            if let Some(name) = name {
                self.headers.append(name, value);
            }
        }
        self
    }

    /// Request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request target.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// All request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Looks up a header case-insensitively.
    ///
    /// Raw UTF-8 values are returned as they are; values that are not valid
    /// UTF-8 are reported as absent.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
    }

    /// The WebDAV `Destination` header, under any casing.
    pub fn destination(&self) -> Option<&str> {
        self.header(DESTINATION)
    }

    /// Derives the request for the next redirect hop.
    ///
    /// Method and headers carry over; the target becomes `url` and, when given,
    /// `destination` replaces the `Destination` header.
    pub(crate) fn redirect_to(&self, url: Url, destination: Option<HeaderValue>) -> Self {
        let mut next = Self {
            method: self.method.clone(),
            url,
            headers: self.headers.clone(),
        };
        if let Some(destination) = destination {
            next.headers.insert(DESTINATION, destination);
        }
        next
    }
}

/// One HTTP response: the URL that answered, its status, headers and body.
#[derive(Debug, Clone)]
pub struct DavResponse {
    url: Url,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl DavResponse {
    /// Creates a response without headers or body.
    pub fn new(url: Url, status: StatusCode) -> Self {
        Self {
            url,
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Returns a copy with `name` set to `value`.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Returns a copy whose headers are replaced by `headers`.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Returns a copy whose body is replaced by `body`.
    pub fn with_body(mut self, body: Bytes) -> Self {
        self.body = body;
        self
    }

    /// URL this response answered.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// All response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Looks up a header case-insensitively.
    ///
    /// Values that are not visible ASCII are reported as absent, so a redirect
    /// whose `Location` carries raw non-ASCII bytes ends like one without it.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `Location` header, under any casing.
    pub fn location(&self) -> Option<&str> {
        self.header(LOCATION)
    }
}
