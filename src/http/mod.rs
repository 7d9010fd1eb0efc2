//! HTTP transport layer.
//!
//! Requests and responses are plain data. [`EtradeClient`](crate::api::EtradeClient)
//! builds an [`HttpRequest`], hands it to a [`Transport`], and maps the returned
//! [`HttpResponse`] status. Swapping the transport is how tests run without a
//! network and how request signing gets attached.

#[cfg(feature = "http")]
pub mod client;
pub mod fake;

#[cfg(feature = "http")]
pub use client::{ReqwestTransport, ReqwestTransportBuilder};
pub use fake::FakeTransport;

use crate::error::HttpError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An outbound request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, present only for order submission endpoints.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// A response as returned by the transport, before status mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one HTTP round-trip.
///
/// Implementations own connection handling, timeouts, and request signing.
/// They must not retry; a failure to obtain any response is reported as an
/// [`HttpError`], while any status code (including errors) is returned as an
/// [`HttpResponse`].
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Supplies the `Authorization` header for an outbound request.
///
/// OAuth1 token acquisition happens elsewhere; a signer only turns the
/// resulting credentials into a header value for a given method and URL.
pub trait RequestSigner: Send + Sync {
    fn authorization(&self, method: Method, url: &str) -> Result<String, HttpError>;
}

/// Signer that returns a fixed, externally computed header value.
#[derive(Debug, Clone)]
pub struct StaticAuthorization(pub String);

impl RequestSigner for StaticAuthorization {
    fn authorization(&self, _method: Method, _url: &str) -> Result<String, HttpError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[test]
    fn test_request_builder() {
        let req = HttpRequest::new(Method::Post, "https://example.com").with_body(b"{}".to_vec());
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.body.as_deref(), Some(&b"{}"[..]));
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_static_authorization() {
        let signer = StaticAuthorization("OAuth abc".to_string());
        assert_eq!(signer.authorization(Method::Get, "https://x").unwrap(), "OAuth abc");
    }
}
