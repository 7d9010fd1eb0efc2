//! Network transport backed by `reqwest::blocking`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use etrade::http::{ReqwestTransport, StaticAuthorization};
//!
//! let transport = ReqwestTransport::builder()
//!     .timeout(Duration::from_secs(60))
//!     .signer(StaticAuthorization("OAuth ...".to_string()))
//!     .build()?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{EtradeError, EtradeResult, HttpError};
use crate::http::{HttpRequest, HttpResponse, Method, RequestSigner, Transport};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring [`ReqwestTransport`].
#[derive(Clone)]
pub struct ReqwestTransportBuilder {
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
            signer: None,
        }
    }
}

impl std::fmt::Debug for ReqwestTransportBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransportBuilder")
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .field("signer", &self.signer.is_some())
            .finish()
    }
}

impl ReqwestTransportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Attach a signer that supplies the `Authorization` header per request.
    pub fn signer(mut self, signer: impl RequestSigner + 'static) -> Self {
        self.signer = Some(Arc::new(signer));
        self
    }

    /// Build the transport.
    pub fn build(self) -> EtradeResult<ReqwestTransport> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                EtradeError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                EtradeError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()
            .map_err(HttpError::from)?;

        Ok(ReqwestTransport {
            client,
            signer: self.signer,
        })
    }
}

/// Blocking HTTP transport. Stateless apart from the connection pool, so one
/// instance can serve concurrent callers.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("signed", &self.signer.is_some())
            .finish()
    }
}

impl ReqwestTransport {
    /// Create a transport with default settings (30s timeout, unsigned).
    pub fn new() -> EtradeResult<Self> {
        ReqwestTransportBuilder::new().build()
    }

    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::new()
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut req = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        if let Some(signer) = &self.signer {
            req = req.header(AUTHORIZATION, signer.authorization(request.method, &request.url)?);
        }

        if let Some(body) = request.body {
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StaticAuthorization;

    #[test]
    fn test_transport_builder() {
        let transport = ReqwestTransport::builder()
            .timeout_secs(60)
            .header("X-Custom", "test")
            .signer(StaticAuthorization("OAuth test".to_string()))
            .build()
            .unwrap();
        assert!(transport.signer.is_some());
    }

    #[test]
    fn test_transport_builder_rejects_bad_header() {
        let err = ReqwestTransport::builder()
            .header("bad header", "value")
            .build()
            .unwrap_err();
        assert!(matches!(err, EtradeError::InvalidParameter(_)));
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(to_reqwest_method(Method::Get), reqwest::Method::GET);
        assert_eq!(to_reqwest_method(Method::Delete), reqwest::Method::DELETE);
    }
}
