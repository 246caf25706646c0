use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;

/// RequestDescriptor is the request as the host stores it, before template
/// resolution.
///
/// `url` and `body` may still contain template variables; `method` is carried
/// through to the signature exactly as given, without case normalization.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP verb, case-preserved.
    pub method: String,
    /// Full url, possibly in unresolved template form.
    pub url: String,
    /// Raw body text, if the request has one.
    pub body: Option<String>,
}

impl RequestDescriptor {
    /// Create a new descriptor without a body.
    pub fn new(method: &str, url: &str) -> Self {
        Self {
            method: method.to_string(),
            url: url.to_string(),
            body: None,
        }
    }

    /// Set the raw body text.
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }
}

/// RequestFetch looks up a request descriptor by its host-side id.
#[async_trait::async_trait]
pub trait RequestFetch: Debug + Send + Sync + 'static {
    /// Fetch the descriptor for the given request id.
    async fn request_fetch(&self, id: &str) -> Result<RequestDescriptor>;
}

/// NoopRequestFetch is a no-op implementation that always returns an error.
///
/// This is used when no request store is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRequestFetch;

#[async_trait::async_trait]
impl RequestFetch for NoopRequestFetch {
    async fn request_fetch(&self, _id: &str) -> Result<RequestDescriptor> {
        Err(Error::unexpected(
            "request lookup not supported: no request store configured",
        ))
    }
}

/// StaticRequestFetch serves descriptors from an in-memory map.
///
/// This is useful for testing or for embedded hosts that know the full
/// request set up front.
#[derive(Debug, Clone, Default)]
pub struct StaticRequestFetch {
    requests: HashMap<String, RequestDescriptor>,
}

impl StaticRequestFetch {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under the given id.
    pub fn with_request(mut self, id: &str, request: RequestDescriptor) -> Self {
        self.requests.insert(id.to_string(), request);
        self
    }
}

#[async_trait::async_trait]
impl RequestFetch for StaticRequestFetch {
    async fn request_fetch(&self, id: &str) -> Result<RequestDescriptor> {
        self.requests
            .get(id)
            .cloned()
            .ok_or_else(|| Error::request_invalid(format!("request {id} not found")))
    }
}
