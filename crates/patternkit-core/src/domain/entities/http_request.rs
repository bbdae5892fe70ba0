//! HTTP request assembly: product, builder, and director.
//!
//! [`RequestBuilder`] is the step-by-step construction interface,
//! [`HttpRequestBuilder`] the concrete builder that owns a request under
//! construction, and [`RequestDirector`] knows the recipes for common
//! requests. Clients may also drive a builder directly.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::domain::{entities::job::Prototype, error::DomainError, value_objects::HttpMethod};

/// Timeout applied when a builder never received one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A fully assembled HTTP request description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub body: BTreeMap<String, String>,
    /// Timeout in seconds.
    pub timeout: u64,
}

impl HttpRequest {
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::new()
    }
}

impl Prototype for HttpRequest {
    fn clone_prototype(&self) -> Self {
        let copy_pairs = |map: &BTreeMap<String, String>| -> BTreeMap<String, String> {
            map.iter()
                .map(|(k, v)| (k.as_str().to_owned(), v.as_str().to_owned()))
                .collect()
        };
        Self {
            url: self.url.as_str().to_owned(),
            method: self.method,
            headers: copy_pairs(&self.headers),
            body: copy_pairs(&self.body),
            timeout: self.timeout,
        }
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HttpRequest(url={}, method={}, headers={:?}, body={:?}, timeout={})",
            self.url, self.method, self.headers, self.body, self.timeout
        )
    }
}

/// Step-by-step construction of an HTTP request.
pub trait RequestBuilder {
    /// Discard any partially built request.
    fn reset(&mut self);

    fn set_url(&mut self, url: &str);

    fn set_method(&mut self, method: HttpMethod);

    fn set_body(&mut self, body: BTreeMap<String, String>);

    fn set_timeout(&mut self, timeout: u64);

    fn add_header(&mut self, key: &str, value: &str);
}

/// Concrete builder producing [`HttpRequest`]s.
#[derive(Debug, Default, Clone)]
pub struct HttpRequestBuilder {
    url: Option<String>,
    method: Option<HttpMethod>,
    headers: BTreeMap<String, String>,
    body: BTreeMap<String, String>,
    timeout: Option<u64>,
}

impl HttpRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and return the request, leaving the builder reset.
    ///
    /// On error the builder keeps its state so the caller can fix the
    /// offending step and retry.
    pub fn build(&mut self) -> Result<HttpRequest, DomainError> {
        let url = self
            .url
            .as_deref()
            .ok_or(DomainError::MissingRequiredField { field: "url" })?;

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DomainError::InvalidRequest(format!(
                "url '{url}' must start with http:// or https://"
            )));
        }

        let method = self
            .method
            .ok_or(DomainError::MissingRequiredField { field: "method" })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout == 0 {
            return Err(DomainError::InvalidRequest(
                "timeout must be greater than zero".into(),
            ));
        }

        let built = std::mem::take(self);
        Ok(HttpRequest {
            url: built.url.unwrap_or_default(),
            method,
            headers: built.headers,
            body: built.body,
            timeout,
        })
    }
}

impl RequestBuilder for HttpRequestBuilder {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_url(&mut self, url: &str) {
        self.url = Some(url.trim().to_string());
    }

    fn set_method(&mut self, method: HttpMethod) {
        self.method = Some(method);
    }

    fn set_body(&mut self, body: BTreeMap<String, String>) {
        self.body = body;
    }

    fn set_timeout(&mut self, timeout: u64) {
        self.timeout = Some(timeout);
    }

    fn add_header(&mut self, key: &str, value: &str) {
        self.headers.insert(key.to_string(), value.to_string());
    }
}

pub const EXAMPLE_URL: &str = "https://example.com";
pub const EXAMPLE_TIMEOUT_SECS: u64 = 10;
pub const EXAMPLE_AUTHORIZATION: &str = "Bearer 1234567890";

/// Knows the construction recipes for the requests we issue most.
pub struct RequestDirector<B: RequestBuilder> {
    builder: B,
}

impl<B: RequestBuilder> RequestDirector<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Swap the builder, returning the previous one.
    pub fn change_builder(&mut self, builder: B) -> B {
        std::mem::replace(&mut self.builder, builder)
    }

    pub fn builder_mut(&mut self) -> &mut B {
        &mut self.builder
    }

    pub fn into_builder(self) -> B {
        self.builder
    }

    pub fn build_get_request(&mut self) {
        self.builder.reset();
        self.builder.set_url(EXAMPLE_URL);
        self.builder.set_method(HttpMethod::Get);
        self.builder.set_timeout(EXAMPLE_TIMEOUT_SECS);
    }

    pub fn build_post_request(&mut self) {
        self.build_with_body(HttpMethod::Post);
    }

    pub fn build_put_request(&mut self) {
        self.build_with_body(HttpMethod::Put);
    }

    fn build_with_body(&mut self, method: HttpMethod) {
        self.builder.reset();
        self.builder.set_url(EXAMPLE_URL);
        self.builder.set_method(method);
        self.builder
            .set_body(BTreeMap::from([("key".to_string(), "value".to_string())]));
        self.builder.set_timeout(EXAMPLE_TIMEOUT_SECS);
        self.builder
            .add_header("Authorization", EXAMPLE_AUTHORIZATION);
    }
}
