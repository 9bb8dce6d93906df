//! Per-call request options and the resolved request descriptor.
//!
//! `RequestOptions` is what a call-site hands to the gateway. The gateway merges
//! it onto the defaults and produces a `RequestDescriptor`, which is plain data
//! describing exactly what goes over the wire.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::api::error::ApiError;

/// HTTP verbs used by the recruiting API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Whether the session cookie travels with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialsPolicy {
    #[default]
    Include,
    Omit,
}

/// Request payload. Structured values are JSON-encoded, text is sent as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Text(String),
}

impl RequestBody {
    /// Converts any serializable payload into a body. A payload that serializes
    /// to a bare string is treated as pre-encoded text.
    ///
    /// # Errors
    /// * `Serialization` - the payload cannot be represented as JSON
    pub fn json<T: Serialize + ?Sized>(payload: &T) -> Result<Self, ApiError> {
        match serde_json::to_value(payload).map_err(ApiError::Serialization)? {
            serde_json::Value::String(text) => Ok(Self::Text(text)),
            value => Ok(Self::Json(value)),
        }
    }

    pub(crate) fn into_payload(self) -> Result<String, ApiError> {
        match self {
            Self::Json(value) => serde_json::to_string(&value).map_err(ApiError::Serialization),
            Self::Text(text) => Ok(text),
        }
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// Caller-supplied overrides for a single request.
///
/// `headers`, when set, replaces the default header set instead of extending it.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Option<HeaderMap>,
    pub body: Option<RequestBody>,
    pub credentials: CredentialsPolicy,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attaches a serializable payload as a structured JSON body.
    ///
    /// # Errors
    /// * `Serialization` - the payload cannot be represented as JSON
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self, ApiError> {
        self.body = Some(RequestBody::json(payload)?);
        Ok(self)
    }

    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    #[must_use]
    pub const fn credentials(mut self, credentials: CredentialsPolicy) -> Self {
        self.credentials = credentials;
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Headers sent when the caller does not supply its own.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Fully resolved request, built fresh for every call.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
    pub credentials: CredentialsPolicy,
    pub timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_body_is_json_encoded() {
        let payload = RequestBody::Json(json!({ "title": "Engineer" }))
            .into_payload()
            .unwrap();
        assert_eq!(payload, r#"{"title":"Engineer"}"#);
    }

    #[test]
    fn text_body_passes_through_unchanged() {
        let payload = RequestBody::from("{not json").into_payload().unwrap();
        assert_eq!(payload, "{not json");
    }

    #[test]
    fn string_payload_is_not_double_encoded() {
        let body = RequestBody::json("raw text").unwrap();
        assert_eq!(body, RequestBody::Text("raw text".to_string()));
        let body = RequestBody::json(&json!({ "status": "done" })).unwrap();
        assert_eq!(body.into_payload().unwrap(), r#"{"status":"done"}"#);
    }

    #[test]
    fn options_default_to_get_with_credentials() {
        let options = RequestOptions::default();
        assert_eq!(options.method, HttpMethod::Get);
        assert_eq!(options.credentials, CredentialsPolicy::Include);
        assert!(options.headers.is_none());
        assert!(options.body.is_none());
    }

    #[test]
    fn default_headers_declare_json() {
        let headers = default_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }
}
