//! The request gateway: the single chokepoint every API call goes through.
//!
//! This module provides:
//! - Construction of the middleware-wrapped HTTP clients (with and without the session cookie jar)
//! - OpenTelemetry-style span recording for each request via `reqwest-tracing`
//! - Resolution of endpoint + options into a `RequestDescriptor`
//! - Execution and normalisation of success and failure outcomes

use std::{fmt, sync::Arc, time::Duration};

use http::Extensions;
use reqwest::{Request, Response, cookie::Jar};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use serde::de::DeserializeOwned;
use tracing::{Span, debug, error};

use crate::api::{
    config::ClientConfig,
    error::ApiError,
    http::options::{CredentialsPolicy, RequestBody, RequestDescriptor, RequestOptions, default_headers},
};

// Span backend plugged into TracingMiddleware<RecruitTracing>; the type is only
// referenced as a generic parameter.
#[allow(dead_code)]
struct RecruitTracing;

impl ReqwestOtelSpanBackend for RecruitTracing {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(
            name = "recruit-api-request",
            req,
            request_body = req.body().and_then(|b| b.as_bytes()).map(String::from_utf8_lossy).as_deref(),
            request_headers = ?req.headers(),
        )
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

fn build_client(
    timeout: Option<Duration>,
    cookies: Option<Arc<Jar>>,
) -> Result<ClientWithMiddleware, ApiError> {
    let mut client_builder = reqwest::Client::builder();

    if let Some(timeout) = timeout {
        client_builder = client_builder.timeout(timeout);
    }
    if let Some(jar) = cookies {
        client_builder = client_builder.cookie_provider(jar);
    }

    Ok(ClientBuilder::new(client_builder.build()?)
        .with(TracingMiddleware::<RecruitTracing>::new())
        .build())
}

/// Issues requests against `{base_url}{api_prefix}` and normalises the outcome.
///
/// Two transports share one configuration: one carries the session cookie jar
/// (`CredentialsPolicy::Include`), the other never sends or stores cookies.
#[derive(Clone)]
pub struct Gateway {
    api_root: String,
    with_credentials: ClientWithMiddleware,
    without_credentials: ClientWithMiddleware,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("api_root", &self.api_root)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// # Errors
    /// * `Client` - the underlying HTTP client could not be built (TLS backend setup)
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let jar = Arc::new(Jar::default());
        Ok(Self {
            api_root: config.api_root(),
            with_credentials: build_client(config.timeout, Some(jar))?,
            without_credentials: build_client(config.timeout, None)?,
        })
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Resolves an endpoint and caller overrides into the request that will be sent.
    ///
    /// The URL is the API root followed by `endpoint` verbatim. Caller headers
    /// replace the defaults wholesale; structured bodies are JSON-encoded here.
    ///
    /// # Errors
    /// * `Serialization` - the structured body could not be encoded
    pub fn describe(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<RequestDescriptor, ApiError> {
        let RequestOptions {
            method,
            headers,
            body,
            credentials,
            timeout,
        } = options;

        Ok(RequestDescriptor {
            method,
            url: format!("{}{endpoint}", self.api_root),
            headers: headers.unwrap_or_else(default_headers),
            body: body.map(RequestBody::into_payload).transpose()?,
            credentials,
            timeout,
        })
    }

    /// Sends a resolved request and decodes a 2xx JSON body into `T`.
    ///
    /// Every failure is logged once here and then returned; nothing is retried.
    ///
    /// # Errors
    /// * `Transport` - no response was received, or the body could not be read
    /// * `Http` - the response status was outside 200..=299
    /// * `Parse` - the body was not valid JSON for `T`
    pub async fn execute<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let RequestDescriptor {
            method,
            url,
            headers,
            body,
            credentials,
            timeout,
        } = descriptor;

        let client = match credentials {
            CredentialsPolicy::Include => &self.with_credentials,
            CredentialsPolicy::Omit => &self.without_credentials,
        };

        let mut request_builder = client.request(method.into(), &url).headers(headers);
        if let Some(body) = body {
            request_builder = request_builder.body(body);
        }
        if let Some(timeout) = timeout {
            request_builder = request_builder.timeout(timeout);
        }

        debug!(?method, %url, "sending API request");
        let response = request_builder.send().await.map_err(|e| {
            error!(error = %e, ?method, %url, "API request failed");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default().to_string();
            error!(status = status.as_u16(), %status_text, ?method, %url, "API request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = %e, ?method, %url, "API response body could not be read");
            ApiError::Transport(e.into())
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            error!(error = %e, ?method, %url, "API response is not the expected JSON");
            ApiError::Parse(e)
        })
    }

    /// `describe` followed by `execute`.
    ///
    /// # Errors
    /// See [`Gateway::describe`] and [`Gateway::execute`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let descriptor = self.describe(endpoint, options)?;
        self.execute(descriptor).await
    }
}
