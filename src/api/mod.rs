//! Client for the recruiting backend's REST API.
//!
//! The implementation is organized into:
//!
//! - `config`: environment and programmatic configuration
//! - `error`: error types and conversions
//! - `http`: the request gateway and its option types
//! - `ids`: typed identifiers used in endpoint paths
//! - `models`: request payloads and response records
//! - `resources`: one module per backend resource, each adding operations to `RecruitingClient`
//!
//! The main entry point is `RecruitingClient`, built once and passed to whoever
//! needs to talk to the backend.

pub mod config;
pub mod error;
pub mod http;
pub mod ids;
pub mod models;
mod resources;

use serde::Serialize;
use serde_json::Value;

use crate::api::{
    config::ClientConfig,
    error::ApiError,
    http::{Gateway, HttpMethod, RequestOptions},
};

/// Facade over the gateway: every method maps one backend action onto an
/// endpoint, a verb and an optional body, and returns the JSON verbatim.
#[derive(Debug, Clone)]
pub struct RecruitingClient {
    gateway: Gateway,
}

impl RecruitingClient {
    /// # Errors
    /// * `Client` - the HTTP client could not be built
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            gateway: Gateway::new(config)?,
        })
    }

    /// Builds the client from `RECRUIT_API_*` environment variables.
    ///
    /// # Errors
    /// * `MissingConfig` - required variables are unset or malformed
    /// * `Client` - the HTTP client could not be built
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ClientConfig::from_env()?)
    }

    /// The underlying gateway, for custom endpoints or typed decoding.
    pub const fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    async fn call(&self, endpoint: &str, method: HttpMethod) -> Result<Value, ApiError> {
        self.gateway
            .request(endpoint, RequestOptions::new(method))
            .await
    }

    async fn call_with<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: &B,
    ) -> Result<Value, ApiError> {
        let options = RequestOptions::new(method).json(body)?;
        self.gateway.request(endpoint, options).await
    }
}
