//! HTTP transport layer for the recruiting API.
//!
//! This module handles all communication with the backend, including option
//! merging, body encoding, session cookies and response normalisation.

mod client;
mod options;

// Re-export the gateway and its request vocabulary
pub use client::Gateway;
pub use options::{
    CredentialsPolicy, HttpMethod, RequestBody, RequestDescriptor, RequestOptions,
    default_headers,
};

// Re-export common types used in our public API
pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
