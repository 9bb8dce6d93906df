//! Async client for the recruiting backend (job offers, applications,
//! candidates, interviews, auth and dashboard statistics).
//!
//! Every call goes through a single [`Gateway`] that resolves the endpoint under
//! the API root, sends JSON with the session cookie, and turns non-2xx
//! responses into [`ApiError::Http`]. [`RecruitingClient`] adds one method per
//! backend action on top of it.

pub mod api;

pub use api::{
    RecruitingClient,
    config::ClientConfig,
    error::ApiError,
    http::{CredentialsPolicy, Gateway, HttpMethod, RequestBody, RequestDescriptor, RequestOptions},
    ids::{ApplicationRef, RecordId},
};
