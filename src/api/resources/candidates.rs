//! Candidate operations.

use serde::Serialize;
use serde_json::Value;

use crate::api::{RecruitingClient, error::ApiError, http::HttpMethod, ids::RecordId};

impl RecruitingClient {
    pub async fn get_candidates(&self) -> Result<Value, ApiError> {
        self.call("/candidates", HttpMethod::Get).await
    }

    /// Creating a candidate that already exists for the same e-mail and job
    /// title returns the existing record with status 200 instead of 201.
    pub async fn create_candidate<B: Serialize + ?Sized>(
        &self,
        candidate: &B,
    ) -> Result<Value, ApiError> {
        self.call_with("/candidates", HttpMethod::Post, candidate)
            .await
    }

    pub async fn update_candidate<B: Serialize + ?Sized>(
        &self,
        id: RecordId,
        updates: &B,
    ) -> Result<Value, ApiError> {
        self.call_with(&format!("/candidates/{id}"), HttpMethod::Put, updates)
            .await
    }

    pub async fn delete_candidate(&self, id: RecordId) -> Result<Value, ApiError> {
        self.call(&format!("/candidates/{id}"), HttpMethod::Delete).await
    }
}
