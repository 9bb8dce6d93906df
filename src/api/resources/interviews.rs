//! Interview operations, including the per-interview comment thread.
//!
//! Comments are addressed by their position in the thread, so deleting one
//! shifts the index of every comment after it.

use serde::Serialize;
use serde_json::Value;

use crate::api::{
    RecruitingClient, error::ApiError, http::HttpMethod, ids::RecordId, models::InterviewComment,
};

impl RecruitingClient {
    /// Lists interviews, latest interview date first. The backend answers
    /// with an empty array rather than an error when listing fails.
    pub async fn get_interviews(&self) -> Result<Value, ApiError> {
        self.call("/interviews", HttpMethod::Get).await
    }

    pub async fn get_interview(&self, id: RecordId) -> Result<Value, ApiError> {
        self.call(&format!("/interviews/{id}"), HttpMethod::Get).await
    }

    /// Dates must be `YYYY-MM-DD` and times `HH:MM`; `models::NewInterview`
    /// serializes that way.
    pub async fn create_interview<B: Serialize + ?Sized>(
        &self,
        interview: &B,
    ) -> Result<Value, ApiError> {
        self.call_with("/interviews", HttpMethod::Post, interview)
            .await
    }

    pub async fn update_interview<B: Serialize + ?Sized>(
        &self,
        id: RecordId,
        updates: &B,
    ) -> Result<Value, ApiError> {
        self.call_with(&format!("/interviews/{id}"), HttpMethod::Put, updates)
            .await
    }

    pub async fn delete_interview(&self, id: RecordId) -> Result<Value, ApiError> {
        self.call(&format!("/interviews/{id}"), HttpMethod::Delete).await
    }

    /// Returns `{"comments": [..]}` in insertion order.
    pub async fn get_interview_comments(&self, id: RecordId) -> Result<Value, ApiError> {
        self.call(&format!("/interviews/{id}/comments"), HttpMethod::Get)
            .await
    }

    pub async fn add_interview_comment(
        &self,
        id: RecordId,
        comment: &str,
    ) -> Result<Value, ApiError> {
        let body = InterviewComment {
            comment: comment.to_string(),
        };
        self.call_with(&format!("/interviews/{id}/comments"), HttpMethod::Post, &body)
            .await
    }

    pub async fn delete_interview_comment(
        &self,
        id: RecordId,
        index: usize,
    ) -> Result<Value, ApiError> {
        self.call(
            &format!("/interviews/{id}/comments/{index}"),
            HttpMethod::Delete,
        )
        .await
    }
}
