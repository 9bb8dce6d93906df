//! Job application operations and the external form submission hook.
//!
//! Updates address an application by integer id. Deletes take an
//! `ApplicationRef`, because the backend also resolves an application by the
//! applicant's e-mail on that route.

use serde::Serialize;
use serde_json::Value;

use crate::api::{
    RecruitingClient,
    error::ApiError,
    http::HttpMethod,
    ids::{ApplicationRef, RecordId},
};

impl RecruitingClient {
    pub async fn get_applications(&self) -> Result<Value, ApiError> {
        self.call("/applications", HttpMethod::Get).await
    }

    /// Requires `full_name`, `email` and `job_title`; see `models::NewApplication`.
    pub async fn create_application<B: Serialize + ?Sized>(
        &self,
        application: &B,
    ) -> Result<Value, ApiError> {
        self.call_with("/applications", HttpMethod::Post, application)
            .await
    }

    pub async fn update_application<B: Serialize + ?Sized>(
        &self,
        id: RecordId,
        updates: &B,
    ) -> Result<Value, ApiError> {
        self.call_with(&format!("/applications/{id}"), HttpMethod::Put, updates)
            .await
    }

    pub async fn delete_application(
        &self,
        application: impl Into<ApplicationRef>,
    ) -> Result<Value, ApiError> {
        let application = application.into();
        let endpoint = format!("/applications/{}", application.path_segment());
        self.call(&endpoint, HttpMethod::Delete).await
    }

    /// Forwards an application received from the external form integration.
    /// The backend always files it as `pending`.
    pub async fn submit_form_application<B: Serialize + ?Sized>(
        &self,
        submission: &B,
    ) -> Result<Value, ApiError> {
        self.call_with("/google-form-submission", HttpMethod::Post, submission)
            .await
    }
}
