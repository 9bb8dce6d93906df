//! Job offer operations.

use serde::Serialize;
use serde_json::Value;

use crate::api::{RecruitingClient, error::ApiError, http::HttpMethod, ids::RecordId};

impl RecruitingClient {
    /// Lists active job offers, newest first.
    pub async fn get_job_offers(&self) -> Result<Value, ApiError> {
        self.call("/job-offers", HttpMethod::Get).await
    }

    /// Creates a job offer. The backend requires `title`, `company` and
    /// `description` and answers 400 otherwise; see `models::NewJobOffer`.
    pub async fn create_job_offer<B: Serialize + ?Sized>(&self, offer: &B) -> Result<Value, ApiError> {
        self.call_with("/job-offers", HttpMethod::Post, offer).await
    }

    pub async fn update_job_offer<B: Serialize + ?Sized>(
        &self,
        id: RecordId,
        offer: &B,
    ) -> Result<Value, ApiError> {
        self.call_with(&format!("/job-offers/{id}"), HttpMethod::Put, offer)
            .await
    }

    pub async fn delete_job_offer(&self, id: RecordId) -> Result<Value, ApiError> {
        self.call(&format!("/job-offers/{id}"), HttpMethod::Delete).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ids::RecordId, models::JobOfferUpdate, resources::test_support::client_for};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn create_job_offer_posts_json_and_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/job-offers"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "title": "Engineer" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
            .expect(1)
            .mount(&server)
            .await;

        let created = client_for(&server)
            .create_job_offer(&json!({ "title": "Engineer" }))
            .await
            .unwrap();
        assert_eq!(created, json!({ "id": 1 }));
    }

    #[tokio::test]
    async fn update_and_delete_interpolate_the_id() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/job-offers/12"))
            .and(body_json(json!({ "company": "Acme" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 12, "company": "Acme" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/job-offers/12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Job offer deleted successfully"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let update = JobOfferUpdate {
            company: Some("Acme".to_string()),
            ..JobOfferUpdate::default()
        };
        let updated = client.update_job_offer(RecordId(12), &update).await.unwrap();
        assert_eq!(updated["company"], "Acme");
        client.delete_job_offer(RecordId(12)).await.unwrap();
    }

    #[tokio::test]
    async fn list_returns_array_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/job-offers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 2, "title": "Designer" },
                { "id": 1, "title": "Engineer" }
            ])))
            .mount(&server)
            .await;

        let offers = client_for(&server).get_job_offers().await.unwrap();
        assert_eq!(offers.as_array().map(Vec::len), Some(2));
        assert_eq!(offers[0]["title"], "Designer");
    }
}
