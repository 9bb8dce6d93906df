use serde_json::Value;

use crate::api::{RecruitingClient, error::ApiError, http::HttpMethod};

impl RecruitingClient {
    /// Offer and application counters. Requires a logged-in session.
    pub async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        self.call("/dashboard-stats", HttpMethod::Get).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{models::DashboardStats, resources::test_support::client_for};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn dashboard_stats_decode_into_typed_counters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboard-stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_offers": 4,
                "total_applications": 19,
                "pending_applications": 11,
                "interview_applications": 3
            })))
            .mount(&server)
            .await;

        let stats: DashboardStats =
            serde_json::from_value(client_for(&server).get_dashboard_stats().await.unwrap()).unwrap();
        assert_eq!(stats.total_applications, 19);
        assert_eq!(stats.interview_applications, 3);
    }
}
