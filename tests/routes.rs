//! Every facade operation lands on `{base}/api` + its documented path and verb.

use recruit_api_client::{ClientConfig, RecordId, RecruitingClient};
use serde_json::json;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn facade_routes_match_backend_surface() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = RecruitingClient::new(&ClientConfig::new(&server.uri())).unwrap();
    let body = json!({ "status": "pending" });
    let id = RecordId(5);

    client.login("hr@example.com", "pw").await.unwrap();
    client.logout().await.unwrap();
    client.check_auth().await.unwrap();
    client.reset_password("hr@example.com", "pw2").await.unwrap();
    client.get_job_offers().await.unwrap();
    client.create_job_offer(&body).await.unwrap();
    client.update_job_offer(id, &body).await.unwrap();
    client.delete_job_offer(id).await.unwrap();
    client.get_applications().await.unwrap();
    client.create_application(&body).await.unwrap();
    client.update_application(id, &body).await.unwrap();
    client.delete_application("jane@example.com").await.unwrap();
    client.submit_form_application(&body).await.unwrap();
    client.get_dashboard_stats().await.unwrap();
    client.get_candidates().await.unwrap();
    client.create_candidate(&body).await.unwrap();
    client.update_candidate(id, &body).await.unwrap();
    client.delete_candidate(id).await.unwrap();
    client.get_interviews().await.unwrap();
    client.get_interview(id).await.unwrap();
    client.create_interview(&body).await.unwrap();
    client.update_interview(id, &body).await.unwrap();
    client.delete_interview(id).await.unwrap();
    client.get_interview_comments(id).await.unwrap();
    client.add_interview_comment(id, "ok").await.unwrap();
    client.delete_interview_comment(id, 0).await.unwrap();

    let expected = [
        ("POST", "/api/login"),
        ("POST", "/api/logout"),
        ("GET", "/api/check-auth"),
        ("POST", "/api/reset-password"),
        ("GET", "/api/job-offers"),
        ("POST", "/api/job-offers"),
        ("PUT", "/api/job-offers/5"),
        ("DELETE", "/api/job-offers/5"),
        ("GET", "/api/applications"),
        ("POST", "/api/applications"),
        ("PUT", "/api/applications/5"),
        ("DELETE", "/api/applications/jane%40example.com"),
        ("POST", "/api/google-form-submission"),
        ("GET", "/api/dashboard-stats"),
        ("GET", "/api/candidates"),
        ("POST", "/api/candidates"),
        ("PUT", "/api/candidates/5"),
        ("DELETE", "/api/candidates/5"),
        ("GET", "/api/interviews"),
        ("GET", "/api/interviews/5"),
        ("POST", "/api/interviews"),
        ("PUT", "/api/interviews/5"),
        ("DELETE", "/api/interviews/5"),
        ("GET", "/api/interviews/5/comments"),
        ("POST", "/api/interviews/5/comments"),
        ("DELETE", "/api/interviews/5/comments/0"),
    ];

    let received = server.received_requests().await.unwrap();
    let actual: Vec<(String, String)> = received
        .iter()
        .map(|r| (r.method.to_string(), r.url.path().to_string()))
        .collect();
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(m, p)| ((*m).to_string(), (*p).to_string()))
        .collect();
    assert_eq!(actual, expected);

    for request in &received {
        assert_eq!(
            request.headers.get("content-type").and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }
}

#[tokio::test]
async fn custom_prefix_is_honoured() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let config = ClientConfig::new(&format!("{}/", server.uri())).with_prefix("/hr/api");
    let client = RecruitingClient::new(&config).unwrap();
    client.get_candidates().await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.path(), "/hr/api/candidates");
}
