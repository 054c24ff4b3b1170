use std::path::PathBuf;

use maix_core::types::{PerformanceRequest, RefineRequest, SourceType};
use maix_core::{ApiClient, CampaignStatus, ConsoleConfig, ConsoleError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).expect("Failed to read fixture")
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::from_origin(&server.uri(), &ConsoleConfig::default()).expect("valid origin")
}

#[tokio::test]
async fn test_get_campaign_transforms_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/campaigns/c-20250301-001"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(read_fixture("campaign_detail.json"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let detail = client_for(&server).get_campaign("c-20250301-001").await.unwrap();
    assert_eq!(detail.target_groups.len(), 2);
    assert_eq!(detail.status, CampaignStatus::Completed);
}

#[tokio::test]
async fn test_get_campaign_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/campaigns/c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"campaignId": "c-1"})))
        .mount(&server)
        .await;

    let err = client_for(&server).get_campaign("c-1").await.unwrap_err();
    assert!(matches!(err, ConsoleError::MalformedResponse(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_not_found_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/campaigns/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("campaign not found"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_campaign("missing").await.unwrap_err();
    match err {
        ConsoleError::Api { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "campaign not found");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_save_selection_sends_full_id_list() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/campaigns/c-1/selection"))
        .and(body_json(json!({"resultIds": ["r-101", "r-202"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .save_selection("c-1", vec!["r-101".to_string(), "r-202".to_string()])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_submit_performance_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/campaigns/c-1/performance"))
        .and(body_json(json!({"actualCtr": 15.5, "conversionRate": 7.8, "isSuccessCase": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let request = PerformanceRequest {
        actual_ctr: 15.5,
        conversion_rate: 7.8,
        is_success_case: true,
    };
    client_for(&server).submit_performance("c-1", &request).await.unwrap();
}

#[tokio::test]
async fn test_refine_and_rag_trigger() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/campaigns/c-1/refine"))
        .and(body_json(json!({"feedbackText": "Warmer tone"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/campaigns/c-1/rag-trigger"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .request_refine(
            "c-1",
            &RefineRequest {
                feedback_text: "Warmer tone".to_string(),
            },
        )
        .await
        .unwrap();
    client.trigger_rag("c-1").await.unwrap();
}

#[tokio::test]
async fn test_create_and_delete_campaign() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/campaigns"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"campaignId": "c-new"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/campaigns/c-new"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let form = maix_core::forms::CampaignForm {
        purpose: "Acquire new customers".into(),
        core_benefit: "50% off".into(),
        source_url: String::new(),
        custom_columns: "[name]".into(),
    };
    let id = client
        .create_campaign(&form.into_request("tester").unwrap())
        .await
        .unwrap();
    assert_eq!(id, "c-new");
    client.delete_campaign(&id).await.unwrap();
}

#[tokio::test]
async fn test_list_campaigns_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/campaigns"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(read_fixture("campaign_page.json"), "application/json"),
        )
        .mount(&server)
        .await;

    let page = client_for(&server).list_campaigns().await.unwrap();
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.content[1].status, CampaignStatus::SuccessCase);
}

#[tokio::test]
async fn test_list_knowledge_sends_source_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/knowledge"))
        .and(query_param("source_type", "성공_사례"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(read_fixture("knowledge_list.json"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let entries = client_for(&server)
        .list_knowledge(Some(SourceType::SuccessCase))
        .await
        .unwrap();
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn test_knowledge_crud() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/knowledge/kb-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "kb-1",
            "document": "Do not send marketing messages between 21:00 and 08:00.",
            "metadata": {"title": "Night-time sending", "registration_date": "2025-01-01", "source_type": "정책"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/knowledge/kb-1"))
        .and(body_json(json!({
            "document": "Do not send marketing messages between 21:00 and 08:00.",
            "metadata": {"title": "Night-time sending rule", "source_type": "정책"}
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/knowledge/kb-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entry = client.get_knowledge("kb-1").await.unwrap();
    assert_eq!(entry.metadata.source_type, SourceType::Policy);

    let mut form = maix_core::forms::KnowledgeForm::from_entry(&entry);
    form.title = "Night-time sending rule".into();
    client
        .update_knowledge("kb-1", &form.into_input().unwrap())
        .await
        .unwrap();
    client.delete_knowledge("kb-1").await.unwrap();
}

#[tokio::test]
async fn test_dashboard_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCampaigns": 20, "activeCampaigns": 5, "successCases": 3, "ragRegistered": 2
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/recent-activity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"campaignId": "c-1", "purpose": "Winter season discount", "status": "PROCESSING", "updatedAt": "2025-01-10 10:00:00"}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let summary = client.dashboard_summary().await.unwrap();
    assert_eq!(summary.active_percent(), 25);
    let activity = client.recent_activity().await.unwrap();
    assert_eq!(activity[0].status, CampaignStatus::Processing);
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Nothing listens on port 9 (discard) in the test environment.
    let client = ApiClient::from_origin("http://127.0.0.1:9", &ConsoleConfig::default()).unwrap();
    let err = client.dashboard_summary().await.unwrap_err();
    assert!(matches!(err, ConsoleError::Transport(_)), "got {:?}", err);
}
