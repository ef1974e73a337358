//! End-to-end HTTP tests.

mod common;

use serde_json::json;

use common::harness::{TestServerConfig, spawn_test_server};
use common::http_client::TestClient;

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Failed to spawn server");
    let client = TestClient::new(server.url());

    let health = client.health().await.expect("Health check failed");
    assert_eq!(health.status, "ok");

    server.shutdown().await;
}

#[tokio::test]
async fn test_ready_endpoint_reports_components() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Failed to spawn server");
    let client = TestClient::new(server.url());

    let ready = client.ready().await.expect("Ready check failed");
    assert!(ready.is_ok());
    assert_eq!(ready.components.http, cvrank::CVRANK_STATUS_READY);
    assert_eq!(ready.components.embedder_mode, "stub");
    assert_eq!(ready.components.translator_mode, "passthrough");
}

#[tokio::test]
async fn test_best_match_ranks_first() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Failed to spawn server");
    let client = TestClient::new(server.url());

    let body = json!({
        "job_requirements": "Data engineers building pipelines with Python and SQL.",
        "cvs": [
            {
                "cv_id": "chef",
                "work_experience": [{"job_title": "Head chef", "job_desc": ["Ran a busy kitchen"]}],
                "skills": ["Cooking"]
            },
            {
                "cv_id": "engineer",
                "work_experience": [{"job_title": "Data engineers", "job_desc": ["building pipelines"]}],
                "skills": ["Python", "SQL"]
            },
            {"cv_id": 3}
        ]
    });

    let resp = client.rank(&body).await.expect("Ranking failed");

    assert_eq!(resp.status, 200);
    assert_eq!(resp.cvrank_status, "ranked");
    assert_eq!(resp.ids()[0], json!("engineer"));

    let scores = resp.similarities();
    assert_eq!(scores.len(), 3);
    assert!((scores[0] - 100.0).abs() < 1e-3);
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_rank_is_deterministic() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Failed to spawn server");
    let client = TestClient::new(server.url());

    let body = json!({
        "job_requirements": "project manager",
        "cvs": [
            {"cv_id": "a", "skills": ["Budgeting"]},
            {"cv_id": "b", "skills": ["Scheduling"]},
            {"cv_id": "c", "skills": ["Stakeholder management"]}
        ]
    });

    let first = client.rank(&body).await.unwrap();
    let second = client.rank(&body).await.unwrap();

    assert_eq!(first.body, second.body);
    assert_ne!(first.request_id, second.request_id);
}

#[tokio::test]
async fn test_v1_route_matches_root_route() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .expect("Failed to spawn server");
    let client = TestClient::new(server.url());

    let body = json!({
        "job_requirements": "nurse",
        "cvs": [{"cv_id": 1, "skills": ["Nursing"]}, {"cv_id": 2, "skills": ["Welding"]}]
    });

    let root = client.rank_at("/", &body).await.unwrap();
    let v1 = client.rank_at("/v1/rank", &body).await.unwrap();

    assert_eq!(root.body, v1.body);
}
