//! End-to-end tests against a running server over real HTTP

use reqwest::{Client, StatusCode};
use serde_json::json;
use tokio::net::TcpListener;
use user_registry::api::types::UserResponse;
use user_registry::AppConfig;

const UNKNOWN_ID: u64 = 999_999_999;

struct TestServer {
    base_uri: String,
    client: Client,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = user_registry::create_app(&AppConfig::default()).unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_uri: format!("http://{}/users", addr),
            client: Client::new(),
        }
    }

    fn uri(&self, id: u64) -> String {
        format!("{}/{}", self.base_uri, id)
    }

    async fn get_all(&self) -> Vec<UserResponse> {
        let response = self.client.get(&self.base_uri).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.unwrap()
    }

    async fn last_user(&self) -> UserResponse {
        self.get_all().await.pop().unwrap()
    }
}

#[tokio::test]
async fn test_get_all_success() {
    let server = TestServer::spawn().await;

    let users = server.get_all().await;

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["VanVTT", "TrungHN", "HuyHM", "ThaoDTD"]);
    let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_get_by_id_success() {
    let server = TestServer::spawn().await;

    let response = server.client.get(server.uri(1)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let user: UserResponse = response.json().await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "VanVTT");
}

#[tokio::test]
async fn test_get_by_id_failure_not_found() {
    let server = TestServer::spawn().await;

    let response = server.client.get(server.uri(UNKNOWN_ID)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_new_user_success() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .post(&server.base_uri)
        .json(&json!({"name": "new_unique"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let created: UserResponse = response.json().await.unwrap();
    assert_eq!(location, format!("/users/{}", created.id));
    assert!(created.id > 4);

    let fetched: UserResponse = server
        .client
        .get(server.uri(created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_new_user_fail_exists() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .post(&server.base_uri)
        .json(&json!({"name": "VanVTT"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(server.get_all().await.len(), 4);
}

#[tokio::test]
async fn test_created_ids_are_monotonic() {
    let server = TestServer::spawn().await;

    let mut previous = 4;
    for i in 0..3 {
        let created: UserResponse = server
            .client
            .post(&server.base_uri)
            .json(&json!({"name": format!("user_{i}")}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert!(created.id > previous);
        previous = created.id;

        let deleted = server.client.delete(server.uri(created.id)).send().await.unwrap();
        assert_eq!(deleted.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_update_user_success() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .put(server.uri(2))
        .json(&json!({"id": 2, "name": "Updated"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let user: UserResponse = server
        .client
        .get(server.uri(2))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(user.id, 2);
    assert_eq!(user.name, "Updated");

    // Position in the listing is unchanged
    assert_eq!(server.get_all().await[1], user);
}

#[tokio::test]
async fn test_update_user_fail() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .put(server.uri(UNKNOWN_ID))
        .json(&json!({"id": UNKNOWN_ID, "name": "update"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user_to_existing_name_conflicts() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .put(server.uri(2))
        .json(&json!({"name": "VanVTT"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_user_success() {
    let server = TestServer::spawn().await;
    let last = server.last_user().await;

    let response = server.client.delete(server.uri(last.id)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.client.get(server.uri(last.id)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_fail() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .delete(server.uri(UNKNOWN_ID))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_headers_over_http() {
    let server = TestServer::spawn().await;

    let response = server.client.get(&server.base_uri).send().await.unwrap();
    let headers = response.headers();

    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "POST, GET, PUT, OPTIONS, DELETE"
    );
    assert_eq!(headers["access-control-allow-headers"], "*");
    assert_eq!(headers["access-control-max-age"], "3600");
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let server = TestServer::spawn().await;

    let handles: Vec<_> = (0..10)
        .map(|i| {
            tokio::spawn(
                server
                    .client
                    .post(&server.base_uri)
                    .json(&json!({"name": format!("parallel_{i}")}))
                    .send(),
            )
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let response = handle.await.unwrap().unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: UserResponse = response.json().await.unwrap();
        ids.push(created.id);
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}
