//! HTTP API integration tests against an in-process server.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta};
use presence_server::{
    domain::{PresenceRegistry, TtlPolicy},
    infrastructure::{
        dto::http::{ConfirmationDto, ErrorResponseDto, RoomInfoDto},
        repository::InMemoryPresenceRepository,
    },
    ui::Server,
    usecase::{CheckInUseCase, ListRoomsUseCase, UpdatePresenceUseCase},
};
use presence_shared::time::ManualClock;
use serde_json::json;
use tokio::{net::TcpListener, sync::oneshot};

/// Helper struct to manage an in-process server lifecycle
struct TestServer {
    base_url: String,
    clock: Arc<ManualClock>,
    client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Start a server on an ephemeral port with a manually driven clock
    async fn start() -> Self {
        let clock = Arc::new(ManualClock::new(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        ));
        let registry: Arc<PresenceRegistry> = Arc::new(PresenceRegistry::new(clock.clone()));
        let repository = Arc::new(InMemoryPresenceRepository::new(registry));
        let ttl_policy = TtlPolicy::from_default_secs(300).unwrap();
        let server = Server::new(
            Arc::new(CheckInUseCase::new(repository.clone(), ttl_policy)),
            Arc::new(UpdatePresenceUseCase::new(repository.clone(), ttl_policy)),
            Arc::new(ListRoomsUseCase::new(repository)),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let shutdown = async {
                let _ = rx.await;
            };
            if let Err(e) = server.serve(listener, shutdown).await {
                panic!("server error: {e}");
            }
        });

        TestServer {
            base_url,
            clock,
            client: reqwest::Client::new(),
            shutdown: Some(tx),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn list_rooms(&self) -> Vec<RoomInfoDto> {
        let response = self.client.get(self.url("/list_rooms")).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn room_info(room_id: &str, user_ids: &[&str]) -> RoomInfoDto {
    RoomInfoDto {
        room_id: room_id.to_string(),
        user_ids: user_ids.iter().map(|id| id.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_health_check() {
    // テスト項目: ヘルスチェックが ok を返す
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let response = server
        .client
        .get(server.url("/api/health"))
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_check_in_then_list_and_expire() {
    // テスト項目: check-in したユーザーが一覧に現れ、TTL 経過後に消える（Room は残る）
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let response = server
        .post("/checkin", json!({"user_id": "alice", "room_id": "r1"}))
        .await;

    // then (期待する結果):
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let confirmation: ConfirmationDto = response.json().await.unwrap();
    assert_eq!(confirmation.user_id, "alice");
    assert_eq!(confirmation.room_id, "r1");

    server.clock.advance(TimeDelta::seconds(1));
    assert_eq!(server.list_rooms().await, vec![room_info("r1", &["alice"])]);

    server.clock.advance(TimeDelta::seconds(300));
    assert_eq!(server.list_rooms().await, vec![room_info("r1", &[])]);
}

#[tokio::test]
async fn test_update_presence_shorter_ttl() {
    // テスト項目: update_presence の短い TTL が元の TTL を上書きする
    // given (前提条件):
    let server = TestServer::start().await;
    server
        .post("/checkin", json!({"user_id": "bob", "room_id": "r2"}))
        .await;

    // when (操作):
    server.clock.advance(TimeDelta::seconds(5));
    let response = server
        .post(
            "/update_presence",
            json!({"user_id": "bob", "room_id": "r2", "expires_in": 10}),
        )
        .await;

    // then (期待する結果):
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    server.clock.advance(TimeDelta::seconds(7));
    assert_eq!(server.list_rooms().await, vec![room_info("r2", &["bob"])]);
    server.clock.advance(TimeDelta::seconds(3));
    assert_eq!(server.list_rooms().await, vec![room_info("r2", &[])]);
}

#[tokio::test]
async fn test_json_body_accepted_without_json_content_type() {
    // テスト項目: Content-Type が無い、またはフォーム形式でも JSON ボディは受け付ける
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let no_header = server
        .client
        .post(server.url("/checkin"))
        .body(r#"{"user_id":"alice","room_id":"r1"}"#)
        .send()
        .await
        .unwrap();
    let form_encoded = server
        .client
        .post(server.url("/update_presence"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body(r#"{"user_id":"alice","room_id":"r1","expires_in":60}"#)
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(no_header.status(), reqwest::StatusCode::OK);
    assert_eq!(form_encoded.status(), reqwest::StatusCode::OK);
    assert_eq!(server.list_rooms().await, vec![room_info("r1", &["alice"])]);
}

#[tokio::test]
async fn test_update_presence_unknown_room() {
    // テスト項目: 存在しない Room への update_presence は 404 room_not_found
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let response = server
        .post("/update_presence", json!({"user_id": "carol", "room_id": "r3"}))
        .await;

    // then (期待する結果):
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let error: ErrorResponseDto = response.json().await.unwrap();
    assert_eq!(error.error, "room_not_found");
    assert!(server.list_rooms().await.is_empty());
}

#[tokio::test]
async fn test_update_presence_unknown_user() {
    // テスト項目: Room にいないユーザーの update_presence は 404 user_not_found
    // given (前提条件):
    let server = TestServer::start().await;
    server
        .post("/checkin", json!({"user_id": "alice", "room_id": "r1"}))
        .await;

    // when (操作):
    let response = server
        .post("/update_presence", json!({"user_id": "dave", "room_id": "r1"}))
        .await;

    // then (期待する結果):
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let error: ErrorResponseDto = response.json().await.unwrap();
    assert_eq!(error.error, "user_not_found");
}

#[tokio::test]
async fn test_invalid_requests_are_rejected() {
    // テスト項目: 必須項目の欠落や不正な JSON は 400 invalid_request
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let missing_room = server.post("/checkin", json!({"user_id": "alice"})).await;
    let empty_user = server
        .post("/update_presence", json!({"user_id": "", "room_id": "r1"}))
        .await;
    let malformed = server
        .client
        .post(server.url("/checkin"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    for response in [missing_room, empty_user, malformed] {
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        let error: ErrorResponseDto = response.json().await.unwrap();
        assert_eq!(error.error, "invalid_request");
    }
    assert!(server.list_rooms().await.is_empty());
}
