//! Integration tests for the daily motivation endpoint.
//!
//! Verifies idempotency through the full HTTP stack: one generation per
//! user per UTC day, identical responses within the day, and per-owner
//! isolation.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use jobhop::adapters::auth::MockSessionValidator;
use jobhop::adapters::http::motivation::{motivation_routes, MotivationHandlers};
use jobhop::adapters::http::middleware::{auth_middleware, AuthState};
use jobhop::application::handlers::motivation::DailyMessageHandler;
use jobhop::domain::foundation::UserId;
use jobhop::domain::motivation::DailyMessage;
use jobhop::ports::{GeneratorError, MessageGenerator, MessageStore, MessageStoreError};

// =============================================================================
// Test Infrastructure
// =============================================================================

#[derive(Default)]
struct InMemoryMessageStore {
    rows: Mutex<Vec<DailyMessage>>,
}

impl InMemoryMessageStore {
    fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn find_for_day(
        &self,
        owner: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DailyMessage>, MessageStoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|m| &m.owner == owner && m.display_date == date)
            .cloned())
    }

    async fn insert(&self, message: &DailyMessage) -> Result<(), MessageStoreError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|m| m.owner == message.owner && m.display_date == message.display_date)
        {
            return Err(MessageStoreError::DuplicateDay);
        }
        rows.push(message.clone());
        Ok(())
    }
}

struct CountingGenerator {
    calls: AtomicU32,
}

impl CountingGenerator {
    fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl MessageGenerator for CountingGenerator {
    async fn generate(&self) -> Result<String, GeneratorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("Wiadomość numer {}", call))
    }
}

fn test_app(
    store: Arc<InMemoryMessageStore>,
    generator: Arc<CountingGenerator>,
) -> Router {
    let handlers = MotivationHandlers::new(Arc::new(DailyMessageHandler::new(store, generator)));

    let validator: AuthState = Arc::new(
        MockSessionValidator::new()
            .with_test_user("token-a", "user-a")
            .with_test_user("token-b", "user-b"),
    );

    Router::new()
        .nest("/api/messages", motivation_routes(handlers))
        .layer(axum::middleware::from_fn_with_state(
            validator,
            auth_middleware,
        ))
}

async fn get_message(app: &Router, token: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri("/api/messages/daily-motivation")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn repeated_requests_return_the_same_message() {
    let store = Arc::new(InMemoryMessageStore::default());
    let generator = Arc::new(CountingGenerator::new());
    let app = test_app(store.clone(), generator.clone());

    let (status, first) = get_message(&app, "token-a").await;
    assert_eq!(status, StatusCode::OK);

    let (status, second) = get_message(&app, "token-a").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(first["message"], second["message"]);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.row_count(), 1);
}

#[tokio::test]
async fn each_owner_gets_their_own_message() {
    let store = Arc::new(InMemoryMessageStore::default());
    let generator = Arc::new(CountingGenerator::new());
    let app = test_app(store.clone(), generator.clone());

    let (_status, for_a) = get_message(&app, "token-a").await;
    let (_status, for_b) = get_message(&app, "token-b").await;

    assert_ne!(for_a["message"], for_b["message"]);
    assert_eq!(store.row_count(), 2);
}

#[tokio::test]
async fn unauthenticated_request_yields_401() {
    let store = Arc::new(InMemoryMessageStore::default());
    let generator = Arc::new(CountingGenerator::new());
    let app = test_app(store, generator.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/messages/daily-motivation")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}
