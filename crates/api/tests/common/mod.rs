#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chatbot_api::auth::jwt::{generate_session_token, JwtConfig};
use chatbot_api::config::ServerConfig;
use chatbot_api::router::build_app_router;
use chatbot_api::state::AppState;
use chatbot_api::store::{ChatbotStore, UserStore};
use chatbot_core::customization::CustomizationPayload;
use chatbot_core::subscription::{BillingState, PlanCatalog};
use chatbot_db::models::chatbot::{ChatbotCustomization, ChatbotSummary};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const BASIC_PRICE_ID: &str = "price_basic";
pub const PRO_PRICE_ID: &str = "price_pro";

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// A stored chatbot row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredChatbot {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub display_branding: bool,
    pub chat_title: String,
    pub chat_message_place_holder: String,
}

#[derive(Default)]
struct Tables {
    chatbots: HashMap<String, StoredChatbot>,
    users: HashMap<String, BillingState>,
}

/// In-memory implementation of both store traits, with switches to make
/// individual operations fail like an unreachable database would.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    pub fail_updates: AtomicBool,
    pub fail_reads: AtomicBool,
    pub update_calls: Mutex<usize>,
}

impl MemoryStore {
    pub fn add_user(&self, id: &str, billing: BillingState) {
        self.tables
            .lock()
            .unwrap()
            .users
            .insert(id.to_string(), billing);
    }

    pub fn add_chatbot(&self, id: &str, name: &str, owner: &str) {
        self.tables.lock().unwrap().chatbots.insert(
            id.to_string(),
            StoredChatbot {
                id: id.to_string(),
                name: name.to_string(),
                user_id: owner.to_string(),
                display_branding: true,
                chat_title: "How can we help you?".to_string(),
                chat_message_place_holder: "Type a message...".to_string(),
            },
        );
    }

    pub fn chatbot(&self, id: &str) -> StoredChatbot {
        self.tables.lock().unwrap().chatbots[id].clone()
    }

    pub fn update_count(&self) -> usize {
        *self.update_calls.lock().unwrap()
    }

    fn check_reads(&self) -> Result<(), sqlx::Error> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl ChatbotStore for MemoryStore {
    async fn is_owned_by(&self, chatbot_id: &str, user_id: &str) -> Result<bool, sqlx::Error> {
        self.check_reads()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .chatbots
            .get(chatbot_id)
            .is_some_and(|c| c.user_id == user_id))
    }

    async fn find_customization(
        &self,
        chatbot_id: &str,
        user_id: &str,
    ) -> Result<Option<ChatbotCustomization>, sqlx::Error> {
        self.check_reads()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .chatbots
            .get(chatbot_id)
            .filter(|c| c.user_id == user_id)
            .map(|c| ChatbotCustomization {
                id: c.id.clone(),
                name: c.name.clone(),
                display_branding: c.display_branding,
                chat_title: c.chat_title.clone(),
                chat_message_place_holder: c.chat_message_place_holder.clone(),
            }))
    }

    async fn update_customization(
        &self,
        chatbot_id: &str,
        user_id: &str,
        payload: &CustomizationPayload,
    ) -> Result<ChatbotSummary, sqlx::Error> {
        *self.update_calls.lock().unwrap() += 1;
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }

        let mut tables = self.tables.lock().unwrap();
        let chatbot = tables
            .chatbots
            .get_mut(chatbot_id)
            .filter(|c| c.user_id == user_id)
            .ok_or(sqlx::Error::RowNotFound)?;

        chatbot.display_branding = payload.display_branding;
        chatbot.chat_title = payload.chat_title.clone();
        chatbot.chat_message_place_holder = payload.chat_message_place_holder.clone();

        Ok(ChatbotSummary {
            id: chatbot.id.clone(),
            name: chatbot.name.clone(),
            display_branding: chatbot.display_branding,
        })
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check_reads()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_billing(&self, user_id: &str) -> Result<Option<BillingState>, sqlx::Error> {
        self.check_reads()?;
        Ok(self.tables.lock().unwrap().users.get(user_id).cloned())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Billing state of a user with an active basic subscription.
pub fn entitled_billing() -> BillingState {
    BillingState {
        stripe_customer_id: Some("cus_test".into()),
        stripe_subscription_id: Some("sub_test".into()),
        stripe_price_id: Some(BASIC_PRICE_ID.into()),
        stripe_current_period_end: Some(Utc::now() + Duration::days(30)),
    }
}

/// Billing state of a user on the free plan.
pub fn free_billing() -> BillingState {
    BillingState::default()
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            session_expiry_mins: 60,
        },
        plans: PlanCatalog::new(Some(BASIC_PRICE_ID.into()), Some(PRO_PRICE_ID.into())),
    }
}

/// Build the full application router over the given in-memory store.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        chatbots: store.clone(),
        users: store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a valid session token for `user_id`.
pub fn session_token(user_id: &str) -> String {
    generate_session_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// PATCH with a raw body, so tests can also send malformed JSON.
pub async fn patch_raw(app: Router, uri: &str, token: Option<&str>, body: String) -> Response {
    let mut builder = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    patch_raw(app, uri, token, body.to_string()).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
