//! Persistence seams used by the handlers.
//!
//! Handlers talk to [`ChatbotStore`] and [`UserStore`] rather than to the
//! repositories directly, so the request flow can run against any backing
//! store. [`PgStore`] is the production implementation over PostgreSQL.

use async_trait::async_trait;
use chatbot_core::customization::CustomizationPayload;
use chatbot_core::subscription::BillingState;
use chatbot_db::models::chatbot::{ChatbotCustomization, ChatbotSummary};
use chatbot_db::repositories::{ChatbotRepo, UserRepo};
use chatbot_db::DbPool;

/// Chatbot persistence.
#[async_trait]
pub trait ChatbotStore: Send + Sync {
    /// Whether a chatbot with `chatbot_id` exists and belongs to `user_id`.
    async fn is_owned_by(&self, chatbot_id: &str, user_id: &str) -> Result<bool, sqlx::Error>;

    /// Customization settings of a chatbot owned by `user_id`.
    async fn find_customization(
        &self,
        chatbot_id: &str,
        user_id: &str,
    ) -> Result<Option<ChatbotCustomization>, sqlx::Error>;

    /// Overwrite the customization settings of a chatbot owned by `user_id`.
    ///
    /// A chatbot that no longer matches is an error, not `None`.
    async fn update_customization(
        &self,
        chatbot_id: &str,
        user_id: &str,
        payload: &CustomizationPayload,
    ) -> Result<ChatbotSummary, sqlx::Error>;

    /// Reachability check for health reporting.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// User account lookups.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Billing state of a user, or `None` if the user does not exist.
    async fn find_billing(&self, user_id: &str) -> Result<Option<BillingState>, sqlx::Error>;
}

/// PostgreSQL-backed store delegating to the repository layer.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatbotStore for PgStore {
    async fn is_owned_by(&self, chatbot_id: &str, user_id: &str) -> Result<bool, sqlx::Error> {
        let count = ChatbotRepo::count_owned(&self.pool, chatbot_id, user_id).await?;
        Ok(count > 0)
    }

    async fn find_customization(
        &self,
        chatbot_id: &str,
        user_id: &str,
    ) -> Result<Option<ChatbotCustomization>, sqlx::Error> {
        ChatbotRepo::find_customization(&self.pool, chatbot_id, user_id).await
    }

    async fn update_customization(
        &self,
        chatbot_id: &str,
        user_id: &str,
        payload: &CustomizationPayload,
    ) -> Result<ChatbotSummary, sqlx::Error> {
        ChatbotRepo::update_customization(&self.pool, chatbot_id, user_id, payload).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        chatbot_db::health_check(&self.pool).await
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_billing(&self, user_id: &str) -> Result<Option<BillingState>, sqlx::Error> {
        let billing = UserRepo::find_billing(&self.pool, user_id).await?;
        Ok(billing.map(BillingState::from))
    }
}
