//! Repository for the `chatbots` table.

use chatbot_core::customization::CustomizationPayload;
use sqlx::PgPool;

use crate::models::chatbot::{Chatbot, ChatbotCustomization, ChatbotSummary, CreateChatbot};

/// Column list for full `chatbots` rows.
const COLUMNS: &str = "\
    id, name, user_id, display_branding, chat_title, \
    chat_message_placeholder, created_at, updated_at";

/// Column list for the customization projection.
const CUSTOMIZATION_COLUMNS: &str = "\
    id, name, display_branding, chat_title, chat_message_placeholder";

/// Provides data access for chatbots.
pub struct ChatbotRepo;

impl ChatbotRepo {
    /// Insert a new chatbot with default customization settings.
    ///
    /// Chatbots are created by the dashboard, not this service; only the
    /// repository integration tests call this, to seed rows.
    pub async fn create(pool: &PgPool, dto: &CreateChatbot) -> Result<Chatbot, sqlx::Error> {
        let query = format!(
            "INSERT INTO chatbots (id, name, user_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chatbot>(&query)
            .bind(&dto.id)
            .bind(&dto.name)
            .bind(&dto.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a chatbot by its ID, regardless of owner.
    ///
    /// Not used by the request path, which always scopes by owner. The
    /// repository integration tests use it to inspect full rows after writes.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Chatbot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chatbots WHERE id = $1");
        sqlx::query_as::<_, Chatbot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count chatbots matching both `id` and owner. Zero or one.
    pub async fn count_owned(pool: &PgPool, id: &str, user_id: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM chatbots WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Fetch the customization settings of a chatbot owned by `user_id`.
    pub async fn find_customization(
        pool: &PgPool,
        id: &str,
        user_id: &str,
    ) -> Result<Option<ChatbotCustomization>, sqlx::Error> {
        let query = format!(
            "SELECT {CUSTOMIZATION_COLUMNS} FROM chatbots WHERE id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, ChatbotCustomization>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the three customization columns of a chatbot owned by
    /// `user_id`.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] when no row matches, which
    /// includes a chatbot that changed owner after the caller's check.
    pub async fn update_customization(
        pool: &PgPool,
        id: &str,
        user_id: &str,
        payload: &CustomizationPayload,
    ) -> Result<ChatbotSummary, sqlx::Error> {
        sqlx::query_as::<_, ChatbotSummary>(
            "UPDATE chatbots SET \
                 display_branding = $3, \
                 chat_title = $4, \
                 chat_message_placeholder = $5 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING id, name, display_branding",
        )
        .bind(id)
        .bind(user_id)
        .bind(payload.display_branding)
        .bind(&payload.chat_title)
        .bind(&payload.chat_message_place_holder)
        .fetch_one(pool)
        .await
    }
}
