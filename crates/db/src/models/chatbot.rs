//! Chatbot models and DTOs.

use chatbot_core::types::{EntityId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `chatbots` table.
#[derive(Debug, Clone, FromRow)]
pub struct Chatbot {
    pub id: EntityId,
    pub name: String,
    pub user_id: EntityId,
    pub display_branding: bool,
    pub chat_title: String,
    #[sqlx(rename = "chat_message_placeholder")]
    pub chat_message_place_holder: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Projection returned after a customization update.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotSummary {
    pub id: EntityId,
    pub name: String,
    pub display_branding: bool,
}

/// The customization settings of a single chatbot.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotCustomization {
    pub id: EntityId,
    pub name: String,
    pub display_branding: bool,
    pub chat_title: String,
    #[sqlx(rename = "chat_message_placeholder")]
    pub chat_message_place_holder: String,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a chatbot. Customization columns take their defaults.
#[derive(Debug, Clone)]
pub struct CreateChatbot {
    pub id: EntityId,
    pub name: String,
    pub user_id: EntityId,
}
