//! Route definitions for chatbot customization settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::chatbot_customization;
use crate::state::AppState;

/// Chatbot customization routes mounted at `/chatbots`.
///
/// ```text
/// GET   /{chatbot_id}/config/customization  -> get_customization
/// PATCH /{chatbot_id}/config/customization  -> update_customization
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{chatbot_id}/config/customization",
        get(chatbot_customization::get_customization)
            .patch(chatbot_customization::update_customization),
    )
}
