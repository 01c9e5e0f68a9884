pub mod chatbot_customization;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /chatbots/{chatbot_id}/config/customization      get, update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/chatbots", chatbot_customization::router())
}
