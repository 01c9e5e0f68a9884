//! Handlers for chatbot customization settings.
//!
//! Owners can read the settings of their chatbots at any plan level; writing
//! them requires a plan that allows hiding the branding footer.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chatbot_core::customization::CustomizationPayload;
use chatbot_core::error::CoreError;
use chatbot_core::subscription::UserSubscriptionPlan;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::Session;
use crate::state::AppState;

/// Largest customization body accepted; anything bigger fails as unexpected.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// GET /api/chatbots/{chatbotId}/config/customization
///
/// Return the customization settings of a chatbot owned by the session user.
pub async fn get_customization(
    session: Session,
    State(state): State<AppState>,
    Path(chatbot_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user_id = session_user(&session)?;

    let customization = state
        .chatbots
        .find_customization(&chatbot_id, user_id)
        .await?
        .ok_or_else(|| not_owner(&chatbot_id, user_id))?;

    Ok(Json(customization))
}

/// PATCH /api/chatbots/{chatbotId}/config/customization
///
/// Guards run in order, each short-circuiting: ownership (403), plan
/// entitlement (402), body schema (422). Only then is the row written.
///
/// The body is read only after the plan gate, so its size never affects the
/// ownership or plan outcome.
pub async fn update_customization(
    session: Session,
    State(state): State<AppState>,
    Path(chatbot_id): Path<String>,
    body: Body,
) -> AppResult<impl IntoResponse> {
    let user_id = session_user(&session)?;
    if !state.chatbots.is_owned_by(&chatbot_id, user_id).await? {
        return Err(not_owner(&chatbot_id, user_id));
    }

    let plan = current_plan(&state, user_id).await?;
    if !plan.disable_branding() {
        tracing::info!(
            user_id,
            chatbot_id = %chatbot_id,
            plan = %plan.plan.name,
            "Customization update blocked by plan",
        );
        return Err(CoreError::RequiresHigherPlan.into());
    }

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    let payload = CustomizationPayload::parse(&body).map_err(CoreError::Validation)?;

    let chatbot = state
        .chatbots
        .update_customization(&chatbot_id, user_id, &payload)
        .await?;

    tracing::info!(
        user_id,
        chatbot_id = %chatbot.id,
        display_branding = payload.display_branding,
        "Chatbot customization updated",
    );

    Ok(Json(chatbot))
}

/// The session user, or 403 when the request carries no valid session.
fn session_user(session: &Session) -> AppResult<&str> {
    session
        .user_id()
        .ok_or_else(|| CoreError::Forbidden("No active session".into()).into())
}

fn not_owner(chatbot_id: &str, user_id: &str) -> AppError {
    CoreError::Forbidden(format!("User {user_id} does not own chatbot {chatbot_id}")).into()
}

/// Resolve the user's current plan from their billing state.
///
/// A missing user at this point is an inconsistency, not a client error.
async fn current_plan(state: &AppState, user_id: &str) -> AppResult<UserSubscriptionPlan> {
    let billing = state
        .users
        .find_billing(user_id)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("User {user_id} not found")))?;

    Ok(state.config.plans.resolve(&billing, chrono::Utc::now()))
}
