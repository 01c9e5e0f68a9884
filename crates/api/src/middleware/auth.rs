//! Session extractor for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chatbot_core::types::EntityId;

use crate::auth::jwt::validate_token;
use crate::state::AppState;

/// The acting user of a request, if any.
///
/// Never rejects: a missing, malformed, or expired token yields a session
/// with no user, and the handler's ownership check then fails on its own.
///
/// ```ignore
/// async fn my_handler(session: Session) -> AppResult<Json<()>> {
///     tracing::info!(user_id = ?session.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The user's id (from `claims.sub`).
    pub user_id: Option<EntityId>,
}

impl Session {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(Session::default());
        };

        match validate_token(token, &state.config.jwt) {
            Ok(claims) => Ok(Session {
                user_id: Some(claims.sub),
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid session token");
                Ok(Session::default())
            }
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}
