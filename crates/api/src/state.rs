use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::{ChatbotStore, UserStore};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Chatbot persistence (ownership checks, customization reads and writes).
    pub chatbots: Arc<dyn ChatbotStore>,
    /// User billing lookups for plan resolution.
    pub users: Arc<dyn UserStore>,
    /// Server configuration (JWT settings, plan catalog).
    pub config: Arc<ServerConfig>,
}
