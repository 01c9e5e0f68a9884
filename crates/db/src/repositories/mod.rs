//! Repository layer: one zero-sized struct per table exposing async query
//! functions over a [`sqlx::PgPool`].

pub mod chatbot_repo;
pub mod user_repo;

pub use chatbot_repo::ChatbotRepo;
pub use user_repo::UserRepo;
