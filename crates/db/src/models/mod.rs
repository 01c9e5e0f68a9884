pub mod chatbot;
pub mod user;
