pub mod chatbot_customization;
