pub mod completion_service;
pub mod config;
pub mod models;
pub mod response_extractor;

pub use completion_service::CompletionService;
pub use config::{AppConfig, LlmConfig};
pub use models::*;
pub use response_extractor::extract_structured_answer;
