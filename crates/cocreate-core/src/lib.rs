pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod llm;
pub mod project;

// Re-export key types
pub use config::Settings;
pub use error::{CocreateError, Result};
pub use generator::{ContentGenerator, GenerationContext};
pub use llm::{
    Complexity, ContentType, GeminiClient, GenerativeClient, ModelRouter, ModelRoutingParams,
    UseCase,
};
pub use project::{ContentProject, ProjectStore};
