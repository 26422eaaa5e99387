mod store;

pub use store::ProjectStore;

use crate::generator::GenerationContext;
use crate::llm::ContentType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved piece of work. The store treats it as an opaque serde value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProject {
    pub id: String,
    pub title: String,
    pub prompt: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default)]
    pub context: GenerationContext,
    /// Generated text, or a PNG data URI for images
    #[serde(default)]
    pub result: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContentProject {
    pub fn new(title: impl Into<String>, prompt: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            prompt: prompt.into(),
            content_type,
            context: GenerationContext::default(),
            result: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_context(mut self, context: GenerationContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_result(mut self, result: Option<String>) -> Self {
        self.result = result;
        self
    }
}
