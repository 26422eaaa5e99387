use crate::constants::models;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of content a project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "IMAGEN")]
    Image,
    #[serde(rename = "TEXTO")]
    Text,
}

impl ContentType {
    pub fn all() -> &'static [ContentType] {
        &[ContentType::Image, ContentType::Text]
    }

    /// Wire name, also used verbatim inside prompts.
    pub fn name(&self) -> &'static str {
        match self {
            ContentType::Image => "IMAGEN",
            ContentType::Text => "TEXTO",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "imagen" | "image" => Ok(ContentType::Image),
            "texto" | "text" => Ok(ContentType::Text),
            other => Err(format!("unknown content type '{other}' (expected IMAGEN or TEXTO)")),
        }
    }
}

/// What the model is being asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    ContextQuestions,
    ContentGeneration,
}

impl UseCase {
    pub fn all() -> &'static [UseCase] {
        &[UseCase::ContextQuestions, UseCase::ContentGeneration]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    High,
}

impl Complexity {
    pub fn all() -> &'static [Complexity] {
        &[Complexity::Low, Complexity::High]
    }
}

/// Inputs to a routing decision. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelRoutingParams {
    pub use_case: UseCase,
    pub content_type: ContentType,
    pub has_image_ref: bool,
    pub complexity: Complexity,
}

impl ModelRoutingParams {
    pub fn new(use_case: UseCase, content_type: ContentType) -> Self {
        Self {
            use_case,
            content_type,
            has_image_ref: false,
            complexity: Complexity::default(),
        }
    }

    pub fn with_image_ref(mut self, has_image_ref: bool) -> Self {
        self.has_image_ref = has_image_ref;
        self
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }
}

/// Which class of model a request should go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTier {
    /// Dedicated image generation
    Image,
    /// Low latency
    Fast,
    /// Stronger reasoning for text and multimodal input
    Reasoning,
}

impl ModelTier {
    /// Apply the routing rules in order; the first match wins.
    pub fn route(params: &ModelRoutingParams) -> Self {
        let generating = params.use_case == UseCase::ContentGeneration;

        if params.content_type == ContentType::Image && generating {
            return ModelTier::Image;
        }

        if params.use_case == UseCase::ContextQuestions || params.complexity == Complexity::Low {
            return ModelTier::Fast;
        }

        if generating && (params.content_type == ContentType::Text || params.has_image_ref) {
            return ModelTier::Reasoning;
        }

        ModelTier::Fast
    }
}

/// Model identifiers for each tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSet {
    pub image: String,
    pub fast: String,
    pub reasoning: String,
}

impl Default for ModelSet {
    fn default() -> Self {
        Self {
            image: models::IMAGE.to_string(),
            fast: models::FAST.to_string(),
            reasoning: models::REASONING.to_string(),
        }
    }
}

impl ModelSet {
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Image => &self.image,
            ModelTier::Fast => &self.fast,
            ModelTier::Reasoning => &self.reasoning,
        }
    }
}

/// Maps routing parameters to a concrete model id.
#[derive(Debug, Clone, Default)]
pub struct ModelRouter {
    models: ModelSet,
}

impl ModelRouter {
    pub fn new(models: ModelSet) -> Self {
        Self { models }
    }

    pub fn models(&self) -> &ModelSet {
        &self.models
    }

    pub fn select_model(&self, params: &ModelRoutingParams) -> &str {
        let tier = ModelTier::route(params);
        let model = self.models.model_for(tier);
        tracing::info!(
            "Model route: {:?}/{} (image_ref={}, complexity={:?}) -> {}",
            params.use_case,
            params.content_type,
            params.has_image_ref,
            params.complexity,
            model
        );
        model
    }
}
