//! Content generation on top of a [`GenerativeClient`].
//!
//! Every public call routes to a model, builds exactly one request and
//! performs exactly one round trip. Endpoint errors propagate unchanged; the
//! only absorbed outcome is an image response without an inline part, which
//! yields `Ok(None)`.

pub mod image_ref;
pub mod prompts;

use crate::config::Settings;
use crate::constants::generation;
use crate::error::{CocreateError, Result};
use crate::llm::{
    Complexity, ContentType, GeminiClient, GenerateContentRequest, GenerativeClient,
    ModelRouter, ModelRoutingParams, Part, UseCase,
};
use serde::{Deserialize, Serialize};

use self::image_ref::{parse_data_uri, png_data_uri};

/// Caller-supplied brief. Not validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationContext {
    pub objective: String,
    pub audience: String,
    pub tone: String,
    pub style: String,
    pub restrictions: String,
}

pub struct ContentGenerator {
    client: Box<dyn GenerativeClient>,
    router: ModelRouter,
}

impl ContentGenerator {
    pub fn new(client: Box<dyn GenerativeClient>, router: ModelRouter) -> Self {
        Self { client, router }
    }

    /// Build a Gemini-backed generator, failing fast on a missing credential.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.validate()?;
        let client = GeminiClient::new(api_key).with_base_url(&settings.gemini.base_url);
        tracing::info!("Gemini client ready at {}", client.base_url());
        Ok(Self::new(
            Box::new(client),
            ModelRouter::new(settings.gemini.models.clone()),
        ))
    }

    pub fn router(&self) -> &ModelRouter {
        &self.router
    }

    /// Ask for four short clarifying questions about the brief.
    pub async fn generate_initial_context_questions(
        &self,
        prompt: &str,
        content_type: ContentType,
    ) -> Result<String> {
        let params = ModelRoutingParams::new(UseCase::ContextQuestions, content_type);
        let model = self.router.select_model(&params);

        let request = GenerateContentRequest::new(vec![Part::text(
            prompts::context_questions_prompt(prompt, content_type),
        )]);
        let response = self.client.generate_content(model, &request).await?;

        response
            .text()
            .ok_or_else(|| CocreateError::Llm("Response contained no text".into()))
    }

    /// Generate the final piece: a PNG data URI for images, copy for text.
    ///
    /// `Ok(None)` means the model answered without producing the expected
    /// output (no inline image, or no text).
    pub async fn generate_final_content(
        &self,
        prompt: &str,
        content_type: ContentType,
        context: &GenerationContext,
        image_ref: Option<&str>,
    ) -> Result<Option<String>> {
        let complexity = match content_type {
            ContentType::Text => Complexity::High,
            ContentType::Image => Complexity::Low,
        };
        let params = ModelRoutingParams::new(UseCase::ContentGeneration, content_type)
            .with_image_ref(image_ref.is_some())
            .with_complexity(complexity);
        let model = self.router.select_model(&params);

        match content_type {
            ContentType::Image => {
                let request = GenerateContentRequest::new(vec![Part::text(
                    prompts::image_prompt(prompt, context),
                )])
                .with_aspect_ratio(generation::IMAGE_ASPECT_RATIO);
                let response = self.client.generate_content(model, &request).await?;

                match response.first_inline_data() {
                    Some(inline) => Ok(Some(png_data_uri(&inline.data))),
                    None => {
                        tracing::warn!(model, "Image response contained no inline image data");
                        Ok(None)
                    }
                }
            }
            ContentType::Text => {
                let mut parts = vec![Part::text(prompts::text_prompt(
                    prompt,
                    context,
                    image_ref.is_some(),
                ))];

                if let Some(reference) = image_ref {
                    match parse_data_uri(reference) {
                        Some(inline) => parts.push(Part::InlineData {
                            inline_data: inline,
                        }),
                        None if reference.starts_with("data:") => {
                            tracing::warn!("Image reference is a data URI without payload; not attached");
                        }
                        None => {}
                    }
                }

                let request = GenerateContentRequest::new(parts);
                let response = self.client.generate_content(model, &request).await?;
                Ok(response.text())
            }
        }
    }
}
