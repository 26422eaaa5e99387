use crate::constants::endpoints;
use crate::error::CocreateError;
use crate::llm::traits::*;

/// REST client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: endpoints::GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_for(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            endpoints::GEMINI_API_VERSION,
            model
        )
    }
}

#[async_trait::async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, CocreateError> {
        let url = self.endpoint_for(model);
        let part_count: usize = request.contents.iter().map(|c| c.parts.len()).sum();
        tracing::debug!(model, part_count, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(endpoints::API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(CocreateError::Llm(format!(
                "Gemini API error ({}): {}",
                status, response_text
            )));
        }

        serde_json::from_str(&response_text)
            .map_err(|e| CocreateError::Llm(format!("Failed to parse response: {e}")))
    }
}
