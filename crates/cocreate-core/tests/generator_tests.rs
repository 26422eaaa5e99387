use cocreate_core::llm::{
    GenerateContentRequest, GenerateContentResponse, GenerativeClient, ModelSet, Part,
};
use cocreate_core::{
    CocreateError, ContentGenerator, ContentType, GenerationContext, ModelRouter,
};
use std::sync::{Arc, Mutex};

type Calls = Arc<Mutex<Vec<(String, GenerateContentRequest)>>>;

/// Mock client that records every call and replays one canned outcome.
struct MockClient {
    calls: Calls,
    reply: Result<String, String>,
}

impl MockClient {
    fn replying(json: &str) -> (Self, Calls) {
        let calls = Calls::default();
        (
            Self {
                calls: calls.clone(),
                reply: Ok(json.to_string()),
            },
            calls,
        )
    }

    fn failing(message: &str) -> (Self, Calls) {
        let calls = Calls::default();
        (
            Self {
                calls: calls.clone(),
                reply: Err(message.to_string()),
            },
            calls,
        )
    }
}

#[async_trait::async_trait]
impl GenerativeClient for MockClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, CocreateError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), request.clone()));
        match &self.reply {
            Ok(json) => Ok(serde_json::from_str(json).unwrap()),
            Err(message) => Err(CocreateError::Llm(message.clone())),
        }
    }
}

fn generator(client: MockClient) -> ContentGenerator {
    ContentGenerator::new(Box::new(client), ModelRouter::new(ModelSet::default()))
}

fn text_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
    .to_string()
}

fn brief(style: &str) -> GenerationContext {
    GenerationContext {
        objective: "Aumentar ventas".into(),
        audience: "Familias".into(),
        tone: "Cálido".into(),
        style: style.into(),
        restrictions: "Sin menores".into(),
    }
}

fn text_of(part: &Part) -> &str {
    match part {
        Part::Text { text, .. } => text,
        other => panic!("expected text part, got {other:?}"),
    }
}

// ========================================================================
// Context questions
// ========================================================================

#[tokio::test]
async fn test_context_questions_use_fast_model_and_return_text_verbatim() {
    let (client, calls) = MockClient::replying(&text_reply("1. ¿Objetivo?\n2. ¿Público?"));
    let generator = generator(client);

    let questions = generator
        .generate_initial_context_questions("Un anuncio de café", ContentType::Image)
        .await
        .unwrap();

    assert_eq!(questions, "1. ¿Objetivo?\n2. ¿Público?");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "gemini-3-flash-preview");
    let request = &calls[0].1;
    assert!(request.generation_config.is_none());
    assert_eq!(request.contents[0].parts.len(), 1);
    let prompt = text_of(&request.contents[0].parts[0]);
    assert!(prompt.contains("\"Un anuncio de café\""));
    assert!(prompt.contains("tipo IMAGEN"));
}

#[tokio::test]
async fn test_context_questions_propagate_endpoint_error() {
    let (client, calls) = MockClient::failing("quota exceeded");
    let generator = generator(client);

    let err = generator
        .generate_initial_context_questions("x", ContentType::Text)
        .await
        .unwrap_err();

    assert!(matches!(err, CocreateError::Llm(ref m) if m == "quota exceeded"));
    assert_eq!(calls.lock().unwrap().len(), 1, "no retry");
}

#[tokio::test]
async fn test_context_questions_without_text_is_error() {
    let (client, _calls) = MockClient::replying(r#"{"candidates": []}"#);
    let generator = generator(client);

    let result = generator
        .generate_initial_context_questions("x", ContentType::Text)
        .await;
    assert!(matches!(result, Err(CocreateError::Llm(_))));
}

// ========================================================================
// Image generation
// ========================================================================

#[tokio::test]
async fn test_image_returns_first_inline_part_as_png_data_uri() {
    let reply = serde_json::json!({
        "candidates": [{ "content": { "parts": [
            { "text": "Aquí tienes" },
            { "inlineData": { "mimeType": "image/webp", "data": "SU1HMQ==" } },
            { "inlineData": { "mimeType": "image/png", "data": "SU1HMg==" } }
        ] } }]
    })
    .to_string();
    let (client, calls) = MockClient::replying(&reply);
    let generator = generator(client);

    let result = generator
        .generate_final_content("Taza humeante", ContentType::Image, &brief("Photorealistic"), None)
        .await
        .unwrap();

    assert_eq!(result.as_deref(), Some("data:image/png;base64,SU1HMQ=="));

    let calls = calls.lock().unwrap();
    assert_eq!(calls[0].0, "gemini-2.5-flash-image");
    let request = &calls[0].1;
    let config = request.generation_config.as_ref().unwrap();
    assert_eq!(config.image_config.as_ref().unwrap().aspect_ratio, "1:1");

    let prompt = text_of(&request.contents[0].parts[0]);
    assert!(prompt.contains("Prompt: Taza humeante."));
    assert!(prompt.contains("Style: Photorealistic."));
    assert!(prompt.contains("cartoon, anime, 3d render"));
}

#[tokio::test]
async fn test_image_without_inline_part_is_none_not_error() {
    let (client, _calls) = MockClient::replying(&text_reply("I cannot draw that."));
    let generator = generator(client);

    let result = generator
        .generate_final_content("x", ContentType::Image, &brief(""), None)
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_image_with_reference_still_uses_image_model() {
    let (client, calls) = MockClient::replying("{}");
    let generator = generator(client);

    let result = generator
        .generate_final_content(
            "x",
            ContentType::Image,
            &brief(""),
            Some("data:image/jpeg;base64,AAAA"),
        )
        .await
        .unwrap();

    assert!(result.is_none());
    let calls = calls.lock().unwrap();
    assert_eq!(calls[0].0, "gemini-2.5-flash-image");
    // The image branch sends only the prompt block.
    assert_eq!(calls[0].1.contents[0].parts.len(), 1);
}

#[tokio::test]
async fn test_image_unknown_style_gets_base_negative_only() {
    let (client, calls) = MockClient::replying("{}");
    let generator = generator(client);

    generator
        .generate_final_content("x", ContentType::Image, &brief("Watercolor"), None)
        .await
        .unwrap();

    let calls = calls.lock().unwrap();
    let prompt = text_of(&calls[0].1.contents[0].parts[0]);
    assert!(prompt.contains(&format!(
        "(Negative Prompt): {}.",
        cocreate_core::constants::negative::BASE
    )));
}

// ========================================================================
// Text generation
// ========================================================================

#[tokio::test]
async fn test_text_uses_reasoning_model_without_reference() {
    let (client, calls) = MockClient::replying(&text_reply("Texto final"));
    let generator = generator(client);

    let result = generator
        .generate_final_content("Post de Instagram", ContentType::Text, &brief("Minimal"), None)
        .await
        .unwrap();

    assert_eq!(result.as_deref(), Some("Texto final"));
    let calls = calls.lock().unwrap();
    assert_eq!(calls[0].0, "gemini-3-pro-preview");
    let parts = &calls[0].1.contents[0].parts;
    assert_eq!(parts.len(), 1);
    let prompt = text_of(&parts[0]);
    assert!(prompt.contains("Prompt: Post de Instagram"));
    assert!(prompt.contains("Público: Familias"));
    assert!(!prompt.contains("imagen de referencia"));
}

#[tokio::test]
async fn test_text_attaches_data_uri_reference_after_prompt() {
    let (client, calls) = MockClient::replying(&text_reply("ok"));
    let generator = generator(client);

    generator
        .generate_final_content(
            "Descripción",
            ContentType::Text,
            &brief(""),
            Some("data:image/jpeg;base64,AAAA"),
        )
        .await
        .unwrap();

    let calls = calls.lock().unwrap();
    let parts = &calls[0].1.contents[0].parts;
    assert_eq!(parts.len(), 2);
    assert!(text_of(&parts[0]).contains("imagen de referencia"));
    assert_eq!(parts[1], Part::inline("image/jpeg", "AAAA"));
}

#[tokio::test]
async fn test_text_reference_with_empty_mime_defaults_to_png() {
    let (client, calls) = MockClient::replying(&text_reply("ok"));
    let generator = generator(client);

    generator
        .generate_final_content("x", ContentType::Text, &brief(""), Some("data:;base64,BBBB"))
        .await
        .unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls[0].1.contents[0].parts[1], Part::inline("image/png", "BBBB"));
}

#[tokio::test]
async fn test_text_non_data_uri_reference_is_mentioned_but_not_attached() {
    let (client, calls) = MockClient::replying(&text_reply("ok"));
    let generator = generator(client);

    generator
        .generate_final_content(
            "x",
            ContentType::Text,
            &brief(""),
            Some("https://cdn.example.com/ref.png"),
        )
        .await
        .unwrap();

    let calls = calls.lock().unwrap();
    let parts = &calls[0].1.contents[0].parts;
    assert_eq!(parts.len(), 1);
    assert!(text_of(&parts[0]).contains("imagen de referencia"));
}

#[tokio::test]
async fn test_text_propagates_endpoint_error() {
    let (client, _calls) = MockClient::failing("503 Service Unavailable");
    let generator = generator(client);

    let result = generator
        .generate_final_content("x", ContentType::Text, &brief(""), None)
        .await;
    assert!(result.is_err());
}
