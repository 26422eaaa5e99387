//! Prompt assembly for the three request shapes.
//!
//! Question and text prompts are Spanish; the image prompt is English.

use super::GenerationContext;
use crate::constants::{generation, negative};
use crate::llm::ContentType;

/// Extra negative terms for an exact style name, if the style is known.
pub fn style_negative(style: &str) -> Option<&'static str> {
    negative::STYLES
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, terms)| *terms)
}

/// Base negative terms, plus the style's own terms when the style is known.
pub fn negative_prompt(style: &str) -> String {
    match style_negative(style) {
        Some(extra) => format!("{}, {}", negative::BASE, extra),
        None => negative::BASE.to_string(),
    }
}

pub fn context_questions_prompt(prompt: &str, content_type: ContentType) -> String {
    format!(
        "Actúa como un Diseñador de Soluciones Digitales. El usuario quiere crear un contenido de tipo {content_type} con el siguiente prompt: \"{prompt}\".\n\
         Para garantizar un resultado profesional y ético en Marketing, genera {count} preguntas breves para obtener contexto sobre: Objetivo, Público, Tono/Estilo y Restricciones.\n\
         Responde solo con las preguntas en un formato de lista amigable.",
        count = generation::CONTEXT_QUESTION_COUNT,
    )
}

pub fn image_prompt(prompt: &str, context: &GenerationContext) -> String {
    let negative = negative_prompt(&context.style);
    format!(
        "Marketing content generation. Type: Image.\n\
         Prompt: {prompt}.\n\
         Objective: {objective}.\n\
         Audience: {audience}.\n\
         Tone: {tone}.\n\
         Style: {style}.\n\
         Restrictions: {restrictions}.\n\
         \n\
         Avoid the following (Negative Prompt): {negative}.\n\
         \n\
         Professional advertising quality, high detail.",
        objective = context.objective,
        audience = context.audience,
        tone = context.tone,
        style = context.style,
        restrictions = context.restrictions,
    )
}

pub fn text_prompt(prompt: &str, context: &GenerationContext, has_image_ref: bool) -> String {
    let image_note = if has_image_ref {
        "Se ha adjuntado una imagen de referencia. Analízala y asegúrate de que el texto sea coherente con lo que se ve en la imagen.\n"
    } else {
        ""
    };
    format!(
        "Actúa como un Editor de Contenido Publicitario. Genera un texto basado en:\n\
         Prompt: {prompt}\n\
         Objetivo: {objective}\n\
         Público: {audience}\n\
         Tono: {tone}\n\
         Estilo: {style}\n\
         Restricciones: {restrictions}\n\
         {image_note}\
         \n\
         Asegúrate de que sea profesional, creativo y cumpla con las normas de privacidad.",
        objective = context.objective,
        audience = context.audience,
        tone = context.tone,
        style = context.style,
        restrictions = context.restrictions,
    )
}
