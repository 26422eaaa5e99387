use crate::constants::generation;
use crate::llm::InlineData;

/// Parse a `data:<mime>;base64,<payload>` reference into an inline part.
///
/// Returns `None` for anything that is not a data URI or carries no payload.
/// An empty or malformed MIME segment falls back to `image/png`.
pub fn parse_data_uri(image_ref: &str) -> Option<InlineData> {
    let rest = image_ref.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if payload.is_empty() {
        return None;
    }

    let mime = header.split(';').next().unwrap_or("").trim();
    let mime_type = if mime.contains('/') {
        mime.to_string()
    } else {
        generation::DEFAULT_IMAGE_MIME.to_string()
    };

    Some(InlineData {
        mime_type,
        data: payload.to_string(),
    })
}

/// Wrap base64 image bytes as a PNG data URI.
pub fn png_data_uri(data: &str) -> String {
    format!("{}{}", generation::IMAGE_DATA_URI_PREFIX, data)
}
