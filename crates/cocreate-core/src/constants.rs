/// CoCreate — centralized constants.
/// All model ids, endpoints, prompt tables and storage names live here.
/// Never hardcode these values elsewhere.

// ─── Models ───────────────────────────────────────────────────────────────────

pub mod models {
    /// Dedicated image-generation model
    pub const IMAGE: &str = "gemini-2.5-flash-image";
    /// Low-latency model for context questions and light tasks
    pub const FAST: &str = "gemini-3-flash-preview";
    /// High-reasoning model for text and multimodal generation
    pub const REASONING: &str = "gemini-3-pro-preview";
}

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
    pub const GEMINI_API_VERSION: &str = "v1beta";
    pub const API_KEY_HEADER: &str = "x-goog-api-key";
}

// ─── Environment ──────────────────────────────────────────────────────────────

pub mod env {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Legacy variable consulted when the configured one is unset
    pub const FALLBACK_API_KEY: &str = "API_KEY";
}

// ─── Negative Prompting ───────────────────────────────────────────────────────

pub mod negative {
    pub const BASE: &str = "blurry, low quality, watermark, text artifacts, extra fingers, deformed hands, distorted face, bad anatomy, grainy, low resolution, cropped, out of frame, signature, cut off, bad proportions";

    /// Style name (exact match) -> extra negative terms
    pub const STYLES: &[(&str, &str)] = &[
        (
            "Photorealistic",
            "cartoon, anime, 3d render, illustration, drawing, painting, digital art, simplified",
        ),
        (
            "Anime",
            "realistic, photo, 3d render, grainy, realistic skin textures, real life",
        ),
        (
            "Digital Art",
            "low detail, sketch, messy, simple shapes, photo",
        ),
    ];
}

// ─── Generation ───────────────────────────────────────────────────────────────

pub mod generation {
    pub const IMAGE_ASPECT_RATIO: &str = "1:1";
    pub const IMAGE_DATA_URI_PREFIX: &str = "data:image/png;base64,";
    pub const DEFAULT_IMAGE_MIME: &str = "image/png";
    pub const CONTEXT_QUESTION_COUNT: usize = 4;
}

// ─── Storage ──────────────────────────────────────────────────────────────────

pub mod storage {
    pub const DB_FILE: &str = "cocreate.db";
    pub const STORE_NAME: &str = "projects";
    pub const SCHEMA_VERSION: i64 = 1;
    /// The single logical key holding the whole project list
    pub const ALL_PROJECTS_KEY: &str = "all_projects";
}

// ─── Config Paths ─────────────────────────────────────────────────────────────

pub mod paths {
    pub const CONFIG_DIR: &str = "cocreate";
    pub const CONFIG_FILE: &str = "config.toml";
}
