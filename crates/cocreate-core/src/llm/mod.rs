mod traits;
mod gemini;
pub mod model_router;

pub use traits::*;
pub use gemini::GeminiClient;
pub use model_router::{
    Complexity, ContentType, ModelRouter, ModelRoutingParams, ModelSet, ModelTier, UseCase,
};
