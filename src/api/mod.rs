mod client;
mod types;

pub use client::{HttpTranslationApi, TranslationApi};
pub use types::{ErrorResponse, HealthResponse, TranslationRequest, TranslationResponse};
