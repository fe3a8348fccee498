use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Longest input, in characters, accepted after trimming.
pub const MAX_INPUT_CHARS: usize = 500;

/// Fallback shown when the service gives no usable failure detail.
pub const GENERIC_FAILURE: &str = "Translation failed";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter some text to translate.")]
    EmptyInput,

    #[error("Text is too long. Maximum {max} characters.")]
    InputTooLong { max: usize },

    #[error("{0}")]
    TranslationFailed(String),

    #[error("Health check returned HTTP {0}")]
    Unhealthy(reqwest::StatusCode),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn translation_failed(msg: impl Into<String>) -> Self {
        Self::TranslationFailed(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Validation failures are caught before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::InputTooLong { .. })
    }

    /// The text shown in the error region for a failed attempt.
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            format!("Translation failed: {}", self)
        }
    }
}
