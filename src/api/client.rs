use super::types::*;
use crate::{Error, Result, config::ApiConfig};
use async_trait::async_trait;
use tracing::debug;

/// The remote translation service as seen by the client.
#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// Translates already validated text and returns the Spanish result.
    async fn translate(&self, text: &str) -> Result<String>;

    /// Probes the service. Any non-2xx status is an error.
    async fn health(&self) -> Result<()>;
}

pub struct HttpTranslationApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTranslationApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl TranslationApi for HttpTranslationApi {
    async fn translate(&self, text: &str) -> Result<String> {
        let url = self.endpoint("translate");
        debug!("POST {} ({} chars)", url, text.chars().count());

        let request = TranslationRequest {
            text: text.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = ErrorResponse::message_from_body(&body);
            debug!("Translation service returned HTTP {}: {}", status, message);
            return Err(Error::TranslationFailed(message));
        }

        let parsed: TranslationResponse = serde_json::from_str(&body)?;
        if let Some(original) = parsed.original_text.as_deref() {
            debug!("Service echoed original text: {}", original);
        }
        Ok(parsed.translated_text)
    }

    async fn health(&self) -> Result<()> {
        let url = self.endpoint("health");
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Unhealthy(status));
        }

        if let Ok(health) = response.json::<HealthResponse>().await {
            debug!("Service health: {} ({})", health.status, health.message);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn api_with_base(base_url: &str) -> HttpTranslationApi {
        HttpTranslationApi::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let api = api_with_base("http://localhost:8000/api/");
        assert_eq!(api.base_url(), "http://localhost:8000/api");
        assert_eq!(api.endpoint("translate"), "http://localhost:8000/api/translate");
        assert_eq!(api.endpoint("/health"), "http://localhost:8000/api/health");
    }
}
