use crate::config::TranslationConfig;
use crate::error::{CollaboratorError, CollaboratorResult};
use crate::providers::TranslationProvider;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Translation provider speaking the LibreTranslate JSON API
///
/// `POST {base_url}/translate` with `q`, `source`, `target`, `format` and an
/// optional `api_key`; the answer carries `translatedText`.
pub struct LibreTranslateProvider {
    client: HttpClient,
    base_url: String,
    api_key: Option<String>,
    source_language: String,
}

impl LibreTranslateProvider {
    pub fn new(config: &TranslationConfig) -> CollaboratorResult<Self> {
        let client = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            source_language: config.source_language.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/translate", self.base_url)
    }

    fn build_request<'a>(
        &'a self,
        text: &'a str,
        target_language: &'a str,
    ) -> TranslateRequest<'a> {
        TranslateRequest {
            q: text,
            source: &self.source_language,
            target: target_language,
            format: "text",
            api_key: self.api_key.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct TranslateErrorBody {
    error: String,
}

#[async_trait::async_trait]
impl TranslationProvider for LibreTranslateProvider {
    async fn translate(&self, text: &str, target_language: &str) -> CollaboratorResult<String> {
        let request = self.build_request(text, target_language);
        debug!(
            target_language,
            chars = text.chars().count(),
            "Requesting translation"
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TranslateErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            warn!(%status, error = %message, "Translation provider rejected request");
            let detail = format!("{}: {}", status, message);
            return Err(CollaboratorError::Provider(detail));
        }

        let body = response.text().await?;
        let result: TranslateResponse = serde_json::from_str(&body)?;

        Ok(result.translated_text)
    }

    fn name(&self) -> &'static str {
        "libretranslate"
    }
}
