//! Client for the Gemini `generateContent` REST endpoint.

use crate::config::SuggestSettings;
use crate::error::{NexusError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Once;
use tracing::{debug, warn};
use url::Url;

use super::provider::SuggestionProvider;

/// Variable consulted when the configured one is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Suggestion provider backed by the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    endpoint: Url,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    /// Build a provider, reading the API key from the environment once.
    pub fn from_settings(settings: &SuggestSettings) -> Result<Self> {
        let api_key = read_env_key(&settings.api_key_env)
            .or_else(|| read_env_key(FALLBACK_API_KEY_ENV));
        Self::with_api_key(settings, api_key)
    }

    /// Build a provider with an explicit key (or none).
    pub fn with_api_key(settings: &SuggestSettings, api_key: Option<String>) -> Result<Self> {
        ensure_crypto_provider();

        let endpoint = Url::parse(&settings.endpoint).map_err(|e| {
            NexusError::Config(format!("Invalid endpoint '{}': {}", settings.endpoint, e))
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(NexusError::Config(format!(
                "Endpoint '{}' cannot be used as a base URL",
                settings.endpoint
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("nexus/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NexusError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            model: settings.model.clone(),
            api_key_env: settings.api_key_env.clone(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    fn request_url(&self) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| NexusError::Config("Endpoint cannot be a base URL".to_string()))?
            .pop_if_empty()
            .push("v1beta")
            .push("models")
            .push(&format!("{}:generateContent", self.model));
        Ok(url)
    }
}

#[async_trait]
impl SuggestionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.api_key.is_none() {
            return Err(NexusError::MissingCredential {
                var: self.api_key_env.clone(),
            });
        }
        Ok(())
    }

    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| NexusError::MissingCredential {
            var: self.api_key_env.clone(),
        })?;
        let url = self.request_url()?;
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        debug!(model = %self.model, url = %url, "Sending generateContent request");
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                NexusError::ProviderRequest(format!("HTTP request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini returned an error status");
            return Err(NexusError::ProviderRequest(format!(
                "Server error: HTTP {} - {}",
                status.as_u16(),
                text
            )));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            NexusError::ProviderRequest(format!("Unexpected response shape: {}", e))
        })?;
        parsed
            .text()
            .ok_or_else(|| NexusError::ProviderRequest("Empty response".to_string()))
    }
}

fn read_env_key(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// reqwest is built without a bundled rustls provider; install ring once per process.
fn ensure_crypto_provider() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}
