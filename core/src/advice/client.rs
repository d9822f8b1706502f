//! Advice client for the generative language API

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::advice::fallback::fallback_advice;
use crate::errors::CoreError;
use crate::models::advice::AdviceItem;
use crate::models::project::Framework;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// What `get_advice` returns when the live call fails.
///
/// The dashboard historically shipped both behaviors in different screens;
/// here the choice is explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Substitute the static fallback list
    #[default]
    Fallback,

    /// Return an empty list
    Empty,
}

/// Advice client configuration
#[derive(Debug, Clone)]
pub struct AdviceConfig {
    /// Generative language API base URL
    pub base_url: String,

    /// Model identifier
    pub model: String,

    /// API key. `None` deactivates live calls entirely in favor of the
    /// fallback list.
    pub api_key: Option<SecretString>,

    /// Behavior on request failure or malformed response
    pub failure_policy: FailurePolicy,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl AdviceConfig {
    /// Configuration with the API key taken from `GEMINI_API_KEY`, falling
    /// back to `API_KEY`. Absence of both silently disables live calls.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.is_empty())
            .map(SecretString::from);

        Self {
            api_key,
            ..Self::default()
        }
    }
}

/// Source of deployment advice, so the dashboard state can hold a mock in
/// tests.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Produce a full replacement set of recommendations for a project
    async fn get_advice(&self, project_name: &str, framework: Framework) -> Vec<AdviceItem>;
}

/// HTTP client for the external text-generation service
pub struct AdviceClient {
    client: reqwest::Client,
    config: AdviceConfig,
}

impl AdviceClient {
    /// Create a new advice client
    pub fn new(config: AdviceConfig) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Deployment recommendations for a project.
    ///
    /// With no API key configured this returns the fallback list without
    /// touching the network. Failures of the live call degrade per the
    /// configured [`FailurePolicy`]; they are never surfaced as errors.
    pub async fn get_advice(&self, project_name: &str, framework: Framework) -> Vec<AdviceItem> {
        let Some(api_key) = &self.config.api_key else {
            debug!("No advice API key configured, serving fallback list");
            return fallback_advice();
        };

        match self.request_advice(api_key, project_name, framework).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Advice request failed: {}", e);
                match self.config.failure_policy {
                    FailurePolicy::Fallback => fallback_advice(),
                    FailurePolicy::Empty => Vec::new(),
                }
            }
        }
    }

    async fn request_advice(
        &self,
        api_key: &SecretString,
        project_name: &str,
        framework: Framework,
    ) -> Result<Vec<AdviceItem>, CoreError> {
        let prompt = format!(
            "Provide 3 expert deployment and performance tips for a {framework} project \
             named {project_name}. Focus on speed, cost, and security."
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING" },
                            "content": { "type": "STRING" },
                            "impact": { "type": "STRING", "enum": ["high", "medium", "low"] }
                        },
                        "required": ["title", "content", "impact"]
                    }
                }
            }
        });

        let text = self.generate(api_key, &body).await?;
        parse_advice_payload(&text)
    }

    /// Ask the service to analyze a build log snippet.
    ///
    /// Plain-text supplement to the structured advice path; degrades to a
    /// fixed message on any failure or when no key is configured.
    pub async fn analyze_build_failure(&self, log_snippet: &str) -> String {
        const ANALYSIS_FAILED: &str = "Failed to analyze log.";

        let Some(api_key) = &self.config.api_key else {
            return ANALYSIS_FAILED.to_string();
        };

        let body = json!({
            "contents": [{ "parts": [{ "text": format!(
                "Analyze this build error log and provide a concise solution: \n\n{log_snippet}"
            ) }] }],
            "systemInstruction": { "parts": [{ "text":
                "You are a senior DevOps engineer specializing in React and Node.js. \
                 Provide direct, actionable solutions."
            }] }
        });

        match self.generate(api_key, &body).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Build log analysis failed: {}", e);
                ANALYSIS_FAILED.to_string()
            }
        }
    }

    /// Issue one generateContent call and return the first candidate's text
    async fn generate(
        &self,
        api_key: &SecretString,
        body: &serde_json::Value,
    ) -> Result<String, CoreError> {
        let url = self.generate_url();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose_secret())
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CoreError::AdviceError(format!("{}: {}", status, body)));
        }

        let response: GenerateContentResponse = response.json().await?;
        candidate_text(response)
    }
}

#[async_trait]
impl AdviceProvider for AdviceClient {
    async fn get_advice(&self, project_name: &str, framework: Framework) -> Vec<AdviceItem> {
        AdviceClient::get_advice(self, project_name, framework).await
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: String,
}

fn candidate_text(response: GenerateContentResponse) -> Result<String, CoreError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| CoreError::AdviceError("Response contained no candidates".to_string()))
}

/// Parse the JSON array the model was asked to produce
fn parse_advice_payload(text: &str) -> Result<Vec<AdviceItem>, CoreError> {
    let items: Vec<AdviceItem> = serde_json::from_str(text)?;
    Ok(items)
}
