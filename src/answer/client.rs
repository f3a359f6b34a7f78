use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::AskError;
use super::prompt::{ComposedPrompt, Message};
use crate::config::Credential;

/// Sends a composed prompt to a hosted model and returns its raw response.
///
/// Taking the [`Credential`] by reference means there is no way to reach the
/// service without one.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn complete(
        &self,
        credential: &Credential,
        prompt: &ComposedPrompt,
    ) -> Result<ModelResponse, AskError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [&'a Message; 2],
    stream: bool,
}

/// Body of a non-streaming chat completion response.
///
/// Only the generated text is read, everything else the service sends is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Client for Groq's OpenAI-compatible chat completions endpoint.
pub struct GroqClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl GroqClient {
    pub fn new(endpoint: String, model: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl InferenceClient for GroqClient {
    async fn complete(
        &self,
        credential: &Credential,
        prompt: &ComposedPrompt,
    ) -> Result<ModelResponse, AskError> {
        let url = self.completions_url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: prompt.messages(),
            stream: false,
        };

        tracing::debug!(%url, model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential.expose())
            .json(&chat_request)
            .send()
            .await
            .map_err(|source| AskError::Connect {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AskError::Status { status, body });
        }

        response.json::<ModelResponse>().await.map_err(AskError::Decode)
    }
}
