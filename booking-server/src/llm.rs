/// Groq API integration module
/// Handles the single blocking round trip to the chat-completions endpoint.
/// No retry and no timeout override beyond the transport default.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Low temperature favours factual consistency over creativity.
const TEMPERATURE: f64 = 0.2;
const MAX_TOKENS: i32 = 1000;

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Groq chat-completions request (OpenAI-compatible wire format)
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: i32,
}

/// Groq chat-completions response
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: String,
}

/// Submit a system context plus the raw user question and return the
/// completion text verbatim.
pub async fn call_completion(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    system_context: &str,
    user_message: &str,
) -> Result<String> {
    let request = CompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_context.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_message.to_string(),
            },
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };

    let response = client
        .post(GROQ_API_URL)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let error_text = response.text().await?;
        return Err(anyhow!("Groq API error: {}", error_text));
    }

    let completion: CompletionResponse = response.json().await?;

    if let Some(choice) = completion.choices.first() {
        Ok(choice.message.content.clone())
    } else {
        Err(anyhow!("No response from Groq"))
    }
}
