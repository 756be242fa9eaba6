use anyhow::Result;
use reqwest::Client;

use crate::config::LlmConfig;
use crate::models::*;

/// Client for the hosted chat-completion endpoint. One request out, one
/// reply back; no retries, no caching.
pub struct CompletionService {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionService {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Ask the model about `user_input` and return the first choice's
    /// message content. `None` means the reply was missing choices or
    /// content, which callers report as a soft error.
    pub async fn answer(&self, user_input: &str) -> Result<Option<String>> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: self.build_prompt(user_input),
            }],
            temperature: 0.7,
            max_tokens: 800,
        };

        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("completion API error: {}", error_text));
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        Ok(content)
    }

    fn build_prompt(&self, user_input: &str) -> String {
        format!(
            r#"Provide information about {user_input} with these sections:
1. A brief summary (one paragraph only)
2. Key symptoms (list format)
3. Home remedies (list format)
4. Precautions (list format)

Be concise and factual. Do not use redundant headings like "**Summary:** Summary:" or "Brief Summary:" - just use single headings."#
        )
    }
}
