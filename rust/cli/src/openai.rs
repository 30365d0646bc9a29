//! OpenAI chat-completions backend for the LLM robots.

use std::time::Duration;

use robot_holdem_ai::llm::{LlmBackend, LlmError};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const SYSTEM_PROMPT: &str = "You are a poker-playing AI. Answer with a single JSON object \
                             with the keys ACTION and REASONING.";

#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAiBackend {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "temperature": 0.7,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

fn first_content(resp: ChatResponse) -> Result<String, LlmError> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| LlmError::BadResponse("no message content in response".into()))
}

impl LlmBackend for OpenAiBackend {
    fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        debug!(model = %self.model, "requesting chat completion");
        let resp = agent
            .post(&self.endpoint())
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(self.request_body(prompt))
            .map_err(|e| match e {
                ureq::Error::Status(code, r) => LlmError::Transport(format!(
                    "HTTP {}: {}",
                    code,
                    r.into_string().unwrap_or_default()
                )),
                ureq::Error::Transport(t) => LlmError::Transport(t.to_string()),
            })?;
        let body: ChatResponse = resp
            .into_json()
            .map_err(|e| LlmError::BadResponse(e.to_string()))?;
        first_content(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_asks_for_json_object() {
        let b = OpenAiBackend::new("sk-test", "gpt-4o-mini", Duration::from_secs(1));
        let body = b.request_body("hello");
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(b.model(), "gpt-4o-mini");
        assert_eq!(body["messages"][1]["content"], "hello");
    }

    #[test]
    fn endpoint_joins_base_url() {
        let b = OpenAiBackend::new("k", "m", Duration::from_secs(1))
            .with_base_url("http://localhost:8080/v1/");
        assert_eq!(b.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn extracts_first_choice() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"{\"ACTION\":\"CALL\"}"}}]}"#,
        )
        .unwrap();
        assert_eq!(first_content(resp).unwrap(), r#"{"ACTION":"CALL"}"#);

        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(first_content(empty), Err(LlmError::BadResponse(_))));
    }
}
