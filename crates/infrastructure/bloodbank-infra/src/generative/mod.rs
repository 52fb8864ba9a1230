use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Shown when the service answered but produced no text.
pub const NO_CONTENT_TEXT: &str = "No content generated.";

/// Shown when the call itself failed.
pub const FAILURE_TEXT: &str =
    "Error: Unable to generate content. Please check the API key and network connection.";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generate request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generate request returned HTTP {0}")]
    Status(StatusCode),
}

/// Outcome of a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    Text(String),
    /// No candidate, or an empty first text part.
    Empty,
}

impl Generation {
    pub fn into_text(self) -> String {
        match self {
            Generation::Text(t) => t,
            Generation::Empty => NO_CONTENT_TEXT.to_string(),
        }
    }
}

/// Flattens any outcome into the text a user gets to read.
pub fn display_text(result: Result<Generation, GenerateError>) -> String {
    match result {
        Ok(generation) => generation.into_text(),
        Err(_) => FAILURE_TEXT.to_string(),
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(self) -> Generation {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.is_empty())
            .map(Generation::Text)
            .unwrap_or(Generation::Empty)
    }
}

/// One-shot client for a `generateContent` style endpoint. No retries, no
/// request timeout, no rate limiting.
#[derive(Debug, Clone)]
pub struct GenerativeClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GenerativeClient {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: bloodbank_config::trim_base_url(&base_url.into()),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(client: Client, cfg: &bloodbank_config::ClientConfig) -> Self {
        Self::new(
            client,
            cfg.genai_base_url.clone(),
            cfg.genai_model.clone(),
            cfg.genai_api_key.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    pub async fn generate(&self, prompt: &str) -> Result<Generation, GenerateError> {
        debug!(model = %self.model, prompt_len = prompt.len(), "generateContent");
        let body = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GenerateError::Status(status));
        }

        let parsed: GenerateResponse = resp.json().await?;
        Ok(parsed.first_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Generation {
        serde_json::from_str::<GenerateResponse>(json)
            .unwrap()
            .first_text()
    }

    #[test]
    fn picks_first_candidate_first_part() {
        let g = parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"one"},{"text":"two"}]}},
                {"content":{"parts":[{"text":"three"}]}}
            ]}"#,
        );
        assert_eq!(g, Generation::Text("one".into()));
    }

    #[test]
    fn missing_pieces_are_empty() {
        assert_eq!(parse("{}"), Generation::Empty);
        assert_eq!(parse(r#"{"candidates":[]}"#), Generation::Empty);
        assert_eq!(parse(r#"{"candidates":[{}]}"#), Generation::Empty);
        assert_eq!(
            parse(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#),
            Generation::Empty
        );
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: "hi" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"contents":[{"parts":[{"text":"hi"}]}]}));
    }

    #[test]
    fn display_text_fallbacks() {
        assert_eq!(display_text(Ok(Generation::Empty)), NO_CONTENT_TEXT);
        assert_eq!(
            display_text(Err(GenerateError::Status(StatusCode::FORBIDDEN))),
            FAILURE_TEXT
        );
    }
}
