use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::prompt::build_recommendation_prompt;
use super::transport::Transport;
use super::types::RecommendationRequest;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const RECOMMEND_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("{0}")]
    Transport(String),
    #[error("Gemini API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Failed to parse Gemini response: {0}")]
    Malformed(String),
    #[error("Gemini returned no text{}", .0.as_deref().map(|r| format!(" (blocked: {r})")).unwrap_or_default())]
    Empty(Option<String>),
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Model endpoint settings
#[derive(Debug, Clone)]
pub struct ModelEndpoint {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ModelEndpoint {
    fn default() -> Self {
        Self {
            base_url: GEMINI_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: RECOMMEND_TIMEOUT,
        }
    }
}

/// Ask the model for recommendations and return its text verbatim
pub async fn recommend(
    endpoint: &ModelEndpoint,
    api_key: &str,
    request: &RecommendationRequest,
    transport: &Transport,
) -> Result<String, RecommendationError> {
    let client = transport
        .client(Some(endpoint.timeout))
        .map_err(|e| RecommendationError::Transport(e.to_string()))?;

    let body = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: Some(build_recommendation_prompt(request)),
            }],
        }],
    };

    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        endpoint.base_url.trim_end_matches('/'),
        endpoint.model
    );

    let response = client
        .post(url)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| RecommendationError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(RecommendationError::Api { status, body });
    }

    let api_response: GenerateContentResponse = response
        .json()
        .await
        .map_err(|e| RecommendationError::Malformed(e.to_string()))?;

    extract_text(api_response)
}

fn extract_text(response: GenerateContentResponse) -> Result<String, RecommendationError> {
    let block_reason = response.prompt_feedback.and_then(|f| f.block_reason);

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(RecommendationError::Empty(block_reason));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(RecommendationError::Empty(
            block_reason.or(candidate.finish_reason),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::serve_once;

    fn request() -> RecommendationRequest {
        RecommendationRequest {
            game_names: vec!["Fallout 4".to_string(), "Outer Worlds".to_string()],
            user_query: "adventure".to_string(),
            count: 1,
        }
    }

    fn endpoint(base_url: String) -> ModelEndpoint {
        ModelEndpoint {
            base_url,
            ..ModelEndpoint::default()
        }
    }

    #[tokio::test]
    async fn returns_model_text_verbatim() {
        let (base_url, server) = serve_once(
            200,
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"1. Outer Worlds\n"},{"text":"Because companions."}]},"finishReason":"STOP"}]}"#,
        )
        .await;

        let text = recommend(&endpoint(base_url), "K2", &request(), &Transport::default())
            .await
            .unwrap();
        assert_eq!(text, "1. Outer Worlds\nBecause companions.");

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /v1beta/models/gemini-3-flash-preview:generateContent"));
        assert!(raw.to_lowercase().contains("x-goog-api-key: k2"));
        assert!(raw.contains("Fallout 4, Outer Worlds"));
    }

    #[tokio::test]
    async fn api_error_carries_status_and_body() {
        let (base_url, server) =
            serve_once(429, r#"{"error":{"message":"Quota exceeded"}}"#).await;

        let err = recommend(&endpoint(base_url), "K2", &request(), &Transport::default())
            .await
            .unwrap_err();
        match err {
            RecommendationError::Api { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert!(body.contains("Quota exceeded"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn blocked_prompt_is_empty_result() {
        let (base_url, server) =
            serve_once(200, r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).await;

        let err = recommend(&endpoint(base_url), "K2", &request(), &Transport::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendationError::Empty(Some(ref r)) if r == "SAFETY"));
        assert_eq!(err.to_string(), "Gemini returned no text (blocked: SAFETY)");
        server.await.unwrap();
    }

    #[test]
    fn candidate_without_parts_is_empty() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#).unwrap();
        let err = extract_text(response).unwrap_err();
        assert!(matches!(err, RecommendationError::Empty(Some(ref r)) if r == "MAX_TOKENS"));
    }
}
