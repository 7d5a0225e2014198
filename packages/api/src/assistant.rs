//! # Assistant: Gemini `generateContent` client
//!
//! Turns a chat history (plus optional lead context) into a single
//! `generateContent` request and returns the first candidate's text.
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | `GEMINI_API_KEY` | - | required; its presence is the `has_ai` diagnostics flag |
//! | `GEMINI_MODEL` | `gemini-1.5-flash` | model name in the endpoint path |

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::{ChatMessage, ChatRole};

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const SYSTEM_PROMPT: &str = "You are Vera, the assistant of a real-estate sales team. \
Answer briefly and practically: follow-up messages, objection handling, \
financing questions and next steps for leads.";

/// The configured API key, if any.
pub fn api_key() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
}

fn model() -> String {
    std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

fn text_content(role: Option<&str>, text: String) -> Content {
    Content {
        role: role.map(str::to_string),
        parts: vec![Part { text }],
    }
}

fn build_request(messages: &[ChatMessage], context: Option<&str>) -> GenerateRequest {
    let mut system = SYSTEM_PROMPT.to_string();
    if let Some(ctx) = context.filter(|c| !c.trim().is_empty()) {
        system.push_str("\n\nContext for this conversation: ");
        system.push_str(ctx);
    }

    let contents = messages
        .iter()
        .map(|m| {
            let role = match m.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "model",
            };
            text_content(Some(role), m.text.clone())
        })
        .collect();

    GenerateRequest {
        system_instruction: text_content(None, system),
        contents,
    }
}

fn extract_reply(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().map(|p| p.text).collect();
    let text = text.trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Send the conversation and return the assistant's reply.
pub async fn ask(messages: &[ChatMessage], context: Option<&str>) -> Result<String, ApiError> {
    let key = api_key().ok_or(ApiError::MissingConfig("GEMINI_API_KEY"))?;
    let url = format!("{ENDPOINT}/{}:generateContent", model());

    let response: GenerateResponse = reqwest::Client::new()
        .post(url)
        .header("x-goog-api-key", key)
        .json(&build_request(messages, context))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    extract_reply(response).ok_or(ApiError::EmptyReply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_maps_roles_and_context() {
        let messages = vec![
            ChatMessage::user("How do I follow up?"),
            ChatMessage::assistant("Send a message today."),
        ];
        let request = build_request(&messages, Some("Lead Ana, status: New."));

        assert_eq!(request.contents.len(), 2);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
        assert_eq!(request.contents[1].role.as_deref(), Some("model"));
        assert!(request.system_instruction.parts[0].text.contains("Lead Ana"));
        assert!(request.system_instruction.role.is_none());
    }

    #[test]
    fn test_blank_context_is_ignored() {
        let request = build_request(&[ChatMessage::user("hi")], Some("  "));
        assert_eq!(request.system_instruction.parts[0].text, SYSTEM_PROMPT);
    }

    #[test]
    fn test_extract_reply_joins_parts() {
        let response = GenerateResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".into()),
                    parts: vec![Part { text: "Call ".into() }, Part { text: "back. ".into() }],
                }),
            }],
        };
        assert_eq!(extract_reply(response).as_deref(), Some("Call back."));
    }

    #[test]
    fn test_extract_reply_without_candidates() {
        let response = GenerateResponse { candidates: vec![] };
        assert!(extract_reply(response).is_none());
    }
}
