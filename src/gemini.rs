//! Request/response types for the Gemini `generateContent` endpoint, plus
//! the extraction of the single reply text we care about.

use serde::{Deserialize, Serialize};

use crate::error::RelayError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub system_instruction: SystemInstruction,
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateRequest {
    /// The fixed two-field payload: the system instruction and a single
    /// user turn. No history, no tools, no generation config.
    pub fn new(system_prompt: &str, user_message: &str) -> Self {
        Self {
            system_instruction: SystemInstruction {
                parts: vec![Part { text: system_prompt.to_string() }],
            },
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: user_message.to_string() }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Pull `candidates[0].content.parts[0].text` out of a 2xx response body.
///
/// A body with no (or empty) `candidates` is an [`RelayError::EmptyResponse`];
/// a candidate that is missing the nested content text is malformed, not
/// silently treated as empty.
pub fn extract_reply(body: &str) -> Result<String, RelayError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| RelayError::MalformedResponse(e.to_string()))?;

    let mut candidates = response.candidates;
    if candidates.is_empty() {
        return Err(RelayError::EmptyResponse);
    }

    candidates
        .remove(0)
        .content
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| {
            RelayError::MalformedResponse(
                "candidates[0].content.parts[0].text is missing".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_payload_shape() {
        let request = GenerateRequest::new("be brief", "hello there");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello there");
    }

    #[test]
    fn extracts_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"hi"}]}}]}"#;
        assert_eq!(extract_reply(body).unwrap(), "hi");
    }

    #[test]
    fn empty_candidates_is_empty_response() {
        let err = extract_reply(r#"{"candidates":[]}"#).unwrap_err();
        assert!(matches!(err, RelayError::EmptyResponse));
    }

    #[test]
    fn missing_candidates_field_is_empty_response() {
        let err = extract_reply(r#"{}"#).unwrap_err();
        assert!(matches!(err, RelayError::EmptyResponse));
    }

    #[test]
    fn candidate_without_text_is_malformed() {
        let err = extract_reply(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap_err();
        assert!(matches!(err, RelayError::MalformedResponse(_)));

        let err = extract_reply(r#"{"candidates":[{}]}"#).unwrap_err();
        assert!(matches!(err, RelayError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = extract_reply("<html>oops</html>").unwrap_err();
        assert!(matches!(err, RelayError::MalformedResponse(_)));
    }
}
