//! Wire types and decoding for the generative-language API.
//!
//! Only the pure half lives here: prompt construction, request/response
//! shapes and response parsing. The single-shot HTTP call is the UI's job.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::post::Sentiment;

/// Model used for both insight operations.
pub const INSIGHT_MODEL: &str = "gemini-3-flash-preview";

/// Neither operation fires below this many characters of review text.
pub const MIN_INSIGHT_LEN: usize = 10;

/// Shown when the summary call fails in any way.
pub const SUMMARY_FALLBACK: &str = "AI Insight currently unavailable.";

/// Shown when the call succeeds but carries no text.
pub const SUMMARY_EMPTY: &str = "No summary available.";

/// True once the text is long enough to bother the model with.
pub fn meets_min_len(text: &str) -> bool {
    text.trim().len() >= MIN_INSIGHT_LEN
}

pub fn summary_prompt(review: &str) -> String {
    format!("Summarize this travel review in one short sentence: \"{review}\"")
}

pub fn sentiment_prompt(text: &str) -> String {
    format!(
        "Analyze the sentiment of this travel review: \"{text}\". \
         Return only a JSON object with \"sentiment\" (Good/Bad) and \"confidence\" (0-1)."
    )
}

// ─── Request/Response shapes ─────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Plain-text request carrying a single prompt.
    pub fn text(prompt: String) -> Self {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: None,
        }
    }

    /// Same, but asking the model for a JSON body.
    pub fn json(prompt: String) -> Self {
        GenerateContentRequest {
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".into(),
            }),
            ..GenerateContentRequest::text(prompt)
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// The first text part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

// ─── Sentiment judgment ──────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("malformed judgment: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The model's structured verdict on a piece of review text.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SentimentJudgment {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

impl SentimentJudgment {
    /// What callers use when the round trip fails for any reason.
    pub fn fallback() -> Self {
        SentimentJudgment {
            sentiment: Sentiment::Good,
            confidence: 0.0,
        }
    }
}

/// Decode the model's JSON verdict. Confidence is clamped into [0, 1];
/// anything unparseable is an error the caller maps to the fallback.
pub fn parse_sentiment_response(raw: &str) -> Result<SentimentJudgment, InsightError> {
    let mut judgment: SentimentJudgment = serde_json::from_str(raw.trim())?;
    judgment.confidence = judgment.confidence.clamp(0.0, 1.0);
    Ok(judgment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_len() {
        assert!(!meets_min_len(""));
        assert!(!meets_min_len("too short"));
        assert!(!meets_min_len("         padded        "));
        assert!(meets_min_len("long enough to analyze"));
    }

    #[test]
    fn test_prompts_embed_the_text() {
        assert!(summary_prompt("lovely hotel").contains("\"lovely hotel\""));
        assert!(sentiment_prompt("awful taxi").contains("\"awful taxi\""));
    }

    #[test]
    fn test_request_serialization() {
        let req = GenerateContentRequest::json("hi".into());
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
        assert!(json.contains("\"text\":\"hi\""));

        let plain = serde_json::to_string(&GenerateContentRequest::text("hi".into())).unwrap();
        assert!(!plain.contains("generationConfig"));
    }

    #[test]
    fn test_first_text_extraction() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"A fine stay."}]}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.first_text(), Some("A fine stay."));

        let empty: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(empty.first_text(), None);
    }

    #[test]
    fn test_parse_judgment() {
        let j = parse_sentiment_response(r#"{"sentiment":"Bad","confidence":0.82}"#).unwrap();
        assert_eq!(j.sentiment, Sentiment::Bad);
        assert!((j.confidence - 0.82).abs() < 1e-9);
    }

    #[test]
    fn test_parse_clamps_confidence() {
        let j = parse_sentiment_response(r#"{"sentiment":"Good","confidence":3.5}"#).unwrap();
        assert_eq!(j.confidence, 1.0);
        let j = parse_sentiment_response(r#"{"sentiment":"Good","confidence":-1}"#).unwrap();
        assert_eq!(j.confidence, 0.0);
    }

    #[test]
    fn test_parse_failures() {
        assert!(parse_sentiment_response("not json").is_err());
        assert!(parse_sentiment_response(r#"{"sentiment":"Meh","confidence":0.5}"#).is_err());
        assert!(parse_sentiment_response(r#"{"confidence":0.5}"#).is_err());
    }

    #[test]
    fn test_fallback_judgment() {
        let f = SentimentJudgment::fallback();
        assert_eq!(f.sentiment, Sentiment::Good);
        assert_eq!(f.confidence, 0.0);
    }
}
