// API type definitions module
// Request/response types for the analyze endpoint

use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentLabel;

/// Body of `POST /api/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Text to analyze. Missing key and `null` both deserialize to `None`.
    pub note: Option<String>,
}

/// Successful analysis result.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Formatted multi-line report.
    pub analysis: String,
    pub sentiment_label: SentimentLabel,
}

/// Failure variants of the analyze operation.
///
/// The boundary layer maps each variant to a status code; the transform
/// itself never touches HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// Caller supplied no analyzable text or an unreadable payload. 400.
    Input(String),
    /// Scoring or formatting failed. 500, logged for operators.
    Processing(String),
}

impl AnalyzeError {
    /// Fixed message for a missing/empty note.
    pub fn no_note() -> Self {
        Self::Input("No note provided".to_string())
    }
}

/// Error body shape shared by 400 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_field_is_optional() {
        let absent: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.note, None);

        let null: AnalyzeRequest = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(null.note, None);

        let present: AnalyzeRequest = serde_json::from_str(r#"{"note": "hi"}"#).unwrap();
        assert_eq!(present.note.as_deref(), Some("hi"));
    }

    #[test]
    fn test_response_field_names() {
        let response = AnalyzeResponse {
            analysis: "report".to_string(),
            sentiment_label: SentimentLabel::Neutral,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["analysis"], "report");
        assert_eq!(json["sentiment_label"], "neutral");
    }
}
