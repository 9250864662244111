// Analyze handler module

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

use super::response::{error_response, json_response};
use super::types::{AnalyzeError, AnalyzeRequest, AnalyzeResponse};
use crate::config::AppState;
use crate::logger;
use crate::sentiment::{self, Scorer, SentimentLabel};

/// Handle `POST /api/analyze`.
///
/// Reads the body, runs the pure analyze transform, and maps its outcome to
/// a status code: success 200, input failure 400, processing failure 500.
pub async fn handle_analyze(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let body = if let Ok(collected) = req.collect().await {
        collected.to_bytes()
    } else {
        logger::log_api_request("POST", "/api/analyze", 400);
        return Ok(error_response(
            StatusCode::BAD_REQUEST,
            "Failed to read request body",
        ));
    };

    match analyze(&state.scorer, &body) {
        Ok(analysis) => {
            logger::log_api_request("POST", "/api/analyze", 200);
            json_response(StatusCode::OK, &analysis)
        }
        Err(AnalyzeError::Input(message)) => {
            logger::log_api_request("POST", "/api/analyze", 400);
            Ok(error_response(StatusCode::BAD_REQUEST, &message))
        }
        Err(AnalyzeError::Processing(message)) => {
            logger::log_error(&format!("Analysis failed: {message}"));
            logger::log_api_request("POST", "/api/analyze", 500);
            Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("An unexpected error occurred: {message}"),
            ))
        }
    }
}

/// The analyze transform: payload bytes in, report and label out.
///
/// Pure request/response logic with no HTTP types, so the error mapping at
/// the boundary stays trivial and the whole flow is testable directly.
fn analyze(scorer: &Scorer, body: &[u8]) -> Result<AnalyzeResponse, AnalyzeError> {
    let payload: AnalyzeRequest = serde_json::from_slice(body)
        .map_err(|e| AnalyzeError::Input(format!("Invalid JSON: {e}")))?;

    let note = payload
        .note
        .filter(|note| !note.is_empty())
        .ok_or_else(AnalyzeError::no_note)?;

    let scores = scorer
        .polarity_scores(&note)
        .map_err(|e| AnalyzeError::Processing(e.to_string()))?;

    let label = SentimentLabel::classify(scores.compound);
    let analysis = sentiment::build_report(label, &scores);

    Ok(AnalyzeResponse {
        analysis,
        sentiment_label: label,
    })
}
