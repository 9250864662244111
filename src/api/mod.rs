// API module entry
// Dispatches /api requests to their handlers

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::http;
use crate::logger;

/// API route handler
///
/// Dispatches to handler functions based on request path and method.
pub async fn handle_api(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let path = req.uri().path();
    let method = req.method().clone();
    let enable_cors = state.config.http.enable_cors;

    match (method, path) {
        (Method::POST, "/api/analyze") => handlers::handle_analyze(req, state).await,
        (Method::OPTIONS, _) => Ok(http::build_options_response(enable_cors)),
        (method, "/api/analyze") => {
            logger::log_api_request(method.as_str(), "/api/analyze", 405);
            Ok(http::build_405_response())
        }
        (method, path) => {
            logger::log_api_request(method.as_str(), path, 404);
            Ok(response::not_found())
        }
    }
}
