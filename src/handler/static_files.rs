//! Static file serving module
//!
//! Serves the pre-built frontend bundle. Any path without a matching file
//! falls back to the SPA entry document so client-side routing keeps
//! working.

use crate::config::StaticConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a request from the SPA bundle
pub async fn serve_spa(ctx: &RequestContext<'_>, cfg: &StaticConfig) -> Response<Full<Bytes>> {
    match load_asset(&cfg.root, ctx.path, &cfg.index_file).await {
        Some((content, content_type)) => build_asset_response(
            &content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
        ),
        None => {
            // The entry document vanished after startup validation
            logger::log_error(&format!(
                "Entry document unreadable: {}/{}",
                cfg.root, cfg.index_file
            ));
            http::build_500_response()
        }
    }
}

/// Resolve a request path against the asset root.
///
/// Returns the file at the path when one exists, otherwise the entry
/// document. `None` only when the entry document itself cannot be read.
pub async fn load_asset(
    root: &str,
    path: &str,
    index_file: &str,
) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let clean_path = path.trim_start_matches('/').replace("..", "");

    let root_canonical = match Path::new(root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root not found or inaccessible '{root}': {e}"
            ));
            return None;
        }
    };

    if !clean_path.is_empty() {
        let candidate = Path::new(root).join(&clean_path);
        // Canonicalization fails for nonexistent paths, which is the normal
        // SPA-route case; those fall through to the entry document.
        if let Ok(candidate_canonical) = candidate.canonicalize() {
            if !candidate_canonical.starts_with(&root_canonical) {
                logger::log_warning(&format!(
                    "Path traversal attempt blocked: {} -> {}",
                    path,
                    candidate_canonical.display()
                ));
            } else if candidate_canonical.is_file() {
                match fs::read(&candidate_canonical).await {
                    Ok(content) => {
                        let content_type = mime::get_content_type(
                            candidate_canonical.extension().and_then(|e| e.to_str()),
                        );
                        return Some((content, content_type));
                    }
                    Err(e) => {
                        logger::log_error(&format!(
                            "Failed to read file '{}': {}",
                            candidate_canonical.display(),
                            e
                        ));
                        // Fall through to the entry document
                    }
                }
            }
        }
    }

    let entry = Path::new(root).join(index_file);
    let content = match fs::read(&entry).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read entry document '{}': {}",
                entry.display(),
                e
            ));
            return None;
        }
    };
    let content_type = mime::get_content_type(entry.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build asset response with `ETag` support
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    http::build_cached_response(Bytes::from(data.to_owned()), content_type, &etag, is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn build_bundle() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("index.html"), "<html>entry</html>").unwrap();
        std_fs::write(dir.path().join("app.js"), "console.log('app')").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_existing_file_served_verbatim() {
        let dir = build_bundle();
        let root = dir.path().to_string_lossy();
        let (content, content_type) = load_asset(&root, "/app.js", "index.html").await.unwrap();
        assert_eq!(content, b"console.log('app')");
        assert_eq!(content_type, "application/javascript");
    }

    #[tokio::test]
    async fn test_root_path_serves_entry_document() {
        let dir = build_bundle();
        let root = dir.path().to_string_lossy();
        let (content, content_type) = load_asset(&root, "/", "index.html").await.unwrap();
        assert_eq!(content, b"<html>entry</html>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_unmatched_path_falls_back_to_entry_document() {
        let dir = build_bundle();
        let root = dir.path().to_string_lossy();
        let (fallback, _) = load_asset(&root, "/nonexistent-route", "index.html")
            .await
            .unwrap();
        let (entry, _) = load_asset(&root, "/", "index.html").await.unwrap();
        assert_eq!(fallback, entry);
    }

    #[tokio::test]
    async fn test_traversal_does_not_escape_root() {
        let outside = tempfile::tempdir().unwrap();
        std_fs::write(outside.path().join("secret.txt"), "secret").unwrap();

        let dir = tempfile::tempdir_in(outside.path()).unwrap();
        std_fs::write(dir.path().join("index.html"), "<html>entry</html>").unwrap();
        let root = dir.path().to_string_lossy();

        let (content, _) = load_asset(&root, "/../secret.txt", "index.html")
            .await
            .unwrap();
        assert_eq!(content, b"<html>entry</html>");
    }

    #[tokio::test]
    async fn test_missing_entry_document_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_string_lossy();
        assert!(load_asset(&root, "/", "index.html").await.is_none());
    }
}
