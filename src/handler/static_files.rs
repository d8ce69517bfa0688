//! Static file serving module
//!
//! Existence check, MIME detection, and streamed response building for a
//! resolved filesystem path.

use crate::http::{self, mime, HttpBody};
use crate::logger;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve the file at `file_path`, already resolved from `pathname`.
///
/// The 404 body names the original request path, not the resolved one; the
/// resolved path only goes to the log. A file that exists but fails to open
/// is the one pre-header failure mode and yields a 500.
pub async fn serve(pathname: &str, file_path: &Path) -> Response<HttpBody> {
    if !matches!(fs::try_exists(file_path).await, Ok(true)) {
        logger::log_not_found(file_path);
        return http::build_not_found_response(pathname);
    }

    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));

    match fs::File::open(file_path).await {
        Ok(file) => http::build_file_response(http::stream_file(file), content_type),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to open '{}': {}",
                file_path.display(),
                e
            ));
            http::build_internal_error_response()
        }
    }
}
