//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: CORS preflight, path rewriting,
//! and dispatch to the static file responder.

use crate::config::AppState;
use crate::handler::{rewrite, static_files};
use crate::http::{self, HttpBody};
use crate::logger;
use hyper::{Method, Request, Response};
use std::convert::Infallible;

/// Main entry point for HTTP request handling.
///
/// Routing ignores the method: anything that is not an OPTIONS preflight is
/// resolved against the rewrite rules and served as a file. The query
/// string, if any, plays no part in routing.
pub async fn handle_request<B>(
    req: Request<B>,
    state: &AppState,
) -> Result<Response<HttpBody>, Infallible> {
    let method = req.method();
    let pathname = req.uri().path();

    logger::log_request(method, pathname);

    // CORS preflight: answer immediately, no path resolution
    if *method == Method::OPTIONS {
        return Ok(http::build_options_response());
    }

    let Some(file_path) = rewrite::resolve(&state.root, &state.demo_dir, pathname) else {
        logger::log_warning(&format!("Path traversal attempt blocked: {pathname}"));
        return Ok(http::build_not_found_response(pathname));
    };

    logger::log_serving(&file_path);

    Ok(static_files::serve(pathname, &file_path).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use std::path::PathBuf;

    fn test_state() -> AppState {
        let root = PathBuf::from("/srv/does-not-exist");
        AppState {
            demo_dir: root.join("demo").join("typescript"),
            root,
        }
    }

    #[tokio::test]
    async fn options_skips_path_resolution() {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/anything/at/all")
            .body(())
            .unwrap();
        let resp = handle_request(req, &test_state()).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn missing_file_yields_404_with_original_path() {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/nonexistent.xyz")
            .body(())
            .unwrap();
        let resp = handle_request(req, &test_state()).await.unwrap();
        assert_eq!(resp.status(), 404);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"File not found: /nonexistent.xyz");
    }

    #[tokio::test]
    async fn traversal_paths_yield_404() {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/../../etc/passwd")
            .body(())
            .unwrap();
        let resp = handle_request(req, &test_state()).await.unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn non_get_methods_are_routed_like_get() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/nonexistent.xyz")
            .body(())
            .unwrap();
        let resp = handle_request(req, &test_state()).await.unwrap();
        assert_eq!(resp.status(), 404);
    }
}
