//! HTTP response building module
//!
//! Builders for the full response surface: CORS preflight, streamed file
//! responses, 404, and 500. Every response carries the CORS header set.

use super::body::{full, HttpBody};
use hyper::Response;

/// CORS headers applied to every response, preflight or not.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Methods",
        "GET, POST, PUT, DELETE, OPTIONS",
    ),
    (
        "Access-Control-Allow-Headers",
        "Content-Type, Authorization",
    ),
];

fn with_cors(mut builder: hyper::http::response::Builder) -> hyper::http::response::Builder {
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    builder
}

/// Build OPTIONS response (CORS preflight): 200, empty body.
pub fn build_options_response() -> Response<HttpBody> {
    with_cors(Response::builder().status(200))
        .body(full(""))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(full(""))
        })
}

/// Build 404 Not Found response naming the original request path.
pub fn build_not_found_response(pathname: &str) -> Response<HttpBody> {
    with_cors(Response::builder().status(404))
        .header("Content-Type", "text/plain")
        .body(full(format!("File not found: {pathname}")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(full("File not found"))
        })
}

/// Build 500 Internal Server Error response.
pub fn build_internal_error_response() -> Response<HttpBody> {
    with_cors(Response::builder().status(500))
        .header("Content-Type", "text/plain")
        .body(full("Internal server error"))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(full("Internal server error"))
        })
}

/// Build 200 response for a served file.
pub fn build_file_response(body: HttpBody, content_type: &'static str) -> Response<HttpBody> {
    with_cors(Response::builder().status(200))
        .header("Content-Type", content_type)
        .header("Cache-Control", "no-cache")
        .body(body)
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(full(""))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn assert_cors_headers(resp: &Response<HttpBody>) {
        let headers = resp.headers();
        assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
        assert_eq!(
            headers.get("Access-Control-Allow-Methods").unwrap(),
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Headers").unwrap(),
            "Content-Type, Authorization"
        );
    }

    #[tokio::test]
    async fn options_response_is_200_with_cors_and_empty_body() {
        let resp = build_options_response();
        assert_eq!(resp.status(), 200);
        assert_cors_headers(&resp);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn not_found_body_names_the_request_path() {
        let resp = build_not_found_response("/nonexistent.xyz");
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers().get("Content-Type").unwrap(), "text/plain");
        assert_cors_headers(&resp);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"File not found: /nonexistent.xyz");
    }

    #[tokio::test]
    async fn internal_error_response_is_generic() {
        let resp = build_internal_error_response();
        assert_eq!(resp.status(), 500);
        assert_cors_headers(&resp);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"Internal server error");
    }

    #[tokio::test]
    async fn file_response_sets_content_type_and_no_cache() {
        let resp = build_file_response(full("body"), "text/css; charset=utf-8");
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/css; charset=utf-8"
        );
        assert_eq!(resp.headers().get("Cache-Control").unwrap(), "no-cache");
        assert_cors_headers(&resp);
    }
}
