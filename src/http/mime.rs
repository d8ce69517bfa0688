//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

/// Get MIME Content-Type based on file extension.
///
/// The extension is lowercased before lookup, so `APP.JS` and `app.js`
/// resolve identically. Unknown or missing extensions fall back to
/// `text/plain`.
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    let ext = extension.map(str::to_ascii_lowercase);
    match ext.as_deref() {
        // Text
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff2") => "font/woff2",
        Some("woff") => "font/woff",
        Some("ttf") => "font/ttf",

        // Misc
        Some("webmanifest") => "application/manifest+json",
        Some("bin") => "application/octet-stream",

        // Default
        _ => "text/plain",
    }
}
