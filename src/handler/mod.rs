//! Request handler module
//!
//! Responsible for request dispatch, path rewriting, and static file
//! serving.

pub mod rewrite;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
