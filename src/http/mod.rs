//! HTTP protocol layer module
//!
//! Response body types, MIME detection, and response builders, decoupled
//! from the request routing logic.

pub mod body;
pub mod mime;
pub mod response;

pub use body::{stream_file, HttpBody};
pub use response::{
    build_file_response, build_internal_error_response, build_not_found_response,
    build_options_response,
};
