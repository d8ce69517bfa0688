//! Logger module
//!
//! Console-only logging for server lifecycle and per-request diagnostics.
//! Info goes to stdout, errors to stderr; no log files.

use crate::config::AppState;
use chrono::Local;
use std::net::SocketAddr;
use std::path::Path;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

fn timestamp() -> String {
    Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string()
}

pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    write_info("======================================");
    write_info("Demo static file server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Serving root: {}", state.root.display()));
    write_info(&format!("Default app dir: {}", state.demo_dir.display()));
    write_info("======================================\n");
}

pub fn log_request(method: &hyper::Method, path: &str) {
    write_info(&format!("[{}] Request: {method} {path}", timestamp()));
}

pub fn log_serving(file_path: &Path) {
    write_info(&format!("Serving file: {}", file_path.display()));
}

pub fn log_not_found(file_path: &Path) {
    write_info(&format!("File not found: {}", file_path.display()));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
