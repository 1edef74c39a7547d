//! Logger module
//!
//! println-based logging for server lifecycle, access logs, and errors.

use chrono::Local;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::Config;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, channels_file: &Path) {
    write_info("======================================");
    write_info("IPTV channel API started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Channels file: {}", channels_file.display()));
    if config.store.create_missing {
        write_info("Missing channels file will be created on first read");
    }
    write_info("======================================\n");
}

/// Access log line for a handled request.
pub fn log_request(method: &str, path: &str, status: u16) {
    write_info(&format!("[{}] {method} {path} - {status}", timestamp()));
}

pub fn log_error(message: &str) {
    write_error(&format!("[{}] [ERROR] {message}", timestamp()));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[{}] [WARN] {message}", timestamp()));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!(
        "[{}] [ERROR] Failed to serve connection: {err:?}",
        timestamp()
    ));
}
