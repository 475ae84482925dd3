//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port `trunk serve` listens on by default
const TRUNK_DEV_PORT: &str = "8080";

/// Port the backend listens on in development
const DEV_BACKEND_PORT: &str = "3000";

/// Get the base URL for API requests
///
/// The backend serves the built frontend itself, so requests go to the page's
/// own origin. Only a debug build opened from Trunk's dev server talks to the
/// backend on its development port.
///
/// # Returns
/// - Empty string for same-origin requests
/// - API base URL like "http://localhost:3000" under `trunk serve`
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = location.port().unwrap_or_default();
    base_url(&protocol, &hostname, &port, cfg!(debug_assertions))
}

fn base_url(protocol: &str, hostname: &str, port: &str, dev_build: bool) -> String {
    if dev_build && port == TRUNK_DEV_PORT {
        format!("{}//{}:{}", protocol, hostname, DEV_BACKEND_PORT)
    } else {
        String::new()
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/tools");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}
