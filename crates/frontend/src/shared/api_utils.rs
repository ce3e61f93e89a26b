//! Endpoint configuration for the projects dashboard
//!
//! The projects API lives next to the page on port 5000. A full URL can be
//! baked in at build time through the `PROJECTS_API_URL` environment variable.

const API_PORT: u16 = 5000;
const PROJECTS_PATH: &str = "/projects";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 5000 for the projects server.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - "http://localhost:5000" if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://localhost:{}", API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Full URL of the project collection
pub fn projects_url() -> String {
    match option_env!("PROJECTS_API_URL") {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => format!("{}{}", api_base(), PROJECTS_PATH),
    }
}
