//! API Endpoint Table
//!
//! Paths and well-known keys shared by every client of the analyzer API.

/// Default API base URL when nothing is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Storage key under which the bearer token is persisted
pub const TOKEN_STORAGE_KEY: &str = "access_token";

pub const REGISTER: &str = "/api/auth/register";
pub const LOGIN: &str = "/api/auth/login";
pub const CURRENT_USER: &str = "/api/auth/me";
pub const REPORTS: &str = "/api/reports";
pub const UPLOAD_REPORT: &str = "/api/reports/upload";
pub const SYMPTOMS: &str = "/api/symptoms";
pub const HEALTH: &str = "/health";

/// Multipart field name carrying the uploaded report file
pub const UPLOAD_FIELD: &str = "report_file";

/// Normalize a base URL: trim whitespace and trailing slashes
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Join a base URL and an endpoint path
pub fn url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Content type sent for an uploaded file, chosen by extension.
///
/// The backend accepts PDF, PNG and JPEG; anything else goes out as
/// `application/octet-stream` and the server decides.
pub fn upload_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}
