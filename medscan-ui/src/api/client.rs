//! HTTP API Client
//!
//! Functions for talking to the analyzer REST API from the browser.
//! Every request carries `Authorization: Bearer <token>` when a token is
//! stored; failures come back as [`ApiFailure`] with the server's `detail`
//! when it sent one.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use medscan::dto::{
    AccessToken, HealthStatus, LoginForm, RegisterRequest, Report, SymptomRequest, SymptomResult,
};
use medscan::endpoints::{self, DEFAULT_API_BASE};
use medscan::{ApiFailure, TokenStore};

use crate::state::LocalStorageTokens;

/// localStorage key for a user-chosen API URL
const API_URL_KEY: &str = "medscan_api_url";

/// API base URL: localStorage override, then build-time `MEDSCAN_API_URL`,
/// then the default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten());

    let base = stored
        .or_else(|| option_env!("MEDSCAN_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    endpoints::normalize_base(&base)
}

fn api_url(path: &str) -> String {
    endpoints::url(&get_api_base(), path)
}

/// Attach the bearer token, if one is stored
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match LocalStorageTokens.token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn transport(context: &str, error: impl std::fmt::Display) -> ApiFailure {
    web_sys::console::warn_1(&format!("{}: {}", context, error).into());
    ApiFailure::transport()
}

/// Pass a success response through untouched; on failure read the body
/// for `detail`
async fn check(response: Response) -> Result<Response, ApiFailure> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiFailure::from_response(status, &body))
}

/// Turn a response into `T`, or into an `ApiFailure` carrying `detail`
async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    let response = check(response).await?;
    let status = response.status();

    response.json().await.map_err(|e| {
        web_sys::console::warn_1(&format!("Parse error: {}", e).into());
        ApiFailure {
            status: Some(status),
            detail: None,
        }
    })
}

// ============ Auth ============

/// Create an account; the response body is not used
pub async fn register(request: &RegisterRequest) -> Result<(), ApiFailure> {
    let response = authorized(Request::post(&api_url(endpoints::REGISTER)))
        .json(request)
        .map_err(|e| transport("Request build error", e))?
        .send()
        .await
        .map_err(|e| transport("Network error", e))?;

    // the created account is not needed; any 2xx body is accepted
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiFailure::check_status(status, &body)
}

/// Log in and persist the returned token
pub async fn login(form: &LoginForm) -> Result<AccessToken, ApiFailure> {
    let response = authorized(Request::post(&api_url(endpoints::LOGIN)))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form.to_urlencoded())
        .map_err(|e| transport("Request build error", e))?
        .send()
        .await
        .map_err(|e| transport("Network error", e))?;

    let token: AccessToken = read(response).await?;
    LocalStorageTokens
        .set_token(Some(&token.access_token))
        .map_err(|e| transport("Failed to store token", e))?;

    Ok(token)
}

// ============ Reports ============

pub async fn fetch_reports() -> Result<Vec<Report>, ApiFailure> {
    let response = authorized(Request::get(&api_url(endpoints::REPORTS)))
        .send()
        .await
        .map_err(|e| transport("Network error", e))?;

    read(response).await
}

/// Upload a chosen file as the `report_file` multipart field.
///
/// The browser sets the multipart boundary header itself.
pub async fn upload_report(file: web_sys::File) -> Result<Report, ApiFailure> {
    let form = web_sys::FormData::new().map_err(|e| transport("FormData error", format!("{:?}", e)))?;
    form.append_with_blob_and_filename(endpoints::UPLOAD_FIELD, &file, &file.name())
        .map_err(|e| transport("FormData error", format!("{:?}", e)))?;

    let response = authorized(Request::post(&api_url(endpoints::UPLOAD_REPORT)))
        .body(form)
        .map_err(|e| transport("Request build error", e))?
        .send()
        .await
        .map_err(|e| transport("Network error", e))?;

    read(response).await
}

// ============ Symptoms ============

pub async fn check_symptoms(request: &SymptomRequest) -> Result<SymptomResult, ApiFailure> {
    let response = authorized(Request::post(&api_url(endpoints::SYMPTOMS)))
        .json(request)
        .map_err(|e| transport("Request build error", e))?
        .send()
        .await
        .map_err(|e| transport("Network error", e))?;

    read(response).await
}

// ============ Health ============

pub async fn check_health() -> Result<HealthStatus, ApiFailure> {
    let response = Request::get(&api_url(endpoints::HEALTH))
        .send()
        .await
        .map_err(|e| transport("Network error", e))?;

    read(response).await
}
