//! Analyzer REST API Client
//!
//! HTTP client for the medical analyzer API. Every request reads the token
//! store first and carries `Authorization: Bearer <token>` when a token is
//! present. There is no retry, timeout, or caching: a failed call comes back
//! as a [`ClientError`] and the caller decides what to show.

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::dto::{
    AccessToken, HealthStatus, LoginForm, RegisterRequest, Report, SymptomRequest, SymptomResult,
    UserProfile,
};
use crate::endpoints;
use crate::error::{ClientError, ClientResult, ErrorBody};
use crate::token::TokenStore;
use crate::views::{guard, Access, ReportBoard};

/// Analyzer API client
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.tokens.has_token())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `base_url` backed by the given token store
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> ClientResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("medscan/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: endpoints::normalize_base(base_url),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store a token, or clear it with `None`
    pub fn set_token(&self, token: Option<&str>) -> ClientResult<()> {
        self.tokens.set_token(token)?;
        Ok(())
    }

    pub fn has_token(&self) -> bool {
        self.tokens.has_token()
    }

    /// Fail early when no token is stored, before any request goes out
    pub fn require_token(&self) -> ClientResult<()> {
        match guard(self.tokens.as_ref()) {
            Access::Granted => Ok(()),
            Access::RedirectToLogin => Err(ClientError::NotAuthenticated),
        }
    }

    /// Build a request, attaching the bearer token if one is stored
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, endpoints::url(&self.base_url, path));

        match self.tokens.token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    // ============================================
    // Generic verbs
    // ============================================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.dispatch(self.request(Method::GET, path), path).await?;
        decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .dispatch(self.request(Method::POST, path).json(body), path)
            .await?;
        decode(response).await
    }

    pub async fn post_form<B, T>(&self, path: &str, form: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .dispatch(self.request(Method::POST, path).form(form), path)
            .await?;
        decode(response).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> ClientResult<T> {
        let response = self
            .dispatch(self.request(Method::POST, path).multipart(form), path)
            .await?;
        decode(response).await
    }

    /// Send a request and turn non-success statuses into `ClientError::Api`
    async fn dispatch(&self, builder: RequestBuilder, path: &str) -> ClientResult<Response> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path = %path, error = %e, "Request failed");
            ClientError::Network(e)
        })?;

        let status = response.status();
        tracing::debug!(path = %path, status = %status.as_u16(), "Response received");

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let detail = ErrorBody::detail_from(&text);
        tracing::warn!(
            path = %path,
            status = %status.as_u16(),
            detail = detail.as_deref().unwrap_or("-"),
            "API returned an error"
        );

        Err(ClientError::Api {
            status: status.as_u16(),
            detail,
        })
    }

    // ============================================
    // Auth
    // ============================================

    /// Create an account. The response body is not needed.
    pub async fn register(&self, email: &str, password: &str) -> ClientResult<()> {
        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let path = endpoints::REGISTER;
        self.dispatch(self.request(Method::POST, path).json(&body), path)
            .await?;
        tracing::info!(email = %email, "Account registered");
        Ok(())
    }

    /// Log in and store the returned token.
    ///
    /// On failure the token slot is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AccessToken> {
        let form = LoginForm {
            username: email.to_string(),
            password: password.to_string(),
        };
        let token: AccessToken = self.post_form(endpoints::LOGIN, &form).await?;
        self.set_token(Some(&token.access_token))?;
        tracing::info!(email = %email, "Logged in");
        Ok(token)
    }

    /// Forget the stored token
    pub fn logout(&self) -> ClientResult<()> {
        self.set_token(None)
    }

    pub async fn current_user(&self) -> ClientResult<UserProfile> {
        self.get(endpoints::CURRENT_USER).await
    }

    // ============================================
    // Reports
    // ============================================

    pub async fn list_reports(&self) -> ClientResult<Vec<Report>> {
        let reports: Vec<Report> = self.get(endpoints::REPORTS).await?;
        tracing::debug!(count = reports.len(), "Fetched reports");
        Ok(reports)
    }

    /// Report list for a protected view, first report selected.
    ///
    /// Without a stored token no request is made.
    pub async fn load_board(&self) -> ClientResult<ReportBoard> {
        self.require_token()?;

        let mut board = ReportBoard::new();
        board.load(self.list_reports().await?);
        Ok(board)
    }

    /// Upload in-memory file contents as the `report_file` multipart field
    pub async fn upload_report_bytes(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<Report> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part(endpoints::UPLOAD_FIELD, part);

        let report: Report = self.post_multipart(endpoints::UPLOAD_REPORT, form).await?;
        tracing::info!(report = %report.report_name, "Report uploaded");
        Ok(report)
    }

    /// Upload a file from disk; the content type follows the extension
    pub async fn upload_report(&self, path: &Path) -> ClientResult<Report> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| ClientError::InvalidRequest(format!("Not a file: {}", path.display())))?;

        let bytes = tokio::fs::read(path).await?;
        let content_type = endpoints::upload_content_type(&file_name);

        self.upload_report_bytes(&file_name, content_type, bytes)
            .await
    }

    // ============================================
    // Symptoms & health
    // ============================================

    pub async fn check_symptoms(&self, symptoms: &str) -> ClientResult<SymptomResult> {
        let body = SymptomRequest {
            symptoms: symptoms.to_string(),
        };
        self.post_json(endpoints::SYMPTOMS, &body).await
    }

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.get(endpoints::HEALTH).await
    }
}

/// Read a success body as JSON
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MemoryTokenStore;

    #[test]
    fn test_base_url_normalized() {
        let client = ApiClient::new("http://localhost:8000/", Arc::new(MemoryTokenStore::new())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_require_token() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let client = ApiClient::new(endpoints::DEFAULT_API_BASE, tokens.clone()).unwrap();
        assert!(matches!(client.require_token(), Err(ClientError::NotAuthenticated)));

        tokens.set_token(Some("abc")).unwrap();
        assert!(client.require_token().is_ok());

        client.logout().unwrap();
        assert!(!client.has_token());
    }

    #[test]
    fn test_bearer_header_attached() {
        let client = ApiClient::new(
            endpoints::DEFAULT_API_BASE,
            Arc::new(MemoryTokenStore::with_token("abc")),
        )
        .unwrap();

        let request = client.request(Method::GET, endpoints::REPORTS).build().unwrap();
        assert_eq!(request.url().as_str(), "http://127.0.0.1:8000/api/reports");
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer abc"
        );
    }

    #[test]
    fn test_no_header_without_token() {
        let client = ApiClient::new(endpoints::DEFAULT_API_BASE, Arc::new(MemoryTokenStore::new())).unwrap();
        let request = client.request(Method::GET, endpoints::HEALTH).build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
