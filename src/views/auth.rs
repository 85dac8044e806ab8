//! Login / Register Form State
//!
//! One form, two modes. The form hands out a request to send and is told
//! how it went; it never sends anything itself.

use crate::dto::{LoginForm, RegisterRequest};
use crate::error::FailureDetail;
use crate::token::TokenStore;

pub const ACCOUNT_CREATED: &str = "Account created. Please log in.";
pub const LOGGED_IN: &str = "Logged in successfully.";
pub const AUTH_FALLBACK: &str = "Something went wrong.";

/// Which action the form submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back",
            AuthMode::Register => "Create your account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Need an account? Register",
            AuthMode::Register => "Already have an account? Login",
        }
    }
}

/// Request produced by a submit
#[derive(Debug, Clone, PartialEq)]
pub enum AuthSubmission {
    Register(RegisterRequest),
    Login(LoginForm),
}

/// What the page should do after a submission settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Stay,
    GoToDashboard,
}

/// Login/register form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    mode: AuthMode,
    pub email: String,
    pub password: String,
    message: Option<String>,
    pending: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Status line under the form
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True while a submission is in flight; the submit control is disabled
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Switch between login and register.
    ///
    /// Clears the status line and the password; the email is kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.message = None;
        self.password.clear();
    }

    /// Start a submission. Returns `None` while another one is pending.
    pub fn begin_submit(&mut self) -> Option<AuthSubmission> {
        if self.pending {
            return None;
        }
        self.pending = true;
        self.message = None;

        Some(match self.mode {
            AuthMode::Register => AuthSubmission::Register(RegisterRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            AuthMode::Login => AuthSubmission::Login(LoginForm {
                username: self.email.clone(),
                password: self.password.clone(),
            }),
        })
    }

    /// Record the result of the submission returned by `begin_submit`.
    ///
    /// A successful registration flips back to login mode; a successful
    /// login asks the page to move on to the dashboard.
    pub fn finish_submit<E: FailureDetail>(&mut self, result: Result<(), E>) -> AuthOutcome {
        self.pending = false;

        match result {
            Ok(()) => match self.mode {
                AuthMode::Register => {
                    self.mode = AuthMode::Login;
                    self.message = Some(ACCOUNT_CREATED.to_string());
                    AuthOutcome::Stay
                }
                AuthMode::Login => {
                    self.message = Some(LOGGED_IN.to_string());
                    AuthOutcome::GoToDashboard
                }
            },
            Err(e) => {
                self.message = Some(e.message_or(AUTH_FALLBACK));
                AuthOutcome::Stay
            }
        }
    }
}

/// Result of the authentication-presence check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
}

/// Gate for protected pages: a stored token is all it takes
pub fn guard(tokens: &dyn TokenStore) -> Access {
    if tokens.has_token() {
        Access::Granted
    } else {
        Access::RedirectToLogin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiFailure;
    use crate::token::MemoryTokenStore;

    fn filled(mode: AuthMode) -> AuthForm {
        let mut form = AuthForm::new();
        if mode == AuthMode::Register {
            form.toggle_mode();
        }
        form.email = "ana@example.com".to_string();
        form.password = "hunter2".to_string();
        form
    }

    #[test]
    fn test_login_submission_uses_username_field() {
        let mut form = filled(AuthMode::Login);
        let submission = form.begin_submit().unwrap();

        assert_eq!(
            submission,
            AuthSubmission::Login(LoginForm {
                username: "ana@example.com".to_string(),
                password: "hunter2".to_string(),
            })
        );
        assert!(form.is_pending());
    }

    #[test]
    fn test_pending_blocks_second_submit() {
        let mut form = filled(AuthMode::Login);
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());

        form.finish_submit::<ApiFailure>(Ok(()));
        assert!(!form.is_pending());
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_successful_login_goes_to_dashboard() {
        let mut form = filled(AuthMode::Login);
        form.begin_submit();

        let outcome = form.finish_submit::<ApiFailure>(Ok(()));
        assert_eq!(outcome, AuthOutcome::GoToDashboard);
        assert_eq!(form.message(), Some(LOGGED_IN));
    }

    #[test]
    fn test_failed_login_shows_server_detail() {
        let mut form = filled(AuthMode::Login);
        form.begin_submit();

        let failure = ApiFailure::from_response(400, r#"{"detail": "Invalid credentials."}"#);
        let outcome = form.finish_submit(Err(failure));
        assert_eq!(outcome, AuthOutcome::Stay);
        assert_eq!(form.message(), Some("Invalid credentials."));
        assert_eq!(form.mode(), AuthMode::Login);
    }

    #[test]
    fn test_failure_without_detail_uses_fallback() {
        let mut form = filled(AuthMode::Register);
        form.begin_submit();

        form.finish_submit(Err(ApiFailure::transport()));
        assert_eq!(form.message(), Some(AUTH_FALLBACK));
        assert_eq!(form.mode(), AuthMode::Register);
    }

    #[test]
    fn test_register_success_returns_to_login() {
        let mut form = filled(AuthMode::Register);
        let submission = form.begin_submit().unwrap();
        assert!(matches!(submission, AuthSubmission::Register(ref r) if r.email == "ana@example.com"));

        let outcome = form.finish_submit::<ApiFailure>(Ok(()));
        assert_eq!(outcome, AuthOutcome::Stay);
        assert_eq!(form.mode(), AuthMode::Login);
        assert_eq!(form.message(), Some(ACCOUNT_CREATED));
    }

    #[test]
    fn test_toggle_clears_message_and_password() {
        let mut form = filled(AuthMode::Login);
        form.begin_submit();
        form.finish_submit(Err(ApiFailure::transport()));
        assert!(form.message().is_some());

        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::Register);
        assert_eq!(form.message(), None);
        assert!(form.password.is_empty());
        assert_eq!(form.email, "ana@example.com");

        // the stale password is not resubmitted under the new mode
        match form.begin_submit().unwrap() {
            AuthSubmission::Register(r) => assert!(r.password.is_empty()),
            other => panic!("unexpected submission: {:?}", other),
        }
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.submit_label(), "Register");
        assert_eq!(AuthMode::Login.toggle_label(), "Need an account? Register");
    }

    #[test]
    fn test_guard() {
        let tokens = MemoryTokenStore::new();
        assert_eq!(guard(&tokens), Access::RedirectToLogin);

        tokens.set_token(Some("t")).unwrap();
        assert_eq!(guard(&tokens), Access::Granted);
    }
}
