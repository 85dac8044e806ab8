//! View State
//!
//! Framework-free state for the pages, shared by the browser front end and
//! the CLI. Each type holds only what one page needs; nothing here talks to
//! the network.

pub mod auth;
pub mod board;

pub use auth::{guard, Access, AuthForm, AuthMode, AuthOutcome, AuthSubmission};
pub use board::ReportBoard;

/// Route paths of the front end
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const REPORT: &str = "/report";
}
