//! Page Components
//!
//! Top-level page views for routing.

pub mod home;
pub mod login;
pub mod dashboard;
pub mod report;

pub use home::Home;
pub use login::Login;
pub use dashboard::Dashboard;
pub use report::ReportPage;
