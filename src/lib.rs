//! # MedScan
//!
//! Client side of the AI Medical Analyzer: upload medical reports, read the
//! AI summary and extracted insights, and run symptom checks against the
//! analyzer API.
//!
//! ## Modules
//!
//! Always available (also compiled into the WASM front end):
//!
//! - [`dto`]: Request and response types of the API
//! - [`endpoints`]: Endpoint paths, default base URL, storage key
//! - [`insights`]: Loose "label: value" parsing for the health chart
//! - [`views`]: Page state (login form, report board, auth gate)
//! - [`token`]: The persisted bearer-token slot
//! - [`error`]: Error detail extraction
//! - [`render`]: Plain-text rendering of reports and charts
//!
//! With the `native` feature (default):
//!
//! - [`client`]: reqwest-based API client
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medscan::{ApiClient, FileTokenStore, ReportBoard};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tokens = Arc::new(FileTokenStore::new(FileTokenStore::default_path()));
//!     let client = ApiClient::new("http://127.0.0.1:8000", tokens)?;
//!
//!     client.login("ana@example.com", "secret").await?;
//!
//!     let mut board = ReportBoard::new();
//!     board.load(client.list_reports().await?);
//!
//!     for point in board.chart() {
//!         println!("{}: {}", point.label, point.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod endpoints;
pub mod error;
pub mod insights;
pub mod render;
pub mod token;
pub mod views;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;

// Re-export top-level types for convenience
pub use dto::{
    AccessToken, HealthStatus, LoginForm, RegisterRequest, Report, SymptomRequest, SymptomResult,
    UserProfile,
};

pub use error::{ApiFailure, ErrorBody, FailureDetail};

pub use insights::{chart_points, parse_insight, ChartPoint};

pub use token::{MemoryTokenStore, TokenStore, TokenStoreError};

pub use views::{guard, Access, AuthForm, AuthMode, AuthOutcome, AuthSubmission, ReportBoard};

#[cfg(feature = "native")]
pub use client::ApiClient;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};

#[cfg(feature = "native")]
pub use error::{ClientError, ClientResult};

#[cfg(feature = "native")]
pub use token::FileTokenStore;
