//! State Management
//!
//! Browser token storage and the reactive session.

pub mod session;

pub use session::{provide_session, LocalStorageTokens, Session};
