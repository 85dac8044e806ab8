//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod navbar;
pub mod upload_box;
pub mod result_card;
pub mod chart_section;

pub use navbar::Navbar;
pub use upload_box::UploadBox;
pub use result_card::ResultCard;
pub use chart_section::ChartSection;
