//! MedScan Web
//!
//! Browser front end for the AI Medical Analyzer, built with Leptos (WASM).
//!
//! # Pages
//!
//! - Landing page
//! - Login / register
//! - Dashboard: upload, AI summary, health chart, symptom checker
//! - Report browser: full text and insights of past reports
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! All analysis happens on the API server; the page state and insight
//! parsing come from the `medscan` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
