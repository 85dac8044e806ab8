//! API Access

mod client;

pub use client::*;
