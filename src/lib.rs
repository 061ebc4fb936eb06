// ABOUTME: Library root for vercel-wait - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod github;
pub mod output;
pub mod types;
pub mod wait;
