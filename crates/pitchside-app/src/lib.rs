// Library root: re-exports the app modules so the binary and integration
// tests share one public API.

pub mod catalog;
pub mod config;
pub mod export;
