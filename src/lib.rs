//! BETBOOK — 2D/3D lottery entry book
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod parser;
pub mod engine;
pub mod ledger;
pub mod format;
pub mod api;
