//! Tax Engine HTTP API Library
//!
//! This library provides the core functionality for the tax calculation
//! service: request validation, rate lookup, and tax arithmetic behind a
//! single `POST /calculate` endpoint.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::taxes;
