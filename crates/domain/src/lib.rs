//! # 24SevenOffice Domain
//!
//! Domain types and models for the 24SevenOffice SOAP client.
//!
//! This crate contains:
//! - Vendor-schema-shaped data types (projects, companies, attachments)
//! - The error type and `Result` definition
//! - Client configuration structures
//! - Shared constants (chunk size, cookie name)
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure data structures; no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
