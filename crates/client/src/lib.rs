//! # 24SevenOffice Client
//!
//! Thin client over the 24SevenOffice SOAP web services.
//!
//! This crate contains:
//! - The HTTP transport (reqwest) and SOAP envelope/response layer
//! - Session authentication and the per-service endpoint registry
//! - Per-domain service APIs (projects, companies, attachments)
//! - The chunked binary transfer core used by attachment upload/download
//!
//! ## Architecture
//! - Domain types and errors live in `twentyfour-domain`
//! - All remote calls are synchronous request/response round trips awaited
//!   in order; there is no retry, concurrency, or partial-result recovery
//! - Service clients are created lazily and cached on the [`ApiClient`]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod http;
pub mod services;
pub mod session;
pub mod soap;
pub mod transfer;

// Re-export commonly used items
pub use client::ApiClient;
pub use endpoints::{Service, ServiceEndpoints};
pub use services::{AttachmentsApi, CompaniesApi, ProjectsApi};
pub use session::Session;
pub use transfer::{ChunkPlan, ChunkSpan};
