//! Per-domain service APIs
//!
//! Every operation follows the same shape: build a vendor-schema request,
//! invoke one remote operation through the cached service client, check the
//! status, and reshape the response into domain types. The attachment API
//! additionally carries the chunked transfer loop.

pub mod attachments;
pub mod companies;
pub mod projects;

pub use attachments::AttachmentsApi;
pub use companies::CompaniesApi;
pub use projects::ProjectsApi;
