//! Vendor-schema-shaped data types
//!
//! Field names mirror the remote WSDL schema (`Id`, `StampNo`, `FrameInfo`,
//! ...) because the services dictate them; the Rust structs keep snake_case
//! names and translate at the SOAP boundary.

pub mod attachment;
pub mod company;
pub mod project;

pub use attachment::*;
pub use company::*;
pub use project::*;
