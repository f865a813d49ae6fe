//! Minimal SOAP 1.1 layer for the vendor's `.asmx` endpoints.
//!
//! The vendor contract is fixed (operation and field names come from the
//! remote WSDL), so requests are rendered from an explicit field tree and
//! responses are read with a small tag scanner instead of a full XML stack.
//! WSDL parsing and XML-spec completeness are out of scope.

pub mod document;
pub mod envelope;
pub mod service;

pub use document::SoapDocument;
pub use envelope::{Field, SoapRequest, VENDOR_NAMESPACE};
pub use service::SoapService;
