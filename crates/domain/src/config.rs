//! Client configuration structures

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_CHUNK_SIZE, NIL_IDENTITY_ID};

/// Configuration for a 24SevenOffice API session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Account username (usually an email address).
    pub username: String,
    /// Account password.
    pub password: String,
    /// Application id issued by 24SevenOffice for API access.
    pub application_id: String,
    /// Identity id forwarded with the credential. Defaults to the nil GUID.
    #[serde(default = "default_identity_id")]
    pub identity_id: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum chunk size for attachment transfers, in bytes.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl ClientConfig {
    /// Build a configuration from credentials, using defaults for the rest.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        application_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            application_id: application_id.into(),
            identity_id: default_identity_id(),
            timeout_secs: default_timeout_secs(),
            chunk_size: default_chunk_size(),
        }
    }
}

fn default_identity_id() -> String {
    NIL_IDENTITY_ID.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_chunk_size() -> usize {
    MAX_CHUNK_SIZE
}
