//! Shared constants for the 24SevenOffice client

/// Maximum number of payload bytes carried by a single chunk operation.
///
/// The remote file services accept appends and downloads of at most this
/// size; both transfer directions use the same bound.
pub const MAX_CHUNK_SIZE: usize = 2000 * 1024;

/// HTTP status code the remote services return on success.
pub const STATUS_OK: u16 = 200;

/// Cookie name carrying the authenticated session id.
pub const SESSION_COOKIE: &str = "ASP.NET_SessionId";

/// Identity id sent with credentials when the caller does not supply one.
pub const NIL_IDENTITY_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Page number assigned to the single frame of an uploaded image file.
pub const DEFAULT_FRAME_ID: i32 = 1;
