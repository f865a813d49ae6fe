//! Conversions from transport errors into domain errors.

use twentyfour_domain::TwentyFourError;

/// Error newtype that keeps conversions on the client side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct ClientError(pub TwentyFourError);

impl From<ClientError> for TwentyFourError {
    fn from(value: ClientError) -> Self {
        value.0
    }
}

impl From<TwentyFourError> for ClientError {
    fn from(value: TwentyFourError) -> Self {
        ClientError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TwentyFourError */
/* -------------------------------------------------------------------------- */

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        let message = if value.is_timeout() {
            format!("http request timed out: {value}")
        } else if value.is_connect() {
            format!("http connection failed: {value}")
        } else if value.is_builder() {
            return ClientError(TwentyFourError::Internal(format!(
                "failed to build http request: {value}"
            )));
        } else {
            format!("http transport failure: {value}")
        };
        ClientError(TwentyFourError::Network(message))
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → TwentyFourError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for ClientError {
    fn from(value: std::io::Error) -> Self {
        let mapped = match value.kind() {
            std::io::ErrorKind::NotFound => {
                TwentyFourError::NotFound(format!("file not found: {value}"))
            }
            _ => TwentyFourError::Internal(format!("i/o failure: {value}")),
        };
        ClientError(mapped)
    }
}
