//! Session authentication
//!
//! One `Login` call against the authenticate service yields a session id;
//! every other service call carries it as an `ASP.NET_SessionId` cookie.

use tracing::{info, warn};
use twentyfour_domain::constants::SESSION_COOKIE;
use twentyfour_domain::{ClientConfig, Result, TwentyFourError};

use crate::soap::{Field, SoapRequest, SoapService};

/// An authenticated session with the vendor API.
#[derive(Debug, Clone)]
pub struct Session {
    session_id: String,
}

impl Session {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self { session_id: session_id.into() }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Value of the `Cookie` header carried by every service call.
    pub fn cookie_header(&self) -> String {
        format!("{SESSION_COOKIE}={}", self.session_id)
    }
}

/// Authenticate against the vendor and obtain a session.
///
/// Builds the vendor `Credential` record (`ApplicationId`, `IdentityId`,
/// `Username`, `Password`) and invokes `Login`. Any remote failure is
/// surfaced as [`TwentyFourError::Auth`].
pub async fn authenticate(service: &SoapService, config: &ClientConfig) -> Result<Session> {
    let request = SoapRequest::new("Login").element(
        "credential",
        vec![
            Field::text("ApplicationId", &config.application_id),
            Field::text("IdentityId", &config.identity_id),
            Field::text("Username", &config.username),
            Field::text("Password", &config.password),
        ],
    );

    let document = match service.call(request).await {
        Ok(document) => document,
        Err(TwentyFourError::RemoteStatus { status, message, .. }) => {
            warn!(status, "authentication rejected by remote service");
            return Err(TwentyFourError::Auth(format!(
                "login failed with status {status}: {message}"
            )));
        }
        Err(other) => return Err(other),
    };

    let session_id = document
        .text_of("LoginResult")
        .filter(|id| !id.is_empty())
        .ok_or_else(|| TwentyFourError::Auth("login response carried no session id".into()))?;

    info!(username = %config.username, "authenticated with 24SevenOffice");
    Ok(Session::new(session_id))
}
