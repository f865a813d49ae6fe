//! Connected SOAP service endpoint

use reqwest::Method;
use tracing::debug;
use twentyfour_domain::constants::STATUS_OK;
use twentyfour_domain::{Result, TwentyFourError};

use crate::endpoints::Service;
use crate::http::HttpClient;
use crate::soap::document::SoapDocument;
use crate::soap::envelope::SoapRequest;

/// How much of an error response body is carried into the error message.
const ERROR_BODY_LIMIT: usize = 512;

/// One connected vendor service: endpoint URL, transport, session cookie.
///
/// Instances are created lazily by [`crate::ApiClient`] and cached per
/// service name; the authenticate endpoint is the only one used without a
/// session cookie.
pub struct SoapService {
    service: Service,
    url: String,
    http: HttpClient,
    cookie: Option<String>,
}

impl SoapService {
    pub fn new(
        service: Service,
        url: impl Into<String>,
        http: HttpClient,
        cookie: Option<String>,
    ) -> Self {
        Self { service, url: url.into(), http, cookie }
    }

    pub fn name(&self) -> &'static str {
        self.service.name()
    }

    /// Invoke one remote operation and interpret the response envelope.
    ///
    /// A non-success HTTP status or a SOAP fault yields
    /// [`TwentyFourError::RemoteStatus`]; no partial payload is returned.
    pub async fn call(&self, request: SoapRequest) -> Result<SoapDocument> {
        let operation = request.operation().to_string();
        let envelope = request.render();
        debug!(service = self.name(), operation = %operation, "invoking SOAP operation");

        let mut builder = self
            .http
            .request(Method::POST, &self.url)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", request.soap_action())
            .body(envelope);
        if let Some(cookie) = &self.cookie {
            builder = builder.header("Cookie", cookie.clone());
        }

        let response = self.http.send(builder).await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| {
            TwentyFourError::Network(format!("failed to read response body: {err}"))
        })?;

        if status != STATUS_OK {
            return Err(TwentyFourError::RemoteStatus {
                operation,
                status,
                message: truncated(&body),
            });
        }

        let document = SoapDocument::parse(body);
        if let Some(fault) = document.fault() {
            return Err(TwentyFourError::RemoteStatus { operation, status, message: fault });
        }
        Ok(document)
    }
}

fn truncated(body: &str) -> String {
    if body.len() <= ERROR_BODY_LIMIT {
        return body.to_string();
    }
    let mut end = ERROR_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
