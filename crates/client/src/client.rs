//! Top-level API client
//!
//! Owns the configuration, the HTTP transport, the endpoint registry, the
//! authenticated session, and the per-service client cache. The cache is an
//! explicit member of this context rather than process-wide state: clients
//! are created on first use, keyed by service, and never invalidated.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;
use twentyfour_domain::{ClientConfig, Result};

use crate::endpoints::{Service, ServiceEndpoints};
use crate::http::HttpClient;
use crate::services::{AttachmentsApi, CompaniesApi, ProjectsApi};
use crate::session::{self, Session};
use crate::soap::SoapService;

/// Authenticated client for the 24SevenOffice web services.
pub struct ApiClient {
    config: ClientConfig,
    http: HttpClient,
    endpoints: ServiceEndpoints,
    session: Session,
    services: Mutex<HashMap<Service, Arc<SoapService>>>,
}

impl ApiClient {
    /// Authenticate against the production endpoints.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        Self::connect_with_endpoints(config, ServiceEndpoints::production()).await
    }

    /// Authenticate against a custom endpoint registry.
    pub async fn connect_with_endpoints(
        config: ClientConfig,
        endpoints: ServiceEndpoints,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("twentyfour-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let authenticate = SoapService::new(
            Service::Authenticate,
            endpoints.url(Service::Authenticate),
            http.clone(),
            None,
        );
        let session = session::authenticate(&authenticate, &config).await?;

        Ok(Self { config, http, endpoints, session, services: Mutex::new(HashMap::new()) })
    }

    /// Connected client for `service`, created on first use and cached.
    pub async fn service(&self, service: Service) -> Arc<SoapService> {
        let mut cache = self.services.lock().await;
        if let Some(existing) = cache.get(&service) {
            return Arc::clone(existing);
        }

        let created = Arc::new(SoapService::new(
            service,
            self.endpoints.url(service),
            self.http.clone(),
            Some(self.session.cookie_header()),
        ));
        debug!(service = service.name(), "created new service client");
        cache.insert(service, Arc::clone(&created));
        created
    }

    /// Project service operations.
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi::new(self)
    }

    /// Company service operations.
    pub fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi::new(self)
    }

    /// Attachment service operations.
    pub fn attachments(&self) -> AttachmentsApi<'_> {
        AttachmentsApi::new(self)
    }

    /// The authenticated session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Maximum chunk size used by attachment transfers.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    /// Number of service clients currently cached.
    pub async fn cached_service_count(&self) -> usize {
        self.services.lock().await.len()
    }
}
