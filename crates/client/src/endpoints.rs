//! Vendor service registry
//!
//! Maps each vendor service name to the `.asmx` endpoint the operations are
//! posted to. The production URLs are fixed by the vendor; tests point the
//! whole registry at a mock server with [`ServiceEndpoints::uniform`].

use std::collections::HashMap;

/// Every service exposed by the vendor API suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Authenticate,
    Project,
    Template,
    Company,
    Product,
    Invoice,
    Client,
    Transaction,
    File,
    FileInfo,
    Attachment,
    SalesOpp,
    Invitation,
    Time,
    Account,
}

impl Service {
    /// Vendor service name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Authenticate => "Authenticate",
            Self::Project => "Project",
            Self::Template => "Template",
            Self::Company => "Company",
            Self::Product => "Product",
            Self::Invoice => "Invoice",
            Self::Client => "Client",
            Self::Transaction => "Transaction",
            Self::File => "File",
            Self::FileInfo => "FileInfo",
            Self::Attachment => "Attachment",
            Self::SalesOpp => "SalesOpp",
            Self::Invitation => "Invitation",
            Self::Time => "Time",
            Self::Account => "Account",
        }
    }

    /// Every known service, in registry order.
    pub fn all() -> [Service; 15] {
        [
            Self::Authenticate,
            Self::Project,
            Self::Template,
            Self::Company,
            Self::Product,
            Self::Invoice,
            Self::Client,
            Self::Transaction,
            Self::File,
            Self::FileInfo,
            Self::Attachment,
            Self::SalesOpp,
            Self::Invitation,
            Self::Time,
            Self::Account,
        ]
    }

    fn production_url(&self) -> &'static str {
        match self {
            Self::Authenticate => {
                "https://api.24sevenoffice.com/authenticate/v001/authenticate.asmx"
            }
            Self::Project => {
                "http://webservices.24sevenoffice.com/Project/V001/ProjectService.asmx"
            }
            Self::Template => {
                "https://api.24sevenoffice.com/CRM/Template/V001/TemplateService.asmx"
            }
            Self::Company => "https://api.24sevenoffice.com/CRM/Company/V001/CompanyService.asmx",
            Self::Product => {
                "https://api.24sevenoffice.com/Logistics/Product/V001/ProductService.asmx"
            }
            Self::Invoice => {
                "https://api.24sevenoffice.com/Economy/InvoiceOrder/V001/InvoiceService.asmx"
            }
            Self::Client => "https://api.24sevenoffice.com/Client/V001/ClientService.asmx",
            Self::Transaction => {
                "https://api.24sevenoffice.com/Economy/Accounting/V001/TransactionService.asmx"
            }
            Self::File => "https://webservices.24sevenoffice.com/file/V001/FileService.asmx",
            Self::FileInfo => {
                "https://webservices.24sevenoffice.com/file/V001/FileInfoService.asmx"
            }
            Self::Attachment => {
                "https://webservices.24sevenoffice.com/Economy/Accounting/Accounting_V001/AttachmentService.asmx"
            }
            Self::SalesOpp => {
                "https://webservices.24sevenoffice.com/SalesOpp/V001/SalesOppService.asmx"
            }
            Self::Invitation => {
                "https://webservices.24sevenoffice.com/Invitation/Invitation_V001/InvitationService.asmx"
            }
            Self::Time => "http://webservices.24sevenoffice.com/timesheet/v001/timeservice.asmx",
            Self::Account => {
                "http://webservices.24sevenoffice.com/Economy/Account/AccountService.asmx"
            }
        }
    }
}

/// Registry of service endpoint URLs, with per-service overrides.
#[derive(Debug, Clone)]
pub struct ServiceEndpoints {
    urls: HashMap<Service, String>,
}

impl ServiceEndpoints {
    /// The vendor's production endpoints.
    pub fn production() -> Self {
        let urls = Service::all()
            .into_iter()
            .map(|service| (service, service.production_url().to_string()))
            .collect();
        Self { urls }
    }

    /// Point every service at `{base_url}/{Name}.asmx` (for tests).
    pub fn uniform(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let urls = Service::all()
            .into_iter()
            .map(|service| (service, format!("{base}/{}.asmx", service.name())))
            .collect();
        Self { urls }
    }

    pub fn url(&self, service: Service) -> &str {
        // The map is total over `Service::all`, so the lookup cannot miss.
        self.urls.get(&service).map(String::as_str).unwrap_or_default()
    }

    pub fn set_url(&mut self, service: Service, url: impl Into<String>) {
        self.urls.insert(service, url.into());
    }
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self::production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_registry_is_total() {
        let endpoints = ServiceEndpoints::production();
        for service in Service::all() {
            assert!(endpoints.url(service).starts_with("http"), "{:?}", service);
        }
    }

    #[test]
    fn uniform_registry_appends_service_names() {
        let endpoints = ServiceEndpoints::uniform("http://127.0.0.1:9000/");
        assert_eq!(endpoints.url(Service::Attachment), "http://127.0.0.1:9000/Attachment.asmx");
        assert_eq!(
            endpoints.url(Service::Authenticate),
            "http://127.0.0.1:9000/Authenticate.asmx"
        );
    }

    #[test]
    fn overrides_replace_single_services() {
        let mut endpoints = ServiceEndpoints::production();
        endpoints.set_url(Service::Project, "http://localhost:1234/project");
        assert_eq!(endpoints.url(Service::Project), "http://localhost:1234/project");
        assert!(endpoints.url(Service::Company).contains("24sevenoffice.com"));
    }
}
