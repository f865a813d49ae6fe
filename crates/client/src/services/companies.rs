//! Company service operations

use tracing::{info, warn};
use twentyfour_domain::{
    Category, Company, CompanySearch, NewCompany, Result, TwentyFourError,
};

use crate::client::ApiClient;
use crate::endpoints::Service;
use crate::services::projects::render_datetime;
use crate::soap::document::{tag_int, tag_text};
use crate::soap::{Field, SoapRequest};

/// Properties requested back from company searches. The list is dictated by
/// the vendor's `GetCompanies` contract.
const RETURN_PROPERTIES: &[&str] = &[
    "OrganizationNumber",
    "Owner",
    "Name",
    "FirstName",
    "NickName",
    "Country",
    "Status",
    "APIException",
    "Note",
    "InvoiceLanguage",
    "Type",
    "Username",
    "IncorporationDate",
    "DateCreated",
    "DateChanged",
    "BankAccountNo",
    "TypeGroup",
    "IndustryId",
    "MemberNo",
    "DistributionMethod",
    "EmailAddresses",
    "Addresses",
    "PhoneNumbers",
    "Maps",
    "Relations",
    "CurrencyId",
];

/// Operations against the vendor `Company` service.
pub struct CompaniesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CompaniesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Search companies (`GetCompanies`). At least one criterion is required;
    /// an empty result set is `Ok(vec![])`.
    pub async fn find(&self, search: &CompanySearch) -> Result<Vec<Company>> {
        if !search.has_criteria() {
            return Err(TwentyFourError::InvalidInput(
                "company search requires CompanyId, CompanyName or ChangedAfter".into(),
            ));
        }

        let service = self.client.service(Service::Company).await;
        let return_properties = RETURN_PROPERTIES
            .iter()
            .map(|property| Field::text("string", *property))
            .collect();
        let request = SoapRequest::new("GetCompanies")
            .element("searchParams", search_fields(search))
            .element("returnProperties", return_properties);
        let document = service.call(request).await?;

        document.all("Company").into_iter().map(parse_company).collect()
    }

    /// Load a single company by id. More than one match is an error.
    pub async fn get(&self, company_id: i32) -> Result<Option<Company>> {
        let mut companies = self.find(&CompanySearch::by_id(company_id)).await?;
        if companies.len() > 1 {
            return Err(TwentyFourError::TooManyResults(format!(
                "company id {company_id} matched {} records",
                companies.len()
            )));
        }
        Ok(companies.pop())
    }

    /// Create or update a company (`SaveCompanies` with a single record).
    pub async fn save(&self, company: &NewCompany) -> Result<Vec<Company>> {
        let service = self.client.service(Service::Company).await;
        let request = SoapRequest::new("SaveCompanies")
            .element("companyList", vec![Field::element("Company", company_fields(company))]);
        let document = service.call(request).await?;
        info!(name = %company.name, "company saved");

        document.all("Company").into_iter().map(parse_company).collect()
    }

    /// All available customer categories (`GetCategories`).
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let service = self.client.service(Service::Company).await;
        let document = service.call(SoapRequest::new("GetCategories")).await?;

        document
            .all("Category")
            .into_iter()
            .map(|fragment| {
                let id = tag_int(fragment, "Id")
                    .ok_or_else(|| TwentyFourError::Soap("category carried no Id".into()))?
                    as i32;
                let name = tag_text(fragment, "Name").unwrap_or_default();
                Ok(Category { id, name })
            })
            .collect()
    }

    /// Category ids assigned to a company (`GetCustomerCategories`).
    pub async fn categories_of(&self, company_id: i32) -> Result<Vec<i32>> {
        let service = self.client.service(Service::Company).await;
        let document = service
            .call(
                SoapRequest::new("GetCustomerCategories")
                    .text("customerId", company_id.to_string()),
            )
            .await?;

        Ok(document
            .all("int")
            .into_iter()
            .filter_map(|value| value.trim().parse::<i32>().ok())
            .collect())
    }

    /// Assign categories to a company by name (`SaveCustomerCategories`).
    ///
    /// Names are resolved against `GetCategories`; names the vendor does not
    /// know are skipped with a warning, matching the service's tolerance for
    /// partial category lists.
    pub async fn assign_categories(&self, company_id: i32, names: &[&str]) -> Result<()> {
        let available = self.categories().await?;

        let mut pairs = Vec::new();
        for name in names {
            match available.iter().find(|category| category.name == *name) {
                Some(category) => pairs.push(Field::element(
                    "KeyValuePair",
                    vec![
                        Field::text("Key", category.id.to_string()),
                        Field::text("Value", company_id.to_string()),
                    ],
                )),
                None => warn!(category = *name, "unknown category name skipped"),
            }
        }

        let service = self.client.service(Service::Company).await;
        service
            .call(SoapRequest::new("SaveCustomerCategories").element("categoryList", pairs))
            .await?;
        info!(company_id, count = names.len(), "customer categories saved");
        Ok(())
    }
}

fn search_fields(search: &CompanySearch) -> Vec<Field> {
    let mut fields = Vec::new();
    if let Some(company_id) = search.company_id {
        fields.push(Field::text("CompanyId", company_id.to_string()));
    }
    if let Some(name) = &search.company_name {
        fields.push(Field::text("CompanyName", name.clone()));
    }
    if let Some(changed_after) = search.changed_after {
        fields.push(Field::text("ChangedAfter", render_datetime(changed_after)));
    }
    fields
}

fn company_fields(company: &NewCompany) -> Vec<Field> {
    let mut fields = Vec::new();
    if let Some(id) = company.id {
        fields.push(Field::text("Id", id.to_string()));
    }
    fields.push(Field::text("Name", company.name.clone()));
    fields.push(Field::text("Type", company.company_type.as_str()));
    fields.push(Field::text("Country", company.country.clone()));
    fields.push(Field::text("InvoiceLanguage", company.invoice_language.clone()));
    if let Some(account_no) = &company.bank_account_no {
        fields.push(Field::text("BankAccountNo", account_no.clone()));
    }

    let mut emails = Vec::new();
    if let Some(work) = &company.email_work {
        emails.push(Field::element("Work", vec![Field::text("Value", work.clone())]));
    }
    if let Some(invoice) = &company.email_invoice {
        emails.push(Field::element("Invoice", vec![Field::text("Value", invoice.clone())]));
    }
    if !emails.is_empty() {
        fields.push(Field::element("EmailAddresses", emails));
    }

    if let Some(phone) = &company.phone_work {
        fields.push(Field::element(
            "PhoneNumbers",
            vec![Field::element("Work", vec![Field::text("Value", phone.clone())])],
        ));
    }

    fields
}

fn parse_company(fragment: &str) -> Result<Company> {
    let id = tag_int(fragment, "Id")
        .ok_or_else(|| TwentyFourError::Soap("company record carried no Id".into()))?
        as i32;
    Ok(Company {
        id,
        name: tag_text(fragment, "Name").unwrap_or_default(),
        company_type: tag_text(fragment, "Type").filter(|value| !value.is_empty()),
        country: tag_text(fragment, "Country").filter(|value| !value.is_empty()),
        organization_number: tag_text(fragment, "OrganizationNumber")
            .filter(|value| !value.is_empty()),
        bank_account_no: tag_text(fragment, "BankAccountNo").filter(|value| !value.is_empty()),
    })
}
