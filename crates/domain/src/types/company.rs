//! Company-related domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TwentyFourError};
use crate::types::project::{parse_datetime, parse_int};

/// Company type enumeration from the CRM schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    Supplier,
    Customer,
    Lead,
    Consumer,
}

impl CompanyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supplier => "Supplier",
            Self::Customer => "Customer",
            Self::Lead => "Lead",
            Self::Consumer => "Consumer",
        }
    }
}

/// Company record as returned by the CRM company service.
///
/// Only the fields this client reads back are modelled; the service returns
/// the properties requested on each search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub company_type: Option<String>,
    pub country: Option<String>,
    pub organization_number: Option<String>,
    pub bank_account_no: Option<String>,
}

/// Fields for creating or updating a company via `SaveCompanies`.
///
/// Setting `id` updates an existing company. Country and invoice language
/// default to `NO`, the company type to `Supplier`.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub id: Option<i32>,
    pub name: String,
    pub company_type: CompanyType,
    pub country: String,
    pub invoice_language: String,
    pub email_work: Option<String>,
    pub email_invoice: Option<String>,
    pub phone_work: Option<String>,
    pub bank_account_no: Option<String>,
}

impl NewCompany {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            company_type: CompanyType::Supplier,
            country: "NO".to_string(),
            invoice_language: "NO".to_string(),
            email_work: None,
            email_invoice: None,
            phone_work: None,
            bank_account_no: None,
        }
    }
}

/// Search criteria for `GetCompanies` (vendor fields `CompanyId`,
/// `CompanyName`, `ChangedAfter`). At least one criterion is required.
#[derive(Debug, Clone, Default)]
pub struct CompanySearch {
    pub company_id: Option<i32>,
    pub company_name: Option<String>,
    pub changed_after: Option<DateTime<Utc>>,
}

impl CompanySearch {
    pub fn by_id(company_id: i32) -> Self {
        Self { company_id: Some(company_id), ..Self::default() }
    }

    pub fn by_name(company_name: impl Into<String>) -> Self {
        Self { company_name: Some(company_name.into()), ..Self::default() }
    }

    /// Set a criterion by its vendor field name, rejecting unknown names.
    pub fn set(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "CompanyId" => self.company_id = Some(parse_int(field, value)?),
            "CompanyName" => self.company_name = Some(value.to_string()),
            "ChangedAfter" => self.changed_after = Some(parse_datetime(field, value)?),
            other => {
                return Err(TwentyFourError::InvalidInput(format!(
                    "unknown company search field: {other}"
                )))
            }
        }
        Ok(())
    }

    /// Whether any criterion is present.
    pub fn has_criteria(&self) -> bool {
        self.company_id.is_some() || self.company_name.is_some() || self.changed_after.is_some()
    }
}

/// Customer category (vendor `Category` with `Id` and `Name`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}
