//! Project-related domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TwentyFourError};

/// Project record as returned by the project service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub customer_id: Option<i32>,
    /// Rights-management version; `1` disables per-user rights.
    pub version: i32,
}

/// Search criteria for `GetProjectList`.
///
/// The service honours a single criterion per search; the vendor field
/// names are `CustomerId`, `Search`, `ChangedAfter`, `StartedAfter`,
/// `StartedBefore`, `MyProjects` and `AllOpenProjects`.
#[derive(Debug, Clone, Default)]
pub struct ProjectSearch {
    pub customer_id: Option<i32>,
    pub search: Option<String>,
    pub changed_after: Option<DateTime<Utc>>,
    pub started_after: Option<DateTime<Utc>>,
    pub started_before: Option<DateTime<Utc>>,
    pub my_projects: Option<bool>,
    pub all_open_projects: Option<bool>,
}

impl ProjectSearch {
    /// Set a criterion by its vendor field name.
    ///
    /// Unknown field names are rejected instead of being silently accepted;
    /// values must parse into the field's type.
    pub fn set(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "CustomerId" => self.customer_id = Some(parse_int(field, value)?),
            "Search" => self.search = Some(value.to_string()),
            "ChangedAfter" => self.changed_after = Some(parse_datetime(field, value)?),
            "StartedAfter" => self.started_after = Some(parse_datetime(field, value)?),
            "StartedBefore" => self.started_before = Some(parse_datetime(field, value)?),
            "MyProjects" => self.my_projects = Some(parse_bool(field, value)?),
            "AllOpenProjects" => self.all_open_projects = Some(parse_bool(field, value)?),
            other => {
                return Err(TwentyFourError::InvalidInput(format!(
                    "unknown project search field: {other}"
                )))
            }
        }
        Ok(())
    }
}

pub(crate) fn parse_int(field: &str, value: &str) -> Result<i32> {
    value.parse::<i32>().map_err(|e| {
        TwentyFourError::InvalidInput(format!("invalid value for {field}: {e}"))
    })
}

pub(crate) fn parse_bool(field: &str, value: &str) -> Result<bool> {
    value.parse::<bool>().map_err(|e| {
        TwentyFourError::InvalidInput(format!("invalid value for {field}: {e}"))
    })
}

pub(crate) fn parse_datetime(field: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| TwentyFourError::InvalidInput(format!("invalid value for {field}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_known_fields_by_name() {
        let mut search = ProjectSearch::default();
        search.set("CustomerId", "42").unwrap();
        search.set("MyProjects", "true").unwrap();
        search.set("ChangedAfter", "2024-01-15T00:00:00Z").unwrap();

        assert_eq!(search.customer_id, Some(42));
        assert_eq!(search.my_projects, Some(true));
        assert!(search.changed_after.is_some());
    }

    #[test]
    fn rejects_unknown_field_names() {
        let mut search = ProjectSearch::default();
        let err = search.set("CustomerName", "Acme").unwrap_err();
        assert!(matches!(err, TwentyFourError::InvalidInput(_)));
    }

    #[test]
    fn rejects_unparseable_values() {
        let mut search = ProjectSearch::default();
        let err = search.set("CustomerId", "not-a-number").unwrap_err();
        assert!(matches!(err, TwentyFourError::InvalidInput(_)));
    }
}
